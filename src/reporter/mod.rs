mod json;
mod markdown;
mod text;

pub use json::*;
pub use markdown::*;
pub use text::*;

use crate::core::PrecheckIssue;
use crate::error::Result;
use crate::types::{GroupId, Placement, ScheduleInput, SemesterResult, TeacherName};
use std::fs;
use std::path::Path;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Text,
}

/// Generate all requested report formats for one semester and write them to
/// `output_dir`.
pub fn generate_reports(
    semester: &SemesterResult,
    input: &ScheduleInput,
    precheck: &[PrecheckIssue],
    output_dir: &Path,
    formats: &[OutputFormat],
) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    for format in formats {
        match format {
            OutputFormat::Json => {
                let json = generate_json_report(semester, input)?;
                fs::write(output_dir.join(format!("schedule_{}.json", semester.semester)), json)?;
            }
            OutputFormat::Markdown => {
                let md = generate_markdown_report(semester, input, precheck);
                fs::write(output_dir.join(format!("schedule_{}.md", semester.semester)), md)?;
            }
            OutputFormat::Text => {
                let txt = generate_text_report(semester, input, precheck);
                fs::write(output_dir.join(format!("schedule_{}.txt", semester.semester)), txt)?;
            }
        }
    }

    Ok(())
}

/// Render one group's individual schedule across every week of `semester`.
pub fn generate_group_schedule(semester: &SemesterResult, group: &GroupId) -> Option<String> {
    let mut lines = vec![format!("# Schedule for group {}", group), String::new()];

    let mut any = false;
    for week in &semester.weeks {
        let placements: Vec<&Placement> = week.placements.iter().filter(|p| p.groups.contains(group)).collect();
        if placements.is_empty() {
            continue;
        }
        any = true;

        lines.push(format!("## Неделя {}\n", week.week_number));
        let mut sorted = placements;
        sorted.sort_by_key(|p| (p.day, p.pair));
        for placement in sorted {
            lines.push(format!(
                "- {} пара {}: {} ({}) — {}",
                Placement::day_name(placement.day),
                placement.pair,
                placement.subject,
                placement.teacher,
                placement.room
            ));
        }
        lines.push(String::new());
    }

    if !any {
        lines.push("No placements for this group.".to_string());
    }

    Some(lines.join("\n"))
}

/// Render one teacher's individual schedule across every week of `semester`.
pub fn generate_teacher_schedule(semester: &SemesterResult, teacher: &TeacherName) -> Option<String> {
    let mut lines = vec![format!("# Schedule for {}", teacher), String::new()];

    let mut any = false;
    for week in &semester.weeks {
        let placements: Vec<&Placement> = week.placements.iter().filter(|p| &p.teacher == teacher).collect();
        if placements.is_empty() {
            continue;
        }
        any = true;

        lines.push(format!("## Неделя {}\n", week.week_number));
        let mut sorted = placements;
        sorted.sort_by_key(|p| (p.day, p.pair));
        for placement in sorted {
            let groups: Vec<String> = placement.groups.iter().map(|g| g.0.clone()).collect();
            lines.push(format!(
                "- {} пара {}: {} ({}) — {}",
                Placement::day_name(placement.day),
                placement.pair,
                placement.subject,
                groups.join(", "),
                placement.room
            ));
        }
        lines.push(String::new());
    }

    if !any {
        lines.push("No placements for this teacher.".to_string());
    }

    Some(lines.join("\n"))
}
