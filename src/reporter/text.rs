use crate::core::PrecheckIssue;
use crate::types::{Placement, ScheduleInput, SemesterResult};
use colored::Colorize;

/// Render a semester's schedule as plain text, colored for terminal display.
pub fn generate_text_report(semester: &SemesterResult, input: &ScheduleInput, precheck: &[PrecheckIssue]) -> String {
    let mut lines = Vec::new();

    lines.push("═".repeat(60));
    lines.push(format!("          РАСПИСАНИЕ — СЕМЕСТР {}", semester.semester));
    lines.push("═".repeat(60));
    lines.push(String::new());

    lines.push(format!("Generated: {}", semester.metadata.generated_at));
    lines.push(format!("Solve Time: {}ms", semester.metadata.solve_time_ms));
    lines.push(String::new());

    lines.push("─".repeat(40));
    lines.push("STATISTICS".to_string());
    lines.push("─".repeat(40));
    lines.push(format!("  Placements:   {}", semester.total_placements()));
    lines.push(format!("  Unscheduled:  {}", semester.unscheduled.len()));
    lines.push(String::new());

    lines.push("─".repeat(40));
    if precheck.is_empty() {
        lines.push("PRECHECK: PASSED".green().to_string());
    } else {
        lines.push("PRECHECK: ISSUES FOUND".red().to_string());
        for issue in precheck {
            lines.push(format!("  ! {}: {}", issue.code, issue.message));
        }
    }
    lines.push("─".repeat(40));
    lines.push(String::new());

    for week in &semester.weeks {
        lines.push(format!("Неделя {}", week.week_number).bold().to_string());

        for day in 1..=input.rules.days_per_week {
            let mut day_placements: Vec<&Placement> = week.placements.iter().filter(|p| p.day == day).collect();
            if day_placements.is_empty() {
                continue;
            }
            day_placements.sort_by_key(|p| p.pair);

            lines.push(format!("  {}", Placement::day_name(day)));
            for placement in day_placements {
                let groups: Vec<String> = placement.groups.iter().map(|g| g.0.clone()).collect();
                let marker = if placement.forced { "●".yellow() } else { "●".green() };
                lines.push(format!(
                    "    {} пара {} | {} | {} | {} | {}",
                    marker,
                    placement.pair,
                    groups.join(", "),
                    placement.subject,
                    placement.teacher,
                    placement.room
                ));
            }
        }
        lines.push(String::new());
    }

    lines.push("═".repeat(60));
    lines.join("\n")
}

/// Print a short summary to stdout.
pub fn print_summary(semester: &SemesterResult) {
    println!();
    if semester.unscheduled.is_empty() {
        println!("{}", "✓ Schedule generated successfully".green().bold());
    } else {
        println!("{}", "✗ Schedule has unscheduled demand".red().bold());
    }
    println!();
    println!("  Semester:     {}", semester.semester);
    println!("  Placements:   {}", semester.total_placements());
    println!("  Unscheduled:  {}", semester.unscheduled.len());
    println!("  Time:         {}ms", semester.metadata.solve_time_ms);
    println!();
}
