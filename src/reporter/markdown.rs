use crate::core::PrecheckIssue;
use crate::types::{Placement, ScheduleInput, SemesterResult};

/// Render a semester's schedule as a markdown document: one table per
/// (week, day), plus unscheduled-demand and precheck sections when present.
pub fn generate_markdown_report(semester: &SemesterResult, input: &ScheduleInput, precheck: &[PrecheckIssue]) -> String {
    let mut lines = vec![
        format!("# Расписание — семестр {}", semester.semester),
        String::new(),
        format!("Generated: {}", semester.metadata.generated_at),
        format!("Algorithm: v{}", semester.metadata.algorithm_version),
        format!("Solve time: {}ms", semester.metadata.solve_time_ms),
        String::new(),
    ];

    if !precheck.is_empty() {
        lines.push("## Precheck Issues\n".to_string());
        lines.push("| Code | Row | Message |".to_string());
        lines.push("|------|-----|---------|".to_string());
        for issue in precheck {
            let row = issue.excel_row.map(|r| r.to_string()).unwrap_or_default();
            lines.push(format!("| {} | {} | {} |", issue.code, row, issue.message));
        }
        lines.push(String::new());
    }

    lines.push("## Summary\n".to_string());
    lines.push("| Metric | Value |".to_string());
    lines.push("|--------|-------|".to_string());
    lines.push(format!("| Total Placements | {} |", semester.total_placements()));
    lines.push(format!("| Unscheduled | {} |", semester.unscheduled.len()));
    lines.push(String::new());

    for week in &semester.weeks {
        lines.push(format!("## Неделя {}\n", week.week_number));

        for day in 1..=input.rules.days_per_week {
            let day_placements: Vec<&Placement> = week.placements.iter().filter(|p| p.day == day).collect();
            if day_placements.is_empty() {
                continue;
            }

            lines.push(format!("### {}\n", Placement::day_name(day)));
            lines.push("| Пара | Группы | Дисциплина | Преподаватель | Аудитория |".to_string());
            lines.push("|------|--------|------------|----------------|-----------|".to_string());

            let mut sorted = day_placements;
            sorted.sort_by_key(|p| p.pair);
            for placement in sorted {
                let groups: Vec<String> = placement.groups.iter().map(|g| g.0.clone()).collect();
                lines.push(format!(
                    "| {} | {} | {} | {} | {} |{}",
                    placement.pair,
                    groups.join(", "),
                    placement.subject,
                    placement.teacher,
                    placement.room,
                    if placement.forced { " (forced)" } else { "" }
                ));
            }
            lines.push(String::new());
        }
    }

    if !semester.unscheduled.is_empty() {
        lines.push("## Unscheduled Demand\n".to_string());
        lines.push("| Week | Groups | Subject | Teacher | Reason |".to_string());
        lines.push("|------|--------|---------|---------|--------|".to_string());
        for u in &semester.unscheduled {
            let groups: Vec<String> = u.groups.iter().map(|g| g.0.clone()).collect();
            lines.push(format!("| {} | {} | {} | {} | {} |", u.week, groups.join(", "), u.subject, u.teacher, u.reason));
        }
    }

    lines.join("\n")
}
