use crate::types::{Group, LoadEntry, Room, RuleSet};
use std::collections::HashMap;

/// One feasibility-bound violation found before any placement is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecheckIssue {
    pub code: &'static str,
    pub excel_row: Option<usize>,
    pub message: String,
}

/// A precheck pass over the full input, bounding obvious infeasibility
/// (unknown groups, bad semesters/hours, room capacity, and weekly overload)
/// before the week-by-week placer ever runs.
///
/// Uses the academic 45-minute-per-hour divisor unconditionally, independent
/// of `RuleSet::hours_are_academic` and of `DemandModel`'s fixed 1.5-hour
/// pair length — the two models intentionally disagree on units.
pub struct LogicPrecheck;

impl LogicPrecheck {
    pub fn run(groups: &[Group], rooms: &[Room], load_entries: &[LoadEntry], rules: &RuleSet) -> Vec<PrecheckIssue> {
        let mut issues = Vec::new();

        let group_size: HashMap<&str, u32> = groups.iter().map(|g| (g.id.0.as_str(), g.size)).collect();
        let group_semester: HashMap<&str, Option<u32>> = groups.iter().map(|g| (g.id.0.as_str(), g.current_semester)).collect();

        let max_capacity = rooms.iter().map(|r| r.capacity).max().unwrap_or(0);
        for (group, size) in &group_size {
            if max_capacity > 0 && *size > max_capacity {
                issues.push(PrecheckIssue {
                    code: "NO_ROOM_FOR_GROUP",
                    excel_row: None,
                    message: format!("group '{group}' has size {size}, but the largest room holds {max_capacity}"),
                });
            }
        }

        let mut weekly_pairs_by_group: HashMap<String, u32> = HashMap::new();
        let mut weekly_pairs_by_teacher: HashMap<String, u32> = HashMap::new();
        let minutes_per_hour = 45;
        let slots_per_week = rules.slots_per_week();

        for entry in load_entries {
            if !group_semester.contains_key(entry.group_id.0.as_str()) {
                issues.push(PrecheckIssue {
                    code: "UNKNOWN_GROUP",
                    excel_row: Some(entry.excel_row),
                    message: format!("group '{}' is not declared among the known groups", entry.group_id.0),
                });
                continue;
            }

            if !entry.semester_is_valid() {
                issues.push(PrecheckIssue {
                    code: "SEMESTER_INVALID",
                    excel_row: Some(entry.excel_row),
                    message: format!("invalid semester {:?} for group '{}'", entry.semester, entry.group_id.0),
                });
                continue;
            }

            if !entry.hours_is_valid() {
                issues.push(PrecheckIssue {
                    code: "HOURS_INVALID",
                    excel_row: Some(entry.excel_row),
                    message: format!("invalid hours {:?} for group '{}'", entry.hours, entry.group_id.0),
                });
                continue;
            }

            let current_semester = match group_semester.get(entry.group_id.0.as_str()).copied().flatten() {
                Some(s) => s,
                None => continue,
            };

            if entry.semester != Some(current_semester as i64) {
                continue;
            }

            let total_minutes = entry.hours.unwrap() * minutes_per_hour as f64;
            let total_pairs_sem = (total_minutes / rules.pair_minutes() as f64).ceil() as u32;
            let pairs_per_week = total_pairs_sem.div_ceil(rules.weeks.max(1));

            *weekly_pairs_by_group.entry(entry.group_id.0.clone()).or_insert(0) += pairs_per_week;
            *weekly_pairs_by_teacher.entry(entry.teacher.0.clone()).or_insert(0) += pairs_per_week;
        }

        let mut overloaded_groups: Vec<_> = weekly_pairs_by_group.into_iter().collect();
        overloaded_groups.sort();
        for (group, pairs) in overloaded_groups {
            if pairs > slots_per_week {
                issues.push(PrecheckIssue {
                    code: "GROUP_OVERLOAD_WEEKLY",
                    excel_row: None,
                    message: format!("group '{group}' needs ~{pairs} pairs/week but only {slots_per_week} slots exist"),
                });
            }
        }

        let mut overloaded_teachers: Vec<_> = weekly_pairs_by_teacher.into_iter().collect();
        overloaded_teachers.sort();
        for (teacher, pairs) in overloaded_teachers {
            if pairs > slots_per_week {
                issues.push(PrecheckIssue {
                    code: "TEACHER_OVERLOAD_WEEKLY",
                    excel_row: None,
                    message: format!("teacher '{teacher}' needs ~{pairs} pairs/week but only {slots_per_week} slots exist"),
                });
            }
        }

        issues
    }
}
