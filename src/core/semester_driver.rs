use super::{DemandModel, Placer, ResourceIndex, TaskBuilder};
use crate::types::{Group, Placement, Room, ScheduleInput, SemesterResult, WeekSchedule};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Drives the week-by-week loop for one semester cohort: demand, task
/// building, and placement, freezing one `WeekSchedule` per iteration.
pub struct SemesterDriver;

impl SemesterDriver {
    /// Generate the full semester schedule for `semester`, restricted to the
    /// subset of `input.groups` whose `current_semester` equals `semester`.
    /// `cancelled` is polled between weeks; when set, generation stops and
    /// returns whatever weeks were already frozen.
    pub fn generate(semester: u32, input: &ScheduleInput, cancelled: &Arc<AtomicBool>, quiet: bool) -> SemesterResult {
        let start = Instant::now();
        let mut result = SemesterResult::new(semester);

        let groups: Vec<Group> = input
            .groups
            .iter()
            .filter(|g| g.current_semester == Some(semester))
            .cloned()
            .collect();

        let rooms = Self::rooms_with_gym(&input.rooms);
        let sizes: HashMap<_, _> = groups.iter().map(|g| (g.id.clone(), g.size)).collect();
        let size_fn = |id: &crate::types::GroupId| *sizes.get(id).unwrap_or(&25);

        let progress = if quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(input.rules.weeks as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} семестр {msg} [{bar:40.cyan/blue}] неделя {pos}/{len}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            pb.set_message(semester.to_string());
            pb
        };

        for week in 1..=input.rules.weeks {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }

            let demands = DemandModel::compute_week(week, input.rules.weeks, &groups, &input.load_entries);
            let tasks = TaskBuilder::build(&demands);

            let mut index = ResourceIndex::new();
            let mut placements: Vec<Placement> = Vec::new();

            for task in &tasks {
                let outcome = Placer::place(task, &mut index, &rooms, &size_fn, &input.rules, week);
                placements.extend(outcome.placements);
                result.unscheduled.extend(outcome.unscheduled);
            }

            result.weeks.push(WeekSchedule {
                week_number: week,
                placements,
            });

            progress.set_position(week as u64);
        }

        progress.finish_and_clear();
        result.metadata.solve_time_ms = start.elapsed().as_millis() as u64;
        result
    }

    /// Ensures a default gym room exists so sport tasks are always placeable
    /// when the input data carries no gym of its own.
    fn rooms_with_gym(rooms: &[Room]) -> Vec<Room> {
        let mut rooms = rooms.to_vec();
        if !rooms.iter().any(Room::is_gym) {
            rooms.push(Room::default_gym());
        }
        rooms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GroupId, LoadEntry, RoomId, RuleSet, SubjectName, TeacherName};

    fn input() -> ScheduleInput {
        ScheduleInput {
            groups: vec![Group {
                id: GroupId("G1".to_string()),
                current_semester: Some(1),
                size: 20,
            }],
            rooms: vec![Room {
                id: RoomId("101".to_string()),
                purpose: "Общая".to_string(),
                capacity: 30,
            }],
            load_entries: vec![LoadEntry {
                group_id: GroupId("G1".to_string()),
                semester: Some(1),
                teacher: TeacherName("Иванов И.И.".to_string()),
                subject: SubjectName("Математика".to_string()),
                hours: Some(48.0),
                excel_row: 2,
            }],
            rules: RuleSet {
                weeks: 4,
                ..RuleSet::default()
            },
        }
    }

    #[test]
    fn generates_one_week_schedule_per_week() {
        let cancelled = Arc::new(AtomicBool::new(false));
        let result = SemesterDriver::generate(1, &input(), &cancelled, true);
        assert_eq!(result.weeks.len(), 4);
        assert!(result.total_placements() > 0);
    }

    #[test]
    fn cancellation_stops_generation_early() {
        let cancelled = Arc::new(AtomicBool::new(true));
        let result = SemesterDriver::generate(1, &input(), &cancelled, true);
        assert!(result.weeks.is_empty());
    }

    #[test]
    fn groups_outside_the_semester_are_excluded() {
        let cancelled = Arc::new(AtomicBool::new(false));
        let result = SemesterDriver::generate(2, &input(), &cancelled, true);
        assert_eq!(result.total_placements(), 0);
    }
}
