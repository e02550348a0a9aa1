use super::resource_index::ResourceIndex;
use super::room_selector::RoomSelector;
use super::slot_scorer::SlotScorer;
use crate::types::{GroupId, Placement, Room, RuleSet, Task, UnscheduledDemand};

/// Daily-load ceiling and room-capacity tolerance for one placement pass.
struct PassLimits {
    daily_load_limit: usize,
    tolerance: i64,
    score: bool,
    forced: bool,
}

const STRICT: PassLimits = PassLimits {
    daily_load_limit: 4,
    tolerance: 0,
    score: true,
    forced: false,
};

const RELAXED: PassLimits = PassLimits {
    daily_load_limit: 5,
    tolerance: 8,
    score: false,
    forced: true,
};

/// Outcome of attempting to place one task: the placements actually
/// committed into the index (one, or two for a split flow) and any part of
/// the task that could not be placed at all.
#[derive(Debug, Default)]
pub struct PlaceOutcome {
    pub placements: Vec<Placement>,
    pub unscheduled: Vec<UnscheduledDemand>,
}

/// State-free two-pass placement: strict then relaxed, with flow splitting
/// on failure.
pub struct Placer;

impl Placer {
    /// Attempt to place `task` during `week`, committing into `index` on
    /// success.
    pub fn place(
        task: &Task,
        index: &mut ResourceIndex,
        rooms: &[Room],
        group_size: &impl Fn(&GroupId) -> u32,
        rules: &RuleSet,
        week: u32,
    ) -> PlaceOutcome {
        if let Some(placement) = Self::try_both_passes(task, index, rooms, group_size, rules) {
            return PlaceOutcome {
                placements: vec![placement],
                unscheduled: Vec::new(),
            };
        }

        if task.is_flow() {
            let mut outcome = PlaceOutcome::default();
            for group in &task.groups {
                let solo = Task {
                    groups: vec![group.clone()],
                    subject: task.subject.clone(),
                    teacher: task.teacher.clone(),
                    is_sport: task.is_sport,
                };
                match Self::try_both_passes(&solo, index, rooms, group_size, rules) {
                    Some(placement) => outcome.placements.push(placement),
                    None => outcome.unscheduled.push(UnscheduledDemand {
                        week,
                        groups: vec![group.clone()],
                        subject: task.subject.clone(),
                        teacher: task.teacher.clone(),
                        reason: "No Room/Time".to_string(),
                    }),
                }
            }
            outcome
        } else {
            PlaceOutcome {
                placements: Vec::new(),
                unscheduled: vec![UnscheduledDemand {
                    week,
                    groups: task.groups.clone(),
                    subject: task.subject.clone(),
                    teacher: task.teacher.clone(),
                    reason: "No Room/Time".to_string(),
                }],
            }
        }
    }

    fn try_both_passes(
        task: &Task,
        index: &mut ResourceIndex,
        rooms: &[Room],
        group_size: &impl Fn(&GroupId) -> u32,
        rules: &RuleSet,
    ) -> Option<Placement> {
        if let Some(commit) = Self::scan(task, index, rooms, group_size, rules, &STRICT) {
            index.commit(&commit);
            return Some(commit);
        }
        if let Some(commit) = Self::scan(task, index, rooms, group_size, rules, &RELAXED) {
            index.commit(&commit);
            return Some(commit);
        }
        None
    }

    /// Scan the full (day, pair) grid under the given pass limits. Strict
    /// passes track the minimum-score slot across the whole grid before
    /// committing; relaxed passes commit the first feasible slot.
    fn scan(
        task: &Task,
        index: &ResourceIndex,
        rooms: &[Room],
        group_size: &impl Fn(&GroupId) -> u32,
        rules: &RuleSet,
        limits: &PassLimits,
    ) -> Option<Placement> {
        let total_students = task.total_size(group_size);
        let anchor_group = &task.groups[0];

        let mut best: Option<(i64, Placement)> = None;

        for day in 1..=rules.days_per_week {
            if index.daily_load(day, anchor_group) >= limits.daily_load_limit {
                continue;
            }

            for pair in 1..=rules.max_pairs_per_day {
                if !index.free_for(day, pair, &task.groups, &task.teacher) {
                    continue;
                }

                let occupied_rooms = index.rooms_busy_at(day, pair);
                let room = match RoomSelector::select(rooms, total_students, task.is_sport, &occupied_rooms, limits.tolerance) {
                    Some(r) => r,
                    None => continue,
                };

                let placement = Placement {
                    day,
                    pair,
                    room: room.id.clone(),
                    groups: task.groups.clone(),
                    subject: task.subject.clone(),
                    teacher: task.teacher.clone(),
                    is_flow: task.is_flow(),
                    forced: limits.forced,
                };

                if !limits.score {
                    return Some(placement);
                }

                let score = SlotScorer::score(index, day, pair, rules.max_pairs_per_day, &task.groups);
                if best.as_ref().map(|(s, _)| score < *s).unwrap_or(true) {
                    best = Some((score, placement));
                }
            }
        }

        best.map(|(_, p)| p)
    }
}
