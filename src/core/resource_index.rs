use crate::types::{GroupId, Placement, RoomId, TeacherName};
use std::collections::{HashMap, HashSet};

/// Three occupancy maps (teacher, group, room) over the (day, pair) grid for
/// a single week, owned exclusively by the week's `SemesterDriver` loop
/// iteration. Constructed empty, mutated only through `commit`, and
/// discarded once the week is frozen.
#[derive(Debug, Default)]
pub struct ResourceIndex {
    teachers_busy: HashMap<(u8, u8), HashSet<TeacherName>>,
    rooms_busy: HashMap<(u8, u8), HashSet<RoomId>>,
    groups_busy: HashMap<(u8, u8), HashSet<GroupId>>,
    /// day, group -> set of occupied pair indices
    group_pairs: HashMap<(u8, GroupId), HashSet<u8>>,
}

impl ResourceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `teacher` and every group in `groups` are free at (day, pair).
    pub fn free_for(&self, day: u8, pair: u8, groups: &[GroupId], teacher: &TeacherName) -> bool {
        if self
            .teachers_busy
            .get(&(day, pair))
            .map(|s| s.contains(teacher))
            .unwrap_or(false)
        {
            return false;
        }

        if let Some(busy) = self.groups_busy.get(&(day, pair)) {
            if groups.iter().any(|g| busy.contains(g)) {
                return false;
            }
        }

        true
    }

    /// The set of rooms occupied at (day, pair).
    pub fn rooms_busy_at(&self, day: u8, pair: u8) -> HashSet<RoomId> {
        self.rooms_busy.get(&(day, pair)).cloned().unwrap_or_default()
    }

    /// The set of pair indices currently occupied for `group` on `day`.
    pub fn pairs_of(&self, day: u8, group: &GroupId) -> HashSet<u8> {
        self.group_pairs
            .get(&(day, group.clone()))
            .cloned()
            .unwrap_or_default()
    }

    /// Number of pairs occupied for `group` on `day` (quick-reject counter).
    pub fn daily_load(&self, day: u8, group: &GroupId) -> usize {
        self.group_pairs.get(&(day, group.clone())).map(|s| s.len()).unwrap_or(0)
    }

    /// Commit a placement, updating all three occupancy maps and the daily
    /// counter. Invariant maintained: no (day, pair) ends up with two
    /// placements for the same teacher, room, or group.
    pub fn commit(&mut self, placement: &Placement) {
        let key = (placement.day, placement.pair);

        self.teachers_busy
            .entry(key)
            .or_default()
            .insert(placement.teacher.clone());

        self.rooms_busy.entry(key).or_default().insert(placement.room.clone());

        let groups_busy = self.groups_busy.entry(key).or_default();
        for group in &placement.groups {
            groups_busy.insert(group.clone());
            self.group_pairs
                .entry((placement.day, group.clone()))
                .or_default()
                .insert(placement.pair);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SubjectName;

    fn placement(day: u8, pair: u8, groups: Vec<&str>, teacher: &str, room: &str) -> Placement {
        Placement {
            day,
            pair,
            room: RoomId(room.to_string()),
            groups: groups.into_iter().map(|g| GroupId(g.to_string())).collect(),
            subject: SubjectName("Subj".to_string()),
            teacher: TeacherName(teacher.to_string()),
            is_flow: false,
            forced: false,
        }
    }

    #[test]
    fn commit_blocks_teacher_group_and_is_reflected_in_pairs_of() {
        let mut idx = ResourceIndex::new();
        idx.commit(&placement(1, 1, vec!["A"], "T1", "R1"));

        assert!(!idx.free_for(1, 1, &[GroupId("A".to_string())], &TeacherName("T1".to_string())));
        assert!(!idx.free_for(1, 1, &[GroupId("B".to_string())], &TeacherName("T1".to_string())));
        assert!(idx.free_for(1, 2, &[GroupId("A".to_string())], &TeacherName("T1".to_string())));

        let occupied = idx.pairs_of(1, &GroupId("A".to_string()));
        assert_eq!(occupied, HashSet::from([1]));
        assert_eq!(idx.daily_load(1, &GroupId("A".to_string())), 1);
    }

    #[test]
    fn flow_commits_both_groups() {
        let mut idx = ResourceIndex::new();
        idx.commit(&placement(1, 1, vec!["A", "B"], "T1", "R1"));

        assert!(!idx.free_for(1, 1, &[GroupId("A".to_string())], &TeacherName("T2".to_string())));
        assert!(!idx.free_for(1, 1, &[GroupId("B".to_string())], &TeacherName("T2".to_string())));
    }
}
