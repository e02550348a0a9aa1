use super::resource_index::ResourceIndex;
use crate::types::GroupId;

/// Fixed scoring weights. Exposed as constants so callers can see the
/// reference values that reproduce the spec's reference behavior; treated
/// as a configuration surface rather than hardwired magic numbers.
pub const EDGE_PENALTY: i64 = 5;
pub const WINDOW_PENALTY: i64 = 100;
pub const ADJACENT_BONUS: i64 = -50;
pub const EARLY_START_BONUS: i64 = -10;

/// Heuristic cost for placing a task at (day, pair). Lower is better.
pub struct SlotScorer;

impl SlotScorer {
    pub fn score(index: &ResourceIndex, day: u8, pair: u8, max_pairs: u8, groups: &[GroupId]) -> i64 {
        let mut score = 0_i64;

        if pair == 1 || pair == max_pairs {
            score += EDGE_PENALTY;
        }

        let mut has_adjacent = false;
        let mut creates_window = false;

        for group in groups {
            let occ = index.pairs_of(day, group);
            if occ.is_empty() {
                if pair == 2 || pair == 3 {
                    score += EARLY_START_BONUS;
                }
                continue;
            }

            if occ.contains(&pair.saturating_sub(1)) || occ.contains(&(pair + 1)) {
                has_adjacent = true;
            }

            let min_p = *occ.iter().min().unwrap().min(&pair);
            let max_p = *occ.iter().max().unwrap().max(&pair);
            let span = (max_p - min_p + 1) as usize;
            if span > occ.len() + 1 {
                creates_window = true;
            }
        }

        if creates_window {
            score += WINDOW_PENALTY;
        }
        if has_adjacent {
            score += ADJACENT_BONUS;
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Placement, SubjectName, TeacherName};

    fn commit(index: &mut ResourceIndex, day: u8, pair: u8, group: &str) {
        index.commit(&Placement {
            day,
            pair,
            room: crate::types::RoomId("R".to_string()),
            groups: vec![GroupId(group.to_string())],
            subject: SubjectName("S".to_string()),
            teacher: TeacherName("T".to_string()),
            is_flow: false,
            forced: false,
        });
    }

    #[test]
    fn empty_day_prefers_mid_morning_start() {
        let index = ResourceIndex::new();
        let groups = vec![GroupId("A".to_string())];
        let score_early = SlotScorer::score(&index, 1, 2, 5, &groups);
        let score_first = SlotScorer::score(&index, 1, 4, 5, &groups);
        assert!(score_early < score_first);
    }

    #[test]
    fn adjacent_slot_scores_better_than_gapped_slot() {
        let mut index = ResourceIndex::new();
        commit(&mut index, 1, 2, "A");
        let groups = vec![GroupId("A".to_string())];

        let adjacent_score = SlotScorer::score(&index, 1, 3, 5, &groups);
        let window_score = SlotScorer::score(&index, 1, 5, 5, &groups);
        assert!(adjacent_score < window_score);
    }

    #[test]
    fn edge_pairs_are_penalized() {
        let index = ResourceIndex::new();
        let groups = vec![GroupId("A".to_string())];
        let edge = SlotScorer::score(&index, 1, 1, 5, &groups);
        let middle = SlotScorer::score(&index, 1, 3, 5, &groups);
        // Edge carries its own +5 penalty but no mid-morning bonus vs. pair 3's -10.
        assert!(edge > middle);
    }
}
