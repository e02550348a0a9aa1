use crate::types::{Group, GroupId, LoadEntry, WeeklyDemand};
use std::collections::HashMap;

/// One pair is 1.5 hours (90 minutes). This divisor is fixed regardless of
/// `RuleSet::hours_are_academic` — see the Open Question in `DESIGN.md`
/// about the preserved hours-unit inconsistency between this model and
/// `LogicPrecheck`.
const PAIR_DURATION_HOURS: f64 = 1.5;

/// Computes per-week lesson counts from yearly hours using cumulative
/// rounding, so totals over the semester never drift from the linear ideal.
pub struct DemandModel;

impl DemandModel {
    /// Compute the weekly demand list for week `w` (1-based), restricted to
    /// load entries whose `semester` matches the owning group's
    /// `current_semester`. Entries computing to zero pairs this week are
    /// omitted.
    pub fn compute_week(week: u32, weeks: u32, groups: &[Group], load_entries: &[LoadEntry]) -> Vec<WeeklyDemand> {
        let current_semester: HashMap<&GroupId, Option<u32>> = groups
            .iter()
            .map(|g| (&g.id, g.current_semester))
            .collect();

        let mut demands = Vec::new();

        for entry in load_entries {
            let group_semester = match current_semester.get(&entry.group_id) {
                Some(sem) => *sem,
                None => continue, // unknown group: not placed, reported by LogicPrecheck
            };

            let entry_semester = match entry.semester {
                Some(s) if s >= 0 => Some(s as u32),
                _ => continue,
            };

            if group_semester != entry_semester {
                continue;
            }

            let hours = match entry.hours {
                Some(h) if h > 0.0 => h,
                _ => continue,
            };

            let pairs_this_week = Self::pairs_in_week(hours, week, weeks);
            if pairs_this_week == 0 {
                continue;
            }

            demands.push(WeeklyDemand {
                group: entry.group_id.clone(),
                subject: entry.subject.clone(),
                teacher: entry.teacher.clone(),
                is_sport: entry.is_sport(),
                pairs_this_week,
            });
        }

        demands
    }

    /// `ceil(total * w / W) - ceil(total * (w-1) / W)` where
    /// `total = ceil(hours / 1.5)`.
    pub fn pairs_in_week(hours: f64, week: u32, weeks: u32) -> u32 {
        let total_pairs_sem = (hours / PAIR_DURATION_HOURS).ceil() as i64;
        let cum_now = div_ceil(total_pairs_sem * week as i64, weeks as i64);
        let cum_prev = div_ceil(total_pairs_sem * (week.saturating_sub(1)) as i64, weeks as i64);
        (cum_now - cum_prev).max(0) as u32
    }
}

fn div_ceil(numerator: i64, denominator: i64) -> i64 {
    if denominator == 0 {
        return 0;
    }
    (numerator + denominator - 1).div_euclid(denominator)
}
