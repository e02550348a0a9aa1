mod demand;
mod logic_precheck;
mod placer;
mod resource_index;
mod room_selector;
mod semester_driver;
mod slot_scorer;
mod task_builder;

pub use demand::*;
pub use logic_precheck::*;
pub use placer::*;
pub use resource_index::*;
pub use room_selector::*;
pub use semester_driver::*;
pub use slot_scorer::*;
pub use task_builder::*;

use crate::types::{MultiSemesterResult, ScheduleInput};
use std::collections::BTreeSet;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Top-level entry point: runs `LogicPrecheck`, then drives one
/// `SemesterDriver` per distinct semester found among the groups.
pub fn generate_schedule(input: &ScheduleInput, cancelled: &Arc<AtomicBool>, quiet: bool) -> crate::error::Result<MultiSemesterResult> {
    let issues = LogicPrecheck::run(&input.groups, &input.rooms, &input.load_entries, &input.rules);
    if !issues.is_empty() {
        return Err(crate::error::SchedulerError::PrecheckFailed { count: issues.len() }.into());
    }

    let semesters: BTreeSet<u32> = input.groups.iter().filter_map(|g| g.current_semester).collect();

    let mut result = MultiSemesterResult::default();
    for semester in semesters {
        if cancelled.load(std::sync::atomic::Ordering::Relaxed) {
            break;
        }
        result.semesters.push(SemesterDriver::generate(semester, input, cancelled, quiet));
    }

    Ok(result)
}
