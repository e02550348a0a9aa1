use super::{Group, LoadEntry, Room, RuleSet, UnscheduledDemand};
use serde::{Deserialize, Serialize};

/// All input data bundled together, immutable once loaded.
#[derive(Debug, Clone)]
pub struct ScheduleInput {
    pub groups: Vec<Group>,
    pub rooms: Vec<Room>,
    pub load_entries: Vec<LoadEntry>,
    pub rules: RuleSet,
}

/// The frozen schedule for a single week within one semester.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WeekSchedule {
    pub week_number: u32,
    pub placements: Vec<super::Placement>,
}

/// Metadata about the generated schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    pub generated_at: String,
    pub algorithm_version: String,
    pub solve_time_ms: u64,
}

impl Default for ScheduleMetadata {
    fn default() -> Self {
        Self {
            generated_at: String::new(),
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            solve_time_ms: 0,
        }
    }
}

/// The complete generated schedule for one semester cohort.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SemesterResult {
    pub semester: u32,
    pub weeks: Vec<WeekSchedule>,
    pub unscheduled: Vec<UnscheduledDemand>,
    pub metadata: ScheduleMetadata,
}

impl SemesterResult {
    pub fn new(semester: u32) -> Self {
        Self {
            semester,
            weeks: Vec::new(),
            unscheduled: Vec::new(),
            metadata: ScheduleMetadata {
                generated_at: chrono::Utc::now().to_rfc3339(),
                ..ScheduleMetadata::default()
            },
        }
    }

    pub fn total_placements(&self) -> usize {
        self.weeks.iter().map(|w| w.placements.len()).sum()
    }
}

/// All semesters generated from one input file, keyed by semester id.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MultiSemesterResult {
    pub semesters: Vec<SemesterResult>,
}
