use super::{GroupId, RoomId, SubjectName, TeacherName};
use serde::{Deserialize, Serialize};

/// A committed (day, pair) assignment for one task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    /// 1-based day index, `1..=days_per_week`.
    pub day: u8,
    /// 1-based pair index, `1..=max_pairs_per_day`.
    pub pair: u8,
    pub room: RoomId,
    pub groups: Vec<GroupId>,
    pub subject: SubjectName,
    pub teacher: TeacherName,
    pub is_flow: bool,
    /// True if this placement was only achievable via the relaxed
    /// (Pass 2) placement pass.
    pub forced: bool,
}

impl Placement {
    pub fn day_name(day: u8) -> &'static str {
        match day {
            1 => "ПОНЕДЕЛЬНИК",
            2 => "ВТОРНИК",
            3 => "СРЕДА",
            4 => "ЧЕТВЕРГ",
            5 => "ПЯТНИЦА",
            _ => "UNKNOWN",
        }
    }

    /// 1 for pairs before the lunch cutover (pair < 4), 2 otherwise.
    pub fn shift(pair: u8) -> u8 {
        if pair < 4 {
            1
        } else {
            2
        }
    }
}

/// A reason an expected lesson could not be placed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnscheduledDemand {
    pub week: u32,
    pub groups: Vec<GroupId>,
    pub subject: SubjectName,
    pub teacher: TeacherName,
    pub reason: String,
}
