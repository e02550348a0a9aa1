use super::{GroupId, SubjectName, TeacherName};
use serde::{Deserialize, Serialize};

/// A single group's computed lesson count for one week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyDemand {
    pub group: GroupId,
    pub subject: SubjectName,
    pub teacher: TeacherName,
    pub is_sport: bool,
    pub pairs_this_week: u32,
}

impl WeeklyDemand {
    /// Key grouping identical (subject, teacher, sport-flag) demands so
    /// they can be flow-merged or deduplicated within a week.
    pub fn fingerprint(&self) -> String {
        format!("{}_{}_{}", self.subject.0, self.teacher.0, self.is_sport)
    }
}

/// A unit of work submitted to the Placer: either a flow (two groups
/// sharing one lecture) or a solo demand for one group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub groups: Vec<GroupId>,
    pub subject: SubjectName,
    pub teacher: TeacherName,
    pub is_sport: bool,
}

impl Task {
    pub fn is_flow(&self) -> bool {
        self.groups.len() == 2
    }

    pub fn total_size(&self, group_size: impl Fn(&GroupId) -> u32) -> u32 {
        self.groups.iter().map(group_size).sum()
    }
}
