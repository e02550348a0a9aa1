use super::GroupId;
use serde::{Deserialize, Serialize};

fn default_size() -> u32 {
    25
}

/// A student cohort that shares its own weekly grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    /// The semester this group is currently studying. Only `LoadEntry`
    /// rows whose `semester` matches this value contribute to placement
    /// for this group.
    pub current_semester: Option<u32>,
    #[serde(default = "default_size")]
    pub size: u32,
}

impl Group {
    pub fn is_valid(&self) -> bool {
        self.size > 0
    }
}
