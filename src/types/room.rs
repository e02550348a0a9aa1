use super::RoomId;
use serde::{Deserialize, Serialize};

fn default_capacity() -> u32 {
    30
}

/// A physical room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Free-form purpose/usage text (e.g. "Физра", "Общая").
    #[serde(default)]
    pub purpose: String,
    #[serde(default = "default_capacity")]
    pub capacity: u32,
}

impl Room {
    /// True iff the identifier contains "спорт" (case-insensitive) or the
    /// purpose text contains "физра" (case-insensitive).
    pub fn is_gym(&self) -> bool {
        self.id.0.to_lowercase().contains("спорт") || self.purpose.to_lowercase().contains("физра")
    }

    pub fn is_valid(&self) -> bool {
        // capacity is an unsigned integer; the only invariant is expressible
        // representation-wide (capacity >= 0), always true for u32.
        true
    }

    /// Build the default gym room synthesized when no room in the table
    /// matches the sport-identifier heuristic.
    pub fn default_gym() -> Self {
        Self {
            id: RoomId("Спорт зал".to_string()),
            purpose: "Физра".to_string(),
            capacity: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_gym_by_id() {
        let room = Room {
            id: RoomId("Спортзал №1".to_string()),
            purpose: String::new(),
            capacity: 60,
        };
        assert!(room.is_gym());
    }

    #[test]
    fn detects_gym_by_purpose() {
        let room = Room {
            id: RoomId("201".to_string()),
            purpose: "ФИЗРА".to_string(),
            capacity: 40,
        };
        assert!(room.is_gym());
    }

    #[test]
    fn regular_room_is_not_gym() {
        let room = Room {
            id: RoomId("101".to_string()),
            purpose: "Общая".to_string(),
            capacity: 30,
        };
        assert!(!room.is_gym());
    }
}
