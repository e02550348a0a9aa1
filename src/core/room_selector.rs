use crate::types::Room;
use std::collections::HashSet;

/// Capacity/type-aware room choice with tolerance.
pub struct RoomSelector;

impl RoomSelector {
    /// Select a room for `required_capacity` students.
    ///
    /// `is_sport`: restrict the choice to the first non-occupied gym room.
    /// Otherwise gym rooms are excluded entirely, and among the remaining
    /// non-occupied rooms with `capacity + tolerance >= required_capacity`,
    /// the one minimizing `waste = capacity - required_capacity` is picked.
    /// Ties are broken by the input iteration order of `rooms`, so the
    /// choice is deterministic across runs given identical input order.
    pub fn select<'a>(
        rooms: &'a [Room],
        required_capacity: u32,
        is_sport: bool,
        occupied: &HashSet<crate::types::RoomId>,
        tolerance: i64,
    ) -> Option<&'a Room> {
        if is_sport {
            return rooms.iter().find(|r| r.is_gym() && !occupied.contains(&r.id));
        }

        rooms
            .iter()
            .filter(|r| !r.is_gym() && !occupied.contains(&r.id))
            .filter(|r| r.capacity as i64 + tolerance >= required_capacity as i64)
            .min_by_key(|r| r.capacity as i64 - required_capacity as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoomId;

    fn room(id: &str, purpose: &str, capacity: u32) -> Room {
        Room {
            id: RoomId(id.to_string()),
            purpose: purpose.to_string(),
            capacity,
        }
    }

    #[test]
    fn sport_task_only_uses_gym() {
        let rooms = vec![room("101", "Общая", 40), room("Спорт зал", "Физра", 60)];
        let occupied = HashSet::new();
        let selected = RoomSelector::select(&rooms, 25, true, &occupied, 0).unwrap();
        assert_eq!(selected.id.0, "Спорт зал");
    }

    #[test]
    fn non_sport_task_never_uses_gym() {
        let rooms = vec![room("Спорт зал", "Физра", 60)];
        let occupied = HashSet::new();
        assert!(RoomSelector::select(&rooms, 25, false, &occupied, 0).is_none());
    }

    #[test]
    fn picks_minimum_waste_room() {
        let rooms = vec![room("big", "Общая", 60), room("tight", "Общая", 30), room("mid", "Общая", 40)];
        let occupied = HashSet::new();
        let selected = RoomSelector::select(&rooms, 25, false, &occupied, 0).unwrap();
        assert_eq!(selected.id.0, "tight");
    }

    #[test]
    fn tolerance_allows_slightly_too_small_room() {
        let rooms = vec![room("small", "Общая", 24)];
        let occupied = HashSet::new();
        assert!(RoomSelector::select(&rooms, 30, false, &occupied, 0).is_none());
        let selected = RoomSelector::select(&rooms, 30, false, &occupied, 8).unwrap();
        assert_eq!(selected.id.0, "small");
    }

    #[test]
    fn occupied_rooms_are_excluded() {
        let rooms = vec![room("101", "Общая", 30)];
        let occupied: HashSet<RoomId> = [RoomId("101".to_string())].into_iter().collect();
        assert!(RoomSelector::select(&rooms, 25, false, &occupied, 0).is_none());
    }
}
