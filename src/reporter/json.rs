use crate::error::Result;
use crate::types::{GroupId, MultiSemesterResult, Placement, ScheduleInput, SemesterResult};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Serialize)]
struct SlotOutput {
    subject: String,
    teacher: String,
    room: String,
    is_flow: bool,
    shift: u8,
}

#[derive(Debug, Serialize)]
struct PairOutput {
    pair: u8,
    slots: BTreeMap<String, Option<SlotOutput>>,
}

#[derive(Debug, Serialize)]
struct DayOutput {
    day_name: &'static str,
    pairs: Vec<PairOutput>,
}

#[derive(Debug, Serialize)]
struct WeekOutput {
    week_number: u32,
    days: Vec<DayOutput>,
}

#[derive(Debug, Serialize)]
struct SemesterOutput {
    groups: Vec<String>,
    teachers: Vec<String>,
    weeks: Vec<WeekOutput>,
}

#[derive(Debug, Serialize)]
struct MultiSemesterOutput {
    semesters: BTreeMap<String, SemesterOutput>,
}

/// Render one semester's schedule into the output JSON shape: a per-week
/// grid of (day, pair) slots keyed by group.
pub fn generate_json_report(semester: &SemesterResult, input: &ScheduleInput) -> Result<String> {
    let output = build_semester_output(semester, input);
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Render every semester, keyed by semester number, into one JSON document.
pub fn generate_multi_json_report(result: &MultiSemesterResult, input: &ScheduleInput) -> Result<String> {
    let semesters = result
        .semesters
        .iter()
        .map(|s| (s.semester.to_string(), build_semester_output(s, input)))
        .collect();

    Ok(serde_json::to_string_pretty(&MultiSemesterOutput { semesters })?)
}

fn build_semester_output(semester: &SemesterResult, input: &ScheduleInput) -> SemesterOutput {
    let mut group_ids: Vec<GroupId> = input
        .groups
        .iter()
        .filter(|g| g.current_semester == Some(semester.semester))
        .map(|g| g.id.clone())
        .collect();
    group_ids.sort_by(|a, b| a.0.cmp(&b.0));

    let mut teachers: HashSet<String> = HashSet::new();
    for week in &semester.weeks {
        for placement in &week.placements {
            teachers.insert(placement.teacher.0.clone());
        }
    }
    let mut teachers: Vec<String> = teachers.into_iter().collect();
    teachers.sort();

    let weeks = semester
        .weeks
        .iter()
        .map(|week| WeekOutput {
            week_number: week.week_number,
            days: (1..=input.rules.days_per_week)
                .map(|day| build_day_output(day, &week.placements, &group_ids, input.rules.max_pairs_per_day))
                .collect(),
        })
        .collect();

    SemesterOutput {
        groups: group_ids.iter().map(|g| g.0.clone()).collect(),
        teachers,
        weeks,
    }
}

fn build_day_output(day: u8, placements: &[Placement], groups: &[GroupId], max_pairs: u8) -> DayOutput {
    let pairs = (1..=max_pairs)
        .map(|pair| {
            let mut slots = BTreeMap::new();
            for group in groups {
                let found = placements
                    .iter()
                    .find(|p| p.day == day && p.pair == pair && p.groups.contains(group));

                let slot = found.map(|p| SlotOutput {
                    subject: p.subject.0.clone(),
                    teacher: p.teacher.0.clone(),
                    room: p.room.0.clone(),
                    is_flow: p.is_flow,
                    shift: Placement::shift(p.pair),
                });

                slots.insert(group.0.clone(), slot);
            }
            PairOutput { pair, slots }
        })
        .collect();

    DayOutput {
        day_name: Placement::day_name(day),
        pairs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Group, LoadEntry, Room, RoomId, RuleSet, SubjectName, TeacherName, WeekSchedule};

    #[test]
    fn renders_placed_slot_for_its_group_and_null_for_others() {
        let input = ScheduleInput {
            groups: vec![
                Group {
                    id: GroupId("A".to_string()),
                    current_semester: Some(1),
                    size: 20,
                },
                Group {
                    id: GroupId("B".to_string()),
                    current_semester: Some(1),
                    size: 20,
                },
            ],
            rooms: vec![Room {
                id: RoomId("101".to_string()),
                purpose: "Общая".to_string(),
                capacity: 30,
            }],
            load_entries: Vec::<LoadEntry>::new(),
            rules: RuleSet::default(),
        };

        let mut semester = SemesterResult::new(1);
        semester.weeks.push(WeekSchedule {
            week_number: 1,
            placements: vec![Placement {
                day: 1,
                pair: 1,
                room: RoomId("101".to_string()),
                groups: vec![GroupId("A".to_string())],
                subject: SubjectName("Математика".to_string()),
                teacher: TeacherName("Иванов".to_string()),
                is_flow: false,
                forced: false,
            }],
        });

        let json = generate_json_report(&semester, &input).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let slot_a = &value["weeks"][0]["days"][0]["pairs"][0]["slots"]["A"];
        let slot_b = &value["weeks"][0]["days"][0]["pairs"][0]["slots"]["B"];
        assert_eq!(slot_a["subject"], "Математика");
        assert!(slot_b.is_null());
    }

    #[test]
    fn groups_list_is_sorted_ascending_regardless_of_input_order() {
        let input = ScheduleInput {
            groups: vec![
                Group {
                    id: GroupId("ИС-22".to_string()),
                    current_semester: Some(1),
                    size: 20,
                },
                Group {
                    id: GroupId("ИС-21".to_string()),
                    current_semester: Some(1),
                    size: 20,
                },
            ],
            rooms: vec![],
            load_entries: Vec::<LoadEntry>::new(),
            rules: RuleSet::default(),
        };

        let semester = SemesterResult::new(1);
        let json = generate_json_report(&semester, &input).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let groups: Vec<&str> = value["groups"].as_array().unwrap().iter().map(|g| g.as_str().unwrap()).collect();
        assert_eq!(groups, vec!["ИС-21", "ИС-22"]);
    }
}
