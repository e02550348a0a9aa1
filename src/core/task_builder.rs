use crate::types::{Task, WeeklyDemand};
use std::collections::HashMap;

/// Groups identical (subject, teacher) demands from different groups into
/// two-group flow tasks where possible.
pub struct TaskBuilder;

impl TaskBuilder {
    pub fn build(demands: &[WeeklyDemand]) -> Vec<Task> {
        let mut by_fingerprint: HashMap<String, Vec<&WeeklyDemand>> = HashMap::new();

        for demand in demands {
            let copies = by_fingerprint.entry(demand.fingerprint()).or_default();
            for _ in 0..demand.pairs_this_week {
                copies.push(demand);
            }
        }

        let mut tasks = Vec::new();

        let mut keys: Vec<&String> = by_fingerprint.keys().collect();
        keys.sort();

        for key in keys {
            let mut copies = by_fingerprint[key].clone();
            copies.sort_by(|a, b| a.group.cmp(&b.group));

            let mut i = 0;
            while i < copies.len() {
                let current = copies[i];
                let next = copies.get(i + 1).copied();

                match next {
                    Some(next_demand) if next_demand.group != current.group => {
                        tasks.push(Task {
                            groups: vec![current.group.clone(), next_demand.group.clone()],
                            subject: current.subject.clone(),
                            teacher: current.teacher.clone(),
                            is_sport: current.is_sport,
                        });
                        i += 2;
                    }
                    _ => {
                        tasks.push(Task {
                            groups: vec![current.group.clone()],
                            subject: current.subject.clone(),
                            teacher: current.teacher.clone(),
                            is_sport: current.is_sport,
                        });
                        i += 1;
                    }
                }
            }
        }

        // Flows first; within each bucket, non-sport before sport.
        tasks.sort_by_key(|t| (!t.is_flow(), t.is_sport));
        tasks
    }
}
