use crate::error::SchedulerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Required parameter names on the "rules" table (`Параметр` column).
pub const REQUIRED_RULE_PARAMS: &[&str] = &[
    "Direction_Type",
    "Study_Days_Per_Week",
    "Max_Lessons_Per_Day",
    "Min_Lessons_Per_Day",
    "Lesson_Duration_Min",
    "Semester_Weeks",
    "Shift_Type",
];

/// Parsed configuration with defaults, derived from the "rules" table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default = "default_weeks")]
    pub weeks: u32,
    #[serde(default = "default_days_per_week")]
    pub days_per_week: u8,
    #[serde(default = "default_max_pairs_per_day")]
    pub max_pairs_per_day: u8,
    #[serde(default = "default_min_pairs_per_day")]
    pub min_pairs_per_day: u8,
    #[serde(default = "default_lesson_minutes")]
    pub lesson_minutes: u32,
    #[serde(default = "default_hours_are_academic")]
    pub hours_are_academic: bool,
}

fn default_weeks() -> u32 {
    16
}
fn default_days_per_week() -> u8 {
    5
}
fn default_max_pairs_per_day() -> u8 {
    5
}
fn default_min_pairs_per_day() -> u8 {
    1
}
fn default_lesson_minutes() -> u32 {
    90
}
fn default_hours_are_academic() -> bool {
    true
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            weeks: default_weeks(),
            days_per_week: default_days_per_week(),
            max_pairs_per_day: default_max_pairs_per_day(),
            min_pairs_per_day: default_min_pairs_per_day(),
            lesson_minutes: default_lesson_minutes(),
            hours_are_academic: default_hours_are_academic(),
        }
    }
}

impl RuleSet {
    /// One pair occupies exactly `lesson_minutes`.
    pub fn pair_minutes(&self) -> u32 {
        self.lesson_minutes
    }

    /// Total weekly slots across all days.
    pub fn slots_per_week(&self) -> u32 {
        self.days_per_week as u32 * self.max_pairs_per_day as u32
    }

    /// Minutes counted per "hour" of teacher load: 45 for academic hours,
    /// 60 otherwise.
    pub fn minutes_per_hour(&self) -> u32 {
        if self.hours_are_academic {
            45
        } else {
            60
        }
    }

    /// Parse a RuleSet from a (param_name -> example value) table, as read
    /// from the "Правила составления" sheet's `Параметр`/`Пример` columns.
    /// Returns an error for the first missing parameter or empty example
    /// among `REQUIRED_RULE_PARAMS`.
    pub fn from_params(params: &HashMap<String, String>) -> anyhow::Result<Self> {
        for name in REQUIRED_RULE_PARAMS {
            match params.get(*name) {
                None => return Err(SchedulerError::MissingRuleParam((*name).to_string()).into()),
                Some(example) if example.trim().is_empty() => {
                    return Err(SchedulerError::EmptyRuleExample((*name).to_string()).into())
                }
                Some(_) => {}
            }
        }

        let weeks = parse_or(params, "Semester_Weeks", default_weeks());
        let days_per_week = parse_or(params, "Study_Days_Per_Week", default_days_per_week());
        let max_pairs_per_day = parse_or(params, "Max_Lessons_Per_Day", default_max_pairs_per_day());
        let min_pairs_per_day = parse_or(params, "Min_Lessons_Per_Day", default_min_pairs_per_day());
        let lesson_minutes = parse_or(params, "Lesson_Duration_Min", default_lesson_minutes());

        let ruleset = Self {
            weeks,
            days_per_week,
            max_pairs_per_day,
            min_pairs_per_day,
            lesson_minutes,
            hours_are_academic: default_hours_are_academic(),
        };

        Ok(ruleset)
    }

    /// `min_pairs_per_day <= max_pairs_per_day`
    pub fn is_valid(&self) -> bool {
        self.min_pairs_per_day <= self.max_pairs_per_day
    }
}

fn parse_or<T: std::str::FromStr>(params: &HashMap<String, String>, key: &str, default: T) -> T {
    params
        .get(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
