use super::{GroupId, SubjectName, TeacherName};
use serde::{Deserialize, Serialize};

/// Substrings that mark a subject as physical education / sport.
pub const SPORT_KEYWORDS: &[&str] = &["физическ", "физк", "спорт", "нвп"];

/// One row of the teacher load table: a (group, subject, teacher) demand
/// for a given semester, expressed in yearly hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadEntry {
    pub group_id: GroupId,
    pub semester: Option<i64>,
    pub teacher: TeacherName,
    pub subject: SubjectName,
    pub hours: Option<f64>,
    /// 1-based, header-inclusive row number in the source table, used for
    /// precheck error reporting.
    #[serde(default)]
    pub excel_row: usize,
}

impl LoadEntry {
    /// True iff the subject name matches any sport keyword, case-insensitively.
    pub fn is_sport(&self) -> bool {
        let lower = self.subject.0.to_lowercase();
        SPORT_KEYWORDS.iter().any(|kw| lower.contains(kw))
    }

    pub fn semester_is_valid(&self) -> bool {
        matches!(self.semester, Some(s) if s >= 1)
    }

    pub fn hours_is_valid(&self) -> bool {
        matches!(self.hours, Some(h) if h > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(subject: &str) -> LoadEntry {
        LoadEntry {
            group_id: GroupId("G1".to_string()),
            semester: Some(1),
            teacher: TeacherName("Иванов И.И.".to_string()),
            subject: SubjectName(subject.to_string()),
            hours: Some(30.0),
            excel_row: 2,
        }
    }

    #[test]
    fn detects_sport_subjects() {
        assert!(entry("Физическая культура").is_sport());
        assert!(entry("НВП").is_sport());
        assert!(entry("спортивные игры").is_sport());
        assert!(!entry("Математический анализ").is_sport());
    }

    #[test]
    fn validates_semester_and_hours() {
        let mut e = entry("Физика");
        assert!(e.semester_is_valid());
        assert!(e.hours_is_valid());
        e.semester = Some(0);
        assert!(!e.semester_is_valid());
        e.hours = Some(0.0);
        assert!(!e.hours_is_valid());
    }
}
