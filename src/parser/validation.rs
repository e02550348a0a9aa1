use crate::core::PrecheckIssue;
use std::collections::HashSet;
use std::path::Path;

/// The files a complete input directory must provide.
const REQUIRED_FILES: &[&str] = &["groups.json", "rooms.json", "load.json"];

/// `groups.json` has no use without a group identifier on every record.
const REQUIRED_GROUP_FIELDS: &[&str] = &["id"];

/// The teacher-load table's required columns, mirroring the original
/// Excel sheet's `группа`/`семестр`/`количество часов`/`ФИО
/// преподавателя`/`Дисциплина` set.
const REQUIRED_LOAD_FIELDS: &[&str] = &["group_id", "semester", "teacher", "subject", "hours"];

/// Structural precheck over the input directory, run before any file is
/// parsed. Checks proceed in the same order, and with the same
/// short-circuiting, as the original sheet-level precheck: a missing file
/// is reported first; then a missing required field on `groups.json`
/// returns immediately, since nothing else can be meaningfully checked
/// without a group identifier; only then is `load.json` checked for its
/// required fields.
pub fn validate_input_dir(dir: &Path) -> Vec<PrecheckIssue> {
    let file_issues = missing_files(dir);
    if !file_issues.is_empty() {
        return file_issues;
    }

    let group_issues = missing_columns(dir, "groups.json", REQUIRED_GROUP_FIELDS);
    if !group_issues.is_empty() {
        return group_issues;
    }

    missing_columns(dir, "load.json", REQUIRED_LOAD_FIELDS)
}

fn missing_files(dir: &Path) -> Vec<PrecheckIssue> {
    REQUIRED_FILES
        .iter()
        .filter(|name| !dir.join(name).exists())
        .map(|name| PrecheckIssue {
            code: "SHEET_MISSING",
            excel_row: None,
            message: format!("required input file '{name}' is missing from {}", dir.display()),
        })
        .collect()
}

/// Reports a `MISSING_COLUMN` issue for every field in `required` that is
/// absent from every record of `file`'s JSON array, the way a missing
/// Excel column is detected by its absence from the sheet's header row.
/// A file that fails to read or parse is left to the loader's own error
/// path; this pass only concerns itself with column presence.
fn missing_columns(dir: &Path, file: &str, required: &[&str]) -> Vec<PrecheckIssue> {
    let Ok(content) = std::fs::read_to_string(dir.join(file)) else {
        return Vec::new();
    };
    let Ok(serde_json::Value::Array(rows)) = serde_json::from_str::<serde_json::Value>(&content) else {
        return Vec::new();
    };
    if rows.is_empty() {
        // JSON has no header row independent of data, unlike the Excel
        // sheets this format replaces: an empty table is never treated as
        // missing its columns.
        return Vec::new();
    }

    let present: HashSet<&str> = rows.iter().filter_map(|row| row.as_object()).flat_map(|obj| obj.keys().map(String::as_str)).collect();

    required
        .iter()
        .filter(|field| !present.contains(*field))
        .map(|field| PrecheckIssue {
            code: "MISSING_COLUMN",
            excel_row: None,
            message: format!("'{file}' has no '{field}' column on any row"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn empty_dir() -> std::path::PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut dir = std::env::temp_dir();
        dir.push(format!("timetable-weaver-validate-{n}"));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn flags_all_missing_files() {
        let dir = empty_dir();
        let issues = validate_input_dir(&dir);
        assert_eq!(issues.len(), REQUIRED_FILES.len());
        assert!(issues.iter().all(|i| i.code == "SHEET_MISSING"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn complete_directory_has_no_issues() {
        let dir = empty_dir();
        for name in REQUIRED_FILES {
            std::fs::write(dir.join(name), "[]").unwrap();
        }
        assert!(validate_input_dir(&dir).is_empty());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_id_field_on_groups_short_circuits_before_load_is_checked() {
        let dir = empty_dir();
        std::fs::write(dir.join("groups.json"), r#"[{"current_semester":1,"size":20}]"#).unwrap();
        std::fs::write(dir.join("rooms.json"), "[]").unwrap();
        std::fs::write(dir.join("load.json"), "[]").unwrap();

        let issues = validate_input_dir(&dir);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "MISSING_COLUMN");
        assert!(issues[0].message.contains("groups.json"));
        assert!(issues[0].message.contains("id"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_required_load_fields_are_all_reported_together() {
        let dir = empty_dir();
        std::fs::write(dir.join("groups.json"), r#"[{"id":"G1"}]"#).unwrap();
        std::fs::write(dir.join("rooms.json"), "[]").unwrap();
        std::fs::write(dir.join("load.json"), r#"[{"group_id":"G1","subject":"Math"}]"#).unwrap();

        let issues = validate_input_dir(&dir);
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.code == "MISSING_COLUMN"));
        let fields: Vec<&str> = issues.iter().map(|i| i.message.as_str()).collect();
        assert!(fields.iter().any(|m| m.contains("semester")));
        assert!(fields.iter().any(|m| m.contains("teacher")));
        assert!(fields.iter().any(|m| m.contains("hours")));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_tables_are_not_flagged_as_missing_columns() {
        let dir = empty_dir();
        for name in REQUIRED_FILES {
            std::fs::write(dir.join(name), "[]").unwrap();
        }
        assert!(validate_input_dir(&dir).is_empty());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
