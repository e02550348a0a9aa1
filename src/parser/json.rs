use crate::error::{Result, SchedulerError};
use crate::types::{Group, LoadEntry, RuleSet, ScheduleInput};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Load all input data from a directory: `groups.json`, `rooms.json`,
/// `load.json`, and either `rules.json` (a `Параметр`/`Пример` map) or
/// `rules.toml` (a plain `RuleSet`). Missing rule files fall back to
/// `RuleSet::default()`.
pub fn load_input_from_dir(dir: &Path) -> Result<ScheduleInput> {
    let groups = load_groups(&dir.join("groups.json"))?;
    let rooms = load_rooms(&dir.join("rooms.json"))?;
    let load_entries = load_entries(&dir.join("load.json"))?;
    let rules = load_rules(dir)?;

    Ok(ScheduleInput {
        groups,
        rooms,
        load_entries,
        rules,
    })
}

pub fn load_groups(path: &Path) -> Result<Vec<Group>> {
    load_json_file(path)
}

pub fn load_rooms(path: &Path) -> Result<Vec<crate::types::Room>> {
    load_json_file(path)
}

/// Loads the teacher-load table, stamping each entry's `excel_row` with its
/// 1-based, header-inclusive position so precheck errors can point back at
/// a specific row regardless of what the source file itself recorded.
pub fn load_entries(path: &Path) -> Result<Vec<LoadEntry>> {
    let mut entries: Vec<LoadEntry> = load_json_file(path)?;
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.excel_row = i + 2;
    }
    Ok(entries)
}

/// Loads the scheduling `RuleSet`, preferring `rules.json` (a raw parameter
/// map validated through `RuleSet::from_params`) over `rules.toml` (a
/// directly deserialized `RuleSet`), and falling back to defaults if
/// neither file exists.
pub fn load_rules(dir: &Path) -> Result<RuleSet> {
    let json_path = dir.join("rules.json");
    if json_path.exists() {
        let params: HashMap<String, String> = load_json_file(&json_path)?;
        return RuleSet::from_params(&params);
    }

    let toml_path = dir.join("rules.toml");
    if toml_path.exists() {
        let path_str = toml_path.display().to_string();
        let content = fs::read_to_string(&toml_path).map_err(|e| SchedulerError::FileRead {
            path: path_str.clone(),
            source: e,
        })?;
        let rules: RuleSet = toml::from_str(&content).map_err(|e| SchedulerError::TomlParse {
            file: path_str,
            message: e.to_string(),
        })?;
        return Ok(rules);
    }

    Ok(RuleSet::default())
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| SchedulerError::FileRead {
        path: path_str.clone(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| {
        SchedulerError::JsonParse {
            file: path_str,
            message: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    struct TempDir(PathBuf);

    impl TempDir {
        fn new(label: &str) -> Self {
            let n = COUNTER.fetch_add(1, Ordering::Relaxed);
            let mut dir = std::env::temp_dir();
            dir.push(format!("timetable-weaver-test-{label}-{n}"));
            let _ = fs::remove_dir_all(&dir);
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn path(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn write(dir: &Path, name: &str, content: &str) {
        let mut f = fs::File::create(dir.join(name)).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn loads_full_input_with_defaulted_rules() {
        let dir = TempDir::new("full-input");
        write(dir.path(), "groups.json", r#"[{"id":"G1","current_semester":1,"size":20}]"#);
        write(
            dir.path(),
            "rooms.json",
            r#"[{"id":"101","purpose":"Общая","capacity":30}]"#,
        );
        write(
            dir.path(),
            "load.json",
            r#"[{"group_id":"G1","semester":1,"teacher":"Иванов","subject":"Математика","hours":30.0}]"#,
        );

        let input = load_input_from_dir(dir.path()).unwrap();
        assert_eq!(input.groups.len(), 1);
        assert_eq!(input.rooms.len(), 1);
        assert_eq!(input.load_entries.len(), 1);
        assert_eq!(input.load_entries[0].excel_row, 2);
        assert_eq!(input.rules.weeks, 16);
    }

    #[test]
    fn rules_json_is_validated_through_from_params() {
        let dir = TempDir::new("rules-json");
        write(dir.path(), "rules.json", r#"{"Direction_Type":"x"}"#);
        let err = load_rules(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Study_Days_Per_Week"));
    }

    #[test]
    fn rules_toml_is_parsed_directly() {
        let dir = TempDir::new("rules-toml");
        write(dir.path(), "rules.toml", "weeks = 12\ndays_per_week = 6\n");
        let rules = load_rules(dir.path()).unwrap();
        assert_eq!(rules.weeks, 12);
        assert_eq!(rules.days_per_week, 6);
    }

    #[test]
    fn missing_file_reports_file_read_error() {
        let dir = TempDir::new("missing-file");
        let err = load_groups(&dir.path().join("groups.json")).unwrap_err();
        assert!(err.to_string().contains("groups.json"));
    }
}
