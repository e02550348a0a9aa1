use thiserror::Error;

/// Domain-specific errors for the scheduler
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in '{file}': {message}")]
    JsonParse { file: String, message: String },

    #[error("Failed to parse TOML in '{file}': {message}")]
    TomlParse { file: String, message: String },

    #[error("Rule parameter '{0}' is missing from the rules table")]
    MissingRuleParam(String),

    #[error("Rule parameter '{0}' has an empty example value")]
    EmptyRuleExample(String),

    #[error("Generation aborted: {count} precheck error(s) found")]
    PrecheckFailed { count: usize },

    #[error("Schedule generation was cancelled")]
    Cancelled,
}

/// Use anyhow::Result at application boundaries
pub type Result<T> = anyhow::Result<T>;
