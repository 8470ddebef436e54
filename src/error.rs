//! Error types for the scoring engine.

/// Errors caused by invalid analysis input.
///
/// These are raised before any scoring happens, so a failed call never
/// produces a partial result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// No tasks were supplied.
    #[error("No tasks to analyze")]
    EmptyTaskList,

    /// More tasks than the configured maximum.
    #[error("Too many tasks: {count} (max {max})")]
    TooManyTasks { count: usize, max: usize },

    /// Weekly hours outside the accepted range, or not a finite number.
    #[error("Task '{task}' has invalid weekly hours {hours} (expected {min} to {max})")]
    InvalidHours {
        task: String,
        hours: f64,
        min: f64,
        max: f64,
    },

    /// A task is missing a required text field.
    #[error("Task #{index} is missing required field '{field}'")]
    MissingTaskField { index: usize, field: &'static str },

    /// The job context is missing a required text field.
    #[error("Job context is missing required field '{field}'")]
    MissingJobField { field: &'static str },

    /// The job's total weekly hours are not a positive finite number.
    #[error("Job total hours must be positive, got {hours}")]
    InvalidJobHours { hours: f64 },
}

/// Errors raised while loading or checking a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog defines no categories.
    #[error("Catalog has no categories")]
    NoCategories,

    /// The catalog defines no complexity factors.
    #[error("Catalog has no complexity factors")]
    NoFactors,

    /// Two entries share the same id.
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// The fallback category is not part of the catalog.
    #[error("Default category '{id}' is not defined")]
    DefaultCategoryMissing { id: String },

    /// A factor impact weight outside [0, 1].
    #[error("Factor '{factor}' has impact {impact} outside [0, 1]")]
    InvalidImpact { factor: String, impact: f64 },

    /// A level score outside [0, 1].
    #[error("Factor '{factor}' has a level score {score} outside [0, 1]")]
    InvalidScore { factor: String, score: f64 },

    /// A sector multiplier that is not a positive finite number.
    #[error("Sector '{sector}' has invalid multiplier {multiplier}")]
    InvalidMultiplier { sector: String, multiplier: f64 },

    /// Keyword automaton could not be built.
    #[error("Keyword matcher build failed: {0}")]
    Matcher(#[from] aho_corasick::BuildError),

    /// I/O error while reading a catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed catalog JSON.
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while reading engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be used.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
