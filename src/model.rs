//! Analysis input types.

use serde::{Deserialize, Serialize};

/// A self-reported job task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Short task name.
    pub name: String,
    /// Free-text description of what the task involves.
    pub description: String,
    /// Weekly hours currently spent on the task.
    pub hours: f64,
}

impl Task {
    /// Create a new task.
    pub fn new(name: impl Into<String>, description: impl Into<String>, hours: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            hours,
        }
    }

    /// Name and description joined by a space and lowercased.
    ///
    /// Every keyword heuristic runs over this text.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.description).to_lowercase()
    }
}

/// The job the tasks belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobContext {
    /// Sector id used to look up the sector multiplier.
    pub sector: String,
    /// Job title.
    pub title: String,
    /// Job description.
    pub description: String,
    /// Total weekly working hours.
    #[serde(alias = "totalHours")]
    pub total_hours: f64,
}

impl JobContext {
    /// Create a new job context.
    pub fn new(
        sector: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        total_hours: f64,
    ) -> Self {
        Self {
            sector: sector.into(),
            title: title.into(),
            description: description.into(),
            total_hours,
        }
    }
}
