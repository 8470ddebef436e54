//! Input validation for analysis requests.

use crate::config::EngineConfig;
use crate::error::{AnalysisError, Result};
use crate::model::{JobContext, Task};

/// Checks a job context and task list before scoring.
#[derive(Debug, Clone)]
pub struct InputValidator {
    /// Maximum number of tasks.
    max_tasks: usize,
    /// Lowest accepted weekly hours.
    min_hours: f64,
    /// Highest accepted weekly hours.
    max_hours: f64,
    /// Allowed ratio of summed task hours to job hours.
    overflow_tolerance: f64,
}

impl InputValidator {
    /// Create a validator from the engine limits.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            max_tasks: config.max_tasks,
            min_hours: config.min_task_hours,
            max_hours: config.max_task_hours,
            overflow_tolerance: config.hours_overflow_tolerance,
        }
    }

    /// Set the maximum number of tasks.
    pub fn with_max_tasks(mut self, max: usize) -> Self {
        self.max_tasks = max;
        self
    }

    /// Set the accepted weekly hours range.
    pub fn with_hours_range(mut self, min: f64, max: f64) -> Self {
        self.min_hours = min;
        self.max_hours = max;
        self
    }

    /// Validate a request.
    ///
    /// Returns the non-blocking warnings on success. The first violation
    /// found is returned as an error.
    pub fn validate(&self, job: &JobContext, tasks: &[Task]) -> Result<Vec<String>> {
        self.validate_job(job)?;

        if tasks.is_empty() {
            return Err(AnalysisError::EmptyTaskList);
        }
        if tasks.len() > self.max_tasks {
            return Err(AnalysisError::TooManyTasks {
                count: tasks.len(),
                max: self.max_tasks,
            });
        }

        for (index, task) in tasks.iter().enumerate() {
            self.validate_task(index, task)?;
        }

        let mut warnings = Vec::new();

        let total: f64 = tasks.iter().map(|t| t.hours).sum();
        let limit = job.total_hours * self.overflow_tolerance;
        if total > limit {
            warnings.push(format!(
                "Task hours total {total}h per week, above the job's {}h",
                job.total_hours
            ));
        }

        Ok(warnings)
    }

    fn validate_job(&self, job: &JobContext) -> Result<()> {
        if job.sector.trim().is_empty() {
            return Err(AnalysisError::MissingJobField { field: "sector" });
        }
        if job.title.trim().is_empty() {
            return Err(AnalysisError::MissingJobField { field: "title" });
        }
        if job.description.trim().is_empty() {
            return Err(AnalysisError::MissingJobField {
                field: "description",
            });
        }
        if !job.total_hours.is_finite() || job.total_hours <= 0.0 {
            return Err(AnalysisError::InvalidJobHours {
                hours: job.total_hours,
            });
        }
        Ok(())
    }

    fn validate_task(&self, index: usize, task: &Task) -> Result<()> {
        if task.name.trim().is_empty() {
            return Err(AnalysisError::MissingTaskField {
                index,
                field: "name",
            });
        }
        if task.description.trim().is_empty() {
            return Err(AnalysisError::MissingTaskField {
                index,
                field: "description",
            });
        }

        // NaN fails both comparisons, so check finiteness explicitly.
        if !task.hours.is_finite() || task.hours < self.min_hours || task.hours > self.max_hours {
            return Err(AnalysisError::InvalidHours {
                task: task.name.clone(),
                hours: task.hours,
                min: self.min_hours,
                max: self.max_hours,
            });
        }
        Ok(())
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
