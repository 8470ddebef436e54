//! Engine configuration.
//!
//! Defaults reproduce the constants the scoring model was calibrated with.
//! Every value can be overridden through `AIA_*` environment variables
//! (a `.env` file is honoured by the binary via `dotenvy`).

use std::fmt::Display;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunable constants for scoring, cost projection and input validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Loaded cost of one hour of the employee's time.
    pub hourly_cost: Decimal,
    /// Cost of one hour of automation development.
    pub dev_hourly_rate: Decimal,
    /// Minimum automation percentage for the "high" bucket.
    pub high_automation_threshold: u32,
    /// Minimum automation percentage for the "medium" bucket.
    pub medium_automation_threshold: u32,
    /// Minimum feasibility score counted as highly feasible.
    pub high_feasibility_threshold: f64,
    /// Development hours delivered per calendar month.
    pub dev_hours_per_month: f64,
    /// Maximum number of tasks accepted in one analysis.
    pub max_tasks: usize,
    /// Lowest accepted weekly hours for a task.
    pub min_task_hours: f64,
    /// Highest accepted weekly hours for a task.
    pub max_task_hours: f64,
    /// Task hours may exceed the job's weekly hours by this factor before a
    /// warning is raised.
    pub hours_overflow_tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hourly_cost: dec!(50),
            dev_hourly_rate: dec!(80),
            high_automation_threshold: 70,
            medium_automation_threshold: 40,
            high_feasibility_threshold: 7.0,
            dev_hours_per_month: 160.0,
            max_tasks: 20,
            min_task_hours: 0.5,
            max_task_hours: 80.0,
            hours_overflow_tolerance: 1.1,
        }
    }
}

impl EngineConfig {
    /// Build a configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Missing keys keep their default value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            hourly_cost: parse_var(&lookup, "AIA_HOURLY_COST", defaults.hourly_cost)?,
            dev_hourly_rate: parse_var(&lookup, "AIA_DEV_HOURLY_RATE", defaults.dev_hourly_rate)?,
            high_automation_threshold: parse_var(
                &lookup,
                "AIA_HIGH_AUTOMATION_THRESHOLD",
                defaults.high_automation_threshold,
            )?,
            medium_automation_threshold: parse_var(
                &lookup,
                "AIA_MEDIUM_AUTOMATION_THRESHOLD",
                defaults.medium_automation_threshold,
            )?,
            high_feasibility_threshold: parse_var(
                &lookup,
                "AIA_HIGH_FEASIBILITY_THRESHOLD",
                defaults.high_feasibility_threshold,
            )?,
            dev_hours_per_month: parse_var(
                &lookup,
                "AIA_DEV_HOURS_PER_MONTH",
                defaults.dev_hours_per_month,
            )?,
            max_tasks: parse_var(&lookup, "AIA_MAX_TASKS", defaults.max_tasks)?,
            min_task_hours: parse_var(&lookup, "AIA_MIN_TASK_HOURS", defaults.min_task_hours)?,
            max_task_hours: parse_var(&lookup, "AIA_MAX_TASK_HOURS", defaults.max_task_hours)?,
            hours_overflow_tolerance: parse_var(
                &lookup,
                "AIA_HOURS_OVERFLOW_TOLERANCE",
                defaults.hours_overflow_tolerance,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hourly_cost.is_sign_negative() {
            return Err(invalid("AIA_HOURLY_COST", "must not be negative"));
        }
        if self.dev_hourly_rate <= Decimal::ZERO {
            return Err(invalid("AIA_DEV_HOURLY_RATE", "must be positive"));
        }
        if self.medium_automation_threshold > self.high_automation_threshold {
            return Err(invalid(
                "AIA_MEDIUM_AUTOMATION_THRESHOLD",
                "must not exceed the high threshold",
            ));
        }
        if !(1.0..=10.0).contains(&self.high_feasibility_threshold) {
            return Err(invalid("AIA_HIGH_FEASIBILITY_THRESHOLD", "must be between 1 and 10"));
        }
        if !(self.dev_hours_per_month.is_finite() && self.dev_hours_per_month > 0.0) {
            return Err(invalid("AIA_DEV_HOURS_PER_MONTH", "must be positive"));
        }
        if self.max_tasks == 0 {
            return Err(invalid("AIA_MAX_TASKS", "must be at least 1"));
        }
        if !(self.min_task_hours > 0.0 && self.min_task_hours <= self.max_task_hours) {
            return Err(invalid(
                "AIA_MIN_TASK_HOURS",
                "must be positive and not exceed the maximum",
            ));
        }
        if !(self.hours_overflow_tolerance.is_finite() && self.hours_overflow_tolerance >= 1.0) {
            return Err(invalid("AIA_HOURS_OVERFLOW_TOLERANCE", "must be at least 1.0"));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| invalid(key, &e.to_string())),
        None => Ok(default),
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = EngineConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.hourly_cost, dec!(50));
        assert_eq!(config.dev_hourly_rate, dec!(80));
    }

    #[test]
    fn test_overrides() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("AIA_HOURLY_COST", "62.5"),
            ("AIA_MAX_TASKS", " 5 "),
        ]))
        .unwrap();

        assert_eq!(config.hourly_cost, dec!(62.5));
        assert_eq!(config.max_tasks, 5);
        assert_eq!(config.dev_hourly_rate, dec!(80));
    }

    #[test]
    fn test_unparseable_value() {
        let err = EngineConfig::from_lookup(lookup_from(&[("AIA_MAX_TASKS", "many")])).unwrap_err();
        assert!(err.to_string().contains("AIA_MAX_TASKS"));
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let result = EngineConfig::from_lookup(lookup_from(&[
            ("AIA_HIGH_AUTOMATION_THRESHOLD", "30"),
            ("AIA_MEDIUM_AUTOMATION_THRESHOLD", "40"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_feasibility_threshold_range() {
        let config =
            EngineConfig::from_lookup(lookup_from(&[("AIA_HIGH_FEASIBILITY_THRESHOLD", "8.5")]))
                .unwrap();
        assert_eq!(config.high_feasibility_threshold, 8.5);

        let result =
            EngineConfig::from_lookup(lookup_from(&[("AIA_HIGH_FEASIBILITY_THRESHOLD", "12")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_dev_rate_rejected() {
        let result = EngineConfig::from_lookup(lookup_from(&[("AIA_DEV_HOURLY_RATE", "0")]));
        assert!(result.is_err());
    }
}
