//! Automation potential and feasibility.

use serde::{Deserialize, Serialize};

use crate::analysis::complexity::ComplexityAssessment;
use crate::catalog::{Category, ComplexityFactor};
use crate::config::EngineConfig;
use crate::rounding::{round_half_up, round1};

const MIN_AUTOMATION: f64 = 5.0;
const MAX_AUTOMATION: f64 = 95.0;
const MIN_FEASIBILITY: f64 = 1.0;
const MAX_FEASIBILITY: f64 = 10.0;

/// Derived automation scores for a task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutomationPotential {
    /// Share of the task's time that can be automated, 5 to 95.
    pub automation_percentage: u32,
    /// Technical realism on a 1-10 scale, one decimal.
    pub feasibility_score: f64,
}

/// Bucket of an automation percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutomationLevel {
    High,
    Medium,
    Low,
}

impl AutomationLevel {
    /// Bucket a percentage using the configured thresholds.
    pub fn from_percentage(percentage: u32, config: &EngineConfig) -> Self {
        if percentage >= config.high_automation_threshold {
            AutomationLevel::High
        } else if percentage >= config.medium_automation_threshold {
            AutomationLevel::Medium
        } else {
            AutomationLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AutomationLevel::High => "high",
            AutomationLevel::Medium => "medium",
            AutomationLevel::Low => "low",
        }
    }
}

impl std::fmt::Display for AutomationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product of the damped factor terms. Always in (0, 1] for a checked catalog.
///
/// Assessments for factors missing from `factors` contribute nothing.
pub fn complexity_multiplier(factors: &[ComplexityFactor], assessment: &ComplexityAssessment) -> f64 {
    assessment
        .iter()
        .filter_map(|a| {
            factors
                .iter()
                .find(|f| f.id == a.factor_id)
                .map(|f| f.damped(a.score))
        })
        .product()
}

/// Scale the category baselines by complexity and sector.
pub fn automation_potential(
    category: &Category,
    factors: &[ComplexityFactor],
    assessment: &ComplexityAssessment,
    sector_multiplier: f64,
) -> AutomationPotential {
    let scale = complexity_multiplier(factors, assessment) * sector_multiplier;

    let automation = (category.typical_automation * scale).clamp(MIN_AUTOMATION, MAX_AUTOMATION);
    let feasibility = (category.typical_feasibility * scale).clamp(MIN_FEASIBILITY, MAX_FEASIBILITY);

    AutomationPotential {
        automation_percentage: round_half_up(automation) as u32,
        feasibility_score: round1(feasibility),
    }
}
