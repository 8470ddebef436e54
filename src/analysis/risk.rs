//! Risk identification from complexity assessments.

use serde::{Deserialize, Serialize};

use crate::analysis::complexity::ComplexityAssessment;
use crate::catalog::Catalog;

/// Scores below this raise a high risk.
pub const HIGH_RISK_BELOW: f64 = 0.5;
/// Scores below this (and at least [`HIGH_RISK_BELOW`]) raise a medium risk.
pub const MEDIUM_RISK_BELOW: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
}

/// An obstacle to automation and how to address it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    /// Display name of the factor.
    pub factor: String,
    pub level: RiskLevel,
    /// Description of the assessed level.
    pub description: String,
    pub mitigation: String,
}

/// Turn weak factor scores into risks, in factor order.
pub fn identify_risks(catalog: &Catalog, assessment: &ComplexityAssessment) -> Vec<RiskFactor> {
    assessment
        .iter()
        .filter_map(|a| {
            let level = if a.score < HIGH_RISK_BELOW {
                RiskLevel::High
            } else if a.score < MEDIUM_RISK_BELOW {
                RiskLevel::Medium
            } else {
                return None;
            };

            let factor = catalog
                .factor(&a.factor_id)
                .map(|f| f.name.clone())
                .unwrap_or_else(|| a.factor_id.clone());

            Some(RiskFactor {
                factor,
                level,
                description: a.description.clone(),
                mitigation: catalog.mitigation_for(&a.factor_id).to_string(),
            })
        })
        .collect()
}
