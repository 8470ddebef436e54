//! Development effort estimation.

use serde::{Deserialize, Serialize};

use crate::analysis::complexity::ComplexityAssessment;
use crate::analysis::potential::AutomationPotential;
use crate::catalog::Category;
use crate::rounding::round_half_up;

/// Base development effort before any multiplier.
pub const BASE_DEVELOPMENT_HOURS: f64 = 40.0;
/// Factors scoring below this each add a 1.5x effort penalty.
pub const WEAK_FACTOR_THRESHOLD: f64 = 0.5;
/// Feasibility below this adds a 1.5x effort penalty.
pub const LOW_FEASIBILITY_THRESHOLD: f64 = 5.0;
const PENALTY: f64 = 1.5;
const USER_CONFIG_SHARE: f64 = 0.15;

/// Fixed delivery phases: name, share of development hours, description.
const PHASES: [(&str, f64, &str); 4] = [
    (
        "Analyse et conception",
        0.2,
        "Analyse des besoins et conception de la solution",
    ),
    (
        "Développement",
        0.5,
        "Développement et entraînement des modèles IA",
    ),
    (
        "Tests et intégration",
        0.2,
        "Tests, validation et intégration système",
    ),
    (
        "Déploiement et formation",
        0.1,
        "Mise en production et formation utilisateur",
    ),
];

/// One delivery phase of an automation project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplementationPhase {
    pub name: String,
    pub duration_hours: u32,
    pub description: String,
}

/// Estimated cost of building the automation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentEstimate {
    pub development_hours: u32,
    /// Time the user spends configuring the result, 15% of development.
    pub user_config_hours: u32,
    /// Phase durations are rounded independently and may not add up exactly.
    pub phases: Vec<ImplementationPhase>,
}

/// Estimate development effort for a task.
pub fn estimate_development(
    category: &Category,
    assessment: &ComplexityAssessment,
    potential: &AutomationPotential,
) -> DevelopmentEstimate {
    let weak_factors = assessment.count_below(WEAK_FACTOR_THRESHOLD);

    let mut hours = BASE_DEVELOPMENT_HOURS * category.effort_multiplier;
    for _ in 0..weak_factors {
        hours *= PENALTY;
    }
    if potential.feasibility_score < LOW_FEASIBILITY_THRESHOLD {
        hours *= PENALTY;
    }

    let development_hours = round_half_up(hours) as u32;
    let dev = f64::from(development_hours);

    let phases = PHASES
        .iter()
        .map(|(name, share, description)| ImplementationPhase {
            name: name.to_string(),
            duration_hours: round_half_up(dev * share) as u32,
            description: description.to_string(),
        })
        .collect();

    DevelopmentEstimate {
        development_hours,
        user_config_hours: round_half_up(dev * USER_CONFIG_SHARE) as u32,
        phases,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::complexity::assess_complexity;
    use crate::catalog::Catalog;

    const FEASIBLE: AutomationPotential = AutomationPotential {
        automation_percentage: 60,
        feasibility_score: 7.0,
    };

    fn estimate(category_id: &str, text: &str, potential: &AutomationPotential) -> DevelopmentEstimate {
        let catalog = Catalog::builtin();
        let category = catalog.category(category_id).unwrap();
        let assessment = assess_complexity(&catalog.factors, text, category);
        estimate_development(category, &assessment, potential)
    }

    #[test]
    fn test_weak_factors_compound() {
        // No weak factor.
        assert_eq!(estimate("data_processing", "excel routine données simple", &FEASIBLE).development_hours, 40);
        // Technology maturity is low (0.4).
        assert_eq!(estimate("data_processing", "excel routine simple", &FEASIBLE).development_hours, 60);
        // Data availability (0.3) and technology maturity (0.4) are low.
        assert_eq!(estimate("data_processing", "routine simple", &FEASIBLE).development_hours, 90);
    }

    #[test]
    fn test_low_feasibility_penalty() {
        let infeasible = AutomationPotential {
            automation_percentage: 20,
            feasibility_score: 4.9,
        };
        assert_eq!(
            estimate("data_processing", "excel routine données simple", &infeasible).development_hours,
            60
        );
    }

    #[test]
    fn test_category_multiplier() {
        let text = "excel routine données simple";
        assert_eq!(estimate("administrative", text, &FEASIBLE).development_hours, 20);
        assert_eq!(estimate("customer_service", text, &FEASIBLE).development_hours, 64);
        assert_eq!(estimate("document_processing", text, &FEASIBLE).development_hours, 48);
    }

    #[test]
    fn test_phases_and_config_time() {
        let estimate = estimate("data_processing", "excel routine données simple", &FEASIBLE);
        assert_eq!(estimate.user_config_hours, 6);

        let names: Vec<&str> = estimate.phases.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Analyse et conception",
                "Développement",
                "Tests et intégration",
                "Déploiement et formation",
            ]
        );
        let durations: Vec<u32> = estimate.phases.iter().map(|p| p.duration_hours).collect();
        assert_eq!(durations, vec![8, 20, 8, 4]);
    }

    #[test]
    fn test_phase_rounding_may_drift() {
        // 0.5 * 1.5^5 * 1.5 * 40 = 227.8125 -> 228 hours; phases 45.6, 114, 45.6, 22.8.
        let infeasible = AutomationPotential {
            automation_percentage: 5,
            feasibility_score: 2.0,
        };
        let estimate = estimate("administrative", "intégration système et décision", &infeasible);
        assert_eq!(estimate.development_hours, 228);
        let total: u32 = estimate.phases.iter().map(|p| p.duration_hours).sum();
        assert_eq!(total, 46 + 114 + 46 + 23);
    }
}
