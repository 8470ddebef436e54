//! Aggregation of per-task analyses.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::analysis::TaskAnalysis;
use crate::analysis::potential::AutomationLevel;
use crate::config::EngineConfig;
use crate::rounding::{round_half_up, round1};

/// Task counts per automation bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AutomationDistribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentSummary {
    pub total_hours: u32,
    pub total_cost: Decimal,
    /// Whole months of development at the configured monthly capacity.
    pub estimated_duration_months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialImpact {
    pub yearly_savings: Decimal,
    pub development_investment: Decimal,
    pub net_benefit_3_years: Decimal,
    /// Unrounded months until the savings cover the investment.
    /// `None` when nothing is saved.
    pub payback_months: Option<Decimal>,
}

/// Totals and averages over all analysed tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_tasks: usize,
    pub total_current_hours_weekly: f64,
    pub total_time_savings_weekly: f64,
    pub total_time_savings_yearly: f64,
    pub automation_percentage_average: u32,
    pub feasibility_score_average: f64,
    pub automation_distribution: AutomationDistribution,
    pub development_summary: DevelopmentSummary,
    pub financial_impact: FinancialImpact,
}

/// Reduce task analyses into a summary.
///
/// Averages are zero for an empty slice.
pub fn summarize(tasks: &[TaskAnalysis], config: &EngineConfig) -> AnalysisSummary {
    let count = tasks.len();

    let total_hours: f64 = tasks.iter().map(|t| t.task.hours).sum();
    let weekly_savings: f64 = tasks.iter().map(|t| t.time_savings.weekly).sum();
    let yearly_savings_hours: f64 = tasks.iter().map(|t| t.time_savings.yearly).sum();

    let (automation_average, feasibility_average) = if count == 0 {
        (0.0, 0.0)
    } else {
        let automation: f64 = tasks.iter().map(|t| f64::from(t.automation_percentage)).sum();
        let feasibility: f64 = tasks.iter().map(|t| t.feasibility_score).sum();
        (automation / count as f64, feasibility / count as f64)
    };

    let mut distribution = AutomationDistribution::default();
    for task in tasks {
        match task.automation_level {
            AutomationLevel::High => distribution.high += 1,
            AutomationLevel::Medium => distribution.medium += 1,
            AutomationLevel::Low => distribution.low += 1,
        }
    }

    let dev_hours: u32 = tasks.iter().map(|t| t.dev_time_estimate).sum();
    let dev_cost: Decimal = tasks.iter().map(|t| t.roi_estimate.development_cost).sum();
    let yearly_savings: Decimal = tasks.iter().map(|t| t.roi_estimate.yearly_savings).sum();

    AnalysisSummary {
        total_tasks: count,
        total_current_hours_weekly: round1(total_hours),
        total_time_savings_weekly: round1(weekly_savings),
        total_time_savings_yearly: round1(yearly_savings_hours),
        automation_percentage_average: round_half_up(automation_average) as u32,
        feasibility_score_average: round1(feasibility_average),
        automation_distribution: distribution,
        development_summary: DevelopmentSummary {
            total_hours: dev_hours,
            total_cost: dev_cost,
            estimated_duration_months: round_half_up(
                f64::from(dev_hours) / config.dev_hours_per_month,
            ) as u32,
        },
        financial_impact: FinancialImpact {
            yearly_savings,
            development_investment: dev_cost,
            net_benefit_3_years: yearly_savings * dec!(3) - dev_cost,
            payback_months: exact_payback_months(dev_cost, yearly_savings),
        },
    }
}

fn exact_payback_months(cost: Decimal, yearly_savings: Decimal) -> Option<Decimal> {
    if yearly_savings <= Decimal::ZERO {
        return None;
    }
    Some(cost / (yearly_savings / dec!(12)))
}
