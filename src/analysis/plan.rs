//! Report insights: overall score, headline counts and the action plan.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analysis::TaskAnalysis;
use crate::analysis::summary::AnalysisSummary;
use crate::config::EngineConfig;
use crate::rounding::{round_half_up, round1};

/// Maximum number of tasks proposed in the action plan.
pub const MAX_ACTION_ITEMS: usize = 3;
/// Development hours per point of complexity.
const HOURS_PER_COMPLEXITY_POINT: f64 = 40.0;
const MAX_COMPLEXITY: u32 = 5;
const WEEKS_PER_MONTH: f64 = 4.0;
const MAX_SCORE: f64 = 10.0;

/// A recommended automation project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub title: String,
    pub task: String,
    pub duration_weeks: u32,
    pub development_cost: Decimal,
    pub weekly_savings: f64,
    /// 1 to 5.
    pub complexity: u32,
    pub automation_percentage: u32,
    pub roi_3_years_percent: Option<i64>,
    pub technologies: Vec<String>,
}

/// Headline figures over an analysed task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportInsights {
    /// Score out of 10, one decimal.
    pub overall_score: f64,
    pub high_feasibility_count: usize,
    pub high_automation_count: usize,
    pub action_items: Vec<ActionItem>,
}

/// Mean of automation, feasibility and time-savings scores, each out of 10.
pub fn overall_score(summary: &AnalysisSummary) -> f64 {
    let automation = f64::from(summary.automation_percentage_average) / 10.0;
    let feasibility = summary.feasibility_score_average;
    let savings = if summary.total_current_hours_weekly > 0.0 {
        (summary.total_time_savings_weekly / summary.total_current_hours_weekly * MAX_SCORE)
            .min(MAX_SCORE)
    } else {
        0.0
    };

    round1((automation + feasibility + savings) / 3.0)
}

pub fn high_feasibility_count(tasks: &[TaskAnalysis], config: &EngineConfig) -> usize {
    tasks
        .iter()
        .filter(|t| t.feasibility_score >= config.high_feasibility_threshold)
        .count()
}

pub fn high_automation_count(tasks: &[TaskAnalysis], config: &EngineConfig) -> usize {
    tasks
        .iter()
        .filter(|t| t.automation_percentage >= config.high_automation_threshold)
        .count()
}

/// The highly automatable tasks with the best three-year ROI.
///
/// Tasks without an ROI figure sort last; ties keep input order.
pub fn action_items(tasks: &[TaskAnalysis], config: &EngineConfig) -> Vec<ActionItem> {
    let mut candidates: Vec<&TaskAnalysis> = tasks
        .iter()
        .filter(|t| t.automation_percentage >= config.high_automation_threshold)
        .collect();
    candidates.sort_by(|a, b| {
        b.roi_estimate
            .roi_3_years_percent
            .cmp(&a.roi_estimate.roi_3_years_percent)
    });

    candidates
        .into_iter()
        .take(MAX_ACTION_ITEMS)
        .map(|t| action_item(t, config))
        .collect()
}

fn action_item(task: &TaskAnalysis, config: &EngineConfig) -> ActionItem {
    let dev_hours = f64::from(task.dev_time_estimate);
    let complexity = (dev_hours / HOURS_PER_COMPLEXITY_POINT).ceil() as u32;

    ActionItem {
        title: format!("Automatiser: {}", task.task.name),
        task: task.task.name.clone(),
        duration_weeks: round_half_up(dev_hours / config.dev_hours_per_month * WEEKS_PER_MONTH)
            as u32,
        development_cost: task.roi_estimate.development_cost,
        weekly_savings: task.time_savings.weekly,
        complexity: complexity.min(MAX_COMPLEXITY),
        automation_percentage: task.automation_percentage,
        roi_3_years_percent: task.roi_estimate.roi_3_years_percent,
        technologies: task.required_technologies.clone(),
    }
}

/// Compute every insight for an analysed task list.
pub fn report_insights(
    tasks: &[TaskAnalysis],
    summary: &AnalysisSummary,
    config: &EngineConfig,
) -> ReportInsights {
    ReportInsights {
        overall_score: overall_score(summary),
        high_feasibility_count: high_feasibility_count(tasks, config),
        high_automation_count: high_automation_count(tasks, config),
        action_items: action_items(tasks, config),
    }
}
