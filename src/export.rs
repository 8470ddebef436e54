//! Flat per-task rows for tabular export.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analysis::TaskAnalysis;

/// One analysed task as a flat record, one field per export column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRow {
    pub task: String,
    pub description: String,
    pub hours_weekly: f64,
    pub category: String,
    pub automation_level: String,
    pub automation_percentage: u32,
    pub feasibility_score: f64,
    pub time_savings_weekly: f64,
    pub time_savings_monthly: f64,
    pub time_savings_yearly: f64,
    pub dev_hours: u32,
    pub user_config_hours: u32,
    pub development_cost: Decimal,
    pub yearly_savings: Decimal,
    pub roi_3_years_percent: Option<i64>,
    pub payback_months: Option<Decimal>,
    /// Technology names joined with ", ".
    pub technologies: String,
}

impl From<&TaskAnalysis> for TaskRow {
    fn from(analysis: &TaskAnalysis) -> Self {
        Self {
            task: analysis.task.name.clone(),
            description: analysis.task.description.clone(),
            hours_weekly: analysis.task.hours,
            category: analysis.category.name.clone(),
            automation_level: analysis.automation_level.to_string(),
            automation_percentage: analysis.automation_percentage,
            feasibility_score: analysis.feasibility_score,
            time_savings_weekly: analysis.time_savings.weekly,
            time_savings_monthly: analysis.time_savings.monthly,
            time_savings_yearly: analysis.time_savings.yearly,
            dev_hours: analysis.dev_time_estimate,
            user_config_hours: analysis.user_config_time,
            development_cost: analysis.roi_estimate.development_cost,
            yearly_savings: analysis.roi_estimate.yearly_savings,
            roi_3_years_percent: analysis.roi_estimate.roi_3_years_percent,
            payback_months: analysis.roi_estimate.payback_months,
            technologies: analysis.required_technologies.join(", "),
        }
    }
}

/// Rows for every task, in input order.
pub fn task_rows(tasks: &[TaskAnalysis]) -> Vec<TaskRow> {
    tasks.iter().map(TaskRow::from).collect()
}
