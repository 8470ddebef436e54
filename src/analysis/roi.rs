//! Return on investment.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::analysis::effort::DevelopmentEstimate;
use crate::analysis::savings::TimeSavings;
use crate::config::EngineConfig;
use crate::rounding::round_decimal;

/// Financial projection for automating one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiEstimate {
    /// Value of the hours saved per year, whole currency units.
    pub yearly_savings: Decimal,
    pub development_cost: Decimal,
    /// Months until savings cover the cost, one decimal.
    /// `None` when nothing is saved.
    pub payback_months: Option<Decimal>,
    /// Net gain over three years relative to cost.
    /// `None` when development costs nothing.
    pub roi_3_years_percent: Option<i64>,
}

/// Months needed for `yearly_savings` to cover `cost`, one decimal.
pub fn payback_months(cost: Decimal, yearly_savings: Decimal) -> Option<Decimal> {
    if yearly_savings <= Decimal::ZERO {
        return None;
    }
    Some(round_decimal(cost / (yearly_savings / dec!(12)), 1))
}

/// Price the savings and the development work.
pub fn estimate_roi(
    savings: &TimeSavings,
    development: &DevelopmentEstimate,
    config: &EngineConfig,
) -> RoiEstimate {
    let yearly_hours = match Decimal::from_f64(savings.yearly) {
        Some(hours) => hours.round_dp(1),
        None => {
            tracing::warn!(
                yearly_hours = savings.yearly,
                "Yearly hours saved are not a finite number, pricing them at zero"
            );
            Decimal::ZERO
        }
    };
    let yearly_savings = yearly_hours * config.hourly_cost;
    let development_cost = Decimal::from(development.development_hours) * config.dev_hourly_rate;

    let roi_3_years_percent = if development_cost.is_zero() {
        None
    } else {
        let gain = (yearly_savings * dec!(3) - development_cost) / development_cost;
        round_decimal(gain * dec!(100), 0).to_i64()
    };

    RoiEstimate {
        yearly_savings: round_decimal(yearly_savings, 0),
        development_cost: round_decimal(development_cost, 0),
        payback_months: payback_months(development_cost, yearly_savings),
        roi_3_years_percent,
    }
}
