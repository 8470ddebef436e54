//! Time savings projection.

use serde::{Deserialize, Serialize};

use crate::analysis::potential::AutomationPotential;
use crate::rounding::round1;

/// Average number of weeks in a month.
pub const WEEKS_PER_MONTH: f64 = 4.33;
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Hours freed by automating a task, each rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeSavings {
    pub weekly: f64,
    pub monthly: f64,
    pub yearly: f64,
}

/// Project the hours saved from a task's weekly hours.
///
/// Monthly and yearly figures derive from the unrounded weekly value.
pub fn time_savings(weekly_hours: f64, potential: &AutomationPotential) -> TimeSavings {
    let weekly = weekly_hours * (f64::from(potential.automation_percentage) / 100.0);

    TimeSavings {
        weekly: round1(weekly),
        monthly: round1(weekly * WEEKS_PER_MONTH),
        yearly: round1(weekly * WEEKS_PER_YEAR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn potential(pct: u32) -> AutomationPotential {
        AutomationPotential {
            automation_percentage: pct,
            feasibility_score: 7.0,
        }
    }

    #[test]
    fn test_projection() {
        let savings = time_savings(10.0, &potential(71));
        assert_eq!(savings.weekly, 7.1);
        assert_eq!(savings.monthly, 30.7);
        assert_eq!(savings.yearly, 369.2);
    }

    #[test]
    fn test_yearly_tracks_weekly() {
        for (hours, pct) in [(0.5, 5), (3.3, 47), (12.25, 83), (80.0, 95), (7.0, 33)] {
            let savings = time_savings(hours, &potential(pct));
            assert!(
                (savings.yearly - savings.weekly * WEEKS_PER_YEAR).abs() <= 0.1 * WEEKS_PER_YEAR,
                "{hours}h at {pct}%: {savings:?}"
            );
            assert!((savings.yearly - hours * f64::from(pct) / 100.0 * WEEKS_PER_YEAR).abs() <= 0.1);
        }
    }
}
