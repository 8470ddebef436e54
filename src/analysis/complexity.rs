//! Complexity assessment.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, ComplexityFactor, LevelKey};

/// The level chosen for one factor on one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorAssessment {
    pub factor_id: String,
    pub level: LevelKey,
    pub score: f64,
    pub description: String,
}

/// One assessment per catalog factor, in catalog order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplexityAssessment(Vec<FactorAssessment>);

impl ComplexityAssessment {
    /// Assessment for a factor id.
    pub fn get(&self, factor_id: &str) -> Option<&FactorAssessment> {
        self.0.iter().find(|a| a.factor_id == factor_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FactorAssessment> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of factors scoring strictly below `threshold`.
    pub fn count_below(&self, threshold: f64) -> usize {
        self.0.iter().filter(|a| a.score < threshold).count()
    }
}

impl FromIterator<FactorAssessment> for ComplexityAssessment {
    fn from_iter<I: IntoIterator<Item = FactorAssessment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ComplexityAssessment {
    type Item = &'a FactorAssessment;
    type IntoIter = std::slice::Iter<'a, FactorAssessment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Rate every factor against lowercased task text.
///
/// The category does not influence the rating; it is accepted so all
/// stages share the same shape.
pub fn assess_complexity(
    factors: &[ComplexityFactor],
    text: &str,
    _category: &Category,
) -> ComplexityAssessment {
    factors
        .iter()
        .map(|factor| {
            let key = factor.rule.resolve(text);
            let level = factor.levels.get(key);
            FactorAssessment {
                factor_id: factor.id.clone(),
                level: key,
                score: level.score,
                description: level.description.clone(),
            }
        })
        .collect()
}
