//! Reference data driving the scoring engine.
//!
//! A catalog bundles:
//! - Categories with classification keywords and effort multipliers
//! - Complexity factors with their levels, keyword rules and mitigations
//! - Sector multipliers
//!
//! The built-in catalog is the default. Alternate catalogs can be loaded
//! from JSON and are checked before an engine accepts them.

mod categories;
mod factors;
mod sectors;

pub use categories::{Category, DEFAULT_CATEGORY_ID, builtin_categories};
pub use factors::{
    ComplexityFactor, FactorLevel, FactorLevels, KeywordRule, LevelKey, RuleBranch,
    builtin_factors,
};
pub use sectors::{FALLBACK_SECTOR_MULTIPLIER, SectorMultipliers};

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Mitigation text for factors without their own advice.
pub const FALLBACK_MITIGATION: &str = "Analyse approfondie recommandée";

/// Immutable reference data for one engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Categories in declaration order.
    pub categories: Vec<Category>,
    /// Complexity factors in evaluation order.
    pub factors: Vec<ComplexityFactor>,
    #[serde(default)]
    pub sectors: SectorMultipliers,
    /// Category chosen when no keyword matches.
    #[serde(default = "default_category_id")]
    pub default_category: String,
}

fn default_category_id() -> String {
    DEFAULT_CATEGORY_ID.to_string()
}

impl Catalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self {
            categories: builtin_categories(),
            factors: builtin_factors(),
            sectors: SectorMultipliers::builtin(),
            default_category: default_category_id(),
        }
    }

    /// Parse and check a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let mut catalog: Catalog = serde_json::from_str(json)?;
        catalog.lowercase_keywords();
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and check a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            factors = catalog.factors.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Lowercase every category and factor keyword.
    ///
    /// Task text is lowercased before matching, so keywords must be too.
    pub fn lowercase_keywords(&mut self) {
        for category in &mut self.categories {
            for keyword in &mut category.keywords {
                *keyword = keyword.to_lowercase();
            }
        }
        for factor in &mut self.factors {
            factor.rule.lowercase_keywords();
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.categories.is_empty() {
            return Err(CatalogError::NoCategories);
        }
        if self.factors.is_empty() {
            return Err(CatalogError::NoFactors);
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    kind: "category",
                    id: category.id.clone(),
                });
            }
        }
        if !seen.contains(self.default_category.as_str()) {
            return Err(CatalogError::DefaultCategoryMissing {
                id: self.default_category.clone(),
            });
        }

        let mut seen = HashSet::new();
        for factor in &self.factors {
            if !seen.insert(factor.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    kind: "factor",
                    id: factor.id.clone(),
                });
            }
            if !(0.0..=1.0).contains(&factor.impact) {
                return Err(CatalogError::InvalidImpact {
                    factor: factor.id.clone(),
                    impact: factor.impact,
                });
            }
            if let Some((_, level)) = factor
                .levels
                .iter()
                .find(|(_, level)| !(0.0..=1.0).contains(&level.score))
            {
                return Err(CatalogError::InvalidScore {
                    factor: factor.id.clone(),
                    score: level.score,
                });
            }
        }

        for (sector, multiplier) in &self.sectors.multipliers {
            if !(multiplier.is_finite() && *multiplier > 0.0) {
                return Err(CatalogError::InvalidMultiplier {
                    sector: sector.clone(),
                    multiplier: *multiplier,
                });
            }
        }
        if !(self.sectors.fallback.is_finite() && self.sectors.fallback > 0.0) {
            return Err(CatalogError::InvalidMultiplier {
                sector: "<fallback>".to_string(),
                multiplier: self.sectors.fallback,
            });
        }

        Ok(())
    }

    /// Look up a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a factor by id.
    pub fn factor(&self, id: &str) -> Option<&ComplexityFactor> {
        self.factors.iter().find(|f| f.id == id)
    }

    /// Mitigation advice for a factor, with a generic fallback.
    pub fn mitigation_for(&self, factor_id: &str) -> &str {
        self.factor(factor_id)
            .map(|f| f.mitigation.as_str())
            .filter(|m| !m.is_empty())
            .unwrap_or(FALLBACK_MITIGATION)
    }

    /// Serialize the catalog as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        catalog.validate().unwrap();
        assert_eq!(catalog.categories.len(), 10);
        assert_eq!(catalog.factors.len(), 5);
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = Catalog::builtin();
        let json = catalog.to_json_pretty().unwrap();
        let parsed = Catalog::from_json(&json).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_from_json_lowercases_keywords() {
        let mut catalog = Catalog::builtin();
        catalog.categories[0].keywords.push("Tableau CROISÉ".to_string());
        catalog.factors[0].rule.secondary.keywords.push("PDF".to_string());

        let parsed = Catalog::from_json(&catalog.to_json_pretty().unwrap()).unwrap();
        assert!(parsed.categories[0].keywords.contains(&"tableau croisé".to_string()));
        assert!(parsed.factors[0].rule.secondary.keywords.contains(&"pdf".to_string()));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(Catalog::builtin().to_json_pretty().unwrap().as_bytes())
            .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert!(catalog.category("customer_service").is_some());
    }

    #[test]
    fn test_missing_default_category() {
        let mut catalog = Catalog::builtin();
        catalog.categories.retain(|c| c.id != DEFAULT_CATEGORY_ID);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DefaultCategoryMissing { .. })
        ));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let mut catalog = Catalog::builtin();
        let copy = catalog.categories[0].clone();
        catalog.categories.push(copy);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateId { kind: "category", .. })
        ));
    }

    #[test]
    fn test_impact_out_of_range_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.factors[0].impact = 1.5;
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidImpact { .. })
        ));
    }

    #[test]
    fn test_mitigation_fallback() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.mitigation_for("data_availability"),
            "Structurer et centraliser les données avant l'automatisation"
        );
        assert_eq!(catalog.mitigation_for("budget"), FALLBACK_MITIGATION);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{\"categories\": 3}"),
            Err(CatalogError::Parse(_))
        ));
    }
}
