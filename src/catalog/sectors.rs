//! Sector multipliers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Multiplier used for sectors missing from the table.
pub const FALLBACK_SECTOR_MULTIPLIER: f64 = 0.8;

/// Industry-specific scaling of automation and feasibility scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorMultipliers {
    pub multipliers: BTreeMap<String, f64>,
    #[serde(default = "default_fallback")]
    pub fallback: f64,
}

fn default_fallback() -> f64 {
    FALLBACK_SECTOR_MULTIPLIER
}

impl SectorMultipliers {
    /// The built-in sector table.
    pub fn builtin() -> Self {
        let multipliers = [
            ("technologie", 1.2),
            ("finance", 1.0),
            ("sante", 0.8),
            ("education", 0.7),
            ("marketing", 1.1),
            ("ressources-humaines", 1.0),
            ("manufacturing", 0.9),
            ("retail", 0.9),
            ("autre", 0.8),
        ]
        .into_iter()
        .map(|(sector, m)| (sector.to_string(), m))
        .collect();

        Self {
            multipliers,
            fallback: FALLBACK_SECTOR_MULTIPLIER,
        }
    }

    /// Multiplier for a sector, or the fallback for unknown sectors.
    pub fn get(&self, sector: &str) -> f64 {
        match self.multipliers.get(sector) {
            Some(m) => *m,
            None => {
                tracing::debug!(sector, fallback = self.fallback, "Unknown sector, using fallback multiplier");
                self.fallback
            }
        }
    }

    /// Whether the sector is in the table.
    pub fn is_known(&self, sector: &str) -> bool {
        self.multipliers.contains_key(sector)
    }
}

impl Default for SectorMultipliers {
    fn default() -> Self {
        Self::builtin()
    }
}
