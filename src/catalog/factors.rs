//! Complexity factors and their keyword rules.

use serde::{Deserialize, Serialize};

/// One of the three discrete levels a factor can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelKey {
    High,
    Medium,
    Low,
}

impl LevelKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelKey::High => "high",
            LevelKey::Medium => "medium",
            LevelKey::Low => "low",
        }
    }
}

/// Score and description attached to a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorLevel {
    /// Automatability contribution in [0, 1] (1 = no obstacle).
    pub score: f64,
    pub description: String,
}

/// The high/medium/low levels of a factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorLevels {
    pub high: FactorLevel,
    pub medium: FactorLevel,
    pub low: FactorLevel,
}

impl FactorLevels {
    /// Get the level for a key.
    pub fn get(&self, key: LevelKey) -> &FactorLevel {
        match key {
            LevelKey::High => &self.high,
            LevelKey::Medium => &self.medium,
            LevelKey::Low => &self.low,
        }
    }

    /// Iterate over all three levels.
    pub fn iter(&self) -> impl Iterator<Item = (LevelKey, &FactorLevel)> {
        [
            (LevelKey::High, &self.high),
            (LevelKey::Medium, &self.medium),
            (LevelKey::Low, &self.low),
        ]
        .into_iter()
    }
}

/// A keyword set that selects a level when any keyword is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleBranch {
    pub level: LevelKey,
    pub keywords: Vec<String>,
}

impl RuleBranch {
    fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }

    fn lowercase_keywords(&mut self) {
        for keyword in &mut self.keywords {
            *keyword = keyword.to_lowercase();
        }
    }
}

/// Two-branch keyword rule with a fallback level.
///
/// The primary branch is tried first, then the secondary branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub primary: RuleBranch,
    pub secondary: RuleBranch,
    pub fallback: LevelKey,
}

impl KeywordRule {
    /// Pick the level for lowercased task text.
    pub fn resolve(&self, text: &str) -> LevelKey {
        if self.primary.matches(text) {
            self.primary.level
        } else if self.secondary.matches(text) {
            self.secondary.level
        } else {
            self.fallback
        }
    }

    /// Lowercase both branches so they match lowercased task text.
    pub fn lowercase_keywords(&mut self) {
        self.primary.lowercase_keywords();
        self.secondary.lowercase_keywords();
    }
}

/// A weighted dimension of task complexity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityFactor {
    pub id: String,
    pub name: String,
    /// Weight in [0, 1]; bounds how far a low score can pull the multiplier down.
    pub impact: f64,
    pub levels: FactorLevels,
    pub rule: KeywordRule,
    /// Advice attached to risks raised by this factor.
    pub mitigation: String,
}

impl ComplexityFactor {
    /// The multiplier term for a level score: `score * impact + (1 - impact)`.
    pub fn damped(&self, score: f64) -> f64 {
        score * self.impact + (1.0 - self.impact)
    }
}

fn level(score: f64, description: &str) -> FactorLevel {
    FactorLevel {
        score,
        description: description.to_string(),
    }
}

fn branch(level: LevelKey, keywords: &[&str]) -> RuleBranch {
    RuleBranch {
        level,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// The five built-in factors, in evaluation order.
pub fn builtin_factors() -> Vec<ComplexityFactor> {
    use LevelKey::{High, Low, Medium};

    vec![
        ComplexityFactor {
            id: "data_availability".to_string(),
            name: "Disponibilité des données".to_string(),
            impact: 0.3,
            levels: FactorLevels {
                high: level(1.0, "Données structurées et accessibles"),
                medium: level(0.6, "Données partiellement structurées"),
                low: level(0.3, "Données non structurées ou difficiles d'accès"),
            },
            rule: KeywordRule {
                primary: branch(High, &["excel", "csv", "base de données"]),
                secondary: branch(Medium, &["document", "email"]),
                fallback: Low,
            },
            mitigation: "Structurer et centraliser les données avant l'automatisation".to_string(),
        },
        ComplexityFactor {
            id: "process_standardization".to_string(),
            name: "Standardisation du processus".to_string(),
            impact: 0.25,
            levels: FactorLevels {
                high: level(1.0, "Processus très standardisé et répétitif"),
                medium: level(0.6, "Processus partiellement standardisé"),
                low: level(0.3, "Processus créatif ou très variable"),
            },
            rule: KeywordRule {
                primary: branch(High, &["routine", "répétitif", "standard"]),
                secondary: branch(Medium, &["analyse", "rapport"]),
                fallback: Low,
            },
            mitigation: "Standardiser les processus métier en amont".to_string(),
        },
        ComplexityFactor {
            id: "technology_maturity".to_string(),
            name: "Maturité technologique".to_string(),
            impact: 0.2,
            levels: FactorLevels {
                high: level(1.0, "Technologies IA très matures"),
                medium: level(0.7, "Technologies émergentes"),
                low: level(0.4, "Technologies expérimentales"),
            },
            rule: KeywordRule {
                primary: branch(High, &["données", "document", "email"]),
                secondary: branch(Medium, &["analyse", "communication"]),
                fallback: Low,
            },
            mitigation: "Commencer par un pilote ou utiliser des technologies plus matures"
                .to_string(),
        },
        // Inverted: a "high" integration complexity is the low-scoring level.
        ComplexityFactor {
            id: "integration_complexity".to_string(),
            name: "Complexité d'intégration".to_string(),
            impact: 0.15,
            levels: FactorLevels {
                high: level(0.3, "Intégration très complexe"),
                medium: level(0.6, "Intégration modérée"),
                low: level(1.0, "Intégration simple"),
            },
            rule: KeywordRule {
                primary: branch(Low, &["simple", "standalone"]),
                secondary: branch(High, &["système", "intégration"]),
                fallback: Medium,
            },
            mitigation: "Prévoir une phase d'intégration dédiée avec les équipes IT".to_string(),
        },
        ComplexityFactor {
            id: "human_judgment".to_string(),
            name: "Besoin de jugement humain".to_string(),
            impact: 0.1,
            levels: FactorLevels {
                high: level(0.2, "Décisions critiques nécessaires"),
                medium: level(0.5, "Supervision humaine requise"),
                low: level(1.0, "Peu de supervision nécessaire"),
            },
            rule: KeywordRule {
                primary: branch(High, &["créatif", "stratégique", "décision"]),
                secondary: branch(Medium, &["validation", "contrôle"]),
                fallback: Low,
            },
            mitigation: "Maintenir une supervision humaine et des points de validation"
                .to_string(),
        },
    ]
}
