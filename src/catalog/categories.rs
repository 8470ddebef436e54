//! Automation categories.

use serde::{Deserialize, Serialize};

/// A bucket of AI technologies with baseline scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier, used for lookups.
    pub id: String,
    /// Display name.
    pub name: String,
    pub technologies: Vec<String>,
    /// Baseline feasibility on a 1-10 scale.
    pub typical_feasibility: f64,
    /// Baseline automation percentage.
    pub typical_automation: f64,
    /// Classification keywords, matched as lowercase substrings.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Multiplier applied to the base development effort.
    #[serde(default = "default_effort_multiplier")]
    pub effort_multiplier: f64,
}

fn default_effort_multiplier() -> f64 {
    1.0
}

struct Entry<'a> {
    id: &'a str,
    name: &'a str,
    technologies: [&'a str; 3],
    feasibility: f64,
    automation: f64,
    effort: f64,
    keywords: &'a [&'a str],
}

impl From<Entry<'_>> for Category {
    fn from(s: Entry<'_>) -> Self {
        Self {
            id: s.id.to_string(),
            name: s.name.to_string(),
            technologies: s.technologies.iter().map(|t| t.to_string()).collect(),
            typical_feasibility: s.feasibility,
            typical_automation: s.automation,
            keywords: s.keywords.iter().map(|k| k.to_string()).collect(),
            effort_multiplier: s.effort,
        }
    }
}

/// Id of the category used when no keyword matches.
pub const DEFAULT_CATEGORY_ID: &str = "administrative";

/// The ten built-in categories in declaration order.
///
/// Order matters: classification ties go to the earlier entry.
pub fn builtin_categories() -> Vec<Category> {
    vec![
        Entry {
            id: "data_processing",
            name: "Traitement de données",
            technologies: ["Machine Learning", "ETL automatisé", "Analytics AI"],
            feasibility: 8.0,
            automation: 75.0,
            effort: 1.0,
            keywords: &[
                "données",
                "data",
                "analyse",
                "traitement",
                "excel",
                "csv",
                "base de données",
                "statistiques",
                "calculs",
                "agrégation",
                "transformation",
                "nettoyage",
            ],
        }
        .into(),
        Entry {
            id: "document_processing",
            name: "Traitement de documents",
            technologies: ["OCR", "NLP", "Document AI"],
            feasibility: 7.0,
            automation: 65.0,
            effort: 1.2,
            keywords: &[
                "document",
                "pdf",
                "scan",
                "lecture",
                "extraction",
                "formulaire",
                "contrat",
                "facture",
                "classement",
                "archivage",
                "numérisation",
                "ocr",
            ],
        }
        .into(),
        Entry {
            id: "communication",
            name: "Communication",
            technologies: ["Chatbots", "Email automation", "NLG"],
            feasibility: 6.0,
            automation: 50.0,
            effort: 1.5,
            keywords: &[
                "email",
                "courrier",
                "réponse",
                "communication",
                "message",
                "contact",
                "client",
                "fournisseur",
                "appel",
                "téléphone",
                "chat",
                "notification",
            ],
        }
        .into(),
        Entry {
            id: "analysis_reporting",
            name: "Analyse et reporting",
            technologies: ["Business Intelligence", "Automated reporting", "Data viz"],
            feasibility: 9.0,
            automation: 80.0,
            effort: 0.8,
            keywords: &[
                "rapport",
                "reporting",
                "dashboard",
                "tableau de bord",
                "indicateur",
                "kpi",
                "métriques",
                "performance",
                "suivi",
                "monitoring",
                "visualisation",
            ],
        }
        .into(),
        Entry {
            id: "content_creation",
            name: "Création de contenu",
            technologies: ["GPT/LLM", "Content generation", "Template automation"],
            feasibility: 7.0,
            automation: 60.0,
            effort: 1.3,
            keywords: &[
                "rédaction",
                "écriture",
                "contenu",
                "article",
                "post",
                "publication",
                "création",
                "design",
                "présentation",
                "template",
                "modèle",
            ],
        }
        .into(),
        Entry {
            id: "scheduling_planning",
            name: "Planification",
            technologies: [
                "Algorithmes d'optimisation",
                "Calendar AI",
                "Resource planning",
            ],
            feasibility: 8.0,
            automation: 70.0,
            effort: 1.0,
            keywords: &[
                "planification",
                "planning",
                "calendrier",
                "organisation",
                "rendez-vous",
                "réunion",
                "agenda",
                "horaire",
                "allocation",
                "ressources",
                "scheduling",
            ],
        }
        .into(),
        Entry {
            id: "quality_control",
            name: "Contrôle qualité",
            technologies: ["Computer Vision", "Pattern recognition", "Anomaly detection"],
            feasibility: 7.0,
            automation: 65.0,
            effort: 1.4,
            keywords: &[
                "contrôle",
                "vérification",
                "validation",
                "qualité",
                "audit",
                "inspection",
                "conformité",
                "test",
                "review",
                "approbation",
                "correction",
            ],
        }
        .into(),
        Entry {
            id: "customer_service",
            name: "Service client",
            technologies: ["Conversational AI", "Sentiment analysis", "Ticket routing"],
            feasibility: 8.0,
            automation: 75.0,
            effort: 1.6,
            keywords: &[
                "service client",
                "support",
                "réclamation",
                "ticket",
                "assistance",
                "help desk",
                "satisfaction",
                "feedback",
                "relation client",
            ],
        }
        .into(),
        Entry {
            id: "research_monitoring",
            name: "Recherche et veille",
            technologies: ["Web scraping", "Information extraction", "Trend analysis"],
            feasibility: 6.0,
            automation: 55.0,
            effort: 1.1,
            keywords: &[
                "recherche",
                "veille",
                "benchmark",
                "étude",
                "investigation",
                "analyse concurrentielle",
                "market research",
                "intelligence",
                "monitoring",
                "surveillance",
            ],
        }
        .into(),
        Entry {
            id: DEFAULT_CATEGORY_ID,
            name: "Tâches administratives",
            technologies: ["RPA", "Workflow automation", "Form processing"],
            feasibility: 9.0,
            automation: 85.0,
            effort: 0.5,
            keywords: &[
                "saisie",
                "administration",
                "gestion",
                "suivi administratif",
                "procédure",
                "workflow",
                "processus",
                "routine",
                "tâches répétitives",
                "bureaucratie",
            ],
        }
        .into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order_and_count() {
        let ids: Vec<String> = builtin_categories().into_iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 10);
        assert_eq!(ids.first().map(String::as_str), Some("data_processing"));
        assert_eq!(ids.last().map(String::as_str), Some(DEFAULT_CATEGORY_ID));
    }

    #[test]
    fn test_effort_multiplier_extremes() {
        let categories = builtin_categories();
        let cheapest = categories
            .iter()
            .min_by(|a, b| a.effort_multiplier.total_cmp(&b.effort_multiplier))
            .unwrap();
        let priciest = categories
            .iter()
            .max_by(|a, b| a.effort_multiplier.total_cmp(&b.effort_multiplier))
            .unwrap();
        assert_eq!(cheapest.id, "administrative");
        assert_eq!(priciest.id, "customer_service");
    }
}
