//! Task scoring engine.
//!
//! Each task goes through the same fixed pipeline:
//! 1. Category classification by keyword votes
//! 2. Complexity assessment per factor
//! 3. Automation potential and feasibility
//! 4. Development effort and phases
//! 5. Time savings and risks
//! 6. Return on investment
//!
//! The engine holds only immutable catalog and configuration data, so one
//! instance can serve concurrent analyses.

mod classifier;
mod complexity;
mod effort;
mod plan;
mod potential;
mod risk;
mod roi;
mod savings;
mod summary;

pub use classifier::CategoryClassifier;
pub use complexity::{ComplexityAssessment, FactorAssessment, assess_complexity};
pub use effort::{
    BASE_DEVELOPMENT_HOURS, DevelopmentEstimate, ImplementationPhase, LOW_FEASIBILITY_THRESHOLD,
    WEAK_FACTOR_THRESHOLD, estimate_development,
};
pub use plan::{
    ActionItem, MAX_ACTION_ITEMS, ReportInsights, action_items, high_automation_count,
    high_feasibility_count, overall_score, report_insights,
};
pub use potential::{AutomationLevel, AutomationPotential, automation_potential, complexity_multiplier};
pub use risk::{HIGH_RISK_BELOW, MEDIUM_RISK_BELOW, RiskFactor, RiskLevel, identify_risks};
pub use roi::{RoiEstimate, estimate_roi, payback_months};
pub use savings::{TimeSavings, WEEKS_PER_MONTH, WEEKS_PER_YEAR, time_savings};
pub use summary::{
    AnalysisSummary, AutomationDistribution, DevelopmentSummary, FinancialImpact, summarize,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Catalog, Category};
use crate::config::EngineConfig;
use crate::error::{CatalogError, Result};
use crate::model::{JobContext, Task};
use crate::validation::InputValidator;

/// Full analysis of one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAnalysis {
    #[serde(flatten)]
    pub task: Task,
    pub category: Category,
    pub complexity_assessment: ComplexityAssessment,
    pub automation_level: AutomationLevel,
    pub automation_percentage: u32,
    pub feasibility_score: f64,
    pub time_savings: TimeSavings,
    /// Development hours.
    pub dev_time_estimate: u32,
    /// User configuration hours.
    pub user_config_time: u32,
    pub implementation_phases: Vec<ImplementationPhase>,
    pub required_technologies: Vec<String>,
    pub risk_factors: Vec<RiskFactor>,
    pub roi_estimate: RoiEstimate,
}

/// Result of analysing a job's task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Identifier for storing the result.
    pub id: Uuid,
    pub job_info: JobContext,
    pub analysis_date: DateTime<Utc>,
    pub tasks: Vec<TaskAnalysis>,
    pub summary: AnalysisSummary,
    pub insights: ReportInsights,
    /// Non-blocking input warnings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Scores tasks against an injected catalog.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    catalog: Catalog,
    config: EngineConfig,
    classifier: CategoryClassifier,
    validator: InputValidator,
}

impl AnalysisEngine {
    /// Create an engine, checking the catalog first.
    pub fn new(mut catalog: Catalog, config: EngineConfig) -> std::result::Result<Self, CatalogError> {
        catalog.lowercase_keywords();
        catalog.validate()?;
        let classifier = CategoryClassifier::new(&catalog)?;
        let validator = InputValidator::new(&config);

        Ok(Self {
            catalog,
            config,
            classifier,
            validator,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Pick the category for a task.
    pub fn classify(&self, task: &Task) -> &Category {
        self.category_for(&task.search_text())
    }

    fn category_for(&self, text: &str) -> &Category {
        &self.catalog.categories[self.classifier.classify(text)]
    }

    /// Rate every complexity factor for a task.
    pub fn assess_complexity(&self, task: &Task, category: &Category) -> ComplexityAssessment {
        assess_complexity(&self.catalog.factors, &task.search_text(), category)
    }

    /// Automation percentage and feasibility for a sector.
    pub fn automation_potential(
        &self,
        category: &Category,
        assessment: &ComplexityAssessment,
        sector: &str,
    ) -> AutomationPotential {
        let sector_multiplier = self.catalog.sectors.get(sector);
        automation_potential(category, &self.catalog.factors, assessment, sector_multiplier)
    }

    /// Run the full pipeline on one task without input validation.
    ///
    /// Hours are expected to be finite; [`analyze_tasks`](Self::analyze_tasks)
    /// rejects anything else before calling this.
    pub fn analyze_task(&self, task: &Task, job: &JobContext) -> TaskAnalysis {
        let text = task.search_text();
        let category = self.category_for(&text);
        let assessment = assess_complexity(&self.catalog.factors, &text, category);
        let potential = self.automation_potential(category, &assessment, &job.sector);
        let development = estimate_development(category, &assessment, &potential);
        let savings = time_savings(task.hours, &potential);
        let risks = identify_risks(&self.catalog, &assessment);
        let roi = estimate_roi(&savings, &development, &self.config);

        tracing::debug!(
            task = %task.name,
            category = %category.id,
            automation = potential.automation_percentage,
            feasibility = potential.feasibility_score,
            dev_hours = development.development_hours,
            "Analyzed task"
        );

        TaskAnalysis {
            task: task.clone(),
            category: category.clone(),
            automation_level: AutomationLevel::from_percentage(
                potential.automation_percentage,
                &self.config,
            ),
            automation_percentage: potential.automation_percentage,
            feasibility_score: potential.feasibility_score,
            time_savings: savings,
            dev_time_estimate: development.development_hours,
            user_config_time: development.user_config_hours,
            implementation_phases: development.phases,
            required_technologies: category.technologies.clone(),
            risk_factors: risks,
            roi_estimate: roi,
            complexity_assessment: assessment,
        }
    }

    /// Validate the input, analyse every task and summarise.
    pub fn analyze_tasks(&self, job: &JobContext, tasks: &[Task]) -> Result<AnalysisResult> {
        self.analyze_tasks_at(job, tasks, Utc::now())
    }

    /// Like [`analyze_tasks`](Self::analyze_tasks) with a caller-supplied timestamp.
    pub fn analyze_tasks_at(
        &self,
        job: &JobContext,
        tasks: &[Task],
        analysis_date: DateTime<Utc>,
    ) -> Result<AnalysisResult> {
        let warnings = self.validator.validate(job, tasks)?;
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }

        let analyses: Vec<TaskAnalysis> = tasks.iter().map(|t| self.analyze_task(t, job)).collect();
        let summary = summarize(&analyses, &self.config);
        let insights = report_insights(&analyses, &summary, &self.config);

        tracing::info!(
            tasks = summary.total_tasks,
            weekly_savings = summary.total_time_savings_weekly,
            average_automation = summary.automation_percentage_average,
            "Analysis complete"
        );

        Ok(AnalysisResult {
            id: Uuid::new_v4(),
            job_info: job.clone(),
            analysis_date,
            tasks: analyses,
            summary,
            insights,
            warnings,
        })
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(Catalog::builtin(), EngineConfig::default())
            .expect("Built-in catalog is valid")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::AnalysisError;

    fn job(sector: &str) -> JobContext {
        JobContext::new(sector, "Assistant comptable", "Suivi des factures fournisseurs", 40.0)
    }

    fn invoice_task() -> Task {
        Task::new(
            "Saisie de factures",
            "saisie manuelle de données excel routine",
            10.0,
        )
    }

    #[test]
    fn test_invoice_entry_scenario() {
        let engine = AnalysisEngine::default();
        let analysis = engine.analyze_task(&invoice_task(), &job("finance"));

        // Two votes each for data processing and administrative; declaration order decides.
        assert_eq!(analysis.category.id, "data_processing");
        assert!(analysis.automation_percentage >= 70);
        assert_eq!(analysis.automation_level, AutomationLevel::High);
        assert_eq!(analysis.feasibility_score, 7.5);
        assert_eq!(analysis.dev_time_estimate, 40);
        assert_eq!(analysis.user_config_time, 6);
        assert_eq!(analysis.required_technologies, analysis.category.technologies);

        // Only the medium integration complexity raises a risk.
        assert_eq!(analysis.risk_factors.len(), 1);
        assert_eq!(analysis.risk_factors[0].level, RiskLevel::Medium);
    }

    #[test]
    fn test_judgment_lowers_feasibility() {
        let engine = AnalysisEngine::default();
        let plain = Task::new("Revue trimestrielle", "sur le budget", 4.0);
        let judged = Task::new(
            "Revue trimestrielle",
            "décision stratégique créative sur le budget",
            4.0,
        );

        let plain = engine.analyze_task(&plain, &job("finance"));
        let judged = engine.analyze_task(&judged, &job("finance"));

        assert_eq!(plain.category.id, judged.category.id);
        assert_eq!(judged.complexity_assessment.get("human_judgment").unwrap().score, 0.2);
        assert_eq!(plain.feasibility_score, 4.9);
        assert_eq!(judged.feasibility_score, 4.5);
        assert!(judged.feasibility_score < plain.feasibility_score);
    }

    #[test]
    fn test_unknown_sector_uses_fallback() {
        let engine = AnalysisEngine::default();
        let unknown = engine.analyze_task(&invoice_task(), &job("aerospatial"));
        let autre = engine.analyze_task(&invoice_task(), &job("autre"));
        assert_eq!(unknown.automation_percentage, autre.automation_percentage);
        assert_eq!(unknown.feasibility_score, autre.feasibility_score);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let engine = AnalysisEngine::default();
        let texts = [
            ("Veille", "veille concurrentielle et recherche"),
            ("Support", "répondre aux tickets du service client"),
            ("Plan", "planification des réunions et agenda"),
            ("Créa", "création de contenu créatif et stratégique, intégration système"),
            ("Divers", "rien de particulier"),
        ];
        for sector in ["technologie", "education", "inconnu"] {
            for (name, description) in texts {
                let a = engine.analyze_task(&Task::new(name, description, 8.0), &job(sector));
                assert!((5..=95).contains(&a.automation_percentage));
                assert!((1.0..=10.0).contains(&a.feasibility_score));
                assert_eq!(a.feasibility_score, (a.feasibility_score * 10.0).round() / 10.0);
                assert_eq!(a.complexity_assessment.len(), 5);
            }
        }
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let engine = AnalysisEngine::default();
        let first = engine.analyze_task(&invoice_task(), &job("finance"));
        let second = engine.analyze_task(&invoice_task(), &job("finance"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_analyze_tasks_builds_summary() {
        let engine = AnalysisEngine::default();
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
        let tasks = vec![
            invoice_task(),
            Task::new("Relances", "email de relance client", 5.0),
        ];

        let result = engine.analyze_tasks_at(&job("finance"), &tasks, date).unwrap();

        assert_eq!(result.analysis_date, date);
        assert_eq!(result.tasks.len(), 2);
        assert_eq!(result.summary.total_tasks, 2);
        assert_eq!(result.summary.total_current_hours_weekly, 15.0);
        assert!(result.warnings.is_empty());

        assert_eq!(result.insights.overall_score, overall_score(&result.summary));
        assert!(result.insights.high_automation_count >= 1);
        assert!(result
            .insights
            .action_items
            .iter()
            .any(|item| item.task == "Saisie de factures"));
    }

    #[test]
    fn test_invalid_input_produces_no_result() {
        let engine = AnalysisEngine::default();
        assert_eq!(
            engine.analyze_tasks(&job("finance"), &[]).unwrap_err(),
            AnalysisError::EmptyTaskList
        );

        let undescribed = JobContext::new("finance", "Comptable", "", 40.0);
        assert_eq!(
            engine.analyze_tasks(&undescribed, &[invoice_task()]).unwrap_err(),
            AnalysisError::MissingJobField {
                field: "description"
            }
        );

        let bad = vec![Task::new("Saisie", "saisie excel", 0.0)];
        assert!(matches!(
            engine.analyze_tasks(&job("finance"), &bad),
            Err(AnalysisError::InvalidHours { .. })
        ));
    }

    #[test]
    fn test_overbooked_hours_warn() {
        let engine = AnalysisEngine::default();
        let mut context = job("finance");
        context.total_hours = 10.0;

        let result = engine.analyze_tasks(&context, &[invoice_task(), invoice_task()]).unwrap();
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_result_round_trip() {
        let engine = AnalysisEngine::default();
        let tasks = vec![
            invoice_task(),
            Task::new("Arbitrages", "décision stratégique, intégration système", 2.5),
            Task::new("Courrier", "tri du courrier et réponse aux fournisseurs", 6.0),
        ];
        let result = engine.analyze_tasks(&job("marketing"), &tasks).unwrap();

        let json = serde_json::to_string(&result).unwrap();
        let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_substituted_catalog() {
        let mut catalog = Catalog::builtin();
        for category in &mut catalog.categories {
            category.typical_automation = 10.0;
        }
        let engine = AnalysisEngine::new(catalog, EngineConfig::default()).unwrap();
        let analysis = engine.analyze_task(&invoice_task(), &job("finance"));
        assert_eq!(analysis.automation_level, AutomationLevel::Low);
    }

    #[test]
    fn test_uppercase_catalog_keywords_match() {
        let mut catalog = Catalog::builtin();
        for factor in &mut catalog.factors {
            if factor.id == "data_availability" {
                factor.rule.primary.keywords = vec!["EXCEL".to_string()];
            }
        }
        let engine = AnalysisEngine::new(catalog, EngineConfig::default()).unwrap();

        let analysis = engine.analyze_task(&Task::new("Export", "Export Excel", 2.0), &job("finance"));
        let data = analysis.complexity_assessment.get("data_availability").unwrap();
        assert_eq!(data.score, 1.0);
    }

    #[test]
    fn test_engine_shared_across_threads() {
        let engine = Arc::new(AnalysisEngine::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || {
                    let task = Task::new(format!("Saisie {i}"), "saisie excel routine", 2.0 + i as f64);
                    engine.analyze_tasks(&job("retail"), &[task]).map(|r| r.summary.total_tasks)
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), 1);
        }
    }
}
