//! Rule-based scoring of job tasks for automation potential.
//!
//! An [`AnalysisEngine`] classifies each task into an automation category,
//! rates it against weighted complexity factors and derives automation
//! percentage, feasibility, development effort, time savings, risks and
//! return on investment. All reference data lives in an injectable
//! [`Catalog`].

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod validation;

mod rounding;

pub use analysis::{AnalysisEngine, AnalysisResult, AnalysisSummary, TaskAnalysis};
pub use catalog::Catalog;
pub use config::EngineConfig;
pub use error::{AnalysisError, CatalogError, ConfigError, Result};
pub use model::{JobContext, Task};
