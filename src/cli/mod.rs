//! Command-line commands.
//!
//! Commands write JSON to the supplied writer; logs go to stderr.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisEngine;
use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::export::task_rows;
use crate::model::{JobContext, Task};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze the tasks of a job from a JSON request file
    Analyze {
        /// Request file: {"job": {...}, "tasks": [...]}
        input: PathBuf,

        /// Catalog file replacing the built-in catalog
        #[arg(short, long, env = "AIA_CATALOG")]
        catalog: Option<PathBuf>,

        /// Print one flat row per task instead of the full result
        #[arg(long)]
        rows: bool,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the catalog in use
    Catalog {
        /// Catalog file replacing the built-in catalog
        #[arg(short, long, env = "AIA_CATALOG")]
        catalog: Option<PathBuf>,
    },
}

/// Contents of a request file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub job: JobContext,
    pub tasks: Vec<Task>,
}

/// Run a command.
pub fn run_command(cmd: Command, config: EngineConfig, out: &mut impl Write) -> anyhow::Result<()> {
    match cmd {
        Command::Analyze {
            input,
            catalog,
            rows,
            compact,
        } => analyze(&input, catalog.as_deref(), config, rows, compact, out),
        Command::Catalog { catalog } => show_catalog(catalog.as_deref(), out),
    }
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

fn read_request(path: &Path) -> anyhow::Result<AnalysisRequest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid request in {}", path.display()))
}

fn analyze(
    input: &Path,
    catalog: Option<&Path>,
    config: EngineConfig,
    rows: bool,
    compact: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let engine = AnalysisEngine::new(load_catalog(catalog)?, config)?;
    let request = read_request(input)?;

    tracing::info!(
        job = %request.job.title,
        sector = %request.job.sector,
        tasks = request.tasks.len(),
        "Analyzing tasks"
    );

    let result = engine.analyze_tasks(&request.job, &request.tasks)?;

    if rows {
        write_json(out, &task_rows(&result.tasks), compact)
    } else {
        write_json(out, &result, compact)
    }
}

fn show_catalog(catalog: Option<&Path>, out: &mut impl Write) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog)?;
    writeln!(out, "{}", catalog.to_json_pretty()?)?;
    Ok(())
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T, compact: bool) -> anyhow::Result<()> {
    if compact {
        serde_json::to_writer(&mut *out, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
