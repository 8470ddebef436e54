use clap::Parser;
use tracing_subscriber::EnvFilter;

use automation_impact::cli::{Command, run_command};
use automation_impact::config::EngineConfig;

#[derive(Parser, Debug)]
#[command(name = "automation-impact")]
#[command(about = "Score job tasks for automation potential, effort and ROI", long_about = None)]
#[command(version)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "AIA_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = EngineConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let stdout = std::io::stdout();
    run_command(cli.command, config, &mut stdout.lock())
}
