use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use ironseed_core::{init_logging, ConfigOverrides, ConsoleReporter, LogLevel, SeedConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "ironseed")]
#[command(about = "IronSeed - seed a Firestore collection with demo products")]
#[command(version)]
struct Cli {
    /// Service-account key file [default: serviceAccountKey.json]
    #[arg(long)]
    credentials: Option<PathBuf>,

    /// Project id (defaults to the key file's project_id)
    #[arg(long)]
    project: Option<String>,

    /// Firestore database id [default: (default)]
    #[arg(long)]
    database: Option<String>,

    /// Target collection [default: products]
    #[arg(long)]
    collection: Option<String>,

    /// Firestore emulator host:port
    #[arg(long)]
    emulator_host: Option<String>,

    /// JSON array of products to insert instead of the built-in ones
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Insert into an in-memory store and print the generated ids
    #[arg(long)]
    dry_run: bool,

    /// HTTP timeout in seconds [default: 30]
    #[arg(long)]
    timeout: Option<u64>,

    /// TOML config file [default: ironseed.toml if present]
    #[arg(long)]
    config: Option<PathBuf>,

    /// error, warn, info, debug or trace (falls back to RUST_LOG)
    #[arg(long)]
    log_level: Option<LogLevel>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            credentials: self.credentials.clone(),
            project: self.project.clone(),
            database: self.database.clone(),
            collection: self.collection.clone(),
            emulator_host: self.emulator_host.clone(),
            fixtures: self.fixtures.clone(),
            dry_run: self.dry_run,
            timeout_secs: self.timeout,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    info!("Starting IronSeed v{}", ironseed_core::VERSION);

    let mut reporter = ConsoleReporter::stdio();
    match run(&cli, &mut reporter).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.failed(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run<O, E>(cli: &Cli, reporter: &mut ConsoleReporter<O, E>) -> Result<()>
where
    O: std::io::Write,
    E: std::io::Write,
{
    let mut config = SeedConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.apply_process_env();
    config.apply_overrides(cli.overrides());

    let report = ironseed_core::run(&config, Utc::now(), reporter).await?;
    info!(
        collection = %report.collection,
        inserted = report.len(),
        "done"
    );
    Ok(())
}
