//! # Game Launcher - In-memory launcher backend demo
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Loads: LauncherConfig (shared)                          │
//! │    ├── Creates: InMemoryAccountRepository (adapter)            │
//! │    ├── Creates: AccountDirectory, CatalogService (domain)      │
//! │    └── Runs: Walkthrough (use case)                            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!   launcher                      - Run the walkthrough with the built-in catalog
//!   launcher --config <FILE>      - Use the catalog from a JSON config file
//!   launcher --json               - Print the report as JSON

use std::path::PathBuf;

use clap::Parser;
use launcher_adapter::repository::in_memory::InMemoryAccountRepository;
use launcher_domain::{AccountDirectory, AccountRepository, CatalogService};
use launcher_shared::{LauncherConfig, LauncherError};
use launcher_usecase::{Walkthrough, WalkthroughReport};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "launcher")]
#[command(about = "Game launcher backend demo: accounts, catalog, friends, achievements")]
#[command(version)]
struct Cli {
    /// JSON config file (catalog, log filter)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LauncherConfig::from_file(path)?,
        None => LauncherConfig::default(),
    };

    // Initialize logging; stdout is reserved for the report
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => fallback_filter(&config)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    println!("{}", run(&cli, &config)?);
    Ok(())
}

/// Log filter from the config file, used when `RUST_LOG` is unset
fn fallback_filter(config: &LauncherConfig) -> launcher_shared::Result<EnvFilter> {
    let directives = config.log_filter.as_deref().unwrap_or("warn");
    EnvFilter::try_new(directives).map_err(|e| {
        LauncherError::Config(format!("invalid logFilter '{}': {}", directives, e))
    })
}

/// Wire the launcher and produce the text to print
fn run(cli: &Cli, config: &LauncherConfig) -> anyhow::Result<String> {
    // Adapters
    let mut directory = AccountDirectory::new(InMemoryAccountRepository::new());

    run_with(&mut directory, cli, config)
}

fn run_with<R: AccountRepository>(
    directory: &mut AccountDirectory<R>,
    cli: &Cli,
    config: &LauncherConfig,
) -> anyhow::Result<String> {
    // Domain service
    let catalog = CatalogService::new(config.catalog.iter().map(String::as_str));
    info!(titles = catalog.browse().len(), "Catalog ready");

    render(Walkthrough::default().run(directory, &catalog), cli.json)
}

/// Turn a walkthrough outcome into the text printed on stdout.
///
/// A rejected login is an expected outcome and prints "Login Failed";
/// any other error is propagated.
fn render(
    result: launcher_shared::Result<WalkthroughReport>,
    json: bool,
) -> anyhow::Result<String> {
    match result {
        Ok(report) if json => Ok(serde_json::to_string_pretty(&report)?),
        Ok(report) => Ok(report.to_string()),
        Err(LauncherError::LoginRejected { username }) => {
            info!(%username, "Walkthrough stopped at login");
            Ok("Login Failed".to_string())
        }
        Err(e) => Err(e.into()),
    }
}
