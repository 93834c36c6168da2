//! `loan` - interactive loan application wizard

mod commands;
mod style;
mod wizard;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use loan_wizard::{LoanApiClient, WizardConfig};

use crate::commands::contact::ContactArgs;

#[derive(Parser)]
#[command(
    name = "loan",
    version,
    about = "Apply for a loan and get an instant approval prediction"
)]
struct Cli {
    /// Base URL of the loan service API
    #[arg(long, env = "LOAN_API_URL", global = true)]
    api_url: Option<String>,

    /// Config file (defaults to <config dir>/loan-wizard/config.toml)
    #[arg(long, env = "LOAN_WIZARD_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in an application and get a prediction (default)
    Apply,

    /// Send a message to the loan team
    Contact(ContactArgs),

    /// Check that the loan service is reachable
    Health,

    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Commands::Apply) {
        Commands::Apply => {
            let client = LoanApiClient::new(config)?;
            wizard::run_apply_wizard(client).await
        }
        Commands::Contact(args) => {
            let client = LoanApiClient::new(config)?;
            commands::contact::run(client, args).await
        }
        Commands::Health => {
            let client = LoanApiClient::new(config)?;
            commands::health::run(&client).await
        }
        Commands::Config => commands::config::run(&config, cli.config.as_deref()),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "loan_wizard=debug,loan=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// File (or defaults), then command-line overrides.
fn load_config(cli: &Cli) -> Result<WizardConfig> {
    let mut config = WizardConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url.clone());
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout_secs(secs);
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

pub fn print_banner() {
    println!(
        "{}",
        style(
            r#"
  ██╗      ██████╗  █████╗ ███╗   ██╗
  ██║     ██╔═══██╗██╔══██╗████╗  ██║
  ██║     ██║   ██║███████║██╔██╗ ██║
  ██║     ██║   ██║██╔══██║██║╚██╗██║
  ███████╗╚██████╔╝██║  ██║██║ ╚████║
  ╚══════╝ ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═══╝
"#
        )
        .cyan()
    );
}
