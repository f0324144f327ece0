//! Linksumma CLI - summarise a webpage through a webhook
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use linksumma::{logging, ui, validate, Config, Summarizer, WebhookClient};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "linksumma")]
#[command(author, version, about = "TUI form for webhook-backed webpage summarisation", long_about = None)]
struct Cli {
    /// Path to a linksumma.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Summarization webhook URL (overrides config and environment)
    #[arg(long, global = true)]
    endpoint: Option<String>,
    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise a webpage by URL without starting the TUI
    Summarise {
        /// URL to summarise
        url: String,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "linksumma", &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(endpoint) = cli.endpoint {
        config.webhook.endpoint = Some(endpoint);
    }
    if let Some(timeout) = cli.timeout {
        config.webhook.timeout_secs = timeout;
    }

    logging::initialize(&config.logging.path, config.log_level()?);
    let settings = config.webhook_settings()?;
    log::info!(
        "webhook endpoint={} timeout={:?}",
        settings.endpoint,
        settings.timeout
    );
    let client = WebhookClient::new(settings)?;

    match cli.command {
        Some(Commands::Summarise { url }) => summarise_once(&client, &url).await,
        Some(Commands::Completions { .. }) => Ok(ExitCode::SUCCESS),
        None => {
            // Default: Launch the TUI
            ui::run(Arc::new(client)).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Run one validate → submit → interpret cycle and print the outcome.
///
/// User-facing failures are printed in red and reported through the exit code.
async fn summarise_once(client: &WebhookClient, input: &str) -> anyhow::Result<ExitCode> {
    let url = match validate::validate(input) {
        Ok(url) => url,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("Summarising: {}", url);
    match client.summarize(&url).await {
        Ok(summary) => {
            println!("\n{}\n", summary.title.bold());
            println!("{}", summary.summary);
            println!("\n{} {}", "Source:".dimmed(), url);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            log::warn!("summarise failed kind={} error={:?}", err.kind(), err);
            eprintln!("{}", err.to_string().red());
            Ok(ExitCode::FAILURE)
        }
    }
}
