//! CLI entrypoint for askform
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod announce;
mod commands;

use announce::ConsoleAnnouncer;
use anyhow::{Context, Result};
use askform_application::{
    AskQuestionsInput, AskQuestionsUseCase, BrowserLauncher, NoBrowserLauncher, WaitParams,
};
use askform_infrastructure::{
    AppState, ConfigLoader, InMemorySessionStore, SystemBrowserLauncher, WebServer,
};
use clap::Parser;
use commands::{Cli, OutputFormat};
use std::io::Read;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // Parse the question batch
    let raw = read_batch(&cli.input)?;
    let mut input = AskQuestionsInput::from_json(&raw).context("Failed to parse question batch")?;
    if let Some(title) = cli.title {
        input.title = Some(title);
    }
    if let Some(context) = cli.context {
        input.context = Some(context);
    }

    info!("Starting askform with {} questions", input.questions.len());

    // === Dependency Injection ===
    let store = Arc::new(InMemorySessionStore::new());
    let server = WebServer::start(
        cli.port.unwrap_or(config.server.port),
        AppState {
            store: store.clone(),
        },
    )
    .await?;

    let timeout_ms = cli
        .timeout
        .map(|secs| secs * 1000)
        .unwrap_or(config.wait.timeout_ms);
    let params = WaitParams::from_millis(timeout_ms, config.wait.poll_interval_ms);

    let auto_open = config.browser.auto_open && !cli.no_open;
    let browser: Arc<dyn BrowserLauncher> = if auto_open {
        Arc::new(SystemBrowserLauncher)
    } else {
        Arc::new(NoBrowserLauncher)
    };

    let use_case = AskQuestionsUseCase::new(store)
        .with_browser_launcher(browser)
        .with_announcer(Arc::new(ConsoleAnnouncer))
        .with_params(params);

    let result = use_case.execute(input, &server.base_url()).await?;
    server.shutdown().await;

    match cli.output {
        OutputFormat::Text => println!("{}", result.summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(())
}

fn read_batch(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read question batch from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read question batch from {}", input))
    }
}
