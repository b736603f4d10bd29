//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the collected answers
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// The human-readable summary
    Text,
    /// Outcome, summary, and raw answer map as JSON
    Json,
}

/// CLI arguments for askform
#[derive(Parser, Debug)]
#[command(name = "askform")]
#[command(author, version, about = "Collect structured answers from a human via a local web form")]
#[command(long_about = r#"
askform serves a question batch as a transient localhost web form, blocks
until the human submits answers (or the deadline elapses), then prints a
summary plus the raw answer map and exits.

The question batch is JSON: either {"title"?, "context"?, "questions": [..]}
or a bare array of questions. Each question needs "id" and "question"; the
optional "type" is one of text (default), select, multiselect, boolean.

Configuration files are loaded from (in priority order):
1. ASKFORM_* environment variables (e.g. ASKFORM_SERVER__PORT)
2. --config <path>      Explicit config file
3. ./askform.toml       Project-level config
4. ~/.config/askform/config.toml   Global config

Example:
  askform questions.json
  echo '[{"id":"q1","question":"Which database?"}]' | askform - --title "Setup"
  askform questions.json --timeout 120 --no-open --output json
"#)]
pub struct Cli {
    /// Path to the question batch JSON file, or '-' to read from stdin
    pub input: String,

    /// Title shown at the top of the form (overrides the batch's title)
    #[arg(long)]
    pub title: Option<String>,

    /// Context or background shown before the questions
    #[arg(long)]
    pub context: Option<String>,

    /// Preferred listen port (the range 3847-3947 is scanned when occupied)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Submission timeout in seconds
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Do not open the browser automatically
    #[arg(long)]
    pub no_open: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
