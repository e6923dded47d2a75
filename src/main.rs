//! `pocketkit` command line: keypad calculator and chat front-ends.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pocketkit::calculator::{Calculator, InputEvent};
use pocketkit::chat::{Responder, Session};
use pocketkit::config::{ChatConfig, PocketConfig};
use pocketkit::ui::{self, CalculatorApp};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(name = "pocketkit", version, about)]
struct Cli {
    /// Configuration file (default: <config dir>/pocketkit/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter directive, overriding RUST_LOG and the config file.
    #[arg(long, global = true)]
    log_filter: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Four-function keypad calculator.
    Calc {
        /// Press these keys instead of opening the keypad, e.g. `12+3=` or `5 ± × 2 =`.
        #[arg(long, num_args = 1.., allow_hyphen_values = true)]
        press: Vec<String>,
    },
    /// Chat with the pattern-matching responder.
    Chat {
        /// Seed for reproducible reply choices.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = PocketConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let filter = env_filter(cli.log_filter.as_deref(), config.logging.filter.as_deref());

    match cli.command {
        Command::Calc { press } if press.is_empty() => {
            init_file_tracing(filter);
            ui::run(CalculatorApp::new()).context("Keypad UI failed")
        }
        Command::Calc { press } => {
            init_stderr_tracing(filter);
            run_batch(&press)
        }
        Command::Chat { seed } => {
            init_stderr_tracing(filter);
            run_chat(&config.chat, seed)
        }
    }
}

/// Feed `keys` to a fresh calculator and print the display.
fn run_batch(keys: &[String]) -> Result<()> {
    let events = InputEvent::parse_keys(keys.iter().map(String::as_str))?;

    let mut calculator = Calculator::new();
    for event in events {
        calculator.handle(event);
    }

    let display = calculator.display();
    if !display.history.is_empty() {
        println!("{}", display.history);
    }
    println!("{}", display.primary);
    Ok(())
}

fn run_chat(config: &ChatConfig, seed: Option<u64>) -> Result<()> {
    let rules = config.rule_set().context("Invalid chat rules")?;
    let responder = match seed {
        Some(seed) => Responder::with_seed(rules, seed),
        None => Responder::new(rules),
    };

    let mut session = Session::new(responder, config.session_options());
    session
        .run(io::stdin().lock(), io::stdout().lock())
        .context("Chat session failed")?;
    Ok(())
}

/// `--log-filter`, then `RUST_LOG`, then the config file, then the default.
fn env_filter(cli_filter: Option<&str>, config_filter: Option<&str>) -> EnvFilter {
    if let Some(directive) = cli_filter
        && let Ok(filter) = EnvFilter::try_new(directive)
    {
        return filter;
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    config_filter
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_stderr_tracing(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Log to a file so the keypad UI is never drawn over.
fn init_file_tracing(filter: EnvFilter) {
    match open_log_file() {
        Some((path, file)) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .init();
            tracing::debug!(path = %path.display(), "logging initialized");
        }
        // No log file: prefer no logs over corrupting the screen.
        None => tracing_subscriber::registry().with(filter).init(),
    }
}

fn open_log_file() -> Option<(PathBuf, File)> {
    let dir = dirs::cache_dir()?.join("pocketkit");
    fs::create_dir_all(&dir).ok()?;

    let path = dir.join("pocketkit.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;
    Some((path, file))
}
