use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about = "A terminal currency counter with rolling digit tiles")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Locale identifier (overrides `counter.locale`)
    #[arg(short = 'l', long, global = true)]
    locale: Option<String>,

    /// Starting value in cents (overrides `counter.initial_cents`)
    #[arg(short = 'c', long, global = true, allow_negative_numbers = true)]
    cents: Option<i64>,

    /// Seed for the value driver (overrides `driver.seed`)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Jump to new values instead of rolling
    #[arg(long, global = true)]
    no_animation: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Print the tokens of a formatted value
    Tokens {
        /// Value in cents (defaults to the starting value)
        #[arg(allow_negative_numbers = true)]
        value: Option<i64>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List built-in locales
    Locales,
    /// Drive the counter without a terminal and print every update
    Simulate {
        /// Number of driver ticks
        #[arg(short = 'n', long, default_value_t = 20)]
        ticks: u32,
    },
}

impl Cli {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(locale) = &self.locale {
            config.counter.locale = locale.clone();
        }
        if let Some(cents) = self.cents {
            config.counter.initial_cents = cents;
        }
        if let Some(seed) = self.seed {
            config.driver.seed = Some(seed);
        }
        if self.no_animation {
            config.counter.animated = false;
        }
    }
}

/// Install the global subscriber
///
/// The terminal UI owns stdout and stderr, so `run` logs to a file instead.
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let path = AppConfig::log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    cli.apply_overrides(&mut config);
    let config = Arc::new(config);

    let tui = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, tui)?;

    // Handle commands
    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Tokens { value, json }) => {
            let cents = value.unwrap_or(config.counter.initial_cents);
            commands::tokens::run(&config, cents, json)
        }
        Some(Commands::Locales) => commands::locales::run(),
        Some(Commands::Simulate { ticks }) => commands::simulate::run(&config, ticks),
    }
}
