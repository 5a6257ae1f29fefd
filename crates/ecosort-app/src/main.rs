//! EcoSort binary - composition root.
//!
//! 1. Parse CLI arguments
//! 2. Load configuration from TOML
//! 3. Initialize tracing
//! 4. Run the requested command against the resolver

mod cli;

use std::io::Write;

use clap::Parser;
use ecosort_action::{
    CategoryResolver, CollectingDispatcher, SlotTracker, TopicResolver, WasteInfoAction,
};
use ecosort_core::config::EcosortConfig;
use ecosort_core::error::EcosortError;

use cli::{CliArgs, Command};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Read before tracing starts; the log level may come from the file.
    let config_file = args.resolve_config_path();
    let config_exists = config_file.exists();
    let config = if config_exists {
        EcosortConfig::from_file(&config_file)?
    } else {
        EcosortConfig::default()
    };

    // RUST_LOG wins over flag and config.
    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .init();

    if config_exists {
        tracing::info!(path = %config_file.display(), "Configuration loaded");
    } else {
        tracing::debug!(path = %config_file.display(), "No config file, using defaults");
    }

    let stdout = std::io::stdout();
    run_command(args.command, config, &mut stdout.lock())
}

/// Execute one command, writing its output to `out`.
fn run_command(
    command: Command,
    config: EcosortConfig,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let resolver = CategoryResolver::default();

    match command {
        Command::Resolve { text } => {
            let explanation = resolver.explain(text.as_deref());
            tracing::debug!(keyword = ?explanation.keyword, "Resolved");
            writeln!(out, "{}", serde_json::to_string(&explanation.result)?)?;
        }
        Command::Reply { text } => {
            let slot_name = config.responses.slot_name.clone();
            let action = WasteInfoAction::new(resolver, config.responses)?;
            let mut tracker = SlotTracker::new();
            if let Some(text) = text {
                tracker.set_slot(slot_name, text);
            }
            let mut dispatcher = CollectingDispatcher::new();
            action.run(&tracker, &mut dispatcher);
            for message in dispatcher.drain() {
                writeln!(out, "{}", serde_json::to_string(&message)?)?;
            }
        }
        Command::Topic { message } => {
            if !config.topics.enabled {
                return Err(EcosortError::Config(
                    "offline topic responder is disabled (topics.enabled = false)".into(),
                )
                .into());
            }
            writeln!(out, "{}", TopicResolver::new().reply(&message))?;
        }
        Command::Rules => {
            for rule in resolver.rules() {
                writeln!(out, "{:<20} {}", rule.response_id(), rule.keywords().join(", "))?;
            }
        }
    }

    Ok(())
}
