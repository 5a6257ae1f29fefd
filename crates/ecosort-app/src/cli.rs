//! CLI argument definitions for the EcoSort resolver.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// EcoSort - resolve waste categories to disposal guidance.
#[derive(Parser, Debug)]
#[command(name = "ecosort", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a waste category and print the outcome as JSON.
    Resolve {
        /// Slot value; omit to resolve an absent slot.
        text: Option<String>,
    },
    /// Run the waste-info action and print the outgoing messages.
    Reply {
        /// Slot value; omit to leave the slot unset.
        text: Option<String>,
    },
    /// Answer a chat message from the offline topic table.
    Topic {
        /// Free-text chat message.
        message: String,
    },
    /// List the category rules in evaluation order.
    Rules,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > ECOSORT_CONFIG env var > ~/.ecosort/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("ECOSORT_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log filter.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".ecosort").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".ecosort").join("config.toml");
    }
    PathBuf::from("config.toml")
}
