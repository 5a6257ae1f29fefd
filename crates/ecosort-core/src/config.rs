use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{EcosortError, Result};

/// Placeholder the fallback template interpolates the user's text into.
pub const WASTE_TYPE_PLACEHOLDER: &str = "{waste_type}";

/// Top-level configuration for EcoSort.
///
/// Loaded from `~/.ecosort/config.toml` by default. Every section falls back
/// to its defaults when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EcosortConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub responses: ResponseConfig,
    #[serde(default)]
    pub topics: TopicConfig,
}

impl EcosortConfig {
    /// Load configuration from a TOML file and validate it.
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> Result<Self> {
        let config = Self::from_file(path)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Read, parse, and validate a TOML file without logging.
    ///
    /// For callers that load config before a subscriber exists.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EcosortConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or is invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.responses.validate()
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Messages the waste-info action sends for the non-template outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseConfig {
    /// Slot the category is read from.
    pub slot_name: String,
    /// Clarifying question sent when the slot is empty.
    pub clarify_prompt: String,
    /// Fallback message; must contain `{waste_type}` exactly once.
    pub fallback_template: String,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            slot_name: "waste_type".to_string(),
            clarify_prompt: "What type of waste are you asking about?".to_string(),
            fallback_template: "I don't have specific information about {waste_type} recycling. \
                 Would you like to know about general recycling guidelines instead?"
                .to_string(),
        }
    }
}

impl ResponseConfig {
    /// Check the fallback template has exactly one interpolation point.
    pub fn validate(&self) -> Result<()> {
        if self.slot_name.trim().is_empty() {
            return Err(EcosortError::Config("slot_name must not be empty".into()));
        }
        let count = self.fallback_template.matches(WASTE_TYPE_PLACEHOLDER).count();
        if count != 1 {
            return Err(EcosortError::InvalidTemplate(format!(
                "fallback_template must contain {} exactly once, found {}",
                WASTE_TYPE_PLACEHOLDER, count
            )));
        }
        Ok(())
    }

    /// Interpolate `text` verbatim into the fallback template.
    pub fn render_fallback(&self, text: &str) -> String {
        self.fallback_template.replacen(WASTE_TYPE_PLACEHOLDER, text, 1)
    }
}

/// Offline topic responder settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicConfig {
    /// Answer from the topic table when the dialogue runtime is unreachable.
    pub enabled: bool,
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
