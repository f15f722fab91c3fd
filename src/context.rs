//! Application context with an explicit load/save lifecycle.
//!
//! The session token and currency settings live in one JSON file under
//! the user config directory and are loaded once, passed to whoever
//! needs them, and saved back deliberately. Nothing reads or writes the
//! file behind the caller's back.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::CurrencyConfig;

/// Currency used when rendering money amounts in admin output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySettings {
    pub code: String,
    pub symbol: String,
}

impl CurrencySettings {
    pub fn from_config(config: &CurrencyConfig) -> Self {
        Self {
            code: config.code.clone(),
            symbol: config.symbol.clone(),
        }
    }

    /// Format an amount for display, e.g. `$12.50`.
    pub fn format(&self, amount: f64) -> String {
        format!("{}{:.2}", self.symbol, amount)
    }
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            code: "USD".to_string(),
            symbol: "$".to_string(),
        }
    }
}

/// Stored admin session state: the backend auth token plus the currency
/// preference. Persisted as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppContext {
    pub auth_token: Option<String>,
    #[serde(default)]
    pub currency: CurrencySettings,
}

impl AppContext {
    /// Default on-disk location: `<config dir>/vendor-hours/context.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vendor-hours")
            .join("context.json")
    }

    /// Load the context from a path. A missing file is a fresh session,
    /// not an error; a present-but-corrupt file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read context file {}", path.display()))?;
        let context = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse context file {}", path.display()))?;
        Ok(context)
    }

    /// Load from the default location.
    pub fn load_default() -> Result<Self> {
        Self::load(&Self::default_path())
    }

    /// Persist the context, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(self).context("Failed to serialize context")?;
        fs::write(path, raw)
            .with_context(|| format!("Failed to write context file {}", path.display()))?;
        Ok(())
    }

    /// Save to the default location.
    pub fn save_default(&self) -> Result<()> {
        self.save(&Self::default_path())
    }

    /// Drop the stored session token.
    pub fn clear_token(&mut self) {
        self.auth_token = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.auth_token.is_some()
    }
}
