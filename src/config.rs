use std::path::PathBuf;

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub network: NetworkConfig,
    pub currency: CurrencyConfig,
    pub hours: HoursConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    /// Base URL of the platform admin API.
    pub api_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:4000".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NetworkConfig {
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Default currency used when the stored context has none.
#[derive(Debug, Deserialize, Clone)]
pub struct CurrencyConfig {
    pub code: String,
    pub symbol: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            code: "USD".to_string(),
            symbol: "$".to_string(),
        }
    }
}

/// Default opening hours, applied only by the explicit fill step
/// (`WeeklyTimings::fill_blank_open_days`); no code path defaults
/// silently.
#[derive(Debug, Deserialize, Clone)]
pub struct HoursConfig {
    pub default_open: String,
    pub default_close: String,
}

impl Default for HoursConfig {
    fn default() -> Self {
        Self {
            default_open: "09:00".to_string(),
            default_close: "17:00".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        // Load .env if present (production sets env vars directly)
        let _ = dotenvy::dotenv();

        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vendor-hours");

        let builder = Config::builder()
            // 1. Default values
            // Backend
            .set_default("backend.api_url", "http://localhost:4000")?
            // Network
            .set_default("network.request_timeout_secs", 30)?
            .set_default("network.connect_timeout_secs", 10)?
            // Currency
            .set_default("currency.code", "USD")?
            .set_default("currency.symbol", "$")?
            // Hours
            .set_default("hours.default_open", "09:00")?
            .set_default("hours.default_close", "17:00")?
            // 2. Local config file (optional, lowest priority)
            .add_source(File::from(PathBuf::from("config.toml")).required(false))
            // 3. User config directory (optional, overrides local)
            .add_source(File::from(config_dir.join("config.toml")).required(false))
            // 4. Environment variables (VENDOR__BACKEND__API_URL=...)
            .add_source(Environment::with_prefix("VENDOR").separator("__"));

        let s = builder.build()?;
        Ok(s.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Default Value Tests ====================

    #[test]
    fn test_backend_config_defaults() {
        let config = BackendConfig::default();
        assert_eq!(config.api_url, "http://localhost:4000");
    }

    #[test]
    fn test_network_config_defaults() {
        let config = NetworkConfig::default();
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn test_currency_config_defaults() {
        let config = CurrencyConfig::default();
        assert_eq!(config.code, "USD");
        assert_eq!(config.symbol, "$");
    }

    #[test]
    fn test_hours_config_defaults() {
        let config = HoursConfig::default();
        assert_eq!(config.default_open, "09:00");
        assert_eq!(config.default_close, "17:00");
    }

    // ==================== Config Loading Tests ====================

    #[test]
    fn test_config_load_with_defaults() {
        // Loads even when no config file exists anywhere.
        let result = AppConfig::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_loaded_config_has_expected_structure() {
        let config = AppConfig::load().expect("Config should load");

        assert!(!config.backend.api_url.is_empty());
        assert!(config.network.request_timeout_secs > 0);
        assert!(!config.currency.code.is_empty());
        assert!(!config.hours.default_open.is_empty());
        assert!(!config.hours.default_close.is_empty());
    }

    #[test]
    fn test_config_default_hours_form_a_valid_range() {
        let config = AppConfig::load().expect("Config should load");
        assert!(
            config.hours.default_open < config.hours.default_close,
            "Default open ({}) should be before default close ({})",
            config.hours.default_open,
            config.hours.default_close
        );
    }

    // ==================== Environment Variable Override Tests ====================

    /// Helper to safely set and remove environment variables in tests.
    /// SAFETY: These tests run sequentially and clean up after themselves.
    fn with_env_var<F, R>(key: &str, value: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        // SAFETY: Test environment, single-threaded access
        unsafe {
            std::env::set_var(key, value);
        }
        let result = f();
        unsafe {
            std::env::remove_var(key);
        }
        result
    }

    #[test]
    fn test_env_var_overrides_backend_api_url() {
        let config = with_env_var(
            "VENDOR__BACKEND__API_URL",
            "https://admin.example.com",
            || AppConfig::load().expect("Config should load"),
        );

        assert_eq!(
            config.backend.api_url, "https://admin.example.com",
            "Environment variable should override backend.api_url"
        );
    }

    #[test]
    fn test_env_var_overrides_network_timeout() {
        let config = with_env_var("VENDOR__NETWORK__REQUEST_TIMEOUT_SECS", "120", || {
            AppConfig::load().expect("Config should load")
        });

        assert_eq!(config.network.request_timeout_secs, 120);
    }

    #[test]
    fn test_env_var_overrides_currency() {
        let config = with_env_var("VENDOR__CURRENCY__SYMBOL", "€", || {
            AppConfig::load().expect("Config should load")
        });

        assert_eq!(config.currency.symbol, "€");
    }

    // ==================== Struct Field Tests ====================

    #[test]
    fn test_config_structs_are_clone() {
        let network = NetworkConfig::default();
        let cloned = network.clone();
        assert_eq!(cloned.request_timeout_secs, network.request_timeout_secs);

        let hours = HoursConfig::default();
        let cloned = hours.clone();
        assert_eq!(cloned.default_open, hours.default_open);
    }

    #[test]
    fn test_config_structs_are_debug() {
        let config = NetworkConfig::default();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("NetworkConfig"));
        assert!(debug_str.contains("request_timeout_secs"));
    }
}
