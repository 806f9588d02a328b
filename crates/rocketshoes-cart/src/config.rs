//! # Cart Configuration
//!
//! Configuration management for the cart store.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ROCKETSHOES_API_URL=http://api.example.com                         │
//! │     ROCKETSHOES_LOCALE=en                                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/cart/cart.toml (Linux)                                   │
//! │     ~/Library/Application Support/com.rocketshoes.cart/cart.toml       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:3333, pt-BR, "@RocketShoes:cart"                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # cart.toml
//! [api]
//! base_url = "http://localhost:3333"
//! timeout_secs = 10
//!
//! [storage]
//! database_path = "/var/lib/rocketshoes/cart.db"
//! slot_key = "@RocketShoes:cart"
//!
//! [notifications]
//! locale = "pt-BR"  # pt-BR | en
//! ```

use rocketshoes_core::{Locale, DEFAULT_SLOT_KEY};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// API Settings
// =============================================================================

/// Where the stock and catalog endpoints live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL; `/stock/{id}` and `/products/{id}` are appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ApiSettings {
    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// =============================================================================
// Storage Settings
// =============================================================================

/// Where the cart snapshot is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// SQLite file. Falls back to the platform data directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,

    /// Name of the slot holding the cart.
    #[serde(default = "default_slot_key")]
    pub slot_key: String,
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            database_path: None,
            slot_key: default_slot_key(),
        }
    }
}

// =============================================================================
// Notification Settings
// =============================================================================

/// How notices are rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Display language.
    #[serde(default)]
    pub locale: Locale,
}

// =============================================================================
// Main Cart Configuration
// =============================================================================

/// Complete cart configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartConfig {
    /// Stock and catalog endpoints.
    #[serde(default)]
    pub api: ApiSettings,

    /// Snapshot persistence.
    #[serde(default)]
    pub storage: StorageSettings,

    /// Notice rendering.
    #[serde(default)]
    pub notifications: NotificationSettings,
}

impl CartConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (cart.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading cart config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load cart config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let url = &self.api.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(format!(
                "API URL must start with http:// or https://, got: {}",
                url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        if self.storage.slot_key.trim().is_empty() {
            return Err(ConfigError::InvalidConfig("slot_key must not be empty".into()));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("ROCKETSHOES_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Some(timeout) = lookup("ROCKETSHOES_API_TIMEOUT") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "Ignoring non-numeric API timeout"),
            }
        }

        if let Some(path) = lookup("ROCKETSHOES_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.storage.database_path = Some(PathBuf::from(path));
        }

        if let Some(key) = lookup("ROCKETSHOES_SLOT_KEY") {
            self.storage.slot_key = key;
        }

        if let Some(locale) = lookup("ROCKETSHOES_LOCALE") {
            match locale.parse() {
                Ok(parsed) => self.notifications.locale = parsed,
                Err(_) => warn!(locale = %locale, "Unknown locale in environment"),
            }
        }
    }

    fn project_dirs() -> Option<directories::ProjectDirs> {
        directories::ProjectDirs::from("com", "rocketshoes", "cart")
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("cart.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Returns the SQLite path: configured, else `<data dir>/cart.db`,
    /// else `cart.db` in the working directory.
    pub fn database_path(&self) -> PathBuf {
        self.storage.database_path.clone().unwrap_or_else(|| {
            Self::project_dirs()
                .map(|dirs| dirs.data_dir().join("cart.db"))
                .unwrap_or_else(|| PathBuf::from("cart.db"))
        })
    }

    /// Returns the storage slot key.
    pub fn slot_key(&self) -> &str {
        &self.storage.slot_key
    }

    /// Returns the notice locale.
    pub fn locale(&self) -> Locale {
        self.notifications.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = CartConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:3333");
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
        assert_eq!(config.slot_key(), "@RocketShoes:cart");
        assert_eq!(config.locale(), Locale::PtBr);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = CartConfig::default();

        config.api.base_url = "ws://localhost:3333".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidUrl(_))));

        config.api.base_url = "https://api.rocketshoes.dev".to_string();
        assert!(config.validate().is_ok());

        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());

        config.api.timeout_secs = 5;
        config.storage.slot_key = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: CartConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://10.0.0.2:3333"

            [notifications]
            locale = "en"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://10.0.0.2:3333");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.slot_key(), "@RocketShoes:cart");
        assert_eq!(config.locale(), Locale::En);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("ROCKETSHOES_API_URL", "http://stock.internal"),
            ("ROCKETSHOES_API_TIMEOUT", "not-a-number"),
            ("ROCKETSHOES_DB_PATH", "/tmp/cart-test.db"),
            ("ROCKETSHOES_LOCALE", "en-US"),
        ]
        .into_iter()
        .collect();

        let mut config = CartConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://stock.internal");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.database_path(), PathBuf::from("/tmp/cart-test.db"));
        assert_eq!(config.locale(), Locale::En);
        assert_eq!(config.slot_key(), "@RocketShoes:cart");
    }

    #[test]
    fn test_load_or_default_on_bad_file() {
        let path = std::env::temp_dir().join(format!(
            "rocketshoes-cart-bad-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        let config = CartConfig::load_or_default(Some(path.clone()));
        assert_eq!(config.api.timeout_secs, 10);

        let _ = std::fs::remove_file(&path);
    }
}
