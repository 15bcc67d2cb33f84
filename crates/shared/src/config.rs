//! Money configuration management.

use serde::Deserialize;

use crate::types::Rounding;

/// Defaults applied by callers that do not pick a currency or rounding
/// strategy explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoneyConfig {
    /// Currency code used when none is supplied.
    #[serde(default = "default_currency")]
    pub default_currency: String,
    /// Rounding applied by the configured multiply/divide helpers.
    #[serde(default)]
    pub rounding: Rounding,
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            rounding: Rounding::default(),
        }
    }
}

impl MoneyConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `TENDER__*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TENDER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
