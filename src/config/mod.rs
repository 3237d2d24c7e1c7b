//! Configuration management for the humanizer.
//!
//! Configuration is read from a JSON settings document under the "humanizer"
//! key, or from a standalone JSON file, and merged with defaults. There is no
//! global configuration: the loaded value is handed to each humanizer or
//! session store that needs it.

pub mod schema;

pub use schema::HumanizerConfig;

use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Settings key holding the humanizer section.
pub const SETTINGS_KEY: &str = "humanizer";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The merged configuration failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Loads configuration from a settings JSON value.
///
/// This function reads the "humanizer" section, merges it with defaults and
/// validates the result. A section that cannot be deserialized is ignored
/// with a warning and defaults are used instead.
///
/// # Arguments
///
/// * `settings_json` - Optional JSON value containing user settings under the "humanizer" key
///
/// # Returns
///
/// `Ok(HumanizerConfig)` with the loaded configuration, or `Err` if validation fails.
///
/// # Example
///
/// ```
/// use text_humanizer::config::load_config;
/// use serde_json::json;
///
/// let settings = json!({
///     "humanizer": {
///         "probabilities": { "hesitation": 0.15 }
///     }
/// });
///
/// let config = load_config(Some(settings)).unwrap();
/// assert_eq!(config.probabilities.hesitation, 0.15);
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<HumanizerConfig, ConfigError> {
    let section = settings_json.and_then(|settings| settings.get(SETTINGS_KEY).cloned());
    config_from_section(section)
}

/// Loads configuration from a JSON file holding the humanizer section itself.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read, `ConfigError::Parse`
/// if it is not JSON, and `ConfigError::Invalid` if validation fails.
pub fn load_config_file(path: impl AsRef<Path>) -> Result<HumanizerConfig, ConfigError> {
    let content = fs::read_to_string(path.as_ref())?;
    let section: Value = serde_json::from_str(&content)?;
    config_from_section(Some(section))
}

fn config_from_section(section: Option<Value>) -> Result<HumanizerConfig, ConfigError> {
    let mut config = HumanizerConfig::default();

    if let Some(section) = section {
        match serde_json::from_value::<HumanizerConfig>(section) {
            Ok(user_config) => {
                // User settings take precedence
                config = config.merge(&user_config);
            }
            Err(e) => {
                log::warn!(
                    "Failed to parse humanizer settings: {}. Using defaults.",
                    e
                );
            }
        }
    }

    config.validate().map_err(ConfigError::Invalid)?;

    Ok(config)
}
