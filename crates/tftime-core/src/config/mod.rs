use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// What to do when a range validator is configured with a minimum above its
/// maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvertedBoundsPolicy {
    /// Refuse to build the validator.
    #[default]
    Reject,
    /// Build no validator at all, so the attribute is never range-checked.
    Disable,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ValidationConfig {
    pub inverted_bounds: InvertedBoundsPolicy,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `tftime.toml` in the working directory.
    ///
    /// Environment variables use the `TFTIME_` prefix and `__` between
    /// nested keys, e.g. `TFTIME_VALIDATION__INVERTED_BOUNDS=disable`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder_with_defaults()?
            .add_source(Self::environment())
            .add_source(config::File::with_name("tftime.toml").required(false))
            .build()?
            .try_deserialize::<Self>()?)
    }

    /// ## Summary
    /// Builds settings from a TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not match
    /// the settings schema.
    pub fn from_toml(document: &str) -> Result<Self> {
        Ok(Self::builder_with_defaults()?
            .add_source(config::File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("TFTIME")
            .prefix_separator("_")
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
    }

    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("validation.inverted_bounds", "reject")?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests;
