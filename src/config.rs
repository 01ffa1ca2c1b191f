use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid settings: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct Settings {
    #[serde(default)]
    #[validate(nested)]
    pub scoring: ScorerConfig,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Thresholds and points used by the connection scorer.
///
/// Every field is independently overridable; omitted fields keep their default:
///
/// ```
/// use family_connections::ScorerConfig;
///
/// let config = ScorerConfig {
///     sibling_age_range: 5.0,
///     ..ScorerConfig::default()
/// };
/// assert_eq!(config.generational_age_gap, 30.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct ScorerConfig {
    /// Minimum fuzzy-match percentage (0-100) for surnames to count as matching
    #[validate(range(max = 100))]
    pub surname_similarity_threshold: u32,
    /// Points per distinct shared middle name
    pub middle_name_match_score: u32,
    /// Maximum age difference in years classified as sibling range
    pub sibling_age_range: f64,
    /// Target parent/child age gap in years, with a fixed tolerance of 5
    pub generational_age_gap: f64,
    /// Maximum distance in miles counted as nearby
    #[validate(range(min = 0.0))]
    pub address_proximity_threshold: f64,
    /// Points if the surname fuzzy-matches within the company name
    pub company_name_score: u32,
    /// Points per person holding more than one distinct role type
    pub multiple_roles_score: u32,
    /// Maximum day gap between dates at a shared company to count as synchronized
    pub appointment_timing_threshold: i64,
    /// Points per company with synchronized appointment dates
    pub appointment_timing_score: u32,
    /// Points per company with synchronized resignation dates
    pub resignation_timing_score: u32,
    /// Points for a normalized exact address match
    pub shared_address_score: u32,
    /// Points for a proximity match, only evaluated without an exact match
    pub nearby_address_score: u32,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            surname_similarity_threshold: 85,
            middle_name_match_score: 25,
            sibling_age_range: 3.0,
            generational_age_gap: 30.0,
            address_proximity_threshold: 1.0,
            company_name_score: 35,
            multiple_roles_score: 20,
            appointment_timing_threshold: 90,
            appointment_timing_score: 25,
            resignation_timing_score: 25,
            shared_address_score: 40,
            nearby_address_score: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FAMCON)
    pub fn load() -> Result<Self, SettingsError> {
        // Load .env file if present
        dotenv::dotenv().ok();

        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FAMCON__SCORING__SIBLING_AGE_RANGE -> scoring.sibling_age_range
            .add_source(env_source())
            .build()?;

        let settings = apply_log_env_overrides(settings)?;

        finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        finish(settings)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("FAMCON")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn finish(config: Config) -> Result<Settings, SettingsError> {
    let settings: Settings = config.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}

/// LOG_LEVEL and LOG_FORMAT take precedence over the logging section
fn apply_log_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(level) = env::var("LOG_LEVEL") {
        builder = builder.set_override("logging.level", level)?;
    }
    if let Ok(format) = env::var("LOG_FORMAT") {
        builder = builder.set_override("logging.format", format)?;
    }

    builder.build()
}
