use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_path")]
    pub path: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

fn default_data_path() -> String {
    "data/data.json".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    /// Worker pool size; derived from available parallelism when unset.
    pub workers: Option<usize>,
    /// Cap on the number of dataset records the binary loads.
    pub max_records: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            threshold: default_threshold(),
        }
    }
}

fn default_threshold() -> f64 {
    0.5
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_must_have_languages_weight")]
    pub must_have_languages: f64,
    #[serde(default = "default_optional_languages_weight")]
    pub optional_languages: f64,
    #[serde(default = "default_roles_overlap_weight")]
    pub roles_overlap: f64,
    #[serde(default = "default_roles_number_weight")]
    pub roles_number: f64,
    #[serde(default = "default_seniority_weight")]
    pub seniority: f64,
    #[serde(default = "default_degree_weight")]
    pub degree: f64,
    #[serde(default = "default_salary_match_weight")]
    pub salary_match: f64,
    #[serde(default = "default_salary_gap_weight")]
    pub salary_gap: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            must_have_languages: default_must_have_languages_weight(),
            optional_languages: default_optional_languages_weight(),
            roles_overlap: default_roles_overlap_weight(),
            roles_number: default_roles_number_weight(),
            seniority: default_seniority_weight(),
            degree: default_degree_weight(),
            salary_match: default_salary_match_weight(),
            salary_gap: default_salary_gap_weight(),
        }
    }
}

fn default_must_have_languages_weight() -> f64 { 0.30 }
fn default_optional_languages_weight() -> f64 { 0.05 }
fn default_roles_overlap_weight() -> f64 { 0.25 }
fn default_roles_number_weight() -> f64 { 0.05 }
fn default_seniority_weight() -> f64 { 0.10 }
fn default_degree_weight() -> f64 { 0.10 }
fn default_salary_match_weight() -> f64 { 0.10 }
fn default_salary_gap_weight() -> f64 { 0.05 }

#[derive(Debug, Clone, Deserialize)]
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
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with TALENT_MATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with TALENT_MATCH_)
            // e.g., TALENT_MATCH_MATCHING__WORKERS -> matching.workers
            .add_source(
                Environment::with_prefix("TALENT_MATCH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("TALENT_MATCH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
