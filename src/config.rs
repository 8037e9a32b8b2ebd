use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    /// Seed the starter recipe when the store has no document yet
    #[serde(default = "default_seed_recipes")]
    pub seed_recipes: bool,
    /// Weeks in the slot grid; more than one week uses `W<n>-` prefixed keys
    #[serde(default = "default_weeks")]
    pub weeks: u8,
    #[serde(default = "default_manual_label")]
    pub manual_label: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            seed_recipes: default_seed_recipes(),
            weeks: default_weeks(),
            manual_label: default_manual_label(),
        }
    }
}

fn default_seed_recipes() -> bool {
    true
}

fn default_weeks() -> u8 {
    1
}

fn default_manual_label() -> String {
    mealsync_shopping::MANUAL_ADD.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// `pretty` for development, `json` for production
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALSYNC__PLANNER__WEEKS, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("planner.seed_recipes", default_seed_recipes())?
            .set_default("planner.weeks", i64::from(default_weeks()))?
            .set_default("planner.manual_label", default_manual_label())?
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.format", default_log_format())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALSYNC")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.planner.weeks == 0 || self.planner.weeks > 52 {
            return Err("Planner weeks must be between 1 and 52".to_string());
        }
        if self.planner.manual_label.trim().is_empty() {
            return Err("Planner manual_label must not be empty".to_string());
        }
        if !matches!(self.observability.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown log format `{}`, expected `pretty` or `json`",
                self.observability.format
            ));
        }
        Ok(())
    }
}
