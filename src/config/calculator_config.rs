// src/config/calculator_config.rs

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::format::RenderOptions;

/// Main calculator configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Terminal rendering
    pub display: RenderOptions,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            log_level: "info".to_string(),
            display: RenderOptions::colored(),
        }
    }
}

impl CalculatorConfig {
    /// Load configuration with precedence: defaults → config file → env vars
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // Try to load from config files (TOML preferred, YAML fallback)
        if Path::new("polycalc.toml").exists() {
            builder = builder.add_source(File::with_name("polycalc.toml"));
        } else if Path::new("polycalc.yaml").exists() {
            builder = builder.add_source(File::with_name("polycalc.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("display.color", true)?
            .set_default("display.superscript", true)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables, e.g. POLYCALC_DISPLAY__COLOR=false
        let builder = builder.add_source(
            Environment::with_prefix("POLYCALC")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
