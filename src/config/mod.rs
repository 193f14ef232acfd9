// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{BrandcheckToml, Config, EngineConfig, Preferences};
use crate::quantize::QuantizeOptions;
use anyhow::Result;
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new config and loads `brandcheck.toml` from the working directory.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new("."))
    }

    /// Creates a new config and loads `brandcheck.toml` from `dir`.
    #[must_use]
    pub fn load_from(dir: &Path) -> Self {
        let mut config = Self::new();
        io::load_toml_config(&mut config, dir);
        config
    }

    pub fn parse_toml(&mut self, content: &str) {
        io::parse_toml(self, content);
    }

    /// Quantizer settings derived from `[engine]`.
    #[must_use]
    pub fn quantize_options(&self) -> QuantizeOptions {
        QuantizeOptions {
            stride: self.engine.sample_stride,
            background_threshold: self.engine.background_threshold,
            top_k: self.engine.top_colors,
        }
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error if the engine settings are out of range.
    pub fn validate(&self) -> Result<()> {
        self.quantize_options().validate()?;
        Ok(())
    }

    /// Saves the current configuration to `dir/brandcheck.toml`.
    ///
    /// # Errors
    /// Returns error if file write fails.
    pub fn save(&self, dir: &Path) -> Result<()> {
        io::save_to_file(&self.engine, &self.preferences, dir)
    }
}
