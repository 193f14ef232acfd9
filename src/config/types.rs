use serde::{Deserialize, Serialize};

use crate::quantize::{DEFAULT_BACKGROUND_THRESHOLD, DEFAULT_STRIDE, DEFAULT_TOP_K};

/// Quantizer tuning, `[engine]` in `brandcheck.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_stride", alias = "stride")]
    pub sample_stride: usize,
    #[serde(default = "default_threshold")]
    pub background_threshold: u8,
    #[serde(default = "default_top_colors", alias = "top_k")]
    pub top_colors: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_stride: default_stride(),
            background_threshold: default_threshold(),
            top_colors: default_top_colors(),
        }
    }
}

/// Output preferences, `[preferences]` in `brandcheck.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub json: bool,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_true")]
    pub show_suggestions: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            json: false,
            export_dir: default_export_dir(),
            show_suggestions: true,
        }
    }
}

const fn default_stride() -> usize { DEFAULT_STRIDE }
const fn default_threshold() -> u8 { DEFAULT_BACKGROUND_THRESHOLD }
const fn default_top_colors() -> usize { DEFAULT_TOP_K }
const fn default_true() -> bool { true }
fn default_export_dir() -> String { ".".to_string() }

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BrandcheckToml {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub engine: EngineConfig,
    pub preferences: Preferences,
}
