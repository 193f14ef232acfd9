//! Unvalidated guideline input, as produced by a guideline reader.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawColorEntry {
    pub hex: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "reason")]
    pub usage: String,
}

impl RawColorEntry {
    #[must_use]
    pub fn new(hex: &str, name: &str, usage: &str) -> Self {
        Self {
            hex: hex.to_string(),
            name: name.to_string(),
            usage: usage.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawColors {
    #[serde(default)]
    pub primary: Vec<RawColorEntry>,
    #[serde(default)]
    pub secondary: Vec<RawColorEntry>,
    #[serde(default)]
    pub prohibited: Vec<RawColorEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLogoSpec {
    #[serde(default, alias = "minWidth", skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    #[serde(default, alias = "maxWidth", skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    #[serde(default, alias = "clearSpace", skip_serializing_if = "Option::is_none")]
    pub clear_space: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSpacing {
    #[serde(
        default,
        alias = "page_margin",
        alias = "pageMargins",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_margins: Option<f64>,
    #[serde(default, alias = "maxDistinctColors", skip_serializing_if = "Option::is_none")]
    pub max_distinct_colors: Option<usize>,
}
