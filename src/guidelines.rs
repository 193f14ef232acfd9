//! Structured guideline files.
//!
//! A guideline file is TOML or JSON (chosen by extension) holding the brand
//! name, palette, logo bounds and spacing. Missing sections fall back to the
//! rule-set defaults.

use crate::error::{BrandError, Result};
use crate::rules::{RawColorEntry, RawColors, RawLogoSpec, RawSpacing, RuleSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuidelineDoc {
    #[serde(default, alias = "brandName")]
    pub brand_name: String,
    /// Free-text rules shown to the reviewer. Not evaluated.
    #[serde(default, alias = "rules")]
    pub notes: Vec<String>,
    #[serde(default)]
    pub colors: RawColors,
    #[serde(default)]
    pub logo: RawLogoSpec,
    #[serde(default)]
    pub spacing: RawSpacing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidelineFormat {
    Toml,
    Json,
}

impl GuidelineFormat {
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl GuidelineDoc {
    /// Parses guideline text in the given format.
    ///
    /// # Errors
    /// Returns `Parse` with the parser's message on malformed input.
    pub fn parse(content: &str, format: GuidelineFormat, origin: &Path) -> Result<Self> {
        let parsed = match format {
            GuidelineFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            GuidelineFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| BrandError::Parse {
            path: origin.to_path_buf(),
            message,
        })
    }

    /// Reads and parses a guideline file.
    ///
    /// # Errors
    /// Returns `Io` if unreadable, `InvalidInput` for an unknown extension,
    /// `Parse` if malformed.
    pub fn read(path: &Path) -> Result<Self> {
        let format = GuidelineFormat::from_path(path).ok_or_else(|| {
            BrandError::InvalidInput(format!(
                "{}: guideline files must end in .toml or .json",
                path.display()
            ))
        })?;
        let content = fs::read_to_string(path).map_err(|source| BrandError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::parse(&content, format, path)
    }

    /// Validates the document into a rule set.
    ///
    /// # Errors
    /// See [`RuleSet::build`].
    pub fn to_rules(&self) -> Result<RuleSet> {
        RuleSet::build_named(&self.brand_name, &self.colors, &self.logo, &self.spacing)
    }

    /// Serializes back to TOML.
    ///
    /// # Errors
    /// Returns `Parse` if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| BrandError::Parse {
            path: "<memory>".into(),
            message: e.to_string(),
        })
    }
}

/// Reads a guideline file and builds its rule set.
///
/// # Errors
/// Any error from [`GuidelineDoc::read`] or [`RuleSet::build`].
pub fn load(path: &Path) -> Result<RuleSet> {
    let rules = GuidelineDoc::read(path)?.to_rules()?;
    tracing::debug!(
        path = %path.display(),
        brand = rules.brand_name(),
        primary = rules.primary_colors().len(),
        prohibited = rules.prohibited_colors().len(),
        "loaded guidelines"
    );
    Ok(rules)
}

/// A complete example brand, used by `brandcheck init`.
#[must_use]
pub fn example() -> GuidelineDoc {
    GuidelineDoc {
        brand_name: "Example Brand".into(),
        notes: vec![
            "Logo must keep clear space equal to the height of the \"O\" in the logo".into(),
            "Primary color should be used for headlines and important elements".into(),
            "Logo should never be smaller than 120px wide".into(),
            "Always maintain 40px margins on all sides".into(),
        ],
        colors: RawColors {
            primary: vec![
                RawColorEntry::new("#0066CC", "Brand Blue", "Primary brand color"),
                RawColorEntry::new("#CC0000", "Brand Red", "Accent color"),
            ],
            secondary: vec![
                RawColorEntry::new("#F5F5F5", "Light Gray", "Background"),
                RawColorEntry::new("#333333", "Dark Gray", "Text"),
            ],
            prohibited: vec![
                RawColorEntry::new("#00FF00", "Neon Green", "Too bright, conflicts with brand"),
                RawColorEntry::new("#FF1493", "Hot Pink", "Not part of brand palette"),
            ],
        },
        logo: RawLogoSpec {
            min_width: Some(120.0),
            max_width: Some(400.0),
            clear_space: Some(20.0),
        },
        spacing: RawSpacing {
            page_margins: Some(40.0),
            max_distinct_colors: Some(5),
        },
    }
}
