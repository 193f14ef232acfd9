// src/rules/mod.rs
//! Validated, immutable brand constraints.
//!
//! A [`RuleSet`] is built once from raw guideline input and never changes.
//! To derive a variant, take [`RuleSet::to_raw`], edit it, and build again.

pub mod raw;

pub use raw::{RawColorEntry, RawColors, RawLogoSpec, RawSpacing};

use crate::color::Color;
use crate::error::{BrandError, Result};
use serde::Serialize;
use std::collections::HashMap;

pub const DEFAULT_BRAND_NAME: &str = "Unnamed Brand";
pub const DEFAULT_LOGO_MIN_WIDTH: f64 = 120.0;
pub const DEFAULT_LOGO_MAX_WIDTH: f64 = 400.0;
pub const DEFAULT_LOGO_CLEAR_SPACE: f64 = 20.0;
pub const DEFAULT_PAGE_MARGIN: f64 = 40.0;
pub const DEFAULT_MAX_DISTINCT_COLORS: usize = 5;

/// A brand color with its guideline annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandColor {
    pub color: Color,
    pub name: String,
    pub usage: String,
}

/// Which palette class a color belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorClass {
    Primary,
    Secondary,
    Prohibited,
    Unrecognized,
}

impl ColorClass {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Prohibited => "prohibited",
            Self::Unrecognized => "unrecognized",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleSet {
    brand_name: String,
    primary_colors: Vec<BrandColor>,
    secondary_colors: Vec<BrandColor>,
    prohibited_colors: Vec<BrandColor>,
    logo_min_width: f64,
    logo_max_width: f64,
    logo_clear_space: f64,
    page_margin: f64,
    max_distinct_colors: usize,
    #[serde(skip)]
    index: HashMap<Color, ColorClass>,
}

impl RuleSet {
    /// Validates raw guideline input and builds a rule set.
    ///
    /// # Errors
    /// - `InvalidHex` for a hex string that is not 3 or 6 hex digits.
    /// - `ConflictingColorRule` when one color is listed in two palette classes.
    /// - `Validation` for negative, non-finite or inverted numeric bounds.
    pub fn build(colors: &RawColors, logo: &RawLogoSpec, spacing: &RawSpacing) -> Result<Self> {
        Self::build_named(DEFAULT_BRAND_NAME, colors, logo, spacing)
    }

    /// Same as [`RuleSet::build`] with an explicit brand name.
    ///
    /// # Errors
    /// See [`RuleSet::build`].
    pub fn build_named(
        brand_name: &str,
        colors: &RawColors,
        logo: &RawLogoSpec,
        spacing: &RawSpacing,
    ) -> Result<Self> {
        let mut index = HashMap::new();
        let primary_colors = collect_class(&colors.primary, ColorClass::Primary, &mut index)?;
        let secondary_colors =
            collect_class(&colors.secondary, ColorClass::Secondary, &mut index)?;
        let prohibited_colors =
            collect_class(&colors.prohibited, ColorClass::Prohibited, &mut index)?;

        let logo_min_width = bound("logo min_width", logo.min_width, DEFAULT_LOGO_MIN_WIDTH)?;
        let logo_max_width = bound("logo max_width", logo.max_width, DEFAULT_LOGO_MAX_WIDTH)?;
        let logo_clear_space =
            bound("logo clear_space", logo.clear_space, DEFAULT_LOGO_CLEAR_SPACE)?;
        let page_margin = bound("page_margins", spacing.page_margins, DEFAULT_PAGE_MARGIN)?;

        if logo_min_width > logo_max_width {
            return Err(BrandError::Validation(format!(
                "logo min_width ({logo_min_width}) exceeds max_width ({logo_max_width})"
            )));
        }

        let max_distinct_colors = spacing
            .max_distinct_colors
            .unwrap_or(DEFAULT_MAX_DISTINCT_COLORS);
        if max_distinct_colors == 0 {
            return Err(BrandError::Validation(
                "max_distinct_colors must be at least 1".into(),
            ));
        }

        let name = brand_name.trim();
        Ok(Self {
            brand_name: if name.is_empty() {
                DEFAULT_BRAND_NAME.to_string()
            } else {
                name.to_string()
            },
            primary_colors,
            secondary_colors,
            prohibited_colors,
            logo_min_width,
            logo_max_width,
            logo_clear_space,
            page_margin,
            max_distinct_colors,
            index,
        })
    }

    #[must_use]
    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }

    #[must_use]
    pub fn primary_colors(&self) -> &[BrandColor] {
        &self.primary_colors
    }

    #[must_use]
    pub fn secondary_colors(&self) -> &[BrandColor] {
        &self.secondary_colors
    }

    #[must_use]
    pub fn prohibited_colors(&self) -> &[BrandColor] {
        &self.prohibited_colors
    }

    #[must_use]
    pub fn logo_min_width(&self) -> f64 {
        self.logo_min_width
    }

    #[must_use]
    pub fn logo_max_width(&self) -> f64 {
        self.logo_max_width
    }

    #[must_use]
    pub fn logo_clear_space(&self) -> f64 {
        self.logo_clear_space
    }

    #[must_use]
    pub fn page_margin(&self) -> f64 {
        self.page_margin
    }

    #[must_use]
    pub fn max_distinct_colors(&self) -> usize {
        self.max_distinct_colors
    }

    /// Exact-match lookup of a color's palette class.
    #[must_use]
    pub fn classify(&self, color: Color) -> ColorClass {
        self.index
            .get(&color)
            .copied()
            .unwrap_or(ColorClass::Unrecognized)
    }

    /// Raw inputs that rebuild an identical rule set.
    #[must_use]
    pub fn to_raw(&self) -> (RawColors, RawLogoSpec, RawSpacing) {
        let entries = |list: &[BrandColor]| -> Vec<RawColorEntry> {
            list.iter()
                .map(|c| RawColorEntry::new(&c.color.to_hex(), &c.name, &c.usage))
                .collect()
        };
        (
            RawColors {
                primary: entries(&self.primary_colors),
                secondary: entries(&self.secondary_colors),
                prohibited: entries(&self.prohibited_colors),
            },
            RawLogoSpec {
                min_width: Some(self.logo_min_width),
                max_width: Some(self.logo_max_width),
                clear_space: Some(self.logo_clear_space),
            },
            RawSpacing {
                page_margins: Some(self.page_margin),
                max_distinct_colors: Some(self.max_distinct_colors),
            },
        )
    }
}

fn collect_class(
    entries: &[RawColorEntry],
    class: ColorClass,
    index: &mut HashMap<Color, ColorClass>,
) -> Result<Vec<BrandColor>> {
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        let color = Color::from_hex(&entry.hex)?;
        match index.get(&color) {
            Some(&existing) if existing == class => {
                tracing::debug!(hex = %color, class = class.label(), "duplicate color collapsed");
            }
            Some(_) => {
                return Err(BrandError::ConflictingColorRule {
                    hex: color.to_hex(),
                })
            }
            None => {
                index.insert(color, class);
                out.push(BrandColor {
                    color,
                    name: entry.name.clone(),
                    usage: entry.usage.clone(),
                });
            }
        }
    }
    Ok(out)
}

fn bound(label: &str, value: Option<f64>, default: f64) -> Result<f64> {
    let v = value.unwrap_or(default);
    if !v.is_finite() || v < 0.0 {
        return Err(BrandError::Validation(format!(
            "{label} must be a non-negative number, got {v}"
        )));
    }
    Ok(v)
}
