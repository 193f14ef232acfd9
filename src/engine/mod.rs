// src/engine/mod.rs
//! Compliance evaluation (the "rule engine").
//!
//! Each rule family lives in its own submodule and can be exercised on its
//! own. [`ComplianceEngine`] runs them in a fixed order (colors, logo,
//! spacing), derives the overall status, and attaches suggestions.

pub mod colors;
pub mod logo;
pub mod spacing;
pub mod status;
pub mod suggestions;

use crate::color::Color;
use crate::error::{BrandError, Result};
use crate::quantize::{self, QuantizeOptions};
use crate::rules::RuleSet;
use crate::sample::PixelSample;
use crate::types::{Details, LogoMeasurement, Margins, Report};
use rayon::prelude::*;

/// One design to check in a batch.
#[derive(Debug, Clone, Copy)]
pub struct CheckRequest<'a> {
    pub sample: PixelSample<'a>,
    pub logo: Option<LogoMeasurement>,
    pub margins: Option<Margins>,
}

impl<'a> CheckRequest<'a> {
    #[must_use]
    pub fn new(sample: PixelSample<'a>) -> Self {
        Self {
            sample,
            logo: None,
            margins: None,
        }
    }
}

/// Stateless evaluator. Holds only quantizer settings, so one instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct ComplianceEngine {
    options: QuantizeOptions,
}

impl ComplianceEngine {
    #[must_use]
    pub fn new(options: QuantizeOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &QuantizeOptions {
        &self.options
    }

    /// Checks one bitmap against `rules`. Missing measurements skip their
    /// category without raising an issue.
    ///
    /// # Errors
    /// Returns `InvalidInput` for a malformed sample, bad quantizer options,
    /// or negative/non-finite measurements.
    pub fn evaluate(
        &self,
        sample: &PixelSample<'_>,
        rules: &RuleSet,
        logo: Option<LogoMeasurement>,
        margins: Option<Margins>,
    ) -> Result<Report> {
        let found = quantize::extract_colors(sample, &self.options)?;
        self.evaluate_measured(&found, rules, logo, margins)
    }

    /// Checks an already extracted color list, e.g. one reported by a design
    /// tool adapter. Near-white entries are dropped as background, the same
    /// way [`quantize::extract_colors`] drops them from a bitmap.
    ///
    /// # Errors
    /// Returns `InvalidInput` for negative or non-finite measurements.
    pub fn evaluate_measured(
        &self,
        found: &[Color],
        rules: &RuleSet,
        logo: Option<LogoMeasurement>,
        margins: Option<Margins>,
    ) -> Result<Report> {
        validate_measurements(logo, margins)?;

        let found: Vec<Color> = found
            .iter()
            .copied()
            .filter(|c| !c.is_near_white(self.options.background_threshold))
            .collect();
        let (color_issues, color_details) = colors::evaluate(&found, rules);
        let (logo_issues, logo_details) = match logo {
            Some(m) => {
                let (issues, details) = logo::evaluate(m, rules);
                (issues, Some(details))
            }
            None => (Vec::new(), None),
        };
        let (spacing_issues, spacing_details) = match margins {
            Some(m) => {
                let (issues, details) = spacing::evaluate(m, rules);
                (issues, Some(details))
            }
            None => (Vec::new(), None),
        };

        let overall = status::derive(&color_issues, &logo_issues, &spacing_issues);
        let details = Details {
            colors: color_details,
            logo: logo_details,
            spacing: spacing_details,
        };
        let suggestions = suggestions::generate(&details);

        let mut issues = color_issues;
        issues.extend(logo_issues);
        issues.extend(spacing_issues);

        tracing::debug!(
            brand = rules.brand_name(),
            status = %overall,
            issues = issues.len(),
            colors = details.colors.found_colors.len(),
            "evaluated design"
        );

        Ok(Report {
            overall,
            issues,
            suggestions,
            details,
        })
    }

    /// Evaluates independent designs in parallel. Results keep request order.
    #[must_use]
    pub fn evaluate_batch(
        &self,
        requests: &[CheckRequest<'_>],
        rules: &RuleSet,
    ) -> Vec<Result<Report>> {
        requests
            .par_iter()
            .map(|req| self.evaluate(&req.sample, rules, req.logo, req.margins))
            .collect()
    }
}

fn validate_measurements(logo: Option<LogoMeasurement>, margins: Option<Margins>) -> Result<()> {
    let mut values: Vec<(&str, f64)> = Vec::new();
    if let Some(l) = logo {
        values.push(("logo width", l.width));
        values.push(("logo clear space", l.clear_space));
    }
    if let Some(m) = margins {
        values.extend(m.sides().map(|(side, v)| (side.label(), v)));
    }
    match values.into_iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
        Some((label, v)) => Err(BrandError::InvalidInput(format!(
            "{label} measurement must be a non-negative number, got {v}"
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{RawColors, RawLogoSpec, RawSpacing};
    use crate::sample::OwnedPixels;
    use crate::types::OverallStatus;

    fn rules() -> RuleSet {
        RuleSet::build(
            &RawColors::default(),
            &RawLogoSpec::default(),
            &RawSpacing::default(),
        )
        .unwrap()
    }

    #[test]
    fn negative_measurement_is_invalid_input() {
        let engine = ComplianceEngine::default();
        let logo = LogoMeasurement {
            width: -1.0,
            clear_space: 20.0,
        };
        let err = engine.evaluate_measured(&[], &rules(), Some(logo), None);
        assert!(matches!(err, Err(BrandError::InvalidInput(_))));
    }

    #[test]
    fn nan_margin_is_invalid_input() {
        let engine = ComplianceEngine::default();
        let mut margins = Margins::uniform(50.0);
        margins.left = f64::NAN;
        let err = engine.evaluate_measured(&[], &rules(), None, Some(margins));
        assert!(matches!(err, Err(BrandError::InvalidInput(_))));
    }

    #[test]
    fn measured_colors_skip_background() -> Result<()> {
        let found = [
            Color::rgb(0x33, 0x33, 0x33),
            Color::rgb(0xFF, 0xFF, 0xFF),
            Color::rgb(0xC8, 0xC8, 0xC8),
        ];
        let report = ComplianceEngine::default().evaluate_measured(&found, &rules(), None, None)?;
        assert_eq!(
            report.details.colors.found_colors,
            vec![Color::rgb(0x33, 0x33, 0x33), Color::rgb(0xC8, 0xC8, 0xC8)]
        );

        let strict = ComplianceEngine::new(QuantizeOptions {
            background_threshold: 199,
            ..QuantizeOptions::default()
        });
        let report = strict.evaluate_measured(&found, &rules(), None, None)?;
        assert_eq!(
            report.details.colors.found_colors,
            vec![Color::rgb(0x33, 0x33, 0x33)]
        );
        Ok(())
    }

    #[test]
    fn batch_keeps_order_and_isolates_failures() {
        let engine = ComplianceEngine::new(QuantizeOptions::default().with_stride(1));
        let good = OwnedPixels::from_colors(1, 1, &[Color::rgb(0, 0, 0)]).unwrap();
        let bad = [0u8; 3];
        let requests = [
            CheckRequest::new(good.as_sample()),
            CheckRequest::new(PixelSample::new(1, 1, &bad)),
            CheckRequest {
                logo: Some(LogoMeasurement {
                    width: 10.0,
                    clear_space: 30.0,
                }),
                ..CheckRequest::new(good.as_sample())
            },
        ];
        let results = engine.evaluate_batch(&requests, &rules());
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].as_ref().map(|r| r.overall).ok(),
            Some(OverallStatus::Compliant)
        );
        assert!(results[1].is_err());
        assert_eq!(
            results[2].as_ref().map(|r| r.overall).ok(),
            Some(OverallStatus::Error)
        );
    }
}
