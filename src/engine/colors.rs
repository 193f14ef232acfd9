//! Palette checks: prohibited colors and color overuse.
//!
//! Colors outside the brand palette are recorded but not flagged; only an
//! exact prohibited match or exceeding the distinct-color cap raises an issue.

use crate::color::Color;
use crate::rules::{ColorClass, RuleSet};
use crate::types::{ColorDetails, Issue, RuleCode};

pub const PALETTE_SUBJECT: &str = "color-palette";

#[must_use]
pub fn evaluate(found: &[Color], rules: &RuleSet) -> (Vec<Issue>, ColorDetails) {
    let mut issues = Vec::new();
    let mut details = ColorDetails {
        found_colors: found.to_vec(),
        ..ColorDetails::default()
    };

    for &color in found {
        match rules.classify(color) {
            ColorClass::Primary => details.matched_primary.push(color),
            ColorClass::Secondary => details.matched_secondary.push(color),
            ColorClass::Unrecognized => details.unrecognized.push(color),
            ColorClass::Prohibited => {
                details.prohibited.push(color);
                issues.push(Issue::new(
                    RuleCode::ProhibitedColor,
                    format!("prohibited color {color} detected"),
                    color.to_hex(),
                ));
            }
        }
    }

    let cap = rules.max_distinct_colors();
    if found.len() > cap {
        issues.push(Issue::new(
            RuleCode::TooManyColors,
            format!(
                "too many colors used ({}); the brand allows at most {cap}",
                found.len()
            ),
            PALETTE_SUBJECT,
        ));
    }

    (issues, details)
}
