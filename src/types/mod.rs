use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Color;

mod diff;
mod measure;
pub use diff::ReportDiff;
pub use measure::{LogoMeasurement, Margins, Side};

/// Which rule family an issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Color,
    Logo,
    Spacing,
}

impl Category {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Logo => "logo",
            Self::Spacing => "spacing",
        }
    }
}

/// How serious an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    /// Prefix word for the report line.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warn",
        }
    }
}

/// Overall verdict for one design. Ordered `Compliant < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Compliant,
    Warning,
    Error,
}

impl OverallStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable identifier for each check the engine performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCode {
    #[serde(rename = "C01")]
    ProhibitedColor,
    #[serde(rename = "C02")]
    TooManyColors,
    #[serde(rename = "L01")]
    LogoTooSmall,
    #[serde(rename = "L02")]
    LogoTooLarge,
    #[serde(rename = "L03")]
    LogoClearSpace,
    #[serde(rename = "S01")]
    MarginTooSmall,
}

impl RuleCode {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::ProhibitedColor => "C01",
            Self::TooManyColors => "C02",
            Self::LogoTooSmall => "L01",
            Self::LogoTooLarge => "L02",
            Self::LogoClearSpace => "L03",
            Self::MarginTooSmall => "S01",
        }
    }

    #[must_use]
    pub fn category(self) -> Category {
        match self {
            Self::ProhibitedColor | Self::TooManyColors => Category::Color,
            Self::LogoTooSmall | Self::LogoTooLarge | Self::LogoClearSpace => Category::Logo,
            Self::MarginTooSmall => Category::Spacing,
        }
    }

    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::ProhibitedColor | Self::LogoTooSmall => Severity::Error,
            Self::TooManyColors
            | Self::LogoTooLarge
            | Self::LogoClearSpace
            | Self::MarginTooSmall => Severity::Warning,
        }
    }
}

/// A single deviation from a brand rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Issue {
    pub rule: RuleCode,
    pub category: Category,
    pub severity: Severity,
    pub message: String,
    /// What was flagged: a hex color, `logo`, `color-palette`, or a margin side.
    pub subject: String,
}

impl Issue {
    /// Category and severity follow from the rule.
    #[must_use]
    pub fn new(rule: RuleCode, message: String, subject: impl Into<String>) -> Self {
        Self {
            rule,
            category: rule.category(),
            severity: rule.severity(),
            message,
            subject: subject.into(),
        }
    }
}

/// Colors found in the design, split by palette class. All lists keep
/// quantizer order (most frequent first).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorDetails {
    pub found_colors: Vec<Color>,
    pub matched_primary: Vec<Color>,
    pub matched_secondary: Vec<Color>,
    pub prohibited: Vec<Color>,
    pub unrecognized: Vec<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoDetails {
    pub width: f64,
    pub clear_space: f64,
    pub min_width: f64,
    pub max_width: f64,
    pub required_clear_space: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingDetails {
    pub margins: Margins,
    pub required_margin: f64,
}

/// Per-category measurement snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Details {
    pub colors: ColorDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingDetails>,
}

/// Result of one compliance check. Built once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub overall: OverallStatus,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<String>,
    pub details: Details,
}

impl Report {
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.overall == OverallStatus::Compliant
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Issues of one category, in report order.
    pub fn issues_in(&self, category: Category) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.category == category)
    }

    /// Compares this report against an earlier one for the same design.
    #[must_use]
    pub fn diff(&self, previous: &Report) -> ReportDiff {
        ReportDiff::between(previous, self)
    }
}
