//! Differences between two reports for the same design.
//!
//! The engine keeps no history. A caller that re-checks a design as it
//! changes holds on to the previous report and diffs against it.

use serde::Serialize;

use super::{Issue, OverallStatus, Report};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportDiff {
    /// `(previous, current)` when the overall status moved.
    pub status_changed: Option<(OverallStatus, OverallStatus)>,
    /// Issues present before and gone now.
    pub resolved: Vec<Issue>,
    /// Issues present now that were not there before.
    pub introduced: Vec<Issue>,
    /// Suggestions present now that were not there before.
    pub new_suggestions: Vec<String>,
}

impl ReportDiff {
    #[must_use]
    pub fn between(previous: &Report, current: &Report) -> Self {
        let status_changed =
            (previous.overall != current.overall).then_some((previous.overall, current.overall));
        Self {
            status_changed,
            resolved: missing_from(&previous.issues, &current.issues),
            introduced: missing_from(&current.issues, &previous.issues),
            new_suggestions: current
                .suggestions
                .iter()
                .filter(|s| !previous.suggestions.contains(s))
                .cloned()
                .collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status_changed.is_none()
            && self.resolved.is_empty()
            && self.introduced.is_empty()
            && self.new_suggestions.is_empty()
    }
}

/// Issues in `from` that `other` does not contain, keeping `from` order.
fn missing_from(from: &[Issue], other: &[Issue]) -> Vec<Issue> {
    from.iter().filter(|i| !other.contains(i)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Details, RuleCode};

    fn report(overall: OverallStatus, issues: Vec<Issue>) -> Report {
        Report {
            overall,
            issues,
            suggestions: Vec::new(),
            details: Details::default(),
        }
    }

    #[test]
    fn identical_reports_have_empty_diff() {
        let a = report(OverallStatus::Compliant, Vec::new());
        assert!(a.diff(&a.clone()).is_empty());
    }

    #[test]
    fn tracks_resolved_and_introduced() {
        let margin = Issue::new(RuleCode::MarginTooSmall, "top margin".into(), "top");
        let logo = Issue::new(RuleCode::LogoTooSmall, "logo small".into(), "logo");
        let before = report(OverallStatus::Error, vec![logo.clone()]);
        let after = report(OverallStatus::Warning, vec![margin.clone()]);

        let d = after.diff(&before);
        assert_eq!(
            d.status_changed,
            Some((OverallStatus::Error, OverallStatus::Warning))
        );
        assert_eq!(d.resolved, vec![logo]);
        assert_eq!(d.introduced, vec![margin]);
    }
}
