//! Overall status derivation.
//!
//! Only a logo error can fail a design outright. Color and spacing issues,
//! including prohibited-color errors, are advisory and cap at `Warning`.

use crate::types::{Issue, OverallStatus, Severity};

#[must_use]
pub fn derive(color: &[Issue], logo: &[Issue], spacing: &[Issue]) -> OverallStatus {
    if logo.iter().any(|i| i.severity == Severity::Error) {
        return OverallStatus::Error;
    }
    if !color.is_empty() || !logo.is_empty() || !spacing.is_empty() {
        return OverallStatus::Warning;
    }
    OverallStatus::Compliant
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RuleCode;

    fn issue(rule: RuleCode) -> Issue {
        Issue::new(rule, String::new(), "")
    }

    #[test]
    fn no_issues_is_compliant() {
        assert_eq!(derive(&[], &[], &[]), OverallStatus::Compliant);
    }

    #[test]
    fn logo_error_wins() {
        let status = derive(
            &[issue(RuleCode::ProhibitedColor)],
            &[issue(RuleCode::LogoTooLarge), issue(RuleCode::LogoTooSmall)],
            &[issue(RuleCode::MarginTooSmall)],
        );
        assert_eq!(status, OverallStatus::Error);
    }

    #[test]
    fn color_error_caps_at_warning() {
        assert_eq!(derive(&[issue(RuleCode::ProhibitedColor)], &[], &[]), OverallStatus::Warning);
    }

    #[test]
    fn logo_warning_alone_is_warning() {
        assert_eq!(derive(&[], &[issue(RuleCode::LogoTooLarge)], &[]), OverallStatus::Warning);
    }

    #[test]
    fn spacing_alone_is_warning() {
        assert_eq!(
            derive(&[], &[], &[issue(RuleCode::MarginTooSmall)]),
            OverallStatus::Warning
        );
    }
}
