use crate::rules::RuleSet;
use crate::types::{Issue, LogoDetails, LogoMeasurement, RuleCode};

pub const LOGO_SUBJECT: &str = "logo";

/// Width and clear-space checks. Each bound is tested independently, so a
/// single measurement may raise more than one issue.
#[must_use]
pub fn evaluate(measured: LogoMeasurement, rules: &RuleSet) -> (Vec<Issue>, LogoDetails) {
    let mut issues = Vec::new();
    let min = rules.logo_min_width();
    let max = rules.logo_max_width();
    let clear = rules.logo_clear_space();

    if measured.width < min {
        issues.push(Issue::new(
            RuleCode::LogoTooSmall,
            format!(
                "logo is too small ({:.0}px); minimum width is {min:.0}px",
                measured.width
            ),
            LOGO_SUBJECT,
        ));
    }
    if measured.width > max {
        issues.push(Issue::new(
            RuleCode::LogoTooLarge,
            format!(
                "logo is larger than recommended ({:.0}px); maximum width is {max:.0}px",
                measured.width
            ),
            LOGO_SUBJECT,
        ));
    }
    if measured.clear_space < clear {
        issues.push(Issue::new(
            RuleCode::LogoClearSpace,
            format!(
                "insufficient clear space around logo ({:.0}px); required {clear:.0}px",
                measured.clear_space
            ),
            LOGO_SUBJECT,
        ));
    }

    let details = LogoDetails {
        width: measured.width,
        clear_space: measured.clear_space,
        min_width: min,
        max_width: max,
        required_clear_space: clear,
    };
    (issues, details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{RawColors, RawLogoSpec, RawSpacing};
    use crate::types::Severity;

    fn rules() -> RuleSet {
        let logo = RawLogoSpec {
            min_width: Some(120.0),
            max_width: Some(400.0),
            clear_space: Some(20.0),
        };
        RuleSet::build(&RawColors::default(), &logo, &RawSpacing::default()).unwrap()
    }

    fn severities(width: f64, clear_space: f64) -> Vec<Severity> {
        let (issues, _) = evaluate(LogoMeasurement { width, clear_space }, &rules());
        issues.into_iter().map(|i| i.severity).collect()
    }

    #[test]
    fn within_bounds_is_clean() {
        assert!(severities(200.0, 25.0).is_empty());
        assert!(severities(120.0, 20.0).is_empty());
        assert!(severities(400.0, 20.0).is_empty());
    }

    #[test]
    fn too_small_is_error() {
        assert_eq!(severities(50.0, 25.0), vec![Severity::Error]);
    }

    #[test]
    fn too_large_is_warning() {
        assert_eq!(severities(401.0, 25.0), vec![Severity::Warning]);
    }

    #[test]
    fn checks_fire_independently() {
        assert_eq!(
            severities(50.0, 5.0),
            vec![Severity::Error, Severity::Warning]
        );
    }
}
