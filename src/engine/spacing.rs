use crate::rules::RuleSet;
use crate::types::{Issue, Margins, RuleCode, SpacingDetails};

/// One warning per side that falls below the page margin.
#[must_use]
pub fn evaluate(measured: Margins, rules: &RuleSet) -> (Vec<Issue>, SpacingDetails) {
    let required = rules.page_margin();
    let issues = measured
        .sides()
        .into_iter()
        .filter(|&(_, margin)| margin < required)
        .map(|(side, margin)| {
            Issue::new(
                RuleCode::MarginTooSmall,
                format!(
                    "{} margin is too small ({margin:.0}px); minimum required is {required:.0}px",
                    side.label()
                ),
                side.label(),
            )
        })
        .collect();

    let details = SpacingDetails {
        margins: measured,
        required_margin: required,
    };
    (issues, details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{RawColors, RawLogoSpec, RawSpacing};

    fn rules(page_margin: f64) -> RuleSet {
        let spacing = RawSpacing {
            page_margins: Some(page_margin),
            max_distinct_colors: None,
        };
        RuleSet::build(&RawColors::default(), &RawLogoSpec::default(), &spacing).unwrap()
    }

    #[test]
    fn names_each_short_side() {
        let margins = Margins {
            top: 10.0,
            right: 50.0,
            bottom: 39.9,
            left: 40.0,
        };
        let (issues, details) = evaluate(margins, &rules(40.0));
        let subjects: Vec<&str> = issues.iter().map(|i| i.subject.as_str()).collect();
        assert_eq!(subjects, vec!["top", "bottom"]);
        assert!(issues[0].message.starts_with("top margin"));
        assert_eq!(details.required_margin, 40.0);
    }

    #[test]
    fn zero_requirement_never_warns() {
        let (issues, _) = evaluate(Margins::uniform(0.0), &rules(0.0));
        assert!(issues.is_empty());
    }
}
