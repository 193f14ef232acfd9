// tests/unit_engine.rs
use brandcheck_core::color::Color;
use brandcheck_core::engine::{CheckRequest, ComplianceEngine};
use brandcheck_core::error::BrandError;
use brandcheck_core::quantize::{extract_colors, QuantizeOptions};
use brandcheck_core::rules::{RawColorEntry, RawColors, RawLogoSpec, RawSpacing, RuleSet};
use brandcheck_core::sample::OwnedPixels;
use brandcheck_core::types::{Category, LogoMeasurement, Margins, OverallStatus, Severity};

const BLUE: Color = Color::rgb(0x00, 0x66, 0xCC);
const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
const NEON: Color = Color::rgb(0x00, 0xFF, 0x00);

fn rules(prohibited: &[&str]) -> RuleSet {
    let colors = RawColors {
        primary: vec![RawColorEntry::new("#0066CC", "Brand Blue", "")],
        secondary: Vec::new(),
        prohibited: prohibited
            .iter()
            .map(|hex| RawColorEntry::new(hex, "", ""))
            .collect(),
    };
    let logo = RawLogoSpec {
        min_width: Some(120.0),
        max_width: Some(400.0),
        clear_space: Some(20.0),
    };
    let spacing = RawSpacing {
        page_margins: Some(40.0),
        max_distinct_colors: None,
    };
    RuleSet::build(&colors, &logo, &spacing).unwrap()
}

fn stride_one() -> ComplianceEngine {
    ComplianceEngine::new(QuantizeOptions::default().with_stride(1))
}

fn mixed_bitmap() -> OwnedPixels {
    let palette = [BLUE, NEON, Color::rgb(10, 20, 30), WHITE, Color::rgb(200, 0, 0)];
    let colors: Vec<Color> = (0..400).map(|i| palette[(i * 7 + i / 13) % palette.len()]).collect();
    OwnedPixels::from_colors(20, 20, &colors).unwrap()
}

#[test]
fn test_extraction_is_deterministic() {
    let px = mixed_bitmap();
    for stride in [1, 3, 100] {
        let opts = QuantizeOptions::default().with_stride(stride);
        let first = extract_colors(&px.as_sample(), &opts).unwrap();
        for _ in 0..5 {
            assert_eq!(extract_colors(&px.as_sample(), &opts).unwrap(), first);
        }
    }
}

#[test]
fn test_extraction_has_no_duplicates() {
    let px = mixed_bitmap();
    let opts = QuantizeOptions::default().with_stride(1);
    let found = extract_colors(&px.as_sample(), &opts).unwrap();
    let mut sorted = found.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), found.len());
    assert!(!found.contains(&WHITE));
}

#[test]
fn test_all_white_is_empty_at_any_stride() {
    let px = OwnedPixels::from_colors(10, 10, &[Color::rgb(251, 252, 255); 100]).unwrap();
    for stride in [1, 2, 7, 100, 1000] {
        let opts = QuantizeOptions::default().with_stride(stride);
        assert!(extract_colors(&px.as_sample(), &opts).unwrap().is_empty());
    }
}

#[test]
fn test_small_logo_is_error_on_its_own() {
    let px = OwnedPixels::from_colors(1, 1, &[BLUE]).unwrap();
    let logo = LogoMeasurement {
        width: 50.0,
        clear_space: 25.0,
    };
    let report = stride_one()
        .evaluate(&px.as_sample(), &rules(&[]), Some(logo), None)
        .unwrap();
    assert_eq!(report.overall, OverallStatus::Error);
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].category, Category::Logo);
    assert!(report.suggestions.iter().any(|s| s.contains("logo")));
}

#[test]
fn test_short_margin_is_only_a_warning() {
    let px = OwnedPixels::from_colors(1, 1, &[BLUE]).unwrap();
    let margins = Margins {
        top: 50.0,
        right: 50.0,
        bottom: 12.0,
        left: 50.0,
    };
    let report = stride_one()
        .evaluate(&px.as_sample(), &rules(&[]), None, Some(margins))
        .unwrap();
    assert_eq!(report.overall, OverallStatus::Warning);
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].subject, "bottom");
    assert_eq!(report.issues[0].severity, Severity::Warning);
}

#[test]
fn test_dominant_prohibited_color() {
    let px = OwnedPixels::from_colors(2, 2, &[NEON, NEON, NEON, WHITE]).unwrap();
    let report = stride_one()
        .evaluate(&px.as_sample(), &rules(&["#00ff00"]), None, None)
        .unwrap();

    let errors: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].subject, "#00FF00");
    assert!(errors[0].message.contains("#00FF00"));
    assert_eq!(report.overall, OverallStatus::Warning);
    assert_eq!(report.details.colors.prohibited, vec![NEON]);
}

#[test]
fn test_conflicting_rule_rejected() {
    let colors = RawColors {
        primary: vec![RawColorEntry::new("#00FF00", "Green", "")],
        secondary: Vec::new(),
        prohibited: vec![RawColorEntry::new("#0f0", "Neon", "")],
    };
    let err = RuleSet::build(&colors, &RawLogoSpec::default(), &RawSpacing::default());
    match err {
        Err(BrandError::ConflictingColorRule { hex }) => assert_eq!(hex, "#00FF00"),
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[test]
fn test_end_to_end_compliant() {
    let px = OwnedPixels::from_colors(2, 2, &[BLUE, BLUE, WHITE, WHITE]).unwrap();
    let logo = LogoMeasurement {
        width: 200.0,
        clear_space: 25.0,
    };
    let report = stride_one()
        .evaluate(
            &px.as_sample(),
            &rules(&[]),
            Some(logo),
            Some(Margins::uniform(50.0)),
        )
        .unwrap();

    assert_eq!(report.overall, OverallStatus::Compliant);
    assert!(report.issues.is_empty());
    assert!(report.suggestions.is_empty());
    assert_eq!(report.details.colors.found_colors, vec![BLUE]);
    assert_eq!(report.details.colors.matched_primary, vec![BLUE]);
}

#[test]
fn test_issue_order_is_color_logo_spacing() {
    let px = OwnedPixels::from_colors(1, 1, &[NEON]).unwrap();
    let logo = LogoMeasurement {
        width: 500.0,
        clear_space: 5.0,
    };
    let report = stride_one()
        .evaluate(
            &px.as_sample(),
            &rules(&["#00FF00"]),
            Some(logo),
            Some(Margins::uniform(10.0)),
        )
        .unwrap();

    let categories: Vec<Category> = report.issues.iter().map(|i| i.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::Color,
            Category::Logo,
            Category::Logo,
            Category::Spacing,
            Category::Spacing,
            Category::Spacing,
            Category::Spacing,
        ]
    );
    assert_eq!(report.overall, OverallStatus::Warning);
}

#[test]
fn test_malformed_sample_fails_whole_evaluation() {
    let sample = brandcheck_core::sample::PixelSample::new(3, 3, &[0u8; 8]);
    let err = stride_one().evaluate(&sample, &rules(&[]), None, None);
    assert!(matches!(err, Err(BrandError::InvalidInput(_))));
}

#[test]
fn test_batch_matches_single_evaluations() {
    let a = OwnedPixels::from_colors(2, 2, &[BLUE, BLUE, WHITE, WHITE]).unwrap();
    let b = OwnedPixels::from_colors(1, 1, &[NEON]).unwrap();
    let rules = rules(&["#00FF00"]);
    let engine = stride_one();

    let requests = [CheckRequest::new(a.as_sample()), CheckRequest::new(b.as_sample())];
    let batch = engine.evaluate_batch(&requests, &rules);

    for (req, result) in requests.iter().zip(batch) {
        let single = engine.evaluate(&req.sample, &rules, None, None).unwrap();
        assert_eq!(result.unwrap(), single);
    }
}

#[test]
fn test_report_diff_after_fix() {
    let engine = stride_one();
    let rules = rules(&["#00FF00"]);
    let before_px = OwnedPixels::from_colors(1, 1, &[NEON]).unwrap();
    let after_px = OwnedPixels::from_colors(1, 1, &[BLUE]).unwrap();

    let before = engine.evaluate(&before_px.as_sample(), &rules, None, None).unwrap();
    let after = engine.evaluate(&after_px.as_sample(), &rules, None, None).unwrap();

    let diff = after.diff(&before);
    assert_eq!(
        diff.status_changed,
        Some((OverallStatus::Warning, OverallStatus::Compliant))
    );
    assert_eq!(diff.resolved.len(), 1);
    assert!(diff.introduced.is_empty());
}
