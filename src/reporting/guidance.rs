//! Static guidance per rule code.

use crate::types::RuleCode;

pub(crate) struct RuleGuidance {
    pub(crate) why: &'static str,
    pub(crate) fix: &'static str,
}

pub(crate) fn get_guidance(rule: RuleCode) -> RuleGuidance {
    match rule {
        RuleCode::ProhibitedColor => RuleGuidance {
            why: "The brand guidelines explicitly forbid this color; it clashes with or dilutes the brand identity.",
            fix: "Replace it with the nearest primary or secondary brand color.",
        },
        RuleCode::TooManyColors => RuleGuidance {
            why: "Each extra color competes for attention and weakens recognition of the brand palette.",
            fix: "Consolidate similar shades and lean on the primary colors.",
        },
        RuleCode::LogoTooSmall => RuleGuidance {
            why: "Below the minimum width the logo loses legibility and detail.",
            fix: "Scale the logo up to at least the minimum width.",
        },
        RuleCode::LogoTooLarge => RuleGuidance {
            why: "An oversized logo dominates the layout and crowds out content.",
            fix: "Scale the logo down to the recommended maximum width.",
        },
        RuleCode::LogoClearSpace => RuleGuidance {
            why: "Elements placed inside the clear-space zone visually merge with the logo.",
            fix: "Move surrounding text and shapes away until the required clear space is free.",
        },
        RuleCode::MarginTooSmall => RuleGuidance {
            why: "Content near the page edge risks being trimmed and makes the layout feel cramped.",
            fix: "Pull content inward so every side keeps the minimum page margin.",
        },
    }
}
