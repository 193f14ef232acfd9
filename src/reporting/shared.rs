use crate::types::{OverallStatus, Report, RuleCode};
use colored::{ColoredString, Colorize};
use std::collections::HashMap;

pub(crate) fn rule_counts(report: &Report) -> HashMap<RuleCode, usize> {
    let mut counts: HashMap<RuleCode, usize> = HashMap::new();
    for issue in &report.issues {
        *counts.entry(issue.rule).or_insert(0) += 1;
    }
    counts
}

pub(crate) fn next_occurrence(shown: &mut HashMap<RuleCode, usize>, rule: RuleCode) -> usize {
    let entry = shown.entry(rule).or_insert(0);
    *entry += 1;
    *entry
}

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

pub(crate) fn status_badge(status: OverallStatus) -> ColoredString {
    match status {
        OverallStatus::Compliant => "OK".green().bold(),
        OverallStatus::Warning => "~".yellow().bold(),
        OverallStatus::Error => "X".red().bold(),
    }
}
