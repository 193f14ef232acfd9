use crate::color::Color;
use crate::integration::{Capability, DesignTool, MockAdapter};
use crate::reporting::guidance::get_guidance;
use crate::reporting::shared::{next_occurrence, pluralize, rule_counts, status_badge};
use crate::rules::{BrandColor, RuleSet};
use crate::types::{Category, Issue, OverallStatus, Report, RuleCode, Severity};
use anyhow::Result;
use colored::Colorize;
use std::collections::HashMap;
use std::path::Path;

/// Prints one design's report, grouped by category. The first issue of each
/// rule gets the full why/fix block, repeats get a back-reference.
///
/// # Errors
/// Returns error if formatting fails.
pub fn print_report(report: &Report, design: &Path, show_suggestions: bool) -> Result<()> {
    let counts = rule_counts(report);
    let mut shown: HashMap<RuleCode, usize> = HashMap::new();

    for category in [Category::Color, Category::Logo, Category::Spacing] {
        for issue in report.issues_in(category) {
            let total = counts.get(&issue.rule).copied().unwrap_or(1);
            let occurrence = next_occurrence(&mut shown, issue.rule);
            if occurrence == 1 {
                print_issue_full(design, issue, occurrence, total);
            } else {
                print_issue_compact(design, issue, occurrence, total);
            }
        }
    }

    if show_suggestions && !report.suggestions.is_empty() {
        println!("{}", "suggestions:".cyan().bold());
        for s in &report.suggestions {
            println!("   {} {s}", "=".blue());
        }
        println!();
    }

    print_summary(report, design);
    Ok(())
}

fn print_header(issue: &Issue, count_label: &str) {
    let header = format!("{}:{count_label} {}", issue.severity.prefix(), issue.message);
    match issue.severity {
        Severity::Error => println!("{}", header.red().bold()),
        Severity::Warning => println!("{}", header.yellow()),
    }
}

fn print_issue_full(design: &Path, issue: &Issue, occurrence: usize, total: usize) {
    let count_label = if total > 1 {
        format!(" [{occurrence} of {total}]")
    } else {
        String::new()
    };
    print_header(issue, &count_label);

    println!(
        "  {} {} ({})",
        "-->".blue(),
        design.display(),
        issue.category.label()
    );
    println!(
        "   {} {}: {}",
        "=".blue(),
        issue.rule.code().yellow(),
        issue.subject
    );

    let guidance = get_guidance(issue.rule);
    println!("   {}", "|".blue());
    println!("   {} {} {}", "=".blue(), "WHY:".cyan(), guidance.why);
    println!("   {}", "|".blue());
    println!("   {} {} {}", "=".blue(), "FIX:".green(), guidance.fix);
    println!();
}

fn print_issue_compact(design: &Path, issue: &Issue, occurrence: usize, total: usize) {
    print_header(issue, &format!(" [{occurrence} of {total}]"));
    println!(
        "  {} {} ({})",
        "-->".blue(),
        design.display(),
        issue.category.label()
    );
    println!(
        "   {} {}: {}, see first {} above",
        "=".blue(),
        issue.rule.code().yellow(),
        issue.subject,
        issue.rule.code()
    );
    println!();
}

fn print_summary(report: &Report, design: &Path) {
    let errors = report.error_count();
    let warnings = report.warning_count();
    let badge = status_badge(report.overall);

    if errors == 0 && warnings == 0 {
        println!("{badge} {} is brand compliant.", design.display());
        return;
    }

    let mut parts: Vec<String> = Vec::new();
    if errors > 0 {
        parts.push(format!("{errors} {}", pluralize("error", errors)));
    }
    if warnings > 0 {
        parts.push(format!("{warnings} {}", pluralize("warning", warnings)));
    }
    println!(
        "{badge} {}: {} ({}).",
        design.display(),
        report.overall,
        parts.join(", ")
    );
}

/// One-line tally after checking several designs.
pub fn print_batch_summary(reports: &[&Report], failed: usize) {
    let failing = reports.iter().any(|r| r.overall == OverallStatus::Error);
    let all_compliant = reports.iter().all(|r| r.is_compliant());
    let line = batch_line(reports, failed);
    if failed > 0 || failing {
        println!("{} {line}", "X".red().bold());
    } else if all_compliant {
        println!("{} {line}", "OK".green().bold());
    } else {
        println!("{} {line}", "~".yellow().bold());
    }
}

fn batch_line(reports: &[&Report], failed: usize) -> String {
    let checked = reports.len();
    let compliant = reports.iter().filter(|r| r.is_compliant()).count();
    let mut line = format!(
        "Checked {checked} {}: {compliant} compliant, {} with issues",
        pluralize("design", checked),
        checked - compliant
    );
    if failed > 0 {
        line.push_str(&format!(", {failed} unreadable"));
    }
    line.push('.');
    line
}

/// Prints extracted colors with a truecolor swatch. When `rules` is given each
/// color is tagged with its palette class.
pub fn print_palette(design: &Path, colors: &[Color], rules: Option<&RuleSet>) {
    println!("{} {}", "palette:".cyan().bold(), design.display());
    if colors.is_empty() {
        println!("   {} no colors above the background threshold", "=".blue());
        return;
    }
    for (rank, color) in colors.iter().enumerate() {
        let swatch = "    ".on_truecolor(color.r, color.g, color.b);
        let tag = rules.map_or(String::new(), |r| format!(" {}", r.classify(*color).label()));
        println!("  {:>2}. {swatch} {}{}", rank + 1, color, tag.dimmed());
    }
}

/// Prints the rules extracted from a guideline file, followed by its free-text notes.
pub fn print_rules(rules: &RuleSet, notes: &[String]) {
    println!("{} {}", "brand:".cyan().bold(), rules.brand_name().bold());
    print_color_group("primary", rules.primary_colors());
    print_color_group("secondary", rules.secondary_colors());
    print_color_group("prohibited", rules.prohibited_colors());

    println!("{}", "logo:".cyan().bold());
    println!(
        "   {} width {:.0}px to {:.0}px, clear space {:.0}px",
        "=".blue(),
        rules.logo_min_width(),
        rules.logo_max_width(),
        rules.logo_clear_space()
    );
    println!("{}", "spacing:".cyan().bold());
    println!(
        "   {} page margin {:.0}px, at most {} distinct colors",
        "=".blue(),
        rules.page_margin(),
        rules.max_distinct_colors()
    );

    if !notes.is_empty() {
        println!("{}", "notes:".cyan().bold());
        for note in notes {
            println!("   {} {}", "=".blue(), note.dimmed());
        }
    }
}

fn print_color_group(label: &str, colors: &[BrandColor]) {
    println!("{}", format!("{label}:").cyan().bold());
    if colors.is_empty() {
        println!("   {} {}", "=".blue(), "(none)".dimmed());
    }
    for c in colors {
        let swatch = "  ".on_truecolor(c.color.r, c.color.g, c.color.b);
        let usage = if c.usage.is_empty() {
            String::new()
        } else {
            format!(" - {}", c.usage)
        };
        println!(
            "   {} {swatch} {} {}{}",
            "=".blue(),
            c.color,
            c.name,
            usage.dimmed()
        );
    }
}

/// Lists the bundled design-tool adapters and what each can do.
pub fn print_tools() {
    for tool in DesignTool::ALL {
        let caps: Vec<&str> = MockAdapter::capabilities_for(tool)
            .into_iter()
            .map(Capability::id)
            .collect();
        println!("  {} {:<18} {}", "-->".blue(), tool.id(), caps.join(", ").dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Details;

    fn report(overall: OverallStatus) -> Report {
        Report {
            overall,
            issues: Vec::new(),
            suggestions: Vec::new(),
            details: Details::default(),
        }
    }

    #[test]
    fn batch_line_omits_unreadable_when_none_failed() {
        let ok = report(OverallStatus::Compliant);
        let bad = report(OverallStatus::Error);
        assert_eq!(
            batch_line(&[&ok, &bad], 0),
            "Checked 2 designs: 1 compliant, 1 with issues."
        );
        assert_eq!(
            batch_line(&[&ok], 2),
            "Checked 1 design: 1 compliant, 0 with issues, 2 unreadable."
        );
    }
}
