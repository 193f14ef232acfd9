//! JSON export of compliance reports.
//!
//! Keys are camelCase so exported files line up with what design-tool
//! plugins already consume.

use crate::rules::RuleSet;
use crate::types::{Details, Issue, OverallStatus, Report};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub timestamp: DateTime<Utc>,
    pub brand_name: String,
    /// Design file the report was produced from, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design: Option<String>,
    pub overall_status: OverallStatus,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<String>,
    pub details: Details,
}

impl ExportDocument {
    /// Snapshot of `report`, stamped with the current time.
    #[must_use]
    pub fn new(report: &Report, rules: &RuleSet) -> Self {
        Self::at(report, rules, Utc::now())
    }

    #[must_use]
    pub fn at(report: &Report, rules: &RuleSet, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            brand_name: rules.brand_name().to_string(),
            design: None,
            overall_status: report.overall,
            issues: report.issues.clone(),
            suggestions: report.suggestions.clone(),
            details: report.details.clone(),
        }
    }

    #[must_use]
    pub fn with_design(mut self, design: &Path) -> Self {
        self.design = Some(design.display().to_string());
        self
    }
}

/// Renders documents as pretty JSON: a single object for one document, an
/// array otherwise.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json(documents: &[ExportDocument]) -> Result<String> {
    let json = match documents {
        [single] => serde_json::to_string_pretty(single)?,
        many => serde_json::to_string_pretty(many)?,
    };
    Ok(json)
}

/// Writes exported reports to `path`, creating parent directories.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn write_export(path: &Path, documents: &[ExportDocument]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = to_json(documents)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), reports = documents.len(), "wrote export");
    Ok(())
}
