// src/cli/handlers.rs
//! Command handlers. Each returns the exit code the binary should use.

use super::args::CheckArgs;
use crate::color::Color;
use crate::config::{Config, CONFIG_FILE};
use crate::discovery;
use crate::engine::{CheckRequest, ComplianceEngine};
use crate::exit::BrandcheckExit;
use crate::guidelines::{self, GuidelineDoc};
use crate::integration::{Credentials, DesignTool, IntegrationManager};
use crate::quantize::{self, QuantizeOptions};
use crate::reporting::{self, export, ExportDocument};
use crate::rules::ColorClass;
use crate::sample::OwnedPixels;
use crate::types::{LogoMeasurement, OverallStatus, Report};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const GUIDELINES_FILE: &str = "brand-guidelines.toml";

/// Handles `brandcheck check`.
///
/// # Errors
/// Returns error if the guidelines or config are invalid, or the export
/// cannot be written. Unreadable designs are reported and counted instead.
pub fn handle_check(args: &CheckArgs, verbose: bool) -> Result<BrandcheckExit> {
    let config = Config::load();
    let options = engine_options(&config, args.stride, None)?;
    let rules = guidelines::load(&args.guidelines)?;

    let files = discovery::discover(&args.designs, verbose)?;
    if files.is_empty() {
        bail!("No design images found");
    }

    let loaded: Vec<(PathBuf, crate::error::Result<OwnedPixels>)> = files
        .into_par_iter()
        .map(|path| {
            let pixels = OwnedPixels::load(&path);
            (path, pixels)
        })
        .collect();

    let logo = args.logo_width.map(|width| LogoMeasurement {
        width,
        clear_space: args.clear_space.unwrap_or(rules.logo_clear_space()),
    });

    let mut paths = Vec::new();
    let mut requests = Vec::new();
    let mut failed = 0;
    for (path, pixels) in &loaded {
        match pixels {
            Ok(p) => {
                paths.push(path.as_path());
                requests.push(CheckRequest {
                    sample: p.as_sample(),
                    logo,
                    margins: args.margins,
                });
            }
            Err(e) => {
                failed += 1;
                eprintln!("{} {}: {e}", "error:".red().bold(), path.display());
            }
        }
    }

    let engine = ComplianceEngine::new(options);
    let mut reports: Vec<(&Path, Report)> = Vec::new();
    for (path, result) in paths.into_iter().zip(engine.evaluate_batch(&requests, &rules)) {
        match result {
            Ok(report) => reports.push((path, report)),
            Err(e) => {
                failed += 1;
                eprintln!("{} {}: {e}", "error:".red().bold(), path.display());
            }
        }
    }

    let documents: Vec<ExportDocument> = reports
        .iter()
        .map(|(path, report)| ExportDocument::new(report, &rules).with_design(path))
        .collect();

    if args.json || config.preferences.json {
        println!("{}", export::to_json(&documents)?);
    } else {
        for (path, report) in &reports {
            reporting::print_report(report, path, config.preferences.show_suggestions)?;
            println!();
        }
        if reports.len() + failed > 1 {
            let refs: Vec<&Report> = reports.iter().map(|(_, r)| r).collect();
            reporting::print_batch_summary(&refs, failed);
        }
    }

    if let Some(target) = &args.export {
        let target = resolve_export_path(target, &config);
        export::write_export(&target, &documents)?;
        if !args.json {
            println!("{} wrote {}", "OK".green().bold(), target.display());
        }
    }

    Ok(exit_for(reports.iter().map(|(_, r)| r), failed))
}

/// Handles `brandcheck palette`.
///
/// # Errors
/// Returns error if the design cannot be decoded or the options are invalid.
pub fn handle_palette(
    design: &Path,
    top: Option<usize>,
    guidelines_path: Option<&Path>,
    json: bool,
) -> Result<BrandcheckExit> {
    let config = Config::load();
    let options = engine_options(&config, None, top)?;
    let rules = guidelines_path.map(guidelines::load).transpose()?;

    let pixels = OwnedPixels::load(design)?;
    let colors = quantize::extract_colors(&pixels.as_sample(), &options)?;

    if json {
        let entries: Vec<PaletteEntry> = colors
            .iter()
            .map(|&color| PaletteEntry {
                color,
                class: rules.as_ref().map(|r| r.classify(color)),
            })
            .collect();
        reporting::print_json(&entries)?;
    } else {
        reporting::print_palette(design, &colors, rules.as_ref());
    }
    Ok(BrandcheckExit::Success)
}

#[derive(Serialize)]
struct PaletteEntry {
    color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    class: Option<ColorClass>,
}

/// Handles `brandcheck rules`.
///
/// # Errors
/// Returns error if the guideline file is unreadable or invalid.
pub fn handle_rules(path: &Path, json: bool) -> Result<BrandcheckExit> {
    let doc = GuidelineDoc::read(path)?;
    let rules = doc.to_rules()?;
    if json {
        reporting::print_json(&rules)?;
    } else {
        reporting::print_rules(&rules, &doc.notes);
    }
    Ok(BrandcheckExit::Success)
}

/// Handles `brandcheck tools`.
#[must_use]
pub fn handle_tools() -> BrandcheckExit {
    reporting::print_tools();
    BrandcheckExit::Success
}

/// Handles `brandcheck sync`: connects to a design tool, reads its open
/// document and checks the reported measurements.
///
/// # Errors
/// Returns error if the connection is refused or the guidelines are invalid.
pub fn handle_sync(
    tool: DesignTool,
    guidelines_path: &Path,
    token: &str,
    document: Option<&str>,
    json: bool,
) -> Result<BrandcheckExit> {
    let config = Config::load();
    let rules = guidelines::load(guidelines_path)?;

    let mut credentials = Credentials::token(token);
    if let Some(id) = document {
        credentials = credentials.with_document(id);
    }

    let mut manager = IntegrationManager::new();
    manager
        .connect(tool, &credentials)
        .with_context(|| format!("Failed to connect to {tool}"))?;
    let elements = manager.fetch_elements(tool)?;
    let measured = elements.measurements();

    let engine = ComplianceEngine::new(config.quantize_options());
    let report =
        engine.evaluate_measured(&measured.colors, &rules, measured.logo, measured.margins)?;

    let label = PathBuf::from(match document {
        Some(id) => format!("{tool}:{id}"),
        None => tool.to_string(),
    });
    if json || config.preferences.json {
        let doc = ExportDocument::new(&report, &rules).with_design(&label);
        reporting::print_json(&doc)?;
    } else {
        reporting::print_report(&report, &label, config.preferences.show_suggestions)?;
    }

    manager.disconnect(tool);
    Ok(exit_for(std::iter::once(&report), 0))
}

/// Handles `brandcheck init`.
///
/// # Errors
/// Returns error if a target file exists (without `force`) or cannot be written.
pub fn handle_init(dir: &Path, force: bool) -> Result<BrandcheckExit> {
    let guidelines_path = dir.join(GUIDELINES_FILE);
    let config_path = dir.join(CONFIG_FILE);
    if !force {
        for path in [&guidelines_path, &config_path] {
            if path.exists() {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
        }
    }

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let body = guidelines::example().to_toml()?;
    fs::write(&guidelines_path, body)
        .with_context(|| format!("Failed to write {}", guidelines_path.display()))?;
    Config::new().save(dir)?;

    println!("{} wrote {}", "OK".green().bold(), guidelines_path.display());
    println!("{} wrote {}", "OK".green().bold(), config_path.display());
    Ok(BrandcheckExit::Success)
}

fn engine_options(
    config: &Config,
    stride: Option<usize>,
    top: Option<usize>,
) -> Result<QuantizeOptions> {
    config.validate()?;
    let mut options = config.quantize_options();
    if let Some(s) = stride {
        options = options.with_stride(s);
    }
    if let Some(k) = top {
        options = options.with_top_k(k);
    }
    options.validate()?;
    Ok(options)
}

fn resolve_export_path(target: &Path, config: &Config) -> PathBuf {
    if target.is_absolute() {
        target.to_path_buf()
    } else {
        Path::new(&config.preferences.export_dir).join(target)
    }
}

fn exit_for<'a>(reports: impl Iterator<Item = &'a Report>, failed: usize) -> BrandcheckExit {
    let mut any_error = false;
    for r in reports {
        any_error |= r.overall == OverallStatus::Error;
    }
    if any_error {
        BrandcheckExit::CheckFailed
    } else if failed > 0 {
        BrandcheckExit::Error
    } else {
        BrandcheckExit::Success
    }
}
