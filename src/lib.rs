//! Brand guideline compliance checking for raster designs.
//!
//! Extract a design's dominant colors, compare them and any supplied logo and
//! margin measurements against a validated [`rules::RuleSet`], and get back a
//! [`types::Report`] with an overall verdict, issues and suggestions.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod exit;
pub mod guidelines;
pub mod integration;
pub mod quantize;
pub mod reporting;
pub mod rules;
pub mod sample;
pub mod types;
