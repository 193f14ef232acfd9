//! Dominant color extraction.
//!
//! Pixels are sampled at a fixed stride in raster order, near-white background
//! pixels are dropped, and the remaining exact colors are ranked by frequency.
//! Ties keep first-seen order so the same input always yields the same list.

use crate::color::Color;
use crate::error::{BrandError, Result};
use crate::sample::PixelSample;
use serde::{Deserialize, Serialize};
use indexmap::IndexMap;

pub const DEFAULT_STRIDE: usize = 100;
pub const DEFAULT_BACKGROUND_THRESHOLD: u8 = 250;
pub const DEFAULT_TOP_K: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantizeOptions {
    /// Distance in pixels between consecutive samples. Must be at least 1.
    pub stride: usize,
    /// Pixels with every channel above this value count as background.
    pub background_threshold: u8,
    /// Maximum number of colors returned.
    pub top_k: usize,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            stride: DEFAULT_STRIDE,
            background_threshold: DEFAULT_BACKGROUND_THRESHOLD,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl QuantizeOptions {
    #[must_use]
    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// # Errors
    /// Returns `InvalidInput` if stride or `top_k` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.stride < 1 {
            return Err(BrandError::InvalidInput("sample stride must be >= 1".into()));
        }
        if self.top_k < 1 {
            return Err(BrandError::InvalidInput("top_k must be >= 1".into()));
        }
        Ok(())
    }
}

/// Extracts the most frequent non-background colors, most frequent first.
///
/// # Errors
/// Returns `InvalidInput` if the buffer does not match its dimensions or the
/// options are out of range.
pub fn extract_colors(pixels: &PixelSample<'_>, options: &QuantizeOptions) -> Result<Vec<Color>> {
    options.validate()?;
    pixels.check()?;

    let mut counts: IndexMap<Color, usize> = IndexMap::new();
    for index in (0..pixels.pixel_count()).step_by(options.stride) {
        let Some(color) = pixels.color_at(index) else {
            break;
        };
        if color.is_near_white(options.background_threshold) {
            continue;
        }
        *counts.entry(color).or_insert(0) += 1;
    }

    let distinct = counts.len();
    let mut ranked: Vec<(Color, usize)> = counts.into_iter().collect();
    // Stable: equal counts stay in first-seen order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(options.top_k);

    tracing::trace!(
        sampled = pixels.pixel_count().div_ceil(options.stride),
        distinct,
        kept = ranked.len(),
        "quantized sample"
    );
    Ok(ranked.into_iter().map(|(color, _)| color).collect())
}
