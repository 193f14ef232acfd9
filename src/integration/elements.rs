use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::types::{LogoMeasurement, Margins};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Shape,
    Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignElement {
    pub id: String,
    pub kind: ElementKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// What a design tool reports about the open document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignElements {
    pub elements: Vec<DesignElement>,
    pub colors: Vec<Color>,
    pub margins: Margins,
    /// Clear space around the logo, when the tool reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_clear_space: Option<f64>,
}

/// Engine inputs derived from a tool's element list.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurements {
    pub colors: Vec<Color>,
    pub logo: Option<LogoMeasurement>,
    pub margins: Option<Margins>,
}

impl DesignElements {
    /// The first image element is treated as the logo. Its clear space falls
    /// back to the smallest gap between the logo and any other element's box.
    #[must_use]
    pub fn measurements(&self) -> Measurements {
        let logo = self.logo().map(|el| LogoMeasurement {
            width: el.width,
            clear_space: self
                .logo_clear_space
                .unwrap_or_else(|| self.nearest_gap(el)),
        });
        let mut colors: Vec<Color> = Vec::with_capacity(self.colors.len());
        for c in &self.colors {
            if !colors.contains(c) {
                colors.push(*c);
            }
        }
        Measurements {
            colors,
            logo,
            margins: Some(self.margins),
        }
    }

    #[must_use]
    pub fn logo(&self) -> Option<&DesignElement> {
        self.elements.iter().find(|e| e.kind == ElementKind::Image)
    }

    fn nearest_gap(&self, logo: &DesignElement) -> f64 {
        self.elements
            .iter()
            .filter(|e| e.id != logo.id)
            .map(|e| box_gap(logo, e))
            .fold(f64::INFINITY, f64::min)
            .min(f64::MAX)
    }
}

/// Distance between two axis-aligned boxes; zero when they touch or overlap.
fn box_gap(a: &DesignElement, b: &DesignElement) -> f64 {
    let dx = (b.x - (a.x + a.width)).max(a.x - (b.x + b.width)).max(0.0);
    let dy = (b.y - (a.y + a.height)).max(a.y - (b.y + b.height)).max(0.0);
    dx.hypot(dy)
}
