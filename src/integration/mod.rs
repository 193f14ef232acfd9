// src/integration/mod.rs
//! Adapters over external design tools.
//!
//! Every tool sits behind [`DesignSource`]. The bundled adapters are offline
//! stand-ins that return canned data; a real adapter implements the same trait
//! and is registered with an [`IntegrationManager`] owned by the caller.

pub mod adapters;
pub mod elements;
pub mod manager;

pub use adapters::MockAdapter;
pub use elements::{DesignElement, DesignElements, ElementKind, Measurements};
pub use manager::{ConnectionInfo, IntegrationManager};

use crate::sample::OwnedPixels;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("{tool} requires {credential}")]
    MissingCredential {
        tool: DesignTool,
        credential: &'static str,
    },

    #[error("no active connection to {0}")]
    NotConnected(DesignTool),

    #[error("{tool} cannot {capability}")]
    Unsupported {
        tool: DesignTool,
        capability: Capability,
    },

    #[error("unknown design tool: {0}")]
    UnknownTool(String),

    #[error("export failed: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, IntegrationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DesignTool {
    Figma,
    AdobeIllustrator,
    Sketch,
    Canva,
}

impl DesignTool {
    pub const ALL: [Self; 4] = [Self::Figma, Self::AdobeIllustrator, Self::Sketch, Self::Canva];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Figma => "figma",
            Self::AdobeIllustrator => "adobe-illustrator",
            Self::Sketch => "sketch",
            Self::Canva => "canva",
        }
    }
}

impl fmt::Display for DesignTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for DesignTool {
    type Err = IntegrationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| IntegrationError::UnknownTool(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    ReadElements,
    ReadColors,
    ReadSpacing,
    RealTimeUpdates,
    Export,
}

impl Capability {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::ReadElements => "read-elements",
            Self::ReadColors => "read-colors",
            Self::ReadSpacing => "read-spacing",
            Self::RealTimeUpdates => "real-time-updates",
            Self::Export => "export",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Access credentials for a tool. Every bundled adapter needs a token.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub token: Option<String>,
    pub document_id: Option<String>,
}

impl Credentials {
    #[must_use]
    pub fn token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            document_id: None,
        }
    }

    #[must_use]
    pub fn with_document(mut self, id: &str) -> Self {
        self.document_id = Some(id.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Jpeg,
}

/// A rendered design, ready for the compliance engine.
#[derive(Debug, Clone)]
pub struct ExportedDesign {
    pub tool: DesignTool,
    pub format: ExportFormat,
    pub pixels: OwnedPixels,
    pub exported_at: chrono::DateTime<chrono::Utc>,
}

/// A connected design tool.
pub trait DesignSource: Send + Sync {
    fn tool(&self) -> DesignTool;

    fn capabilities(&self) -> &[Capability];

    /// Reads the current design's elements, palette and spacing.
    ///
    /// # Errors
    /// Returns an error if the tool cannot provide elements.
    fn fetch_elements(&self) -> Result<DesignElements>;

    /// Renders the current design to a bitmap.
    ///
    /// # Errors
    /// Returns an error if the tool cannot export.
    fn export_design(&self, format: ExportFormat) -> Result<ExportedDesign>;

    fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_ids_round_trip() {
        for tool in DesignTool::ALL {
            assert_eq!(tool.id().parse::<DesignTool>().ok(), Some(tool));
        }
        assert!(matches!(
            "penpot".parse::<DesignTool>(),
            Err(IntegrationError::UnknownTool(_))
        ));
    }
}
