//! Offline adapters returning canned documents.

use super::{
    Capability, Credentials, DesignElement, DesignElements, DesignSource, DesignTool,
    ElementKind, ExportFormat, ExportedDesign, IntegrationError, Result,
};
use crate::color::Color;
use crate::sample::OwnedPixels;
use crate::types::Margins;

const EXPORT_WIDTH: u32 = 80;
const EXPORT_HEIGHT: u32 = 60;

const BASE_CAPABILITIES: [Capability; 4] = [
    Capability::ReadElements,
    Capability::ReadColors,
    Capability::ReadSpacing,
    Capability::Export,
];

#[derive(Debug, Clone)]
pub struct MockAdapter {
    tool: DesignTool,
    document_id: Option<String>,
    capabilities: Vec<Capability>,
}

impl MockAdapter {
    /// Opens an adapter for `tool` after checking the credentials it needs.
    ///
    /// # Errors
    /// Returns `MissingCredential` when no non-empty token is supplied.
    pub fn connect(tool: DesignTool, credentials: &Credentials) -> Result<Self> {
        let has_token = credentials
            .token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
        if !has_token {
            return Err(IntegrationError::MissingCredential {
                tool,
                credential: credential_name(tool),
            });
        }

        Ok(Self {
            tool,
            document_id: credentials.document_id.clone(),
            capabilities: Self::capabilities_for(tool),
        })
    }

    /// What the adapter for `tool` offers. Figma and Canva also push live updates.
    #[must_use]
    pub fn capabilities_for(tool: DesignTool) -> Vec<Capability> {
        let mut capabilities = BASE_CAPABILITIES.to_vec();
        if matches!(tool, DesignTool::Figma | DesignTool::Canva) {
            capabilities.push(Capability::RealTimeUpdates);
        }
        capabilities
    }

    #[must_use]
    pub fn document_id(&self) -> Option<&str> {
        self.document_id.as_deref()
    }
}

fn credential_name(tool: DesignTool) -> &'static str {
    match tool {
        DesignTool::Figma => "an access token",
        DesignTool::AdobeIllustrator | DesignTool::Sketch | DesignTool::Canva => "an API key",
    }
}

impl DesignSource for MockAdapter {
    fn tool(&self) -> DesignTool {
        self.tool
    }

    fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    fn fetch_elements(&self) -> Result<DesignElements> {
        let gray = Color::rgb(0x33, 0x33, 0x33);
        let blue = Color::rgb(0x00, 0x66, 0xCC);
        Ok(DesignElements {
            elements: vec![
                DesignElement {
                    id: "element-1".into(),
                    kind: ElementKind::Text,
                    color: Some(gray),
                    x: 100.0,
                    y: 100.0,
                    width: 200.0,
                    height: 30.0,
                },
                DesignElement {
                    id: "element-2".into(),
                    kind: ElementKind::Shape,
                    color: Some(blue),
                    x: 50.0,
                    y: 50.0,
                    width: 300.0,
                    height: 200.0,
                },
                DesignElement {
                    id: "element-3".into(),
                    kind: ElementKind::Image,
                    color: None,
                    x: 200.0,
                    y: 200.0,
                    width: 150.0,
                    height: 75.0,
                },
            ],
            colors: vec![gray, blue, Color::rgb(0xFF, 0xFF, 0xFF)],
            margins: Margins::uniform(40.0),
            logo_clear_space: Some(24.0),
        })
    }

    fn export_design(&self, format: ExportFormat) -> Result<ExportedDesign> {
        let white = Color::rgb(0xFF, 0xFF, 0xFF);
        let blue = Color::rgb(0x00, 0x66, 0xCC);
        let gray = Color::rgb(0x33, 0x33, 0x33);

        // White page, a blue panel in the upper half and a gray text strip below it.
        let colors: Vec<Color> = (0..EXPORT_HEIGHT)
            .flat_map(|y| (0..EXPORT_WIDTH).map(move |x| (x, y)))
            .map(|(x, y)| match (x, y) {
                (10..=69, 8..=29) => blue,
                (10..=49, 36..=41) => gray,
                _ => white,
            })
            .collect();
        let pixels = OwnedPixels::from_colors(EXPORT_WIDTH, EXPORT_HEIGHT, &colors)
            .map_err(|e| IntegrationError::Export(e.to_string()))?;

        tracing::debug!(tool = %self.tool, ?format, "exported design");
        Ok(ExportedDesign {
            tool: self.tool,
            format,
            pixels,
            exported_at: chrono::Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_rejected() {
        let err = MockAdapter::connect(DesignTool::Sketch, &Credentials::default());
        assert!(matches!(
            err,
            Err(IntegrationError::MissingCredential {
                tool: DesignTool::Sketch,
                ..
            })
        ));
        let blank = MockAdapter::connect(DesignTool::Figma, &Credentials::token("  "));
        assert!(blank.is_err());
    }

    #[test]
    fn only_figma_and_canva_stream_updates() {
        for tool in DesignTool::ALL {
            let adapter = MockAdapter::connect(tool, &Credentials::token("t")).unwrap();
            let live = adapter.supports(Capability::RealTimeUpdates);
            assert_eq!(live, matches!(tool, DesignTool::Figma | DesignTool::Canva));
        }
    }

    #[test]
    fn export_is_a_valid_bitmap() {
        let adapter = MockAdapter::connect(DesignTool::Canva, &Credentials::token("t")).unwrap();
        let exported = adapter.export_design(ExportFormat::Png).unwrap();
        assert!(exported.pixels.as_sample().check().is_ok());
        assert_eq!(exported.pixels.width, EXPORT_WIDTH);
    }
}
