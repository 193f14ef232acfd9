use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{
    Capability, Credentials, DesignElements, DesignSource, DesignTool, ExportFormat,
    ExportedDesign, IntegrationError, MockAdapter, Result,
};

struct Connection {
    source: Box<dyn DesignSource>,
    last_sync: DateTime<Utc>,
}

/// Summary of one live connection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    pub tool: DesignTool,
    pub last_sync: DateTime<Utc>,
    pub capabilities: Vec<Capability>,
}

/// Caller-owned registry of connected design tools. Create one per session;
/// dropping it closes every connection.
#[derive(Default)]
pub struct IntegrationManager {
    connections: BTreeMap<DesignTool, Connection>,
}

impl IntegrationManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects the bundled adapter for `tool`, replacing any existing connection.
    ///
    /// # Errors
    /// Returns `MissingCredential` if the adapter rejects the credentials.
    pub fn connect(
        &mut self,
        tool: DesignTool,
        credentials: &Credentials,
    ) -> Result<ConnectionInfo> {
        let adapter = MockAdapter::connect(tool, credentials)?;
        Ok(self.register(Box::new(adapter)))
    }

    /// Registers an already-connected source under its own tool key.
    pub fn register(&mut self, source: Box<dyn DesignSource>) -> ConnectionInfo {
        let tool = source.tool();
        let conn = Connection {
            source,
            last_sync: Utc::now(),
        };
        let info = info_for(tool, &conn);
        if self.connections.insert(tool, conn).is_some() {
            tracing::debug!(%tool, "replaced existing connection");
        }
        info
    }

    /// Closes the connection to `tool`. Returns `false` if none was open.
    pub fn disconnect(&mut self, tool: DesignTool) -> bool {
        self.connections.remove(&tool).is_some()
    }

    #[must_use]
    pub fn is_connected(&self, tool: DesignTool) -> bool {
        self.connections.contains_key(&tool)
    }

    /// Live connections, ordered by tool.
    #[must_use]
    pub fn connected_tools(&self) -> Vec<ConnectionInfo> {
        self.connections
            .iter()
            .map(|(tool, conn)| info_for(*tool, conn))
            .collect()
    }

    /// Connected tools offering `capability`.
    #[must_use]
    pub fn tools_with(&self, capability: Capability) -> Vec<DesignTool> {
        self.connections
            .iter()
            .filter(|(_, c)| c.source.supports(capability))
            .map(|(tool, _)| *tool)
            .collect()
    }

    /// # Errors
    /// `NotConnected` for an unknown tool, `Unsupported` if it cannot read
    /// elements, or the adapter's own error.
    pub fn fetch_elements(&mut self, tool: DesignTool) -> Result<DesignElements> {
        let conn = self.require(tool, Capability::ReadElements)?;
        let elements = conn.source.fetch_elements()?;
        conn.last_sync = Utc::now();
        Ok(elements)
    }

    /// # Errors
    /// `NotConnected` for an unknown tool, `Unsupported` if it cannot export,
    /// or the adapter's own error.
    pub fn export_design(
        &mut self,
        tool: DesignTool,
        format: ExportFormat,
    ) -> Result<ExportedDesign> {
        let conn = self.require(tool, Capability::Export)?;
        let design = conn.source.export_design(format)?;
        conn.last_sync = Utc::now();
        Ok(design)
    }

    fn require(&mut self, tool: DesignTool, capability: Capability) -> Result<&mut Connection> {
        let conn = self
            .connections
            .get_mut(&tool)
            .ok_or(IntegrationError::NotConnected(tool))?;
        if !conn.source.supports(capability) {
            return Err(IntegrationError::Unsupported { tool, capability });
        }
        Ok(conn)
    }
}

fn info_for(tool: DesignTool, conn: &Connection) -> ConnectionInfo {
    ConnectionInfo {
        tool,
        last_sync: conn.last_sync,
        capabilities: conn.source.capabilities().to_vec(),
    }
}
