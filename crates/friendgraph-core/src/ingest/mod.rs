use crate::error::{GraphError, Result};
use crate::store::SocialGraph;
use std::fs;
use std::path::Path;
use tracing::info;

pub mod reader;

pub use reader::{CsvReader, JsonReader, NetworkDocument, NetworkReader};

impl NetworkDocument {
    /// Registers every user, then every connection. Connections listed twice
    /// (once from each side) collapse into one edge.
    pub fn into_graph(self) -> Result<SocialGraph> {
        let mut graph = SocialGraph::new();
        for user in self.users {
            graph.add_user(user)?;
        }
        for (a, b) in &self.connections {
            graph.add_connection(a, b)?;
        }
        Ok(graph)
    }
}

/// Reads a network description, picking the format from the file extension.
pub fn load_network(path: &Path) -> Result<SocialGraph> {
    let content = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let doc = match extension.as_str() {
        "json" => JsonReader.read(&content)?,
        "csv" => CsvReader::new().read(&content)?,
        _ => return Err(GraphError::UnsupportedFormat(path.display().to_string())),
    };

    let graph = doc.into_graph()?;
    info!(
        path = %path.display(),
        users = graph.user_count(),
        connections = graph.connection_count(),
        "loaded network"
    );
    Ok(graph)
}
