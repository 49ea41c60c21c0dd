//! Reading command input from a file or stdin.

use std::io::{self, Read};
use trustyuri_canonical::rdf::nquads;
use trustyuri_canonical::Graph;
use trustyuri_core::RdfFormat;

pub fn read_text(input: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e).into()),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Parses an N-Quads or N-Triples graph.
pub fn read_graph(input: Option<&str>) -> Result<Graph, Box<dyn std::error::Error>> {
    if let Some(path) = input {
        RdfFormat::guess(path)?;
    }
    let text = read_text(input)?;
    let graph = nquads::parse(&text).map_err(|e| format!("Invalid N-Quads: {}", e))?;
    tracing::info!(quads = graph.len(), "graph loaded");
    Ok(graph)
}
