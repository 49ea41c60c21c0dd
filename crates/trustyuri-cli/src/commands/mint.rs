//! Mint command implementation.

use crate::config::TrustyConfig;
use crate::input::read_graph;
use serde_json::json;
use std::path::PathBuf;
use trustyuri_core::mint;

pub fn run(
    config: &TrustyConfig,
    input: Option<String>,
    base: String,
    output: Option<PathBuf>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let graph = read_graph(input.as_deref())?;
    let minted = mint(&graph, &base, &config.canonicalizer());
    let nquads = minted.to_nquads();
    tracing::info!(uri = %minted.uri, quads = minted.graph.len(), "minted");

    let report = json!({
        "uri": minted.uri.to_string(),
        "code": minted.uri.code().to_string(),
        "quads": minted.graph.len(),
    });

    match output {
        Some(path) => {
            std::fs::write(&path, &nquads)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", minted.uri);
            }
        }
        None => {
            // Graph on stdout, so the identifier goes to stderr.
            print!("{}", nquads);
            if json {
                eprintln!("{}", report);
            } else {
                eprintln!("{}", minted.uri);
            }
        }
    }
    Ok(())
}
