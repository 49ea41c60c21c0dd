//! Canonicalize command implementation.

use crate::config::TrustyConfig;
use crate::input::read_graph;

pub fn run(
    config: &TrustyConfig,
    input: Option<String>,
    base: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let graph = read_graph(input.as_deref())?;
    let result = config.canonicalizer().canonicalize(&graph, &base);
    tracing::info!(
        quads = result.quad_count,
        blank_nodes = result.blank_nodes,
        "canonicalized"
    );

    // Already newline-terminated per statement.
    print!("{}", String::from_utf8_lossy(&result.bytes));
    Ok(())
}
