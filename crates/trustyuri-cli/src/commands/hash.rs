//! Hash command implementation.

use trustyuri_core::FileModule;

pub fn run(input: String) -> Result<(), Box<dyn std::error::Error>> {
    let content =
        std::fs::read(&input).map_err(|e| format!("Failed to read file {}: {}", input, e))?;
    let code = FileModule.mint(&content);
    tracing::info!(bytes = content.len(), %code, "hashed");
    println!("{}", code);
    Ok(())
}
