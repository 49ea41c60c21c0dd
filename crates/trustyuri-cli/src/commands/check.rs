//! Check command implementation.

use crate::config::TrustyConfig;
use serde_json::json;
use trustyuri_core::{DefaultLoader, ModuleRegistry, Verdict, Verifier};

pub fn run(
    config: &TrustyConfig,
    reference: String,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ModuleRegistry::with_defaults(config.canonicalizer());
    let verifier = Verifier::new(&registry, DefaultLoader::new());

    let verdict = verifier.check(&reference)?;
    tracing::info!(%reference, code = %verdict.code(), correct = verdict.is_correct(), "checked");

    if json {
        let report = json!({
            "reference": reference,
            "code": verdict.code().to_string(),
            "correct": verdict.is_correct(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match verdict {
        Verdict::Correct(code) => println!("Correct hash: {}", code),
        Verdict::Incorrect(_) => println!("*** INCORRECT HASH ***"),
    }
    Ok(())
}
