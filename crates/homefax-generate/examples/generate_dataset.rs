use homefax_generate::{GenerateOptions, GenerationEngine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let seed = std::env::var("HOMEFAX_SEED")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(21);
    let engine = GenerationEngine::new(GenerateOptions {
        seed,
        ..GenerateOptions::default()
    });
    let result = engine.run()?;

    println!("{}", serde_json::to_string_pretty(&result.report)?);
    Ok(())
}
