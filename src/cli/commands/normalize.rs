//! Normalize command implementation.
use marquee::loader::{ConfigSource, parse_payload};
use reqwest::Client;
use std::path::PathBuf;

pub fn run(file: PathBuf, output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let source = ConfigSource::File(file);
    let rt = tokio::runtime::Runtime::new()?;
    let payload = rt.block_on(source.fetch_raw(&Client::new()))?;
    let config = parse_payload(payload)?;
    let out = serde_json::to_string_pretty(&config)?;

    if let Some(output_path) = output {
        std::fs::write(&output_path, &out)?;
        eprintln!("Output written to: {}", output_path.display());
    } else {
        println!("{}", out);
    }

    Ok(())
}
