use super::load_blocking;
use crate::cli::args::SourceArgs;
use marquee::export::{StatusView, render_site, render_status_page};
use std::path::PathBuf;

/// Build the site into `output`.
///
/// When the configuration cannot be loaded the error view is written in
/// place of the site and the load error is returned.
pub fn run(source: SourceArgs, output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading site configuration...");

    match load_blocking(&source)?.into_result() {
        Ok(config) => {
            let written = render_site(&config, &output)?;
            println!(
                "Site generated to: {} ({} pages)",
                output.display(),
                written.len()
            );
            Ok(())
        }
        Err(message) => {
            let path = render_status_page(&output, &StatusView::Error(message.clone()))?;
            eprintln!("Error page written to: {}", path.display());
            Err(message.into())
        }
    }
}
