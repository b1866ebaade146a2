//! Inspect command implementation.
use super::load_blocking;
use crate::cli::args::{InspectFormat, SourceArgs};
use marquee::schema::SiteConfiguration;

pub fn run(
    source: SourceArgs,
    page: String,
    format: InspectFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_blocking(&source)?.into_result()?;
    println!("{}", inspect_page(&config, &page, format)?);
    Ok(())
}

/// Enabled sections of `page` in render order.
fn inspect_page(
    config: &SiteConfiguration,
    page: &str,
    format: InspectFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    let Some(found) = config.page(page) else {
        return Err(format!("No page with id or path `{}`", page).into());
    };
    let sections = found.enabled_sections();

    let out = match format {
        InspectFormat::Json => serde_json::to_string_pretty(&sections)?,
        InspectFormat::Summary => {
            let mut lines = vec![format!("{} ({})", found.title, found.path)];
            lines.extend(sections.iter().map(|section| {
                format!("  {:>3}  {:<9} {}", section.order, section.kind(), section.id)
            }));
            lines.join("\n")
        }
    };
    Ok(out)
}
