//! Writes a resolved site, or a status view, to an output directory.

use super::chrome::{render_footer, render_header};
use super::dispatch::{SectionRenderer, StandardRenderer, render_sections};
use super::status::StatusView;
use super::style::get_base_style;
use super::template::render_page;
use super::theme::{AppliedTheme, apply_theme};
use super::types::{PageContext, PageData, SiteContext};
use super::utils::page_output_path;
use crate::schema::{Page, SiteConfiguration};
use chrono::Datelike;
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write site: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to render page template: {0}")]
    Template(#[from] minijinja::Error),
}

/// Render every enabled page with the built-in section renderers.
pub fn render_site(
    config: &SiteConfiguration,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, ExportError> {
    render_site_with(config, output_dir, &StandardRenderer)
}

/// Render every enabled page and return the written files.
///
/// A page is written to `<output>/<path>/index.html`; a page without a
/// path falls back to its id.
pub fn render_site_with<R>(
    config: &SiteConfiguration,
    output_dir: &Path,
    renderer: &R,
) -> Result<Vec<PathBuf>, ExportError>
where
    R: SectionRenderer + ?Sized,
{
    fs::create_dir_all(output_dir)?;
    let year = chrono::Local::now().year();

    let mut written = Vec::new();
    for page in config.enabled_pages() {
        let html = render_page_document(config, page, renderer, year)?;
        let route = if page.path.is_empty() { &page.id } else { &page.path };
        let output_path = page_output_path(output_dir, route);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;

        println!("  Generated: {}", output_path.display());
        written.push(output_path);
    }
    Ok(written)
}

/// One full HTML document for `page`.
pub fn render_page_document<R>(
    config: &SiteConfiguration,
    page: &Page,
    renderer: &R,
    year: i32,
) -> Result<String, minijinja::Error>
where
    R: SectionRenderer + ?Sized,
{
    let theme = config.theme();
    let brand = config.brand();
    let navigation = config.navigation();
    let applied = apply_theme(theme, &config.meta);

    let sections = page.enabled_sections();
    let content = render_sections(&sections, theme, renderer)
        .into_iter()
        .map(Markup::into_string)
        .collect::<String>();

    let context = PageContext {
        site: site_context(config, &applied),
        page: PageData {
            title: page.title.clone(),
            description: page.description.clone(),
            header: render_header(brand, &navigation.header, theme).into_string(),
            content,
            footer: render_footer(brand, &navigation.footer, theme, year).into_string(),
            path: page.path.clone(),
        },
    };
    render_page(&context)
}

fn site_context(config: &SiteConfiguration, applied: &AppliedTheme) -> SiteContext {
    let seo = &config.site_config.seo;
    let title = if applied.title.is_empty() {
        config.brand().name.clone()
    } else {
        applied.title.clone()
    };
    SiteContext {
        title,
        description: config.meta.description.clone(),
        language: config.meta.language.clone(),
        keywords: seo.keywords.clone(),
        author: seo.author.clone(),
        og_image: seo.og_image.clone(),
        favicon: seo.favicon.clone(),
        stylesheet: get_base_style().to_string(),
        theme_css: applied.to_css(),
    }
}

/// Write the loading or error view as `<output>/index.html`.
pub fn render_status_page(output_dir: &Path, view: &StatusView) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(output_dir)?;

    let context = PageContext {
        site: SiteContext {
            title: view.title().to_string(),
            stylesheet: get_base_style().to_string(),
            ..Default::default()
        },
        page: PageData {
            content: view.render().into_string(),
            path: "/".to_string(),
            ..Default::default()
        },
    };
    let html = render_page(&context)?;

    let output_path = page_output_path(output_dir, "/");
    fs::write(&output_path, html)?;
    Ok(output_path)
}
