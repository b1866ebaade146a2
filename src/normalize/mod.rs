//! Shape normalization: raw payload -> [`SiteConfiguration`].
//!
//! Payloads come in several historical shapes. Normalization happens in
//! two steps:
//! 1. Repair the raw JSON in place: `null` members, legacy section tags,
//!    string missions, missing colors and CTAs, flat vs. nested theme
//!    fields.
//! 2. Decode the repaired JSON into the strict schema.
//!
//! Only two conditions are fatal: a null payload and a payload without a
//! `pages` list. Everything below page level is repaired, defaulted, or
//! dropped with a warning, so one bad section never takes the site down.

mod section;
mod theme;

pub use section::{
    DEFAULT_CONTACT_GRADIENT, PLACEHOLDER_IMAGE_BASE, placeholder_image_url,
};

use crate::schema::{Page, SiteConfiguration};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("Configuration data is undefined or null")]
    Empty,

    #[error(
        "Configuration missing pages array. Please ensure the config has a valid pages structure."
    )]
    MissingPages,
}

/// Normalize a raw configuration payload into the strict schema.
///
/// The input must already be unwrapped from any transport envelope.
pub fn normalize(mut raw: Value) -> Result<SiteConfiguration, ShapeError> {
    drop_nulls(&mut raw);
    let mut root = match raw {
        Value::Null => return Err(ShapeError::Empty),
        Value::Object(root) => root,
        _ => return Err(ShapeError::MissingPages),
    };

    let pages = match root.remove("pages") {
        Some(Value::Array(pages)) => pages,
        _ => return Err(ShapeError::MissingPages),
    };
    let pages = pages
        .into_iter()
        .enumerate()
        .filter_map(|(index, page)| normalize_page(index, page))
        .collect();

    let mut site_config = root.remove("siteConfig");
    if let Some(theme) = site_config
        .as_mut()
        .and_then(|site_config| site_config.get_mut("theme"))
    {
        theme::backfill(theme);
    }

    Ok(SiteConfiguration {
        meta: decode_part(root.remove("meta"), "meta"),
        site_config: decode_part(site_config, "siteConfig"),
        navigation: decode_part(root.remove("navigation"), "navigation"),
        pages,
        content_library: decode_part(
            root.remove("contentLibrary"),
            "contentLibrary",
        ),
    })
}

/// Remove `null` object members at every depth.
///
/// The API sends `null` for unset fields; removing them lets the schema
/// defaults apply, and `Option` fields decode as `None`.
fn drop_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, member| !member.is_null());
            map.values_mut().for_each(drop_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(drop_nulls),
        _ => {}
    }
}

/// Decode one of the top-level parts, falling back to its default.
fn decode_part<T>(value: Option<Value>, part: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match value {
        None | Some(Value::Null) => T::default(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            warn!(part, error = %e, "Malformed configuration part, using defaults");
            T::default()
        }),
    }
}

fn normalize_page(index: usize, page: Value) -> Option<Page> {
    let Value::Object(mut page) = page else {
        warn!(index, "Skipping page entry that is not an object");
        return None;
    };

    let sections = page.remove("sections");
    let mut decoded: Page = match serde_json::from_value(Value::Object(page)) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!(index, error = %e, "Skipping malformed page");
            return None;
        }
    };

    decoded.sections = match sections {
        Some(Value::Array(sections)) => sections
            .into_iter()
            .filter_map(|s| section::normalize_section(&decoded.id, s))
            .collect(),
        _ => {
            warn!(
                page = %decoded.id,
                "Page missing sections array, using empty array"
            );
            Vec::new()
        }
    };

    Some(decoded)
}
