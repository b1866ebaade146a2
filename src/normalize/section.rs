//! Section-level repairs and strict decoding.

use crate::encode::encode_uri_component;
use crate::schema::{Section, SectionBody, de};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use tracing::warn;

pub const PLACEHOLDER_IMAGE_BASE: &str =
    "https://via.placeholder.com/400x300";

/// `(from, to)` used for contact entries that carry no color.
pub const DEFAULT_CONTACT_GRADIENT: (&str, &str) = ("#1A1A2E", "#16213E");

/// Placeholder image for cards converted from records without media.
pub fn placeholder_image_url(title: &str) -> String {
    format!(
        "{}?text={}",
        PLACEHOLDER_IMAGE_BASE,
        encode_uri_component(title)
    )
}

/// Section tags accepted on input. `services` is the legacy name of a
/// card grid and never leaves normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKind {
    Hero,
    CardGrid,
    Services,
    About,
    Contact,
}

impl InputKind {
    fn parse(tag: &str) -> Option<Self> {
        match tag {
            "hero" => Some(InputKind::Hero),
            "cardGrid" => Some(InputKind::CardGrid),
            "services" => Some(InputKind::Services),
            "about" => Some(InputKind::About),
            "contact" => Some(InputKind::Contact),
            _ => None,
        }
    }
}

/// Common section fields, decoded separately from the content.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SectionHeader {
    #[serde(default, deserialize_with = "de::string_or_number")]
    id: String,
    #[serde(default)]
    enabled: bool,
    #[serde(default)]
    order: f64,
    #[serde(default)]
    settings: Option<Map<String, Value>>,
}

pub(super) fn normalize_section(page_id: &str, section: Value) -> Option<Section> {
    let Value::Object(mut section) = section else {
        warn!(page = page_id, "Skipping section entry that is not an object");
        return None;
    };

    let tag = section
        .remove("type")
        .and_then(|tag| tag.as_str().map(str::to_owned))
        .unwrap_or_default();
    let Some(kind) = InputKind::parse(&tag) else {
        warn!(
            page = page_id,
            section_type = %tag,
            "Skipping unknown section type"
        );
        return None;
    };

    let content = match section.remove("content") {
        Some(Value::Object(content)) => content,
        _ => Map::new(),
    };

    let header: SectionHeader =
        match serde_json::from_value(Value::Object(section)) {
            Ok(header) => header,
            Err(e) => {
                warn!(page = page_id, error = %e, "Skipping malformed section");
                return None;
            }
        };

    let body = match kind {
        InputKind::Hero => decode(content).map(SectionBody::Hero),
        InputKind::CardGrid => decode(content).map(SectionBody::CardGrid),
        InputKind::Services => {
            decode(services_to_card_grid(content)).map(SectionBody::CardGrid)
        }
        InputKind::About => decode(repair_about(content)).map(SectionBody::About),
        InputKind::Contact => {
            decode(repair_contact(content)).map(SectionBody::Contact)
        }
    };
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            warn!(
                page = page_id,
                section = %header.id,
                section_type = %tag,
                error = %e,
                "Skipping section with undecodable content"
            );
            return None;
        }
    };

    Some(Section {
        id: header.id,
        enabled: header.enabled,
        order: header.order,
        settings: header.settings.unwrap_or_default(),
        body,
    })
}

fn decode<T: DeserializeOwned>(content: Map<String, Value>) -> serde_json::Result<T> {
    serde_json::from_value(Value::Object(content))
}

fn is_absent(value: Option<&Value>) -> bool {
    value.is_none_or(Value::is_null)
}

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or_default()
}

// ====================
// services -> cardGrid
// ====================

fn services_to_card_grid(mut content: Map<String, Value>) -> Map<String, Value> {
    if let Some(Value::Array(services)) = content.remove("services") {
        if !content.contains_key("items") {
            let items = services.iter().map(service_to_card).collect();
            content.insert("items".to_string(), Value::Array(items));
        }
    }
    content
}

fn service_to_card(service: &Value) -> Value {
    let title = str_field(service, "title");
    let id = match service.get("id") {
        Some(id @ (Value::String(_) | Value::Number(_))) => id.clone(),
        _ => Value::String(String::new()),
    };
    let tags: Vec<&str> = service
        .get("features")
        .and_then(Value::as_array)
        .map(|features| features.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    json!({
        "id": id,
        "title": title,
        "description": str_field(service, "description"),
        "media": {
            "url": placeholder_image_url(title),
            "alt": title,
        },
        "tags": tags,
    })
}

// ====================
// about
// ====================

fn repair_about(mut content: Map<String, Value>) -> Map<String, Value> {
    if let Some(text) = content
        .get("mission")
        .and_then(Value::as_str)
        .map(str::to_owned)
    {
        content.insert(
            "mission".to_string(),
            json!({ "heading": "Our Mission", "text": text, "icon": "target" }),
        );
    }

    if is_absent(content.get("experience")) {
        content.insert(
            "experience".to_string(),
            json!({ "years": "", "label": "" }),
        );
    }
    content
}

// ====================
// contact
// ====================

fn repair_contact(mut content: Map<String, Value>) -> Map<String, Value> {
    let mut entries = match content.remove("contactInfo") {
        Some(Value::Array(entries)) => entries,
        _ => Vec::new(),
    };

    let (from, to) = DEFAULT_CONTACT_GRADIENT;
    for entry in entries.iter_mut().filter_map(Value::as_object_mut) {
        if is_absent(entry.get("color")) {
            entry.insert("color".to_string(), json!({ "from": from, "to": to }));
        }
    }

    if is_absent(content.get("cta")) {
        content.remove("cta");
        if let Some(cta) = cta_from_email(&entries) {
            content.insert("cta".to_string(), cta);
        }
    }

    content.insert("contactInfo".to_string(), Value::Array(entries));
    content
}

/// Build a call-to-action from the first email entry, if there is one.
fn cta_from_email(entries: &[Value]) -> Option<Value> {
    let email = entries
        .iter()
        .find(|entry| entry.get("type").and_then(Value::as_str) == Some("email"))?;

    let href = match email.get("href").and_then(Value::as_str) {
        Some(href) if !href.is_empty() => href.to_string(),
        _ => format!("mailto:{}", str_field(email, "value")),
    };

    Some(json!({
        "heading": "Ready to Get Started?",
        "description": "Send us a message and we'll get back to you as soon as possible.",
        "button": {
            "text": "Send Message",
            "icon": "send",
            "href": href,
            "style": "primary",
        },
    }))
}
