use serde_json::{Map, Value};

/// Flat legacy field -> key inside nested `colors`.
const COLOR_FIELDS: [(&str, &str); 5] = [
    ("primaryColor", "primary"),
    ("secondaryColor", "secondary"),
    ("accentColor", "accent"),
    ("backgroundColor", "background"),
    ("textColor", "text"),
];

/// Flat legacy field -> key inside nested `typography`.
const TYPOGRAPHY_FIELDS: [(&str, &str); 1] = [("fontFamily", "fontFamily")];

/// Make the flat and nested theme shapes agree.
///
/// Nested values win: a nested value overwrites its flat counterpart. A
/// flat value with no nested counterpart is copied into the nested shape.
pub(super) fn backfill(theme: &mut Value) {
    let Some(theme) = theme.as_object_mut() else {
        return;
    };
    reconcile(theme, "colors", &COLOR_FIELDS);
    reconcile(theme, "typography", &TYPOGRAPHY_FIELDS);
}

fn reconcile(
    theme: &mut Map<String, Value>,
    group: &str,
    fields: &[(&str, &str)],
) {
    let mut nested = match theme.remove(group) {
        Some(Value::Object(nested)) => nested,
        _ => Map::new(),
    };

    for (flat, key) in fields {
        match nested.get(*key).filter(|v| is_set(v)) {
            Some(value) => {
                theme.insert(flat.to_string(), value.clone());
            }
            None => {
                if let Some(value) = theme.get(*flat).filter(|v| is_set(v)) {
                    nested.insert(key.to_string(), value.clone());
                }
            }
        }
    }

    theme.insert(group.to_string(), Value::Object(nested));
}

/// Empty strings count as unset.
fn is_set(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.is_empty())
}
