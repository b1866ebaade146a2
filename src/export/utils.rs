use serde_json::Value;
use std::path::{Path, PathBuf};

// ====================
// Page paths
// ====================

/// Slugify one path segment
///
/// - lower-cases
/// - replaces anything that is not `a-z`, `0-9` or `_` with hyphens
/// - collapses repeated hyphens
fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '_' => c,
            _ => '-',
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Converts a page route to its directory under the output root
///
/// Examples:
/// - "/" -> ""
/// - "/About Us/" -> "about-us"
/// - "/services/web" -> "services/web"
///
/// `..` and `.` segments are dropped, so a page can never be written
/// outside the output directory.
pub fn page_slug(route: &str) -> String {
    route
        .split('/')
        .filter(|segment| !matches!(*segment, "" | "." | ".."))
        .map(slugify)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// `<output>/<slug>/index.html`, or `<output>/index.html` for the root.
pub fn page_output_path(output_dir: &Path, route: &str) -> PathBuf {
    let slug = page_slug(route);
    if slug.is_empty() {
        output_dir.join("index.html")
    } else {
        output_dir.join(slug).join("index.html")
    }
}

// ====================
// Display helpers
// ====================

/// Text form of a free-form JSON value, `None` for null.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub fn non_empty(s: &str) -> Option<&str> {
    (!s.trim().is_empty()).then_some(s)
}

/// Strip characters that could end a declaration or the `<style>` block.
pub fn css_value(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>'))
        .collect()
}

// ====================

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use serde_json::json;

    #[test]
    fn test_page_slug() {
        assert_snapshot!(page_slug("/"), @"");
        assert_snapshot!(page_slug(""), @"");
        assert_snapshot!(page_slug("/About Us/"), @"about-us");
        assert_snapshot!(page_slug("/services/web"), @"services/web");
        assert_snapshot!(page_slug("/../etc/./passwd"), @"etc/passwd");
        assert_snapshot!(page_slug("/Café & Bar"), @"caf-bar");
    }

    #[test]
    fn test_page_output_path() {
        let out = Path::new("dist");
        assert_eq!(page_output_path(out, "/"), out.join("index.html"));
        assert_eq!(
            page_output_path(out, "/about"),
            out.join("about").join("index.html")
        );
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!(null)), None);
        assert_eq!(display_value(&json!("$99")).as_deref(), Some("$99"));
        assert_eq!(display_value(&json!(12.5)).as_deref(), Some("12.5"));
        assert_eq!(display_value(&json!(true)).as_deref(), Some("true"));
    }

    #[test]
    fn test_css_value() {
        assert_snapshot!(css_value("#fff; } body { x"), @"#fff  body  x");
        assert_snapshot!(css_value("'Inter', sans-serif"), @"'Inter', sans-serif");
    }
}
