//! Theme application.
//!
//! Turns a [`Theme`] into the CSS custom properties and body styles of a
//! single document. Nothing is applied globally: each rendered document
//! embeds its own [`AppliedTheme::to_css`] output.

use super::utils::css_value;
use crate::schema::{Meta, Theme};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BodyStyle {
    pub font_family: String,
    pub background_color: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppliedTheme {
    /// `(name, value)` pairs, names include the leading `--`.
    pub variables: Vec<(&'static str, String)>,
    pub body: BodyStyle,
    pub title: String,
}

pub fn apply_theme(theme: &Theme, meta: &Meta) -> AppliedTheme {
    let flat = |value: &Option<String>| value.clone().unwrap_or_default();

    let variables = vec![
        ("--primary-color", flat(&theme.primary_color)),
        ("--secondary-color", flat(&theme.secondary_color)),
        ("--accent-color", flat(&theme.accent_color)),
        ("--background-color", flat(&theme.background_color)),
        ("--text-color", flat(&theme.text_color)),
        ("--muted-color", theme.colors.muted.clone()),
        (
            "--heading-font-family",
            theme.typography.heading_font_family.clone(),
        ),
        ("--font-size-base", theme.typography.font_size.base.clone()),
        ("--section-padding", theme.spacing.section_padding.clone()),
        (
            "--container-max-width",
            theme.spacing.container_max_width.clone(),
        ),
        ("--radius-small", theme.border_radius.small.clone()),
        ("--radius-medium", theme.border_radius.medium.clone()),
        ("--radius-large", theme.border_radius.large.clone()),
    ];

    AppliedTheme {
        variables,
        body: BodyStyle {
            font_family: flat(&theme.font_family),
            background_color: flat(&theme.background_color),
            color: flat(&theme.text_color),
        },
        title: meta.title.clone(),
    }
}

impl AppliedTheme {
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// `:root { ... } body { ... }`. Empty values are left out so the
    /// base stylesheet fallbacks apply.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.variables {
            if !value.is_empty() {
                css.push_str(&format!("  {}: {};\n", name, css_value(value)));
            }
        }
        css.push_str("}\nbody {\n");
        let body = [
            ("font-family", &self.body.font_family),
            ("background-color", &self.body.background_color),
            ("color", &self.body.color),
        ];
        for (property, value) in body {
            if !value.is_empty() {
                css.push_str(&format!("  {}: {};\n", property, css_value(value)));
            }
        }
        css.push_str("}\n");
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn theme() -> Theme {
        let mut theme = Theme {
            primary_color: Some("#6366f1".to_string()),
            secondary_color: Some("#8b5cf6".to_string()),
            accent_color: Some("#f59e0b".to_string()),
            background_color: Some("#ffffff".to_string()),
            text_color: Some("#1f2937".to_string()),
            font_family: Some("Inter, sans-serif".to_string()),
            ..Default::default()
        };
        theme.border_radius.medium = "12px".to_string();
        theme
    }

    #[test]
    fn test_apply_theme_css() {
        let meta = Meta {
            title: "Acme".to_string(),
            ..Default::default()
        };
        let applied = apply_theme(&theme(), &meta);
        assert_eq!(applied.title, "Acme");
        assert_eq!(applied.variable("--primary-color"), Some("#6366f1"));
        assert_snapshot!(applied.to_css(), @r"
        :root {
          --primary-color: #6366f1;
          --secondary-color: #8b5cf6;
          --accent-color: #f59e0b;
          --background-color: #ffffff;
          --text-color: #1f2937;
          --radius-medium: 12px;
        }
        body {
          font-family: Inter, sans-serif;
          background-color: #ffffff;
          color: #1f2937;
        }
        ");
    }

    #[test]
    fn test_apply_theme_is_idempotent() {
        let theme = theme();
        let meta = Meta::default();
        assert_eq!(apply_theme(&theme, &meta), apply_theme(&theme, &meta));
    }

    #[test]
    fn test_missing_flat_fields_are_empty() {
        let applied = apply_theme(&Theme::default(), &Meta::default());
        let legacy = [
            "--primary-color",
            "--secondary-color",
            "--accent-color",
            "--background-color",
            "--text-color",
        ];
        for name in legacy {
            assert_eq!(applied.variable(name), Some(""));
        }
        assert_eq!(applied.to_css(), ":root {\n}\nbody {\n}\n");
    }
}
