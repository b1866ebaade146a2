use serde::{Deserialize, Serialize};

/// Presentation values shared by every renderer.
///
/// Two generations of renderers read the theme: older ones use the flat
/// `primaryColor`/`fontFamily` fields, newer ones the nested `colors` and
/// `typography`. After normalization both are populated and agree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub colors: ThemeColors,
    pub typography: Typography,
    pub spacing: Spacing,
    pub border_radius: BorderRadius,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl Theme {
    pub fn primary(&self) -> &str {
        self.primary_color.as_deref().unwrap_or(&self.colors.primary)
    }

    pub fn secondary(&self) -> &str {
        self.secondary_color
            .as_deref()
            .unwrap_or(&self.colors.secondary)
    }

    pub fn accent(&self) -> &str {
        self.accent_color.as_deref().unwrap_or(&self.colors.accent)
    }

    pub fn background(&self) -> &str {
        self.background_color
            .as_deref()
            .unwrap_or(&self.colors.background)
    }

    pub fn text(&self) -> &str {
        self.text_color.as_deref().unwrap_or(&self.colors.text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub muted: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Typography {
    pub font_family: String,
    pub heading_font_family: String,
    pub font_size: FontSizes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSizes {
    pub base: String,
    pub heading1: String,
    pub heading2: String,
    pub heading3: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Spacing {
    pub section_padding: String,
    pub container_max_width: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BorderRadius {
    pub small: String,
    pub medium: String,
    pub large: String,
}
