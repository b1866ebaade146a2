//! Site description data model.
//!
//! Everything a site needs to render lives under [`SiteConfiguration`]:
//! identity (`meta`), brand and theme (`siteConfig`), header/footer
//! structure (`navigation`), the pages with their sections, and shared
//! style presets (`contentLibrary`).
//!
//! Wire names are camelCase. Missing fields fall back to their defaults so
//! that strict decoding of an already-repaired payload does not fail on
//! partial content; the repairs themselves live in [`crate::normalize`].

pub(crate) mod de;
pub mod navigation;
pub mod section;
pub mod theme;

pub use navigation::{
    CustomFooterText, FooterBottomBar, FooterColumn, FooterColumnKind,
    FooterLink, FooterNavigation, HeaderNavigation, NavItem, NavItemKind,
    Navigation, NavigationCta, Newsletter, SocialLink,
};
pub use section::{
    AboutContent, CardGridContent, CardGridFooter, CardGridLabels, CardItem,
    ContactContent, ContactCta, ContactInfoItem, ContactInfoKind, CtaButton,
    Experience, GradientPair, HeroBadge, HeroContent, HeroCtas, HeroFeature,
    HeroHeading, HeroSubheading, ImageContent, Mission, ScrollIndicator,
    Section, SectionBody, SectionKind, StatItem,
};
pub use theme::{
    BorderRadius, FontSizes, Spacing, Theme, ThemeColors, Typography,
};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root aggregate of a resolved site description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfiguration {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub site_config: SiteConfig,
    #[serde(default)]
    pub navigation: Navigation,
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(default)]
    pub content_library: ContentLibrary,
}

/// Site identity and locale information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meta {
    pub version: String,
    pub last_updated: String,
    pub site_id: String,
    pub language: String,
    pub locales: Vec<String>,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub brand: Brand,
    pub theme: Theme,
    pub seo: Seo,
    pub analytics: Analytics,
}

/// Brand identity.
///
/// At most one logo applies when rendering: an external image (`logoUrl`,
/// or `logo` with `type: image`) or a generated vector logo (`logo` with
/// `type: svg`). Neither means a text-only brand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoConfig>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoKind {
    #[default]
    Svg,
    Image,
}

/// Parameters of the generated vector logo, or an external logo URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoConfig {
    #[serde(rename = "type")]
    pub kind: LogoKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_stroke_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seo {
    pub keywords: Vec<String>,
    pub author: String,
    pub og_image: String,
    pub favicon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Analytics {
    pub google_analytics_id: String,
    pub facebook_pixel_id: String,
    pub enabled: bool,
}

/// One page of the site. Looked up by either `id` or `path`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Page {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    pub path: String,
    pub title: String,
    pub description: String,
    pub enabled: bool,
    pub sections: Vec<Section>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            id: String::new(),
            path: String::new(),
            title: String::new(),
            description: String::new(),
            enabled: true,
            sections: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonStyle {
    pub style: String,
    pub rounded: bool,
    pub shadow: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonPresets {
    pub primary: ButtonStyle,
    pub secondary: ButtonStyle,
}

/// Shared style presets. Animation presets are opaque to this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentLibrary {
    pub buttons: ButtonPresets,
    pub animations: Map<String, Value>,
}
