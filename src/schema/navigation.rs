use serde::{Deserialize, Serialize};

/// Header and footer structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Navigation {
    pub header: HeaderNavigation,
    pub footer: FooterNavigation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavItemKind {
    #[default]
    Link,
    Dropdown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub href: String,
    #[serde(rename = "type")]
    pub kind: NavItemKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationCta {
    pub enabled: bool,
    pub label: String,
    pub href: String,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderNavigation {
    pub enabled: bool,
    /// `fixed`, `sticky` or `static`
    pub position: String,
    /// `transparent` or `solid`
    pub style: String,
    pub items: Vec<NavItem>,
    pub cta: NavigationCta,
}

impl Default for HeaderNavigation {
    fn default() -> Self {
        Self {
            enabled: true,
            position: "fixed".to_string(),
            style: "solid".to_string(),
            items: Vec::new(),
            cta: NavigationCta::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterColumnKind {
    #[default]
    Brand,
    Links,
    Social,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterColumn {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FooterColumnKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<FooterLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media: Option<Vec<SocialLink>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Newsletter {
    pub enabled: bool,
    pub heading: String,
    pub placeholder: String,
    pub button_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomFooterText {
    pub made_with: String,
    pub by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterBottomBar {
    pub copyright_text: String,
    pub links: Vec<String>,
    pub custom_text: CustomFooterText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterNavigation {
    pub enabled: bool,
    pub columns: Vec<FooterColumn>,
    pub newsletter: Newsletter,
    pub bottom_bar: FooterBottomBar,
}

impl Default for FooterNavigation {
    fn default() -> Self {
        Self {
            enabled: true,
            columns: Vec::new(),
            newsletter: Newsletter::default(),
            bottom_bar: FooterBottomBar::default(),
        }
    }
}
