use serde::Serialize;

/// Context data passed to templates for rendering pages
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageContext {
    /// Site-level metadata
    pub site: SiteContext,
    /// Current page data
    pub page: PageData,
}

/// Site-level context for templates
#[derive(Debug, Clone, Default, Serialize)]
pub struct SiteContext {
    pub title: String,
    pub description: String,
    /// `lang` attribute of the document
    pub language: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub og_image: String,
    pub favicon: String,
    /// Base stylesheet
    pub stylesheet: String,
    /// Custom properties and body rules of the applied theme
    pub theme_css: String,
}

/// Individual page data
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageData {
    pub title: String,
    pub description: String,
    /// Rendered header markup
    pub header: String,
    /// Rendered sections
    pub content: String,
    /// Rendered footer markup
    pub footer: String,
    /// Route of this page
    pub path: String,
}
