//! Read-only lookups over a resolved [`SiteConfiguration`].
//!
//! Nothing here is cached: every call walks the configuration.

use crate::schema::{Brand, Navigation, Page, Section, SiteConfiguration, Theme};
use itertools::Itertools;

impl SiteConfiguration {
    /// First page whose `id` or `path` equals `id_or_path`.
    pub fn page(&self, id_or_path: &str) -> Option<&Page> {
        self.pages
            .iter()
            .find(|page| page.id == id_or_path || page.path == id_or_path)
    }

    /// Enabled sections of a page, ascending by `order`.
    ///
    /// Sections sharing an `order` keep their array order. An unknown page
    /// yields an empty list.
    pub fn enabled_sections(&self, page_id: &str) -> Vec<&Section> {
        self.page(page_id)
            .map(Page::enabled_sections)
            .unwrap_or_default()
    }

    pub fn section(&self, page_id: &str, section_id: &str) -> Option<&Section> {
        self.page(page_id)?
            .sections
            .iter()
            .find(|section| section.id == section_id)
    }

    /// Pages that should be rendered.
    pub fn enabled_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|page| page.enabled)
    }

    pub fn theme(&self) -> &Theme {
        &self.site_config.theme
    }

    pub fn brand(&self) -> &Brand {
        &self.site_config.brand
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }
}

impl Page {
    /// Enabled sections of this page, ascending by `order`.
    ///
    /// Sections sharing an `order` keep their array order.
    pub fn enabled_sections(&self) -> Vec<&Section> {
        self.sections
            .iter()
            .filter(|section| section.enabled)
            .sorted_by(|a, b| a.order.total_cmp(&b.order))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::normalize::normalize;
    use crate::schema::SiteConfiguration;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn hero(id: &str, enabled: bool, order: f64) -> Value {
        json!({ "id": id, "type": "hero", "enabled": enabled, "order": order })
    }

    fn site(sections: Vec<Value>) -> SiteConfiguration {
        normalize(json!({
            "pages": [
                { "id": "home", "path": "/", "sections": sections },
                { "id": "about", "path": "/about" },
            ]
        }))
        .unwrap()
    }

    fn ids(config: &SiteConfiguration, page: &str) -> Vec<String> {
        config
            .enabled_sections(page)
            .into_iter()
            .map(|s| s.id.clone())
            .collect()
    }

    #[rstest]
    #[case(vec![hero("a", true, 3.0), hero("b", true, 1.0), hero("c", true, 2.0)], vec!["b", "c", "a"])]
    #[case(vec![hero("a", true, 1.0), hero("b", false, 0.0), hero("c", true, 0.0)], vec!["c", "a"])]
    #[case(vec![hero("a", true, 1.0), hero("b", true, 1.0), hero("c", true, 0.0)], vec!["c", "a", "b"])]
    #[case(vec![hero("a", true, -1.0), hero("b", true, 10.0)], vec!["a", "b"])]
    #[case(vec![hero("a", true, 1.5), hero("b", true, 1.0), hero("c", true, 2.0)], vec!["b", "a", "c"])]
    #[case(vec![hero("a", true, 0.25), hero("b", true, 0.0)], vec!["b", "a"])]
    #[case(vec![hero("a", false, 0.0)], vec![])]
    fn test_enabled_sections_order(
        #[case] sections: Vec<Value>,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(ids(&site(sections), "home"), expected);
    }

    #[test]
    fn test_enabled_sections_by_path() {
        let config = site(vec![hero("a", true, 0.0)]);
        assert_eq!(ids(&config, "/"), ["a"]);
    }

    #[test]
    fn test_enabled_sections_missing_page() {
        let config = site(vec![hero("a", true, 0.0)]);
        assert!(config.enabled_sections("contact").is_empty());
        assert!(config.enabled_sections("about").is_empty());
    }

    #[test]
    fn test_page_sections_ignore_other_pages() {
        let config = normalize(json!({
            "pages": [
                { "path": "/", "sections": [hero("home-hero", true, 0.0)] },
                { "path": "/about", "sections": [hero("about-hero", true, 0.0)] },
            ]
        }))
        .unwrap();
        let about = &config.pages[1];
        let ids: Vec<&str> = about.enabled_sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["about-hero"]);
    }

    #[test]
    fn test_page_lookup() {
        let config = site(vec![]);
        assert_eq!(config.page("/about").map(|p| p.id.as_str()), Some("about"));
        assert_eq!(config.page("home").map(|p| p.path.as_str()), Some("/"));
        assert!(config.page("/missing").is_none());
    }

    #[test]
    fn test_section_lookup() {
        let config = site(vec![hero("a", false, 0.0), hero("b", true, 0.0)]);
        assert!(config.section("home", "a").is_some());
        assert!(config.section("home", "z").is_none());
        assert!(config.section("about", "a").is_none());
    }
}
