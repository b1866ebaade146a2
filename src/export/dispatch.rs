//! Section dispatch.
//!
//! Every [`SectionBody`] variant maps to one [`SectionRenderer`] method.
//! A renderer that leaves a method at its default has no binding for that
//! kind; such sections are skipped with a warning.

use super::sections;
use crate::schema::{
    AboutContent, CardGridContent, ContactContent, HeroContent, Section,
    SectionBody, Theme,
};
use maud::Markup;
use tracing::warn;

pub trait SectionRenderer {
    fn hero(&self, _section: &Section, _content: &HeroContent, _theme: &Theme) -> Option<Markup> {
        None
    }

    fn card_grid(
        &self,
        _section: &Section,
        _content: &CardGridContent,
        _theme: &Theme,
    ) -> Option<Markup> {
        None
    }

    fn about(&self, _section: &Section, _content: &AboutContent, _theme: &Theme) -> Option<Markup> {
        None
    }

    fn contact(
        &self,
        _section: &Section,
        _content: &ContactContent,
        _theme: &Theme,
    ) -> Option<Markup> {
        None
    }
}

/// Binds every section kind to the built-in renderers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRenderer;

impl SectionRenderer for StandardRenderer {
    fn hero(&self, section: &Section, content: &HeroContent, theme: &Theme) -> Option<Markup> {
        Some(sections::render_hero(section, content, theme))
    }

    fn card_grid(
        &self,
        section: &Section,
        content: &CardGridContent,
        theme: &Theme,
    ) -> Option<Markup> {
        Some(sections::render_card_grid(section, content, theme))
    }

    fn about(&self, section: &Section, content: &AboutContent, theme: &Theme) -> Option<Markup> {
        Some(sections::render_about(section, content, theme))
    }

    fn contact(
        &self,
        section: &Section,
        content: &ContactContent,
        theme: &Theme,
    ) -> Option<Markup> {
        Some(sections::render_contact(section, content, theme))
    }
}

pub fn render_section<R>(section: &Section, theme: &Theme, renderer: &R) -> Option<Markup>
where
    R: SectionRenderer + ?Sized,
{
    let rendered = match &section.body {
        SectionBody::Hero(content) => renderer.hero(section, content, theme),
        SectionBody::CardGrid(content) => renderer.card_grid(section, content, theme),
        SectionBody::About(content) => renderer.about(section, content, theme),
        SectionBody::Contact(content) => renderer.contact(section, content, theme),
    };
    if rendered.is_none() {
        warn!(
            section = %section.id,
            section_type = %section.kind(),
            "No renderer bound for section type, skipping"
        );
    }
    rendered
}

/// Render sections in the given order, skipping unbound kinds.
pub fn render_sections<R>(sections: &[&Section], theme: &Theme, renderer: &R) -> Vec<Markup>
where
    R: SectionRenderer + ?Sized,
{
    sections
        .iter()
        .filter_map(|section| render_section(section, theme, renderer))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::sections::test_section;
    use maud::html;
    use serde_json::json;

    /// Only knows about heroes and contact sections.
    struct Partial;

    impl SectionRenderer for Partial {
        fn hero(&self, section: &Section, _: &HeroContent, _: &Theme) -> Option<Markup> {
            Some(html! { p { "hero " (section.id) } })
        }

        fn contact(&self, section: &Section, _: &ContactContent, _: &Theme) -> Option<Markup> {
            Some(html! { p { "contact " (section.id) } })
        }
    }

    #[test]
    fn test_unbound_kind_is_skipped() {
        let hero = test_section(json!({ "id": "h", "type": "hero" }));
        let about = test_section(json!({ "id": "a", "type": "about" }));
        let contact = test_section(json!({ "id": "c", "type": "contact" }));

        let rendered = render_sections(&[&hero, &about, &contact], &Theme::default(), &Partial);
        let rendered: Vec<String> = rendered.into_iter().map(Markup::into_string).collect();
        assert_eq!(rendered, ["<p>hero h</p>", "<p>contact c</p>"]);
    }

    #[test]
    fn test_standard_renderer_binds_every_kind() {
        let sections = [
            test_section(json!({ "id": "h", "type": "hero" })),
            test_section(json!({ "id": "g", "type": "cardGrid" })),
            test_section(json!({ "id": "s", "type": "services" })),
            test_section(json!({ "id": "a", "type": "about" })),
            test_section(json!({ "id": "c", "type": "contact" })),
        ];
        let refs: Vec<&Section> = sections.iter().collect();
        let rendered = render_sections(&refs, &Theme::default(), &StandardRenderer);
        assert_eq!(rendered.len(), 5);
        assert!(rendered[2].0.contains("card-grid"));
    }
}
