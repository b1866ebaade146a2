//! Built-in section renderers.

mod about;
mod card_grid;
mod contact;
mod hero;

pub use about::render_about;
pub use card_grid::render_card_grid;
pub use contact::render_contact;
pub use hero::render_hero;

use super::utils::non_empty;
use crate::schema::CtaButton;
use maud::{Markup, html};

/// Icon placeholder, resolved client-side from `data-icon`.
pub(crate) fn icon(name: &str) -> Markup {
    html! {
        @if let Some(name) = non_empty(name) {
            span .icon data-icon=(name) aria-hidden="true" {}
        }
    }
}

/// Link styled as a button. Buttons without text are not rendered.
pub(crate) fn cta_button(button: &CtaButton, default_style: &str) -> Markup {
    let style = button.style.as_deref().unwrap_or(default_style);
    html! {
        @if non_empty(&button.text).is_some() {
            a class=(format!("btn btn-{}", style)) href=(button.href) {
                (button.text)
                @if let Some(name) = &button.icon {
                    (icon(name))
                }
            }
        }
    }
}

/// Badge, heading and description shared by the content sections.
pub(crate) fn section_intro(badge: &str, heading: &str, description: &str) -> Markup {
    html! {
        div .section-intro {
            @if let Some(badge) = non_empty(badge) {
                span .badge { (badge) }
            }
            @if let Some(heading) = non_empty(heading) {
                h2 .section-heading { (heading) }
            }
            @if let Some(description) = non_empty(description) {
                p .section-description { (description) }
            }
        }
    }
}

/// Normalize a single raw section, for renderer tests.
#[cfg(test)]
pub(crate) fn test_section(raw: serde_json::Value) -> crate::schema::Section {
    let config = crate::normalize::normalize(serde_json::json!({
        "pages": [{ "id": "test", "sections": [raw] }]
    }))
    .unwrap();
    config.pages[0].sections[0].clone()
}
