use super::{cta_button, icon, section_intro};
use crate::export::utils::{css_value, non_empty};
use crate::schema::{ContactContent, ContactInfoItem, Section, Theme};
use maud::{Markup, html};

pub fn render_contact(section: &Section, content: &ContactContent, _theme: &Theme) -> Markup {
    html! {
        section .section.contact id=[non_empty(&section.id)] {
            div .container {
                (section_intro(&content.badge, &content.heading, &content.description))
                @if !content.contact_info.is_empty() {
                    div .contact-cards {
                        @for entry in &content.contact_info {
                            (render_contact_card(entry))
                        }
                    }
                }
                @if let Some(cta) = &content.cta {
                    div .contact-cta {
                        @if let Some(heading) = non_empty(&cta.heading) {
                            h3 { (heading) }
                        }
                        @if let Some(description) = non_empty(&cta.description) {
                            p { (description) }
                        }
                        (cta_button(&cta.button, "primary"))
                    }
                }
            }
        }
    }
}

fn render_contact_card(entry: &ContactInfoItem) -> Markup {
    let gradient = format!(
        "background: linear-gradient(135deg, {}, {})",
        css_value(&entry.color.from),
        css_value(&entry.color.to)
    );
    let href = entry.href.as_deref().and_then(non_empty);

    html! {
        div .contact-card {
            div .contact-icon style=(gradient) {
                (icon(&entry.icon))
            }
            @if let Some(label) = non_empty(&entry.label) {
                h4 .contact-label { (label) }
            }
            @match href {
                Some(href) => a .contact-value href=(href) { (entry.value) },
                None => p .contact-value { (entry.value) },
            }
        }
    }
}
