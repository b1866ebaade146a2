use super::{cta_button, icon};
use crate::export::utils::{css_value, non_empty};
use crate::schema::{HeroContent, HeroHeading, Section, Theme};
use maud::{Markup, html};

/// Words kept out of the gradient when `splitAt` is not given.
const DEFAULT_SPLIT_AT: usize = 3;

/// Split a heading into its plain lead and its highlighted tail.
fn split_heading(heading: &HeroHeading) -> (String, Option<String>) {
    if !heading.gradient {
        return (heading.text.clone(), None);
    }
    let split_at = heading.split_at.unwrap_or(DEFAULT_SPLIT_AT);
    let words: Vec<&str> = heading.text.split_whitespace().collect();
    let (lead, tail) = words.split_at(split_at.min(words.len()));
    let tail = (!tail.is_empty()).then(|| tail.join(" "));
    (lead.join(" "), tail)
}

pub fn render_hero(section: &Section, content: &HeroContent, theme: &Theme) -> Markup {
    let (lead, highlighted) = split_heading(&content.heading);
    let background = non_empty(&content.background_image.url)
        .map(|url| format!("background-image: url('{}')", css_value(url)));
    let overlay = format!(
        "background: linear-gradient(135deg, {} 0%, {} 100%)",
        css_value(theme.primary()),
        css_value(theme.secondary())
    );

    html! {
        section .section.hero id=[non_empty(&section.id)] style=[background] {
            div .hero-overlay style=(overlay) {}
            div .container.hero-content {
                @if content.badge.visible && non_empty(&content.badge.text).is_some() {
                    div .badge.hero-badge {
                        (icon(&content.badge.icon))
                        span { (content.badge.text) }
                    }
                }
                h1 .hero-heading {
                    (lead)
                    @if let Some(highlighted) = highlighted {
                        " "
                        span .text-gradient { (highlighted) }
                    }
                }
                @if let Some(subheading) = non_empty(&content.subheading.text) {
                    p .hero-subheading { (subheading) }
                }
                div .hero-ctas {
                    (cta_button(&content.cta.primary, "gradient"))
                    (cta_button(&content.cta.secondary, "glass"))
                }
                @if !content.features.is_empty() {
                    ul .hero-features {
                        @for feature in &content.features {
                            li .hero-feature {
                                (icon(&feature.icon))
                                span { (feature.text) }
                            }
                        }
                    }
                }
            }
            @if content.scroll_indicator.visible {
                div .scroll-indicator {
                    span .scroll-mouse {}
                    @if let Some(text) = non_empty(&content.scroll_indicator.text) {
                        p { (text) }
                    }
                }
            }
        }
    }
}
