use super::{cta_button, icon, section_intro};
use crate::export::utils::{display_value, non_empty};
use crate::schema::{CardGridContent, CardItem, Section, Theme};
use maud::{Markup, html};

const DEFAULT_FEATURED_BADGE: &str = "Featured";

pub fn render_card_grid(
    section: &Section,
    content: &CardGridContent,
    _theme: &Theme,
) -> Markup {
    let featured_index = section
        .settings
        .get("featuredIndex")
        .and_then(|index| index.as_u64());
    let labels = content.labels.clone().unwrap_or_default();
    let featured_badge = labels
        .featured_badge
        .as_deref()
        .and_then(non_empty)
        .unwrap_or(DEFAULT_FEATURED_BADGE);

    html! {
        section .section.card-grid id=[non_empty(&section.id)] {
            div .container {
                (section_intro(&content.badge, &content.heading, &content.description))
                div .cards {
                    @for (index, item) in content.items.iter().enumerate() {
                        @let featured = item.featured
                            || featured_index == Some(index as u64);
                        (render_card(
                            item,
                            featured.then_some(featured_badge),
                            labels.metadata_label.as_deref(),
                        ))
                    }
                }
                @if let Some(footer) = &content.footer {
                    div .card-grid-footer {
                        @if let Some(text) = non_empty(&footer.text) {
                            p { (text) }
                        }
                        (cta_button(&footer.cta, "outline"))
                    }
                }
            }
        }
    }
}

fn render_card(
    item: &CardItem,
    featured_badge: Option<&str>,
    metadata_label: Option<&str>,
) -> Markup {
    let metadata = item.metadata.values().find_map(display_value);

    html! {
        article .card {
            @if let Some(badge) = featured_badge {
                div .card-featured {
                    (icon("star"))
                    (badge)
                }
            }
            @if let Some(url) = non_empty(&item.media.url) {
                div .card-media {
                    img src=(url) alt=(item.media.alt) loading="lazy";
                }
            }
            div .card-body {
                h3 .card-title { (item.title) }
                @if let Some(subtitle) = item.subtitle.as_deref().and_then(non_empty) {
                    p .card-subtitle { (subtitle) }
                }
                @if let Some(description) = non_empty(&item.description) {
                    p .card-description { (description) }
                }
                @if !item.tags.is_empty() {
                    ul .card-tags {
                        @for tag in &item.tags {
                            li .tag { (tag) }
                        }
                    }
                }
                @if metadata.is_some() || item.cta.is_some() {
                    div .card-footer {
                        @if let Some(value) = &metadata {
                            div .card-metadata {
                                @if let Some(label) = metadata_label.and_then(non_empty) {
                                    p .card-metadata-label { (label) }
                                }
                                span .card-metadata-value { (value) }
                            }
                        }
                        @if let Some(cta) = &item.cta {
                            (cta_button(cta, "gradient"))
                        }
                    }
                }
            }
        }
    }
}
