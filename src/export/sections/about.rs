use super::{icon, section_intro};
use crate::export::utils::non_empty;
use crate::schema::{AboutContent, Section, Theme};
use maud::{Markup, html};

pub fn render_about(section: &Section, content: &AboutContent, _theme: &Theme) -> Markup {
    let mission = &content.mission;
    let experience = &content.experience;

    html! {
        section .section.about id=[non_empty(&section.id)] {
            div .container.about-layout {
                div .about-text {
                    (section_intro(&content.badge, &content.heading, &content.description))
                    @if non_empty(&mission.text).is_some() {
                        div .mission {
                            (icon(&mission.icon))
                            div {
                                @if let Some(heading) = non_empty(&mission.heading) {
                                    h3 .mission-heading { (heading) }
                                }
                                p .mission-text { (mission.text) }
                            }
                        }
                    }
                    @if !content.stats.is_empty() {
                        dl .stats {
                            @for stat in &content.stats {
                                div .stat {
                                    (icon(&stat.icon))
                                    dt .stat-value { (stat.value) }
                                    dd .stat-label { (stat.label) }
                                }
                            }
                        }
                    }
                }
                @if let Some(url) = non_empty(&content.image.url) {
                    figure .about-media {
                        img src=(url) alt=(content.image.alt) loading="lazy";
                        @if let Some(years) = non_empty(&experience.years) {
                            figcaption .experience {
                                span .experience-years { (years) }
                                span .experience-label { (experience.label) }
                            }
                        }
                    }
                }
            }
        }
    }
}
