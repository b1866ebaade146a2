//! Normalization and query behavior on full fixture payloads.

use marquee::loader::parse_payload;
use marquee::normalize::normalize;
use marquee::schema::{SectionBody, SectionKind, SiteConfiguration};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str) -> Value {
    let path = PathBuf::from("tests/data/configs").join(name);
    let text = fs::read_to_string(&path).unwrap();
    serde_json::from_str(&text).unwrap()
}

fn site() -> SiteConfiguration {
    normalize(fixture("site.json")).unwrap()
}

#[test]
fn unknown_section_types_are_dropped() {
    let config = site();
    let home = config.page("home").unwrap();
    let ids: Vec<&str> = home.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["contact", "hero", "services", "about", "draft"]);
}

#[test]
fn enabled_sections_follow_order() {
    let config = site();
    let sections = config.enabled_sections("/");
    let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["hero", "services", "about", "contact"]);

    let kinds: Vec<SectionKind> = sections.iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        [
            SectionKind::Hero,
            SectionKind::CardGrid,
            SectionKind::About,
            SectionKind::Contact
        ]
    );
}

#[test]
fn services_become_cards() {
    let config = site();
    let section = config.section("home", "services").unwrap();
    let SectionBody::CardGrid(grid) = &section.body else {
        panic!("expected a card grid, got {:?}", section.kind());
    };

    assert_eq!(grid.heading, "Services");
    assert_eq!(grid.items.len(), 2);
    let web = &grid.items[1];
    assert_eq!(web.id, "2");
    assert_eq!(
        web.media.url,
        "https://via.placeholder.com/400x300?text=Web%20%26%20Mobile"
    );
    assert_eq!(web.media.alt, "Web & Mobile");
    assert_eq!(web.tags, ["iOS"]);
}

#[test]
fn about_and_contact_are_repaired() {
    let config = site();

    let about = config.section("home", "about").unwrap();
    let SectionBody::About(about) = &about.body else {
        panic!("expected about");
    };
    assert_eq!(about.mission.heading, "Our Mission");
    assert_eq!(about.mission.text, "Ship software people trust.");
    assert_eq!(about.stats[0].value, "120");
    assert_eq!(about.experience.years, "");

    let about_page = config.section("/about", "about-main").unwrap();
    let SectionBody::About(about_page) = &about_page.body else {
        panic!("expected about");
    };
    assert_eq!(about_page.experience.years, "15");

    let contact = config.section("home", "contact").unwrap();
    let SectionBody::Contact(contact) = &contact.body else {
        panic!("expected contact");
    };
    let email = &contact.contact_info[0];
    assert_eq!(email.color.from, "#1A1A2E");
    assert_eq!(email.color.to, "#16213E");
    assert_eq!(contact.contact_info[1].href.as_deref(), Some("tel:+15550100"));
    let cta = contact.cta.as_ref().unwrap();
    assert_eq!(cta.button.text, "Send Message");
    assert_eq!(cta.button.href, "mailto:hello@acme.test");
}

#[test]
fn theme_is_backfilled_both_ways() {
    let config = site();
    let theme = config.theme();
    assert_eq!(theme.primary(), "#0f766e");
    assert_eq!(theme.colors.primary, "#0f766e");
    assert_eq!(theme.accent_color.as_deref(), Some("#f59e0b"));
    assert_eq!(theme.typography.font_family, "Inter, sans-serif");
}

#[test]
fn disabled_pages_stay_queryable() {
    let config = site();
    assert!(config.page("/legacy").is_some());
    let enabled: Vec<&str> = config.enabled_pages().map(|p| p.id.as_str()).collect();
    assert_eq!(enabled, ["home", "about"]);
    assert!(config.enabled_sections("nope").is_empty());
}

#[test]
fn envelope_is_transparent() {
    let wrapped = parse_payload(fixture("enveloped.json")).unwrap();
    let bare = parse_payload(fixture("site.json")).unwrap();
    assert_eq!(wrapped, bare);
}

#[test]
fn missing_pages_is_rejected() {
    let err = parse_payload(fixture("no_pages.json")).unwrap_err();
    assert!(err.to_string().contains("pages"));
}

#[test]
fn normalizing_twice_changes_nothing() {
    let once = site();
    let twice = normalize(serde_json::to_value(&once).unwrap()).unwrap();
    assert_eq!(once, twice);
}
