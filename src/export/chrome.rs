//! Page chrome: logo, header and footer.

use super::sections::icon;
use super::utils::{css_value, non_empty};
use crate::schema::{
    Brand, FooterColumn, FooterColumnKind, FooterNavigation, HeaderNavigation,
    LogoConfig, LogoKind, NavItem, NavItemKind, Theme,
};
use maud::{Markup, html};

/// Defaults of the generated vector logo.
const LOGO_WIDTH: u32 = 200;
const LOGO_HEIGHT: u32 = 60;
const LOGO_TEXT_COLOR: &str = "#2d3748";
const LOGO_ICON_PRIMARY: &str = "#6366f1";
const LOGO_ICON_SECONDARY: &str = "#8b5cf6";
const LOGO_ICON_STROKE: &str = "#ffffff";

/// Brand logo
///
/// - external image: `logoUrl`, or a `logo` of type `image` with a `url`
/// - generated vector logo: a `logo` of type `svg`
/// - otherwise the brand name as text
pub fn render_logo(brand: &Brand) -> Markup {
    let image_url = brand.logo_url.as_deref().and_then(non_empty).or_else(|| {
        brand
            .logo
            .as_ref()
            .filter(|logo| logo.kind == LogoKind::Image)
            .and_then(|logo| logo.url.as_deref())
            .and_then(non_empty)
    });

    if let Some(url) = image_url {
        return html! {
            img .logo src=(url) alt=(format!("{} Logo", brand.name));
        };
    }

    match &brand.logo {
        Some(logo) if logo.kind == LogoKind::Svg => render_svg_logo(&brand.name, logo),
        _ => html! { span .logo.logo-text { (brand.name) } },
    }
}

fn render_svg_logo(name: &str, logo: &LogoConfig) -> Markup {
    let width = logo.width.unwrap_or(LOGO_WIDTH);
    let height = logo.height.unwrap_or(LOGO_HEIGHT);
    let text_color = logo.text_color.as_deref().unwrap_or(LOGO_TEXT_COLOR);
    let primary = logo.icon_primary_color.as_deref().unwrap_or(LOGO_ICON_PRIMARY);
    let secondary = logo
        .icon_secondary_color
        .as_deref()
        .unwrap_or(LOGO_ICON_SECONDARY);
    let stroke = logo.icon_stroke_color.as_deref().unwrap_or(LOGO_ICON_STROKE);

    html! {
        svg .logo xmlns="http://www.w3.org/2000/svg"
            viewBox=(format!("0 0 {} {}", width, height)) fill="none"
            role="img" aria-label=(name) {
            defs {
                linearGradient id="logo-gradient" x1="0%" y1="0%" x2="100%" y2="100%" {
                    stop offset="0%" style=(format!("stop-color: {}; stop-opacity: 1", css_value(primary))) {}
                    stop offset="100%" style=(format!("stop-color: {}; stop-opacity: 1", css_value(secondary))) {}
                }
            }
            rect x="5" y="10" width="40" height="40" rx="8" fill="url(#logo-gradient)" {}
            path d="M 25 20 L 35 30 L 25 40" stroke=(stroke) stroke-width="3"
                stroke-linecap="round" stroke-linejoin="round" fill="none" {}
            path d="M 15 25 L 20 30 L 15 35" stroke=(stroke) stroke-width="3"
                stroke-linecap="round" stroke-linejoin="round" fill="none" {}
            text x="55" y="38" font-family="Inter, system-ui, sans-serif"
                font-size="28" font-weight="700" fill=(text_color) {
                (name)
            }
        }
    }
}

// ====================
// Header
// ====================

pub fn render_header(brand: &Brand, header: &HeaderNavigation, _theme: &Theme) -> Markup {
    if !header.enabled {
        return html! {};
    }
    let class = format!(
        "site-header site-header-{} site-header-{}",
        header.position, header.style
    );

    html! {
        header class=(class) {
            nav .container.header-bar {
                a .brand href="/" {
                    (render_logo(brand))
                    @if let Some(tagline) = non_empty(&brand.tagline) {
                        span .brand-tagline { (tagline) }
                    }
                }
                @if !header.items.is_empty() {
                    ul .nav-items {
                        @for item in &header.items {
                            (render_nav_item(item))
                        }
                    }
                }
                @if header.cta.enabled && non_empty(&header.cta.label).is_some() {
                    a class=(format!("btn btn-{}", header.cta.style)) href=(header.cta.href) {
                        (header.cta.label)
                    }
                }
            }
        }
    }
}

fn render_nav_item(item: &NavItem) -> Markup {
    let is_dropdown = item.kind == NavItemKind::Dropdown && !item.children.is_empty();
    html! {
        li .nav-item.dropdown[is_dropdown] {
            a href=(item.href) { (item.label) }
            @if is_dropdown {
                ul .nav-dropdown {
                    @for child in &item.children {
                        (render_nav_item(child))
                    }
                }
            }
        }
    }
}

// ====================
// Footer
// ====================

/// Site footer. `year` feeds the copyright line.
pub fn render_footer(
    brand: &Brand,
    footer: &FooterNavigation,
    _theme: &Theme,
    year: i32,
) -> Markup {
    if !footer.enabled {
        return html! {};
    }
    let bottom = &footer.bottom_bar;
    let custom = &bottom.custom_text;

    html! {
        footer .site-footer {
            div .container {
                @if !footer.columns.is_empty() {
                    div .footer-columns {
                        @for column in &footer.columns {
                            (render_footer_column(brand, column))
                        }
                    }
                }
                @if footer.newsletter.enabled {
                    form .newsletter onsubmit="return false" {
                        @if let Some(heading) = non_empty(&footer.newsletter.heading) {
                            h4 { (heading) }
                        }
                        input type="email" name="email" placeholder=(footer.newsletter.placeholder);
                        button type="submit" { (footer.newsletter.button_text) }
                    }
                }
                div .footer-bottom {
                    p .copyright {
                        "© " (year)
                        @if let Some(text) = non_empty(&bottom.copyright_text) {
                            " " (text)
                        }
                    }
                    @if !bottom.links.is_empty() {
                        ul .footer-bottom-links {
                            @for link in &bottom.links {
                                li { (link) }
                            }
                        }
                    }
                    @if non_empty(&custom.made_with).is_some() || non_empty(&custom.by).is_some() {
                        p .footer-custom {
                            (custom.made_with) " " (custom.by)
                        }
                    }
                }
            }
        }
    }
}

fn render_footer_column(brand: &Brand, column: &FooterColumn) -> Markup {
    let heading = column.heading.as_deref().and_then(non_empty);

    html! {
        div class=(format!("footer-column footer-column-{}", column_class(column.kind))) {
            @match column.kind {
                FooterColumnKind::Brand => {
                    h3 .footer-brand { (heading.unwrap_or(&brand.name)) }
                    @if let Some(content) = column.content.as_deref().and_then(non_empty) {
                        p { (content) }
                    }
                },
                FooterColumnKind::Links => {
                    @if let Some(heading) = heading {
                        h4 { (heading) }
                    }
                    ul .footer-links {
                        @for link in column.links.iter().flatten() {
                            li { a href=(link.href) { (link.label) } }
                        }
                    }
                },
                FooterColumnKind::Social => {
                    @if let Some(heading) = heading {
                        h4 { (heading) }
                    }
                    div .social-links {
                        @for social in column.social_media.iter().flatten() {
                            a .social-link href=(social.url) target="_blank"
                                rel="noopener noreferrer" aria-label=(social.platform) {
                                (icon(non_empty(&social.icon).unwrap_or(&social.platform)))
                            }
                        }
                    }
                },
            }
        }
    }
}

fn column_class(kind: FooterColumnKind) -> &'static str {
    match kind {
        FooterColumnKind::Brand => "brand",
        FooterColumnKind::Links => "links",
        FooterColumnKind::Social => "social",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FooterLink, NavItem};
    use insta::assert_snapshot;

    fn brand() -> Brand {
        Brand {
            name: "Acme".to_string(),
            tagline: "Things that work".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_logo_text_fallback() {
        assert_snapshot!(
            render_logo(&brand()).into_string(),
            @r#"<span class="logo logo-text">Acme</span>"#
        );
    }

    #[test]
    fn test_logo_url_wins_over_svg() {
        let brand = Brand {
            logo_url: Some("/logo.png".to_string()),
            logo: Some(LogoConfig::default()),
            ..brand()
        };
        assert_snapshot!(
            render_logo(&brand).into_string(),
            @r#"<img class="logo" src="/logo.png" alt="Acme Logo">"#
        );
    }

    #[test]
    fn test_logo_image_kind() {
        let brand = Brand {
            logo: Some(LogoConfig {
                kind: LogoKind::Image,
                url: Some("/brand.svg".to_string()),
                ..Default::default()
            }),
            ..brand()
        };
        assert!(render_logo(&brand).into_string().contains(r#"src="/brand.svg""#));
    }

    #[test]
    fn test_svg_logo_defaults() {
        let brand = Brand {
            logo: Some(LogoConfig::default()),
            ..brand()
        };
        let svg = render_logo(&brand).into_string();
        assert!(svg.contains(r#"viewBox="0 0 200 60""#));
        assert!(svg.contains("stop-color: #6366f1"));
        assert!(svg.contains("stop-color: #8b5cf6"));
        assert!(svg.contains(r##"stroke="#ffffff""##));
        assert!(svg.contains(r##"fill="#2d3748">Acme</text>"##));
    }

    #[test]
    fn test_svg_logo_overrides() {
        let brand = Brand {
            logo: Some(LogoConfig {
                width: Some(240),
                height: Some(48),
                text_color: Some("#000000".to_string()),
                ..Default::default()
            }),
            ..brand()
        };
        let svg = render_logo(&brand).into_string();
        assert!(svg.contains(r#"viewBox="0 0 240 48""#));
        assert!(svg.contains(r##"fill="#000000""##));
    }

    #[test]
    fn test_header_hidden() {
        let header = HeaderNavigation {
            enabled: false,
            ..Default::default()
        };
        assert_eq!(
            render_header(&brand(), &header, &Theme::default()).into_string(),
            ""
        );
    }

    #[test]
    fn test_header_dropdown() {
        let header = HeaderNavigation {
            items: vec![NavItem {
                id: "services".to_string(),
                label: "Services".to_string(),
                href: "/services".to_string(),
                kind: NavItemKind::Dropdown,
                children: vec![NavItem {
                    label: "Web".to_string(),
                    href: "/services/web".to_string(),
                    ..Default::default()
                }],
            }],
            ..Default::default()
        };
        let html = render_header(&brand(), &header, &Theme::default()).into_string();
        assert!(html.contains(r#"<header class="site-header site-header-fixed site-header-solid">"#));
        assert!(html.contains(r#"<span class="brand-tagline">Things that work</span>"#));
        assert!(html.contains(r#"<li class="nav-item dropdown"><a href="/services">Services</a><ul class="nav-dropdown"><li class="nav-item"><a href="/services/web">Web</a></li></ul></li>"#));
    }

    #[test]
    fn test_footer() {
        let mut footer = FooterNavigation::default();
        footer.columns = vec![
            FooterColumn {
                id: "brand".to_string(),
                kind: FooterColumnKind::Brand,
                content: Some("Since 1999".to_string()),
                ..Default::default()
            },
            FooterColumn {
                id: "links".to_string(),
                kind: FooterColumnKind::Links,
                heading: Some("Company".to_string()),
                links: Some(vec![FooterLink {
                    label: "About".to_string(),
                    href: "/about".to_string(),
                }]),
                ..Default::default()
            },
        ];
        footer.bottom_bar.copyright_text = "Acme Inc.".to_string();

        let html = render_footer(&brand(), &footer, &Theme::default(), 2025).into_string();
        assert!(html.contains(r#"<h3 class="footer-brand">Acme</h3><p>Since 1999</p>"#));
        assert!(html.contains(r#"<h4>Company</h4><ul class="footer-links"><li><a href="/about">About</a></li></ul>"#));
        assert!(html.contains(r#"<p class="copyright">© 2025 Acme Inc.</p>"#));
        assert!(!html.contains("newsletter"));
    }
}
