/// Template rendering using minijinja
use super::types::PageContext;
use minijinja::Environment;

/// Document shell around header, sections and footer
const BASE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="{{ site.language or "en" }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ page.title }}{% if page.title and site.title %} | {% endif %}{{ site.title }}</title>
    {%- set description = page.description or site.description %}
    {%- if description %}
    <meta name="description" content="{{ description }}">
    {%- endif %}
    {%- if site.keywords %}
    <meta name="keywords" content="{{ site.keywords | join(", ") }}">
    {%- endif %}
    {%- if site.author %}
    <meta name="author" content="{{ site.author }}">
    {%- endif %}
    {%- if site.og_image %}
    <meta property="og:image" content="{{ site.og_image }}">
    {%- endif %}
    {%- if site.favicon %}
    <link rel="icon" href="{{ site.favicon }}">
    {%- endif %}
    <style>{{ site.stylesheet | safe }}</style>
    <style>
{{ site.theme_css | safe }}    </style>
</head>
<body>
    {{ page.header | safe }}
    <main>
        {{ page.content | safe }}
    </main>
    {{ page.footer | safe }}
</body>
</html>
"#;

/// Renders a page using the default template
pub fn render_page(context: &PageContext) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("base.html", BASE_TEMPLATE)?;

    let template = env.get_template("base.html")?;
    template.render(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::types::{PageData, SiteContext};
    use insta::assert_snapshot;

    #[test]
    fn test_render_basic_page() {
        let context = PageContext {
            site: SiteContext {
                title: "Acme".to_string(),
                description: "We build things".to_string(),
                language: "fr".to_string(),
                keywords: vec!["consulting".to_string(), "design".to_string()],
                theme_css: ":root {\n  --primary-color: #ff0000;\n}\n".to_string(),
                ..Default::default()
            },
            page: PageData {
                title: "Home".to_string(),
                header: "<header>h</header>".to_string(),
                content: "<section>s</section>".to_string(),
                footer: "<footer>f</footer>".to_string(),
                path: "/".to_string(),
                ..Default::default()
            },
        };

        let html = render_page(&context).unwrap();
        assert_snapshot!(html, @r#"
        <!DOCTYPE html>
        <html lang="fr">
        <head>
            <meta charset="UTF-8">
            <meta name="viewport" content="width=device-width, initial-scale=1.0">
            <title>Home | Acme</title>
            <meta name="description" content="We build things">
            <meta name="keywords" content="consulting, design">
            <style></style>
            <style>
        :root {
          --primary-color: #ff0000;
        }
            </style>
        </head>
        <body>
            <header>h</header>
            <main>
                <section>s</section>
            </main>
            <footer>f</footer>
        </body>
        </html>
        "#);
    }

    #[test]
    fn test_title_without_page_title() {
        let context = PageContext {
            site: SiteContext {
                title: "Acme".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let html = render_page(&context).unwrap();
        assert!(html.contains("<title>Acme</title>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(!html.contains("og:image"));
    }

    #[test]
    fn test_title_without_site_title() {
        let context = PageContext {
            page: PageData {
                title: "Home".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let html = render_page(&context).unwrap();
        assert!(html.contains("<title>Home</title>"));
    }

    #[test]
    fn test_metadata_is_escaped() {
        let context = PageContext {
            site: SiteContext {
                title: "A & B".to_string(),
                author: r#"Jane "JD" Doe"#.to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let html = render_page(&context).unwrap();
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("Jane &quot;JD&quot; Doe"));
    }
}
