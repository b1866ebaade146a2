use maud::{Markup, html};

/// Full-page views shown instead of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusView {
    Loading,
    Error(String),
}

impl StatusView {
    pub fn title(&self) -> &'static str {
        match self {
            StatusView::Loading => "Loading",
            StatusView::Error(_) => "Configuration Error",
        }
    }

    pub fn render(&self) -> Markup {
        match self {
            StatusView::Loading => render_loading(),
            StatusView::Error(message) => render_error(message),
        }
    }
}

pub fn render_loading() -> Markup {
    html! {
        div .status-page {
            div .status-card {
                div .spinner role="status" {}
                p .status-text { "Loading configuration..." }
            }
        }
    }
}

pub fn render_error(message: &str) -> Markup {
    html! {
        div .status-page {
            div .status-card.status-error {
                div .status-icon { "!" }
                h1 { "Configuration Error" }
                p .status-text {
                    "Unable to load the site configuration. Please check that the configuration source is properly configured and accessible."
                }
                pre .status-message { (message) }
                button .btn.btn-primary type="button" onclick="window.location.reload()" {
                    "Retry"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_render_loading() {
        assert_snapshot!(render_loading().into_string(), @r#"<div class="status-page"><div class="status-card"><div class="spinner" role="status"></div><p class="status-text">Loading configuration...</p></div></div>"#);
    }

    #[test]
    fn test_render_error_escapes_message() {
        let html = StatusView::Error("Failed to fetch configuration: 500 <b>server error</b>".to_string())
            .render()
            .into_string();
        assert!(html.contains("<h1>Configuration Error</h1>"));
        assert!(html.contains("500 &lt;b&gt;server error&lt;/b&gt;"));
        assert!(html.contains(r#"onclick="window.location.reload()">Retry</button>"#));
    }
}
