use crate::normalize::ShapeError;
use thiserror::Error;

/// Load-level failures. Any of these leaves the site without a
/// configuration and is surfaced to the user as a single message.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Missing required environment variables: MARQUEE_API_BASE and MARQUEE_TEMPLATE_ID must both be set"
    )]
    MissingEnvironment,

    #[error("Invalid configuration URL `{url}`: {source}")]
    InvalidApiBase {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to fetch configuration: {status} {body}")]
    Http { status: u16, body: String },

    #[error("Invalid JSON in configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML in configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "Configuration missing pages array. Please ensure the config has a valid pages structure."
    )]
    MissingPages,

    #[error(transparent)]
    Shape(#[from] ShapeError),
}
