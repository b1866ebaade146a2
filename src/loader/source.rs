//! Where a configuration comes from and how its bytes are fetched.

use super::error::ConfigError;
use crate::encode::encode_uri_component;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Raw loader inputs, usually read from the environment by the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderSettings {
    pub api_base: Option<String>,
    pub template_id: Option<String>,
    /// Only used in log lines.
    pub template_name: Option<String>,
    pub config_file: Option<PathBuf>,
    pub config_url: Option<String>,
}

/// A resolved configuration source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `POST <api_base>/?template_id=<id>`
    Api { api_base: Url, template_id: String },
    /// `GET <url>` of a static JSON document.
    Static(Url),
    /// JSON or YAML file on disk.
    File(PathBuf),
}

impl LoaderSettings {
    /// Pick a source: a local file first, then a static URL, then the API.
    pub fn resolve(&self) -> Result<ConfigSource, ConfigError> {
        if let Some(path) = non_empty(self.config_file.as_deref()) {
            return Ok(ConfigSource::File(path.to_path_buf()));
        }
        if let Some(url) = non_empty(self.config_url.as_deref()) {
            return Ok(ConfigSource::Static(parse_url(url)?));
        }

        match (
            non_empty(self.api_base.as_deref()),
            non_empty(self.template_id.as_deref()),
        ) {
            (Some(api_base), Some(template_id)) => Ok(ConfigSource::Api {
                api_base: parse_url(api_base)?,
                template_id: template_id.to_string(),
            }),
            _ => Err(ConfigError::MissingEnvironment),
        }
    }
}

fn non_empty<T: AsRef<std::ffi::OsStr> + ?Sized>(value: Option<&T>) -> Option<&T> {
    value.filter(|v| !v.as_ref().is_empty())
}

fn parse_url(url: &str) -> Result<Url, ConfigError> {
    Url::parse(url).map_err(|source| ConfigError::InvalidApiBase {
        url: url.to_string(),
        source,
    })
}

impl ConfigSource {
    /// The request URL for HTTP sources.
    pub fn request_url(&self) -> Option<String> {
        match self {
            ConfigSource::Api {
                api_base,
                template_id,
            } => Some(format!(
                "{}/?template_id={}",
                api_base.as_str().trim_end_matches('/'),
                encode_uri_component(template_id)
            )),
            ConfigSource::Static(url) => Some(url.to_string()),
            ConfigSource::File(_) => None,
        }
    }

    /// Fetch and parse the payload, without unwrapping or normalizing it.
    pub async fn fetch_raw(&self, client: &Client) -> Result<Value, ConfigError> {
        match self {
            ConfigSource::Api { .. } | ConfigSource::Static(_) => {
                let url = self.request_url().unwrap_or_default();
                let request = match self {
                    ConfigSource::Api { .. } => client.post(&url).body(""),
                    _ => client.get(&url),
                };

                let response =
                    request.header(ACCEPT, "application/json").send().await?;
                let status = response.status();
                if !status.is_success() {
                    let body = response.text().await.unwrap_or_default();
                    return Err(ConfigError::Http {
                        status: status.as_u16(),
                        body,
                    });
                }

                let text = response.text().await?;
                Ok(serde_json::from_str(&text)?)
            }
            ConfigSource::File(path) => read_file(path),
        }
    }
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Api { template_id, .. } => {
                write!(f, "template {}", template_id)
            }
            ConfigSource::Static(url) => write!(f, "{}", url),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn read_file(path: &Path) -> Result<Value, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    let is_yaml = path
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml");
    if is_yaml {
        Ok(serde_yaml::from_str(&text)?)
    } else {
        Ok(serde_json::from_str(&text)?)
    }
}

/// Transport wrapper some backends put around the configuration.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Envelope {
    Wrapped {
        contents: Value,
        /// `id`, `url` and anything else next to `contents`.
        #[serde(flatten)]
        rest: Map<String, Value>,
    },
    Bare(Value),
}

/// Strip the `{id, url, contents}` wrapper when there is one.
///
/// A `null` `contents` is not a wrapper: the payload is used as it is.
pub fn unwrap_envelope(payload: Value) -> Result<Value, ConfigError> {
    let envelope: Envelope = serde_json::from_value(payload)?;
    Ok(match envelope {
        Envelope::Wrapped { contents, rest } if !contents.is_null() => {
            debug!(
                id = ?rest.get("id"),
                url = ?rest.get("url"),
                "Unwrapped configuration envelope"
            );
            contents
        }
        Envelope::Wrapped { rest, .. } => Value::Object(rest),
        Envelope::Bare(payload) => payload,
    })
}
