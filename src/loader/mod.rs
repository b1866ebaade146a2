//! Configuration loading.
//!
//! A load goes through three stages:
//! 1. [`ConfigSource::fetch_raw`]: bytes from the API, a static URL or disk.
//! 2. [`parse_payload`]: strip the transport envelope, check for `pages`,
//!    then [`normalize`](crate::normalize::normalize).
//! 3. [`ConfigLoader`]: run the above once on a tokio task and publish the
//!    outcome as a [`LoadState`].

mod error;
mod source;

pub use error::ConfigError;
pub use source::{ConfigSource, LoaderSettings, unwrap_envelope};

use crate::normalize::normalize;
use crate::schema::{Brand, Navigation, SiteConfiguration, Theme};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Turn a fetched payload into a configuration.
pub fn parse_payload(payload: Value) -> Result<SiteConfiguration, ConfigError> {
    let config = unwrap_envelope(payload)?;
    if !config.get("pages").is_some_and(Value::is_array) {
        return Err(ConfigError::MissingPages);
    }
    Ok(normalize(config)?)
}

/// Fetch and normalize a configuration once.
pub async fn load(
    source: &ConfigSource,
    client: &Client,
) -> Result<SiteConfiguration, ConfigError> {
    info!(%source, "Loading site configuration");
    let payload = source.fetch_raw(client).await?;
    let config = parse_payload(payload)?;
    info!(
        %source,
        pages = config.pages.len(),
        "Site configuration loaded"
    );
    Ok(config)
}

/// Observable outcome of a single load.
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Ready(Arc<SiteConfiguration>),
    Failed(String),
}

impl LoadState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }

    pub fn config(&self) -> Option<&Arc<SiteConfiguration>> {
        match self {
            LoadState::Ready(config) => Some(config),
            _ => None,
        }
    }

    /// The configuration, or the message to show in its place. `Loading`
    /// counts as a failure.
    pub fn into_result(self) -> Result<Arc<SiteConfiguration>, String> {
        match self {
            LoadState::Ready(config) => Ok(config),
            LoadState::Failed(message) => Err(message),
            LoadState::Loading => Err(LOADER_STOPPED.to_string()),
        }
    }
}

const LOADER_STOPPED: &str = "Configuration loader stopped before finishing";

/// Resolve `settings` and run one load to completion.
///
/// Missing or invalid settings fail without any request being made.
pub async fn load_settings(settings: &LoaderSettings, client: &Client) -> LoadState {
    let source = match settings.resolve() {
        Ok(source) => source,
        Err(e) => {
            error!(error = %e, "Cannot resolve configuration source");
            return LoadState::Failed(e.to_string());
        }
    };
    if let Some(template) = settings.template_name.as_deref() {
        info!(template, %source, "Resolved configuration source");
    }
    ConfigLoader::spawn(source, client.clone()).settled().await
}

/// Performs exactly one load on a background task.
///
/// Reloading means spawning a new loader; dropping a loader aborts its
/// task, and a result that arrives after every receiver is gone is
/// discarded.
pub struct ConfigLoader {
    state: watch::Receiver<LoadState>,
    task: JoinHandle<()>,
}

impl ConfigLoader {
    /// Must be called from within a tokio runtime.
    pub fn spawn(source: ConfigSource, client: Client) -> Self {
        let (tx, rx) = watch::channel(LoadState::Loading);
        let task = tokio::spawn(async move {
            let state = match load(&source, &client).await {
                Ok(config) => LoadState::Ready(Arc::new(config)),
                Err(e) => {
                    error!(%source, error = %e, "Failed to load site configuration");
                    LoadState::Failed(e.to_string())
                }
            };
            if tx.send(state).is_err() {
                debug!(%source, "Loader dropped before completion, discarding result");
            }
        });
        Self { state: rx, task }
    }

    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Wait until the load is either ready or failed.
    pub async fn settled(&self) -> LoadState {
        let mut rx = self.state.clone();
        let settled = rx
            .wait_for(LoadState::is_settled)
            .await
            .map(|state| state.clone());
        match settled {
            Ok(state) => state,
            Err(_) => LoadState::Failed(LOADER_STOPPED.to_string()),
        }
    }

    pub fn config(&self) -> Option<Arc<SiteConfiguration>> {
        self.state.borrow().config().cloned()
    }

    /// `None` until the configuration is ready.
    pub fn theme(&self) -> Option<Theme> {
        self.config().map(|config| config.theme().clone())
    }

    pub fn brand(&self) -> Option<Brand> {
        self.config().map(|config| config.brand().clone())
    }

    pub fn navigation(&self) -> Option<Navigation> {
        self.config().map(|config| config.navigation().clone())
    }
}

impl Drop for ConfigLoader {
    fn drop(&mut self) {
        self.task.abort();
    }
}
