//! HTTP server with optional live reload for development.
//!
//! The site is rendered into `output_dir` and served from there with
//! axum's `ServeDir`. With `watch` set and a configuration file as the
//! source, the file is watched and every change reloads the
//! configuration, re-renders the site (or the error view) and refreshes
//! connected browsers.
//!
//! # Example
//!
//! ```ignore
//! use marquee::serve::{ServeConfig, serve_site};
//!
//! let config = ServeConfig {
//!     settings,
//!     output_dir: PathBuf::from("./dist"),
//!     port: 3000,
//!     watch: true,
//! };
//!
//! serve_site(config).await?;
//! ```

use crate::export::{ExportError, StatusView, render_site, render_status_page};
use crate::loader::{ConfigSource, LoaderSettings, load_settings};
use axum::Router;
use notify_debouncer_mini::notify::RecursiveMode;
use notify_debouncer_mini::{DebouncedEventKind, new_debouncer};
use reqwest::Client;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tower_http::services::ServeDir;
use tower_livereload::LiveReloadLayer;
use tracing::{error, warn};

/// Configuration for serving a generated site.
pub struct ServeConfig {
    pub settings: LoaderSettings,
    pub output_dir: PathBuf,
    pub port: u16,
    pub watch: bool,
}

/// Load the configuration and render it into a clean `output_dir`.
///
/// A failed load renders the error view instead. Returns whether the
/// site itself was rendered.
pub async fn render_once(
    settings: &LoaderSettings,
    output_dir: &Path,
    client: &Client,
) -> Result<bool, ExportError> {
    let state = load_settings(settings, client).await;
    if output_dir.exists() {
        fs::remove_dir_all(output_dir)?;
    }

    match state.into_result() {
        Ok(config) => {
            render_site(&config, output_dir)?;
            Ok(true)
        }
        Err(message) => {
            render_status_page(output_dir, &StatusView::Error(message))?;
            Ok(false)
        }
    }
}

/// Starts the HTTP server to serve the generated site.
///
/// Live reload is only enabled when `watch` is set and the configuration
/// comes from a local file.
pub async fn serve_site(config: ServeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("0.0.0.0:{}", config.port);
    let watched = if config.watch {
        watched_file(&config.settings)
    } else {
        None
    };

    match watched {
        Some(file) => serve_with_watch(config, file, &addr).await,
        None => {
            if !render_once(&config.settings, &config.output_dir, &Client::new()).await? {
                eprintln!("Configuration failed to load, serving the error page");
            }
            serve_static(&config.output_dir, config.port, &addr).await
        }
    }
}

fn watched_file(settings: &LoaderSettings) -> Option<PathBuf> {
    match settings.resolve() {
        Ok(ConfigSource::File(path)) => Some(path),
        Ok(source) => {
            warn!(%source, "Only configuration files can be watched, ignoring --watch");
            None
        }
        // Reported by the load itself.
        Err(_) => None,
    }
}

/// Starts a simple static file server without live reload.
async fn serve_static(
    output_dir: &Path,
    port: u16,
    addr: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = Router::new().fallback_service(ServeDir::new(output_dir));

    println!("Serving site at http://localhost:{}", port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Starts the server with file watching and live reload enabled.
///
/// The loading view is served until the first render finishes. Renders
/// run one at a time on a single task fed by the watcher.
async fn serve_with_watch(
    config: ServeConfig,
    file: PathBuf,
    addr: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let ServeConfig {
        settings,
        output_dir,
        port,
        watch: _,
    } = config;

    render_status_page(&output_dir, &StatusView::Loading)?;

    let livereload = LiveReloadLayer::new();
    let reloader = livereload.reloader();
    let app = Router::new()
        .fallback_service(ServeDir::new(&output_dir))
        .layer(livereload);

    let (tx, mut rx) = mpsc::channel::<()>(1);
    spawn_watcher(file, tx.clone());

    let client = Client::new();
    tokio::spawn(async move {
        while rx.recv().await.is_some() {
            match render_once(&settings, &output_dir, &client).await {
                Ok(true) => {
                    println!("Regenerated. Reloading browser...");
                    reloader.reload();
                }
                Ok(false) => {
                    eprintln!("Configuration failed to load, serving the error page");
                    reloader.reload();
                }
                Err(e) => eprintln!("Regeneration failed: {}", e),
            }
        }
    });

    // First render
    tx.send(()).await?;

    println!(
        "Serving site at http://localhost:{} (with live reload)",
        port
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Watch the directory holding `file` and signal `tx` when `file` changes.
fn spawn_watcher(file: PathBuf, tx: mpsc::Sender<()>) {
    std::thread::spawn(move || {
        let (notify_tx, notify_rx) = std::sync::mpsc::channel();
        let mut debouncer = match new_debouncer(Duration::from_millis(500), notify_tx) {
            Ok(debouncer) => debouncer,
            Err(e) => {
                error!(error = %e, "Failed to create file watcher");
                return;
            }
        };

        let dir = file
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        if let Err(e) = debouncer.watcher().watch(dir, RecursiveMode::NonRecursive) {
            error!(error = %e, dir = %dir.display(), "Failed to watch configuration directory");
            return;
        }

        println!("Watching for changes in: {}", file.display());
        let name = file.file_name();

        loop {
            match notify_rx.recv() {
                Ok(Ok(events)) => {
                    let changed = events.iter().any(|e| {
                        matches!(e.kind, DebouncedEventKind::Any) && e.path.file_name() == name
                    });
                    if changed {
                        println!("\nConfiguration change detected, regenerating...");
                        if tx.blocking_send(()).is_err() {
                            break;
                        }
                    }
                }
                Ok(Err(e)) => eprintln!("Watch error: {:?}", e),
                Err(_) => break,
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_render_once_writes_site() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"pages": [{{"id": "home", "path": "/", "title": "Home", "sections": []}}]}}"#
        )
        .unwrap();
        let out = tempfile::tempdir().unwrap();
        let settings = LoaderSettings {
            config_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        let rendered = render_once(&settings, out.path(), &Client::new()).await.unwrap();
        assert!(rendered);
        let html = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(html.contains("<title>Home</title>"));
    }

    #[tokio::test]
    async fn test_render_once_replaces_site_with_error_view() {
        let out = tempfile::tempdir().unwrap();
        fs::create_dir_all(out.path().join("about")).unwrap();
        fs::write(out.path().join("about/index.html"), "stale").unwrap();

        let rendered = render_once(&LoaderSettings::default(), out.path(), &Client::new())
            .await
            .unwrap();
        assert!(!rendered);
        assert!(!out.path().join("about/index.html").exists());
        let html = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(html.contains("Configuration Error"));
        assert!(html.contains("MARQUEE_API_BASE"));
    }

    #[test]
    fn test_only_files_are_watched() {
        let settings = LoaderSettings {
            config_url: Some("http://localhost/config.json".to_string()),
            ..Default::default()
        };
        assert_eq!(watched_file(&settings), None);

        let settings = LoaderSettings {
            config_file: Some("site.json".into()),
            ..settings
        };
        assert_eq!(watched_file(&settings), Some(PathBuf::from("site.json")));
    }
}
