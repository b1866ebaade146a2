//! Shared argument types for CLI commands.

use clap::Args;
use marquee::loader::LoaderSettings;
use std::path::PathBuf;

/// Where to load the site configuration from.
///
/// A local file wins over a static URL, which wins over the API.
#[derive(Args, Clone, Debug, Default)]
pub struct SourceArgs {
    /// Base URL of the configuration API
    #[arg(long, env = "MARQUEE_API_BASE")]
    pub api_base: Option<String>,

    /// Template to request from the configuration API
    #[arg(long, env = "MARQUEE_TEMPLATE_ID")]
    pub template_id: Option<String>,

    /// Human-readable template name, only used in log lines
    #[arg(long, env = "MARQUEE_TEMPLATE_NAME")]
    pub template_name: Option<String>,

    /// Local JSON or YAML configuration file
    #[arg(long, env = "MARQUEE_CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// URL of a static JSON configuration document
    #[arg(long, env = "MARQUEE_CONFIG_URL")]
    pub config_url: Option<String>,
}

impl SourceArgs {
    pub fn settings(&self) -> LoaderSettings {
        LoaderSettings {
            api_base: self.api_base.clone(),
            template_id: self.template_id.clone(),
            template_name: self.template_name.clone(),
            config_file: self.config_file.clone(),
            config_url: self.config_url.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum InspectFormat {
    /// Normalized sections as JSON
    #[default]
    Json,
    /// One line per section
    Summary,
}
