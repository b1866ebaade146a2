//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use args::{InspectFormat, SourceArgs};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Render marketing sites from a JSON site description", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the configuration and render every enabled page
    Build {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory for the generated site
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,
    },

    /// Load the configuration and print the enabled sections of a page
    Inspect {
        #[command(flatten)]
        source: SourceArgs,

        /// Page id or path
        #[arg(short, long, default_value = "/")]
        page: String,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: InspectFormat,
    },

    /// Normalize a raw configuration file and print the result as JSON
    Normalize {
        /// JSON or YAML payload, enveloped or bare
        file: PathBuf,

        /// Output file to write the normalized configuration to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve the generated site with optional live reload
    #[cfg(feature = "serve")]
    Serve {
        #[command(flatten)]
        source: SourceArgs,

        /// Port to serve on
        #[arg(long, default_value = "3000")]
        port: u16,

        /// Watch the configuration file and regenerate on changes
        #[arg(short, long)]
        watch: bool,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { source, output } => commands::build::run(source, output),

        Commands::Inspect {
            source,
            page,
            format,
        } => commands::inspect::run(source, page, format),

        Commands::Normalize { file, output } => commands::normalize::run(file, output),

        #[cfg(feature = "serve")]
        Commands::Serve {
            source,
            port,
            watch,
        } => commands::serve::run(source, port, watch),
    }
}
