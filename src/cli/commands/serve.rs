//! Serve command implementation.

use crate::cli::args::SourceArgs;
use marquee::serve::{ServeConfig, serve_site};

pub fn run(source: SourceArgs, port: u16, watch: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Use temp directory for output
    let temp_dir = tempfile::tempdir()?;
    let config = ServeConfig {
        settings: source.settings(),
        output_dir: temp_dir.path().to_path_buf(),
        port,
        watch,
    };

    // temp_dir is kept alive until the server stops
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(serve_site(config))?;

    Ok(())
}
