pub mod build;
pub mod inspect;
pub mod normalize;
#[cfg(feature = "serve")]
pub mod serve;

use super::args::SourceArgs;
use marquee::loader::{LoadState, load_settings};
use reqwest::Client;

/// Run one configuration load on a fresh runtime.
fn load_blocking(source: &SourceArgs) -> std::io::Result<LoadState> {
    let settings = source.settings();
    let rt = tokio::runtime::Runtime::new()?;
    Ok(rt.block_on(async { load_settings(&settings, &Client::new()).await }))
}
