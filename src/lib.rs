//! Configuration-driven marketing site generator.
//!
//! A site description is fetched ([`loader`]), repaired into the strict
//! [`schema`] ([`normalize`]), queried per page ([`query`]) and rendered to
//! static HTML ([`export`]).

pub mod encode;
pub mod export;
pub mod loader;
pub mod normalize;
pub mod query;
pub mod schema;
#[cfg(feature = "serve")]
pub mod serve;
