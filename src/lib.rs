//! ytsearch-rs: YouTube search results as JSON, without the Data API
//!
//! Scrapes the YouTube results page, pulls the `ytInitialData` JSON blob
//! out of the inline script markup, and flattens the renderer tree into a
//! stable record schema. Extraction is best-effort: if the page layout
//! drifts, the service answers with an empty result set rather than an
//! error.

pub mod config;
pub mod extract;
pub mod network;
pub mod results;
pub mod web;

pub use config::Settings;
pub use extract::extract_videos;
pub use results::{ResultSet, VideoRecord};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for the upstream request in seconds
pub const DEFAULT_TIMEOUT: u64 = 5;
