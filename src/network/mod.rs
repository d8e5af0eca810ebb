//! HTTP networking module
//!
//! Provides the client used to fetch the upstream results page.

mod client;
mod user_agent;

pub use client::HttpClient;
pub use user_agent::generate_user_agent;
