//! Discord REST API client

mod client;

pub use client::DiscordRestClient;
