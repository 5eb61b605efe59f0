//! Tools for moving a follow list between Mastodon and Bluesky through the Bridgy Fed bridge.

pub mod adapters;
pub mod engine;
pub mod error;
pub mod models;
