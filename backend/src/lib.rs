//! Bucket listing demo service

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Bucket store abstraction and its S3 implementation
pub mod bucket;

mod routes;

/// HTTP server setup
pub mod server;

/// Shared types: environment configuration and API errors
pub mod types;
