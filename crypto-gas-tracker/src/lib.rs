// Export modules for the binary and the integration tests
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod oracle;
