//! Data models used throughout the application
//!
//! This module contains the network identifiers and the serialization logic
//! for the gas oracle envelope and the API responses.

// Supported networks and their endpoint records
pub mod network;

// Gas oracle wire format and API response bodies
pub mod oracle;
