//! API client library for chardex.
//!
//! Provides a client for the Disney character database API.

/// Disney character database API client.
pub mod disney;
