//! API client library for watchwise.
//!
//! Provides a client for the WatchMode catalog API.

/// WatchMode catalog API client.
pub mod watchmode;
