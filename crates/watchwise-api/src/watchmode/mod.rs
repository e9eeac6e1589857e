//! WatchMode catalog API client module.
//!
//! Handles HTTP requests to the WatchMode `v1` endpoints and retrieves
//! title listings, per-title details, and autocomplete search results.

mod api;
mod client;
mod error;
mod params;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalWatchModeApi, WatchModeApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{WatchModeClient, WatchModeClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::WatchModeError;
pub use params::{ListTitlesParams, SearchTitlesParams, SearchType};
pub use types::{TitleDetailsResponse, TitleListItem, TitleListResponse, WatchModeErrorResponse};
