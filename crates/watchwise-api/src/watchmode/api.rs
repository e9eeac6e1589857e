//! `WatchModeApi` trait definition.
#![allow(clippy::future_not_send)]

use super::error::WatchModeError;
use super::params::{ListTitlesParams, SearchTitlesParams};
use super::types::{TitleDetailsResponse, TitleListResponse};

/// WatchMode API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(WatchModeApi: Send)]
pub trait LocalWatchModeApi {
    /// Lists titles of one media kind, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns `WatchModeError::Transport` on connectivity failure,
    /// `WatchModeError::Api` on a non-success response, and
    /// `WatchModeError::Decode` when the payload does not match the wire
    /// shape.
    async fn list_titles(
        &self,
        params: &ListTitlesParams,
    ) -> Result<TitleListResponse, WatchModeError>;

    /// Fetches the full details record for a single title.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`LocalWatchModeApi::list_titles`], plus
    /// `WatchModeError::NotFound` when the catalog has no such id.
    async fn title_details(&self, id: &str) -> Result<TitleDetailsResponse, WatchModeError>;

    /// Autocomplete search over the catalog.
    ///
    /// Exposed as an extension point; no repository caller uses it.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`LocalWatchModeApi::list_titles`].
    async fn search_titles(
        &self,
        params: &SearchTitlesParams,
    ) -> Result<TitleListResponse, WatchModeError>;
}
