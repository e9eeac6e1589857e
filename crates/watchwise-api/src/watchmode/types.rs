//! WatchMode API response types.

use serde::Deserialize;

/// Serde default for 1-based page fields.
const fn default_page() -> u32 {
    1
}

// --- List titles ---

/// Response envelope from the `list-titles` and `autocomplete-search`
/// endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleListResponse {
    /// Titles on this page, in catalog ranking order.
    #[serde(default)]
    pub titles: Vec<TitleListItem>,
    /// Current page number (1-based).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Total number of pages. Decoded but not consulted by any caller.
    #[serde(default = "default_page")]
    pub total_pages: u32,
}

/// A single title in a listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleListItem {
    /// Catalog title id.
    pub id: String,
    /// Title name.
    pub title: String,
    /// Poster image URL. Often absent on listing responses.
    pub poster: Option<String>,
    /// Release year.
    pub year: Option<u32>,
    /// IMDb rating (0-10).
    pub imdb_rating: Option<f64>,
    /// Catalog media kind tag (e.g. `"movie"`, `"tv_series"`).
    pub media_type: String,
}

// --- Title details ---

/// Response from the `title/{id}/details/` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleDetailsResponse {
    /// Catalog title id.
    pub id: String,
    /// Title name.
    pub title: String,
    /// Long-form overview text.
    pub plot_overview: Option<String>,
    /// Poster image URL.
    pub poster: Option<String>,
    /// Release year.
    pub year: Option<u32>,
    /// IMDb rating (0-10).
    pub imdb_rating: Option<f64>,
    /// Release date in the catalog's own format, not necessarily ISO-8601.
    pub release_date: Option<String>,
    /// Genre names, in catalog order.
    #[serde(default)]
    pub genre_names: Vec<String>,
    /// Catalog media kind tag.
    pub media_type: String,
}

// --- Errors ---

/// Error envelope returned by the catalog on non-success responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::module_name_repetitions)]
pub struct WatchModeErrorResponse {
    /// Always `false` on error responses.
    #[serde(default)]
    pub success: bool,
    /// Catalog status code.
    #[serde(default)]
    pub status_code: u16,
    /// Human-readable message.
    pub status_message: String,
}
