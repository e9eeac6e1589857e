//! Domain entities for the media catalog.

use watchwise_api::watchmode::TitleDetailsResponse;

/// Placeholder overview text used when the catalog provides none.
pub const DEFAULT_OVERVIEW: &str = "No overview available";

/// Closed media kind classification.
///
/// Never the raw wire string: every tag is resolved into exactly one of the
/// two variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// A feature film.
    Movie,
    /// An episodic series.
    TvShow,
}

impl MediaKind {
    /// Resolves a catalog media kind tag.
    ///
    /// Total over arbitrary input: unrecognized tags resolve to `Movie`.
    #[must_use]
    pub fn from_wire(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "tv_series" => Self::TvShow,
            _ => Self::Movie,
        }
    }

    /// Wire value for the catalog's `types` filter parameter.
    #[must_use]
    pub const fn as_types_param(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::TvShow => "tv_series",
        }
    }
}

/// A catalog title as shown in listings.
///
/// Constructed fresh per response; never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    /// Catalog title id.
    pub id: String,
    /// Title name.
    pub title: String,
    /// Poster image URL.
    pub poster_url: Option<String>,
    /// Release year.
    pub year: Option<u32>,
    /// IMDb rating (0-10).
    pub rating: Option<f64>,
    /// Resolved media kind.
    pub kind: MediaKind,
}

/// The full details record for a single title.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaDetails {
    /// Catalog title id.
    pub id: String,
    /// Title name.
    pub title: String,
    /// Overview text; [`DEFAULT_OVERVIEW`] when the catalog has none.
    pub overview: String,
    /// Poster image URL.
    pub poster_url: Option<String>,
    /// Release year.
    pub year: Option<u32>,
    /// IMDb rating (0-10).
    pub rating: Option<f64>,
    /// Release date in the catalog's own format.
    pub release_date: Option<String>,
    /// Genre names, in catalog order. Possibly empty, never absent.
    pub genres: Vec<String>,
    /// Resolved media kind.
    pub kind: MediaKind,
}

impl From<TitleDetailsResponse> for MediaDetails {
    fn from(response: TitleDetailsResponse) -> Self {
        let kind = MediaKind::from_wire(&response.media_type);
        Self {
            id: response.id,
            title: response.title,
            overview: response
                .plot_overview
                .unwrap_or_else(|| String::from(DEFAULT_OVERVIEW)),
            poster_url: response.poster,
            year: response.year,
            rating: response.imdb_rating,
            release_date: response.release_date,
            genres: response.genre_names,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details_response(media_type: &str, overview: Option<&str>) -> TitleDetailsResponse {
        TitleDetailsResponse {
            id: String::from("130381"),
            title: String::from("Interstellar"),
            plot_overview: overview.map(String::from),
            poster: Some(String::from("https://posters.test/130381.jpg")),
            year: Some(2014),
            imdb_rating: Some(8.7),
            release_date: Some(String::from("2014-11-07")),
            genre_names: vec![String::from("Adventure"), String::from("Drama")],
            media_type: String::from(media_type),
        }
    }

    #[test]
    fn test_kind_from_known_tags() {
        // Assert
        assert_eq!(MediaKind::from_wire("movie"), MediaKind::Movie);
        assert_eq!(MediaKind::from_wire("tv_series"), MediaKind::TvShow);
    }

    #[test]
    fn test_kind_resolution_is_case_insensitive() {
        // Assert
        assert_eq!(MediaKind::from_wire("TV_Series"), MediaKind::TvShow);
        assert_eq!(MediaKind::from_wire("MOVIE"), MediaKind::Movie);
    }

    #[test]
    fn test_unknown_kind_defaults_to_movie() {
        // Assert
        assert_eq!(MediaKind::from_wire("documentary"), MediaKind::Movie);
        assert_eq!(MediaKind::from_wire(""), MediaKind::Movie);
    }

    #[test]
    fn test_types_param_round_trip() {
        // Assert
        assert_eq!(
            MediaKind::from_wire(MediaKind::Movie.as_types_param()),
            MediaKind::Movie
        );
        assert_eq!(
            MediaKind::from_wire(MediaKind::TvShow.as_types_param()),
            MediaKind::TvShow
        );
    }

    #[test]
    fn test_details_mapping_keeps_fields() {
        // Arrange
        let response = details_response("tv_series", Some("A plot."));

        // Act
        let details = MediaDetails::from(response);

        // Assert
        assert_eq!(details.id, "130381");
        assert_eq!(details.overview, "A plot.");
        assert_eq!(details.genres.len(), 2);
        assert_eq!(details.kind, MediaKind::TvShow);
        assert_eq!(details.release_date.as_deref(), Some("2014-11-07"));
    }

    #[test]
    fn test_missing_overview_gets_placeholder() {
        // Arrange
        let response = details_response("movie", None);

        // Act
        let details = MediaDetails::from(response);

        // Assert
        assert_eq!(details.overview, DEFAULT_OVERVIEW);
    }
}
