//! Media repository: catalog access behind a domain-shaped interface.

use futures::future::join_all;
use tracing::instrument;
use watchwise_api::watchmode::{
    ListTitlesParams, LocalWatchModeApi, TitleListItem, WatchModeError,
};

use crate::model::{Media, MediaDetails, MediaKind};

/// Repository over the WatchMode catalog.
///
/// Holds no mutable state; every call constructs fresh result values, so a
/// single instance is safely shared by concurrent callers. Generic over the
/// API trait so tests can substitute a mock.
///
/// Listing operations enrich every item with one concurrent details lookup
/// solely to obtain the poster URL, since the list endpoint frequently omits
/// it. A failed lookup degrades that one item's poster to `None`; the batch
/// fails only if the list call itself fails.
///
/// No detached tasks are spawned: dropping a returned future cancels the
/// in-flight requests and releases the transport promptly.
#[derive(Debug)]
pub struct MediaRepository<A> {
    /// Catalog API client.
    api: A,
}

impl<A> MediaRepository<A> {
    /// Creates a repository over the given API client.
    pub const fn new(api: A) -> Self {
        Self { api }
    }
}

impl<A: LocalWatchModeApi + Sync> MediaRepository<A> {
    /// Lists one page of movies, in catalog ranking order.
    ///
    /// # Errors
    ///
    /// Propagates the client's error unchanged when the list call fails.
    /// Per-item enrichment failures do not surface here.
    #[instrument(skip_all)]
    pub async fn list_movies(&self, page: u32) -> Result<Vec<Media>, WatchModeError> {
        self.list(MediaKind::Movie, page).await
    }

    /// Lists one page of TV shows, in catalog ranking order.
    ///
    /// # Errors
    ///
    /// Same contract as [`MediaRepository::list_movies`].
    #[instrument(skip_all)]
    pub async fn list_tv_shows(&self, page: u32) -> Result<Vec<Media>, WatchModeError> {
        self.list(MediaKind::TvShow, page).await
    }

    /// Fetches and maps the details record for a single title.
    ///
    /// A missing overview is substituted with the fixed placeholder; the
    /// media kind is resolved from the wire tag.
    ///
    /// # Errors
    ///
    /// Propagates the client's error unchanged, including
    /// `WatchModeError::NotFound` for unknown ids.
    #[instrument(skip_all)]
    pub async fn details(&self, id: &str) -> Result<MediaDetails, WatchModeError> {
        let response = self.api.title_details(id).await?;
        Ok(MediaDetails::from(response))
    }

    /// Always returns an empty list without calling the catalog.
    ///
    /// The search endpoint exists on the client but is not wired to a
    /// working search feature. Callers must not take the empty result as a
    /// statement about catalog contents.
    ///
    /// # Errors
    ///
    /// Never fails.
    #[instrument(skip_all)]
    pub async fn search(
        &self,
        query: &str,
        kind: Option<MediaKind>,
    ) -> Result<Vec<Media>, WatchModeError> {
        tracing::debug!(query, ?kind, "search is not wired up; returning empty result");
        Ok(Vec::new())
    }

    /// Fetches one list page and enriches every item concurrently.
    async fn list(&self, kind: MediaKind, page: u32) -> Result<Vec<Media>, WatchModeError> {
        let params = ListTitlesParams::new(kind.as_types_param()).page(page);
        let response = self.api.list_titles(&params).await?;

        tracing::debug!(
            kind = ?kind,
            page = response.page,
            count = response.titles.len(),
            "list page received"
        );

        // One details lookup per item, solely for the poster. join_all
        // yields results in input order regardless of completion order.
        let lookups = response
            .titles
            .into_iter()
            .map(|item| self.enrich(item, kind));
        Ok(join_all(lookups).await)
    }

    /// Builds a `Media` from a list item, replacing its poster with the one
    /// from the details record. A failed lookup costs this item its poster
    /// and nothing else.
    async fn enrich(&self, item: TitleListItem, kind: MediaKind) -> Media {
        let poster_url = match self.api.title_details(&item.id).await {
            Ok(details) => details.poster,
            Err(error) => {
                tracing::warn!(id = %item.id, %error, "details lookup failed; dropping poster");
                None
            }
        };

        Media {
            id: item.id,
            title: item.title,
            poster_url,
            year: item.year,
            rating: item.imdb_rating,
            kind,
        }
    }
}
