//! WatchMode API request parameter types.

/// Default number of titles per page.
const DEFAULT_LIMIT: u32 = 20;

/// Request parameters for `list-titles`.
#[derive(Debug, Clone)]
pub struct ListTitlesParams {
    /// Media kind filter (`types` parameter, e.g. `"movie"`, `"tv_series"`).
    pub types: String,
    /// Page number (1-based).
    pub page: u32,
    /// Titles per page.
    pub limit: u32,
}

impl ListTitlesParams {
    /// Creates parameters for the given kind filter (page 1, limit 20).
    pub fn new(types: impl Into<String>) -> Self {
        Self {
            types: types.into(),
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the per-page limit.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// What the autocomplete search should match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Match title names only.
    Titles,
    /// Match people only.
    People,
    /// Match both titles and people.
    Both,
}

impl SearchType {
    /// Wire value for the `search_type` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Titles => "titles",
            Self::People => "people",
            Self::Both => "both",
        }
    }
}

/// Request parameters for `autocomplete-search`.
#[derive(Debug, Clone)]
pub struct SearchTitlesParams {
    /// Search text (`search_value` parameter).
    pub search_value: String,
    /// Search target.
    pub search_type: SearchType,
    /// Optional media kind filter (`types` parameter).
    pub types: Option<String>,
    /// Page number (1-based).
    pub page: u32,
    /// Results per page.
    pub limit: u32,
}

impl SearchTitlesParams {
    /// Creates title-search parameters for the given query (page 1, limit 20).
    pub fn new(search_value: impl Into<String>) -> Self {
        Self {
            search_value: search_value.into(),
            search_type: SearchType::Titles,
            types: None,
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Sets the search target.
    #[must_use]
    pub const fn search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = search_type;
        self
    }

    /// Restricts results to the given media kind filter.
    #[must_use]
    pub fn types(mut self, types: impl Into<String>) -> Self {
        self.types = Some(types.into());
        self
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the per-page limit.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_defaults() {
        // Arrange & Act
        let params = ListTitlesParams::new("movie");

        // Assert
        assert_eq!(params.types, "movie");
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 20);
    }

    #[test]
    fn test_list_params_builder_overrides() {
        // Arrange & Act
        let params = ListTitlesParams::new("tv_series").page(3).limit(50);

        // Assert
        assert_eq!(params.page, 3);
        assert_eq!(params.limit, 50);
    }

    #[test]
    fn test_search_type_wire_values() {
        // Assert
        assert_eq!(SearchType::Titles.as_str(), "titles");
        assert_eq!(SearchType::People.as_str(), "people");
        assert_eq!(SearchType::Both.as_str(), "both");
    }

    #[test]
    fn test_search_params_defaults() {
        // Arrange & Act
        let params = SearchTitlesParams::new("dune");

        // Assert
        assert_eq!(params.search_value, "dune");
        assert_eq!(params.search_type, SearchType::Titles);
        assert!(params.types.is_none());
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 20);
    }
}
