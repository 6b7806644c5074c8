//! Unit tests for search error types

#[cfg(test)]
mod tests {
    use crate::BlogError;
    use crate::search::ActiveFilter;
    use crate::search::error::SearchError;
    use std::error::Error;

    #[test]
    fn test_conflicting_filters() {
        let error = SearchError::ConflictingFilters;
        assert_eq!(
            error.to_string(),
            "A text query and a tag filter cannot be combined"
        );
    }

    #[test]
    fn test_conflicting_request_is_rejected() {
        let result = ActiveFilter::from_request(Some("go"), Some("css"));
        assert_eq!(result, Err(SearchError::ConflictingFilters));
    }

    #[test]
    fn test_converts_into_blog_error() {
        let error: BlogError = SearchError::ConflictingFilters.into();
        assert!(matches!(error, BlogError::SearchError(SearchError::ConflictingFilters)));
        assert!(error.to_string().starts_with("Search error:"));
    }

    #[test]
    fn test_error_source_none() {
        assert!(SearchError::ConflictingFilters.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
