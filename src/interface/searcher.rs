use crate::{SearchQuery, SearchResult, StdResult};

/// A trait for searching repositories on the API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositorySearcher: Sync + Send {
    /// Searches the repositories matching the query, first result page only.
    async fn search(&self, query: &SearchQuery) -> StdResult<SearchResult>;
}
