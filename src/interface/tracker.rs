use crate::{SearchQuery, StdResult};

/// A trait for tracking how recently the repositories of a topic were updated.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryTracker {
    /// Searches, classifies and reports the repositories matching the query.
    async fn track(&self, query: &SearchQuery) -> StdResult<()>;
}
