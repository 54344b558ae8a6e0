use log::debug;
use reqwest::{Client, StatusCode};

use crate::{RepositorySearcher, SearchError, SearchQuery, SearchResult, StdResult};

/// The REST production endpoint for searching GitHub repositories.
pub const GITHUB_SEARCH_ENDPOINT: &str = "https://api.github.com/search/repositories";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Searches repositories on a REST API.
pub struct RestSearcher {
    client: Client,
    endpoint: String,
}

impl RestSearcher {
    /// Creates a new `RestSearcher` instance querying the given endpoint.
    pub fn try_new(endpoint: &str) -> StdResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(SearchError::Transport)?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    fn build_url(&self, query: &SearchQuery) -> String {
        format!("{}{}", self.endpoint, query.to_query_suffix())
    }
}

#[async_trait::async_trait]
impl RepositorySearcher for RestSearcher {
    async fn search(&self, query: &SearchQuery) -> StdResult<SearchResult> {
        let url = self.build_url(query);
        debug!("Searching repositories: {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(SearchError::Transport)?;
        if response.status() != StatusCode::OK {
            return Err(SearchError::HttpStatus(response.status().to_string()).into());
        }
        let body = response.bytes().await.map_err(SearchError::Transport)?;
        let result: SearchResult = serde_json::from_slice(&body).map_err(SearchError::Decode)?;
        debug!(
            "Search returned {} repositories out of {} (incomplete={})",
            result.items.len(),
            result.total_count,
            result.incomplete
        );

        Ok(result)
    }
}
