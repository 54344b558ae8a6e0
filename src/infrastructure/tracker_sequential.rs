use std::sync::Arc;

use chrono::Utc;
use log::info;

use crate::{
    RecencyBucket, RecencyClassifier, RepositoryReporter, RepositorySearcher, RepositoryTracker,
    SearchQuery, StdResult,
};

/// A sequential tracker: one search, then classification, then report
pub struct SequentialTracker {
    searcher: Arc<dyn RepositorySearcher>,
    classifier: RecencyClassifier,
    reporter: Arc<dyn RepositoryReporter>,
}

impl SequentialTracker {
    /// Creates a new `SequentialTracker` instance with the given searcher and reporter.
    pub fn new(
        searcher: Arc<dyn RepositorySearcher>,
        reporter: Arc<dyn RepositoryReporter>,
    ) -> Self {
        Self {
            searcher,
            classifier: RecencyClassifier::new(),
            reporter,
        }
    }
}

#[async_trait::async_trait]
impl RepositoryTracker for SequentialTracker {
    async fn track(&self, query: &SearchQuery) -> StdResult<()> {
        info!("Processing query: {query}");
        let result = self.searcher.search(query).await?;
        if result.items.is_empty() {
            info!("No repositories found for query: {query}");
        }

        let buckets = self.classifier.classify(result.items, Utc::now());
        for bucket in RecencyBucket::REPORT_ORDER {
            info!("{bucket:?}: {} repositories", buckets.bucket(bucket).len());
        }

        self.reporter.report(&buckets)
    }
}
