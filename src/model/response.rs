use serde::Deserialize;

use super::{RecencyBucket, Repository};

/// The decoded body of a repository search response.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct SearchResult {
    /// The total number of repositories matching the query.
    pub total_count: u64,

    /// Whether the search timed out before collecting every match.
    #[serde(rename = "incomplete_results", alias = "incomplete_result")]
    pub incomplete: bool,

    /// The repositories of the first result page.
    pub items: Vec<Repository>,
}

/// Repositories partitioned by recency, each bucket sorted by update time.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecencyBuckets {
    pub(crate) fresh: Vec<Repository>,
    pub(crate) recent: Vec<Repository>,
    pub(crate) stale: Vec<Repository>,
}

impl RecencyBuckets {
    /// Retrieves the repositories of a bucket.
    pub fn bucket(&self, bucket: RecencyBucket) -> &[Repository] {
        match bucket {
            RecencyBucket::Fresh => &self.fresh,
            RecencyBucket::Recent => &self.recent,
            RecencyBucket::Stale => &self.stale,
        }
    }

    pub(crate) fn bucket_mut(&mut self, bucket: RecencyBucket) -> &mut Vec<Repository> {
        match bucket {
            RecencyBucket::Fresh => &mut self.fresh,
            RecencyBucket::Recent => &mut self.recent,
            RecencyBucket::Stale => &mut self.stale,
        }
    }

    /// Returns the total number of classified repositories.
    pub fn len(&self) -> usize {
        self.fresh.len() + self.recent.len() + self.stale.len()
    }

    /// Returns true if no repository was classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
