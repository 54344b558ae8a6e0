use crate::{RecencyBuckets, StdResult};

/// A trait for reporting classified repositories.
#[cfg_attr(test, mockall::automock)]
pub trait RepositoryReporter: Sync + Send {
    /// Reports the repositories of every recency bucket.
    fn report(&self, buckets: &RecencyBuckets) -> StdResult<()>;
}
