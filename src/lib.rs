//! Tracks how recently the GitHub repositories of a topic were updated.
//!
//! A single search is issued against the repository search endpoint, the
//! results are partitioned into recency buckets and reported as text.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
