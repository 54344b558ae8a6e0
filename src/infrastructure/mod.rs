mod classifier_recency;
mod reporter_text;
mod searcher_rest;
mod tracker_sequential;

pub use classifier_recency::*;
pub use reporter_text::*;
pub use searcher_rest::*;
pub use tracker_sequential::*;
