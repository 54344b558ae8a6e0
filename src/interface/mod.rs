mod reporter;
mod searcher;
mod tracker;

pub use reporter::*;
pub use searcher::*;
pub use tracker::*;
