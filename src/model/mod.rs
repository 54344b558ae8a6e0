mod entities;
mod error;
mod request;
mod response;

pub use entities::*;
pub use error::*;
pub use request::*;
pub use response::*;
