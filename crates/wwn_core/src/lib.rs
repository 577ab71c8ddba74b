pub mod error;
pub mod params;
pub mod types;

pub use error::Error;
pub use params::QueryParams;
pub use types::{Article, Source};

pub type Result<T> = std::result::Result<T, Error>;
