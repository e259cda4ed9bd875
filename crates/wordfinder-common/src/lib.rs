pub mod errors;
pub mod types;

pub use errors::{ConfigError, FinderError};
pub use types::{PageCoordinates, Rect, ViewportSnapshot};

pub type Result<T> = std::result::Result<T, FinderError>;
