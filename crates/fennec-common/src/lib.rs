pub mod errors;
pub mod types;

pub use errors::{ConfigError, FennecError, SurfaceError};
pub use types::Point;

pub type Result<T> = std::result::Result<T, FennecError>;
