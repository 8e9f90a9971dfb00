pub mod error;
pub mod library;

pub use error::{Error, Result};
pub use library::Library;
