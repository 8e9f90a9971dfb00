use std::fmt;

/// Result type for aboutlib-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared by crates that construct libraries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No library is registered under the requested name
    UnknownLibrary(String),

    /// The library needs a host context that was not supplied
    MissingContext(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownLibrary(name) => write!(f, "Unknown library: {}", name),
            Error::MissingContext(name) => write!(
                f,
                "Library '{}' needs a host context (set one with 'aboutlib config set --package-name <PKG>')",
                name
            ),
        }
    }
}

impl std::error::Error for Error {}
