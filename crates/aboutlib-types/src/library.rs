//! The `Library` capability.
//!
//! A library is anything that can describe itself. Concrete libraries live in
//! `aboutlib-libraries`; closures qualify too, which keeps test doubles cheap:
//!
//! ```
//! use aboutlib_types::Library;
//!
//! let library = || "Test library. Version 0.0.0".to_string();
//! assert_eq!(library.about(), "Test library. Version 0.0.0");
//! ```

/// A component that can produce a human-readable description of itself.
///
/// `about` is a plain accessor: it takes no input, cannot fail and has no
/// observable side effects.
pub trait Library: Send + Sync {
    fn about(&self) -> String;
}

impl<F> Library for F
where
    F: Fn() -> String + Send + Sync,
{
    fn about(&self) -> String {
        self()
    }
}
