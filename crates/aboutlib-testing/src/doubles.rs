//! Library doubles for tests.

use aboutlib_types::Library;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Library that always describes itself with the same text.
#[derive(Debug, Clone)]
pub struct FixedLibrary {
    about: String,
}

impl FixedLibrary {
    pub fn new(about: impl Into<String>) -> Self {
        Self {
            about: about.into(),
        }
    }
}

impl Library for FixedLibrary {
    fn about(&self) -> String {
        self.about.clone()
    }
}

/// Library that records how many times `about` was called.
#[derive(Debug)]
pub struct CountingLibrary {
    about: String,
    calls: AtomicUsize,
}

impl CountingLibrary {
    pub fn new(about: impl Into<String>) -> Self {
        Self {
            about: about.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `about` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Library for CountingLibrary {
    fn about(&self) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.about.clone()
    }
}
