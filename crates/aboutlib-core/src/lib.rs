//! Turns a [`Library`](aboutlib_types::Library) into the text shown on screen.

pub mod format;

pub use format::{LIBRARY_DESCRIPTION_HEADER, formatted_library_description};
