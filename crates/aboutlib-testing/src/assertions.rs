//! Assertions for formatted library descriptions.

use aboutlib_core::LIBRARY_DESCRIPTION_HEADER as HEADER;

/// Assert that `description` is the header followed by exactly `about`.
///
/// # Panics
/// Panics with a readable message when the header is missing or the body
/// differs from `about`.
pub fn assert_formatted(description: &str, about: &str) {
    let Some(body) = description.strip_prefix(HEADER) else {
        panic!(
            "Expected description to start with {:?}, got: {:?}",
            HEADER, description
        );
    };
    assert_eq!(
        body, about,
        "Description body does not match the library's about text"
    );
}
