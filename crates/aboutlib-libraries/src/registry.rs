use crate::android::{self, AndroidLibrary, HostContext};
use crate::kotlin::{self, KotlinLibrary};
use aboutlib_types::{Error, Library, Result};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LibraryMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub needs_context: bool,
}

const LIBRARIES: &[LibraryMetadata] = &[
    LibraryMetadata {
        name: "kotlin",
        description: "Plain JVM library with a fixed description",
        version: kotlin::VERSION,
        needs_context: false,
    },
    LibraryMetadata {
        name: "android",
        description: "Library that reports the host application's package",
        version: android::VERSION,
        needs_context: true,
    },
];

pub fn get_all_libraries() -> &'static [LibraryMetadata] {
    LIBRARIES
}

pub fn get_library_names() -> Vec<&'static str> {
    LIBRARIES.iter().map(|l| l.name).collect()
}

pub fn get_library_metadata(name: &str) -> Option<&'static LibraryMetadata> {
    let name = normalize_name(name);
    LIBRARIES.iter().find(|l| l.name == name)
}

/// Create a library by registry name.
///
/// `context` is only consulted by libraries that need a host; passing one to
/// a library that does not is harmless.
pub fn create_library(name: &str, context: Option<&HostContext>) -> Result<Box<dyn Library>> {
    let normalized = normalize_name(name);
    tracing::debug!(library = %normalized, has_context = context.is_some(), "creating library");

    match normalized.as_str() {
        "kotlin" => Ok(Box::new(KotlinLibrary::new())),
        "android" => {
            let context = context.ok_or_else(|| Error::MissingContext(normalized.clone()))?;
            Ok(Box::new(AndroidLibrary::new(context.clone())))
        }
        _ => {
            tracing::warn!(library = %name, known = ?get_library_names(), "unknown library requested");
            Err(Error::UnknownLibrary(name.to_string()))
        }
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_metadata() {
        assert_eq!(get_library_names(), vec!["kotlin", "android"]);
        assert_eq!(get_all_libraries().len(), 2);
    }

    #[test]
    fn test_metadata_lookup_is_case_insensitive() {
        let meta = get_library_metadata(" Kotlin ").unwrap();
        assert_eq!(meta.name, "kotlin");
        assert_eq!(meta.version, "0.0.1");
        assert!(get_library_metadata("swift").is_none());
    }
}
