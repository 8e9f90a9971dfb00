pub mod app;
pub mod config;
pub mod guidance;
pub mod library;
pub mod show;

use crate::config::Config;
use aboutlib_libraries::{create_library, get_library_metadata};
use aboutlib_types::Library;
use anyhow::Result;

/// Name reported for libraries built from `--about` text.
pub const CUSTOM_LIBRARY: &str = "custom";

/// Pick the library a command should describe.
///
/// `--about` text wins, then an explicit `--library`, then the configured
/// default.
pub fn resolve_library(
    config: &Config,
    library: Option<String>,
    about: Option<String>,
) -> Result<(String, Box<dyn Library>)> {
    if let Some(text) = about {
        tracing::debug!("using ad-hoc library from --about");
        let library: Box<dyn Library> = Box::new(move || text.clone());
        return Ok((CUSTOM_LIBRARY.to_string(), library));
    }

    let name = library.unwrap_or_else(|| config.library.clone());
    let created = create_library(&name, config.host.as_ref())?;
    Ok((registry_name(&name), created))
}

/// The registry's own spelling of `name`, so displayed and matched names agree.
pub fn registry_name(name: &str) -> String {
    get_library_metadata(name)
        .map(|meta| meta.name.to_string())
        .unwrap_or_else(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_text_wins_over_library() {
        let config = Config::default();
        let (name, library) = resolve_library(
            &config,
            Some("android".to_string()),
            Some("inline".to_string()),
        )
        .unwrap();
        assert_eq!(name, "custom");
        assert_eq!(library.about(), "inline");
    }

    #[test]
    fn test_falls_back_to_configured_library() {
        let config = Config::default();
        let (name, library) = resolve_library(&config, None, None).unwrap();
        assert_eq!(name, "kotlin");
        assert_eq!(library.about(), "Kotlin library. Version 0.0.1");
    }

    #[test]
    fn test_library_name_uses_registry_spelling() {
        let config = Config::default();
        let (name, _) = resolve_library(&config, Some(" Kotlin ".to_string()), None).unwrap();
        assert_eq!(name, "kotlin");
        assert_eq!(registry_name("ANDROID"), "android");
    }

    #[test]
    fn test_configured_host_reaches_android() {
        let mut config = Config::default();
        config.set_package_name("com.example.app");
        let (_, library) = resolve_library(&config, Some("android".to_string()), None).unwrap();
        assert_eq!(library.about(), "com.example.app: Android library. Version 0.1.0");
    }

    #[test]
    fn test_android_without_host_fails() {
        let config = Config::default();
        let err = resolve_library(&config, Some("android".to_string()), None)
            .err()
            .unwrap();
        assert!(err.to_string().contains("needs a host context"));
    }
}
