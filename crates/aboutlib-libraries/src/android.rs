use aboutlib_types::Library;
use serde::{Deserialize, Serialize};

pub(crate) const VERSION: &str = "0.1.0";

/// Information about the application hosting a library.
///
/// Stands in for the platform's application context; only the package name
/// is ever read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostContext {
    pub package_name: String,
}

impl HostContext {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
        }
    }
}

/// A library whose description names the application it runs inside.
#[derive(Debug, Clone)]
pub struct AndroidLibrary {
    context: HostContext,
}

impl AndroidLibrary {
    pub fn new(context: HostContext) -> Self {
        Self { context }
    }
}

impl Library for AndroidLibrary {
    fn about(&self) -> String {
        format!(
            "{}: Android library. Version {}",
            self.context.package_name, VERSION
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_includes_package_name() {
        let library = AndroidLibrary::new(HostContext::new("com.morfly.bazel"));
        assert_eq!(
            library.about(),
            "com.morfly.bazel: Android library. Version 0.1.0"
        );
    }

    #[test]
    fn test_empty_package_name_is_kept_verbatim() {
        let library = AndroidLibrary::new(HostContext::new(""));
        assert_eq!(library.about(), ": Android library. Version 0.1.0");
    }
}
