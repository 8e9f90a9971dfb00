use aboutlib_types::Library;

pub(crate) const VERSION: &str = "0.0.1";

/// The library the demo screen shows by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinLibrary;

impl KotlinLibrary {
    pub fn new() -> Self {
        Self
    }
}

impl Library for KotlinLibrary {
    fn about(&self) -> String {
        format!("Kotlin library. Version {}", VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about() {
        let kotlin_library = KotlinLibrary::new();

        let result = kotlin_library.about();

        assert_eq!(result, "Kotlin library. Version 0.0.1");
    }
}
