use aboutlib_types::Library;

/// Header placed above every library description.
pub const LIBRARY_DESCRIPTION_HEADER: &str = "About library:\n";

/// Build the display text for `library`.
///
/// The result is [`LIBRARY_DESCRIPTION_HEADER`] followed by exactly what
/// `library.about()` returned. `about` is called once; a panic inside it
/// reaches the caller untouched.
pub fn formatted_library_description<L>(library: &L) -> String
where
    L: Library + ?Sized,
{
    let about = library.about();
    let mut description = String::with_capacity(LIBRARY_DESCRIPTION_HEADER.len() + about.len());
    description.push_str(LIBRARY_DESCRIPTION_HEADER);
    description.push_str(&about);
    description
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_library_description() {
        let about_test_library = "Test library. Version 0.0.0";
        let library = || about_test_library.to_string();

        let result = formatted_library_description(&library);

        assert_eq!(result, format!("About library:\n{}", about_test_library));
    }

    #[test]
    fn test_empty_about_leaves_only_header() {
        let library = String::new;
        assert_eq!(formatted_library_description(&library), "About library:\n");
    }

    #[test]
    fn test_accepts_trait_objects() {
        let library: Box<dyn Library> = Box::new(|| "boxed".to_string());
        assert_eq!(
            formatted_library_description(library.as_ref()),
            "About library:\nboxed"
        );
    }
}
