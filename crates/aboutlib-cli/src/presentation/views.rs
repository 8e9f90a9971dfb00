use std::fmt;

use aboutlib_core::LIBRARY_DESCRIPTION_HEADER;
use owo_colors::OwoColorize;

use crate::presentation::view_models::{
    ConfigViewModel, DescriptionViewModel, GuidanceViewModel, LibraryAboutViewModel,
    LibraryListViewModel,
};

/// Plain-text layout of a view model.
pub trait TextView {
    fn fmt_text(&self, f: &mut fmt::Formatter<'_>, color: bool) -> fmt::Result;
}

/// Adapter so a [`TextView`] can be printed with `{}`.
pub struct Text<'a, T: ?Sized> {
    data: &'a T,
    color: bool,
}

impl<'a, T: TextView + ?Sized> Text<'a, T> {
    pub fn new(data: &'a T, color: bool) -> Self {
        Self { data, color }
    }
}

impl<T: TextView + ?Sized> fmt::Display for Text<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt_text(f, self.color)
    }
}

// --------------------------------------------------------
// Description
// --------------------------------------------------------

impl TextView for DescriptionViewModel {
    fn fmt_text(&self, f: &mut fmt::Formatter<'_>, color: bool) -> fmt::Result {
        if !color {
            return writeln!(f, "{}", self.description);
        }

        let header = LIBRARY_DESCRIPTION_HEADER.trim_end_matches('\n');
        writeln!(f, "{}", header.cyan().bold())?;
        writeln!(f, "{}", self.about)
    }
}

// --------------------------------------------------------
// Libraries
// --------------------------------------------------------

impl TextView for LibraryListViewModel {
    fn fmt_text(&self, f: &mut fmt::Formatter<'_>, color: bool) -> fmt::Result {
        if self.libraries.is_empty() {
            return writeln!(f, "No libraries registered.");
        }

        let heading = format!("{:<10} {:<9} DESCRIPTION", "LIBRARY", "VERSION");
        if color {
            writeln!(f, "{}", heading.bold())?;
        } else {
            writeln!(f, "{}", heading)?;
        }
        writeln!(f, "{}", "-".repeat(60))?;

        for library in &self.libraries {
            let note = if library.needs_context {
                " (needs host package name)"
            } else {
                ""
            };
            writeln!(
                f,
                "{:<10} {:<9} {}{}",
                library.name, library.version, library.description, note
            )?;
        }
        Ok(())
    }
}

impl TextView for LibraryAboutViewModel {
    fn fmt_text(&self, f: &mut fmt::Formatter<'_>, _color: bool) -> fmt::Result {
        writeln!(f, "{}", self.about)
    }
}

// --------------------------------------------------------
// Config
// --------------------------------------------------------

impl TextView for ConfigViewModel {
    fn fmt_text(&self, f: &mut fmt::Formatter<'_>, _color: bool) -> fmt::Result {
        let origin = if self.exists { "" } else { " (not created yet)" };
        writeln!(f, "config:       {}{}", self.path.display(), origin)?;
        writeln!(f, "library:      {}", self.library)?;
        writeln!(
            f,
            "package name: {}",
            self.package_name.as_deref().unwrap_or("-")
        )
    }
}

// --------------------------------------------------------
// Guidance
// --------------------------------------------------------

impl TextView for GuidanceViewModel {
    fn fmt_text(&self, f: &mut fmt::Formatter<'_>, color: bool) -> fmt::Result {
        writeln!(f, "aboutlib - press a button, read a library's description\n")?;

        let commands = [
            ("aboutlib show", "Print the description once"),
            ("aboutlib app", "Open the one-button screen"),
            ("aboutlib library list", "See available libraries"),
        ];

        writeln!(f, "Quick commands:")?;
        for (command, what) in commands {
            if color {
                writeln!(f, "  {} # {}", format!("{:<24}", command).cyan(), what)?;
            } else {
                writeln!(f, "  {:<24} # {}", command, what)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Default library: {}", self.default_library)?;
        if !self.config_exists {
            writeln!(
                f,
                "No config yet. Change defaults with: aboutlib config set --library <{}>",
                self.libraries.join("|")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::LibraryEntry;

    #[test]
    fn test_plain_description_is_exact() {
        let vm = DescriptionViewModel {
            library: "custom".to_string(),
            about: "Test library. Version 0.0.0".to_string(),
            description: "About library:\nTest library. Version 0.0.0".to_string(),
        };
        assert_eq!(
            Text::new(&vm, false).to_string(),
            "About library:\nTest library. Version 0.0.0\n"
        );
    }

    #[test]
    fn test_colored_description_keeps_text() {
        let vm = DescriptionViewModel {
            library: "kotlin".to_string(),
            about: "Kotlin library. Version 0.0.1".to_string(),
            description: "About library:\nKotlin library. Version 0.0.1".to_string(),
        };
        let rendered = Text::new(&vm, true).to_string();
        assert!(rendered.contains("About library:"));
        assert!(rendered.ends_with("Kotlin library. Version 0.0.1\n"));
    }

    #[test]
    fn test_library_list_marks_context() {
        let vm = LibraryListViewModel {
            libraries: vec![LibraryEntry {
                name: "android".to_string(),
                version: "0.1.0".to_string(),
                description: "Reports the host".to_string(),
                needs_context: true,
            }],
        };
        let rendered = Text::new(&vm, false).to_string();
        assert!(rendered.starts_with("LIBRARY"));
        assert!(rendered.contains("android    0.1.0     Reports the host (needs host package name)"));
    }
}
