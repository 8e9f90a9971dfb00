use crate::config::Config;
use crate::presentation::ConsoleRenderer;
use crate::presentation::view_models::{LibraryAboutViewModel, LibraryEntry, LibraryListViewModel};
use aboutlib_libraries::{create_library, get_all_libraries};
use anyhow::Result;

pub fn list(renderer: &ConsoleRenderer) -> Result<()> {
    let libraries = get_all_libraries()
        .iter()
        .map(|meta| LibraryEntry {
            name: meta.name.to_string(),
            version: meta.version.to_string(),
            description: meta.description.to_string(),
            needs_context: meta.needs_context,
        })
        .collect();

    renderer.render(&LibraryListViewModel { libraries })
}

pub fn about(config: &Config, name: String, renderer: &ConsoleRenderer) -> Result<()> {
    let library = create_library(&name, config.host.as_ref())?;

    let vm = LibraryAboutViewModel {
        library: super::registry_name(&name),
        about: library.about(),
    };

    renderer.render(&vm)
}
