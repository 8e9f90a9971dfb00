use crate::config::Config;
use crate::presentation::ConsoleRenderer;
use crate::presentation::view_models::DescriptionViewModel;
use aboutlib_core::{LIBRARY_DESCRIPTION_HEADER, formatted_library_description};
use anyhow::Result;

pub fn handle(
    config: &Config,
    library: Option<String>,
    about: Option<String>,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let (name, library) = super::resolve_library(config, library, about)?;

    let description = formatted_library_description(library.as_ref());
    tracing::info!(library = %name, "button pressed");

    let vm = DescriptionViewModel {
        library: name,
        about: description[LIBRARY_DESCRIPTION_HEADER.len()..].to_string(),
        description,
    };

    renderer.render(&vm)
}
