use crate::config::Config;
use crate::presentation::ConsoleRenderer;
use crate::presentation::view_models::GuidanceViewModel;
use aboutlib_libraries::get_library_names;
use anyhow::Result;
use std::path::Path;

pub fn handle(config_path: &Path, renderer: &ConsoleRenderer) -> Result<()> {
    let config = Config::load_from(config_path)?;

    let vm = GuidanceViewModel {
        config_exists: config_path.exists(),
        default_library: config.library,
        libraries: get_library_names().into_iter().map(String::from).collect(),
    };

    renderer.render(&vm)
}
