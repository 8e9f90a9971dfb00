use crate::config::Config;
use crate::presentation::ConsoleRenderer;
use crate::presentation::view_models::ConfigViewModel;
use aboutlib_libraries::{get_library_metadata, get_library_names};
use anyhow::Result;
use std::path::Path;

pub fn show(config_path: &Path, renderer: &ConsoleRenderer) -> Result<()> {
    let config = Config::load_from(config_path)?;
    renderer.render(&view_model(config_path, &config))
}

pub fn set(
    config_path: &Path,
    library: Option<String>,
    package_name: Option<String>,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    if library.is_none() && package_name.is_none() {
        anyhow::bail!("Nothing to set: pass --library and/or --package-name");
    }

    let mut config = Config::load_from(config_path)?;

    if let Some(name) = library {
        let Some(meta) = get_library_metadata(&name) else {
            anyhow::bail!(
                "Unknown library: {} (available: {})",
                name,
                get_library_names().join(", ")
            );
        };
        config.set_library(meta.name);
    }

    if let Some(package_name) = package_name {
        if package_name.trim().is_empty() {
            anyhow::bail!("Package name must not be empty");
        }
        config.set_package_name(package_name.trim());
    }

    config.save_to(config_path)?;

    renderer.render(&view_model(config_path, &config))
}

fn view_model(config_path: &Path, config: &Config) -> ConfigViewModel {
    ConfigViewModel {
        path: config_path.to_path_buf(),
        exists: config_path.exists(),
        library: config.library.clone(),
        package_name: config.package_name().map(str::to_string),
    }
}
