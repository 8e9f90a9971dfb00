use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptionViewModel {
    /// Registry name, or `custom` for `--about`
    pub library: String,
    pub about: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LibraryEntry {
    pub name: String,
    pub version: String,
    pub description: String,
    pub needs_context: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct LibraryListViewModel {
    pub libraries: Vec<LibraryEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LibraryAboutViewModel {
    pub library: String,
    pub about: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: PathBuf,
    pub exists: bool,
    pub library: String,
    pub package_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuidanceViewModel {
    pub config_exists: bool,
    pub default_library: String,
    pub libraries: Vec<String>,
}
