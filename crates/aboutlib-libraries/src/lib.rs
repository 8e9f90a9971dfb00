// Library implementations
pub mod android;
pub mod kotlin;

// Library registry
pub mod registry;

pub use android::{AndroidLibrary, HostContext};
pub use kotlin::KotlinLibrary;

pub use registry::{
    LibraryMetadata, create_library, get_all_libraries, get_library_metadata, get_library_names,
};

pub use aboutlib_types::{Error, Library, Result};
