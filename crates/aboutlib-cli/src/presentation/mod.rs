//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                    (Data)                      ==(Text)==> [ View ] --> stdout
//! ```
//!
//! View models carry raw data only and must serialize cleanly; every bit of
//! layout and colour lives in `views`.

pub mod renderer;
pub mod view_models;
pub mod views;

pub use renderer::ConsoleRenderer;
