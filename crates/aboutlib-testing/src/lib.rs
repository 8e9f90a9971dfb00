//! Testing infrastructure for aboutlib.
//!
//! - `doubles`: stand-in libraries (fixed text, call counting)
//! - `assertions`: checks for formatted descriptions
//! - `world`: isolated data directory plus a CLI runner

pub mod assertions;
pub mod doubles;
pub mod world;

pub use world::TestWorld;
