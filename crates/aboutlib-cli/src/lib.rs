mod args;
mod commands;
pub mod config;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;
pub mod ui;

pub use args::{Cli, Commands, ConfigCommand, LibraryCommand};
pub use commands::run;
