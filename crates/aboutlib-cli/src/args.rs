use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "aboutlib")]
#[command(about = "Show what a library says about itself", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (defaults to $ABOUTLIB_PATH, then the system data dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Press the button once and print the formatted description
    Show {
        #[arg(
            long,
            help = "Library name from the registry (defaults to the configured library)"
        )]
        library: Option<String>,

        #[arg(long, help = "Describe an ad-hoc library with this text instead")]
        about: Option<String>,
    },

    /// Inspect built-in libraries
    Library {
        #[command(subcommand)]
        command: LibraryCommand,
    },

    /// Read or change config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Interactive screen: Enter presses the button, q quits
    App {
        #[arg(long)]
        library: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum LibraryCommand {
    List,

    About { name: String },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    Show,

    Set {
        #[arg(long)]
        library: Option<String>,

        #[arg(long)]
        package_name: Option<String>,
    },
}
