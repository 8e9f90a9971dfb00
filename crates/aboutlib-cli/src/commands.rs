use super::args::{Cli, Commands, ConfigCommand, LibraryCommand};
use super::handlers;
use crate::config::{Config, resolve_data_dir};
use crate::logging;
use crate::presentation::ConsoleRenderer;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config_path = Config::default_path(&data_dir);
    let renderer = ConsoleRenderer::new(cli.format);

    tracing::debug!(data_dir = %data_dir.display(), format = %cli.format, "starting");

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&config_path, &renderer);
    };

    match command {
        Commands::Show { library, about } => {
            let config = Config::load_from(&config_path)?;
            handlers::show::handle(&config, library, about, &renderer)
        }

        Commands::Library { command } => match command {
            LibraryCommand::List => handlers::library::list(&renderer),
            LibraryCommand::About { name } => {
                let config = Config::load_from(&config_path)?;
                handlers::library::about(&config, name, &renderer)
            }
        },

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&config_path, &renderer),
            ConfigCommand::Set {
                library,
                package_name,
            } => handlers::config::set(&config_path, library, package_name, &renderer),
        },

        Commands::App { library } => {
            let config = Config::load_from(&config_path)?;
            handlers::app::handle(&config, library)
        }
    }
}
