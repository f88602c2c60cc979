use std::process;
use log::error;

use geobound::commands::{cli, CommandFactory, GeoboundCommandFactory};
use geobound::config::GeoConfig;
use geobound::utils::logger::Logger;

fn main() {
    let matches = cli().get_matches();

    Logger::init_global_logger(matches.get_flag("verbose"));

    let config = match matches.get_one::<String>("config") {
        Some(path) => GeoConfig::from_file(path),
        None => Ok(GeoConfig::default()),
    };
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let log_file = matches
        .get_one::<String>("log-file")
        .or(config.log_file.as_ref());
    let logger = match log_file {
        Some(path) => match Logger::new(path) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error initializing logger: {}", e);
                process::exit(1);
            }
        },
        None => Logger::stdout(),
    };

    let factory = GeoboundCommandFactory::new();

    match factory.create_command(&matches, &config, &logger) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
