//! CLI command implementations
//!
//! This module contains the command line definition and the commands
//! it dispatches to, using the Command pattern.

pub mod bound_command;
pub mod command_traits;
pub mod distance_command;
pub mod encode_command;

pub use bound_command::{BoundCommand, BoundSource};
pub use command_traits::{Command, CommandFactory};
pub use distance_command::DistanceCommand;
pub use encode_command::EncodeCommand;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as ClapCommand};

use crate::config::GeoConfig;
use crate::errors::{GeoError, GeoResult};
use crate::utils::logger::Logger;

/// Build the command line definition
pub fn cli() -> ClapCommand {
    ClapCommand::new("geobound")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build and inspect geographic bounds, GeoHashes and map tiles")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file overriding the defaults")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write command output to this file")
                .value_name("FILE")
                .global(true),
        )
        .subcommand(
            ClapCommand::new("bound")
                .about("Build a bound and print it")
                .arg(
                    Arg::new("geohash")
                        .long("geohash")
                        .help("Base-32 GeoHash")
                        .value_name("HASH"),
                )
                .arg(
                    Arg::new("geohash-int")
                        .long("geohash-int")
                        .help("Integer GeoHash, requires --bits")
                        .value_name("HASH")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("bits")
                        .long("bits")
                        .help("Bit length of the integer GeoHash")
                        .value_name("BITS")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("tile")
                        .long("tile")
                        .help("Map tile index in 'x,y,zoom' format")
                        .value_name("X,Y,Z"),
                )
                .arg(
                    Arg::new("point")
                        .long("point")
                        .help("Center in 'lon,lat' format, requires --radius")
                        .value_name("LON,LAT")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("radius")
                        .long("radius")
                        .help("Radius in meters around --point")
                        .value_name("METERS")
                        .value_parser(value_parser!(f64))
                        .allow_negative_numbers(true),
                )
                .arg(
                    Arg::new("bbox")
                        .long("bbox")
                        .help("Edges in 'west,east,south,north' format")
                        .value_name("W,E,S,N")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("corners")
                        .long("corners")
                        .help("Two opposite corners in 'lon,lat,lon,lat' format")
                        .value_name("LON,LAT,LON,LAT")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("pad")
                        .long("pad")
                        .help("Pad every side by this many coordinate units")
                        .value_name("UNITS")
                        .value_parser(value_parser!(f64))
                        .allow_negative_numbers(true),
                )
                .arg(
                    Arg::new("geo-pad")
                        .long("geo-pad")
                        .help("Pad every side by roughly this many meters")
                        .value_name("METERS")
                        .value_parser(value_parser!(f64))
                        .allow_negative_numbers(true),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format (text, polygon, intersects)")
                        .value_name("FORMAT"),
                )
                .arg(
                    Arg::new("column")
                        .long("column")
                        .help("Column name for the intersects condition")
                        .value_name("COLUMN"),
                )
                .arg(
                    Arg::new("haversine")
                        .long("haversine")
                        .help("Use great-circle distances for the geo width")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            ClapCommand::new("encode")
                .about("Print the GeoHash of a point")
                .arg(
                    Arg::new("point")
                        .long("point")
                        .help("Point in 'lon,lat' format")
                        .value_name("LON,LAT")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("precision")
                        .long("precision")
                        .help("Characters of the string form")
                        .value_name("CHARS")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("bits")
                        .long("bits")
                        .help("Bits of the integer form (at most 64)")
                        .value_name("BITS")
                        .value_parser(value_parser!(u32)),
                ),
        )
        .subcommand(
            ClapCommand::new("distance")
                .about("Print the distance in meters between two points")
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Start in 'lon,lat' format")
                        .value_name("LON,LAT")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("End in 'lon,lat' format")
                        .value_name("LON,LAT")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("haversine")
                        .long("haversine")
                        .help("Use the great-circle formula")
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Factory for creating command instances based on CLI arguments
pub struct GeoboundCommandFactory;

impl GeoboundCommandFactory {
    pub fn new() -> Self {
        GeoboundCommandFactory
    }
}

impl Default for GeoboundCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GeoboundCommandFactory {
    fn create_command(
        &self,
        args: &ArgMatches,
        config: &'a GeoConfig,
        logger: &'a Logger,
    ) -> GeoResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("bound", sub)) => Ok(Box::new(BoundCommand::new(sub, config, logger)?)),
            Some(("encode", sub)) => Ok(Box::new(EncodeCommand::new(sub, config, logger)?)),
            Some(("distance", sub)) => Ok(Box::new(DistanceCommand::new(sub, config, logger)?)),
            Some((name, _)) => Err(GeoError::Parse(format!("Unknown command '{}'", name))),
            None => Err(GeoError::Parse("Missing command".to_string())),
        }
    }
}
