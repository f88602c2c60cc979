//! Geodesic distance command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::config::GeoConfig;
use crate::coordinate::{DistanceMode, Point};
use crate::errors::{GeoError, GeoResult};
use crate::utils::coordinate_utils::parse_point;
use crate::utils::logger::Logger;

/// Command printing the distance in meters between two lng/lat points
pub struct DistanceCommand<'a> {
    from: Point,
    to: Point,
    mode: DistanceMode,
    logger: &'a Logger,
}

impl<'a> DistanceCommand<'a> {
    pub fn new(args: &ArgMatches, config: &GeoConfig, logger: &'a Logger) -> GeoResult<Self> {
        let point_arg = |name: &str| {
            args.get_one::<String>(name)
                .ok_or_else(|| GeoError::Parse(format!("Missing --{}", name)))
                .and_then(|text| parse_point(text))
        };

        let mode = if args.get_flag("haversine") {
            DistanceMode::Haversine
        } else {
            config.distance_mode()
        };

        Ok(DistanceCommand {
            from: point_arg("from")?,
            to: point_arg("to")?,
            mode,
            logger,
        })
    }

    pub fn distance(&self) -> f64 {
        self.from.geo_distance_from(&self.to, self.mode)
    }
}

impl<'a> Command for DistanceCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Measuring {} -> {} ({:?})", self.from, self.to, self.mode);

        self.logger
            .log(&format!("distance: {:.3} m", self.distance()))?;

        Ok(())
    }
}
