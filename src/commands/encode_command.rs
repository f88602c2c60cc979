//! GeoHash encoding command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::config::GeoConfig;
use crate::coordinate::geohash::MAX_PRECISION;
use crate::coordinate::Point;
use crate::errors::{GeoError, GeoResult};
use crate::utils::coordinate_utils::parse_point;
use crate::utils::logger::Logger;

/// Command printing the GeoHash of a point in string and integer form
pub struct EncodeCommand<'a> {
    point: Point,
    /// Characters of the string form
    precision: usize,
    /// Bits of the integer form, five per character unless given
    bits: u32,
    logger: &'a Logger,
}

impl<'a> EncodeCommand<'a> {
    pub fn new(args: &ArgMatches, config: &GeoConfig, logger: &'a Logger) -> GeoResult<Self> {
        let point = args
            .get_one::<String>("point")
            .ok_or_else(|| GeoError::Parse("Missing --point".to_string()))
            .and_then(|text| parse_point(text))?;

        let precision = args
            .get_one::<usize>("precision")
            .copied()
            .unwrap_or(config.geohash_precision);
        if precision > MAX_PRECISION {
            return Err(GeoError::InvalidArgument(format!(
                "geohash precision {} exceeds {} characters",
                precision, MAX_PRECISION
            )));
        }

        let bits = match args.get_one::<u32>("bits") {
            Some(bits) => *bits,
            None => u32::try_from(precision)
                .ok()
                .and_then(|chars| chars.checked_mul(5))
                .map_or(u64::BITS, |bits| bits.min(u64::BITS)),
        };

        Ok(EncodeCommand {
            point,
            precision,
            bits,
            logger,
        })
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }
}

impl<'a> Command for EncodeCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Encoding {} at precision {}", self.point, self.precision);

        let hash = self.point.geohash(self.precision);
        let hash_int = self.point.geohash_int(self.bits)?;

        self.logger.log(&format!("geohash: {}", hash))?;
        self.logger
            .log(&format!("geohash int ({} bits): {}", self.bits, hash_int))?;

        Ok(())
    }
}
