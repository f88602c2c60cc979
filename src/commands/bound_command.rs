//! Bound construction command
//!
//! Builds a bound from exactly one source (GeoHash, tile, center and
//! radius, edges or corners), applies optional padding and prints it.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::config::{GeoConfig, OutputFormat};
use crate::coordinate::{Bound, DistanceMode, MapTile, Point};
use crate::errors::{GeoError, GeoResult};
use crate::utils::coordinate_utils::{parse_bound, parse_corners, parse_point, parse_tile};
use crate::utils::logger::Logger;
use crate::utils::query_utils::{to_intersects_condition, to_polygon_wkt};

/// Where the bound comes from
#[derive(Debug, Clone, PartialEq)]
pub enum BoundSource {
    GeoHash(String),
    GeoHashInt { hash: u64, bits: u32 },
    Tile(MapTile),
    Around { center: Point, radius: f64 },
    Edges(Bound),
    Corners(Point, Point),
}

impl BoundSource {
    /// Build the bound this source describes
    pub fn build(&self) -> GeoResult<Bound> {
        match self {
            BoundSource::GeoHash(hash) => Bound::from_geohash(hash),
            BoundSource::GeoHashInt { hash, bits } => Bound::from_geohash_int(*hash, *bits),
            BoundSource::Tile(tile) => Ok(Bound::from_tile(tile)),
            BoundSource::Around { center, radius } => Bound::around_point(center, *radius),
            BoundSource::Edges(bound) => Ok(*bound),
            BoundSource::Corners(corner, opposite) => Ok(Bound::from_points(corner, opposite)),
        }
    }
}

/// Command for building and printing a bound
pub struct BoundCommand<'a> {
    source: BoundSource,
    /// Padding in coordinate units
    pad: Option<f64>,
    /// Padding in meters
    geo_pad: Option<f64>,
    format: OutputFormat,
    column: String,
    mode: DistanceMode,
    logger: &'a Logger,
}

impl<'a> BoundCommand<'a> {
    /// Create a new bound command
    ///
    /// # Arguments
    /// * `args` - Matches of the `bound` subcommand
    /// * `config` - Defaults for format, column and distance mode
    /// * `logger` - Sink for command output
    pub fn new(args: &ArgMatches, config: &GeoConfig, logger: &'a Logger) -> GeoResult<Self> {
        let source = Self::parse_source(args)?;
        debug!("Bound source: {:?}", source);

        let format = match args.get_one::<String>("format") {
            Some(name) => name.parse::<OutputFormat>()?,
            None => config.output_format,
        };

        let column = args
            .get_one::<String>("column")
            .cloned()
            .unwrap_or_else(|| config.column.clone());

        let mode = if args.get_flag("haversine") {
            DistanceMode::Haversine
        } else {
            config.distance_mode()
        };

        Ok(BoundCommand {
            source,
            pad: args.get_one::<f64>("pad").copied(),
            geo_pad: args.get_one::<f64>("geo-pad").copied(),
            format,
            column,
            mode,
            logger,
        })
    }

    fn parse_source(args: &ArgMatches) -> GeoResult<BoundSource> {
        let mut sources = Vec::new();

        if let Some(hash) = args.get_one::<String>("geohash") {
            sources.push(BoundSource::GeoHash(hash.clone()));
        }

        if let Some(hash) = args.get_one::<u64>("geohash-int") {
            let bits = args.get_one::<u32>("bits").copied().ok_or_else(|| {
                GeoError::Parse("--geohash-int requires --bits".to_string())
            })?;
            sources.push(BoundSource::GeoHashInt { hash: *hash, bits });
        }

        if let Some(tile) = args.get_one::<String>("tile") {
            sources.push(BoundSource::Tile(parse_tile(tile)?));
        }

        if let Some(point) = args.get_one::<String>("point") {
            let radius = args.get_one::<f64>("radius").copied().ok_or_else(|| {
                GeoError::Parse("--point requires --radius".to_string())
            })?;
            sources.push(BoundSource::Around {
                center: parse_point(point)?,
                radius,
            });
        }

        if let Some(bbox) = args.get_one::<String>("bbox") {
            sources.push(BoundSource::Edges(parse_bound(bbox)?));
        }

        if let Some(corners) = args.get_one::<String>("corners") {
            let (corner, opposite) = parse_corners(corners)?;
            sources.push(BoundSource::Corners(corner, opposite));
        }

        match sources.len() {
            1 => Ok(sources.remove(0)),
            0 => Err(GeoError::Parse(
                "Missing bound source. Use --geohash, --geohash-int, --tile, --point, --bbox or --corners"
                    .to_string(),
            )),
            n => Err(GeoError::Parse(format!(
                "Expected exactly one bound source, got {}",
                n
            ))),
        }
    }

    /// Build the bound and apply the requested padding
    pub fn bound(&self) -> GeoResult<Bound> {
        let mut bound = self.source.build()?;

        if let Some(amount) = self.pad {
            bound.pad(amount);
        }
        if let Some(meters) = self.geo_pad {
            bound.geo_pad(meters);
        }

        Ok(bound)
    }

    /// Lines printed for `bound`
    pub fn render(&self, bound: &Bound) -> Vec<String> {
        match self.format {
            OutputFormat::Polygon => vec![to_polygon_wkt(bound)],
            OutputFormat::Intersects => vec![to_intersects_condition(bound, &self.column)],
            OutputFormat::Text => vec![
                bound.to_string(),
                format!("center: {}", bound.center()),
                format!("width: {:.6}, height: {:.6}", bound.width(), bound.height()),
                format!(
                    "geo width: {:.1} m, geo height: {:.1} m",
                    bound.geo_width(self.mode),
                    bound.geo_height()
                ),
                format!("empty: {}", bound.is_empty()),
            ],
        }
    }
}

impl<'a> Command for BoundCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        let bound = self.bound()?;
        info!("Built bound {}", bound);

        for line in self.render(&bound) {
            self.logger.log(&line)?;
        }

        Ok(())
    }
}
