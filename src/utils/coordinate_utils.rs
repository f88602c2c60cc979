//! Coordinate parameter parsing
//!
//! Utilities for turning comma separated command line values into points,
//! bounds and tile indices.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::coordinate::{Bound, MapTile, Point};
use crate::errors::{GeoError, GeoResult};

lazy_static! {
    static ref DECIMAL: Regex =
        Regex::new(r"^\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*$").unwrap();
    static ref INTEGER: Regex = Regex::new(r"^\s*(\d+)\s*$").unwrap();
}

/// Split `text` on commas and parse exactly `expected` decimal values
fn parse_decimals(text: &str, expected: usize, what: &str) -> GeoResult<Vec<f64>> {
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != expected {
        return Err(GeoError::Parse(format!(
            "{} must have {} comma-separated values, got '{}'",
            what, expected, text
        )));
    }

    parts
        .iter()
        .map(|part| {
            DECIMAL
                .captures(part)
                .and_then(|caps| caps[1].parse::<f64>().ok())
                .ok_or_else(|| GeoError::Parse(format!("Invalid number '{}' in {}", part.trim(), what)))
        })
        .collect()
}

/// Parse a point from "lon,lat" (or "x,y")
pub fn parse_point(text: &str) -> GeoResult<Point> {
    let values = parse_decimals(text, 2, "coordinate")?;
    debug!("Parsed coordinate: x/lon={}, y/lat={}", values[0], values[1]);

    Ok(Point::new(values[0], values[1]))
}

/// Parse a bound from "west,east,south,north"
pub fn parse_bound(text: &str) -> GeoResult<Bound> {
    let values = parse_decimals(text, 4, "bounding box")?;

    Ok(Bound::new(values[0], values[1], values[2], values[3]))
}

/// Parse two opposite corners from "lon,lat,lon,lat"
pub fn parse_corners(text: &str) -> GeoResult<(Point, Point)> {
    let values = parse_decimals(text, 4, "corner pair")?;

    Ok((Point::new(values[0], values[1]), Point::new(values[2], values[3])))
}

/// Parse and validate a map tile index from "x,y,zoom"
pub fn parse_tile(text: &str) -> GeoResult<MapTile> {
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 3 {
        return Err(GeoError::Parse(format!(
            "Tile must be in format 'x,y,zoom', got '{}'",
            text
        )));
    }

    let mut values = [0u64; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = INTEGER
            .captures(part)
            .and_then(|caps| caps[1].parse::<u64>().ok())
            .ok_or_else(|| GeoError::Parse(format!("Invalid tile component '{}'", part.trim())))?;
    }

    let zoom = u32::try_from(values[2])
        .map_err(|_| GeoError::OutOfRange(format!("zoom {} is too large", values[2])))?;

    MapTile::new(values[0], values[1], zoom)
}
