//! Scalar Web Mercator projection and map tile indices
//!
//! Coordinates are projected onto an unsigned pixel grid of `2^level`
//! cells per axis, with y growing southwards. Map tiles are the same grid
//! at `level == zoom`.

use std::f64::consts::PI;

use log::trace;

use super::geo_math::{self, MAX_LATITUDE, MIN_LATITUDE};
use super::point::Point;
use crate::errors::{GeoError, GeoResult};

/// Precision, in bits per axis, used when converting tiles to bounds
pub const TILE_PRECISION: u32 = 31;

/// Highest supported precision; `2^level` must fit into a `u64`
pub const MAX_LEVEL: u32 = 63;

/// Project a lng/lat position in degrees to pixel coordinates at `level` bits
///
/// Latitude is clamped to the Mercator domain and both results are
/// clamped to `[0, 2^level)`.
pub fn project(lng: f64, lat: f64, level: u32) -> (u64, u64) {
    let factor = 1u64 << level.min(MAX_LEVEL);
    let max_tiles = factor as f64;
    // `factor - 1` is not representable as f64 above 53 bits, so clamp after the cast
    let to_cell = |value: f64| (value.floor().max(0.0) as u64).min(factor - 1);

    let x = to_cell((lng + 180.0) / 360.0 * max_tiles);

    let lat_rad = geo_math::deg2rad(lat.clamp(MIN_LATITUDE, MAX_LATITUDE));
    let merc = (PI / 4.0 + lat_rad / 2.0).tan().ln();
    let y = to_cell((0.5 - merc / (2.0 * PI)) * max_tiles);

    (x, y)
}

/// Inverse of [`project`], returning `(lng, lat)` in degrees
///
/// Accepts `x, y == 2^level` so the far edge of the last cell can be resolved.
pub fn inverse(x: u64, y: u64, level: u32) -> (f64, f64) {
    let max_tiles = (1u64 << level.min(MAX_LEVEL)) as f64;

    let lng = 360.0 * (x as f64 / max_tiles - 0.5);
    let lat = geo_math::rad2deg(2.0 * (PI - 2.0 * PI * y as f64 / max_tiles).exp().atan()) - 90.0;

    (lng, lat)
}

/// A tile of the Mercator world at a given zoom level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapTile {
    x: u64,
    y: u64,
    zoom: u32,
}

impl MapTile {
    /// Create a tile index, checking `0 <= x, y < 2^zoom`
    pub fn new(x: u64, y: u64, zoom: u32) -> GeoResult<Self> {
        if zoom > MAX_LEVEL {
            return Err(GeoError::OutOfRange(format!(
                "zoom {} exceeds the maximum of {}",
                zoom, MAX_LEVEL
            )));
        }

        let max_index = 1u64 << zoom;
        if x >= max_index || y >= max_index {
            return Err(GeoError::OutOfRange(format!(
                "tile index ({}, {}) out of range for zoom {} (must be below {})",
                x, y, zoom, max_index
            )));
        }

        Ok(MapTile { x, y, zoom })
    }

    /// The tile containing a lng/lat point
    pub fn from_point(point: &Point, zoom: u32) -> GeoResult<Self> {
        if zoom > MAX_LEVEL {
            return Err(GeoError::OutOfRange(format!(
                "zoom {} exceeds the maximum of {}",
                zoom, MAX_LEVEL
            )));
        }

        let (x, y) = project(point.lng(), point.lat(), zoom);
        trace!("Point {} lies in tile {}/{}/{}", point, zoom, x, y);

        Ok(MapTile { x, y, zoom })
    }

    /// Column, 0 at the west edge
    pub fn x(&self) -> u64 {
        self.x
    }

    /// Row, 0 at the north edge
    pub fn y(&self) -> u64 {
        self.y
    }

    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// `(west, east, south, north)` of the tile in degrees
    ///
    /// The index is scaled up to [`TILE_PRECISION`] bits before the inverse
    /// projection. Zoom levels beyond that precision are resolved at their
    /// own level.
    pub fn ranges(&self) -> (f64, f64, f64, f64) {
        let level = self.zoom.max(TILE_PRECISION);
        let shift = level - self.zoom;

        let (lng1, lat1) = inverse(self.x << shift, self.y << shift, level);
        let (lng2, lat2) = inverse((self.x + 1) << shift, (self.y + 1) << shift, level);

        (lng1, lng2, lat1, lat2)
    }
}
