//! Point structure for representing coordinates

use std::fmt;

use super::geo_math::{self, DistanceMode};
use super::geohash;
use crate::errors::GeoResult;

/// A point in a 2D coordinate space
///
/// Axis 0 is X (longitude in geographic data), axis 1 is Y (latitude).
/// Points are plain values: the `with_*` builders return a new point and
/// never touch the original.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Create a new point from X/Y coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Create a new point from longitude/latitude in degrees
    pub fn from_lng_lat(lng: f64, lat: f64) -> Self {
        Point { x: lng, y: lat }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Longitude, an alias for `x`
    pub fn lng(&self) -> f64 {
        self.x
    }

    /// Latitude, an alias for `y`
    pub fn lat(&self) -> f64 {
        self.y
    }

    /// Copy of this point with a different X coordinate
    pub fn with_x(self, x: f64) -> Self {
        Point { x, ..self }
    }

    /// Copy of this point with a different Y coordinate
    pub fn with_y(self, y: f64) -> Self {
        Point { y, ..self }
    }

    pub fn with_lng(self, lng: f64) -> Self {
        self.with_x(lng)
    }

    pub fn with_lat(self, lat: f64) -> Self {
        self.with_y(lat)
    }

    /// Euclidean distance in the units of the coordinates
    pub fn distance_from(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Distance in meters between two lng/lat points
    pub fn geo_distance_from(&self, other: &Point, mode: DistanceMode) -> f64 {
        geo_math::geo_distance(self, other, mode)
    }

    /// Base-32 GeoHash of this point with `precision` characters (at most 24)
    pub fn geohash(&self, precision: usize) -> String {
        geohash::encode(self, precision)
    }

    /// Integer GeoHash of this point using `bits` bits (at most 64)
    pub fn geohash_int(&self, bits: u32) -> GeoResult<u64> {
        geohash::encode_int(self, bits)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6}, {:.6}]", self.x, self.y)
    }
}
