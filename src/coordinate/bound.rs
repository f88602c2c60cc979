//! Axis-aligned bounds over two corner points
//!
//! A `Bound` lives in the plane and knows nothing about the anti-meridian.
//! The `geo_*` methods assume lng/lat degrees.

use std::fmt;

use log::debug;

use super::geo_math::{
    self, DistanceMode, EARTH_RADIUS, MAX_LATITUDE, MAX_LONGITUDE, METERS_PER_DEGREE,
    MIN_LATITUDE, MIN_LONGITUDE,
};
use super::geohash;
use super::mercator::MapTile;
use super::point::Point;
use crate::errors::{GeoError, GeoResult};

/// A box between a south-west (minimum) and a north-east (maximum) corner
///
/// Regular construction keeps `sw <= ne` on both axes. Padding with a
/// negative amount can invert the box; [`Bound::is_empty`] reports that state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    sw: Point,
    ne: Point,
}

impl Bound {
    /// Create a bound from its edges, given in any order
    pub fn new(west: f64, east: f64, south: f64, north: f64) -> Self {
        Bound {
            sw: Point::new(west.min(east), south.min(north)),
            ne: Point::new(west.max(east), south.max(north)),
        }
    }

    /// Create a bound from two opposite corners, either sw/ne or se/nw
    pub fn from_points(corner: &Point, opposite_corner: &Point) -> Self {
        let mut bound = Bound {
            sw: *corner,
            ne: *corner,
        };
        bound.extend(opposite_corner);
        bound
    }

    /// Create a bound around a lng/lat center covering `radius` meters on the sphere
    ///
    /// Near the poles, where a circle of that radius can wrap every meridian,
    /// latitude is clamped to the Mercator domain and the bound spans all
    /// longitudes. Longitudes pushed past ±180° are wrapped, which can leave
    /// an inverted bound across the anti-meridian.
    pub fn around_point(center: &Point, radius: f64) -> GeoResult<Self> {
        if radius < 0.0 || radius.is_nan() {
            return Err(GeoError::InvalidArgument(format!(
                "radius must be non-negative, got {}",
                radius
            )));
        }

        let angular = radius / EARTH_RADIUS;
        let lat = geo_math::deg2rad(center.lat());
        let lng = geo_math::deg2rad(center.lng());

        let mut min_lat = lat - angular;
        let mut max_lat = lat + angular;

        let lat_floor = geo_math::deg2rad(MIN_LATITUDE);
        let lat_ceiling = geo_math::deg2rad(MAX_LATITUDE);
        let lng_floor = geo_math::deg2rad(MIN_LONGITUDE);
        let lng_ceiling = geo_math::deg2rad(MAX_LONGITUDE);

        let (min_lng, max_lng) = if min_lat > lat_floor && max_lat < lat_ceiling {
            let delta = (angular.sin() / lat.cos()).asin();

            let mut min_lng = lng - delta;
            if min_lng < lng_floor {
                min_lng += 2.0 * std::f64::consts::PI;
            }
            let mut max_lng = lng + delta;
            if max_lng > lng_ceiling {
                max_lng -= 2.0 * std::f64::consts::PI;
            }
            if min_lng > max_lng {
                debug!("Bound around {} wraps the anti-meridian", center);
            }

            (min_lng, max_lng)
        } else {
            debug!("Bound around {} reaches a pole, spanning all longitudes", center);
            min_lat = min_lat.max(lat_floor);
            max_lat = max_lat.min(lat_ceiling);
            (lng_floor, lng_ceiling)
        };

        Ok(Bound {
            sw: Point::new(geo_math::rad2deg(min_lng), geo_math::rad2deg(min_lat)),
            ne: Point::new(geo_math::rad2deg(max_lng), geo_math::rad2deg(max_lat)),
        })
    }

    /// Create the bound of a map tile, failing unless `0 <= x, y < 2^zoom`
    pub fn from_map_tile(x: u64, y: u64, zoom: u32) -> GeoResult<Self> {
        Ok(Self::from_tile(&MapTile::new(x, y, zoom)?))
    }

    /// Create the bound of an already validated map tile
    pub fn from_tile(tile: &MapTile) -> Self {
        let (west, east, south, north) = tile.ranges();
        Self::new(west, east, south, north)
    }

    /// Create the bound of the region a base-32 GeoHash names
    pub fn from_geohash(hash: &str) -> GeoResult<Self> {
        let (west, east, south, north) = geohash::decode(hash)?;
        Ok(Self::new(west, east, south, north))
    }

    /// Create the bound of the region an integer GeoHash of `bits` bits names
    pub fn from_geohash_int(hash: u64, bits: u32) -> GeoResult<Self> {
        let (west, east, south, north) = geohash::decode_int(hash, bits)?;
        Ok(Self::new(west, east, south, north))
    }

    /// Grow the bound to include `point`
    pub fn extend(&mut self, point: &Point) -> &mut Self {
        if self.contains(point) {
            return self;
        }

        self.sw = Point::new(self.sw.x().min(point.x()), self.sw.y().min(point.y()));
        self.ne = Point::new(self.ne.x().max(point.x()), self.ne.y().max(point.y()));
        self
    }

    /// Grow the bound to the smallest box containing both bounds
    pub fn union(&mut self, other: &Bound) -> &mut Self {
        self.extend(&other.south_west())
            .extend(&other.north_west())
            .extend(&other.south_east())
            .extend(&other.north_east())
    }

    /// Whether `point` lies inside; the boundary counts as inside
    pub fn contains(&self, point: &Point) -> bool {
        if point.y() < self.sw.y() || self.ne.y() < point.y() {
            return false;
        }

        if point.x() < self.sw.x() || self.ne.x() < point.x() {
            return false;
        }

        true
    }

    /// Whether two bounds overlap; touching edges count
    pub fn intersects(&self, other: &Bound) -> bool {
        self.sw.x() <= other.ne.x()
            && other.sw.x() <= self.ne.x()
            && self.sw.y() <= other.ne.y()
            && other.sw.y() <= self.ne.y()
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.ne.x() + self.sw.x()) / 2.0,
            (self.ne.y() + self.sw.y()) / 2.0,
        )
    }

    /// Inflate every side by `amount` coordinate units
    ///
    /// Negative amounts shrink the bound and may invert it.
    pub fn pad(&mut self, amount: f64) -> &mut Self {
        self.sw = Point::new(self.sw.x() - amount, self.sw.y() - amount);
        self.ne = Point::new(self.ne.x() + amount, self.ne.y() + amount);
        self
    }

    /// Inflate every side by roughly `meters`, for lng/lat bounds away from the poles
    pub fn geo_pad(&mut self, meters: f64) -> &mut Self {
        let dy = meters / METERS_PER_DEGREE;
        let dx = dy / geo_math::deg2rad((self.ne.lat() + self.sw.lat()) / 2.0).cos();

        self.sw = Point::from_lng_lat(self.sw.lng() - dx, self.sw.lat() - dy);
        self.ne = Point::from_lng_lat(self.ne.lng() + dx, self.ne.lat() + dy);
        self
    }

    /// Difference in Y/latitude
    pub fn height(&self) -> f64 {
        self.ne.y() - self.sw.y()
    }

    /// Difference in X/longitude
    pub fn width(&self) -> f64 {
        self.ne.x() - self.sw.x()
    }

    /// Approximate height in meters
    pub fn geo_height(&self) -> f64 {
        METERS_PER_DEGREE * self.height()
    }

    /// Width in meters, measured along the latitude of the center
    pub fn geo_width(&self, mode: DistanceMode) -> f64 {
        let center = self.center();

        let west = Point::from_lng_lat(self.sw.lng(), center.lat());
        let east = Point::from_lng_lat(self.ne.lng(), center.lat());

        west.geo_distance_from(&east, mode)
    }

    pub fn south_west(&self) -> Point {
        self.sw
    }

    pub fn north_east(&self) -> Point {
        self.ne
    }

    pub fn south_east(&self) -> Point {
        Point::from_lng_lat(self.ne.lng(), self.sw.lat())
    }

    pub fn north_west(&self) -> Point {
        Point::from_lng_lat(self.sw.lng(), self.ne.lat())
    }

    /// Whether the bound has no area or is inverted, e.g. after too much negative padding
    pub fn is_empty(&self) -> bool {
        self.sw.x() >= self.ne.x() || self.sw.y() >= self.ne.y()
    }
}

/// Formats as `[[west, east], [south, north]]`
impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[[{:.6}, {:.6}], [{:.6}, {:.6}]]",
            self.sw.x(),
            self.ne.x(),
            self.sw.y(),
            self.ne.y()
        )
    }
}
