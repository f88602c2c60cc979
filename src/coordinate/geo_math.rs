//! Scalar helpers for geographic math
//!
//! Degree/radian conversion, the lng/lat domain limits and geodesic
//! distance between two points.

use std::f64::consts::PI;

use super::point::Point;

/// Southern limit of the Web Mercator projection, in degrees
pub const MIN_LATITUDE: f64 = -85.05112878;
/// Northern limit of the Web Mercator projection, in degrees
pub const MAX_LATITUDE: f64 = 85.05112878;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Mean Earth radius in meters
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Approximate length of one degree of latitude in meters
pub const METERS_PER_DEGREE: f64 = 111_131.75;

/// How geodesic distances are estimated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMode {
    /// Pythagoras on an equirectangular projection, fine for short distances
    #[default]
    Approximate,
    /// Great-circle distance on a sphere
    Haversine,
}

impl DistanceMode {
    /// Pick the mode from a "use haversine" flag
    pub fn from_haversine(haversine: bool) -> Self {
        if haversine {
            DistanceMode::Haversine
        } else {
            DistanceMode::Approximate
        }
    }
}

#[inline]
pub fn deg2rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

#[inline]
pub fn rad2deg(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Distance in meters between two lng/lat points
pub fn geo_distance(from: &Point, to: &Point, mode: DistanceMode) -> f64 {
    let d_lat = deg2rad(to.lat() - from.lat());
    let d_lng = deg2rad(to.lng() - from.lng());

    match mode {
        DistanceMode::Haversine => {
            let sin_lat = (d_lat / 2.0).sin();
            let sin_lng = (d_lng / 2.0).sin();
            let a = sin_lat * sin_lat
                + deg2rad(from.lat()).cos() * deg2rad(to.lat()).cos() * sin_lng * sin_lng;

            2.0 * EARTH_RADIUS * a.sqrt().atan2((1.0 - a).sqrt())
        }
        DistanceMode::Approximate => {
            // take the short way around
            let mut d_lng = d_lng.abs();
            if d_lng > PI {
                d_lng = 2.0 * PI - d_lng;
            }

            let x = d_lng * deg2rad((from.lat() + to.lat()) / 2.0).cos();
            d_lat.hypot(x) * EARTH_RADIUS
        }
    }
}
