//! Coordinate handling for planar and geographic data
//!
//! This module provides points, axis-aligned bounds and the two
//! coordinate transforms that build bounds from discrete keys:
//! GeoHash decoding and Web Mercator tiles.

mod bound;
pub mod geo_math;
pub mod geohash;
pub mod mercator;
mod point;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bound::Bound;
pub use self::geo_math::DistanceMode;
pub use self::mercator::MapTile;
pub use self::point::Point;
