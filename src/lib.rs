pub mod commands;
pub mod config;
pub mod coordinate;
pub mod errors;
pub mod utils;

pub use config::GeoConfig;
pub use coordinate::{Bound, DistanceMode, MapTile, Point};
pub use errors::{GeoError, GeoResult};
