//! Error types for bound construction and the command line glue

use std::io;
use thiserror::Error;

/// Errors raised while building bounds or handling user input
#[derive(Debug, Error)]
pub enum GeoError {
    /// A construction argument violates its precondition (e.g. a negative radius)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A tile index or zoom level outside the addressable range
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// A GeoHash character outside the base-32 alphabet
    #[error("Invalid geohash character '{character}' at position {position}")]
    InvalidEncoding { character: char, position: usize },

    /// User supplied text that could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Malformed configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for geobound operations
pub type GeoResult<T> = Result<T, GeoError>;
