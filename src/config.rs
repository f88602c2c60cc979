//! Configuration for the command line tool
//!
//! Defaults are embedded from `geobound.toml`; a user file passed with
//! `--config` overrides only the keys it sets.

use std::fs;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::debug;

use crate::coordinate::geohash::MAX_PRECISION;
use crate::coordinate::DistanceMode;
use crate::errors::{GeoError, GeoResult};

lazy_static! {
    // Parse the embedded defaults once
    static ref DEFAULT_CONFIG: GeoConfig = {
        let content = include_str!("../geobound.toml");
        GeoConfig::overlay(GeoConfig::builtin(), content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse default configuration: {}", e);
            GeoConfig::builtin()
        })
    };
}

/// How a bound is written by the `bound` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `[[west, east], [south, north]]` plus size details
    Text,
    /// `POLYGON((...))` literal
    Polygon,
    /// `INTERSECTS(column, GEOMFROMTEXT('...'))` condition
    Intersects,
}

impl FromStr for OutputFormat {
    type Err = GeoError;

    fn from_str(s: &str) -> GeoResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "polygon" => Ok(OutputFormat::Polygon),
            "intersects" => Ok(OutputFormat::Intersects),
            other => Err(GeoError::Config(format!(
                "Unknown output format '{}' (expected text, polygon or intersects)",
                other
            ))),
        }
    }
}

/// Settings shared by all commands
#[derive(Debug, Clone, PartialEq)]
pub struct GeoConfig {
    /// Use great-circle distances
    pub haversine: bool,
    /// Characters produced when encoding a GeoHash
    pub geohash_precision: usize,
    pub output_format: OutputFormat,
    /// Column used in intersects conditions
    pub column: String,
    /// Transcript file for command output
    pub log_file: Option<String>,
}

impl Default for GeoConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl FromStr for GeoConfig {
    type Err = GeoError;

    /// Parse a TOML document on top of the defaults
    fn from_str(content: &str) -> GeoResult<Self> {
        Self::overlay(Self::default(), content)
    }
}

impl GeoConfig {
    /// Values used when even the embedded defaults cannot be read
    fn builtin() -> Self {
        GeoConfig {
            haversine: false,
            geohash_precision: 12,
            output_format: OutputFormat::Text,
            column: "geom".to_string(),
            log_file: None,
        }
    }

    /// Load a configuration file on top of the defaults
    pub fn from_file(path: &str) -> GeoResult<Self> {
        debug!("Loading configuration from {}", path);
        let content = fs::read_to_string(path)?;
        content.parse()
    }

    pub fn distance_mode(&self) -> DistanceMode {
        DistanceMode::from_haversine(self.haversine)
    }

    fn overlay(mut config: GeoConfig, content: &str) -> GeoResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| GeoError::Config(format!("Failed to parse TOML: {}", e)))?;

        if let Some(value) = Self::lookup(&toml_value, "distance", "haversine") {
            config.haversine = value
                .as_bool()
                .ok_or_else(|| Self::invalid("distance.haversine", "a boolean"))?;
        }

        if let Some(value) = Self::lookup(&toml_value, "geohash", "precision") {
            config.geohash_precision = value
                .as_integer()
                .and_then(|v| usize::try_from(v).ok())
                .filter(|v| *v <= MAX_PRECISION)
                .ok_or_else(|| Self::invalid("geohash.precision", "an integer from 0 to 24"))?;
        }

        if let Some(value) = Self::lookup(&toml_value, "output", "format") {
            config.output_format = value
                .as_str()
                .ok_or_else(|| Self::invalid("output.format", "a string"))?
                .parse::<OutputFormat>()?;
        }

        if let Some(value) = Self::lookup(&toml_value, "output", "column") {
            config.column = value
                .as_str()
                .ok_or_else(|| Self::invalid("output.column", "a string"))?
                .to_string();
        }

        if let Some(value) = Self::lookup(&toml_value, "output", "log_file") {
            config.log_file = Some(
                value
                    .as_str()
                    .ok_or_else(|| Self::invalid("output.log_file", "a string"))?
                    .to_string(),
            );
        }

        Ok(config)
    }

    fn lookup<'v>(toml_value: &'v toml::Value, table: &str, key: &str) -> Option<&'v toml::Value> {
        toml_value.get(table).and_then(|t| t.get(key))
    }

    fn invalid(key: &str, expected: &str) -> GeoError {
        GeoError::Config(format!("{} must be {}", key, expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults() {
        let config = GeoConfig::default();
        assert!(!config.haversine);
        assert_eq!(config.geohash_precision, 12);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.column, "geom");
        assert_eq!(config.log_file, None);
        assert_eq!(config.distance_mode(), DistanceMode::Approximate);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: GeoConfig = "[output]\nformat = \"intersects\"\ncolumn = \"shape\"\n"
            .parse()
            .unwrap();
        assert_eq!(config.output_format, OutputFormat::Intersects);
        assert_eq!(config.column, "shape");
        assert_eq!(config.geohash_precision, 12);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            "[output]\nformat = \"svg\"".parse::<GeoConfig>(),
            Err(GeoError::Config(_))
        ));
        assert!(matches!(
            "[geohash]\nprecision = -3".parse::<GeoConfig>(),
            Err(GeoError::Config(_))
        ));
        assert!(matches!(
            "[geohash]\nprecision = 25".parse::<GeoConfig>(),
            Err(GeoError::Config(_))
        ));
        assert!(matches!(
            "[distance]\nhaversine = \"yes\"".parse::<GeoConfig>(),
            Err(GeoError::Config(_))
        ));
        assert!(matches!("not toml [".parse::<GeoConfig>(), Err(GeoError::Config(_))));
    }
}
