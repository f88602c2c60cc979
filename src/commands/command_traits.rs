//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use crate::config::GeoConfig;
use crate::errors::GeoResult;
use crate::utils::logger::Logger;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    fn execute(&self) -> GeoResult<()>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Loaded configuration supplying defaults
    /// * `logger` - Sink for command output
    fn create_command(
        &self,
        args: &clap::ArgMatches,
        config: &'a GeoConfig,
        logger: &'a Logger,
    ) -> GeoResult<Box<dyn Command + 'a>>;
}
