//! Utility modules for common functionality
//!
//! Parameter parsing, spatial query text and command output.

pub mod coordinate_utils;
pub mod logger;
pub mod query_utils;
