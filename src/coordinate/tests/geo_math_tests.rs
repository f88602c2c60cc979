//! Tests for scalar geo helpers

use std::f64::consts::PI;

use approx::assert_relative_eq;

use crate::coordinate::geo_math::*;

#[test]
fn test_degree_radian_conversion() {
    assert_eq!(deg2rad(180.0), PI);
    assert_eq!(rad2deg(PI), 180.0);
    assert_relative_eq!(rad2deg(deg2rad(37.7749)), 37.7749, max_relative = 1e-12);
}

#[test]
fn test_domain_constants() {
    assert_eq!(MIN_LATITUDE, -MAX_LATITUDE);
    assert_eq!(MIN_LONGITUDE, -180.0);
    assert_eq!(MAX_LONGITUDE, 180.0);
    assert!(MAX_LATITUDE < 90.0);
}

#[test]
fn test_distance_mode_defaults_to_approximation() {
    assert_eq!(DistanceMode::default(), DistanceMode::Approximate);
    assert_eq!(DistanceMode::from_haversine(true), DistanceMode::Haversine);
    assert_eq!(DistanceMode::from_haversine(false), DistanceMode::Approximate);
}
