//! Tests for points and point distances

use approx::assert_abs_diff_eq;

use crate::coordinate::geo_math::{deg2rad, EARTH_RADIUS};
use crate::coordinate::{DistanceMode, Point};

#[test]
fn test_axis_aliases() {
    let point = Point::from_lng_lat(-122.4194, 37.7749);
    assert_eq!(point.x(), point.lng());
    assert_eq!(point.y(), point.lat());
    assert_eq!(point, Point::new(-122.4194, 37.7749));
}

#[test]
fn test_builders_leave_original_untouched() {
    let original = Point::new(1.0, 2.0);
    let moved = original.with_x(5.0).with_lat(-3.0);

    assert_eq!(original, Point::new(1.0, 2.0));
    assert_eq!(moved, Point::new(5.0, -3.0));
    assert_eq!(original.with_lng(7.0).with_y(8.0), Point::new(7.0, 8.0));
}

#[test]
fn test_from_tuple() {
    let point: Point = (-122.4194, 37.7749).into();
    assert_eq!(point, Point::from_lng_lat(-122.4194, 37.7749));
}

#[test]
fn test_equality_is_exact() {
    assert_ne!(Point::new(0.1 + 0.2, 0.0), Point::new(0.3, 0.0));
}

#[test]
fn test_display() {
    assert_eq!(Point::new(1.5, -2.0).to_string(), "[1.500000, -2.000000]");
}

#[test]
fn test_planar_distance() {
    assert_eq!(Point::new(0.0, 0.0).distance_from(&Point::new(3.0, 4.0)), 5.0);
}

#[test]
fn test_one_degree_along_the_equator() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(1.0, 0.0);
    let expected = deg2rad(1.0) * EARTH_RADIUS;

    assert_abs_diff_eq!(a.geo_distance_from(&b, DistanceMode::Approximate), expected, epsilon = 1e-6);
    assert_abs_diff_eq!(a.geo_distance_from(&b, DistanceMode::Haversine), expected, epsilon = 1e-6);
}

#[test]
fn test_distance_takes_the_short_way_around() {
    let a = Point::new(179.0, 0.0);
    let b = Point::new(-179.0, 0.0);
    let expected = deg2rad(2.0) * EARTH_RADIUS;

    assert_abs_diff_eq!(a.geo_distance_from(&b, DistanceMode::Approximate), expected, epsilon = 1e-6);
    assert_abs_diff_eq!(a.geo_distance_from(&b, DistanceMode::Haversine), expected, epsilon = 1e-3);
}

#[test]
fn test_distance_modes_agree_on_short_hops() {
    // Paris -> Versailles
    let paris = Point::new(2.3522, 48.8566);
    let versailles = Point::new(2.1204, 48.8049);

    let fast = paris.geo_distance_from(&versailles, DistanceMode::default());
    let exact = paris.geo_distance_from(&versailles, DistanceMode::Haversine);

    assert!((fast - exact).abs() < 1.0, "{} vs {}", fast, exact);
    assert!(exact > 17_000.0 && exact < 18_000.0, "got {}", exact);
}

#[test]
fn test_zero_distance() {
    let p = Point::new(13.4, 52.5);
    assert_eq!(p.geo_distance_from(&p, DistanceMode::Approximate), 0.0);
    assert_eq!(p.geo_distance_from(&p, DistanceMode::Haversine), 0.0);
}
