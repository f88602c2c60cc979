//! Spatial query text for bounds
//!
//! Produces MySQL-style geometry literals. Values are formatted, not
//! escaped; the caller owns the safety of the surrounding query.

use crate::coordinate::Bound;

/// Closed polygon ring of the bound: sw, nw, ne, se, sw
pub fn to_polygon_wkt(bound: &Bound) -> String {
    let ring = [
        bound.south_west(),
        bound.north_west(),
        bound.north_east(),
        bound.south_east(),
        bound.south_west(),
    ];

    let coords: Vec<String> = ring
        .iter()
        .map(|p| format!("{:.6} {:.6}", p.x(), p.y()))
        .collect();

    format!("POLYGON(({}))", coords.join(", "))
}

/// Condition selecting rows whose `column` intersects the bound
pub fn to_intersects_condition(bound: &Bound, column: &str) -> String {
    format!(
        "INTERSECTS({}, GEOMFROMTEXT('{}'))",
        column,
        to_polygon_wkt(bound)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_ring_order() {
        let bound = Bound::new(-1.0, 2.0, -3.0, 4.0);
        assert_eq!(
            to_polygon_wkt(&bound),
            "POLYGON((-1.000000 -3.000000, -1.000000 4.000000, 2.000000 4.000000, \
             2.000000 -3.000000, -1.000000 -3.000000))"
        );
    }

    #[test]
    fn test_intersects_condition() {
        let bound = Bound::new(0.0, 1.0, 0.0, 1.0);
        let condition = to_intersects_condition(&bound, "location");
        assert!(condition.starts_with("INTERSECTS(location, GEOMFROMTEXT('POLYGON(("));
        assert!(condition.ends_with("))'))"));
    }
}
