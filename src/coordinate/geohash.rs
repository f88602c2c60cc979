//! GeoHash encoding and decoding
//!
//! A GeoHash is a recursively bisected rectangle of the lng/lat domain.
//! Every bit halves one axis, alternating between longitude and latitude
//! (longitude first). The string form packs 5 bits per base-32 character;
//! the integer form stores the bits most significant first.

use log::trace;

use super::point::Point;
use crate::errors::{GeoError, GeoResult};

/// Base-32 alphabet used by the string form
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Longest string form produced by [`encode`]; 120 bits already exceed
/// what an `f64` coordinate can resolve
pub const MAX_PRECISION: usize = 24;

const BITS_PER_CHAR: u32 = 5;
const MAX_BITS: u32 = u64::BITS;

/// Search state of a bisection: the remaining lng/lat ranges and the axis
/// that the next bit splits
#[derive(Debug, Clone, Copy)]
struct Cell {
    lng: (f64, f64),
    lat: (f64, f64),
    even: bool,
}

impl Cell {
    fn world() -> Self {
        Cell {
            lng: (-180.0, 180.0),
            lat: (-90.0, 90.0),
            even: true,
        }
    }

    /// Keep the upper half of the current axis if `bit` is set, else the lower half
    fn split(self, bit: bool) -> Self {
        let halve = |(min, max): (f64, f64)| {
            let mid = (min + max) / 2.0;
            if bit { (mid, max) } else { (min, mid) }
        };

        if self.even {
            Cell { lng: halve(self.lng), even: false, ..self }
        } else {
            Cell { lat: halve(self.lat), even: true, ..self }
        }
    }

    /// The bit that keeps `point` inside the cell
    fn bit_for(&self, point: &Point) -> bool {
        let ((min, max), value) = if self.even {
            (self.lng, point.lng())
        } else {
            (self.lat, point.lat())
        };

        value >= (min + max) / 2.0
    }

    fn ranges(&self) -> (f64, f64, f64, f64) {
        (self.lng.0, self.lng.1, self.lat.0, self.lat.1)
    }
}

fn bisect(bits: impl IntoIterator<Item = bool>) -> (f64, f64, f64, f64) {
    bits.into_iter().fold(Cell::world(), Cell::split).ranges()
}

fn check_bits(bits: u32) -> GeoResult<()> {
    if bits > MAX_BITS {
        return Err(GeoError::InvalidArgument(format!(
            "geohash bit count {} exceeds {}",
            bits, MAX_BITS
        )));
    }
    Ok(())
}

/// Decode a base-32 GeoHash into `(west, east, south, north)` degrees
///
/// The alphabet is case sensitive; any other character fails with
/// [`GeoError::InvalidEncoding`].
pub fn decode(hash: &str) -> GeoResult<(f64, f64, f64, f64)> {
    let values = hash
        .chars()
        .enumerate()
        .map(|(position, character)| {
            ALPHABET
                .iter()
                .position(|&c| c as char == character)
                .map(|index| index as u8)
                .ok_or(GeoError::InvalidEncoding { character, position })
        })
        .collect::<GeoResult<Vec<u8>>>()?;

    let ranges = bisect(
        values
            .into_iter()
            .flat_map(|value| (0..BITS_PER_CHAR).rev().map(move |k| (value >> k) & 1 == 1)),
    );
    trace!("Decoded geohash '{}' to {:?}", hash, ranges);

    Ok(ranges)
}

/// Decode an integer GeoHash of `bits` bits into `(west, east, south, north)` degrees
///
/// Exactly `bits` bisections are applied, longitude first, so an odd count
/// halves longitude once more than latitude.
pub fn decode_int(hash: u64, bits: u32) -> GeoResult<(f64, f64, f64, f64)> {
    check_bits(bits)?;

    let ranges = bisect((0..bits).rev().map(|k| (hash >> k) & 1 == 1));
    trace!("Decoded geohash {:#x} ({} bits) to {:?}", hash, bits, ranges);

    Ok(ranges)
}

/// Encode a lng/lat point as a base-32 GeoHash of `precision` characters
///
/// `precision` is capped at [`MAX_PRECISION`].
pub fn encode(point: &Point, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    let mut cell = Cell::world();
    let mut hash = String::with_capacity(precision);

    for _ in 0..precision {
        let mut value = 0usize;
        for _ in 0..BITS_PER_CHAR {
            let bit = cell.bit_for(point);
            value = (value << 1) | bit as usize;
            cell = cell.split(bit);
        }
        hash.push(ALPHABET[value] as char);
    }

    hash
}

/// Encode a lng/lat point as an integer GeoHash of `bits` bits
pub fn encode_int(point: &Point, bits: u32) -> GeoResult<u64> {
    check_bits(bits)?;

    let (hash, _) = (0..bits).fold((0u64, Cell::world()), |(hash, cell), _| {
        let bit = cell.bit_for(point);
        ((hash << 1) | bit as u64, cell.split(bit))
    });

    Ok(hash)
}
