use crate::coord::Coordinate;
use crate::error::GeoPointError;
use crate::index::constants::{
    GEOHASH_ALPHABET, GEOHASH_BITS_PER_CHAR, GEOHASH_PRECISION, MAX_GEOHASH_BITS,
    MAX_GEOHASH_PRECISION,
};
use crate::point::Point;

/// Options for string geohash encoding.
///
/// Passed to [`geo_hash_with`]; [`geo_hash`] takes the precision directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoHashOptions {
    /// Number of base-32 characters in the hash (1-12)
    pub precision: usize,
}

impl Default for GeoHashOptions {
    fn default() -> Self {
        Self {
            precision: GEOHASH_PRECISION,
        }
    }
}

/// Decoded extent of a geohash: `(lng_min, lng_max, lat_min, lat_max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoHashRanges {
    pub lng_min: f64,
    pub lng_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl GeoHashRanges {
    fn world() -> Self {
        Self {
            lng_min: -180.0,
            lng_max: 180.0,
            lat_min: -90.0,
            lat_max: 90.0,
        }
    }

    /// Midpoint of the range, the representative point of the hash.
    pub fn center(&self) -> Point {
        Point::new(
            (self.lng_min + self.lng_max) / 2.0,
            (self.lat_min + self.lat_max) / 2.0,
        )
    }

    pub fn contains<C: Coordinate>(&self, coord: &C) -> bool {
        coord.x() >= self.lng_min
            && coord.x() <= self.lng_max
            && coord.y() >= self.lat_min
            && coord.y() <= self.lat_max
    }
}

pub(crate) fn check_bits(bits: u32) -> Result<(), GeoPointError> {
    if bits > MAX_GEOHASH_BITS {
        return Err(GeoPointError::BitCountOutOfRange(bits));
    }
    Ok(())
}

fn check_hash(hash: i64, bits: u32) -> Result<(), GeoPointError> {
    check_bits(bits)?;
    if hash < 0 || (hash as u64) >> bits != 0 {
        return Err(GeoPointError::GeoHashOutOfRange { hash, bits });
    }
    Ok(())
}

pub(crate) fn check_precision(precision: usize) -> Result<(), GeoPointError> {
    if precision == 0 || precision > MAX_GEOHASH_PRECISION {
        return Err(GeoPointError::PrecisionOutOfRange(precision));
    }
    Ok(())
}

/// Encodes a coordinate into the integer form of its geohash, `bits` bits wide.
///
/// Even bits (counting from the most significant) split longitude, odd bits
/// split latitude. With equal `bits` the integers order spatially close points
/// together, which makes them usable as sort keys.
///
/// # Example
/// ```
/// use geopoint_rs::geo_hash_bits;
///
/// # fn main() -> Result<(), geopoint_rs::GeoPointError> {
/// let bits = geo_hash_bits(&(9.85, 57.097), 40)?;
/// assert!(bits > 0);
/// # Ok(())
/// # }
/// ```
pub fn geo_hash_bits<C: Coordinate>(coord: &C, bits: u32) -> Result<i64, GeoPointError> {
    check_bits(bits)?;

    let mut range = GeoHashRanges::world();
    let mut hash: i64 = 0;

    for i in 0..bits {
        hash <<= 1;

        if i % 2 == 0 {
            let mid = (range.lng_min + range.lng_max) / 2.0;
            if coord.x() > mid {
                range.lng_min = mid;
                hash |= 1;
            } else {
                range.lng_max = mid;
            }
        } else {
            let mid = (range.lat_min + range.lat_max) / 2.0;
            if coord.y() > mid {
                range.lat_min = mid;
                hash |= 1;
            } else {
                range.lat_max = mid;
            }
        }
    }

    Ok(hash)
}

/// Replays the bisection of [`geo_hash_bits`] to recover the cell extent.
///
/// Fails with [`GeoPointError::GeoHashOutOfRange`] when `hash` is negative or
/// has bits set above the `bits` wide window.
pub fn ranges_from_geo_hash_bits(hash: i64, bits: u32) -> Result<GeoHashRanges, GeoPointError> {
    check_hash(hash, bits)?;

    let mut range = GeoHashRanges::world();
    for i in 0..bits {
        let bit = (hash >> (bits - 1 - i)) & 1;

        if i % 2 == 0 {
            let mid = (range.lng_min + range.lng_max) / 2.0;
            if bit == 1 {
                range.lng_min = mid;
            } else {
                range.lng_max = mid;
            }
        } else {
            let mid = (range.lat_min + range.lat_max) / 2.0;
            if bit == 1 {
                range.lat_min = mid;
            } else {
                range.lat_max = mid;
            }
        }
    }

    Ok(range)
}

/// Encodes a coordinate as a base-32 geohash string of `precision` characters.
///
/// # Example
/// ```
/// use geopoint_rs::geo_hash;
///
/// # fn main() -> Result<(), geopoint_rs::GeoPointError> {
/// // Aalborg
/// assert_eq!(geo_hash(&(9.85, 57.097), 8)?, "u4phb4hw");
/// # Ok(())
/// # }
/// ```
pub fn geo_hash<C: Coordinate>(coord: &C, precision: usize) -> Result<String, GeoPointError> {
    check_precision(precision)?;

    let mut hash = geo_hash_bits(coord, GEOHASH_BITS_PER_CHAR * precision as u32)?;
    let mut result = vec![0u8; precision];
    for slot in result.iter_mut().rev() {
        *slot = GEOHASH_ALPHABET[(hash & 0x1F) as usize];
        hash >>= GEOHASH_BITS_PER_CHAR;
    }

    // Every byte comes from the ASCII alphabet.
    Ok(result.into_iter().map(char::from).collect())
}

/// [`geo_hash`] driven by [`GeoHashOptions`].
///
/// # Example
/// ```
/// use geopoint_rs::{geo_hash_with, GeoHashOptions};
///
/// # fn main() -> Result<(), geopoint_rs::GeoPointError> {
/// let hash = geo_hash_with(&(9.85, 57.097), GeoHashOptions::default())?;
/// assert!(hash.starts_with("u4phb4hw"));
/// assert_eq!(hash.len(), 12);
/// # Ok(())
/// # }
/// ```
pub fn geo_hash_with<C: Coordinate>(
    coord: &C,
    options: GeoHashOptions,
) -> Result<String, GeoPointError> {
    geo_hash(coord, options.precision)
}

/// Converts a geohash string into its integer form and bit width.
///
/// Uppercase letters are accepted. Characters outside the alphabet fail with
/// [`GeoPointError::InvalidGeoHashCharacter`].
pub fn geo_hash_to_bits(hash: &str) -> Result<(i64, u32), GeoPointError> {
    let precision = hash.chars().count();
    check_precision(precision)?;

    let mut bits: i64 = 0;
    for (position, character) in hash.chars().enumerate() {
        let lower = character.to_ascii_lowercase();
        let index = GEOHASH_ALPHABET
            .iter()
            .position(|&c| char::from(c) == lower)
            .ok_or(GeoPointError::InvalidGeoHashCharacter {
                character,
                position,
            })?;
        bits = (bits << GEOHASH_BITS_PER_CHAR) | index as i64;
    }

    Ok((bits, GEOHASH_BITS_PER_CHAR * precision as u32))
}

/// Decodes a geohash string to the extent of its cell.
pub fn ranges_from_geo_hash(hash: &str) -> Result<GeoHashRanges, GeoPointError> {
    let (bits, bit_count) = geo_hash_to_bits(hash)?;
    ranges_from_geo_hash_bits(bits, bit_count)
}

/// Decodes a geohash string to the centre of its cell.
///
/// # Example
/// ```
/// use geopoint_rs::point_from_geo_hash;
///
/// # fn main() -> Result<(), geopoint_rs::GeoPointError> {
/// let p = point_from_geo_hash("u4phb4hw")?;
/// assert!((p.lat() - 57.097).abs() < 0.001);
/// # Ok(())
/// # }
/// ```
pub fn point_from_geo_hash(hash: &str) -> Result<Point, GeoPointError> {
    Ok(ranges_from_geo_hash(hash)?.center())
}

/// Decodes the integer form of a geohash to the centre of its cell.
pub fn point_from_geo_hash_int64(hash: i64, bits: u32) -> Result<Point, GeoPointError> {
    Ok(ranges_from_geo_hash_bits(hash, bits)?.center())
}
