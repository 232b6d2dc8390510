use crate::coord::Coordinate;
use crate::error::GeoPointError;
use crate::index::{check_bits, check_level, check_precision, geo_hash, geo_hash_bits, quadkey};
use rayon::prelude::*;

/// Trait for keying collections of coordinates in parallel.
///
/// Implemented for `[P]` and `Vec<P>` where `P` is any [`Coordinate`].
/// Output order matches input order.
pub trait PointsToKeys {
    /// Integer quadkeys at `level`.
    fn to_quadkeys(&self, level: u32) -> Result<Vec<i64>, GeoPointError>;
    /// Geohash strings of `precision` characters.
    fn to_geo_hashes(&self, precision: usize) -> Result<Vec<String>, GeoPointError>;
    /// Geohash bitstreams of `bit_count` bits.
    fn to_geo_hash_bits(&self, bit_count: u32) -> Result<Vec<i64>, GeoPointError>;
}

impl<P: Coordinate + Sync> PointsToKeys for [P] {
    fn to_quadkeys(&self, level: u32) -> Result<Vec<i64>, GeoPointError> {
        check_level(level)?;
        self.par_iter().map(|p| quadkey(p, level)).collect()
    }

    fn to_geo_hashes(&self, precision: usize) -> Result<Vec<String>, GeoPointError> {
        check_precision(precision)?;
        self.par_iter().map(|p| geo_hash(p, precision)).collect()
    }

    fn to_geo_hash_bits(&self, bit_count: u32) -> Result<Vec<i64>, GeoPointError> {
        check_bits(bit_count)?;
        self.par_iter().map(|p| geo_hash_bits(p, bit_count)).collect()
    }
}

impl<P: Coordinate + Sync> PointsToKeys for Vec<P> {
    fn to_quadkeys(&self, level: u32) -> Result<Vec<i64>, GeoPointError> {
        self.as_slice().to_quadkeys(level)
    }

    fn to_geo_hashes(&self, precision: usize) -> Result<Vec<String>, GeoPointError> {
        self.as_slice().to_geo_hashes(precision)
    }

    fn to_geo_hash_bits(&self, bit_count: u32) -> Result<Vec<i64>, GeoPointError> {
        self.as_slice().to_geo_hash_bits(bit_count)
    }
}
