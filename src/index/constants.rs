/// Geohash base-32 alphabet (no `a`, `i`, `l`, `o`)
pub const GEOHASH_ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Default geohash length in characters
pub const GEOHASH_PRECISION: usize = 12;

/// Longest geohash string that fits an `i64` accumulator
pub const MAX_GEOHASH_PRECISION: usize = 12;

/// Bits per geohash character
pub const GEOHASH_BITS_PER_CHAR: u32 = 5;

/// Widest geohash bit window, keeps the integer form non-negative
pub const MAX_GEOHASH_BITS: u32 = 63;

/// Deepest quadkey level; 2 bits per level must fit an `i64`
pub const MAX_QUADKEY_LEVEL: u32 = 31;

/// Equatorial Earth radius in meters used for geodesic distances
pub const EARTH_RADIUS: f64 = 6_378_137.0;
