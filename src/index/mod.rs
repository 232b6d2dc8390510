pub mod constants;
mod geohash;
mod quadkey;

pub use constants::{
    EARTH_RADIUS, GEOHASH_ALPHABET, GEOHASH_PRECISION, MAX_GEOHASH_BITS, MAX_GEOHASH_PRECISION,
    MAX_QUADKEY_LEVEL,
};
pub use geohash::{
    GeoHashOptions, GeoHashRanges, geo_hash, geo_hash_bits, geo_hash_to_bits, geo_hash_with,
    point_from_geo_hash, point_from_geo_hash_int64, ranges_from_geo_hash,
    ranges_from_geo_hash_bits,
};
pub use quadkey::{
    point_from_quadkey, point_from_quadkey_string, quadkey, quadkey_from_string, quadkey_string,
    quadkey_to_string,
};

pub(crate) use geohash::{check_bits, check_precision};
pub(crate) use quadkey::{check_key, check_level, deinterleave, format_quadkey, interleave};
