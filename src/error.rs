use thiserror::Error;

/// Error type for geopoint-rs operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoPointError {
    /// The quadkey level is outside the supported range (0-31).
    #[error("Quadkey level out of range: {0}")]
    LevelOutOfRange(u32),
    /// The quadkey does not fit in the grid of the given level.
    #[error("Quadkey {key} out of range for level {level}")]
    QuadkeyOutOfRange { key: i64, level: u32 },
    /// The geohash bit count is outside the supported range (0-63).
    #[error("Geohash bit count out of range: {0}")]
    BitCountOutOfRange(u32),
    /// The integer geohash has bits set outside its `bits` wide window.
    #[error("Geohash {hash} out of range for {bits} bits")]
    GeoHashOutOfRange { hash: i64, bits: u32 },
    /// The geohash precision is outside the supported range (1-12).
    #[error("Geohash precision out of range: {0}")]
    PrecisionOutOfRange(usize),
    /// A quadkey string contains something other than the digits 0-3.
    #[error("Invalid quadkey string: '{0}'")]
    InvalidQuadkeyString(String),
    /// A geohash string contains a character outside the base-32 alphabet.
    #[error("Invalid geohash character '{character}' at position {position}")]
    InvalidGeoHashCharacter { character: char, position: usize },
    /// Failed to parse geometry from string (GeoJSON or WKT).
    #[error("Geometry parse error: {0}")]
    GeometryParseError(String),
    /// The geometry type has no key mapping.
    #[error("Unsupported geometry: {0}")]
    UnsupportedGeometry(String),
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(String),
    /// CSV parsing or writing error.
    #[error("CSV error: {0}")]
    CsvError(String),
}
