use crate::coord::{Coordinate, project, unproject};
use crate::error::GeoPointError;
use crate::index::constants::MAX_QUADKEY_LEVEL;
use crate::point::Point;

pub(crate) fn check_level(level: u32) -> Result<(), GeoPointError> {
    if level > MAX_QUADKEY_LEVEL {
        return Err(GeoPointError::LevelOutOfRange(level));
    }
    Ok(())
}

/// Interleaves tile coordinates into a quadkey: bit `i` of `x` lands at `2i`,
/// bit `i` of `y` at `2i + 1`.
pub(crate) fn interleave(x: u64, y: u64, level: u32) -> i64 {
    let mut result: u64 = 0;
    for i in 0..level {
        result |= (x & (1 << i)) << i;
        result |= (y & (1 << i)) << (i + 1);
    }
    result as i64
}

/// Splits a quadkey back into its tile coordinates.
pub(crate) fn deinterleave(key: i64, level: u32) -> (u64, u64) {
    let key = key as u64;
    let mut x: u64 = 0;
    let mut y: u64 = 0;
    for i in 0..level {
        x |= (key & (1 << (2 * i))) >> i;
        y |= (key & (1 << (2 * i + 1))) >> (i + 1);
    }
    (x, y)
}

pub(crate) fn check_key(key: i64, level: u32) -> Result<(), GeoPointError> {
    check_level(level)?;
    if key < 0 || (key as u64) >> (2 * level) != 0 {
        return Err(GeoPointError::QuadkeyOutOfRange { key, level });
    }
    Ok(())
}

/// Computes the quadkey of a lng/lat coordinate at the given level.
///
/// The coordinate is projected onto the spherical Mercator tile grid and the
/// tile's `x`/`y` bits are interleaved, one base-4 digit per level.
/// See <http://msdn.microsoft.com/en-us/library/bb259689.aspx> for the tiling scheme.
///
/// # Example
/// ```
/// use geopoint_rs::quadkey;
///
/// # fn main() -> Result<(), geopoint_rs::GeoPointError> {
/// let key = quadkey(&(-87.65005229999997, 41.850033), 15)?;
/// assert_eq!(key, 212521785);
/// # Ok(())
/// # }
/// ```
pub fn quadkey<C: Coordinate>(coord: &C, level: u32) -> Result<i64, GeoPointError> {
    check_level(level)?;
    let (x, y) = project(coord.x(), coord.y(), level);
    Ok(interleave(x, y, level))
}

/// Decodes a quadkey to the north-west corner of its tile.
pub fn point_from_quadkey(key: i64, level: u32) -> Result<Point, GeoPointError> {
    check_key(key, level)?;
    let (x, y) = deinterleave(key, level);
    let (lng, lat) = unproject(x, y, level);
    Ok(Point::new(lng, lat))
}

pub(crate) fn format_quadkey(key: i64, level: u32) -> String {
    let key = key as u64;
    (0..level)
        .rev()
        .map(|i| char::from(b'0' + ((key >> (2 * i)) & 0b11) as u8))
        .collect()
}

/// Renders a quadkey as base-4 text, zero padded to exactly `level` digits.
pub fn quadkey_to_string(key: i64, level: u32) -> Result<String, GeoPointError> {
    check_key(key, level)?;
    Ok(format_quadkey(key, level))
}

/// Parses base-4 quadkey text; the level is the number of digits.
pub fn quadkey_from_string(s: &str) -> Result<(i64, u32), GeoPointError> {
    let level = u32::try_from(s.len()).map_err(|_| GeoPointError::LevelOutOfRange(u32::MAX))?;
    check_level(level)?;

    let mut key: i64 = 0;
    for c in s.chars() {
        let digit = match c {
            '0'..='3' => c as i64 - '0' as i64,
            _ => return Err(GeoPointError::InvalidQuadkeyString(s.to_string())),
        };
        key = (key << 2) | digit;
    }
    Ok((key, level))
}

/// Computes the quadkey of a coordinate in base-4 string form.
///
/// # Example
/// ```
/// use geopoint_rs::quadkey_string;
///
/// # fn main() -> Result<(), geopoint_rs::GeoPointError> {
/// let key = quadkey_string(&(-87.65005229999997, 41.850033), 15)?;
/// assert_eq!(key, "030222231030321");
/// # Ok(())
/// # }
/// ```
pub fn quadkey_string<C: Coordinate>(coord: &C, level: u32) -> Result<String, GeoPointError> {
    let key = quadkey(coord, level)?;
    quadkey_to_string(key, level)
}

/// Decodes a base-4 quadkey string; the level is inferred from its length.
pub fn point_from_quadkey_string(s: &str) -> Result<Point, GeoPointError> {
    let (key, level) = quadkey_from_string(s)?;
    point_from_quadkey(key, level)
}
