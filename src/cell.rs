use crate::coord::{Coordinate, project, unproject};
use crate::error::GeoPointError;
use crate::geom::key_points;
use crate::index::constants::{GEOHASH_ALPHABET, GEOHASH_BITS_PER_CHAR};
use crate::index::{
    GeoHashRanges, check_key, check_level, check_precision, deinterleave, format_quadkey,
    geo_hash_bits, geo_hash_to_bits, interleave, quadkey_from_string, ranges_from_geo_hash_bits,
};
use crate::point::Point;
use geo_types::{Geometry, Polygon, Rect, coord};
use serde_json::{Map, Value, json};

/// A single quadtree tile on the spherical Mercator grid.
///
/// # Example
///
/// ```
/// use geopoint_rs::QuadkeyCell;
///
/// # fn main() -> Result<(), geopoint_rs::GeoPointError> {
/// let cell = QuadkeyCell::from_point(&(-87.65005229999997, 41.850033), 15)?;
/// assert_eq!(cell.key(), 212521785);
/// assert_eq!(cell.to_quadkey_string(), "030222231030321");
///
/// // Tile boundary for GIS operations
/// let polygon = cell.to_polygon();
/// # Ok(())
/// # }
/// ```
///
/// Fields are only set by the constructors, so key, level and tile always agree:
///
/// ```compile_fail
/// use geopoint_rs::QuadkeyCell;
///
/// let mut cell = QuadkeyCell::from_key(0, 4).unwrap();
/// cell.level = 40;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuadkeyCell {
    key: i64,
    level: u32,
    x: u64,
    y: u64,
}

impl QuadkeyCell {
    /// Tile containing a lng/lat coordinate.
    pub fn from_point(coord: &impl Coordinate, level: u32) -> Result<Self, GeoPointError> {
        check_level(level)?;
        let (x, y) = project(coord.x(), coord.y(), level);
        Ok(Self {
            key: interleave(x, y, level),
            level,
            x,
            y,
        })
    }

    /// Tile of an integer quadkey.
    pub fn from_key(key: i64, level: u32) -> Result<Self, GeoPointError> {
        check_key(key, level)?;
        let (x, y) = deinterleave(key, level);
        Ok(Self { key, level, x, y })
    }

    /// Tile of a base-4 quadkey string; the level is its length.
    pub fn from_quadkey_string(s: &str) -> Result<Self, GeoPointError> {
        let (key, level) = quadkey_from_string(s)?;
        Self::from_key(key, level)
    }

    /// One cell per key point of a geometry (see [`crate::key_points`]).
    pub fn from_geometry(geom: &Geometry<f64>, level: u32) -> Result<Vec<Self>, GeoPointError> {
        key_points(geom)
            .iter()
            .map(|pt| Self::from_point(pt, level))
            .collect()
    }

    /// Interleaved quadkey
    pub fn key(&self) -> i64 {
        self.key
    }

    /// Zoom level (0-31), where higher values mean smaller tiles
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Tile column, counted eastwards from the antimeridian
    pub fn x(&self) -> u64 {
        self.x
    }

    /// Tile row, counted southwards from the top of the Mercator square
    pub fn y(&self) -> u64 {
        self.y
    }

    pub fn to_quadkey_string(&self) -> String {
        format_quadkey(self.key, self.level)
    }

    /// North-west corner of the tile, the point a quadkey decodes to.
    pub fn origin(&self) -> Point {
        let (lng, lat) = unproject(self.x, self.y, self.level);
        Point::new(lng, lat)
    }

    /// Lng/lat extent of the tile.
    pub fn bounds(&self) -> Rect<f64> {
        let (west, north) = unproject(self.x, self.y, self.level);
        let (east, south) = unproject(self.x + 1, self.y + 1, self.level);
        Rect::new(coord! { x: west, y: south }, coord! { x: east, y: north })
    }

    pub fn center(&self) -> Point {
        let c = self.bounds().center();
        Point::new(c.x, c.y)
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.bounds().to_polygon()
    }

    /// The four child tiles one level down, in quadkey digit order.
    pub fn children(&self) -> Result<[Self; 4], GeoPointError> {
        let level = self.level + 1;
        check_level(level)?;
        let child = |digit: i64| Self::from_key((self.key << 2) | digit, level);
        Ok([child(0)?, child(1)?, child(2)?, child(3)?])
    }

    /// The enclosing tile one level up; `None` at level 0.
    pub fn parent(&self) -> Option<Self> {
        let level = self.level.checked_sub(1)?;
        Some(Self {
            key: self.key >> 2,
            level,
            x: self.x >> 1,
            y: self.y >> 1,
        })
    }

    /// GeoJSON feature of the tile polygon with `quadkey` and `level` properties.
    pub fn to_geojson_feature(&self) -> geojson::Feature {
        let mut properties = Map::new();
        properties.insert("quadkey".to_string(), Value::String(self.to_quadkey_string()));
        properties.insert("level".to_string(), json!(self.level));
        feature(&self.to_polygon(), properties)
    }
}

/// A single geohash cell, `bits` wide.
///
/// # Example
///
/// ```
/// use geopoint_rs::GeoHashCell;
///
/// # fn main() -> Result<(), geopoint_rs::GeoPointError> {
/// let cell = GeoHashCell::from_hash("u4phb4hw")?;
/// assert!(cell.contains(&(9.85, 57.097)));
/// assert_eq!(cell.hash().as_deref(), Some("u4phb4hw"));
/// # Ok(())
/// # }
/// ```
///
/// The integer form and the cached extent cannot drift apart:
///
/// ```compile_fail
/// use geopoint_rs::GeoHashCell;
///
/// let mut cell = GeoHashCell::from_hash("u4phb4hw").unwrap();
/// cell.bit_count = 70;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoHashCell {
    bits: i64,
    bit_count: u32,
    ranges: GeoHashRanges,
}

impl GeoHashCell {
    /// Cell of `precision` characters containing a lng/lat coordinate.
    pub fn from_point(coord: &impl Coordinate, precision: usize) -> Result<Self, GeoPointError> {
        check_precision(precision)?;
        Self::from_point_bits(coord, GEOHASH_BITS_PER_CHAR * precision as u32)
    }

    /// Cell `bit_count` bits wide containing a lng/lat coordinate.
    pub fn from_point_bits(coord: &impl Coordinate, bit_count: u32) -> Result<Self, GeoPointError> {
        let bits = geo_hash_bits(coord, bit_count)?;
        Self::from_bits(bits, bit_count)
    }

    /// Cell of an integer geohash.
    pub fn from_bits(bits: i64, bit_count: u32) -> Result<Self, GeoPointError> {
        let ranges = ranges_from_geo_hash_bits(bits, bit_count)?;
        Ok(Self {
            bits,
            bit_count,
            ranges,
        })
    }

    /// Cell of a geohash string.
    pub fn from_hash(hash: &str) -> Result<Self, GeoPointError> {
        let (bits, bit_count) = geo_hash_to_bits(hash)?;
        Self::from_bits(bits, bit_count)
    }

    /// One cell per key point of a geometry (see [`crate::key_points`]).
    pub fn from_geometry(
        geom: &Geometry<f64>,
        precision: usize,
    ) -> Result<Vec<Self>, GeoPointError> {
        key_points(geom)
            .iter()
            .map(|pt| Self::from_point(pt, precision))
            .collect()
    }

    /// Integer geohash
    pub fn bits(&self) -> i64 {
        self.bits
    }

    /// Number of significant bits in [`GeoHashCell::bits`]
    pub fn bit_count(&self) -> u32 {
        self.bit_count
    }

    /// String form, available when the width is a whole number of characters.
    pub fn hash(&self) -> Option<String> {
        if self.bit_count == 0 || self.bit_count % GEOHASH_BITS_PER_CHAR != 0 {
            return None;
        }
        let precision = self.bit_count / GEOHASH_BITS_PER_CHAR;
        let hash = (0..precision)
            .rev()
            .map(|i| {
                let index = (self.bits >> (i * GEOHASH_BITS_PER_CHAR)) & 0x1F;
                char::from(GEOHASH_ALPHABET[index as usize])
            })
            .collect();
        Some(hash)
    }

    pub fn ranges(&self) -> GeoHashRanges {
        self.ranges
    }

    pub fn bounds(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.ranges.lng_min, y: self.ranges.lat_min },
            coord! { x: self.ranges.lng_max, y: self.ranges.lat_max },
        )
    }

    /// Centre of the cell, the point a geohash decodes to.
    pub fn center(&self) -> Point {
        self.ranges.center()
    }

    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        self.ranges.contains(coord)
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.bounds().to_polygon()
    }

    /// GeoJSON feature of the cell polygon with `geohash` (or `bits`) and
    /// `bit_count` properties.
    pub fn to_geojson_feature(&self) -> geojson::Feature {
        let mut properties = Map::new();
        match self.hash() {
            Some(hash) => properties.insert("geohash".to_string(), Value::String(hash)),
            None => properties.insert("bits".to_string(), json!(self.bits)),
        };
        properties.insert("bit_count".to_string(), json!(self.bit_count));
        feature(&self.to_polygon(), properties)
    }
}

fn feature(polygon: &Polygon<f64>, properties: Map<String, Value>) -> geojson::Feature {
    geojson::Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::from(polygon)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
