//! # geopoint-rs
//!
//! Quadkey and geohash encoding for longitude/latitude points.
//!
//! ### 1. `Point` - Single Point Operations
//!
//! ```
//! use geopoint_rs::{DistanceMethod, Point};
//!
//! # fn main() -> Result<(), geopoint_rs::GeoPointError> {
//! let aalborg = Point::new(9.85, 57.097);
//! assert_eq!(aalborg.geo_hash(8)?, "u4phb4hw");
//!
//! let key = aalborg.quadkey(20)?;
//! let tile_corner = Point::from_quadkey(key, 20)?;
//! assert!(aalborg.geo_distance_from(&tile_corner, DistanceMethod::Haversine) < 100.0);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `QuadkeyCell` / `GeoHashCell` - Cells as Polygons
//!
//! ```
//! use geopoint_rs::{GeoHashCell, QuadkeyCell};
//!
//! # fn main() -> Result<(), geopoint_rs::GeoPointError> {
//! let tile = QuadkeyCell::from_quadkey_string("030222231030321")?;
//! assert_eq!((tile.x(), tile.y()), (8405, 12182));
//! let polygon = tile.to_polygon();
//!
//! let cell = GeoHashCell::from_hash("u4phb4hw")?;
//! assert!(cell.contains(&(9.85, 57.097)));
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `PointsToKeys` / `CsvToKeys` - Bulk Keying
//!
//! ```no_run
//! use geopoint_rs::{CsvKeyConfig, CsvToKeys, GeometryFormat, KeyKind, PointsToKeys};
//!
//! let points = vec![(9.85, 57.097), (-122.32, 49.03)];
//! let hashes = points.to_geo_hashes(6).unwrap();
//!
//! let config = CsvKeyConfig::new("geometry", KeyKind::Quadkey { level: 14 })
//!     .exclude(vec!["Geo Point".into()])
//!     .with_cell_geometry(GeometryFormat::Wkt);
//!
//! "input.csv".to_keyed_csv("output.csv", &config).unwrap();
//! ```
//!

pub mod cell;
pub mod coord;
pub mod error;
pub mod geom;
pub mod index;
pub mod io;
pub mod point;

pub use cell::{GeoHashCell, QuadkeyCell};
pub use coord::{Coordinate, project, unproject};
pub use error::GeoPointError;
pub use geom::{key_points, parse_geojson, parse_geometry, parse_wkt};
pub use index::{
    EARTH_RADIUS, GEOHASH_ALPHABET, GEOHASH_PRECISION, GeoHashOptions, GeoHashRanges,
    MAX_GEOHASH_BITS, MAX_GEOHASH_PRECISION, MAX_QUADKEY_LEVEL, geo_hash, geo_hash_bits,
    geo_hash_to_bits, geo_hash_with, point_from_geo_hash, point_from_geo_hash_int64,
    point_from_quadkey, point_from_quadkey_string, quadkey, quadkey_from_string, quadkey_string,
    quadkey_to_string, ranges_from_geo_hash, ranges_from_geo_hash_bits,
};
pub use io::{
    CoordinateSource, CsvKeyConfig, CsvToKeys, GeometryFormat, KeyKind, PointsToKeys,
    csv_to_keyed_csv,
};
pub use point::{DistanceMethod, Point, Vector};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_quadkey() -> Result<(), GeoPointError> {
        let chicago = Point::new(-87.65005229999997, 41.850033);

        let key = quadkey(&chicago, 15)?;
        let text = quadkey_to_string(key, 15)?;
        assert_eq!(text, "030222231030321");
        assert_eq!(quadkey_from_string(&text)?, (key, 15));

        let cell = QuadkeyCell::from_point(&chicago, 15)?;
        assert_eq!(cell.key(), key);
        assert!(geo::Contains::contains(&cell.to_polygon(), &geo_types::Point::from(chicago)));

        let corner = point_from_quadkey_string(&text)?;
        assert!(corner.lng() <= chicago.lng());
        assert!(corner.lat() >= chicago.lat());
        Ok(())
    }

    #[test]
    fn test_end_to_end_geohash() -> Result<(), GeoPointError> {
        let pt = Point::new(138.5367, -34.7666);
        let hash = pt.geo_hash_with(GeoHashOptions { precision: 9 })?;
        assert_eq!(hash, "r1fd0qzmg");

        let (bits, bit_count) = geo_hash_to_bits(&hash)?;
        assert_eq!(bit_count, 45);
        assert_eq!(bits, pt.geo_hash_int64(45)?);

        let ranges = ranges_from_geo_hash(&hash)?;
        assert!(ranges.contains(&pt));
        assert_eq!(point_from_geo_hash(&hash)?, ranges.center());
        Ok(())
    }

    #[test]
    fn test_geometry_text_to_cells() -> Result<(), GeoPointError> {
        let geom = parse_geometry(
            r#"{"type":"MultiPoint","coordinates":[[9.85,57.097],[-76.1749,39.235]]}"#,
        )?;
        let cells = GeoHashCell::from_geometry(&geom, 9)?;
        let hashes: Vec<_> = cells.iter().filter_map(|c| c.hash()).collect();
        assert_eq!(hashes, vec!["u4phb4hw1".to_string(), "dqcz4we0k".to_string()]);
        Ok(())
    }

    #[test]
    fn test_point_text_round_trip() -> Result<(), GeoPointError> {
        let pt: Point = "POINT(1 2.5)".parse()?;
        assert_eq!(pt, Point::new(1.0, 2.5));
        assert_eq!(pt.to_string(), "POINT(1 2.5)");
        Ok(())
    }
}
