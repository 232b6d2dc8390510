use crate::coord::Coordinate;
use crate::error::GeoPointError;
use crate::geom::parse_geometry;
use crate::index::{
    EARTH_RADIUS, GeoHashOptions, geo_hash, geo_hash_bits, geo_hash_with, point_from_geo_hash,
    point_from_geo_hash_int64, point_from_quadkey, point_from_quadkey_string, quadkey,
    quadkey_string,
};
use geo_types::Geometry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;
use wkt::ToWkt;

/// A simple X/Y or Lng/Lat 2D point, in that order.
///
/// No range is enforced at construction. The codecs expect longitudes in
/// `[-180, 180]` and latitudes in `[-90, 90]`.
///
/// # Example
///
/// ```
/// use geopoint_rs::Point;
///
/// # fn main() -> Result<(), geopoint_rs::GeoPointError> {
/// let chicago = Point::new(-87.65005229999997, 41.850033);
/// assert_eq!(chicago.quadkey(15)?, 212521785);
/// assert_eq!(chicago.quadkey_string(15)?, "030222231030321");
///
/// let hash = chicago.geo_hash(7)?;
/// let back = Point::from_geo_hash(&hash)?;
/// assert!(chicago.geo_distance_from(&back, Default::default()) < 500.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    x: f64,
    y: f64,
}

/// A displacement between two points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Formula used by [`Point::geo_distance_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMethod {
    /// Great-circle distance using the haversine formula
    #[default]
    Haversine,
    /// Pythagoras on an equirectangular projection; faster, fine for short distances
    Equirectangular,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a point at the north-west corner of a quadkey's tile.
    pub fn from_quadkey(key: i64, level: u32) -> Result<Self, GeoPointError> {
        point_from_quadkey(key, level)
    }

    /// Creates a point from a base-4 quadkey string.
    pub fn from_quadkey_string(key: &str) -> Result<Self, GeoPointError> {
        point_from_quadkey_string(key)
    }

    /// Creates a point at the centre of a geohash cell.
    pub fn from_geo_hash(hash: &str) -> Result<Self, GeoPointError> {
        point_from_geo_hash(hash)
    }

    /// Creates a point at the centre of an integer geohash cell `bits` wide.
    pub fn from_geo_hash_int64(hash: i64, bits: u32) -> Result<Self, GeoPointError> {
        point_from_geo_hash_int64(hash, bits)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Longitude, the horizontal component.
    pub fn lng(&self) -> f64 {
        self.x
    }

    /// Latitude, the vertical component.
    pub fn lat(&self) -> f64 {
        self.y
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn subtract(&self, point: &Point) -> Vector {
        Vector::new(self.x - point.x, self.y - point.y)
    }

    /// Euclidean distance in coordinate units.
    pub fn distance_from<C: Coordinate>(&self, other: &C) -> f64 {
        self.squared_distance_from(other).sqrt()
    }

    /// Squared Euclidean distance, avoids the square root.
    pub fn squared_distance_from<C: Coordinate>(&self, other: &C) -> f64 {
        let d0 = other.x() - self.x;
        let d1 = other.y() - self.y;
        d0 * d0 + d1 * d1
    }

    /// Geodesic distance in meters on a sphere of radius [`EARTH_RADIUS`].
    pub fn geo_distance_from<C: Coordinate>(&self, other: &C, method: DistanceMethod) -> f64 {
        let d_lat = (other.y() - self.lat()).to_radians();
        let d_lng = (other.x() - self.lng()).to_radians();

        match method {
            DistanceMethod::Haversine => {
                let d_lat_sin = (d_lat / 2.0).sin();
                let d_lng_sin = (d_lng / 2.0).sin();
                let a = d_lat_sin * d_lat_sin
                    + self.lat().to_radians().cos()
                        * other.y().to_radians().cos()
                        * d_lng_sin
                        * d_lng_sin;

                2.0 * EARTH_RADIUS * a.sqrt().atan2((1.0 - a).sqrt())
            }
            DistanceMethod::Equirectangular => {
                let x = d_lng * ((self.lat() + other.y()) / 2.0).to_radians().cos();
                (d_lat * d_lat + x * x).sqrt() * EARTH_RADIUS
            }
        }
    }

    /// Initial bearing in degrees (-180 to 180, 0 is north) of the great
    /// circle from this point to `other`.
    pub fn bearing_to<C: Coordinate>(&self, other: &C) -> f64 {
        let d_lng = (other.x() - self.lng()).to_radians();
        let self_lat = self.lat().to_radians();
        let other_lat = other.y().to_radians();

        let y = d_lng.sin() * other_lat.cos();
        let x = self_lat.cos() * other_lat.sin() - self_lat.sin() * other_lat.cos() * d_lng.cos();

        y.atan2(x).to_degrees()
    }

    pub fn quadkey(&self, level: u32) -> Result<i64, GeoPointError> {
        quadkey(self, level)
    }

    pub fn quadkey_string(&self, level: u32) -> Result<String, GeoPointError> {
        quadkey_string(self, level)
    }

    pub fn geo_hash(&self, precision: usize) -> Result<String, GeoPointError> {
        geo_hash(self, precision)
    }

    pub fn geo_hash_with(&self, options: GeoHashOptions) -> Result<String, GeoPointError> {
        geo_hash_with(self, options)
    }

    /// Integer geohash `bits` wide; compare only hashes of equal width.
    pub fn geo_hash_int64(&self, bits: u32) -> Result<i64, GeoPointError> {
        geo_hash_bits(self, bits)
    }

    /// WKT text, e.g. `POINT(30.5 10.5)`.
    pub fn to_wkt(&self) -> String {
        geo_types::Point::from(*self).wkt_string()
    }

    /// GeoJSON point geometry.
    pub fn to_geojson(&self) -> geojson::Geometry {
        geojson::Geometry::from(&geo_types::Point::from(*self))
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, vector: Vector) -> Point {
        Point::new(self.x + vector.dx, self.y + vector.dy)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, other: Point) -> Vector {
        self.subtract(&other)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Serialized form, `[x, y]`.
impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        p.to_array()
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(p: geo_types::Point<f64>) -> Self {
        Point::new(p.x(), p.y())
    }
}

impl From<Point> for geo_types::Point<f64> {
    fn from(p: Point) -> Self {
        geo_types::Point::new(p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wkt())
    }
}

/// Parses WKT (`POINT(1 2.5)`) or GeoJSON point text.
impl FromStr for Point {
    type Err = GeoPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_geometry(s)? {
            Geometry::Point(p) => Ok(p.into()),
            _ => Err(GeoPointError::UnsupportedGeometry(
                "Expected a point geometry".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_new_point() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(p.x(), 1.0);
        assert_eq!(p.lng(), 1.0);
        assert_eq!(p.y(), 2.0);
        assert_eq!(p.lat(), 2.0);
        assert_eq!(p.to_array(), [1.0, 2.0]);
    }

    #[test]
    fn test_distance_from() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);

        assert_eq!(p1.distance_from(&p2), 5.0);
        assert_eq!(p2.distance_from(&p1), 5.0);
        assert_eq!(p1.squared_distance_from(&p2), 25.0);
        assert_eq!(p2.squared_distance_from(&(0.0, 0.0)), 25.0);
    }

    #[test]
    fn test_geo_distance_from() {
        let p1 = Point::new(-1.8444, 53.1506);
        let p2 = Point::new(0.1406, 52.2047);

        let d = p1.geo_distance_from(&p2, DistanceMethod::Haversine);
        assert!((d - 170389.801924).abs() < EPSILON, "haversine {}", d);

        let d = p1.geo_distance_from(&p2, DistanceMethod::Equirectangular);
        assert!((d - 170400.503437).abs() < EPSILON, "equirectangular {}", d);

        assert_eq!(DistanceMethod::default(), DistanceMethod::Haversine);
    }

    #[test]
    fn test_bearing_to() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(0.0, 1.0);
        assert!(p1.bearing_to(&p2).abs() < 1e-9);
        assert!((p2.bearing_to(&p1) - 180.0).abs() < 1e-9);

        let p2 = Point::new(1.0, 0.0);
        assert!((p1.bearing_to(&p2) - 90.0).abs() < 1e-9);
        assert!((p2.bearing_to(&p1) + 90.0).abs() < 1e-9);

        let p1 = Point::new(-1.8444, 53.1506);
        let p2 = Point::new(0.1406, 52.2047);
        assert!((p1.bearing_to(&p2) - 127.373351).abs() < EPSILON);
    }

    #[test]
    fn test_add_and_subtract() {
        let p = Point::new(1.0, 2.0);
        let v = Vector::new(3.0, 4.0);
        assert_eq!(p.add(v), Point::new(4.0, 6.0));
        assert_eq!(p + v, Point::new(4.0, 6.0));

        let p1 = Point::new(3.0, 4.0);
        let p2 = Point::new(1.0, 3.0);
        assert_eq!(p1.subtract(&p2), Vector::new(2.0, 1.0));
        assert_eq!(p1 - p2, Vector::new(2.0, 1.0));
    }

    #[test]
    fn test_equal() {
        assert_eq!(Point::new(1.0, 0.0), Point::new(1.0, 0.0));
        assert_ne!(Point::new(1.0, 0.0), Point::new(2.0, 3.0));
        assert_ne!(Point::new(2.0, 3.0), Point::new(2.0, 4.0));
    }

    #[test]
    fn test_to_wkt_and_display() {
        let p = Point::new(1.0, 2.5);
        assert_eq!(p.to_wkt(), "POINT(1 2.5)");
        assert_eq!(p.to_string(), "POINT(1 2.5)");
    }

    #[test]
    fn test_to_geojson() {
        let geom = Point::new(1.0, 2.5).to_geojson();
        match geom.value {
            geojson::Value::Point(coords) => assert_eq!(coords, vec![1.0, 2.5]),
            other => panic!("Expected Point, got {:?}", other),
        }
    }

    #[test]
    fn test_from_str() -> Result<(), GeoPointError> {
        let p: Point = "POINT(30.5 10.5)".parse()?;
        assert_eq!(p, Point::new(30.5, 10.5));

        let p: Point = r#"{"type":"Point","coordinates":[-0.1,51.5]}"#.parse()?;
        assert_eq!(p, Point::new(-0.1, 51.5));

        let result = "LINESTRING(0 0, 1 1)".parse::<Point>();
        assert!(matches!(result, Err(GeoPointError::UnsupportedGeometry(_))));
        Ok(())
    }

    #[test]
    fn test_geo_types_conversion() {
        let p = Point::new(-2.248, 53.481);
        let gp: geo_types::Point<f64> = p.into();
        assert_eq!(gp.x(), -2.248);
        assert_eq!(Point::from(gp), p);
    }

    #[test]
    fn test_serde_as_pair() -> Result<(), serde_json::Error> {
        let p = Point::new(9.85, 57.097);
        let json = serde_json::to_string(&p)?;
        assert_eq!(json, "[9.85,57.097]");
        let back: Point = serde_json::from_str(&json)?;
        assert_eq!(back, p);

        let points: Vec<Point> = serde_json::from_str("[[1.0,2.5],[-3.0,4.0]]")?;
        assert_eq!(points, vec![Point::new(1.0, 2.5), Point::new(-3.0, 4.0)]);
        assert!(serde_json::from_str::<Point>(r#"{"x":1.0,"y":2.0}"#).is_err());
        Ok(())
    }

    #[test]
    fn test_codec_methods() -> Result<(), GeoPointError> {
        let p = Point::new(9.85, 57.097);
        assert_eq!(p.geo_hash(8)?, "u4phb4hw");
        assert_eq!(p.geo_hash_with(GeoHashOptions::default())?.len(), 12);
        assert_eq!(p.geo_hash_int64(40)?, crate::geo_hash_bits(&p, 40)?);

        let key = p.quadkey(20)?;
        let back = Point::from_quadkey(key, 20)?;
        assert!(p.distance_from(&back) < 360.0 / (1u64 << 20) as f64 * 2.0);

        let s = p.quadkey_string(20)?;
        assert_eq!(Point::from_quadkey_string(&s)?, back);

        let hashed = Point::from_geo_hash_int64(p.geo_hash_int64(60)?, 60)?;
        assert_eq!(hashed, Point::from_geo_hash(&p.geo_hash(12)?)?);
        Ok(())
    }
}
