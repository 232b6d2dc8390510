mod parse;

pub use parse::{parse_geojson, parse_geometry, parse_wkt};

use geo::Centroid;
use geo_types::{Geometry, Point};

/// Reduces a geometry to the points that get keyed.
///
/// Points and multi-points key each vertex. Lines, polygons and their
/// multi-part forms key the centroid of each part. Collections are flattened.
pub fn key_points(geom: &Geometry<f64>) -> Vec<Point<f64>> {
    match geom {
        Geometry::Point(pt) => vec![*pt],
        Geometry::MultiPoint(mp) => mp.0.clone(),
        Geometry::Line(line) => vec![line.centroid()],
        Geometry::LineString(line) => line.centroid().into_iter().collect(),
        Geometry::MultiLineString(mls) => mls.0.iter().filter_map(|l| l.centroid()).collect(),
        Geometry::Polygon(poly) => poly.centroid().into_iter().collect(),
        Geometry::MultiPolygon(mp) => mp.0.iter().filter_map(|p| p.centroid()).collect(),
        Geometry::Rect(rect) => vec![rect.centroid()],
        Geometry::Triangle(tri) => vec![tri.centroid()],
        Geometry::GeometryCollection(gc) => gc.iter().flat_map(key_points).collect(),
    }
}
