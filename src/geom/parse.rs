use crate::error::GeoPointError;
use geo_types::Geometry;
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

fn parse_error(e: impl ToString) -> GeoPointError {
    GeoPointError::GeometryParseError(e.to_string())
}

/// Parses geometry text, WKT or GeoJSON.
///
/// Text starting with `{` is read as GeoJSON (a bare geometry or a single
/// feature), anything else as WKT.
///
/// # Example
/// ```
/// use geopoint_rs::parse_geometry;
/// use geo_types::Geometry;
///
/// # fn main() -> Result<(), geopoint_rs::GeoPointError> {
/// let geom = parse_geometry("POINT(9.85 57.097)")?;
/// assert!(matches!(geom, Geometry::Point(_)));
/// # Ok(())
/// # }
/// ```
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, GeoPointError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(parse_error("Empty geometry"));
    }

    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

/// Parses a GeoJSON geometry or feature into a `geo_types::Geometry`.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, GeoPointError> {
    let geometry = match s.parse::<GeoJson>().map_err(parse_error)? {
        GeoJson::Geometry(geom) => geom,
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| parse_error("Feature has no geometry"))?,
        GeoJson::FeatureCollection(_) => {
            return Err(parse_error(
                "FeatureCollection not supported, key each feature separately",
            ));
        }
    };

    Geometry::try_from(geometry).map_err(parse_error)
}

/// Parses WKT text into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, GeoPointError> {
    let wkt = Wkt::<f64>::from_str(s).map_err(parse_error)?;
    Geometry::try_from(wkt).map_err(|_| parse_error("WKT has no geo-types equivalent"))
}
