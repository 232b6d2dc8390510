use crate::cell::{GeoHashCell, QuadkeyCell};
use crate::coord::Coordinate;
use crate::error::GeoPointError;
use crate::geom::{key_points, parse_geometry};
use geo_types::{Point, Polygon};
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use wkt::ToWkt;

enum SourceIndices {
    Geometry(usize),
    Coordinates { x_idx: usize, y_idx: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry
    GeometryColumn(String),
    /// Separate longitude and latitude columns
    CoordinateColumns { x_column: String, y_column: String },
}

/// Which key is written for each point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Integer quadkey, column `quadkey`
    Quadkey { level: u32 },
    /// Base-4 quadkey string, column `quadkey`
    QuadkeyString { level: u32 },
    /// Base-32 geohash, column `geohash`
    GeoHash { precision: usize },
}

impl KeyKind {
    fn column_name(&self) -> &'static str {
        match self {
            KeyKind::Quadkey { .. } | KeyKind::QuadkeyString { .. } => "quadkey",
            KeyKind::GeoHash { .. } => "geohash",
        }
    }

    /// Key text and cell polygon for one point.
    fn encode(&self, pt: &impl Coordinate) -> Result<(String, Polygon<f64>), GeoPointError> {
        match *self {
            KeyKind::Quadkey { level } => {
                let cell = QuadkeyCell::from_point(pt, level)?;
                Ok((cell.key().to_string(), cell.to_polygon()))
            }
            KeyKind::QuadkeyString { level } => {
                let cell = QuadkeyCell::from_point(pt, level)?;
                Ok((cell.to_quadkey_string(), cell.to_polygon()))
            }
            KeyKind::GeoHash { precision } => {
                let cell = GeoHashCell::from_point(pt, precision)?;
                let hash = cell
                    .hash()
                    .ok_or(GeoPointError::PrecisionOutOfRange(precision))?;
                Ok((hash, cell.to_polygon()))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CsvKeyConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub key: KeyKind,
    pub include_cell_geometry: Option<GeometryFormat>,
}

impl CsvKeyConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use geopoint_rs::{CsvKeyConfig, KeyKind};
    ///
    /// let config = CsvKeyConfig::new("geometry", KeyKind::GeoHash { precision: 8 });
    /// ```
    pub fn new(geometry_column: impl Into<String>, key: KeyKind) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            exclude_columns: Vec::new(),
            key,
            include_cell_geometry: None,
        }
    }

    /// Create config for a CSV with separate longitude/latitude columns.
    ///
    /// # Example
    /// ```
    /// use geopoint_rs::{CsvKeyConfig, KeyKind};
    ///
    /// let key = KeyKind::Quadkey { level: 15 };
    /// let config = CsvKeyConfig::from_coords("Longitude", "Latitude", key);
    /// ```
    pub fn from_coords(
        x_column: impl Into<String>,
        y_column: impl Into<String>,
        key: KeyKind,
    ) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                x_column: x_column.into(),
                y_column: y_column.into(),
            },
            exclude_columns: Vec::new(),
            key,
            include_cell_geometry: None,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include the keyed cell's polygon in the output.
    pub fn with_cell_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_cell_geometry = Some(format);
        self
    }
}

pub trait CsvToKeys {
    fn to_keyed_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvKeyConfig,
    ) -> Result<(), GeoPointError>;
}

impl<P: AsRef<Path>> CsvToKeys for P {
    fn to_keyed_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvKeyConfig,
    ) -> Result<(), GeoPointError> {
        csv_to_keyed_csv(self, output_path, config)
    }
}

fn csv_error(e: impl ToString) -> GeoPointError {
    GeoPointError::CsvError(e.to_string())
}

fn find_column(
    headers: &csv::StringRecord,
    name: &str,
    role: &str,
) -> Result<usize, GeoPointError> {
    if name.is_empty() {
        return Err(csv_error(format!("{} column name cannot be empty", role)));
    }
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| csv_error(format!("{} column '{}' not found", role, name)))
}

fn parse_coordinate(
    record: &csv::StringRecord,
    idx: usize,
    role: &str,
) -> Result<f64, GeoPointError> {
    let raw = record
        .get(idx)
        .ok_or_else(|| csv_error(format!("Missing {} column at index {}", role, idx)))?
        .trim();
    raw.parse()
        .map_err(|_| csv_error(format!("Invalid {} coordinate: '{}'", role, raw)))
}

fn polygon_text(polygon: &Polygon<f64>, format: GeometryFormat) -> String {
    match format {
        GeometryFormat::Wkt => polygon.wkt_string(),
        GeometryFormat::GeoJson => geojson::Geometry::from(polygon).to_string(),
    }
}

/// Copies a CSV file, prefixing each row with the quadkey or geohash of its location.
///
/// Rows are streamed. The location columns are dropped from the output. A geometry
/// that reduces to several key points (see [`crate::key_points`]) produces one
/// output row per point; one that reduces to none is skipped.
///
/// # Example with geometry column (WKT or GeoJSON)
///
/// ```no_run
/// use geopoint_rs::{csv_to_keyed_csv, CsvKeyConfig, GeometryFormat, KeyKind};
///
/// let config = CsvKeyConfig::new("geometry", KeyKind::GeoHash { precision: 7 })
///     .exclude(vec!["Geo Point".into()])
///     .with_cell_geometry(GeometryFormat::Wkt);
///
/// csv_to_keyed_csv("input.csv", "output.csv", &config).unwrap();
/// ```
///
/// # Example with coordinate columns
///
/// ```no_run
/// use geopoint_rs::{csv_to_keyed_csv, CsvKeyConfig, KeyKind};
///
/// let config = CsvKeyConfig::from_coords("lon", "lat", KeyKind::QuadkeyString { level: 16 });
///
/// csv_to_keyed_csv("stops.csv", "output.csv", &config).unwrap();
/// ```
pub fn csv_to_keyed_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvKeyConfig,
) -> Result<(), GeoPointError> {
    let file = File::open(csv_path).map_err(|e| GeoPointError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().map_err(csv_error)?.clone();

    // Location columns never reach the output
    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = find_column(&headers, col, "Geometry")?;
            (SourceIndices::Geometry(idx), HashSet::from([idx]))
        }
        CoordinateSource::CoordinateColumns { x_column, y_column } => {
            let x_idx = find_column(&headers, x_column, "X")?;
            let y_idx = find_column(&headers, y_column, "Y")?;
            (
                SourceIndices::Coordinates { x_idx, y_idx },
                HashSet::from([x_idx, y_idx]),
            )
        }
    };

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| GeoPointError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec![config.key.column_name()];
    if config.include_cell_geometry.is_some() {
        header_row.push("cell_geometry");
    }
    header_row.extend(
        headers
            .iter()
            .enumerate()
            .filter(|(i, _)| !exclude_indices.contains(i))
            .map(|(_, h)| h),
    );
    writer.write_record(&header_row).map_err(csv_error)?;

    let mut rows_in = 0usize;
    let mut rows_out = 0usize;

    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(csv_error)?;
        rows_in += 1;

        let points: Vec<Point<f64>> = match &source_indices {
            SourceIndices::Geometry(idx) => {
                let geom_str = record
                    .get(*idx)
                    .ok_or_else(|| csv_error(format!("Missing geometry column at index {}", idx)))?;
                key_points(&parse_geometry(geom_str)?)
            }
            SourceIndices::Coordinates { x_idx, y_idx } => {
                let x = parse_coordinate(&record, *x_idx, "X")?;
                let y = parse_coordinate(&record, *y_idx, "Y")?;
                vec![Point::new(x, y)]
            }
        };

        if points.is_empty() {
            log::warn!("row {}: geometry has no key points, skipped", row + 1);
            continue;
        }

        for pt in &points {
            let (key, polygon) = config.key.encode(pt)?;

            let mut out: Vec<String> = vec![key];
            if let Some(format) = config.include_cell_geometry {
                out.push(polygon_text(&polygon, format));
            }
            out.extend(
                record
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !exclude_indices.contains(i))
                    .map(|(_, field)| field.to_string()),
            );
            writer.write_record(&out).map_err(csv_error)?;
            rows_out += 1;
        }
    }

    writer.flush().map_err(csv_error)?;
    log::debug!("keyed {} input rows into {} output rows", rows_in, rows_out);

    Ok(())
}
