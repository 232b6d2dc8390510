pub mod batch;
pub mod csv;

pub use batch::PointsToKeys;
pub use csv::{
    CoordinateSource, CsvKeyConfig, CsvToKeys, GeometryFormat, KeyKind, csv_to_keyed_csv,
};
