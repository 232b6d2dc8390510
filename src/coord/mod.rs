mod mercator;

pub use mercator::{project, unproject};

use geo_types::{Coord, Point};

/// Trait for types that can provide longitude/latitude coordinates.
///
/// Implemented for `(f64, f64)` tuples, `geo_types::Point<f64>`,
/// `geo_types::Coord<f64>` and [`crate::Point`]. Tuples are read as `(lng, lat)`.
/// This allows the codecs to accept any of them.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

impl Coordinate for crate::point::Point {
    fn x(&self) -> f64 {
        crate::point::Point::x(self)
    }
    fn y(&self) -> f64 {
        crate::point::Point::y(self)
    }
}

impl<C: Coordinate> Coordinate for &C {
    fn x(&self) -> f64 {
        (**self).x()
    }
    fn y(&self) -> f64 {
        (**self).y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (100.0, 20.0);
        assert_eq!(tuple.x(), 100.0);
        assert_eq!(tuple.y(), 20.0);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(100.0, 20.0);
        assert_eq!(Coordinate::x(&point), 100.0);
        assert_eq!(Coordinate::y(&point), 20.0);
    }

    #[test]
    fn test_coordinate_trait_coord() {
        let c = coord! { x: -3.5, y: 41.0 };
        assert_eq!(Coordinate::x(&c), -3.5);
        assert_eq!(Coordinate::y(&c), 41.0);
    }

    #[test]
    fn test_coordinate_trait_crate_point() {
        let p = crate::Point::new(12.5, -8.0);
        assert_eq!(Coordinate::x(&p), 12.5);
        assert_eq!(Coordinate::y(&p), -8.0);
    }
}
