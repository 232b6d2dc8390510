use std::f64::consts::PI;

/// Beyond this sine of latitude the projection is pinned to the first or last row.
const SIN_LAT_LIMIT: f64 = 0.9999;

/// Projects a lng/lat pair onto the spherical Mercator tile grid at `level`.
///
/// Returns integer tile coordinates `(x, y)`, each in `[0, 2^level)`, with `y`
/// growing southwards. Inputs outside the valid domain are clamped onto the
/// grid edge.
///
/// # Example
/// ```
/// use geopoint_rs::project;
///
/// let (x, y) = project(-87.65005229999997, 41.850033, 15);
/// assert_eq!((x, y), (8405, 12182));
/// ```
pub fn project(lng: f64, lat: f64, level: u32) -> (u64, u64) {
    let factor = 1u64 << level;
    let max_tiles = factor as f64;
    let last = factor - 1;

    let x = ((lng / 360.0 + 0.5) * max_tiles) as u64;

    let sin_lat = (lat * PI / 180.0).sin();
    let y = if sin_lat < -SIN_LAT_LIMIT {
        last
    } else if sin_lat > SIN_LAT_LIMIT {
        0
    } else {
        let merc = 0.5 + 0.5 * ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (-2.0 * PI);
        (merc * max_tiles) as u64
    };

    (x.min(last), y.min(last))
}

/// Inverse of [`project`]: returns the lng/lat of the north-west corner of tile `(x, y)`.
pub fn unproject(x: u64, y: u64, level: u32) -> (f64, f64) {
    let max_tiles = (1u64 << level) as f64;

    let lng = 360.0 * (x as f64 / max_tiles - 0.5);
    let lat = (2.0 * (PI - 2.0 * PI * y as f64 / max_tiles).exp().atan()).to_degrees() - 90.0;

    (lng, lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_reference_point() {
        let (x, y) = project(-87.65005229999997, 41.850033, 15);
        assert_eq!(x, 8405);
        assert_eq!(y, 12182);
    }

    #[test]
    fn test_level_zero_is_single_tile() {
        assert_eq!(project(-87.6, 41.8, 0), (0, 0));
        assert_eq!(project(179.9, -60.0, 0), (0, 0));
    }

    #[test]
    fn test_project_clamps_to_grid() {
        let level = 10;
        let last = (1u64 << level) - 1;

        assert_eq!(project(180.0, 0.0, level).0, last);
        assert_eq!(project(-200.0, 0.0, level).0, 0);
        assert_eq!(project(0.0, 89.9, level).1, 0);
        assert_eq!(project(0.0, -89.9, level).1, last);
    }

    #[test]
    fn test_unproject_origin_corner() {
        let (lng, lat) = unproject(0, 0, 3);
        assert!((lng + 180.0).abs() < 1e-9);
        assert!((lat - 85.0511287798).abs() < 1e-6);
    }

    #[test]
    fn test_project_unproject_roundtrip() {
        let level = 30;
        let (lng, lat) = (-122.32, 49.03);
        let (x, y) = project(lng, lat, level);
        let (back_lng, back_lat) = unproject(x, y, level);

        assert!((back_lng - lng).abs() < 1e-6);
        assert!((back_lat - lat).abs() < 1e-6);
    }
}
