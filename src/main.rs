use geopoint_rs::{DistanceMethod, GeoHashCell, GeoPointError, Point, QuadkeyCell};

fn main() -> Result<(), GeoPointError> {
    let lng = -87.65005229999997;
    let lat = 41.850033;

    let point = Point::new(lng, lat);

    println!("Point: {}", point);
    println!("Quadkey: {}", point.quadkey(15)?);
    println!("Quadkey string: {}", point.quadkey_string(15)?);
    println!("Geohash: {}", point.geo_hash(12)?);

    let tile = QuadkeyCell::from_point(&point, 15)?;
    println!("Tile: ({}, {}) at level {}", tile.x(), tile.y(), tile.level());
    println!("Tile polygon: {:?}", tile.to_polygon());

    let cell = GeoHashCell::from_point(&point, 7)?;
    let center = cell.center();
    println!(
        "Geohash cell centre is {:.1} m away",
        point.geo_distance_from(&center, DistanceMethod::Haversine)
    );

    Ok(())
}
