#![cfg(feature = "serde")]

use arc1960::{
    CoordinateProjector,
    GeodeticCoordinate,
    Hemisphere,
    ProjectedCoordinate,
    UtmZoneSpec,
};

#[test]
fn geodetic_round_trip() {
    let nairobi = GeodeticCoordinate::create(-1.2921, 36.8219).unwrap();

    let json = serde_json::to_string(&nairobi).unwrap();
    assert_eq!(json, r#"{"latitude":-1.2921,"longitude":36.8219}"#);

    let back: GeodeticCoordinate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, nairobi);
}

#[test]
fn short_field_names() {
    let coord: GeodeticCoordinate = serde_json::from_str(r#"{"lat":-1.2921,"lon":36.8219}"#).unwrap();
    assert_eq!(coord, GeodeticCoordinate::create(-1.2921, 36.8219).unwrap());

    let grid: ProjectedCoordinate = serde_json::from_str(r#"{"x":257716.42,"y":9856974.77}"#).unwrap();
    assert_eq!(grid, ProjectedCoordinate::create(257_716.42, 9_856_974.77).unwrap());
}

#[test]
fn out_of_range_coordinate_does_not_deserialize() {
    assert!(serde_json::from_str::<GeodeticCoordinate>(r#"{"lat":200.0,"lon":500.0}"#).is_err());
    assert!(serde_json::from_str::<GeodeticCoordinate>(r#"{"latitude":-1.0,"longitude":180.5}"#).is_err());
}

#[test]
fn zone_spec_is_checked() {
    let zone: UtmZoneSpec = serde_json::from_str(r#"{"zone":37,"hemisphere":"South"}"#).unwrap();
    assert_eq!(zone, UtmZoneSpec::ZONE_37S);

    assert!(serde_json::from_str::<UtmZoneSpec>(r#"{"zone":0,"hemisphere":"North"}"#).is_err());
    assert!(serde_json::from_str::<UtmZoneSpec>(r#"{"zone":61,"hemisphere":"North"}"#).is_err());
    assert_eq!(
        serde_json::to_string(&UtmZoneSpec::new(1, Hemisphere::North).unwrap()).unwrap(),
        r#"{"zone":1,"hemisphere":"North"}"#
    );
}

#[test]
fn deserialized_position_projects() {
    let coord: GeodeticCoordinate = serde_json::from_str(r#"{"lat":-1.2921,"lon":36.8219}"#).unwrap();
    let grid = CoordinateProjector::arc1960_utm37s().project(&coord).unwrap();

    assert!((grid.easting() - 257_716.417).abs() < 0.05);
    assert!((grid.northing() - 9_856_974.765).abs() < 0.05);
}
