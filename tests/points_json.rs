use survey_point::crs::Crs;
use survey_point::geometry::Point;
use survey_point::io::{read_points_json, write_points_json};

#[test]
fn round_trip_preserves_all_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("points.json");
    let path = path.to_str().unwrap();

    let pts = vec![
        Point::new(1.0, 2.0, 3.0, 4.0, Crs::wgs84()),
        Point::xyz(-5.0, 0.25, 9.5),
    ];
    write_points_json(path, &pts).unwrap();
    let back = read_points_json(path).unwrap();
    assert_eq!(back, pts);
    assert_eq!(back[0].crs, Crs::wgs84());
}

#[test]
fn malformed_file_is_invalid_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "not json").unwrap();
    let err = read_points_json(path.to_str().unwrap()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}
