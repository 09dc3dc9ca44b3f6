//! JSON persistence for point lists.

use crate::geometry::Point;

/// Saves the given points to a JSON file.
pub fn write_points_json(path: &str, points: &[Point]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(points)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}

/// Loads a list of points from a JSON file.
pub fn read_points_json(path: &str) -> std::io::Result<Vec<Point>> {
    let data = std::fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
