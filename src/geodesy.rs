//! Geodetic to geocentric conversion collaborators.

/// Converter from geodetic coordinates on a reference ellipsoid to geocentric
/// (Earth-Centered-Earth-Fixed) Cartesian coordinates.
///
/// Implementations must be deterministic and side-effect-free.  Latitude and
/// longitude are in degrees, height is the ellipsoidal height in metres; the
/// result is the geocentric `(x, y, z)` triple in metres.
pub trait GeocentricConverter {
    fn to_geocentric(&self, latitude: f64, longitude: f64, height: f64) -> (f64, f64, f64);
}

/// Closed-form conversion on the WGS84 reference ellipsoid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wgs84Ellipsoid;

impl Wgs84Ellipsoid {
    /// Semi-major axis in metres.
    pub const SEMI_MAJOR_AXIS: f64 = 6_378_137.0;
    /// Inverse flattening.
    pub const INVERSE_FLATTENING: f64 = 298.257_223_563;
}

impl GeocentricConverter for Wgs84Ellipsoid {
    fn to_geocentric(&self, latitude: f64, longitude: f64, height: f64) -> (f64, f64, f64) {
        let lat = latitude.to_radians();
        let lon = longitude.to_radians();
        let f = 1.0 / Self::INVERSE_FLATTENING;
        let e2 = f * (2.0 - f);
        let sin_lat = lat.sin();
        let cos_lat = lat.cos();
        // Prime vertical radius of curvature at the latitude.
        let n = Self::SEMI_MAJOR_AXIS / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        let x = (n + height) * cos_lat * lon.cos();
        let y = (n + height) * cos_lat * lon.sin();
        let z = (n * (1.0 - e2) + height) * sin_lat;
        (x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equator_prime_meridian_on_semi_major_axis() {
        let (x, y, z) = Wgs84Ellipsoid.to_geocentric(0.0, 0.0, 0.0);
        assert!((x - Wgs84Ellipsoid::SEMI_MAJOR_AXIS).abs() < 1e-6);
        assert!(y.abs() < 1e-6);
        assert!(z.abs() < 1e-6);
    }

    #[test]
    fn north_pole_on_semi_minor_axis() {
        let (x, y, z) = Wgs84Ellipsoid.to_geocentric(90.0, 0.0, 0.0);
        // b = a * (1 - f)
        let b = Wgs84Ellipsoid::SEMI_MAJOR_AXIS * (1.0 - 1.0 / Wgs84Ellipsoid::INVERSE_FLATTENING);
        assert!(x.abs() < 1e-6);
        assert!(y.abs() < 1e-6);
        assert!((z - b).abs() < 1e-6);
    }

    #[test]
    fn height_adds_along_the_normal() {
        let (x0, _, _) = Wgs84Ellipsoid.to_geocentric(0.0, 0.0, 0.0);
        let (x1, _, _) = Wgs84Ellipsoid.to_geocentric(0.0, 0.0, 100.0);
        assert!((x1 - x0 - 100.0).abs() < 1e-6);
    }
}
