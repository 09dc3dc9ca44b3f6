//! The 4D survey point primitive used throughout the crate.

use nalgebra::Vector3;

use crate::crs::Crs;
use crate::geodesy::GeocentricConverter;
use crate::geometry::MIN_POINT_SEPARATION;

/// Representation of a Cartesian point with an optional time component and an
/// optional coordinate reference system tag.
///
/// A `Point` is a plain value: equality is structural over all five fields
/// and every transforming operation returns a new `Point`, the receiver is
/// never mutated.  Coordinates are not validated; NaN and infinity propagate
/// arithmetically and are the caller's responsibility.
///
/// Every binary operation between two points (deltas, distances, coincidence)
/// is defined only when both points carry compatible CRS tags, see
/// [`Crs::compatible_with`].  On mismatch those operations return `None`
/// rather than computing a physically meaningless number.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Time component; `0.0` means "no time component".
    pub t: f64,
    pub crs: Crs,
}

impl Point {
    /// Creates a point with explicit coordinates, time and CRS tag.
    pub fn new(x: f64, y: f64, z: f64, t: f64, crs: Crs) -> Self {
        Self { x, y, z, t, crs }
    }

    /// Creates a planar point with no elevation, time or CRS tag.
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 0.0, Crs::none())
    }

    /// Creates a spatial point with no time or CRS tag.
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0, Crs::none())
    }

    /// Creates a spatial point tagged with `crs` and no time component.
    pub fn with_crs(x: f64, y: f64, z: f64, crs: Crs) -> Self {
        Self::new(x, y, z, 0.0, crs)
    }

    /// Rebuilds a point from a displacement vector plus the metadata the
    /// vector does not carry.
    pub fn from_vector(v: Vector3<f64>, t: f64, crs: Crs) -> Self {
        Self::new(v.x, v.y, v.z, t, crs)
    }

    /// Returns all five fields as a tuple.
    pub fn values(&self) -> (f64, f64, f64, f64, Crs) {
        (self.x, self.y, self.z, self.t, self.crs.clone())
    }

    /// Returns the spatial coordinates as a tuple.
    pub fn coords(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Returns the spatial coordinates plus the time component.
    pub fn coords_t(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.z, self.t)
    }

    /// Returns the four numeric fields as an array, omitting the CRS tag.
    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.t]
    }

    /// Returns the spatial coordinates as a displacement vector, dropping the
    /// time component and CRS tag.
    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Projection onto the XY plane: `z` zeroed, time and CRS preserved.
    pub fn project_xy(&self) -> Self {
        Self::new(self.x, self.y, 0.0, self.t, self.crs.clone())
    }

    /// Projection onto the XZ plane: `y` zeroed, time and CRS preserved.
    pub fn project_xz(&self) -> Self {
        Self::new(self.x, 0.0, self.z, self.t, self.crs.clone())
    }

    /// Projection onto the YZ plane: `x` zeroed, time and CRS preserved.
    pub fn project_yz(&self) -> Self {
        Self::new(0.0, self.y, self.z, self.t, self.crs.clone())
    }

    /// X coordinate difference `other.x - self.x`, or `None` on CRS mismatch.
    pub fn delta_x(&self, other: &Point) -> Option<f64> {
        self.crs
            .compatible_with(&other.crs)
            .then(|| other.x - self.x)
    }

    /// Y coordinate difference `other.y - self.y`, or `None` on CRS mismatch.
    pub fn delta_y(&self, other: &Point) -> Option<f64> {
        self.crs
            .compatible_with(&other.crs)
            .then(|| other.y - self.y)
    }

    /// Z coordinate difference `other.z - self.z`, or `None` on CRS mismatch.
    pub fn delta_z(&self, other: &Point) -> Option<f64> {
        self.crs
            .compatible_with(&other.crs)
            .then(|| other.z - self.z)
    }

    /// Time difference `other.t - self.t`.
    ///
    /// Not CRS-gated: the time component is independent of the spatial
    /// reference system.
    pub fn delta_t(&self, other: &Point) -> f64 {
        other.t - self.t
    }

    /// Euclidean distance between the spatial coordinates, or `None` on CRS
    /// mismatch.
    pub fn distance(&self, other: &Point) -> Option<f64> {
        self.crs.compatible_with(&other.crs).then(|| {
            ((other.x - self.x).powi(2) + (other.y - self.y).powi(2) + (other.z - self.z).powi(2))
                .sqrt()
        })
    }

    /// Euclidean distance in the XY plane, ignoring `z` and `t`, or `None` on
    /// CRS mismatch.
    pub fn distance_2d(&self, other: &Point) -> Option<f64> {
        self.crs
            .compatible_with(&other.crs)
            .then(|| ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt())
    }

    /// Returns a new point with the spatial coordinates multiplied by
    /// `factor`; time and CRS are preserved.
    ///
    /// Only meaningful for Cartesian coordinates.  Scaling angular data such
    /// as longitude/latitude is not detected or rejected here.
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(
            self.x * factor,
            self.y * factor,
            self.z * factor,
            self.t,
            self.crs.clone(),
        )
    }

    /// Returns the point mirrored through the origin, same as `scale(-1.0)`.
    pub fn invert(&self) -> Self {
        self.scale(-1.0)
    }

    /// Returns a new point translated by the given deltas; time and CRS are
    /// preserved.  A shift is local to one point, so no CRS gate applies.
    pub fn shift(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(
            self.x + dx,
            self.y + dy,
            self.z + dz,
            self.t,
            self.crs.clone(),
        )
    }

    /// Returns a new point translated by the components of `v`.
    pub fn shift_by_vector(&self, v: &Vector3<f64>) -> Self {
        self.shift(v.x, v.y, v.z)
    }

    /// Whether the two points are within [`MIN_POINT_SEPARATION`] of each
    /// other, or `None` on CRS mismatch.
    pub fn is_coincident(&self, other: &Point) -> Option<bool> {
        self.is_coincident_within(other, MIN_POINT_SEPARATION)
    }

    /// Whether the two points are within `tolerance` of each other, or `None`
    /// on CRS mismatch.  The comparison is inclusive: a pair exactly at
    /// distance `tolerance` is coincident.
    pub fn is_coincident_within(&self, other: &Point, tolerance: f64) -> Option<bool> {
        self.distance(other).map(|d| d <= tolerance)
    }

    /// Whether a point coincident with `self` at the default tolerance is
    /// already in `points`.
    pub fn already_present(&self, points: &[Point]) -> bool {
        self.already_present_within(points, MIN_POINT_SEPARATION)
    }

    /// Whether a point coincident with `self` at `tolerance` is already in
    /// `points`.
    ///
    /// The list is scanned in order and the first coincident element wins.
    /// Elements with an incompatible CRS cannot match and are skipped; they
    /// never abort the scan.
    pub fn already_present_within(&self, points: &[Point], tolerance: f64) -> bool {
        points
            .iter()
            .any(|p| self.is_coincident_within(p, tolerance) == Some(true))
    }

    /// Converts a geodetic point into a geocentric (ECEF) point using the
    /// given converter.
    ///
    /// Defined only for points tagged [`Crs::wgs84`]; any other tag yields
    /// `None`.  The geographic latitude is taken from `y`, the longitude from
    /// `x` and the ellipsoidal height from `z`.  The result keeps `t` and is
    /// re-tagged [`Crs::ecef`].
    pub fn to_geocentric(&self, converter: &impl GeocentricConverter) -> Option<Self> {
        if self.crs != Crs::wgs84() {
            return None;
        }
        let (x, y, z) = converter.to_geocentric(self.y, self.x, self.z);
        Some(Self::new(x, y, z, self.t, Crs::ecef()))
    }
}
