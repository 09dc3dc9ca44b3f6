//! Coordinate reference system tags and the compatibility gate used by every
//! cross-point operation.

/// Representation of a coordinate reference system tag.
///
/// A CRS is stored as a definition string, usually an EPSG identifier such as
/// `"EPSG:4326"`.  When created from an EPSG code the numeric value is
/// retained so that callers can inspect it if necessary.  An empty definition
/// means "no reference system declared" and is compatible only with itself.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Crs {
    definition: String,
    epsg: Option<u32>,
}

impl PartialEq for Crs {
    fn eq(&self, other: &Self) -> bool {
        self.definition == other.definition
    }
}

impl Eq for Crs {}

impl Crs {
    /// Creates a new CRS from the given EPSG code.
    pub fn from_epsg(code: u32) -> Self {
        Self {
            definition: format!("EPSG:{}", code),
            epsg: Some(code),
        }
    }

    /// Creates a CRS from an arbitrary definition string.
    pub fn from_definition(definition: &str) -> Self {
        Self {
            definition: definition.to_string(),
            epsg: None,
        }
    }

    /// The "no reference system declared" tag.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns the EPSG code for this CRS, if available.
    pub fn epsg(&self) -> Option<u32> {
        self.epsg
    }

    /// Returns the underlying definition string.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Returns `true` when no reference system is declared.
    pub fn is_none(&self) -> bool {
        self.definition.is_empty()
    }

    /// Geodetic reference system used by [`to_geocentric`]: WGS84 (EPSG:4326).
    ///
    /// [`to_geocentric`]: crate::geometry::Point::to_geocentric
    pub fn wgs84() -> Self {
        Self::from_epsg(4326)
    }

    /// Geocentric (Earth-Centered-Earth-Fixed) reference system: EPSG:4978.
    pub fn ecef() -> Self {
        Self::from_epsg(4978)
    }

    /// Decides whether a cross-point operation between points tagged with
    /// `self` and `other` is defined.
    ///
    /// Compatibility is exact, case-sensitive equality of the definition
    /// strings.  There is no normalization and no "unspecified matches
    /// anything" leniency: an undeclared CRS is compatible only with another
    /// undeclared CRS.  Mixing reference systems silently produces
    /// numerically plausible but physically meaningless results, so callers
    /// get an explicit absence instead.
    pub fn compatible_with(&self, other: &Crs) -> bool {
        self.definition == other.definition
    }
}
