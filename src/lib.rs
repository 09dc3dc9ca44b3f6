//! Core point primitive library for survey and GIS tooling.
//!
//! Provides a 4D Cartesian point (`x`, `y`, `z`, time) tagged with an
//! optional coordinate reference system, the CRS-gated arithmetic built on
//! it, and the contract for converting geodetic points to geocentric ones.

pub mod crs;
pub mod geodesy;
pub mod geometry;
pub mod io;
