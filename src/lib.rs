#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Converts WGS84 GPS positions to the Arc 1960 datum and projects them
//! onto the UTM zone 37 south grid.
//!
//! ```
//! let grid = arc1960::wgs84_to_arc1960_utm37s(-1.2921, 36.8219).unwrap();
//!
//! assert!((grid.easting() - 257_716.42).abs() < 1.0);
//! assert!((grid.northing() - 9_856_974.77).abs() < 1.0);
//!
//! assert_eq!(arc1960::compute_utm_zone_label(-1.2921, 36.8219).unwrap(), "37S");
//! ```

use log::trace;
use thiserror::Error;

pub mod datum;
pub mod ellipsoid;
pub mod format;
pub mod geocentric;
pub mod geodetic;
pub mod projector;
pub mod utm;

pub use datum::{Datum, HelmertShift};
pub use ellipsoid::Ellipsoid;
pub use geocentric::Geocentric;
pub use geodetic::GeodeticCoordinate;
pub use projector::CoordinateProjector;
pub use utm::{Hemisphere, ProjectedCoordinate, UtmZoneSpec};

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;
pub(crate) mod utility;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidInput(String),
    #[error("Projection failed: {0}")]
    ProjectionFailure(String),
}

pub trait ParseCoord {
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `value` does not describe a valid
    /// coordinate.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any [`ParseCoord`] type from a string.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the string cannot be parsed.
///
/// # Usage
///
/// ```
/// use arc1960::GeodeticCoordinate;
///
/// let coord: GeodeticCoordinate = arc1960::from_str("-1.2921, 36.8219").unwrap();
/// assert_eq!(coord.latitude(), -1.2921);
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

/// Returns the UTM zone label, e.g. `"37S"`, for a WGS84 latitude/longitude.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the coordinate is not finite or out of
/// range.
///
/// # Usage
///
/// ```
/// use arc1960::compute_utm_zone_label;
///
/// assert_eq!(compute_utm_zone_label(0.0, 39.0).unwrap(), "37N");
/// assert_eq!(compute_utm_zone_label(-1.0, 39.0).unwrap(), "37S");
/// assert_eq!(compute_utm_zone_label(0.0, -180.0).unwrap(), "1N");
/// assert_eq!(compute_utm_zone_label(0.0, 179.999).unwrap(), "60N");
/// assert!(compute_utm_zone_label(f64::NAN, 39.0).is_err());
/// ```
pub fn compute_utm_zone_label(latitude: f64, longitude: f64) -> Result<String, Error> {
    let coord = GeodeticCoordinate::create(latitude, longitude)?;
    Ok(UtmZoneSpec::from_geodetic(&coord).to_string())
}

/// Converts a WGS84 latitude/longitude to Arc 1960 / UTM zone 37S.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for non-finite or out-of-range input and
/// [`Error::ProjectionFailure`] if the datum shift or projection has no
/// defined result.
///
/// # Usage
///
/// ```
/// use arc1960::{wgs84_to_arc1960_utm37s, Error};
///
/// let grid = wgs84_to_arc1960_utm37s(-6.7924, 39.2083).unwrap();
/// assert!((grid.easting() - 523_109.44).abs() < 1.0);
/// assert!((grid.northing() - 9_249_066.76).abs() < 1.0);
///
/// assert!(matches!(
///     wgs84_to_arc1960_utm37s(f64::INFINITY, 39.0),
///     Err(Error::InvalidInput(_))
/// ));
/// ```
pub fn wgs84_to_arc1960_utm37s(latitude: f64, longitude: f64) -> Result<ProjectedCoordinate, Error> {
    trace!("start wgs84_to_arc1960_utm37s({latitude}, {longitude})");
    let coord = GeodeticCoordinate::create(latitude, longitude)?;
    let grid = CoordinateProjector::arc1960_utm37s().project(&coord);
    trace!("end wgs84_to_arc1960_utm37s");
    grid
}

/// Converts an Arc 1960 / UTM zone 37S easting/northing back to WGS84.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for non-finite input and
/// [`Error::ProjectionFailure`] if the inverse has no defined result.
///
/// # Usage
///
/// ```
/// use arc1960::arc1960_utm37s_to_wgs84;
///
/// let coord = arc1960_utm37s_to_wgs84(257_716.417, 9_856_974.765).unwrap();
/// assert!((coord.latitude() - -1.2921).abs() < 1e-6);
/// assert!((coord.longitude() - 36.8219).abs() < 1e-6);
/// ```
pub fn arc1960_utm37s_to_wgs84(easting: f64, northing: f64) -> Result<GeodeticCoordinate, Error> {
    trace!("start arc1960_utm37s_to_wgs84({easting}, {northing})");
    let grid = ProjectedCoordinate::create(easting, northing)?;
    let coord = CoordinateProjector::arc1960_utm37s().unproject(&grid);
    trace!("end arc1960_utm37s_to_wgs84");
    coord
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
