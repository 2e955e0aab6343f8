// WGS84 semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// WGS84 flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_F: f64 = 1.0 / 298.257223563;

// Clarke 1880 (modified), the Arc 1960 ellipsoid
pub(crate) const CLARKE_1880_A: f64 = 6_378_249.145;
pub(crate) const CLARKE_1880_F: f64 = 1.0 / 293.465;

// WGS84 -> Arc 1960 geocentric translation, meters
pub(crate) const ARC_1960_DX: f64 = -169.5;
pub(crate) const ARC_1960_DY: f64 = -19.4;
pub(crate) const ARC_1960_DZ: f64 = -99.4;

// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;
pub(crate) const UTM_FALSE_EASTING: f64 = 500_000.;
pub(crate) const UTM_FALSE_NORTHING_SOUTH: f64 = 10_000_000.;

// Geocentric -> geodetic convergence
pub(crate) const GEODETIC_TOLERANCE: f64 = 1e-12;
pub(crate) const GEODETIC_MAX_ITERATIONS: usize = 10;

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
pub(crate) const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;
