use crate::constants::{CLARKE_1880_A, CLARKE_1880_F, WGS84_A, WGS84_F};

/// A reference ellipsoid, given by its semi-major axis and flattening.
/// Every other shape parameter is derived from these two.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipsoid {
    a: f64,
    f: f64,
}

/// The WGS84 ellipsoid used by GPS.
pub const WGS84: Ellipsoid = Ellipsoid::new(WGS84_A, WGS84_F);

/// Clarke 1880 (modified), the ellipsoid of the Arc 1960 datum.
pub const CLARKE_1880_MODIFIED: Ellipsoid = Ellipsoid::new(CLARKE_1880_A, CLARKE_1880_F);

impl Ellipsoid {
    pub const fn new(a: f64, f: f64) -> Ellipsoid {
        Self { a, f }
    }

    /// Builds an ellipsoid from its semi-major axis and inverse flattening.
    ///
    /// ```
    /// use arc1960::ellipsoid::{Ellipsoid, CLARKE_1880_MODIFIED};
    ///
    /// let clarke = Ellipsoid::from_inverse_flattening(6_378_249.145, 293.465);
    /// assert_eq!(clarke, CLARKE_1880_MODIFIED);
    /// ```
    pub fn from_inverse_flattening(a: f64, rf: f64) -> Ellipsoid {
        Self::new(a, 1.0 / rf)
    }

    /// Semi-major axis in meters
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Flattening
    #[inline]
    pub fn f(&self) -> f64 {
        self.f
    }

    /// Semi-minor axis in meters
    pub fn b(&self) -> f64 {
        self.a * (1. - self.f)
    }

    /// First eccentricity squared
    pub fn e2(&self) -> f64 {
        self.f * (2. - self.f)
    }

    /// Signed first eccentricity, negative for prolate ellipsoids
    pub fn es(&self) -> f64 {
        self.e2().abs().sqrt().copysign(self.f)
    }

    /// Second eccentricity squared
    pub fn ep2(&self) -> f64 {
        self.e2() / (1. - self.e2())
    }

    /// Third flattening
    pub fn n(&self) -> f64 {
        self.f / (2. - self.f)
    }

    /// Radius of curvature in the prime vertical at geodetic latitude
    /// `sin_lat`.
    pub(crate) fn prime_vertical_radius(&self, sin_lat: f64) -> f64 {
        self.a / (1. - self.e2() * sin_lat.powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn wgs84_derived_parameters() {
        assert_relative_eq!(WGS84.b(), 6_356_752.314_245_179, epsilon = 1e-3);
        assert_relative_eq!(WGS84.es(), 0.081_819_190_842_622, epsilon = 1e-12);
        assert_relative_eq!(WGS84.n(), 0.001_679_220_386_383_705, epsilon = 1e-12);
    }

    #[test]
    fn clarke_1880_is_flatter_than_wgs84() {
        assert!(CLARKE_1880_MODIFIED.f() > WGS84.f());
        assert!(CLARKE_1880_MODIFIED.a() > WGS84.a());
        assert_abs_diff_eq!(CLARKE_1880_MODIFIED.b(), 6_356_514.869_549_776, epsilon = 1e-3);
    }

    #[test]
    fn prime_vertical_radius_at_equator_is_a() {
        assert_abs_diff_eq!(WGS84.prime_vertical_radius(0.), WGS84.a());
        assert!(WGS84.prime_vertical_radius(1.) > WGS84.a());
    }
}
