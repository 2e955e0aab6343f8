use log::debug;

use crate::{
    constants::{GEODETIC_MAX_ITERATIONS, GEODETIC_TOLERANCE},
    datum::HelmertShift,
    ellipsoid::Ellipsoid,
    Error,
    GeodeticCoordinate,
};

/// An earth-centred, earth-fixed Cartesian position in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geocentric {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Geocentric {
    pub fn new(x: f64, y: f64, z: f64) -> Geocentric {
        Self { x, y, z }
    }

    /// Converts a geodetic position with ellipsoidal height `height` (meters)
    /// on `ellipsoid` to geocentric coordinates.
    ///
    /// # Usage
    ///
    /// ```
    /// use arc1960::{ellipsoid::WGS84, Geocentric, GeodeticCoordinate};
    ///
    /// let equator = GeodeticCoordinate::create(0.0, 90.0).unwrap();
    /// let ecef = Geocentric::from_geodetic(&WGS84, &equator, 0.0);
    ///
    /// assert!(ecef.x.abs() < 1e-6);
    /// assert!((ecef.y - 6_378_137.0).abs() < 1e-6);
    /// assert!(ecef.z.abs() < 1e-6);
    /// ```
    pub fn from_geodetic(ellipsoid: &Ellipsoid, coord: &GeodeticCoordinate, height: f64) -> Geocentric {
        let (sin_lat, cos_lat) = coord.latitude.to_radians().sin_cos();
        let (sin_lon, cos_lon) = coord.longitude.to_radians().sin_cos();
        let n = ellipsoid.prime_vertical_radius(sin_lat);

        Self {
            x: (n + height) * cos_lat * cos_lon,
            y: (n + height) * cos_lat * sin_lon,
            z: (n * (1. - ellipsoid.e2()) + height) * sin_lat,
        }
    }

    /// Converts back to a geodetic position and ellipsoidal height on
    /// `ellipsoid`, using Bowring's iteration on the parametric latitude.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProjectionFailure`] if the point is not finite, sits at
    /// the centre of the ellipsoid, or the iteration does not converge.
    ///
    /// # Usage
    ///
    /// ```
    /// use arc1960::{ellipsoid::WGS84, Geocentric, GeodeticCoordinate};
    ///
    /// let nairobi = GeodeticCoordinate::create(-1.2921, 36.8219).unwrap();
    /// let ecef = Geocentric::from_geodetic(&WGS84, &nairobi, 1795.0);
    /// let (back, height) = ecef.to_geodetic(&WGS84).unwrap();
    ///
    /// assert!((back.latitude() - nairobi.latitude()).abs() < 1e-11);
    /// assert!((back.longitude() - nairobi.longitude()).abs() < 1e-11);
    /// assert!((height - 1795.0).abs() < 1e-6);
    ///
    /// assert!(Geocentric::new(0.0, 0.0, 0.0).to_geodetic(&WGS84).is_err());
    /// ```
    pub fn to_geodetic(&self, ellipsoid: &Ellipsoid) -> Result<(GeodeticCoordinate, f64), Error> {
        if !(self.x.is_finite() && self.y.is_finite() && self.z.is_finite()) {
            return Err(Error::ProjectionFailure(format!("Geocentric point {self:?} is not finite")));
        }

        let a = ellipsoid.a();
        let b = ellipsoid.b();
        let e2 = ellipsoid.e2();
        let ep2 = ellipsoid.ep2();
        // b/a, the ratio between parametric and geodetic tangents
        let ba = 1. - ellipsoid.f();

        let p = self.x.hypot(self.y);
        // Anything this deep inside the ellipsoid has no meaningful latitude
        if p.hypot(self.z) < 1. {
            return Err(Error::ProjectionFailure(
                "Geocentric point is at the centre of the ellipsoid".to_string()
            ));
        }

        let lon = self.y.atan2(self.x);
        let mut beta = self.z.atan2(ba * p);
        let mut lat = beta;
        let mut converged = false;

        for iteration in 1..=GEODETIC_MAX_ITERATIONS {
            let (sin_beta, cos_beta) = beta.sin_cos();
            lat = (self.z + ep2 * b * sin_beta.powi(3))
                .atan2(p - e2 * a * cos_beta.powi(3));

            let next_beta = (ba * lat.sin()).atan2(lat.cos());
            let delta = (next_beta - beta).abs();
            beta = next_beta;

            if delta < GEODETIC_TOLERANCE {
                debug!("geodetic latitude converged after {iteration} iterations");
                converged = true;
                break;
            }
        }

        if !converged || !lat.is_finite() {
            debug!("geodetic latitude did not converge for {self:?}");
            return Err(Error::ProjectionFailure(format!(
                "Geodetic latitude did not converge within {GEODETIC_MAX_ITERATIONS} iterations"
            )));
        }

        let (sin_lat, cos_lat) = lat.sin_cos();
        let height = p * cos_lat + self.z * sin_lat - a * (1. - e2 * sin_lat.powi(2)).sqrt();

        Ok((GeodeticCoordinate::new(lat.to_degrees(), lon.to_degrees()), height))
    }

    /// Translates this point by a geocentric shift.
    pub fn shifted(&self, shift: &HelmertShift) -> Geocentric {
        Self {
            x: self.x + shift.dx,
            y: self.y + shift.dy,
            z: self.z + shift.dz,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::ellipsoid::{CLARKE_1880_MODIFIED, WGS84};

    #[test]
    fn poles_and_equator_round_trip() {
        for (lat, lon, h) in [
            (90., 0., 0.),
            (-90., 0., 100.),
            (0., -180., -50.),
            (0., 0., 0.),
            (-6.7924, 39.2083, 12.),
            (45., 120., 8848.),
        ] {
            let coord = GeodeticCoordinate::new(lat, lon);
            let ecef = Geocentric::from_geodetic(&CLARKE_1880_MODIFIED, &coord, h);
            let (back, height) = ecef.to_geodetic(&CLARKE_1880_MODIFIED).unwrap();

            assert_abs_diff_eq!(back.latitude, lat, epsilon = 1e-10);
            assert_abs_diff_eq!(height, h, epsilon = 1e-5);
            // Longitude is undefined at the poles
            if lat.abs() < 90. {
                let (sin_back, cos_back) = back.longitude.to_radians().sin_cos();
                let (sin_lon, cos_lon) = f64::to_radians(lon).sin_cos();
                assert_abs_diff_eq!(sin_back, sin_lon, epsilon = 1e-10);
                assert_abs_diff_eq!(cos_back, cos_lon, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn north_pole_lies_on_minor_axis() {
        let pole = Geocentric::from_geodetic(&WGS84, &GeodeticCoordinate::new(90., 0.), 0.);
        assert_abs_diff_eq!(pole.z, WGS84.b(), epsilon = 1e-6);
        assert_abs_diff_eq!(pole.x.hypot(pole.y), 0., epsilon = 1e-6);
    }

    #[test]
    fn non_finite_point_fails() {
        let point = Geocentric::new(f64::NAN, 0., 0.);
        assert!(matches!(point.to_geodetic(&WGS84), Err(Error::ProjectionFailure(_))));

        let point = Geocentric::new(f64::INFINITY, 0., 0.);
        assert!(matches!(point.to_geodetic(&WGS84), Err(Error::ProjectionFailure(_))));
    }

    #[test]
    fn shift_is_a_translation() {
        let shift = HelmertShift::new(-169.5, -19.4, -99.4);
        let point = Geocentric::new(1., 2., 3.).shifted(&shift);
        assert_abs_diff_eq!(point.x, -168.5);
        assert_abs_diff_eq!(point.y, -17.4, epsilon = 1e-12);
        assert_abs_diff_eq!(point.z, -96.4, epsilon = 1e-12);
    }
}
