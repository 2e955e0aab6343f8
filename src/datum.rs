use log::trace;

use crate::{
    constants::{ARC_1960_DX, ARC_1960_DY, ARC_1960_DZ},
    ellipsoid::{self, Ellipsoid},
    Error,
    Geocentric,
    GeodeticCoordinate,
};

/// A 3-parameter Helmert shift: a translation in geocentric space, meters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HelmertShift {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl HelmertShift {
    pub const IDENTITY: HelmertShift = HelmertShift::new(0., 0., 0.);

    pub const fn new(dx: f64, dy: f64, dz: f64) -> HelmertShift {
        Self { dx, dy, dz }
    }

    /// The shift that undoes this one.
    pub fn inverse(&self) -> HelmertShift {
        Self::new(-self.dx, -self.dy, -self.dz)
    }
}

/// A geodetic datum: its reference ellipsoid and the geocentric shift that
/// takes a WGS84 position onto it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Datum {
    name: &'static str,
    ellipsoid: Ellipsoid,
    from_wgs84: HelmertShift,
}

impl Datum {
    pub const WGS84: Datum = Datum::new("WGS84", ellipsoid::WGS84, HelmertShift::IDENTITY);

    /// Arc 1960, the East African datum on the Clarke 1880 (modified)
    /// ellipsoid.
    pub const ARC_1960: Datum = Datum::new(
        "Arc 1960",
        ellipsoid::CLARKE_1880_MODIFIED,
        HelmertShift::new(ARC_1960_DX, ARC_1960_DY, ARC_1960_DZ),
    );

    pub const fn new(name: &'static str, ellipsoid: Ellipsoid, from_wgs84: HelmertShift) -> Datum {
        Self {
            name,
            ellipsoid,
            from_wgs84,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    pub fn shift(&self) -> &HelmertShift {
        &self.from_wgs84
    }

    /// Moves a WGS84 position, taken to lie on the WGS84 ellipsoid, onto this
    /// datum. Returns the position and its height above this datum's
    /// ellipsoid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProjectionFailure`] if the shifted point has no
    /// geodetic position on this datum's ellipsoid.
    ///
    /// # Usage
    ///
    /// ```
    /// use arc1960::{Datum, GeodeticCoordinate};
    ///
    /// let nairobi = GeodeticCoordinate::create(-1.2921, 36.8219).unwrap();
    /// let (arc, height) = Datum::ARC_1960.transform_from_wgs84(&nairobi, 0.0).unwrap();
    ///
    /// assert!((arc.latitude() - -1.293170960).abs() < 1e-8);
    /// assert!((arc.longitude() - 36.822673273).abs() < 1e-8);
    /// assert!((height - -256.9994).abs() < 1e-3);
    /// ```
    pub fn transform_from_wgs84(&self, coord: &GeodeticCoordinate, height: f64) -> Result<(GeodeticCoordinate, f64), Error> {
        trace!("shifting {coord} from WGS84 to {}", self.name);
        Geocentric::from_geodetic(&ellipsoid::WGS84, coord, height)
            .shifted(&self.from_wgs84)
            .to_geodetic(&self.ellipsoid)
    }

    /// Moves a position on this datum back to WGS84.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProjectionFailure`] if the shifted point has no
    /// geodetic position on the WGS84 ellipsoid.
    pub fn transform_to_wgs84(&self, coord: &GeodeticCoordinate, height: f64) -> Result<(GeodeticCoordinate, f64), Error> {
        trace!("shifting {coord} from {} to WGS84", self.name);
        Geocentric::from_geodetic(&self.ellipsoid, coord, height)
            .shifted(&self.from_wgs84.inverse())
            .to_geodetic(&ellipsoid::WGS84)
    }
}
