use std::fmt::Display;

use crate::{
    constants::{UTM_FALSE_EASTING, UTM_FALSE_NORTHING_SOUTH, UTM_K0},
    Error,
    GeodeticCoordinate,
    ThisOrThat,
};

pub(crate) mod zonespec {
    pub(crate) const MINUTMZONE: u8 = 1;
    pub(crate) const MAXUTMZONE: u8 = 60;
    /// Degrees of longitude per zone
    pub(crate) const WIDTH: f64 = 6.;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Latitudes `>= 0` are north, including the equator.
    pub fn from_latitude(lat: f64) -> Hemisphere {
        (lat >= 0.).ternary(Hemisphere::North, Hemisphere::South)
    }

    pub fn is_north(self) -> bool {
        self == Hemisphere::North
    }
}

impl Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.is_north().ternary("N", "S"))
    }
}

/// A UTM zone and hemisphere, with the projection constants they imply.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedZoneSpec"))]
pub struct UtmZoneSpec {
    pub(crate) zone: u8,
    pub(crate) hemisphere: Hemisphere,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedZoneSpec {
    zone: u8,
    hemisphere: Hemisphere,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedZoneSpec> for UtmZoneSpec {
    type Error = Error;

    fn try_from(value: UncheckedZoneSpec) -> Result<Self, Self::Error> {
        UtmZoneSpec::new(value.zone, value.hemisphere)
    }
}

impl UtmZoneSpec {
    /// Zone 37 south, the grid used with Arc 1960 in Kenya and Tanzania.
    pub const ZONE_37S: UtmZoneSpec = UtmZoneSpec {
        zone: 37,
        hemisphere: Hemisphere::South,
    };

    /// Tries to create a zone spec.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the zone is outside the range `[1, 60]`.
    ///
    /// # Usage
    ///
    /// ```
    /// use arc1960::{Hemisphere, UtmZoneSpec};
    ///
    /// let spec = UtmZoneSpec::new(37, Hemisphere::South).unwrap();
    /// assert_eq!(spec, UtmZoneSpec::ZONE_37S);
    /// assert_eq!(spec.central_meridian(), 39.0);
    /// assert_eq!(spec.false_northing(), 10_000_000.0);
    ///
    /// assert!(UtmZoneSpec::new(0, Hemisphere::North).is_err());
    /// assert!(UtmZoneSpec::new(61, Hemisphere::North).is_err());
    /// ```
    pub fn new(zone: u8, hemisphere: Hemisphere) -> Result<UtmZoneSpec, Error> {
        if !(zonespec::MINUTMZONE..=zonespec::MAXUTMZONE).contains(&zone) {
            return Err(Error::InvalidInput(format!(
                "Zone {zone} not in range [{}, {}]",
                zonespec::MINUTMZONE,
                zonespec::MAXUTMZONE,
            )));
        }

        Ok(Self { zone, hemisphere })
    }

    /// Standard zone for a point: `floor((lon + 180) / 6) + 1`, clamped to
    /// `[1, 60]` so that longitude 180 stays in zone 60. No Norway or
    /// Svalbard exceptions.
    ///
    /// # Usage
    ///
    /// ```
    /// use arc1960::{GeodeticCoordinate, UtmZoneSpec};
    ///
    /// let nairobi = GeodeticCoordinate::create(-1.2921, 36.8219).unwrap();
    /// assert_eq!(UtmZoneSpec::from_geodetic(&nairobi), UtmZoneSpec::ZONE_37S);
    ///
    /// let antimeridian = GeodeticCoordinate::create(10.0, 180.0).unwrap();
    /// assert_eq!(UtmZoneSpec::from_geodetic(&antimeridian).to_string(), "60N");
    /// ```
    pub fn from_geodetic(coord: &GeodeticCoordinate) -> UtmZoneSpec {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let zone = ((coord.longitude + 180.) / zonespec::WIDTH)
            .floor()
            .clamp(0., f64::from(zonespec::MAXUTMZONE - 1)) as u8 + 1;

        Self {
            zone,
            hemisphere: Hemisphere::from_latitude(coord.latitude),
        }
    }

    pub fn zone(&self) -> u8 {
        self.zone
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// Longitude of the zone's central meridian in degrees.
    pub fn central_meridian(&self) -> f64 {
        zonespec::WIDTH * f64::from(self.zone) - 183.
    }

    pub fn scale_factor(&self) -> f64 {
        UTM_K0
    }

    pub fn false_easting(&self) -> f64 {
        UTM_FALSE_EASTING
    }

    pub fn false_northing(&self) -> f64 {
        self.hemisphere.is_north().ternary(0., UTM_FALSE_NORTHING_SOUTH)
    }
}

impl Display for UtmZoneSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.zone, self.hemisphere)
    }
}

/// An easting/northing in meters on a projected grid.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectedCoordinate {
    #[cfg_attr(feature = "serde", serde(alias = "x"))]
    pub(crate) easting: f64,
    #[cfg_attr(feature = "serde", serde(alias = "y"))]
    pub(crate) northing: f64,
}

impl ProjectedCoordinate {
    /// Internal-only constructor that doesn't check the coordinate
    pub(crate) fn new(easting: f64, northing: f64) -> ProjectedCoordinate {
        Self { easting, northing }
    }

    /// Tries to create a projected point. Any finite pair is accepted, since
    /// the usable extent depends on the grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either value is NaN or infinite.
    ///
    /// # Usage
    ///
    /// ```
    /// use arc1960::ProjectedCoordinate;
    ///
    /// let grid = ProjectedCoordinate::create(257_716.42, 9_856_974.77).unwrap();
    /// assert_eq!(grid.easting(), 257_716.42);
    /// assert_eq!(grid.northing(), 9_856_974.77);
    ///
    /// assert!(ProjectedCoordinate::create(f64::NAN, 0.0).is_err());
    /// ```
    pub fn create(easting: f64, northing: f64) -> Result<ProjectedCoordinate, Error> {
        if !easting.is_finite() {
            Err(Error::InvalidInput(format!("Easting {easting} is not finite")))
        } else if !northing.is_finite() {
            Err(Error::InvalidInput(format!("Northing {northing} is not finite")))
        } else {
            Ok(ProjectedCoordinate::new(easting, northing))
        }
    }

    #[inline]
    pub fn easting(&self) -> f64 {
        self.easting
    }

    #[inline]
    pub fn northing(&self) -> f64 {
        self.northing
    }
}

impl Display for ProjectedCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        write!(
            f,
            "{easting} {northing}",
        )
    }
}
