use std::fmt::Display;

use crate::{constants::EARTH_MEAN_RADIUS_M, Error, ParseCoord};

/// A geodetic latitude/longitude in decimal degrees. Which datum it refers
/// to depends on where it came from: GPS fixes are WGS84, results of
/// [`Datum::transform_from_wgs84`](crate::Datum::transform_from_wgs84) are on that datum.
///
/// With the `serde` feature, deserializing goes through
/// [`GeodeticCoordinate::create`], so out of range values are rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedCoordinate"))]
pub struct GeodeticCoordinate {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
}

/// Wire form of [`GeodeticCoordinate`] before the range checks
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedCoordinate {
    #[serde(alias = "lat")]
    latitude: f64,
    #[serde(alias = "lon")]
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedCoordinate> for GeodeticCoordinate {
    type Error = Error;

    fn try_from(value: UncheckedCoordinate) -> Result<Self, Self::Error> {
        GeodeticCoordinate::create(value.latitude, value.longitude)
    }
}

impl GeodeticCoordinate {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> GeodeticCoordinate {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180]
    ///
    /// Non-finite values are never in range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use arc1960::GeodeticCoordinate;
    ///
    /// let coord = GeodeticCoordinate::create(-1.2921, 36.8219).unwrap();
    ///
    /// assert_eq!(coord.latitude(), -1.2921);
    /// assert_eq!(coord.longitude(), 36.8219);
    ///
    /// assert!(GeodeticCoordinate::create(100.0, 0.0).is_err());
    /// assert!(GeodeticCoordinate::create(0.0, -200.0).is_err());
    /// assert!(GeodeticCoordinate::create(f64::NAN, 0.0).is_err());
    /// assert!(GeodeticCoordinate::create(0.0, 180.0).is_ok());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<GeodeticCoordinate, Error> {
        if !(-90_f64..=90_f64).contains(&lat) {
            Err(Error::InvalidInput(format!("Latitude {lat} outside of valid range [-90, 90].")))
        } else if !(-180_f64..=180_f64).contains(&lon) {
            Err(Error::InvalidInput(format!("Longitude {lon} outside of valid range [-180, 180].")))
        } else {
            Ok(GeodeticCoordinate::new(lat, lon))
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the point is in the northern hemisphere. The equator
    /// counts as north.
    ///
    /// ```
    /// use arc1960::GeodeticCoordinate;
    ///
    /// assert!(GeodeticCoordinate::create(0.0, 39.0).unwrap().is_north());
    /// assert!(!GeodeticCoordinate::create(-1.0, 39.0).unwrap().is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        self.latitude >= 0.
    }

    /// Returns the distance in meters between two points
    /// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
    /// Uses the [mean radius of the Earth](https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius)
    /// in the calculation: `6371.0088`
    pub fn haversine(&self, other: &GeodeticCoordinate) -> f64 {
        let lat1_r = self.latitude.to_radians();
        let lat2_r = other.latitude.to_radians();

        2.0 * EARTH_MEAN_RADIUS_M * (
            ((other.latitude - self.latitude).to_radians() / 2.0).sin().powi(2) +
            lat1_r.cos() * lat2_r.cos() *
            ((other.longitude - self.longitude).to_radians() / 2.0).sin().powi(2)
        ).sqrt().asin()
    }
}

impl ParseCoord for GeodeticCoordinate {
    /// Parses `"lat lon"` or `"lat, lon"` in decimal degrees.
    ///
    /// ```
    /// use arc1960::{GeodeticCoordinate, ParseCoord};
    ///
    /// let coord = GeodeticCoordinate::parse_coord("-1.2921 36.8219").unwrap();
    /// assert_eq!(coord.longitude(), 36.8219);
    ///
    /// assert!(GeodeticCoordinate::parse_coord("-1.2921").is_err());
    /// assert!(GeodeticCoordinate::parse_coord("north east").is_err());
    /// ```
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let mut pieces = value
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|piece| !piece.is_empty());

        let mut next_value = |name: &str| {
            pieces
                .next()
                .ok_or_else(|| Error::InvalidInput(format!("Missing {name} in \"{value}\"")))?
                .parse::<f64>()
                .map_err(|e| Error::InvalidInput(format!("Bad {name} in \"{value}\": {e}")))
        };

        let lat = next_value("latitude")?;
        let lon = next_value("longitude")?;

        if pieces.next().is_some() {
            return Err(Error::InvalidInput(format!("Trailing text in \"{value}\"")));
        }

        GeodeticCoordinate::create(lat, lon)
    }
}

impl Display for GeodeticCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
