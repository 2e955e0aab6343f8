use lazy_static::lazy_static;
use log::debug;

use crate::{
    projections::transverse_mercator::TransverseMercator,
    Datum,
    Error,
    GeodeticCoordinate,
    ProjectedCoordinate,
    UtmZoneSpec,
};

lazy_static! {
    static ref ARC_1960_UTM_37S: CoordinateProjector =
        CoordinateProjector::new(Datum::ARC_1960, UtmZoneSpec::ZONE_37S);
}

/// Takes WGS84 positions onto a UTM grid on another datum: a Helmert shift
/// onto the datum's ellipsoid, then the zone's Transverse Mercator.
///
/// Immutable once built, so one projector can be shared across threads.
#[derive(Clone, Debug)]
pub struct CoordinateProjector {
    datum: Datum,
    zone: UtmZoneSpec,
    tm: TransverseMercator,
}

impl CoordinateProjector {
    pub fn new(datum: Datum, zone: UtmZoneSpec) -> CoordinateProjector {
        Self {
            datum,
            zone,
            tm: TransverseMercator::new(datum.ellipsoid(), zone.scale_factor()),
        }
    }

    /// The shared Arc 1960 / UTM zone 37S projector.
    pub fn arc1960_utm37s() -> &'static CoordinateProjector {
        &ARC_1960_UTM_37S
    }

    pub fn datum(&self) -> &Datum {
        &self.datum
    }

    pub fn zone(&self) -> &UtmZoneSpec {
        &self.zone
    }

    /// Projects a WGS84 position onto this projector's grid. Points outside
    /// the zone still get a grid position; only undefined results fail.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the coordinate is out of range or
    /// not finite and [`Error::ProjectionFailure`] if the datum shift does
    /// not converge or the projection is not finite.
    ///
    /// # Usage
    ///
    /// ```
    /// use arc1960::{CoordinateProjector, Datum, GeodeticCoordinate, Hemisphere, UtmZoneSpec};
    ///
    /// let nairobi = GeodeticCoordinate::create(-1.2921, 36.8219).unwrap();
    ///
    /// let arc = CoordinateProjector::arc1960_utm37s().project(&nairobi).unwrap();
    /// assert!((arc.easting() - 257_716.417).abs() < 0.05);
    /// assert!((arc.northing() - 9_856_974.765).abs() < 0.05);
    ///
    /// // Same zone on plain WGS84
    /// let zone = UtmZoneSpec::new(37, Hemisphere::South).unwrap();
    /// let wgs = CoordinateProjector::new(Datum::WGS84, zone).project(&nairobi).unwrap();
    /// assert!((wgs.easting() - 257_634.502).abs() < 0.05);
    /// assert!((wgs.northing() - 9_857_079.966).abs() < 0.05);
    /// ```
    pub fn project(&self, coord: &GeodeticCoordinate) -> Result<ProjectedCoordinate, Error> {
        let coord = GeodeticCoordinate::create(coord.latitude, coord.longitude)?;

        let (local, height) = self.datum.transform_from_wgs84(&coord, 0.)?;
        debug!("{coord} on WGS84 is {local} on {} (height {height:.3} m)", self.datum.name());

        let (x, y) = self.tm.forward(self.zone.central_meridian(), local.latitude, local.longitude);
        let easting = x + self.zone.false_easting();
        let northing = y + self.zone.false_northing();

        if !(easting.is_finite() && northing.is_finite()) {
            debug!("projection of {local} into zone {} is not finite", self.zone);
            return Err(Error::ProjectionFailure(format!(
                "{local} has no finite position in zone {}",
                self.zone
            )));
        }

        Ok(ProjectedCoordinate::new(easting, northing))
    }

    /// Takes a grid position back to WGS84. The point is taken to lie on the
    /// local ellipsoid, which puts the result within a few centimeters of
    /// the point that was projected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the grid position is not finite and
    /// [`Error::ProjectionFailure`] if the inverse datum shift does not
    /// converge.
    ///
    /// # Usage
    ///
    /// ```
    /// use arc1960::{CoordinateProjector, GeodeticCoordinate};
    ///
    /// let projector = CoordinateProjector::arc1960_utm37s();
    /// let dodoma = GeodeticCoordinate::create(-6.163, 35.7516).unwrap();
    ///
    /// let grid = projector.project(&dodoma).unwrap();
    /// let back = projector.unproject(&grid).unwrap();
    ///
    /// assert!(back.haversine(&dodoma) < 0.05);
    /// ```
    pub fn unproject(&self, grid: &ProjectedCoordinate) -> Result<GeodeticCoordinate, Error> {
        let grid = ProjectedCoordinate::create(grid.easting, grid.northing)?;

        let x = grid.easting - self.zone.false_easting();
        let y = grid.northing - self.zone.false_northing();
        let local = self.tm.reverse(self.zone.central_meridian(), x, y);

        let (coord, height) = self.datum.transform_to_wgs84(&local, 0.)?;
        debug!("grid {grid} in zone {} is {coord} on WGS84 (height {height:.3} m)", self.zone);

        Ok(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_projector_is_arc_1960_zone_37s() {
        let projector = CoordinateProjector::arc1960_utm37s();

        assert_eq!(projector.datum(), &Datum::ARC_1960);
        assert_eq!(projector.zone().to_string(), "37S");
        assert!(std::ptr::eq(projector, CoordinateProjector::arc1960_utm37s()));
    }

    #[test]
    fn unchecked_non_finite_input_is_rejected() {
        let projector = CoordinateProjector::arc1960_utm37s();
        let coord = GeodeticCoordinate::new(f64::NAN, 39.);

        assert!(matches!(projector.project(&coord), Err(Error::InvalidInput(_))));

        let grid = ProjectedCoordinate::new(500_000., f64::NEG_INFINITY);
        assert!(matches!(projector.unproject(&grid), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn unchecked_out_of_range_input_is_rejected() {
        let projector = CoordinateProjector::arc1960_utm37s();

        for (lat, lon) in [(200., 500.), (-90.5, 39.), (-1., -180.5)] {
            let coord = GeodeticCoordinate::new(lat, lon);
            assert!(
                matches!(projector.project(&coord), Err(Error::InvalidInput(_))),
                "({lat}, {lon}) was projected"
            );
        }
    }

    #[test]
    fn projector_is_shareable_across_threads() {
        fn assert_sync<T: Send + Sync>(_: &T) {}
        assert_sync(CoordinateProjector::arc1960_utm37s());
    }
}
