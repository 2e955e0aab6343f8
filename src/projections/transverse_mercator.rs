use std::f64::consts::FRAC_PI_2;
use std::f64::consts::PI;

use num::Complex;

use crate::{ellipsoid::Ellipsoid, utility::{polyval, GeoMath, dms}, ThisOrThat, GeodeticCoordinate};

// ================================
// Krüger series coefficients, 6th order in the third flattening n
// ================================

const B1_COEFF: [f64; 5] = [
    // b1*(n+1), polynomial in n2 of order 3
    1., 4., 64., 256., 256.,
];  // count = 5

#[allow(clippy::unreadable_literal)]
const ALP_COEFF: [f64; 27] = [
    // alp[1]/n^1, polynomial in n of order 5
    31564., -66675., 34440., 47250., -100800., 75600., 151200.,
    // alp[2]/n^2, polynomial in n of order 4
    -1983433., 863232., 748608., -1161216., 524160., 1935360.,
    // alp[3]/n^3, polynomial in n of order 3
    670412., 406647., -533952., 184464., 725760.,
    // alp[4]/n^4, polynomial in n of order 2
    6601661., -7732800., 2230245., 7257600.,
    // alp[5]/n^5, polynomial in n of order 1
    -13675556., 3438171., 7983360.,
    // alp[6]/n^6, polynomial in n of order 0
    212378941., 319334400.,
];  // count = 27

#[allow(clippy::unreadable_literal)]
const BET_COEFF: [f64; 27] = [
    // bet[1]/n^1, polynomial in n of order 5
    384796., -382725., -6720., 932400., -1612800., 1209600., 2419200.,
    // bet[2]/n^2, polynomial in n of order 4
    -1118711., 1695744., -1174656., 258048., 80640., 3870720.,
    // bet[3]/n^3, polynomial in n of order 3
    22276., -16929., -15984., 12852., 362880.,
    // bet[4]/n^4, polynomial in n of order 2
    -830251., -158400., 197865., 7257600.,
    // bet[5]/n^5, polynomial in n of order 1
    -435388., 453717., 15966720.,
    // bet[6]/n^6, polynomial in n of order 0
    20648693., 638668800.,
];  // count = 27

const MAXPOW: usize = 6;

/// Transverse Mercator on an arbitrary ellipsoid, without false
/// easting/northing. Longitudes are relative to a central meridian passed
/// per call.
#[derive(Clone, Debug)]
pub(crate) struct TransverseMercator {
    k0: f64,
    es: f64,
    // Rectifying radius, a/(1+n) * (1 + n^2/4 + n^4/64 + ...)
    a1: f64,
    alp: [f64; MAXPOW + 1],
    bet: [f64; MAXPOW + 1],
}

impl TransverseMercator {
    pub fn new(ellipsoid: &Ellipsoid, k0: f64) -> TransverseMercator {
        let n = ellipsoid.n();
        let m = MAXPOW / 2;

        let b1 = polyval(&B1_COEFF[0..=m], n.powi(2)) / (B1_COEFF[m + 1] * (1. + n));

        let mut alp = [0_f64; MAXPOW + 1];
        let mut bet = [0_f64; MAXPOW + 1];

        let mut o = 0;
        let mut d = n;

        for l in 1..=MAXPOW {
            let m = MAXPOW - l;
            alp[l] = d * polyval(&ALP_COEFF[o..=o + m], n) / ALP_COEFF[o + m + 1];
            bet[l] = d * polyval(&BET_COEFF[o..=o + m], n) / BET_COEFF[o + m + 1];
            o += m + 2;
            d *= n;
        }

        Self {
            k0,
            es: ellipsoid.es(),
            a1: b1 * ellipsoid.a(),
            alp,
            bet,
        }
    }

    /// Projects `lat`/`lon` (degrees) relative to central meridian `lon0`.
    /// Returns `(x, y)` in meters from the central meridian and equator.
    #[allow(clippy::similar_names)]
    pub fn forward(&self, lon0: f64, lat: f64, lon: f64) -> (f64, f64) {
        let lon = lon0.ang_diff(lon);

        // Work in the first quadrant and restore signs at the end
        let mut lat_sign = lat.is_sign_negative().ternary(-1., 1.);
        let lon_sign = lon.is_sign_negative().ternary(-1., 1.);
        let lat = lat * lat_sign;
        let mut lon = lon * lon_sign;

        let backside = lon > f64::from(dms::QD);
        if backside {
            if lat.is_zero() {
                lat_sign = -1.;
            }
            lon = f64::from(dms::HD) - lon;
        }

        let (sphi, cphi) = lat.to_radians().sin_cos();
        let (slam, clam) = lon.to_radians().sin_cos();

        let (xip, etap) = if lat.eps_eq(f64::from(dms::QD)) {
            (FRAC_PI_2, 0.)
        } else {
            let tau = sphi / cphi;
            let taup = tau.taupf(self.es);
            (taup.atan2(clam), (slam / taup.hypot(clam)).asinh())
        };

        let c0 = (2. * xip).cos();
        let ch0 = (2. * etap).cosh();
        let s0 = (2. * xip).sin();
        let sh0 = (2. * etap).sinh();

        // Clenshaw summation of the alp series in zeta' = xi' + i eta'
        let a = Complex::new(2. * c0 * ch0, -2. * s0 * sh0);
        let mut n = MAXPOW;

        let mut y0 = Complex::new((n % 2 == 1).ternary(self.alp[n], 0.), 0.);
        let mut y1 = Complex::default();

        if n % 2 == 1 {
            n -= 1;
        }

        while n > 0 {
            y1 = a * y0 - y1 + self.alp[n];
            n -= 1;

            y0 = a * y1 - y0 + self.alp[n];
            n -= 1;
        }

        let a = Complex::new(s0 * ch0, c0 * sh0);
        let zeta = Complex::new(xip, etap) + a * y0;

        let xi = backside.ternary(PI - zeta.re, zeta.re);
        let y = self.a1 * self.k0 * xi * lat_sign;
        let x = self.a1 * self.k0 * zeta.im * lon_sign;

        (x, y)
    }

    /// Inverse of [`TransverseMercator::forward`].
    pub fn reverse(&self, lon0: f64, x: f64, y: f64) -> GeodeticCoordinate {
        let mut xi = y / (self.a1 * self.k0);
        let mut eta = x / (self.a1 * self.k0);

        let xi_sign = xi.is_sign_negative().ternary(-1., 1.);
        let eta_sign = eta.is_sign_negative().ternary(-1., 1.);

        xi *= xi_sign;
        eta *= eta_sign;

        let backside = xi > FRAC_PI_2;
        if backside {
            xi = PI - xi;
        }

        let c0 = (2. * xi).cos();
        let ch0 = (2. * eta).cosh();
        let s0 = (2. * xi).sin();
        let sh0 = (2. * eta).sinh();

        let a = Complex::new(2. * c0 * ch0, -2. * s0 * sh0);
        let mut n = MAXPOW;

        let mut y0 = Complex::new((n % 2 == 1).ternary(-self.bet[n], 0.), 0.);
        let mut y1 = Complex::default();

        if n % 2 == 1 {
            n -= 1;
        }

        while n > 0 {
            y1 = a * y0 - y1 - self.bet[n];
            n -= 1;

            y0 = a * y1 - y0 - self.bet[n];
            n -= 1;
        }

        let a = Complex::new(s0 * ch0, c0 * sh0);
        let zeta = Complex::new(xi, eta) + a * y0;

        let xip = zeta.re;
        let etap = zeta.im;
        let s = etap.sinh();
        let c = 0_f64.max(xip.cos());
        let r = s.hypot(c);

        let (mut lat, mut lon) = if r.is_zero() {
            (f64::from(dms::QD), 0.)
        } else {
            let lon = s.atan2(c).to_degrees();
            let tau = (xip.sin() / r).tauf(self.es);

            (tau.atan().to_degrees(), lon)
        };

        lat *= xi_sign;
        if backside {
            lon = f64::from(dms::HD) - lon;
        }
        lon *= eta_sign;
        lon = (lon + lon0).ang_normalize();

        GeodeticCoordinate::new(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{constants::UTM_K0, ellipsoid::{CLARKE_1880_MODIFIED, WGS84}};

    #[test]
    fn central_meridian_maps_to_zero_easting() {
        let tm = TransverseMercator::new(&WGS84, UTM_K0);
        let (x, y) = tm.forward(39., 0., 39.);

        assert_abs_diff_eq!(x, 0., epsilon = 1e-9);
        assert_abs_diff_eq!(y, 0., epsilon = 1e-9);
    }

    #[test]
    fn wgs84_utm_reference_point() {
        // Nairobi in WGS84 / UTM 37S, without false offsets
        let tm = TransverseMercator::new(&WGS84, UTM_K0);
        let (x, y) = tm.forward(39., -1.2921, 36.8219);

        assert_abs_diff_eq!(x + 500_000., 257_634.502, epsilon = 0.05);
        assert_abs_diff_eq!(y + 10_000_000., 9_857_079.966, epsilon = 0.05);
    }

    #[test]
    fn quarter_meridian_on_clarke_1880() {
        // Pole lands at k0 times the quarter meridian length
        let tm = TransverseMercator::new(&CLARKE_1880_MODIFIED, 1.);
        let (x, y) = tm.forward(39., 90., 39.);

        assert_abs_diff_eq!(x, 0., epsilon = 1e-6);
        assert_abs_diff_eq!(y, 10_001_867.55, epsilon = 0.05);
    }

    #[test]
    fn forward_is_odd_in_latitude_and_longitude() {
        let tm = TransverseMercator::new(&CLARKE_1880_MODIFIED, UTM_K0);
        let (x1, y1) = tm.forward(39., 2.5, 40.2);
        let (x2, y2) = tm.forward(39., -2.5, 37.8);

        assert_abs_diff_eq!(x1, -x2, epsilon = 1e-9);
        assert_abs_diff_eq!(y1, -y2, epsilon = 1e-9);
    }

    #[test]
    fn signed_zero_latitude_stays_on_equator() {
        let tm = TransverseMercator::new(&CLARKE_1880_MODIFIED, UTM_K0);
        let (x1, y1) = tm.forward(39., 0., 36.8);
        let (x2, y2) = tm.forward(39., -0., 36.8);

        assert_abs_diff_eq!(x1, x2, epsilon = 1e-9);
        assert_abs_diff_eq!(y1, 0., epsilon = 1e-9);
        assert_abs_diff_eq!(y2, 0., epsilon = 1e-9);

        let back = tm.reverse(39., x2, -0.);
        assert_abs_diff_eq!(back.latitude, 0., epsilon = 1e-12);
        assert_abs_diff_eq!(back.longitude, 36.8, epsilon = 1e-9);
    }

    #[test]
    fn reverse_inverts_forward() {
        let tm = TransverseMercator::new(&CLARKE_1880_MODIFIED, UTM_K0);
        for (lat, lon) in [(-1.29317, 36.82267), (-11.5, 41.9), (0., 39.), (4.2, 34.1), (-60., 45.)] {
            let (x, y) = tm.forward(39., lat, lon);
            let back = tm.reverse(39., x, y);

            assert_abs_diff_eq!(back.latitude, lat, epsilon = 1e-9);
            assert_abs_diff_eq!(back.longitude, lon, epsilon = 1e-9);
        }
    }
}
