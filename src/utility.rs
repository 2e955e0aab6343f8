pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
    /// Degrees per turn
    pub const TD: i32 = 2 * HD;
}

/// Newton steps allowed when recovering geodetic from conformal latitude.
/// Two or three are enough for any Earth-like ellipsoid.
const MAX_NEWTON_STEPS: usize = 5;

/// Evaluate a polynomial, coefficients in decreasing order of power
pub(crate) fn polyval(p: &[f64], x: f64) -> f64 {
    p
        .iter()
        .fold(0_f64, |acc, val| acc*x + val)
}

/// `es * atanh(es * x)`, with a negative `es` standing for a prolate
/// ellipsoid.
fn eatanhe(x: f64, es: f64) -> f64 {
    if es > 0. {
        es * (es * x).atanh()
    } else {
        -es * (es * x).atan()
    }
}

/// IEEE style remainder: the result is in `[-denom/2, denom/2]`.
fn remainder(x: f64, denom: f64) -> f64 {
    x - (x / denom).round() * denom
}

pub(crate) trait GeoMath {
    fn is_zero(&self) -> bool;
    fn eps_eq(&self, other: Self) -> bool;
    fn ang_normalize(&self) -> Self;
    fn ang_diff(&self, other: Self) -> Self;
    fn taupf(&self, es: Self) -> Self;
    fn tauf(&self, es: Self) -> Self;
}

impl GeoMath for f64 {
    fn is_zero(&self) -> bool {
        self.abs() < f64::EPSILON
    }

    fn eps_eq(&self, other: f64) -> bool {
        (*self - other).abs() < f64::EPSILON
    }

    /// Reduce an angle in degrees to `[-180, 180]`, keeping the sign of
    /// `±180`.
    fn ang_normalize(&self) -> f64 {
        let hd = f64::from(dms::HD);
        let value = remainder(*self, f64::from(dms::TD));

        if value.abs().eps_eq(hd) {
            hd.copysign(*self)
        }
        else {
            value
        }
    }

    /// `other - self` for angles in degrees, reduced to `[-180, 180]`.
    /// Both inputs are longitudes, so the difference is exact to an ulp.
    fn ang_diff(&self, other: f64) -> f64 {
        (other - *self).ang_normalize()
    }

    /// Conformal latitude tangent from geodetic latitude tangent.
    fn taupf(&self, es: f64) -> f64 {
        let tau = *self;
        let sec = 1_f64.hypot(tau);
        let sig = eatanhe(tau / sec, es).sinh();

        1_f64.hypot(sig) * tau - sig * sec
    }

    /// Geodetic latitude tangent from conformal latitude tangent, by
    /// Newton's method.
    fn tauf(&self, es: f64) -> f64 {
        let taup = *self;
        let e2m = 1. - es * es;
        let stop = f64::EPSILON.sqrt() / 10. * taup.abs().max(1.);

        // Near the poles tau ~ taup * exp(eatanhe(1))
        let mut tau = if taup.abs() > 70. {
            taup * eatanhe(1., es).exp()
        } else {
            taup / e2m
        };

        for _ in 0..MAX_NEWTON_STEPS {
            let guess = tau.taupf(es);
            let step = (taup - guess) * (1. + e2m * tau * tau)
                / (e2m * 1_f64.hypot(tau) * 1_f64.hypot(guess));
            tau += step;
            if step.abs() < stop {
                break;
            }
        }
        tau
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn polyval_evaluates_highest_power_first() {
        // 2x^2 + 3x + 4 at x = 2
        assert_abs_diff_eq!(polyval(&[2., 3., 4.], 2.), 18.);
        assert_abs_diff_eq!(polyval(&[], 2.), 0.);
    }

    #[test]
    fn ang_diff_wraps_across_antimeridian() {
        assert_abs_diff_eq!(39_f64.ang_diff(36.8219), -2.1781, epsilon = 1e-12);
        assert_abs_diff_eq!(170_f64.ang_diff(-170.), 20., epsilon = 1e-12);
        assert_abs_diff_eq!((-170_f64).ang_diff(170.), -20., epsilon = 1e-12);
    }

    #[test]
    fn ang_normalize_keeps_range() {
        assert_abs_diff_eq!(370_f64.ang_normalize(), 10., epsilon = 1e-12);
        assert_abs_diff_eq!((-190_f64).ang_normalize(), 170., epsilon = 1e-12);
        assert_abs_diff_eq!(180_f64.ang_normalize(), 180.);
        assert_abs_diff_eq!((-180_f64).ang_normalize(), -180.);
    }

    #[test]
    fn eatanhe_handles_oblate_and_prolate() {
        assert_abs_diff_eq!(eatanhe(0.5, 0.1), 0.1 * 0.05_f64.atanh(), epsilon = 1e-15);
        assert_abs_diff_eq!(eatanhe(0.5, -0.1), 0.1 * (-0.05_f64).atan(), epsilon = 1e-15);
        assert_abs_diff_eq!(eatanhe(0.5, 0.), 0.);
    }

    #[test]
    fn tauf_inverts_taupf() {
        let es = (1. / 293.465_f64 * (2. - 1. / 293.465)).sqrt();
        for lat in [-89.9_f64, -45., -1.2921, 0., 12.5, 60., 89.] {
            let tau = lat.to_radians().tan();
            let back = tau.taupf(es).tauf(es);
            assert_abs_diff_eq!(back.atan().to_degrees(), lat, epsilon = 1e-10);
        }
    }
}
