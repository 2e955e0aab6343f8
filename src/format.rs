//! Fixed-precision rendering for showing positions to a user.

/// Latitude or longitude to 6 decimal places with a degree mark.
///
/// ```
/// use arc1960::format::format_degrees;
///
/// assert_eq!(format_degrees(-1.2921), "-1.292100°");
/// assert_eq!(format_degrees(36.82191234), "36.821912°");
/// ```
pub fn format_degrees(value: f64) -> String {
    format!("{value:.6}°")
}

/// Easting or northing to 2 decimal places with a meter unit.
///
/// ```
/// use arc1960::format::format_meters;
///
/// assert_eq!(format_meters(257_716.417), "257716.42 m");
/// assert_eq!(format_meters(9_856_974.7651), "9856974.77 m");
/// ```
pub fn format_meters(value: f64) -> String {
    format!("{value:.2} m")
}

/// Altitude rounded to the nearest whole meter.
///
/// ```
/// use arc1960::format::format_altitude;
///
/// assert_eq!(format_altitude(1661.5), "1662 m");
/// assert_eq!(format_altitude(-0.4), "0 m");
/// ```
pub fn format_altitude(value: f64) -> String {
    // + 0.0 turns -0.0 into 0.0
    format!("{:.0} m", value.round() + 0.)
}
