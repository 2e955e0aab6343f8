use std::{env, ffi::OsString, fmt::Debug};

use arc1960::{
    arc1960_utm37s_to_wgs84,
    compute_utm_zone_label,
    format::{format_altitude, format_degrees, format_meters},
    from_str,
    wgs84_to_arc1960_utm37s,
    Error,
    GeodeticCoordinate,
};
use clap::{arg, command, ErrorKind::{DisplayHelp, DisplayVersion}};
use log::{debug, trace};

fn get_matches<I, T>(args: I) -> Result<clap::ArgMatches, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    command!()
        .allow_negative_numbers(true)
        .arg_required_else_help(true)
        .about("Show a WGS84 GPS position on the Arc 1960 / UTM zone 37S grid")
        .args(&[
            arg!(<FIRST> "Latitude in decimal degrees, or easting in meters with --utm"),
            arg!(<SECOND> "Longitude in decimal degrees, or northing in meters with --utm"),
            arg!(--utm "Convert an Arc 1960 / UTM 37S easting and northing back to WGS84"),
            arg!(--altitude <METERS> "Altitude of the fix, shown to the nearest meter")
                .required(false),
        ])
        .try_get_matches_from(args)
}

fn parse_meters(name: &str, value: &str) -> Result<f64, Error> {
    value
        .parse()
        .map_err(|e| Error::InvalidInput(format!("Bad {name} \"{value}\": {e}")))
}

fn report(matches: &clap::ArgMatches) -> Result<String, Error> {
    let first = matches.value_of("FIRST").unwrap_or_default();
    let second = matches.value_of("SECOND").unwrap_or_default();

    let coord: GeodeticCoordinate = if matches.is_present("utm") {
        let easting = parse_meters("easting", first)?;
        let northing = parse_meters("northing", second)?;
        arc1960_utm37s_to_wgs84(easting, northing)?
    } else {
        from_str(format!("{first} {second}"))?
    };
    debug!("WGS84 position: {coord}");

    let grid = wgs84_to_arc1960_utm37s(coord.latitude(), coord.longitude())?;
    let zone = compute_utm_zone_label(coord.latitude(), coord.longitude())?;

    let mut lines = vec![
        format!("Latitude:  {}", format_degrees(coord.latitude())),
        format!("Longitude: {}", format_degrees(coord.longitude())),
    ];
    if let Some(altitude) = matches.value_of("altitude") {
        lines.push(format!("Altitude:  {}", format_altitude(parse_meters("altitude", altitude)?)));
    }
    lines.push(format!("UTM zone:  {zone}"));
    lines.push(format!("Easting:   {}", format_meters(grid.easting())));
    lines.push(format!("Northing:  {}", format_meters(grid.northing())));

    Ok(lines.join("\n"))
}

fn main_with_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T> + Debug,
    T: Into<OsString> + Clone,
{
    debug!("args:\n{:?}", &args);

    let matches = match get_matches(args) {
        Ok(matches) => matches,
        Err(e) => {
            trace!("clap error: {:?}", e.kind());
            if let Err(io_error) = e.print() {
                debug!("could not print clap message: {io_error}");
            }
            return match e.kind() {
                DisplayHelp | DisplayVersion => 0,
                _ => 1,
            };
        }
    };

    match report(&matches) {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

fn main() {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    );
    trace!("start main");
    let code = main_with_args(env::args());
    trace!("end main");
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_report_uses_display_precision() {
        let matches = get_matches(["arc1960", "-1.2921", "36.8219", "--altitude", "1661.4"]).unwrap();
        let text = report(&matches).unwrap();

        assert!(text.contains("Latitude:  -1.292100°"));
        assert!(text.contains("Altitude:  1661 m"));
        assert!(text.contains("UTM zone:  37S"));
        assert!(text.contains("Easting:   257716.42 m"));
        assert!(text.contains("Northing:  9856974.7"));
    }

    #[test]
    fn reverse_report_recovers_position() {
        let matches = get_matches(["arc1960", "--utm", "257716.417", "9856974.765"]).unwrap();
        let text = report(&matches).unwrap();

        assert!(text.contains("Latitude:  -1.292100°"));
        assert!(text.contains("Longitude: 36.821900°"));
    }

    #[test]
    fn exit_codes() {
        assert_eq!(main_with_args(["arc1960", "-1.2921", "36.8219"]), 0);
        assert_eq!(main_with_args(["arc1960", "-100", "36.8219"]), 1);
        assert_eq!(main_with_args(["arc1960", "--utm", "east", "9856974.765"]), 1);
        assert_eq!(main_with_args(["arc1960", "--help"]), 0);
    }
}
