use crate::{
    Fields,
    codec::{Dec, GpsQuality, Position, Utc},
};

/// GGA - Global positioning system fix data
///
/// ```text
///         1         2       3 4        5 6 7  8   9   10 11  12 13  14
///         |         |       | |        | | |  |   |   |  |   |  |   |
///  $--GGA,hhmmss.ss,llll.ll,a,yyyyy.yy,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Gga {
    pub time: Option<Utc>,
    pub position: Option<Position>,
    pub quality: Option<GpsQuality>,
    /// Number of satellites in use, 00 to 12
    pub satellites: Option<Dec<2>>,
    /// Horizontal dilution of precision
    pub hdop: Option<f64>,
    /// Antenna altitude above mean sea level, meters
    #[field(unit = 'M')]
    pub altitude: Option<f64>,
    /// Geoidal separation, meters
    #[field(unit = 'M')]
    pub geoidal_separation: Option<f64>,
    /// Age of differential corrections, seconds
    pub dgps_age: Option<f64>,
    /// Differential reference station ID
    pub station: Option<Dec<4>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldParse, FieldPrint, IResult, ValidFields, print::print_to_string};

    #[test]
    fn parses_fix() {
        let input = "123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*";
        let result: IResult<_, _> = Gga::parse(input);
        let (rest, gga) = result.unwrap();
        assert_eq!(rest, "*");
        assert_eq!(gga.time, Some(Utc::new(12, 35, 19.0)));
        assert_eq!(gga.quality, Some(GpsQuality::Gps));
        assert_eq!(gga.satellites, Some(Dec(8)));
        assert_eq!(gga.altitude, Some(545.4));
        assert_eq!(gga.geoidal_separation, Some(46.9));
        assert_eq!(gga.dgps_age, None);
        assert_eq!(gga.station, None);
        assert_eq!(
            gga.valid_fields() & (Gga::VALID_DGPS_AGE | Gga::VALID_STATION),
            0
        );

        assert_eq!(
            print_to_string(&gga, 3).unwrap().as_str(),
            "123519,4807.038,N,01131,E,1,08,0.9,545.4,M,46.9,M,,"
        );
    }

    #[test]
    fn empty_fix_keeps_every_comma() {
        let input = ",,,,,0,00,,,M,,M,,*";
        let result: IResult<_, _> = Gga::parse(input);
        let (_, gga) = result.unwrap();
        assert_eq!(gga.position, None);
        assert_eq!(gga.quality, Some(GpsQuality::Invalid));
        assert_eq!(gga.altitude, None);
        assert_eq!(
            gga.valid_fields(),
            Gga::VALID_QUALITY | Gga::VALID_SATELLITES
        );
        assert_eq!(<Gga as FieldPrint>::SUBFIELDS, 14);
        assert_eq!(print_to_string(&gga, 3).unwrap().as_str(), ",,,,,0,00,,,,,,,");
    }

    #[test]
    fn altitude_needs_meters() {
        let input = "123519,4807.038,N,01131.000,E,1,08,0.9,545.4,F,46.9,M,,*";
        let result: IResult<_, Gga> = Gga::parse(input);
        assert!(result.is_err());
    }
}
