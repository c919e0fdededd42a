use crate::{
    Fields,
    codec::{Dec, Utc},
};

/// GBS - GNSS satellite fault detection
///
/// ```text
///         1         2   3   4   5  6   7   8
///         |         |   |   |   |  |   |   |
///  $--GBS,hhmmss.ss,x.x,x.x,x.x,xx,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Gbs {
    /// UTC time of the GGA or GNS fix this applies to
    pub time: Option<Utc>,
    /// Expected error in latitude, meters
    pub latitude_error: Option<f64>,
    /// Expected error in longitude, meters
    pub longitude_error: Option<f64>,
    /// Expected error in altitude, meters
    pub altitude_error: Option<f64>,
    /// ID number of the most likely failed satellite
    pub failed_satellite: Option<Dec<2>>,
    /// Probability of missed detection for the failed satellite
    pub probability: Option<f64>,
    /// Estimated range bias of the failed satellite, meters
    pub bias: Option<f64>,
    /// Standard deviation of the bias estimate
    pub bias_std_dev: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldParse, IResult, ValidFields, print::print_to_string};

    #[test]
    fn no_failed_satellite() {
        let result: IResult<_, _> = Gbs::parse("235458.00,1.4,1.3,3.1,,,,*");
        let (rest, gbs) = result.unwrap();
        assert_eq!(rest, "*");
        assert_eq!(gbs.altitude_error, Some(3.1));
        assert_eq!(gbs.failed_satellite, None);
        assert_eq!(
            gbs.valid_fields(),
            Gbs::VALID_TIME
                | Gbs::VALID_LATITUDE_ERROR
                | Gbs::VALID_LONGITUDE_ERROR
                | Gbs::VALID_ALTITUDE_ERROR
        );
        assert_eq!(
            print_to_string(&gbs, 2).unwrap().as_str(),
            "235458,1.4,1.3,3.1,,,,"
        );
    }

    #[test]
    fn failed_satellite_is_two_digits() {
        let result: IResult<_, _> = Gbs::parse("235458.00,1.4,1.3,3.1,03,0.02,-21.4,3.8*");
        let (_, gbs) = result.unwrap();
        assert_eq!(gbs.failed_satellite, Some(Dec(3)));
        assert_eq!(gbs.bias, Some(-21.4));
    }
}
