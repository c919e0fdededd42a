use crate::{Fields, codec::Text};

/// BOD - Bearing, origin to destination
///
/// ```text
///         1   2 3   4 5    6
///         |   | |   | |    |
///  $--BOD,x.x,T,x.x,M,c--c,c--c*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Bod {
    #[field(unit = 'T')]
    pub bearing_true: Option<f64>,
    #[field(unit = 'M')]
    pub bearing_magnetic: Option<f64>,
    /// Destination waypoint
    pub destination: Option<Text>,
    /// Origin waypoint
    pub origin: Option<Text>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldParse, IResult, ValidFields, print::print_to_string};

    #[test]
    fn parses_route_leg() {
        let result: IResult<_, _> = Bod::parse("097.0,T,103.2,M,POINTB,POINTA*");
        let (rest, bod) = result.unwrap();
        assert_eq!(rest, "*");
        assert_eq!(bod.bearing_true, Some(97.0));
        assert_eq!(bod.bearing_magnetic, Some(103.2));
        assert_eq!(bod.destination.as_deref(), Some("POINTB"));
        assert_eq!(bod.origin.as_deref(), Some("POINTA"));

        assert_eq!(
            print_to_string(&bod, 3).unwrap().as_str(),
            "97,T,103.2,M,POINTB,POINTA"
        );
    }

    #[test]
    fn origin_is_optional() {
        let result: IResult<_, _> = Bod::parse("097.0,T,,,POINTB,*");
        let (_, bod) = result.unwrap();
        assert_eq!(
            bod.valid_fields(),
            Bod::VALID_BEARING_TRUE | Bod::VALID_DESTINATION
        );
        assert_eq!(
            print_to_string(&bod, 3).unwrap().as_str(),
            "97,T,,,POINTB,"
        );
    }

    #[test]
    fn unit_letters_are_fixed() {
        let result: IResult<_, Bod> = Bod::parse("097.0,M,103.2,T,POINTB,POINTA*");
        assert!(result.is_err());
    }
}
