use crate::{
    Fields,
    codec::{Status, Text},
};

/// AAM - Waypoint arrival alarm
///
/// ```text
///         1 2 3   4 5
///         | | |   | |
///  $--AAM,A,A,x.x,N,c--c*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Aam {
    /// `A` arrival circle entered, `V` not entered
    pub arrival_circle: Option<Status>,
    /// `A` perpendicular passed at the waypoint, `V` not passed
    pub perpendicular: Option<Status>,
    /// Arrival circle radius, nautical miles
    #[field(unit = 'N')]
    pub radius: Option<f64>,
    pub waypoint: Option<Text>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        FieldParse, Generator, IResult, ValidFields,
        address::TalkerId,
        print::print_to_string,
        sentences::{Message, Sentence},
        stream::SentenceReader,
    };

    #[test]
    fn parses_arrival() {
        let result: IResult<_, _> = Aam::parse("A,A,0.10,N,WPTNME*");
        let (rest, aam) = result.unwrap();
        assert_eq!(rest, "*");
        assert_eq!(aam.arrival_circle, Some(Status::Valid));
        assert_eq!(aam.radius, Some(0.1));
        assert_eq!(aam.waypoint.as_deref(), Some("WPTNME"));

        assert_eq!(
            print_to_string(&aam, 3).unwrap().as_str(),
            "A,A,0.1,N,WPTNME"
        );
    }

    #[test]
    fn nothing_but_status() {
        let result: IResult<_, _> = Aam::parse("V,V,,,*");
        let (_, aam) = result.unwrap();
        assert_eq!(aam.radius, None);
        assert_eq!(aam.waypoint, None);
        assert_eq!(
            aam.valid_fields(),
            Aam::VALID_ARRIVAL_CIRCLE | Aam::VALID_PERPENDICULAR
        );
        assert_eq!(print_to_string(&aam, 3).unwrap().as_str(), "V,V,,,");
    }

    #[test]
    fn waypoint_with_comma_round_trips() {
        let aam = Aam {
            arrival_circle: Some(Status::Valid),
            perpendicular: Some(Status::Invalid),
            radius: Some(10.1),
            waypoint: Text::try_from("St. Petersburg, Russia").ok(),
        };

        let mut out = [0u8; 82];
        let n = Generator::new()
            .write(&Sentence::approved(TalkerId::Gl, aam.clone()), &mut out)
            .unwrap();
        assert_eq!(
            &out[..n],
            b"$GLAAM,A,V,10.1,N,St. Petersburg^2C Russia*03\r\n"
        );

        match SentenceReader::new(&out[..n]).next() {
            Some(Ok(Sentence::Approved {
                message: Message::Aam(decoded),
                ..
            })) => assert_eq!(decoded, aam),
            other => panic!("unexpected {other:?}"),
        }
    }
}
