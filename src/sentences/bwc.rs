use crate::{
    Fields,
    codec::{ModeIndicator, Position, Text, Utc},
};

/// BWC - Bearing and distance to waypoint, great circle
///
/// ```text
///         1         2       3 4        5 6   7 8   9 10  11 12   13
///         |         |       | |        | |   | |   | |   |  |    |
///  $--BWC,hhmmss.ss,llll.ll,a,yyyyy.yy,a,x.x,T,x.x,M,x.x,N,c--c,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Bwc {
    /// Time of observation
    pub time: Option<Utc>,
    pub waypoint_position: Option<Position>,
    #[field(unit = 'T')]
    pub bearing_true: Option<f64>,
    #[field(unit = 'M')]
    pub bearing_magnetic: Option<f64>,
    /// Great circle distance, nautical miles
    #[field(unit = 'N')]
    pub distance: Option<f64>,
    pub waypoint: Option<Text>,
    pub mode: Option<ModeIndicator>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        FieldParse, Generator, IResult, ValidFields, address::TalkerId, print::print_to_string,
        sentences::Sentence,
    };

    const INPUT: &str = "225444,4917.24,N,12309.57,W,051.9,T,031.6,M,001.3,N,004,A*";

    #[test]
    fn parses_great_circle_leg() {
        let result: IResult<_, _> = Bwc::parse(INPUT);
        let (rest, bwc) = result.unwrap();
        assert_eq!(rest, "*");
        assert_eq!(bwc.time, Some(Utc::new(22, 54, 44.0)));
        assert_eq!(bwc.bearing_true, Some(51.9));
        assert_eq!(bwc.bearing_magnetic, Some(31.6));
        assert_eq!(bwc.distance, Some(1.3));
        assert_eq!(bwc.waypoint.as_deref(), Some("004"));
        assert_eq!(bwc.mode, Some(ModeIndicator::Autonomous));
        assert_eq!(bwc.valid_fields().count_ones(), 7);

        let position = bwc.waypoint_position.unwrap();
        assert!((position.latitude - (49.0 + 17.24 / 60.0)).abs() < 1e-9);
        assert!((position.longitude + (123.0 + 9.57 / 60.0)).abs() < 1e-9);
    }

    #[test]
    fn generates_full_frame() {
        let result: IResult<_, _> = Bwc::parse(INPUT);
        let (_, bwc) = result.unwrap();
        assert_eq!(
            print_to_string(&bwc, 3).unwrap().as_str(),
            "225444,4917.24,N,12309.57,W,51.9,T,31.6,M,1.3,N,004,A"
        );

        let mut out = [0u8; 82];
        let n = Generator::new()
            .write(&Sentence::approved(TalkerId::Gp, bwc), &mut out)
            .unwrap();
        assert_eq!(
            &out[..n],
            &b"$GPBWC,225444,4917.24,N,12309.57,W,51.9,T,31.6,M,1.3,N,004,A*44\r\n"[..]
        );
    }
}
