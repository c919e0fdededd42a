//! Signed offsets and latitude/longitude fixes.

use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit0, one_of},
    combinator::{opt, recognize, verify},
    error::ParseError,
    number::complete::double,
    sequence::{preceded, separated_pair},
};

use super::{Hemisphere, Reference, number::print_fixed, separator, within_field};
use crate::{EncodeError, FieldParse, FieldPrint, FieldWriter, IResult};

/// A magnitude with a sign letter, `x.x,a` on the wire.
///
/// `S` is the sign pair the field allows: [`NorthSouth`](super::NorthSouth) or
/// [`EastWest`](super::EastWest) for geographic offsets,
/// [`LeftRight`](super::LeftRight) for steering, [`Reference`](super::Reference)
/// for bearings. Value and sign travel together: a present value without a sign
/// from the pair does not parse, and the null form leaves both subfields empty.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset<S> {
    pub value: f64,
    pub sign: S,
}

/// A bearing or heading with its `T`/`M` reference.
pub type Bearing = Offset<Reference>;

impl<S> Offset<S> {
    pub fn new(value: f64, sign: S) -> Self {
        Offset { value, sign }
    }
}

impl<S: Hemisphere> Offset<S> {
    /// The value negated for south and west.
    pub fn signed(&self) -> f64 {
        if self.sign.is_negative() {
            -self.value
        } else {
            self.value
        }
    }
}

impl<'a, S, E> FieldParse<&'a str, E> for Offset<S>
where
    S: FieldParse<&'a str, E>,
    E: ParseError<&'a str>,
{
    const SUBFIELDS: usize = 2;

    fn parse(i: &'a str) -> IResult<&'a str, Self, E> {
        separated_pair(f64::parse, separator, S::parse)
            .map(|(value, sign)| Offset { value, sign })
            .parse(i)
    }
}

impl<S: FieldPrint> FieldPrint for Offset<S> {
    const SUBFIELDS: usize = 2;

    fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        if self.value < 0.0 {
            return Err(EncodeError::InvalidParameter("offset magnitude is negative"));
        }
        self.value.print(w)?;
        w.separator()?;
        self.sign.print(w)
    }
}

/// A position fix in signed decimal degrees; north and east are positive.
///
/// On the wire it is `llll.ll,a,yyyyy.yy,a`: degrees and minutes for latitude
/// then longitude, each followed by its hemisphere.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Position {
            latitude,
            longitude,
        }
    }
}

/// `mm[.m...]` minutes of arc, below 60.
fn minutes<'a, E>(i: &'a str) -> nom::IResult<&'a str, f64, E>
where
    E: ParseError<&'a str>,
{
    verify(
        recognize((
            take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
            opt((char('.'), digit0)),
        ))
        .and_then(double),
        |minutes: &f64| *minutes < 60.0,
    )
    .parse(i)
}

/// `degree_digits` whole degrees then minutes, as decimal degrees.
fn degrees_minutes<'a, E>(
    degree_digits: usize,
    max_degrees: f64,
) -> impl Parser<&'a str, Output = f64, Error = E>
where
    E: ParseError<&'a str>,
{
    verify(
        (
            take_while_m_n(degree_digits, degree_digits, |c: char| c.is_ascii_digit())
                .and_then(nom::character::complete::u16),
            minutes,
        )
            .map(|(degrees, minutes)| f64::from(degrees) + minutes / 60.0),
        move |value: &f64| *value <= max_degrees,
    )
}

impl<'a, E> FieldParse<&'a str, E> for Position
where
    E: ParseError<&'a str>,
{
    const SUBFIELDS: usize = 4;

    fn parse(i: &'a str) -> IResult<&'a str, Self, E> {
        (
            within_field(degrees_minutes(2, 90.0)),
            preceded(separator, within_field(one_of("NS"))),
            preceded(separator, within_field(degrees_minutes(3, 180.0))),
            preceded(separator, within_field(one_of("EW"))),
        )
            .map(|(latitude, ns, longitude, ew)| Position {
                latitude: if ns == 'S' { -latitude } else { latitude },
                longitude: if ew == 'W' { -longitude } else { longitude },
            })
            .parse(i)
    }
}

/// Prints `|value|` as zero-padded degrees followed by minutes.
fn print_degrees_minutes(
    value: f64,
    degree_digits: usize,
    w: &mut FieldWriter<'_>,
) -> Result<(), EncodeError> {
    let precision = w.precision();
    let value = value.abs();
    let mut degrees = value.trunc();

    let scale = 10f64.powi(precision as i32);
    let mut minutes = ((value - degrees) * 60.0 * scale).round() / scale;
    if minutes >= 60.0 {
        degrees += 1.0;
        minutes = 0.0;
    }

    write!(w, "{:0width$}", degrees as u32, width = degree_digits)?;
    let width = if precision == 0 { 2 } else { precision + 3 };
    print_fixed(minutes, precision, width, w)
}

impl FieldPrint for Position {
    const SUBFIELDS: usize = 4;

    fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        if !(self.latitude.abs() <= 90.0 && self.longitude.abs() <= 180.0) {
            return Err(EncodeError::InvalidParameter("position out of range"));
        }

        print_degrees_minutes(self.latitude, 2, w)?;
        w.push_str(if self.latitude < 0.0 { ",S," } else { ",N," })?;
        print_degrees_minutes(self.longitude, 3, w)?;
        w.push_str(if self.longitude < 0.0 { ",W" } else { ",E" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Error,
        codec::{EastWest, LeftRight, NorthSouth},
        print::print_to_string,
    };

    fn reparse(printed: &str) -> Position {
        let mut field = heapless::String::<64>::new();
        field.push_str(printed).unwrap();
        field.push('*').unwrap();
        let result: IResult<_, Position> = Position::parse(field.as_str());
        result.unwrap().1
    }

    #[test]
    fn degrees_and_minutes_become_decimal_degrees() {
        let result: IResult<_, _> = Position::parse("4807.038,N,01131.000,E,");
        let (rest, position) = result.unwrap();
        assert_eq!(rest, ",");
        assert!((position.latitude - (48.0 + 7.038 / 60.0)).abs() < 1e-12);
        assert!((position.longitude - (11.0 + 31.0 / 60.0)).abs() < 1e-12);

        let result: IResult<_, _> = Position::parse("3352.1,S,15112.5,W*");
        let (_, position) = result.unwrap();
        assert!(position.latitude < 0.0 && position.longitude < 0.0);
    }

    #[test]
    fn out_of_range_fixes_are_invalid() {
        for input in [
            "4867.0,N,01131.0,E,",
            "9100.0,N,01131.0,E,",
            "4807.0,X,01131.0,E,",
            "4807.0,N,18100.0,E,",
            "4807.0,,01131.0,E,",
        ] {
            let result: IResult<_, Position> = Position::parse(input);
            assert!(result.is_err(), "{input}");
        }
    }

    #[test]
    fn null_fix_is_four_empty_subfields() {
        let result: IResult<_, _> = Option::<Position>::parse(",,,,A*");
        assert_eq!(result, Ok((",A*", None)));
        assert_eq!(
            print_to_string(&Option::<Position>::None, 3).unwrap().as_str(),
            ",,,"
        );
    }

    #[test]
    fn whole_degrees_survive_printing() {
        let position = Position::new(60.0, 30.0);
        let printed = print_to_string(&position, 3).unwrap();
        assert_eq!(printed.as_str(), "6000,N,03000,E");

        let parsed = reparse(&printed);
        assert!((parsed.latitude - 60.0).abs() < 1e-9);
        assert!((parsed.longitude - 30.0).abs() < 1e-9);
    }

    #[test]
    fn minutes_rounding_carries_into_degrees() {
        let position = Position::new(-12.99999999, -0.5);
        let printed = print_to_string(&position, 3).unwrap();
        assert_eq!(printed.as_str(), "1300,S,00030,W");
    }

    #[test]
    fn offsets_require_a_sign() {
        let result: IResult<_, _> = Offset::<EastWest>::parse("3.1,W*");
        assert_eq!(result, Ok(("*", Offset::new(3.1, EastWest::West))));
        assert_eq!(Offset::new(3.1, EastWest::West).signed(), -3.1);

        let result: IResult<_, Offset<EastWest>> = Offset::parse("3.1,,");
        assert!(result.is_err());

        let result: IResult<_, _> = Option::<Offset<EastWest>>::parse(",,A*");
        assert_eq!(result, Ok((",A*", None)));

        assert_eq!(
            print_to_string(&Offset::new(0.25, LeftRight::Left), 3)
                .unwrap()
                .as_str(),
            "0.25,L"
        );
    }

    #[test]
    fn offsets_only_take_signs_from_their_pair() {
        let result: IResult<_, Offset<EastWest>> = Offset::parse("3.1,N*");
        assert!(matches!(result, Err(nom::Err::Error(Error::InvalidField(_)))));

        let result: IResult<_, Offset<NorthSouth>> = Offset::parse("0.12,W*");
        assert!(result.is_err());

        let result: IResult<_, _> = Offset::<NorthSouth>::parse("0.12,S*");
        assert_eq!(Ok(-0.12), result.map(|(_, offset)| offset.signed()));
    }
}
