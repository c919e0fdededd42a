//! Values followed by a fixed unit letter, such as `x.x,M` or `x.x,K`.

use nom::{Parser, error::ParseError};

use super::{field_token, separator};
use crate::{EncodeError, Error, FieldParse, FieldPrint, FieldWriter, IResult};

/// Parses a value and its unit subfield.
///
/// A present value must be followed by exactly `unit`. A null value may leave
/// the unit empty or still carry the letter; both decode to `None`.
///
/// ```rust
/// use iec61162::{IResult, codec::unit};
/// use nom::Parser;
///
/// let result: IResult<_, _> = unit::parse::<f64, _>('M').parse("12.5,M*");
/// assert_eq!(result, Ok(("*", Some(12.5))));
///
/// let result: IResult<_, _> = unit::parse::<f64, _>('M').parse(",M*");
/// assert_eq!(result, Ok(("*", None)));
/// ```
pub fn parse<'a, T, E>(
    unit: char,
) -> impl Parser<&'a str, Output = Option<T>, Error = Error<&'a str, E>>
where
    T: FieldParse<&'a str, E>,
    E: ParseError<&'a str>,
{
    move |i: &'a str| -> IResult<&'a str, Option<T>, E> {
        let (rest, value) = Option::<T>::parse(i)?;
        let (rest, _) = separator(rest)?;
        let (rest, token) = field_token(rest)?;

        let mut letter = token.chars();
        match (value, letter.next(), letter.next()) {
            (None, None, _) => Ok((rest, None)),
            (value, Some(c), None) if c == unit => Ok((rest, value)),
            _ => Err(nom::Err::Error(Error::InvalidField(i))),
        }
    }
}

/// Prints a value and its unit. `None` leaves the value's subfields and the
/// unit empty.
pub fn print<T: FieldPrint>(
    value: &Option<T>,
    unit: char,
    w: &mut FieldWriter<'_>,
) -> Result<(), EncodeError> {
    value.print(w)?;
    w.separator()?;
    match value {
        Some(_) => w.push(unit),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        codec::{LeftRight, Offset},
        print::Staging,
    };

    #[test]
    fn present_values_need_their_unit() {
        let result: IResult<_, Option<f64>> = parse::<f64, _>('K').parse("3.5,,");
        assert!(matches!(result, Err(nom::Err::Error(Error::InvalidField(_)))));

        let result: IResult<_, Option<f64>> = parse::<f64, _>('K').parse("3.5,N,");
        assert!(result.is_err());

        let result: IResult<_, _> = parse::<f64, _>('K').parse(",,A*");
        assert_eq!(result, Ok((",A*", None)));
    }

    #[test]
    fn prints_value_and_letter() {
        let mut buf = Staging::new();
        let mut w = FieldWriter::new(&mut buf, 3);
        print(&Some(1.989), 'N', &mut w).unwrap();
        w.separator().unwrap();
        print(&Option::<f64>::None, 'K', &mut w).unwrap();
        assert_eq!(buf.as_str(), "1.989,N,,");
    }

    #[test]
    fn null_pair_keeps_every_subfield() {
        let mut buf = Staging::new();
        let mut w = FieldWriter::new(&mut buf, 3);
        print(&Option::<Offset<LeftRight>>::None, 'N', &mut w).unwrap();
        w.separator().unwrap();
        print(&Some(Offset::new(0.1, LeftRight::Right)), 'N', &mut w).unwrap();
        assert_eq!(buf.as_str(), ",,,0.1,R,N");

        let result: IResult<_, _> = parse::<Offset<LeftRight>, _>('N').parse(",,,A*");
        assert_eq!(result, Ok((",A*", None)));
    }
}
