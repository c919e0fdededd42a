//! Fixed-width digit groups.
//!
//! Several fields carry a value as exactly `W` digits, most significant first:
//! satellite numbers, alarm identifiers, and the bit-packed almanac words.
//! [`Dec`] and [`Hex`] hold such a value together with its width.

use core::num::ParseIntError;

use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    error::{FromExternalError, ParseError},
};

use super::within_field;
use crate::{EncodeError, FieldParse, FieldPrint, FieldWriter, IResult};

/// Exactly `width` digits of `radix`.
fn digits<'a, E>(width: usize, radix: u32) -> impl Parser<&'a str, Output = u32, Error = E>
where
    E: ParseError<&'a str> + FromExternalError<&'a str, ParseIntError>,
{
    take_while_m_n(width, width, move |c: char| c.is_digit(radix))
        .map_res(move |digits| u32::from_str_radix(digits, radix))
}

fn fits(value: u32, width: usize, radix: u32) -> bool {
    match u32::try_from(width).ok().and_then(|w| radix.checked_pow(w)) {
        Some(limit) => value < limit,
        None => true,
    }
}

/// `W` decimal digits.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec<const W: usize>(pub u32);

/// `W` hexadecimal digits. Either case parses; printing is uppercase.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hex<const W: usize>(pub u32);

impl<'a, E, const W: usize> FieldParse<&'a str, E> for Dec<W>
where
    E: ParseError<&'a str>,
{
    fn parse(i: &'a str) -> IResult<&'a str, Self, E> {
        within_field(digits(W, 10).map(Dec)).parse(i)
    }
}

impl<const W: usize> FieldPrint for Dec<W> {
    fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        if !fits(self.0, W, 10) {
            return Err(EncodeError::InvalidParameter("value wider than its digit group"));
        }
        write!(w, "{:0width$}", self.0, width = W)
    }
}

impl<'a, E, const W: usize> FieldParse<&'a str, E> for Hex<W>
where
    E: ParseError<&'a str>,
{
    fn parse(i: &'a str) -> IResult<&'a str, Self, E> {
        within_field(digits(W, 16).map(Hex)).parse(i)
    }
}

impl<const W: usize> FieldPrint for Hex<W> {
    fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        if !fits(self.0, W, 16) {
            return Err(EncodeError::InvalidParameter("value wider than its digit group"));
        }
        write!(w, "{:0width$X}", self.0, width = W)
    }
}

impl<const W: usize> From<u32> for Dec<W> {
    fn from(value: u32) -> Self {
        Dec(value)
    }
}

impl<const W: usize> From<u32> for Hex<W> {
    fn from(value: u32) -> Self {
        Hex(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::print::print_to_string;

    #[test]
    fn width_is_exact() {
        let result: IResult<_, _> = Dec::<3>::parse("007,");
        assert_eq!(result, Ok((",", Dec(7))));

        for input in ["07,", "0007,", "0x7,"] {
            let result: IResult<_, Dec<3>> = Dec::<3>::parse(input);
            assert!(result.is_err(), "{input}");
        }
    }

    #[test]
    fn hex_accepts_either_case() {
        let result: IResult<_, _> = Hex::<4>::parse("0a1F*");
        assert_eq!(result, Ok(("*", Hex(0x0A1F))));
        assert_eq!(print_to_string(&Hex::<4>(0x0A1F), 3).unwrap().as_str(), "0A1F");
        assert_eq!(print_to_string(&Hex::<6>(0xFF), 3).unwrap().as_str(), "0000FF");
    }

    #[test]
    fn overwide_values_are_rejected() {
        assert_eq!(print_to_string(&Dec::<2>(99), 3).unwrap().as_str(), "99");
        assert!(matches!(
            print_to_string(&Dec::<2>(100), 3),
            Err(EncodeError::InvalidParameter(_))
        ));
        assert!(matches!(
            print_to_string(&Hex::<3>(0x1000), 3),
            Err(EncodeError::InvalidParameter(_))
        ));
    }
}
