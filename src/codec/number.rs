//! Variable-precision numbers and plain integers.

use core::fmt::Write;

use nom::{
    Parser,
    branch::alt,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{opt, recognize},
    error::ParseError,
    number::complete::double,
};

use super::{trim_fraction, within_field};
use crate::{EncodeError, FieldParse, FieldPrint, FieldWriter, IResult};

/// Upper bound on the fractional digits a generator may request.
pub const MAX_PRECISION: usize = 9;

/// Recognizes `[+-]digits[.digits]`, with at least one digit on either side of
/// the point. Exponents, `inf` and `nan` stay outside.
pub(crate) fn decimal<'a, E>(i: &'a str) -> nom::IResult<&'a str, f64, E>
where
    E: ParseError<&'a str>,
{
    recognize((
        opt(one_of("+-")),
        alt((
            recognize((digit1, opt((char('.'), digit0)))),
            recognize((char('.'), digit1)),
        )),
    ))
    .and_then(double)
    .parse(i)
}

impl<'a, E> FieldParse<&'a str, E> for f64
where
    E: ParseError<&'a str>,
{
    fn parse(i: &'a str) -> IResult<&'a str, Self, E> {
        within_field(decimal).parse(i)
    }
}

impl FieldPrint for f64 {
    fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        print_fixed(*self, w.precision(), 0, w)
    }
}

/// Prints `value` with `precision` fractional digits, zero-padded to `width`,
/// then trims the fraction.
pub(crate) fn print_fixed(
    value: f64,
    precision: usize,
    width: usize,
    w: &mut FieldWriter<'_>,
) -> Result<(), EncodeError> {
    if !value.is_finite() {
        return Err(EncodeError::InvalidParameter("number is not finite"));
    }

    let mut buf: heapless::String<48> = heapless::String::new();
    write!(buf, "{value:0width$.precision$}").map_err(|_| EncodeError::SentenceExceedsMaxSize)?;
    w.push_str(trim_fraction(&buf))
}

macro_rules! integer_field {
    ($($t:tt),*) => {
        $(
            impl<'a, E> FieldParse<&'a str, E> for $t
            where
                E: ParseError<&'a str>,
            {
                fn parse(i: &'a str) -> IResult<&'a str, Self, E> {
                    within_field(nom::character::complete::$t).parse(i)
                }
            }

            impl FieldPrint for $t {
                fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
                    write!(w, "{}", self)
                }
            }
        )*
    };
}

integer_field!(u8, u16, u32);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, print::print_to_string};

    #[test]
    fn accepts_signed_and_bare_fractions() {
        let result: IResult<_, _> = f64::parse("-12.5,");
        assert_eq!(result, Ok((",", -12.5)));

        let result: IResult<_, _> = f64::parse("+.25*");
        assert_eq!(result, Ok(("*", 0.25)));

        let result: IResult<_, _> = f64::parse("7.*");
        assert_eq!(result, Ok(("*", 7.0)));
    }

    #[test]
    fn rejects_foreign_characters_before_terminator() {
        for input in ["1.2.3,", "1e5,", "abc,", "-,", ".,", "1 ,"] {
            let result: IResult<_, f64> = f64::parse(input);
            assert!(
                matches!(result, Err(nom::Err::Error(Error::InvalidField(_)))),
                "{input}"
            );
        }
    }

    #[test]
    fn prints_with_trimmed_fraction() {
        assert_eq!(print_to_string(&0.223, 3).unwrap().as_str(), "0.223");
        assert_eq!(print_to_string(&1.5, 3).unwrap().as_str(), "1.5");
        assert_eq!(print_to_string(&3.0, 3).unwrap().as_str(), "3");
        assert_eq!(print_to_string(&1.98856, 3).unwrap().as_str(), "1.989");
        assert_eq!(print_to_string(&-0.0001, 3).unwrap().as_str(), "0");
        assert_eq!(print_to_string(&120.0, 0).unwrap().as_str(), "120");
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        assert!(matches!(
            print_to_string(&f64::NAN, 3),
            Err(EncodeError::InvalidParameter(_))
        ));
        assert!(matches!(
            print_to_string(&f64::INFINITY, 3),
            Err(EncodeError::InvalidParameter(_))
        ));
    }

    #[test]
    fn printed_numbers_reparse_to_the_rounded_value() {
        for value in [0.0, 0.001, 1.25, -7.5, 359.999, 12345.678] {
            let printed = print_to_string(&value, 3).unwrap();
            let mut field = heapless::String::<64>::new();
            field.push_str(&printed).unwrap();
            field.push('*').unwrap();

            let result: IResult<_, f64> = f64::parse(field.as_str());
            let (_, parsed) = result.unwrap();
            assert!((parsed - value).abs() < 1e-9, "{value} -> {printed}");
        }
    }

    #[test]
    fn integers_are_digit_runs() {
        let result: IResult<_, _> = u16::parse("1024,");
        assert_eq!(result, Ok((",", 1024)));

        let result: IResult<_, u8> = u8::parse("256,");
        assert!(matches!(result, Err(nom::Err::Error(Error::InvalidField(_)))));

        let result: IResult<_, u8> = u8::parse("-1,");
        assert!(matches!(result, Err(nom::Err::Error(Error::InvalidField(_)))));

        assert_eq!(print_to_string(&42u32, 3).unwrap().as_str(), "42");
    }
}
