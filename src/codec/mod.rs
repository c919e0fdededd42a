//! # Field Codecs
//!
//! Every field type of the protocol implements [`FieldParse`](crate::FieldParse) and
//! [`FieldPrint`](crate::FieldPrint). The building blocks shared by those
//! implementations live here: locating the end of a field, recognizing the null
//! form of a multi-subfield value, and trimming printed numbers.

pub mod datetime;
pub mod enums;
pub mod fixed;
pub mod number;
pub mod offset;
pub mod text;
pub mod unit;

pub use datetime::{Date, LocalZone, Utc};
pub use enums::{
    Datum, EastWest, FixMode, GpsQuality, Hemisphere, LeftRight, ModeIndicator, ModeIndicators,
    NorthSouth, Reference, SelectionMode, Status,
};
pub use fixed::{Dec, Hex};
pub use offset::{Bearing, Offset, Position};
pub use text::Text;

use nom::{
    Parser,
    character::complete::char,
    combinator::all_consuming,
    error::ParseError,
};

use crate::{Error, IResult};

/// Parses the `,` between two fields.
///
/// ```rust
/// use iec61162::{IResult, codec::separator};
///
/// let result: IResult<_, _> = separator(",N*");
/// assert_eq!(result, Ok(("N*", ',')));
/// ```
pub fn separator<'a, E>(i: &'a str) -> IResult<&'a str, char, E>
where
    E: ParseError<&'a str>,
{
    char(',').parse(i)
}

/// Splits off the content of the current field.
///
/// The content runs up to the next `,` or `*`, which stays in the remaining input.
/// Running out of input before either terminator is a [`nom::Err::Failure`] with
/// [`Error::UnterminatedField`]: nothing after the bound may be read.
pub fn field_token<'a, E>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    match i.find([',', '*']) {
        Some(end) => Ok((&i[end..], &i[..end])),
        None => Err(nom::Err::Failure(Error::UnterminatedField(i))),
    }
}

/// Runs `f` over the content of the current field.
///
/// `f` must use up the whole content. A content `f` rejects or leaves partly
/// unread is a recoverable [`Error::InvalidField`] at the start of the field.
///
/// ```rust
/// use iec61162::{Error, IResult, codec::within_field};
/// use nom::{Parser, character::complete::one_of};
///
/// let result: IResult<_, _> = within_field(one_of("NS")).parse("S,");
/// assert_eq!(result, Ok((",", 'S')));
///
/// let result: IResult<_, char> = within_field(one_of("NS")).parse("SW,");
/// assert_eq!(result, Err(nom::Err::Error(Error::InvalidField("SW,"))));
/// ```
pub fn within_field<'a, O, E, F>(
    f: F,
) -> impl Parser<&'a str, Output = O, Error = Error<&'a str, E>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
    E: ParseError<&'a str>,
{
    let mut content = all_consuming(f);

    move |i: &'a str| -> IResult<&'a str, O, E> {
        let (rest, token) = field_token(i)?;
        match content.parse(token) {
            Ok((_, value)) => Ok((rest, value)),
            Err(_) => Err(nom::Err::Error(Error::InvalidField(i))),
        }
    }
}

/// Recognizes the null form of a value spanning `subfields` subfields.
///
/// The null form is `subfields - 1` commas followed by a terminator. The commas
/// are consumed, the terminator is not. Anything else is a recoverable
/// [`Error::InvalidField`], so callers can go on to parse the present value.
pub(crate) fn null_field<'a, E>(i: &'a str, subfields: usize) -> IResult<&'a str, (), E> {
    let separators = subfields.saturating_sub(1);
    let bytes = i.as_bytes();

    for n in 0..separators {
        match bytes.get(n) {
            Some(b',') => {}
            Some(_) => return Err(nom::Err::Error(Error::InvalidField(i))),
            None => return Err(nom::Err::Failure(Error::UnterminatedField(i))),
        }
    }

    match bytes.get(separators) {
        Some(b',' | b'*') => Ok((&i[separators..], ())),
        Some(_) => Err(nom::Err::Error(Error::InvalidField(i))),
        None => Err(nom::Err::Failure(Error::UnterminatedField(i))),
    }
}

/// Drops trailing fractional zeros, a dangling `.`, and the sign of a negative zero.
pub(crate) fn trim_fraction(s: &str) -> &str {
    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    };

    if trimmed.starts_with('-') && trimmed[1..].bytes().all(|b| b == b'0') {
        &trimmed[1..]
    } else {
        trimmed
    }
}
