use nom::{Input, error::ParseError};

use crate::{
    IResult,
    codec::{null_field, separator},
};

/// Trait for parsing types from sentence fields.
///
/// `FieldParse` gives a uniform interface over every field type of the protocol:
/// numbers, times, offsets, positions, digit groups, text, enumerations, and the
/// records built from them. Implementations consume the field content and stop at
/// its terminator (`,` or `*`), which they leave in place for the caller.
///
/// A field type that spans several comma-separated subfields declares it through
/// [`SUBFIELDS`](FieldParse::SUBFIELDS). `Option<T>` uses that count to recognize
/// the null form: exactly `SUBFIELDS` empty subfields.
///
/// # Examples
///
/// ```rust
/// use iec61162::{FieldParse, IResult};
///
/// // A single number field
/// let result: IResult<_, _> = f64::parse("12.5,N*");
/// assert_eq!(result, Ok((",N*", 12.5)));
///
/// // An empty field is null, not an error
/// let result: IResult<_, _> = Option::<f64>::parse(",N*");
/// assert_eq!(result, Ok((",N*", None)));
/// ```
///
/// # Implementing for Custom Types
///
/// ```rust
/// use iec61162::{FieldParse, IResult, codec::separator};
/// use nom::error::ParseError;
///
/// struct Depth {
///     meters: f64,
///     offset: Option<f64>,
/// }
///
/// impl<'a, E: ParseError<&'a str>> FieldParse<&'a str, E> for Depth {
///     const SUBFIELDS: usize = 2;
///
///     fn parse(i: &'a str) -> IResult<&'a str, Self, E> {
///         let (i, meters) = f64::parse(i)?;
///         let (i, _) = separator(i)?;
///         let (i, offset) = Option::<f64>::parse(i)?;
///
///         Ok((i, Depth { meters, offset }))
///     }
/// }
///
/// let result: IResult<_, _> = Depth::parse("4.1,0.5*");
/// assert!(result.is_ok());
/// ```
pub trait FieldParse<I, E = nom::error::Error<I>>
where
    I: Input,
    E: ParseError<I>,
    Self: Sized,
{
    /// Number of comma-separated subfields the value occupies on the wire.
    const SUBFIELDS: usize = 1;

    /// Parses the input and returns a result.
    ///
    /// On success the remaining input starts at the terminator of the last subfield.
    fn parse(i: I) -> IResult<I, Self, E>;
}

impl<'a, T, E> FieldParse<&'a str, E> for Option<T>
where
    T: FieldParse<&'a str, E>,
    E: ParseError<&'a str>,
{
    const SUBFIELDS: usize = <T as FieldParse<&'a str, E>>::SUBFIELDS;

    fn parse(i: &'a str) -> IResult<&'a str, Self, E> {
        match null_field(i, <T as FieldParse<&'a str, E>>::SUBFIELDS) {
            Ok((i, ())) => Ok((i, None)),
            Err(nom::Err::Error(_)) => {
                let (i, value) = T::parse(i)?;
                Ok((i, Some(value)))
            }
            Err(e) => Err(e),
        }
    }
}

impl<'a, T, E, const N: usize> FieldParse<&'a str, E> for [T; N]
where
    T: FieldParse<&'a str, E> + Default + Copy,
    E: ParseError<&'a str>,
{
    const SUBFIELDS: usize = N * <T as FieldParse<&'a str, E>>::SUBFIELDS;

    fn parse(i: &'a str) -> IResult<&'a str, Self, E> {
        let mut elems = [T::default(); N];
        let mut i = i;

        for (index, elem) in elems.iter_mut().enumerate() {
            if index > 0 {
                (i, _) = separator(i)?;
            }
            let (rest, value) = T::parse(i)?;
            *elem = value;
            i = rest;
        }

        Ok((i, elems))
    }
}
