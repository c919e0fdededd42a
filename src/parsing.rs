//! # Parsing Utilities
//!
//! Combinators that check how much input a parser leaves behind. The framer and
//! the sentence parser use them to insist that a token or a whole sentence body
//! is used up.

use nom::{
    Err, Input, Mode, OutputMode, PResult, Parser, ToUsize,
    error::{ErrorKind, ParseError},
};

/// Runs `f` and fails with `e` unless exactly `n` items of input remain.
///
/// ```rust
/// use iec61162::parsing::verify_rest_length;
/// use nom::{IResult, Parser, bytes::complete::take, error::ErrorKind};
///
/// // the address takes five characters and leaves the comma
/// let mut address = verify_rest_length(take(5u8), 1u8, ErrorKind::Count);
/// let result: IResult<_, _> = address.parse("GPGGA,");
/// assert_eq!(result, Ok((",", "GPGGA")));
///
/// let result: IResult<_, _> = address.parse("GPGGA,,");
/// assert!(result.is_err());
/// ```
pub fn verify_rest_length<I, N, E: ParseError<I>, F>(
    f: F,
    n: N,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    N: ToUsize,
    F: Parser<I, Error = E>,
{
    RestLength {
        inner: f,
        expected: n.to_usize(),
        kind: e,
    }
}

/// Runs `f` and fails with `e` if any input is left over.
///
/// ```rust
/// use iec61162::parsing::consumed;
/// use nom::{IResult, Parser, character::complete::char, error::ErrorKind};
///
/// let mut end = consumed(char('*'), ErrorKind::Eof);
/// let result: IResult<_, _> = end.parse("*");
/// assert_eq!(result, Ok(("", '*')));
///
/// let result: IResult<_, _> = end.parse("*,");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    RestLength {
        inner: f,
        expected: 0,
        kind: e,
    }
}

struct RestLength<F> {
    inner: F,
    expected: usize,
    kind: ErrorKind,
}

impl<I, F> Parser<I> for RestLength<F>
where
    I: Input,
    F: Parser<I>,
{
    type Output = <F as Parser<I>>::Output;
    type Error = <F as Parser<I>>::Error;

    fn process<OM: OutputMode>(&mut self, i: I) -> PResult<OM, I, Self::Output, Self::Error> {
        let (rest, output) = self.inner.process::<OM>(i)?;

        if rest.input_len() == self.expected {
            Ok((rest, output))
        } else {
            Err(Err::Error(OM::Error::bind(|| {
                <F as Parser<I>>::Error::from_error_kind(rest, self.kind)
            })))
        }
    }
}
