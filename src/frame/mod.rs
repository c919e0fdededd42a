//! # Sentence Framing
//!
//! Handles the outer frame of every sentence: `$<content>*hh\r\n`.
//!
//! Decoding checks the character set, strips the delimiters, verifies the checksum
//! and then hands the content to a caller-supplied parser. Encoding is the inverse
//! and never writes a byte before every size check has passed.

mod checksum;

pub use checksum::{checksum, format_checksum, verify_checksum};

use nom::{
    Err, Parser,
    bytes::complete::{tag, take, take_until},
    character::complete::{char, hex_digit0},
    combinator::opt,
    error::{ErrorKind, ParseError},
    number::complete::hex_u32,
};

use crate::{EncodeError, Error, IResult, parsing::consumed};

/// Longest sentence the protocol allows, counting `$` and CRLF.
pub const MAX_SENTENCE_LEN: usize = 82;

/// Room left for fields after `$`, a five-character address, its comma and `*hh\r\n`.
pub const FIELD_BUDGET: usize = MAX_SENTENCE_LEN - 12;

/// Defines how the parser should handle CRLF line endings.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum LineEndingMode {
    #[default]
    /// The frame must end with `\r\n`.
    ///
    /// This is what a byte stream carries, and what the stream reader uses.
    Required,

    /// The frame must not end with `\r\n`.
    ///
    /// Use this mode for lines whose terminator was already stripped.
    Forbidden,
}

/// Creates a configurable frame parser factory.
///
/// # Examples
///
/// ```rust
/// use iec61162::{IResult, frame::{FrameParserBuilder, LineEndingMode}};
/// use nom::Parser;
///
/// // The content parser receives everything after `$` up to and including `*`.
/// fn content(i: &str) -> IResult<&str, &str> {
///     Ok(("", i))
/// }
///
/// let mut strict = FrameParserBuilder::new().build(content);
/// assert_eq!(strict("$GPGGA,data*6A\r\n"), Ok(("", "GPGGA,data*")));
/// assert!(strict("$GPGGA,data*6A").is_err()); // (missing CRLF)
/// assert!(strict("$GPGGA,data*6B\r\n").is_err()); // (checksum mismatch)
/// assert!(strict("$GPGGA,data\r\n").is_err()); // (missing checksum)
///
/// let mut stripped = FrameParserBuilder::new()
///     .line_ending_mode(LineEndingMode::Forbidden)
///     .build(content);
/// assert!(stripped("$GPGGA,data*6a").is_ok());
/// assert!(stripped("$GPGGA,data*6A\r\n").is_err()); // (CRLF present)
/// ```
#[must_use]
pub struct FrameParserBuilder {
    line_ending_mode: LineEndingMode,
}

impl FrameParserBuilder {
    /// Creates a builder that requires CRLF.
    pub fn new() -> Self {
        FrameParserBuilder {
            line_ending_mode: LineEndingMode::Required,
        }
    }

    /// Sets the line ending mode for the parser.
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    /// Builds the frame parser.
    ///
    /// The returned parser will:
    /// * Validate that the input is ASCII-only
    /// * Reject frames longer than [`MAX_SENTENCE_LEN`], counting the CRLF even
    ///   when it was stripped
    /// * Expect the frame to start with `$`
    /// * Split the content from the `*hh` tail and line ending
    /// * Verify the checksum before the content is looked at
    /// * Call `content_parser` on the content, including its closing `*`
    ///
    /// The closing `*` is handed over because it terminates the last field.
    pub fn build<'a, O, F, E>(
        self,
        mut content_parser: F,
    ) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
    where
        F: Parser<&'a str, Output = O, Error = Error<&'a str, E>>,
        E: ParseError<&'a str>,
    {
        let limit = match self.line_ending_mode {
            LineEndingMode::Required => MAX_SENTENCE_LEN,
            LineEndingMode::Forbidden => MAX_SENTENCE_LEN - 2,
        };

        move |i: &'a str| {
            if !i.is_ascii() {
                return Err(Err::Error(Error::NonAscii));
            }
            if i.len() > limit {
                return Err(Err::Error(Error::from_error_kind(i, ErrorKind::TooLarge)));
            }

            let (i, _) = char('$').parse(i)?;
            let (tail, data) = take_until("*").parse(i)?;
            let (_, cc) = checksum_tail(self.line_ending_mode).parse(tail)?;
            let (data, calc_cc) = checksum(data);

            if cc != calc_cc {
                return Err(Err::Error(Error::ChecksumMismatch {
                    expected: calc_cc,
                    found: cc,
                }));
            }

            content_parser.parse(&i[..=data.len()])
        }
    }
}

impl Default for FrameParserBuilder {
    fn default() -> Self {
        FrameParserBuilder::new()
    }
}

/// Parses the `*hh` tail and the line ending after the content.
fn checksum_tail<'a, E: ParseError<&'a str>>(
    le: LineEndingMode,
) -> impl FnMut(&'a str) -> nom::IResult<&'a str, u8, E> {
    move |i: &'a str| {
        let (i, _) = crlf(le).parse(i)?;
        let (cc, _) = char('*').parse(i)?;

        let (_, cc) = consumed(take(2u8), ErrorKind::Count).parse(cc)?;
        let (_, cc) = consumed(hex_digit0, ErrorKind::IsA).parse(cc)?;

        hex_u32.map(|cc| cc as u8).parse(cc)
    }
}

/// Strips or rejects the trailing CRLF.
///
/// Returns the input in front of the line ending.
fn crlf<'a, E: ParseError<&'a str>>(
    le: LineEndingMode,
) -> impl Fn(&'a str) -> nom::IResult<&'a str, (), E> {
    move |i: &'a str| {
        let (i, data) = opt(take_until("\r\n")).parse(i)?;

        let data = match (le, data) {
            (LineEndingMode::Required, Some(data)) => {
                let (_, _) = consumed(tag("\r\n"), ErrorKind::CrLf).parse(i)?;
                data
            }
            (LineEndingMode::Required, None) | (LineEndingMode::Forbidden, Some(_)) => {
                return Err(Err::Error(E::from_error_kind(i, ErrorKind::CrLf)));
            }
            (LineEndingMode::Forbidden, None) => i,
        };

        Ok((data, ()))
    }
}

/// Frames `content` as `$<content>*hh\r\n` into `out`.
///
/// Returns the number of bytes written. Both the protocol cap and the caller's
/// capacity are checked first; on error `out` is left untouched.
///
/// ```rust
/// use iec61162::frame::encode_frame;
///
/// let mut out = [0u8; 82];
/// let n = encode_frame("GPGGA,data", &mut out).unwrap();
/// assert_eq!(&out[..n], b"$GPGGA,data*6A\r\n");
/// ```
pub fn encode_frame(content: &str, out: &mut [u8]) -> Result<usize, EncodeError> {
    if !content.is_ascii() {
        return Err(EncodeError::InvalidParameter("frame content is not ASCII"));
    }

    let required = content.len() + 6;
    if required > MAX_SENTENCE_LEN {
        return Err(EncodeError::SentenceExceedsMaxSize);
    }
    if required > out.len() {
        return Err(EncodeError::BufferTooSmall {
            required,
            capacity: out.len(),
        });
    }

    let (_, cc) = checksum(content);
    let (head, tail) = out[..required].split_at_mut(content.len() + 1);
    head[0] = b'$';
    head[1..].copy_from_slice(content.as_bytes());
    tail[0] = b'*';
    tail[1..3].copy_from_slice(&format_checksum(cc));
    tail[3..].copy_from_slice(b"\r\n");

    Ok(required)
}
