//! # Error Types
//!
//! Decoding reports [`Error`], a `nom`-compatible error carrying the offending input.
//! Encoding reports [`EncodeError`]. Both map onto the protocol's failure taxonomy;
//! a null field is never an error, it decodes to `None`.

use nom::error::{ErrorKind, FromExternalError, ParseError};
use std::fmt::Debug;

use crate::address::SentenceFormat;

/// Holds the result of parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`.
///
/// Outside of the parsing code, you can use the [nom::Finish::finish] method to convert
/// it to a more common result type.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// Represents all possible errors that can occur while decoding a sentence.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error<I, E> {
    /// The provided input contains non-ASCII characters.
    ///
    /// Sentences must be ASCII-only for the checksum to be meaningful.
    #[error("sentence contains non-ASCII bytes")]
    NonAscii,

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the expected checksum (calculated from the sentence content)
    /// and the actual checksum found in the sentence.
    #[error("checksum mismatch: calculated {expected:02X}, found {found:02X}")]
    ChecksumMismatch {
        /// The checksum calculated from the sentence content
        expected: u8,
        /// The checksum found in the sentence
        found: u8,
    },

    /// The sentence could not be parsed because its format was invalid.
    ///
    /// This wraps nom's standard parsing errors.
    #[error("parsing error: {0:?}")]
    ParsingError(E),

    /// The format mnemonic belongs to the protocol but this build has no codec for it.
    #[error("sentence format {0} is recognized but not supported")]
    UnsupportedFormat(SentenceFormat),

    /// The format mnemonic is outside the protocol's closed set.
    #[error("unknown sentence format {0:?}")]
    UnknownFormat(I),

    /// A field does not conform to its expected grammar or value range.
    ///
    /// Contains the input that caused the error.
    #[error("invalid field at {0:?}")]
    InvalidField(I),

    /// The input ended before a `,` or `*` closed the field.
    #[error("unterminated field at {0:?}")]
    UnterminatedField(I),

    /// A `$` was found but no complete frame follows it.
    #[error("malformed frame {0:?}")]
    MalformedFrame(I),

    /// No `$...\r\n` frame remains in the buffer.
    #[error("no valid message remains")]
    NoValidMessage,
}

/// Coarse failure classes used to drive recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Field content or frame layout violates the grammar.
    Grammar,
    /// The claimed checksum does not match the frame body.
    Checksum,
    /// Known mnemonic without a codec.
    FormatNotSupported,
    /// Mnemonic outside the closed set.
    UnknownFormat,
    /// The buffer holds no further frame.
    NoValidMessage,
}

impl<I, E> Error<I, E> {
    /// Classifies the error for stream recovery.
    pub fn class(&self) -> ErrorClass {
        match self {
            Error::ChecksumMismatch { .. } => ErrorClass::Checksum,
            Error::UnsupportedFormat(_) => ErrorClass::FormatNotSupported,
            Error::UnknownFormat(_) => ErrorClass::UnknownFormat,
            Error::NoValidMessage => ErrorClass::NoValidMessage,
            Error::NonAscii
            | Error::ParsingError(_)
            | Error::InvalidField(_)
            | Error::UnterminatedField(_)
            | Error::MalformedFrame(_) => ErrorClass::Grammar,
        }
    }
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E, EX> FromExternalError<I, EX> for Error<I, E>
where
    E: FromExternalError<I, EX>,
{
    fn from_external_error(input: I, kind: ErrorKind, e: EX) -> Self {
        Error::ParsingError(E::from_external_error(input, kind, e))
    }
}

/// Errors reported while generating sentences.
///
/// Every check happens before the first byte is written, so a failed call leaves
/// the output buffer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The output buffer cannot hold the generated bytes.
    #[error("output buffer too small: {required} bytes required, {capacity} available")]
    BufferTooSmall {
        /// Bytes the output needs
        required: usize,
        /// Bytes the caller provided
        capacity: usize,
    },

    /// The sentence would exceed 82 characters including `$` and CRLF.
    #[error("sentence exceeds the 82 character limit")]
    SentenceExceedsMaxSize,

    /// The format has no codec in this build.
    #[error("sentence format {0} is recognized but not supported")]
    FormatNotSupported(SentenceFormat),

    /// The caller supplied a value the protocol cannot carry.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}
