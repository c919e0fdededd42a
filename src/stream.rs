//! # Stream Resynchronization
//!
//! Pulls sentences out of a raw byte buffer. Bytes in front of a `$` are skipped,
//! every candidate frame is checked and decoded, and a frame that fails is reported
//! and stepped over so that the next one can still be read.
//!
//! Every step consumes at least one byte unless the buffer is exhausted, and no
//! step looks further than 82 bytes past the `$` it started from.
//!
//! ```rust
//! use iec61162::{ErrorClass, stream::SentenceReader};
//!
//! let bytes = b"$GPACK,014*00\r\n$GPACK,014*47\r\n";
//! let mut reader = SentenceReader::new(bytes);
//!
//! assert_eq!(reader.next().unwrap().unwrap_err().class(), ErrorClass::Checksum);
//! assert!(reader.next().unwrap().is_ok());
//! assert!(reader.next().is_none());
//! assert_eq!(reader.position(), bytes.len());
//! ```

use tracing::{debug, trace};

use crate::{
    Error,
    frame::{FrameParserBuilder, MAX_SENTENCE_LEN},
    sentences::Sentence,
};

/// Decoding error of a stream step, borrowing from the stream buffer.
pub type StreamError<'a> = Error<&'a str, nom::error::Error<&'a str>>;

/// Result of one step over a byte buffer.
#[derive(Debug, PartialEq)]
pub struct ParseOutcome<'a> {
    /// Bytes to drop from the front of the buffer before the next step.
    ///
    /// Set on failures too, so the caller can always move on.
    pub consumed: usize,
    pub result: Result<Sentence, StreamError<'a>>,
}

impl ParseOutcome<'_> {
    /// `true` once no further frame can be read from the buffer.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.result, Err(Error::NoValidMessage))
    }
}

/// What the scan found after a `$`.
enum Scan {
    /// A complete `$...\r\n` frame ending at this index, inclusive.
    Frame(usize),
    /// Another `$` at this index before any line ending.
    Interrupted(usize),
    /// 82 bytes without a line ending.
    Overlong(usize),
    /// The buffer ends before the frame does.
    Truncated,
}

fn scan(buf: &[u8], start: usize) -> Scan {
    let limit = buf.len().min(start + MAX_SENTENCE_LEN);

    for at in start + 1..limit {
        match buf[at] {
            b'$' => return Scan::Interrupted(at),
            b'\n' if buf[at - 1] == b'\r' => return Scan::Frame(at),
            _ => {}
        }
    }

    if limit - start == MAX_SENTENCE_LEN {
        Scan::Overlong(limit)
    } else {
        Scan::Truncated
    }
}

/// The longest UTF-8 prefix of `bytes`.
fn text_prefix(bytes: &[u8]) -> &str {
    match core::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
    }
}

fn decode_frame(frame: &[u8]) -> Result<Sentence, StreamError<'_>> {
    if !frame.is_ascii() {
        return Err(Error::NonAscii);
    }
    let frame = text_prefix(frame);

    let mut parser = FrameParserBuilder::new().build(Sentence::parse);
    match parser(frame) {
        Ok((_, sentence)) => Ok(sentence),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e),
        Err(nom::Err::Incomplete(_)) => Err(Error::MalformedFrame(frame)),
    }
}

/// Reads the next sentence from the front of `buf`.
///
/// * A frame that decodes yields the sentence.
/// * A frame that fails its checksum, grammar or dispatch yields the error and
///   is consumed whole.
/// * A fragment cut short by another `$` is [`Error::MalformedFrame`] and is
///   consumed up to that `$`.
/// * 82 bytes without a line ending are [`Error::MalformedFrame`] and are
///   consumed whole.
/// * When no complete frame remains the result is [`Error::NoValidMessage`].
///   Bytes in front of a trailing partial frame are consumed, the partial frame
///   is not, so it can be completed by later input.
pub fn parse_next(buf: &[u8]) -> ParseOutcome<'_> {
    let Some(start) = buf.iter().position(|&b| b == b'$') else {
        trace!(skipped = buf.len(), "no frame start in buffer");
        return ParseOutcome {
            consumed: buf.len(),
            result: Err(Error::NoValidMessage),
        };
    };

    let (consumed, result) = match scan(buf, start) {
        Scan::Frame(end) => (end + 1, decode_frame(&buf[start..=end])),
        Scan::Interrupted(next) => (
            next,
            Err(Error::MalformedFrame(text_prefix(&buf[start..next]))),
        ),
        Scan::Overlong(end) => (
            end,
            Err(Error::MalformedFrame(text_prefix(&buf[start..end]))),
        ),
        Scan::Truncated => {
            trace!(pending = buf.len() - start, "partial frame at end of buffer");
            return ParseOutcome {
                consumed: start,
                result: Err(Error::NoValidMessage),
            };
        }
    };

    if let Err(e) = &result {
        debug!(
            position = start,
            length = consumed - start,
            class = ?e.class(),
            error = %e,
            "frame skipped"
        );
    }

    ParseOutcome { consumed, result }
}

/// Iterates over the sentences of a byte buffer.
///
/// Failed frames are yielded as errors and skipped. Iteration ends once no
/// complete frame remains; [`remaining`](SentenceReader::remaining) then holds
/// any partial frame left at the end of the buffer.
#[derive(Debug, Clone)]
pub struct SentenceReader<'a> {
    buf: &'a [u8],
    position: usize,
    done: bool,
}

impl<'a> SentenceReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        SentenceReader {
            buf,
            position: 0,
            done: false,
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The unconsumed tail of the buffer.
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.position..]
    }
}

impl<'a> Iterator for SentenceReader<'a> {
    type Item = Result<Sentence, StreamError<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let outcome = parse_next(self.remaining());
        self.position += outcome.consumed;

        if outcome.is_exhausted() {
            self.done = true;
            return None;
        }
        Some(outcome.result)
    }
}
