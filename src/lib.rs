//! # IEC 61162-1 Sentences
//!
//! This library encodes and decodes IEC 61162-1 ("NMEA 0183") sentences of the form
//! `$TTFFF,D1,D2,...,Dn*CC\r\n`.
//!
//! It covers:
//! - Framing and checksum verification, with or without CRLF
//! - The field grammar, where an empty field is a null value rather than an error
//! - Dispatch from a format mnemonic to the record of that format
//! - Splitting oversized payloads into sequences and joining them back
//! - Resynchronizing on a byte stream across corrupted or unsupported frames
//!
//! ## Usage
//!
//! ```rust
//! use iec61162::{
//!     Generator,
//!     address::TalkerId,
//!     sentences::{Ack, Message, Sentence},
//!     stream::SentenceReader,
//! };
//!
//! let sentence = Sentence::approved(TalkerId::Gp, Ack { alarm_id: 14.into() });
//!
//! let mut out = [0u8; 82];
//! let n = Generator::new().write(&sentence, &mut out).unwrap();
//! assert_eq!(&out[..n], b"$GPACK,014*47\r\n");
//!
//! for result in SentenceReader::new(&out[..n]) {
//!     match result {
//!         Ok(Sentence::Approved { message: Message::Ack(ack), .. }) => {
//!             assert_eq!(ack.alarm_id, 14.into());
//!         }
//!         other => panic!("unexpected {other:?}"),
//!     }
//! }
//! ```

extern crate self as iec61162;

#[macro_use]
mod macros;

pub mod address;
pub mod charset;
pub mod codec;
pub mod dispatch;
pub mod error;
pub mod frame;
pub mod generator;
mod parse;
pub mod parsing;
mod print;
pub mod sentences;
pub mod sequence;
pub mod stream;

pub use error::{EncodeError, Error, ErrorClass, IResult};
pub use generator::{Generator, GeneratorBuilder};
pub use iec61162_derive::Fields;
pub use parse::FieldParse;
pub use print::{FieldPrint, FieldWriter};
pub use sentences::{Message, Sentence, ValidFields};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
