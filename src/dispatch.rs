//! # Type Dispatch
//!
//! Routes a format mnemonic to the codec of its record.
//!
//! The table has one slot per format of the closed set, indexed by ordinal.
//! Slots of formats without a record are empty, which keeps "recognized but
//! not supported" apart from "unknown".
//!
//! ```rust
//! use iec61162::{address::SentenceFormat, dispatch::{self, Resolution}};
//!
//! assert!(matches!(dispatch::resolve("GGA"), Resolution::Supported(SentenceFormat::Gga, _)));
//! assert!(matches!(dispatch::resolve("HDT"), Resolution::NotSupported(SentenceFormat::Hdt)));
//! assert!(matches!(dispatch::resolve("XYZ"), Resolution::Unknown));
//! ```

use crate::{
    EncodeError, FieldParse, FieldPrint, FieldWriter, IResult,
    address::SentenceFormat,
    sentences::{DISPATCH, Message, Record},
};

/// Decoder of a record's fields into a [`Message`].
pub type Decode = for<'a> fn(&'a str) -> IResult<&'a str, Message>;

/// Encoder of a [`Message`]'s fields.
pub type Encode = fn(&Message, &mut FieldWriter<'_>) -> Result<(), EncodeError>;

/// Encoder/decoder pair of one format.
#[derive(Clone, Copy)]
pub struct Codec {
    pub decode: Decode,
    pub encode: Encode,
}

impl Codec {
    pub(crate) const fn of<T>() -> Self
    where
        T: for<'a> FieldParse<&'a str> + FieldPrint + Record + Into<Message>,
    {
        Codec {
            decode: decode::<T>,
            encode: encode::<T>,
        }
    }
}

impl core::fmt::Debug for Codec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Codec").finish_non_exhaustive()
    }
}

fn decode<T>(i: &str) -> IResult<&str, Message>
where
    T: for<'a> FieldParse<&'a str> + Into<Message>,
{
    let (i, record) = <T as FieldParse<&str>>::parse(i)?;
    Ok((i, record.into()))
}

fn encode<T>(message: &Message, w: &mut FieldWriter<'_>) -> Result<(), EncodeError>
where
    T: FieldPrint + Record,
{
    match T::from_message(message) {
        Some(record) => record.print(w),
        None => Err(EncodeError::InvalidParameter("message does not match its format")),
    }
}

/// Outcome of resolving a mnemonic.
#[derive(Debug, Clone, Copy)]
pub enum Resolution {
    /// The format has a record in this build.
    Supported(SentenceFormat, Codec),
    /// The format belongs to the protocol but has no record.
    NotSupported(SentenceFormat),
    /// The mnemonic is outside the closed set.
    Unknown,
}

/// Looks up the codec of `format`.
pub fn lookup(format: SentenceFormat) -> Option<Codec> {
    DISPATCH.get(format.ordinal()).copied().flatten()
}

/// Classifies a three-letter mnemonic.
pub fn resolve(mnemonic: &str) -> Resolution {
    match SentenceFormat::from_code(mnemonic) {
        Some(format) => match lookup(format) {
            Some(codec) => Resolution::Supported(format, codec),
            None => Resolution::NotSupported(format),
        },
        None => Resolution::Unknown,
    }
}

/// Formats with a record, in ordinal order.
pub fn supported() -> impl Iterator<Item = SentenceFormat> {
    SentenceFormat::ALL
        .iter()
        .copied()
        .filter(|format| lookup(*format).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        print::Staging,
        sentences::{Ack, Txt},
    };

    #[test]
    fn table_covers_every_record() {
        let formats: Vec<_> = supported().map(SentenceFormat::code).collect();
        assert_eq!(
            formats,
            [
                "AAM", "ACK", "ALM", "ALR", "APB", "BEC", "BOD", "BWC", "BWR", "BWW", "DTM", "GBS",
                "GGA", "GLL", "GNS", "GRS", "GSA", "GST", "GSV", "MLA", "RMC", "TXT", "VTG", "ZDA",
            ]
        );
    }

    #[test]
    fn codec_decodes_fields_only() {
        let Resolution::Supported(_, codec) = resolve("ACK") else {
            panic!("ACK has a record");
        };
        let (rest, message) = (codec.decode)("105*").unwrap();
        assert_eq!(rest, "*");
        assert_eq!(message, Message::Ack(Ack { alarm_id: 105.into() }));

        let mut buf = Staging::new();
        (codec.encode)(&message, &mut FieldWriter::new(&mut buf, 3)).unwrap();
        assert_eq!(buf.as_str(), "105");
    }

    #[test]
    fn encoder_rejects_other_records() {
        let codec = lookup(SentenceFormat::Txt).unwrap();
        let message = Message::Ack(Ack { alarm_id: 1.into() });
        let mut buf = Staging::new();
        let result = (codec.encode)(&message, &mut FieldWriter::new(&mut buf, 3));
        assert!(matches!(result, Err(EncodeError::InvalidParameter(_))));
        assert!(Txt::from_message(&message).is_none());
    }
}
