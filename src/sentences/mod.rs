//! # Sentences
//!
//! Message records for the implemented formats, the [`Message`] sum type over
//! them, and [`Sentence`], which adds the address: an approved talker and
//! format, a query, or a proprietary manufacturer code.
//!
//! Every record is a flat list of field codecs. Most derive [`Fields`](crate::Fields);
//! [`Gsv`] carries a variable satellite count and is written by hand.
//!
//! ```rust
//! use iec61162::{
//!     IResult,
//!     address::TalkerId,
//!     codec::ModeIndicator,
//!     frame::FrameParserBuilder,
//!     sentences::{Message, Sentence},
//! };
//!
//! let mut parser = FrameParserBuilder::new().build(Sentence::parse);
//! let result: IResult<_, _> = parser("$GPVTG,0.223,T,22.203,M,1.989,N,3.683,K,S*04\r\n");
//! let (_, sentence) = result.unwrap();
//!
//! match sentence {
//!     Sentence::Approved { talker, message: Message::Vtg(vtg) } => {
//!         assert_eq!(talker, TalkerId::Gp.into());
//!         assert_eq!(vtg.course_true, Some(0.223));
//!         assert_eq!(vtg.mode, Some(ModeIndicator::Simulator));
//!     }
//!     other => panic!("unexpected sentence {other:?}"),
//! }
//! ```

mod aam;
mod ack;
mod alm;
mod alr;
mod apb;
mod bec;
mod bod;
mod bwc;
mod bwr;
mod bww;
mod dtm;
mod gbs;
mod gga;
mod gll;
mod gns;
mod grs;
mod gsa;
mod gst;
mod gsv;
mod mla;
mod rmc;
mod txt;
mod vtg;
mod zda;

pub use aam::Aam;
pub use ack::Ack;
pub use alm::{Alm, GpsAlmanac};
pub use alr::Alr;
pub use apb::Apb;
pub use bec::Bec;
pub use bod::Bod;
pub use bwc::Bwc;
pub use bwr::Bwr;
pub use bww::Bww;
pub use dtm::Dtm;
pub use gbs::Gbs;
pub use gga::Gga;
pub use gll::Gll;
pub use gns::Gns;
pub use grs::Grs;
pub use gsa::Gsa;
pub use gst::Gst;
pub use gsv::{GSV_SATELLITES, Gsv, Satellite};
pub use mla::{GlonassAlmanac, Mla};
pub use rmc::Rmc;
pub use txt::Txt;
pub use vtg::{KMPH_TO_MPS, KNOTS_TO_MPS, MPS_TO_KMPH, MPS_TO_KNOTS, Vtg};
pub use zda::Zda;

use nom::{Parser, character::complete::char, error::ErrorKind};

use crate::{
    EncodeError, Error, FieldWriter, IResult,
    address::{SentenceFormat, Talker},
    charset,
    codec::{field_token, separator},
    dispatch::{self, Codec, Resolution},
    parsing::consumed,
};

/// A record bound to one format mnemonic.
pub trait Record: Sized {
    /// The mnemonic the record is sent under.
    const FORMAT: SentenceFormat;

    /// Borrows the record out of a [`Message`] of the same kind.
    fn from_message(message: &Message) -> Option<&Self>;
}

/// Bitmask of the optional fields that hold a value.
///
/// Implemented by `#[derive(Fields)]`: bit `n` belongs to the `n`-th `Option`
/// field in declaration order, and the mask is computed from the fields on
/// every call.
pub trait ValidFields {
    fn valid_fields(&self) -> u32;
}

macro_rules! messages {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident
        ),* $(,)?
    ) => {
        /// A decoded or to-be-generated message, tagged by its format.
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, PartialEq)]
        pub enum Message {
            $(
                $(#[$meta])*
                $variant($variant),
            )*
        }

        impl Message {
            /// The format mnemonic of the record.
            pub fn format(&self) -> SentenceFormat {
                match self {
                    $(Message::$variant(_) => SentenceFormat::$variant,)*
                }
            }
        }

        $(
            impl From<$variant> for Message {
                fn from(record: $variant) -> Self {
                    Message::$variant(record)
                }
            }

            impl Record for $variant {
                const FORMAT: SentenceFormat = SentenceFormat::$variant;

                fn from_message(message: &Message) -> Option<&Self> {
                    match message {
                        Message::$variant(record) => Some(record),
                        _ => None,
                    }
                }
            }
        )*

        /// Codecs indexed by format ordinal; `None` for formats without a record.
        pub(crate) static DISPATCH: [Option<Codec>; SentenceFormat::COUNT] = {
            let mut table = [None; SentenceFormat::COUNT];
            $(table[SentenceFormat::$variant as usize] = Some(Codec::of::<$variant>());)*
            table
        };
    };
}

messages! {
    /// AAM - Waypoint arrival alarm
    Aam,
    /// ACK - Acknowledge alarm
    Ack,
    /// ALM - GPS almanac data
    Alm,
    /// ALR - Set alarm state
    Alr,
    /// APB - Heading/track controller (autopilot) sentence B
    Apb,
    /// BEC - Bearing and distance to waypoint, dead reckoning
    Bec,
    /// BOD - Bearing, origin to destination
    Bod,
    /// BWC - Bearing and distance to waypoint, great circle
    Bwc,
    /// BWR - Bearing and distance to waypoint, rhumb line
    Bwr,
    /// BWW - Bearing, waypoint to waypoint
    Bww,
    /// DTM - Datum reference
    Dtm,
    /// GBS - GNSS satellite fault detection
    Gbs,
    /// GGA - Global positioning system fix data
    Gga,
    /// GLL - Geographic position, latitude/longitude
    Gll,
    /// GNS - GNSS fix data
    Gns,
    /// GRS - GNSS range residuals
    Grs,
    /// GSA - GNSS DOP and active satellites
    Gsa,
    /// GST - GNSS pseudorange noise statistics
    Gst,
    /// GSV - GNSS satellites in view
    Gsv,
    /// MLA - GLONASS almanac data
    Mla,
    /// RMC - Recommended minimum specific GNSS data
    Rmc,
    /// TXT - Text transmission
    Txt,
    /// VTG - Course over ground and ground speed
    Vtg,
    /// ZDA - Time and date
    Zda,
}

/// A query: listener `to` asks talker `from` for sentences of `format`.
///
/// `$<from><to>Q,<format>*hh\r\n`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub from: Talker,
    pub to: Talker,
    pub format: SentenceFormat,
}

impl Query {
    fn parse(i: &str) -> IResult<&str, Self> {
        let (rest, address) = field_token(i)?;
        let from = address.get(..2).and_then(Talker::from_code);
        let to = address.get(2..4).and_then(Talker::from_code);
        let (Some(from), Some(to)) = (from, to) else {
            return Err(nom::Err::Error(Error::InvalidField(i)));
        };

        let (rest, _) = separator(rest)?;
        let (rest, mnemonic) = field_token(rest)?;
        match SentenceFormat::from_code(mnemonic) {
            Some(format) => Ok((rest, Query { from, to, format })),
            None => Err(nom::Err::Error(Error::UnknownFormat(mnemonic))),
        }
    }

    fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        w.push_str(talker_code(&self.from)?)?;
        w.push_str(talker_code(&self.to)?)?;
        w.push_str("Q,")?;
        w.push_str(self.format.code())
    }
}

/// Longest proprietary data that fits a sentence after `$P`, the manufacturer
/// code and `*hh\r\n`.
pub const PROPRIETARY_DATA_LEN: usize = 72;

/// A proprietary sentence, `$P<mmm><data>*hh\r\n`.
///
/// The data is carried verbatim, including its leading comma if any.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proprietary {
    pub manufacturer: heapless::String<3>,
    pub data: heapless::String<PROPRIETARY_DATA_LEN>,
}

impl Proprietary {
    /// Returns `None` unless `manufacturer` is three uppercase letters or digits
    /// and `data` holds only valid characters and commas.
    pub fn new(manufacturer: &str, data: &str) -> Option<Self> {
        let manufacturer_ok = manufacturer.len() == 3
            && manufacturer
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        let data_ok = data.bytes().all(|b| b == b',' || charset::is_valid(b));
        if !manufacturer_ok || !data_ok {
            return None;
        }

        let mut proprietary = Proprietary {
            manufacturer: heapless::String::new(),
            data: heapless::String::new(),
        };
        proprietary.manufacturer.push_str(manufacturer).ok()?;
        proprietary.data.push_str(data).ok()?;
        Some(proprietary)
    }

    fn parse(i: &str) -> IResult<&str, Self> {
        let Some(end) = i.find('*') else {
            return Err(nom::Err::Failure(Error::UnterminatedField(i)));
        };

        match (i.get(1..4), i.get(4..end)) {
            (Some(manufacturer), Some(data)) => match Proprietary::new(manufacturer, data) {
                Some(proprietary) => Ok((&i[end..], proprietary)),
                None => Err(nom::Err::Error(Error::InvalidField(i))),
            },
            _ => Err(nom::Err::Error(Error::InvalidField(i))),
        }
    }

    fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        w.push('P')?;
        w.push_str(&self.manufacturer)?;
        w.push_str(&self.data)
    }
}

/// One sentence, classified by its address.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Sentence {
    /// `$<talker><format>,<fields>`
    Approved { talker: Talker, message: Message },
    /// `$<from><to>Q,<format>`
    Query(Query),
    /// `$P<manufacturer><data>`
    Proprietary(Proprietary),
}

impl Sentence {
    pub fn approved(talker: impl Into<Talker>, message: impl Into<Message>) -> Self {
        Sentence::Approved {
            talker: talker.into(),
            message: message.into(),
        }
    }

    /// Format of the record an approved sentence carries, or the format a
    /// query asks for.
    pub fn format(&self) -> Option<SentenceFormat> {
        match self {
            Sentence::Approved { message, .. } => Some(message.format()),
            Sentence::Query(query) => Some(query.format),
            Sentence::Proprietary(_) => None,
        }
    }

    /// Parses sentence content, from the address up to and including the
    /// closing `*`.
    ///
    /// This is the content parser to hand to
    /// [`FrameParserBuilder::build`](crate::frame::FrameParserBuilder::build).
    /// The whole content must be consumed.
    ///
    /// # Errors
    ///
    /// * [`Error::UnknownFormat`] when the mnemonic is outside the closed set.
    /// * [`Error::UnsupportedFormat`] when the mnemonic has no record.
    /// * [`Error::InvalidField`] and [`Error::UnterminatedField`] for field grammar.
    pub fn parse(i: &str) -> IResult<&str, Self> {
        let (_, address) = field_token(i)?;

        let (i, sentence) = if address.starts_with('P') {
            let (i, proprietary) = Proprietary::parse(i)?;
            (i, Sentence::Proprietary(proprietary))
        } else if address.len() == 5 && address.ends_with('Q') {
            let (i, query) = Query::parse(i)?;
            (i, Sentence::Query(query))
        } else {
            Self::parse_approved(i)?
        };

        let (i, _) = consumed(char('*'), ErrorKind::Eof).parse(i)?;
        Ok((i, sentence))
    }

    fn parse_approved(i: &str) -> IResult<&str, Self> {
        let (rest, address) = field_token(i)?;
        let talker = address.get(..2).and_then(Talker::from_code);
        let (talker, mnemonic) = match (talker, address.get(2..)) {
            (Some(talker), Some(mnemonic)) if address.len() == 5 => (talker, mnemonic),
            _ => return Err(nom::Err::Error(Error::InvalidField(i))),
        };

        let codec = match dispatch::resolve(mnemonic) {
            Resolution::Supported(_, codec) => codec,
            Resolution::NotSupported(format) => {
                return Err(nom::Err::Error(Error::UnsupportedFormat(format)));
            }
            Resolution::Unknown => return Err(nom::Err::Error(Error::UnknownFormat(mnemonic))),
        };

        let (rest, _) = separator(rest)?;
        let (rest, message) = (codec.decode)(rest)?;
        Ok((rest, Sentence::Approved { talker, message }))
    }

    /// Prints the content of the sentence, without `$` and the checksum tail.
    pub(crate) fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        match self {
            Sentence::Approved { talker, message } => {
                let format = message.format();
                let codec =
                    dispatch::lookup(format).ok_or(EncodeError::FormatNotSupported(format))?;

                w.push_str(talker_code(talker)?)?;
                w.push_str(format.code())?;
                w.separator()?;
                (codec.encode)(message, w)
            }
            Sentence::Query(query) => query.print(w),
            Sentence::Proprietary(proprietary) => proprietary.print(w),
        }
    }
}

fn talker_code(talker: &Talker) -> Result<&'static str, EncodeError> {
    talker
        .code()
        .ok_or(EncodeError::InvalidParameter("cannot generate for an unknown talker"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ErrorClass,
        address::TalkerId,
        print::Staging,
    };

    fn content(sentence: &Sentence) -> Result<Staging, EncodeError> {
        let mut buf = Staging::new();
        sentence.print(&mut FieldWriter::new(&mut buf, 3))?;
        Ok(buf)
    }

    #[test]
    fn approved_sentence_dispatches_on_mnemonic() {
        let (rest, sentence) = Sentence::parse("GPACK,014*").unwrap();
        assert_eq!(rest, "");
        assert_eq!(
            sentence,
            Sentence::approved(TalkerId::Gp, Ack { alarm_id: 14.into() })
        );
        assert_eq!(sentence.format(), Some(SentenceFormat::Ack));
    }

    #[test]
    fn unknown_talkers_still_decode() {
        let (_, sentence) = Sentence::parse("BDACK,001*").unwrap();
        let Sentence::Approved { talker, .. } = &sentence else {
            panic!("expected an approved sentence");
        };
        assert_eq!(talker.to_string(), "BD");
        assert_eq!(
            content(&sentence),
            Err(EncodeError::InvalidParameter("cannot generate for an unknown talker"))
        );
    }

    #[test]
    fn unsupported_and_unknown_mnemonics_are_distinct() {
        let result = Sentence::parse("GPHDT,274.07,T*");
        assert_eq!(
            result,
            Err(nom::Err::Error(Error::UnsupportedFormat(SentenceFormat::Hdt)))
        );

        let result = Sentence::parse("GPXYZ,1*");
        assert_eq!(result, Err(nom::Err::Error(Error::UnknownFormat("XYZ"))));

        let Err(nom::Err::Error(e)) = Sentence::parse("GPXYZ,1*") else {
            panic!("expected a recoverable error");
        };
        assert_eq!(e.class(), ErrorClass::UnknownFormat);
    }

    #[test]
    fn trailing_fields_are_rejected() {
        let result = Sentence::parse("GPACK,014,9*");
        assert!(result.is_err());
    }

    #[test]
    fn query_sentences() {
        let (_, sentence) = Sentence::parse("ECGPQ,RMC*").unwrap();
        assert_eq!(
            sentence,
            Sentence::Query(Query {
                from: TalkerId::Ec.into(),
                to: TalkerId::Gp.into(),
                format: SentenceFormat::Rmc,
            })
        );
        assert_eq!(content(&sentence).unwrap().as_str(), "ECGPQ,RMC");

        let result = Sentence::parse("ECGPQ,QQQ*");
        assert_eq!(result, Err(nom::Err::Error(Error::UnknownFormat("QQQ"))));
    }

    #[test]
    fn proprietary_sentences_keep_their_data() {
        let (_, sentence) = Sentence::parse("PGRME,15.0,M,45.0,M,25.0,M*").unwrap();
        let Sentence::Proprietary(proprietary) = &sentence else {
            panic!("expected a proprietary sentence");
        };
        assert_eq!(proprietary.manufacturer.as_str(), "GRM");
        assert_eq!(proprietary.data.as_str(), "E,15.0,M,45.0,M,25.0,M");
        assert_eq!(sentence.format(), None);
        assert_eq!(
            content(&sentence).unwrap().as_str(),
            "PGRME,15.0,M,45.0,M,25.0,M"
        );

        assert!(Sentence::parse("PGR*").is_err());
        assert!(Proprietary::new("grm", "").is_none());
        assert!(Proprietary::new("GRM", "a$b").is_none());
    }

    #[test]
    fn messages_convert_to_records() {
        let message = Message::from(Ack { alarm_id: 7.into() });
        assert_eq!(message.format(), SentenceFormat::Ack);
        assert!(Ack::from_message(&message).is_some());
        assert!(Txt::from_message(&message).is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn sentences_serialize_with_their_records() {
        let sentence = Sentence::approved(TalkerId::Gp, Ack { alarm_id: 7.into() });
        let json = serde_json::to_string(&sentence).unwrap();
        assert!(json.contains("Ack"));
        assert_eq!(serde_json::from_str::<Sentence>(&json).unwrap(), sentence);
    }
}
