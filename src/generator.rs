//! # Sentence Generation
//!
//! [`Generator`] prints a [`Sentence`] into a staging buffer, frames it and copies
//! the bytes into the caller's buffer. Nothing is written unless the whole output
//! fits, so a failed call leaves the buffer as it was.
//!
//! ```rust
//! use iec61162::{
//!     Generator,
//!     address::TalkerId,
//!     codec::ModeIndicator,
//!     sentences::{Sentence, Vtg},
//! };
//!
//! let vtg = Vtg::from_speed_mps(
//!     Some(0.223),
//!     Some(22.203),
//!     Some(1.023),
//!     Some(ModeIndicator::Simulator),
//! );
//! let sentence = Sentence::approved(TalkerId::Gp, vtg);
//!
//! let mut out = [0u8; 82];
//! let n = Generator::new().write(&sentence, &mut out).unwrap();
//! assert_eq!(&out[..n], b"$GPVTG,0.223,T,22.203,M,1.989,N,3.683,K,S*04\r\n");
//! ```

use core::borrow::Borrow;

use tracing::{debug, trace};

use crate::{
    EncodeError, FieldWriter,
    address::Talker,
    codec::number::MAX_PRECISION,
    frame::encode_frame,
    print::Staging,
    sentences::{Alm, GlonassAlmanac, GpsAlmanac, Gsv, Mla, Satellite, Sentence, Txt},
};

/// Fractional digits printed when nothing else is configured.
pub const DEFAULT_PRECISION: usize = 3;

/// Configures a [`Generator`].
///
/// ```rust
/// use iec61162::{EncodeError, GeneratorBuilder};
///
/// let generator = GeneratorBuilder::new().precision(5).build().unwrap();
/// assert_eq!(generator.precision(), 5);
///
/// assert!(matches!(
///     GeneratorBuilder::new().precision(12).build(),
///     Err(EncodeError::InvalidParameter(_))
/// ));
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    precision: usize,
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        GeneratorBuilder {
            precision: DEFAULT_PRECISION,
        }
    }

    /// Fractional digits for plain numbers, seconds of time and minutes of arc.
    ///
    /// Trailing zeros are still trimmed, so this is an upper bound.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn build(self) -> Result<Generator, EncodeError> {
        if self.precision > MAX_PRECISION {
            return Err(EncodeError::InvalidParameter("precision above 9 digits"));
        }

        Ok(Generator {
            precision: self.precision,
        })
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        GeneratorBuilder::new()
    }
}

/// Writes framed sentences into caller buffers.
#[derive(Debug, Clone, Copy)]
pub struct Generator {
    precision: usize,
}

impl Generator {
    /// A generator printing [`DEFAULT_PRECISION`] fractional digits.
    pub fn new() -> Self {
        Generator {
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    fn stage(&self, sentence: &Sentence) -> Result<Staging, EncodeError> {
        let mut buf = Staging::new();
        sentence.print(&mut FieldWriter::new(&mut buf, self.precision))?;
        Ok(buf)
    }

    /// Writes one framed sentence and returns its length.
    ///
    /// # Errors
    ///
    /// * [`EncodeError::SentenceExceedsMaxSize`] when the frame would pass 82 characters.
    /// * [`EncodeError::BufferTooSmall`] when `out` cannot hold the frame.
    /// * [`EncodeError::FormatNotSupported`] for a format without a codec.
    /// * [`EncodeError::InvalidParameter`] for values the protocol cannot carry.
    pub fn write(&self, sentence: &Sentence, out: &mut [u8]) -> Result<usize, EncodeError> {
        let content = self.stage(sentence)?;
        let n = encode_frame(&content, out)?;
        trace!(content = content.as_str(), bytes = n, "sentence generated");
        Ok(n)
    }

    /// Writes several sentences back to back and returns the total length.
    ///
    /// Every sentence is staged and measured first; `out` is only written once
    /// the whole batch is known to fit.
    pub fn write_all<I>(&self, sentences: I, out: &mut [u8]) -> Result<usize, EncodeError>
    where
        I: IntoIterator,
        I::IntoIter: Clone,
        I::Item: Borrow<Sentence>,
    {
        let sentences = sentences.into_iter();

        let mut required = 0;
        for sentence in sentences.clone() {
            // `$`, `*hh` and CRLF around the content
            required += self.stage(sentence.borrow())?.len() + 6;
        }
        if required > out.len() {
            return Err(EncodeError::BufferTooSmall {
                required,
                capacity: out.len(),
            });
        }

        let mut written = 0;
        for sentence in sentences {
            written += self.write(sentence.borrow(), &mut out[written..])?;
        }
        Ok(written)
    }

    /// Writes a satellite list as a GSV sequence.
    pub fn write_satellites(
        &self,
        talker: impl Into<Talker>,
        satellites: &[Satellite],
        out: &mut [u8],
    ) -> Result<usize, EncodeError> {
        let talker = talker.into();
        let parts = Gsv::sequence(satellites).inspect_err(|e| {
            debug!(satellites = satellites.len(), error = %e, "satellite list rejected");
        })?;
        self.write_all(parts.map(|gsv| Sentence::approved(talker.clone(), gsv)), out)
    }

    /// Writes text as a TXT sequence under `identifier`.
    pub fn write_text(
        &self,
        talker: impl Into<Talker>,
        identifier: u8,
        text: &str,
        out: &mut [u8],
    ) -> Result<usize, EncodeError> {
        let talker = talker.into();
        let parts = Txt::sequence(identifier, text).inspect_err(|e| {
            debug!(identifier, len = text.len(), error = %e, "text rejected");
        })?;
        self.write_all(parts.map(|txt| Sentence::approved(talker.clone(), txt)), out)
    }

    /// Writes GPS almanacs as an ALM sequence, one satellite per sentence.
    pub fn write_gps_almanac(
        &self,
        talker: impl Into<Talker>,
        almanacs: &[GpsAlmanac],
        out: &mut [u8],
    ) -> Result<usize, EncodeError> {
        let talker = talker.into();
        let parts = Alm::sequence(almanacs).inspect_err(|e| {
            debug!(satellites = almanacs.len(), error = %e, "GPS almanac rejected");
        })?;
        self.write_all(parts.map(|alm| Sentence::approved(talker.clone(), alm)), out)
    }

    /// Writes GLONASS almanacs as an MLA sequence, one satellite per sentence.
    pub fn write_glonass_almanac(
        &self,
        talker: impl Into<Talker>,
        almanacs: &[GlonassAlmanac],
        out: &mut [u8],
    ) -> Result<usize, EncodeError> {
        let talker = talker.into();
        let parts = Mla::sequence(almanacs).inspect_err(|e| {
            debug!(satellites = almanacs.len(), error = %e, "GLONASS almanac rejected");
        })?;
        self.write_all(parts.map(|mla| Sentence::approved(talker.clone(), mla)), out)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Generator::new()
    }
}
