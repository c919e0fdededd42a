use nom::{Parser, character::complete::char, error::ParseError, sequence::preceded};

use crate::{
    EncodeError, Error, FieldParse, FieldPrint, FieldWriter, Fields, IResult,
    ValidFields,
    codec::{Dec, separator},
};

/// Satellites carried by one GSV sentence.
pub const GSV_SATELLITES: usize = 4;

/// GSV - GNSS satellites in view
///
/// ```text
///         1 2 3  4  5  6   7       n
///         | | |  |  |  |   |       |
///  $--GSV,x,x,xx,xx,xx,xxx,xx,...,xx*hh<CR><LF>
/// ```
///
/// Up to four satellite blocks follow the header; a list of satellites that
/// does not fit is sent as a sequence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Gsv {
    /// Total number of sentences in the sequence, 1 to 9
    pub total: u8,
    /// Number of this sentence
    pub number: u8,
    /// Total number of satellites in view
    pub in_view: Option<Dec<2>>,
    pub satellites: heapless::Vec<Satellite, GSV_SATELLITES>,
}

/// One satellite block of a GSV sentence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Fields)]
pub struct Satellite {
    /// Satellite ID number
    pub id: Dec<2>,
    /// Elevation in degrees, 90 maximum
    pub elevation: Option<Dec<2>>,
    /// Azimuth in degrees true, 000 to 359
    pub azimuth: Option<Dec<3>>,
    /// SNR (C/No) in dB-Hz, 00 to 99; null when not tracking
    pub snr: Option<Dec<2>>,
}

impl Gsv {
    pub const VALID_IN_VIEW: u32 = 1 << 0;
}

impl ValidFields for Gsv {
    fn valid_fields(&self) -> u32 {
        if self.in_view.is_some() {
            Self::VALID_IN_VIEW
        } else {
            0
        }
    }
}

impl<'a, E> FieldParse<&'a str, E> for Gsv
where
    E: ParseError<&'a str>,
{
    fn parse(i: &'a str) -> IResult<&'a str, Self, E> {
        let (i, total) = u8::parse(i)?;
        let (i, _) = separator(i)?;
        let (i, number) = u8::parse(i)?;
        let (i, _) = separator(i)?;
        let (mut i, in_view) = Option::<Dec<2>>::parse(i)?;

        let mut satellites = heapless::Vec::new();
        while i.starts_with(',') {
            let (rest, satellite) =
                preceded(char(','), <Satellite as FieldParse<&'a str, E>>::parse).parse(i)?;
            if satellites.push(satellite).is_err() {
                return Err(nom::Err::Error(Error::InvalidField(i)));
            }
            i = rest;
        }

        Ok((
            i,
            Gsv {
                total,
                number,
                in_view,
                satellites,
            },
        ))
    }
}

impl FieldPrint for Gsv {
    fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        self.total.print(w)?;
        w.separator()?;
        self.number.print(w)?;
        w.separator()?;
        self.in_view.print(w)?;

        for satellite in &self.satellites {
            w.separator()?;
            satellite.print(w)?;
        }
        Ok(())
    }
}
