use crate::{
    Fields,
    codec::{Dec, Hex},
};

/// MLA - GLONASS almanac data
///
/// One satellite per sentence; a full almanac is sent as a sequence.
///
/// ```text
///         1 2 3  4   5  6    7  8    9    10     11     12     13     14  15
///         | | |  |   |  |    |  |    |    |      |      |      |      |   |
///  $--MLA,x,x,xx,x.x,hh,hhhh,hh,hhhh,hhhh,hhhhhh,hhhhhh,hhhhhh,hhhhhh,hhh,hhh*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Mla {
    /// Total number of sentences in the sequence
    pub total: u8,
    /// Number of this sentence
    pub number: u8,
    pub almanac: GlonassAlmanac,
}

/// Almanac of one GLONASS satellite.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Fields)]
pub struct GlonassAlmanac {
    /// Satellite slot number, 01 to 24
    pub slot: Dec<2>,
    /// Calendar day count within the four-year period from the last leap year
    pub day_count: Option<u16>,
    /// Generalized health and carrier frequency number
    pub health: Option<Hex<2>>,
    pub eccentricity: Option<Hex<4>>,
    /// Rate of change of the draconic circling time
    pub period_rate: Option<Hex<2>>,
    /// Argument of perigee
    pub perigee: Option<Hex<4>>,
    /// 16 most significant bits of the system time scale correction
    pub tau_c_high: Option<Hex<4>>,
    /// Correction to the mean draconic circling time
    pub delta_t: Option<Hex<6>>,
    /// Time of the ascending node
    pub t: Option<Hex<6>>,
    /// Greenwich longitude of the ascending node
    pub lambda: Option<Hex<6>>,
    /// Correction to the mean inclination
    pub delta_i: Option<Hex<6>>,
    /// 12 least significant bits of the system time scale correction
    pub tau_c_low: Option<Hex<3>>,
    /// Coarse time scale shift
    pub tau_n: Option<Hex<3>>,
}
