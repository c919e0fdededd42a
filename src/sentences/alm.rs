use crate::{
    Fields,
    codec::{Dec, Hex},
};

/// ALM - GPS almanac data
///
/// One satellite per sentence; a full almanac is sent as a sequence.
///
/// ```text
///         1 2 3  4   5  6    7  8    9    10     11     12     13     14  15
///         | | |  |   |  |    |  |    |    |      |      |      |      |   |
///  $--ALM,x,x,xx,x.x,hh,hhhh,hh,hhhh,hhhh,hhhhhh,hhhhhh,hhhhhh,hhhhhh,hhh,hhh*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Alm {
    /// Total number of sentences in the sequence
    pub total: u8,
    /// Number of this sentence
    pub number: u8,
    pub almanac: GpsAlmanac,
}

/// Almanac of one GPS satellite, as broadcast in subframes 4 and 5.
///
/// The orbital parameters are the raw bit-packed words.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Fields)]
pub struct GpsAlmanac {
    /// Satellite PRN number, 01 to 32
    pub prn: Dec<2>,
    /// GPS week number
    pub week: Option<u16>,
    /// SV health, bits 17-24 of subframe word 5
    pub health: Option<Hex<2>>,
    pub eccentricity: Option<Hex<4>>,
    /// Almanac reference time
    pub reference_time: Option<Hex<2>>,
    /// Inclination angle
    pub inclination: Option<Hex<4>>,
    /// Rate of right ascension
    pub omega_dot: Option<Hex<4>>,
    /// Root of the semi-major axis
    pub sqrt_semi_major_axis: Option<Hex<6>>,
    pub argument_of_perigee: Option<Hex<6>>,
    /// Longitude of the ascending node
    pub ascending_node: Option<Hex<6>>,
    pub mean_anomaly: Option<Hex<6>>,
    /// Clock parameter
    pub af0: Option<Hex<3>>,
    /// Clock parameter
    pub af1: Option<Hex<3>>,
}
