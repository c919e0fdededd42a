use crate::{
    Fields,
    codec::{Dec, ModeIndicators, Position, Utc},
};

/// GNS - GNSS fix data
///
/// ```text
///         1         2       3 4        5 6    7  8   9   10  11  12
///         |         |       | |        | |    |  |   |   |   |   |
///  $--GNS,hhmmss.ss,llll.ll,a,yyyyy.yy,a,c--c,xx,x.x,x.x,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Gns {
    pub time: Option<Utc>,
    pub position: Option<Position>,
    /// One mode indicator per constellation, GPS first
    pub modes: Option<ModeIndicators>,
    /// Total number of satellites in use, 00 to 99
    pub satellites: Option<Dec<2>>,
    /// Horizontal dilution of precision
    pub hdop: Option<f64>,
    /// Antenna altitude above mean sea level, meters
    pub altitude: Option<f64>,
    /// Geoidal separation, meters
    pub geoidal_separation: Option<f64>,
    /// Age of differential data, seconds
    pub dgps_age: Option<f64>,
    /// Differential reference station ID
    pub station: Option<u16>,
}
