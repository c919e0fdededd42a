use crate::{
    Fields,
    codec::{Position, Text, Utc},
};

/// BEC - Bearing and distance to waypoint, dead reckoning
///
/// ```text
///         1         2       3 4        5 6   7 8   9 10  11 12
///         |         |       | |        | |   | |   | |   |  |
///  $--BEC,hhmmss.ss,llll.ll,a,yyyyy.yy,a,x.x,T,x.x,M,x.x,N,c--c*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Bec {
    /// Time of observation
    pub time: Option<Utc>,
    pub waypoint_position: Option<Position>,
    /// Bearing to the waypoint, degrees true
    #[field(unit = 'T')]
    pub bearing_true: Option<f64>,
    /// Bearing to the waypoint, degrees magnetic
    #[field(unit = 'M')]
    pub bearing_magnetic: Option<f64>,
    /// Distance to the waypoint, nautical miles
    #[field(unit = 'N')]
    pub distance: Option<f64>,
    pub waypoint: Option<Text>,
}
