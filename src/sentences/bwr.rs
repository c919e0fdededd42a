use crate::{
    Fields,
    codec::{ModeIndicator, Position, Text, Utc},
};

/// BWR - Bearing and distance to waypoint, rhumb line
///
/// ```text
///         1         2       3 4        5 6   7 8   9 10  11 12   13
///         |         |       | |        | |   | |   | |   |  |    |
///  $--BWR,hhmmss.ss,llll.ll,a,yyyyy.yy,a,x.x,T,x.x,M,x.x,N,c--c,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Bwr {
    /// Time of observation
    pub time: Option<Utc>,
    pub waypoint_position: Option<Position>,
    #[field(unit = 'T')]
    pub bearing_true: Option<f64>,
    #[field(unit = 'M')]
    pub bearing_magnetic: Option<f64>,
    /// Rhumb line distance, nautical miles
    #[field(unit = 'N')]
    pub distance: Option<f64>,
    pub waypoint: Option<Text>,
    pub mode: Option<ModeIndicator>,
}
