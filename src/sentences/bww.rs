use crate::{Fields, codec::Text};

/// BWW - Bearing, waypoint to waypoint
///
/// ```text
///         1   2 3   4 5    6
///         |   | |   | |    |
///  $--BWW,x.x,T,x.x,M,c--c,c--c*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Bww {
    #[field(unit = 'T')]
    pub bearing_true: Option<f64>,
    #[field(unit = 'M')]
    pub bearing_magnetic: Option<f64>,
    pub to_waypoint: Option<Text>,
    pub from_waypoint: Option<Text>,
}
