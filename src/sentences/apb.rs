use crate::{
    Fields,
    codec::{Bearing, LeftRight, ModeIndicator, Offset, Status, Text},
};

/// APB - Heading/track controller (autopilot) sentence B
///
/// ```text
///         1 2 3   4 5 6 7 8   9 10   11  12 13 14 15
///         | | |   | | | | |   | |    |   |  |   | |
///  $--APB,A,A,x.x,a,N,A,A,x.x,a,c--c,x.x,a,x.x,a,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Apb {
    /// `V` for a Loran-C blink or SNR warning, or general data warning
    pub warning: Option<Status>,
    /// `V` for a Loran-C cycle lock warning
    pub cycle_lock: Option<Status>,
    /// Cross-track error in nautical miles, with the direction to steer
    #[field(unit = 'N')]
    pub cross_track_error: Option<Offset<LeftRight>>,
    /// `A` arrival circle entered
    pub arrival_circle: Option<Status>,
    /// `A` perpendicular passed at the waypoint
    pub perpendicular: Option<Status>,
    pub bearing_origin_to_destination: Option<Bearing>,
    pub destination: Option<Text>,
    pub bearing_to_destination: Option<Bearing>,
    pub heading_to_steer: Option<Bearing>,
    pub mode: Option<ModeIndicator>,
}
