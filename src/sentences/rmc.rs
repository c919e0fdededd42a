use crate::{
    Fields,
    codec::{Date, EastWest, ModeIndicator, Offset, Position, Status, Utc},
};

/// RMC - Recommended minimum specific GNSS data
///
/// ```text
///         1         2 3       4 5        6 7   8   9      10  11 12
///         |         | |       | |        | |   |   |      |   |  |
///  $--RMC,hhmmss.ss,A,llll.ll,a,yyyyy.yy,a,x.x,x.x,xxxxxx,x.x,a,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Rmc {
    pub time: Option<Utc>,
    /// `A` data valid, `V` navigation receiver warning
    pub status: Option<Status>,
    pub position: Option<Position>,
    /// Speed over ground, knots
    pub speed_knots: Option<f64>,
    /// Course over ground, degrees true
    pub course_true: Option<f64>,
    pub date: Option<Date>,
    /// Magnetic variation, degrees `E`/`W`
    pub magnetic_variation: Option<Offset<EastWest>>,
    pub mode: Option<ModeIndicator>,
}
