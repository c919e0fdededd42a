use crate::{
    Fields,
    codec::{ModeIndicator, Position, Status, Utc},
};

/// GLL - Geographic position, latitude/longitude
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,llll.ll,a,yyyyy.yy,a,hhmmss.ss,A,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Gll {
    pub position: Option<Position>,
    pub time: Option<Utc>,
    pub status: Option<Status>,
    pub mode: Option<ModeIndicator>,
}
