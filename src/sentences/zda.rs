use crate::{
    Fields,
    codec::{Dec, LocalZone, Utc},
};

/// ZDA - Time and date
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Zda {
    pub time: Option<Utc>,
    /// Day, 01 to 31
    pub day: Option<Dec<2>>,
    /// Month, 01 to 12
    pub month: Option<Dec<2>>,
    pub year: Option<Dec<4>>,
    /// Local zone, hours and minutes
    pub zone: Option<LocalZone>,
}
