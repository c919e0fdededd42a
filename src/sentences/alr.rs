use crate::{
    Fields,
    codec::{Dec, Status, Text, Utc},
};

/// ALR - Set alarm state
///
/// ```text
///         1         2   3 4 5
///         |         |   | | |
///  $--ALR,hhmmss.ss,xxx,A,A,c--c*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Alr {
    /// Time of the last change of the alarm condition
    pub time: Option<Utc>,
    /// Unique alarm number at the alarm source
    pub alarm_id: Dec<3>,
    /// `A` threshold exceeded, `V` not exceeded
    pub condition: Option<Status>,
    /// `A` acknowledged, `V` unacknowledged
    pub acknowledged: Option<Status>,
    /// Alarm description text
    pub description: Option<Text>,
}
