use crate::{Fields, codec::Dec};

/// ACK - Acknowledge alarm
///
/// ```text
///         1
///         |
///  $--ACK,xxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Ack {
    /// Identifier of the alarm being acknowledged
    pub alarm_id: Dec<3>,
}
