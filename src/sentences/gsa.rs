use crate::{
    Fields,
    codec::{Dec, FixMode, SelectionMode},
};

/// GSA - GNSS DOP and active satellites
///
/// ```text
///         1 2 3                        14  15  16
///         | | |                        |   |   |
///  $--GSA,a,x,xx,xx,xx,xx,xx,xx,xx,xx,xx,xx,xx,xx,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Gsa {
    pub selection: Option<SelectionMode>,
    pub fix: Option<FixMode>,
    /// IDs of the satellites used in the solution
    pub satellites: [Option<Dec<2>>; 12],
    /// Position dilution of precision
    pub pdop: Option<f64>,
    /// Horizontal dilution of precision
    pub hdop: Option<f64>,
    /// Vertical dilution of precision
    pub vdop: Option<f64>,
}

impl Gsa {
    /// IDs of the used satellites, skipping empty slots.
    pub fn used_satellites(&self) -> impl Iterator<Item = u32> + '_ {
        self.satellites.iter().flatten().map(|id| id.0)
    }
}
