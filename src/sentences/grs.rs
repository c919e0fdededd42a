use crate::{Fields, codec::Utc};

/// GRS - GNSS range residuals
///
/// ```text
///         1         2 3   4   5   6   7   8   9   10  11  12  13  14
///         |         | |   |   |   |   |   |   |   |   |   |   |   |
///  $--GRS,hhmmss.ss,x,x.x,x.x,x.x,x.x,x.x,x.x,x.x,x.x,x.x,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Grs {
    /// UTC time of the associated GGA or GNS fix
    pub time: Option<Utc>,
    /// 0: residuals were used to calculate the position; 1: recomputed after it
    pub mode: Option<u8>,
    /// Range residuals in meters, in the order of the satellites in GSA
    pub residuals: [Option<f64>; 12],
}
