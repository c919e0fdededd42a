use crate::{Fields, codec::Utc};

/// GST - GNSS pseudorange noise statistics
///
/// ```text
///         1         2   3   4   5   6   7   8
///         |         |   |   |   |   |   |   |
///  $--GST,hhmmss.ss,x.x,x.x,x.x,x.x,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Gst {
    pub time: Option<Utc>,
    /// RMS of the standard deviation of the range inputs
    pub rms: Option<f64>,
    /// Standard deviation of the semi-major axis of the error ellipse, meters
    pub semi_major: Option<f64>,
    /// Standard deviation of the semi-minor axis of the error ellipse, meters
    pub semi_minor: Option<f64>,
    /// Orientation of the semi-major axis, degrees from true north
    pub orientation: Option<f64>,
    /// Standard deviation of latitude error, meters
    pub latitude_error: Option<f64>,
    /// Standard deviation of longitude error, meters
    pub longitude_error: Option<f64>,
    /// Standard deviation of altitude error, meters
    pub altitude_error: Option<f64>,
}
