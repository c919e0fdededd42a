use crate::{Fields, codec::ModeIndicator};

/// Meters per second to knots.
pub const MPS_TO_KNOTS: f64 = 1.94384449;
/// Meters per second to kilometers per hour.
pub const MPS_TO_KMPH: f64 = 3.6;
/// Knots to meters per second.
pub const KNOTS_TO_MPS: f64 = 0.514444445;
/// Kilometers per hour to meters per second.
pub const KMPH_TO_MPS: f64 = 0.277777778;

/// VTG - Course over ground and ground speed
///
/// ```text
///         1   2 3   4 5   6 7   8 9
///         |   | |   | |   | |   | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Vtg {
    /// Course over ground, degrees true
    #[field(unit = 'T')]
    pub course_true: Option<f64>,
    /// Course over ground, degrees magnetic
    #[field(unit = 'M')]
    pub course_magnetic: Option<f64>,
    /// Speed over ground, knots
    #[field(unit = 'N')]
    pub speed_knots: Option<f64>,
    /// Speed over ground, km/h
    #[field(unit = 'K')]
    pub speed_kmph: Option<f64>,
    pub mode: Option<ModeIndicator>,
}

impl Vtg {
    /// Builds a record from a speed in m/s, filling both speed fields.
    pub fn from_speed_mps(
        course_true: Option<f64>,
        course_magnetic: Option<f64>,
        speed_mps: Option<f64>,
        mode: Option<ModeIndicator>,
    ) -> Self {
        Vtg {
            course_true,
            course_magnetic,
            speed_knots: speed_mps.map(|speed| speed * MPS_TO_KNOTS),
            speed_kmph: speed_mps.map(|speed| speed * MPS_TO_KMPH),
            mode,
        }
    }

    /// Speed over ground in m/s, from knots when present and km/h otherwise.
    pub fn speed_mps(&self) -> Option<f64> {
        self.speed_knots
            .map(|knots| knots * KNOTS_TO_MPS)
            .or(self.speed_kmph.map(|kmph| kmph * KMPH_TO_MPS))
    }
}
