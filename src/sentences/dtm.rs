use crate::{
    Fields,
    codec::{Datum, EastWest, NorthSouth, Offset},
};

/// DTM - Datum reference
///
/// Latitude and longitude offsets are in minutes of arc, as sent.
///
/// ```text
///         1   2 3   4 5   6 7   8
///         |   | |   | |   | |   |
///  $--DTM,ccc,a,x.x,a,x.x,a,x.x,ccc*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Dtm {
    pub local_datum: Option<Datum>,
    /// Local datum subdivision code
    pub subdivision: Option<heapless::String<1>>,
    /// Latitude offset in minutes, `N`/`S`
    pub latitude_offset: Option<Offset<NorthSouth>>,
    /// Longitude offset in minutes, `E`/`W`
    pub longitude_offset: Option<Offset<EastWest>>,
    /// Altitude offset in meters
    pub altitude_offset: Option<f64>,
    pub reference_datum: Option<Datum>,
}

impl Dtm {
    /// Latitude offset in signed degrees.
    pub fn latitude_offset_degrees(&self) -> Option<f64> {
        self.latitude_offset.map(|offset| offset.signed() / 60.0)
    }

    /// Longitude offset in signed degrees.
    pub fn longitude_offset_degrees(&self) -> Option<f64> {
        self.longitude_offset.map(|offset| offset.signed() / 60.0)
    }
}
