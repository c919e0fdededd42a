//! Single-letter and short-code enumerations.

use nom::{
    Parser,
    character::complete::anychar,
    combinator::map_opt,
    error::ParseError,
    multi::fold_many_m_n,
};

use super::within_field;
use crate::{EncodeError, FieldParse, FieldPrint, FieldWriter, IResult};

code_enum! {
    /// Data status.
    pub enum Status {
        /// Data valid
        "A" => Valid,
        /// Data not valid
        "V" => Invalid,
    }
}

code_enum! {
    /// Positioning system mode indicator.
    pub enum ModeIndicator {
        /// Autonomous mode
        "A" => Autonomous,
        /// Differential mode
        "D" => Differential,
        /// Estimated (dead reckoning) mode
        "E" => Estimated,
        /// Manual input mode
        "M" => Manual,
        /// Simulator mode
        "S" => Simulator,
        /// Data not valid
        "N" => NotValid,
        /// Precise mode
        "P" => Precise,
        /// Real time kinematic with fixed integers
        "R" => RtkFixed,
        /// Real time kinematic with floating integers
        "F" => RtkFloat,
    }
}

code_enum! {
    /// GSA selection mode.
    pub enum SelectionMode {
        /// Automatic 2D/3D switching
        "A" => Automatic,
        /// Operator forced 2D or 3D
        "M" => Manual,
    }
}

code_enum! {
    /// GSA fix dimension.
    pub enum FixMode {
        "1" => NotAvailable,
        "2" => Fix2D,
        "3" => Fix3D,
    }
}

code_enum! {
    /// GGA quality indicator.
    pub enum GpsQuality {
        "0" => Invalid,
        "1" => Gps,
        "2" => Differential,
        "3" => Pps,
        "4" => RtkFixed,
        "5" => RtkFloat,
        "6" => Estimated,
        "7" => Manual,
        "8" => Simulator,
    }
}

code_enum! {
    /// Geodetic datum.
    pub enum Datum {
        "W84" => Wgs84,
        "W72" => Wgs72,
        "S85" => Sgs85,
        "P90" => Pe90,
        "999" => UserDefined,
    }
}

code_enum! {
    /// Hemisphere of a latitude offset.
    pub enum NorthSouth {
        "N" => North,
        "S" => South,
    }
}

code_enum! {
    /// Hemisphere of a longitude offset, or the side of a magnetic variation.
    pub enum EastWest {
        "E" => East,
        "W" => West,
    }
}

code_enum! {
    /// Direction to steer.
    pub enum LeftRight {
        "L" => Left,
        "R" => Right,
    }
}

code_enum! {
    /// Reference of a bearing or heading.
    pub enum Reference {
        "T" => True,
        "M" => Magnetic,
    }
}

/// A sign pair with a negative side, as used by [`Offset::signed`](super::Offset::signed).
pub trait Hemisphere: Copy {
    fn is_negative(self) -> bool;
}

impl Hemisphere for NorthSouth {
    fn is_negative(self) -> bool {
        self == NorthSouth::South
    }
}

impl Hemisphere for EastWest {
    fn is_negative(self) -> bool {
        self == EastWest::West
    }
}

/// Per-system mode indicators packed into one field, as in GNS.
///
/// Holds one to four indicators. An empty value has no wire form.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeIndicators(pub heapless::Vec<ModeIndicator, 4>);

impl ModeIndicators {
    /// Returns `None` for an empty slice or one longer than four.
    pub fn from_slice(modes: &[ModeIndicator]) -> Option<Self> {
        if modes.is_empty() {
            return None;
        }
        heapless::Vec::from_slice(modes).ok().map(ModeIndicators)
    }
}

fn mode_indicator<'a, E>(i: &'a str) -> nom::IResult<&'a str, ModeIndicator, E>
where
    E: ParseError<&'a str>,
{
    map_opt(anychar, |c: char| {
        let mut code = [0; 4];
        ModeIndicator::from_code(c.encode_utf8(&mut code))
    })
    .parse(i)
}

impl<'a, E> FieldParse<&'a str, E> for ModeIndicators
where
    E: ParseError<&'a str>,
{
    fn parse(i: &'a str) -> IResult<&'a str, Self, E> {
        // at most four, the capacity of the vector
        let modes = fold_many_m_n(
            1,
            4,
            mode_indicator,
            heapless::Vec::new,
            |mut modes: heapless::Vec<ModeIndicator, 4>, mode| {
                let _ = modes.push(mode);
                modes
            },
        );

        within_field(modes).map(ModeIndicators).parse(i)
    }
}

impl FieldPrint for ModeIndicators {
    fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        if self.0.is_empty() {
            return Err(EncodeError::InvalidParameter("no mode indicators"));
        }
        for mode in &self.0 {
            w.push_str(mode.code())?;
        }
        Ok(())
    }
}
