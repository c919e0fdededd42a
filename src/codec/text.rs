//! Character fields and `^HH` escaping.

use nom::error::ParseError;

use super::field_token;
use crate::{EncodeError, Error, FieldParse, FieldPrint, FieldWriter, IResult, charset};

/// Longest character field that fits a TXT sentence.
pub type Text = heapless::String<61>;

fn hex_value(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}

impl<'a, E, const N: usize> FieldParse<&'a str, E> for heapless::String<N>
where
    E: ParseError<&'a str>,
{
    /// Valid characters are copied; `^HH` decodes to the byte it names.
    /// A reserved or undefined character that is not escaped is invalid.
    fn parse(i: &'a str) -> IResult<&'a str, Self, E> {
        let (rest, token) = field_token(i)?;
        let invalid = || nom::Err::Error(Error::InvalidField(i));
        let bytes = token.as_bytes();
        let mut text = heapless::String::new();
        let mut pos = 0;

        while pos < bytes.len() {
            let c = match bytes[pos] {
                b'^' => {
                    let hi = bytes.get(pos + 1).copied().and_then(hex_value);
                    let lo = bytes.get(pos + 2).copied().and_then(hex_value);
                    let byte = match (hi, lo) {
                        (Some(hi), Some(lo)) => hi << 4 | lo,
                        _ => return Err(invalid()),
                    };
                    if !byte.is_ascii() {
                        return Err(invalid());
                    }
                    pos += 3;
                    byte as char
                }
                b if charset::is_valid(b) => {
                    pos += 1;
                    b as char
                }
                _ => return Err(invalid()),
            };
            text.push(c).map_err(|_| invalid())?;
        }

        Ok((rest, text))
    }
}

impl<const N: usize> FieldPrint for heapless::String<N> {
    fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        print_escaped(self, w)
    }
}

/// Printed width of `c`: one character, or three when it must be escaped.
pub(crate) fn escaped_width(c: char) -> usize {
    if c.is_ascii() && charset::is_valid(c as u8) {
        1
    } else {
        3
    }
}

pub(crate) fn print_escaped(text: &str, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
    for c in text.chars() {
        if !c.is_ascii() {
            return Err(EncodeError::InvalidParameter("text is not ASCII"));
        }
        if charset::is_valid(c as u8) {
            w.push(c)?;
        } else {
            write!(w, "^{:02X}", c as u8)?;
        }
    }
    Ok(())
}
