//! Character classes of the IEC 61162-1 character set.

/// Class of a single byte on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Printable and allowed anywhere in a field.
    Valid,
    /// Carries framing meaning; inside a text field it must travel as `^HH`.
    Reserved,
    /// Not part of the character set at all.
    Undefined,
}

/// `<CR> <LF> ! $ * , \ ^ ~ <DEL>`
pub const RESERVED: [u8; 10] = [
    b'\r', b'\n', b'!', b'$', b'*', b',', b'\\', b'^', b'~', 0x7f,
];

/// Classifies a byte.
///
/// ```
/// use iec61162::charset::{CharClass, classify};
///
/// assert_eq!(classify(b'A'), CharClass::Valid);
/// assert_eq!(classify(b','), CharClass::Reserved);
/// assert_eq!(classify(0x07), CharClass::Undefined);
/// ```
pub const fn classify(byte: u8) -> CharClass {
    match byte {
        b'\r' | b'\n' | b'!' | b'$' | b'*' | b',' | b'\\' | b'^' | b'~' | 0x7f => {
            CharClass::Reserved
        }
        0x20..=0x7e => CharClass::Valid,
        _ => CharClass::Undefined,
    }
}

pub const fn is_valid(byte: u8) -> bool {
    matches!(classify(byte), CharClass::Valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_table_matches_classifier() {
        for byte in RESERVED {
            assert_eq!(classify(byte), CharClass::Reserved, "{byte:#04x}");
        }
    }

    #[test]
    fn printable_ascii_is_valid_unless_reserved() {
        let valid = (0x20u8..=0x7e).filter(|b| is_valid(*b)).count();
        assert_eq!(valid, 95 - 7);
        assert!(is_valid(b' '));
        assert!(is_valid(b'.'));
        assert!(!is_valid(b'^'));
    }

    #[test]
    fn control_and_high_bytes_are_undefined() {
        assert_eq!(classify(0x00), CharClass::Undefined);
        assert_eq!(classify(0x1b), CharClass::Undefined);
        assert_eq!(classify(0x80), CharClass::Undefined);
        assert_eq!(classify(0xff), CharClass::Undefined);
    }
}
