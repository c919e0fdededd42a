//! XOR checksum over the bytes between `$` and `*`.

use nom::AsBytes;

/// Calculates the checksum of the frame content.
///
/// The content is everything between the `$` and the `*`, both excluded. The
/// checksum is the XOR of those bytes; it is computed on raw bytes, so it
/// catches corruption that still happens to parse as valid fields.
///
/// Returns the input unchanged alongside the checksum.
///
/// ```rust
/// use iec61162::frame::checksum;
///
/// let (_, cc) = checksum("GPGGA,data");
/// assert_eq!(cc, 0x6A);
/// ```
pub fn checksum<I>(input: I) -> (I, u8)
where
    I: AsBytes,
{
    let calculated = input.as_bytes().iter().fold(0u8, |acc, &byte| acc ^ byte);
    (input, calculated)
}

/// Formats a checksum as two uppercase hex digits.
pub fn format_checksum(cc: u8) -> [u8; 2] {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
    [DIGITS[usize::from(cc >> 4)], DIGITS[usize::from(cc & 0x0F)]]
}

/// Checks `claimed`, two hex digits of either case, against the content.
pub fn verify_checksum(content: &[u8], claimed: &[u8]) -> bool {
    let [hi, lo] = claimed else {
        return false;
    };
    match ((*hi as char).to_digit(16), (*lo as char).to_digit(16)) {
        (Some(hi), Some(lo)) => checksum(content).1 == (hi << 4 | lo) as u8,
        _ => false,
    }
}
