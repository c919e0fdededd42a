//! Field printing into a bounded staging buffer.

use crate::{EncodeError, frame::MAX_SENTENCE_LEN};

/// Staging area for one sentence's content, sized to the protocol cap.
pub type Staging = heapless::String<MAX_SENTENCE_LEN>;

/// Writes fields into a [`Staging`] buffer.
///
/// Overflowing the staging buffer can only mean the sentence is longer than
/// the protocol allows, so it surfaces as [`EncodeError::SentenceExceedsMaxSize`].
pub struct FieldWriter<'a> {
    buf: &'a mut Staging,
    precision: usize,
}

impl<'a> FieldWriter<'a> {
    pub fn new(buf: &'a mut Staging, precision: usize) -> Self {
        FieldWriter { buf, precision }
    }

    /// Fractional digits used for numbers, seconds and minutes of arc.
    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn push(&mut self, c: char) -> Result<(), EncodeError> {
        self.buf
            .push(c)
            .map_err(|_| EncodeError::SentenceExceedsMaxSize)
    }

    pub fn push_str(&mut self, s: &str) -> Result<(), EncodeError> {
        self.buf
            .push_str(s)
            .map_err(|_| EncodeError::SentenceExceedsMaxSize)
    }

    pub fn separator(&mut self) -> Result<(), EncodeError> {
        self.push(',')
    }

    /// Backs `write!` on the writer.
    pub fn write_fmt(&mut self, args: core::fmt::Arguments<'_>) -> Result<(), EncodeError> {
        core::fmt::Write::write_fmt(self.buf, args).map_err(|_| EncodeError::SentenceExceedsMaxSize)
    }

    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }
}

/// Trait for printing field values.
///
/// The syntactic inverse of [`FieldParse`](crate::FieldParse): `print` emits the
/// field content without the leading separator, and multi-subfield values emit
/// their inner separators themselves.
pub trait FieldPrint {
    /// Number of comma-separated subfields the value occupies on the wire.
    const SUBFIELDS: usize = 1;

    fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError>;
}

impl<T: FieldPrint> FieldPrint for Option<T> {
    const SUBFIELDS: usize = T::SUBFIELDS;

    /// `None` prints as empty subfields, keeping the layout of the record intact.
    fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        match self {
            Some(value) => value.print(w),
            None => {
                for _ in 1..T::SUBFIELDS {
                    w.separator()?;
                }
                Ok(())
            }
        }
    }
}

impl<T: FieldPrint, const N: usize> FieldPrint for [T; N] {
    const SUBFIELDS: usize = N * T::SUBFIELDS;

    fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        for (index, elem) in self.iter().enumerate() {
            if index > 0 {
                w.separator()?;
            }
            elem.print(w)?;
        }
        Ok(())
    }
}

/// Prints `value` into a fresh staging buffer and returns it.
#[cfg(test)]
pub(crate) fn print_to_string<T: FieldPrint>(
    value: &T,
    precision: usize,
) -> Result<Staging, EncodeError> {
    let mut buf = Staging::new();
    value.print(&mut FieldWriter::new(&mut buf, precision))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_multi_subfield_values_keep_their_commas() {
        struct Pair;
        impl FieldPrint for Pair {
            const SUBFIELDS: usize = 2;
            fn print(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
                w.push_str("1,N")
            }
        }

        assert_eq!(print_to_string(&Some(Pair), 3).unwrap().as_str(), "1,N");
        assert_eq!(print_to_string(&Option::<Pair>::None, 3).unwrap().as_str(), ",");
    }

    #[test]
    fn overflow_reports_max_size() {
        let mut buf = Staging::new();
        let mut w = FieldWriter::new(&mut buf, 3);
        for _ in 0..MAX_SENTENCE_LEN {
            w.push('A').unwrap();
        }
        assert_eq!(w.push('A'), Err(EncodeError::SentenceExceedsMaxSize));
        assert_eq!(write!(w, "{}", 1), Err(EncodeError::SentenceExceedsMaxSize));
    }
}
