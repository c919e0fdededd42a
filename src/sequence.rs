//! # Sequences
//!
//! Payloads that do not fit one sentence travel as a sequence of parts, each
//! carrying the total part count and its own 1-based number: satellite lists in
//! GSV, long text in TXT, and almanacs in ALM and MLA.
//!
//! Splitting always goes through the same path, so a payload that fits one
//! sentence still becomes a one-part sequence. [`SequenceJoiner`] performs the
//! inverse on the receiving side.
//!
//! ```rust
//! use iec61162::{
//!     codec::Dec,
//!     sentences::{Gsv, Satellite},
//!     sequence::{JoinStatus, SequenceJoiner},
//! };
//!
//! let satellites: Vec<Satellite> = (1..=6)
//!     .map(|id| Satellite { id: Dec(id), ..Default::default() })
//!     .collect();
//!
//! let parts: Vec<Gsv> = Gsv::sequence(&satellites).unwrap().collect();
//! assert_eq!(parts.len(), 2);
//!
//! let mut joiner = SequenceJoiner::new();
//! assert!(matches!(joiner.push(&parts[0]), Ok(JoinStatus::Incomplete { received: 1, total: 2 })));
//! let Ok(JoinStatus::Complete(joined)) = joiner.push(&parts[1]) else {
//!     panic!("sequence should be complete");
//! };
//! assert_eq!(joined.as_slice(), satellites.as_slice());
//! ```

use crate::{
    EncodeError,
    codec::{Dec, Text, text::escaped_width},
    frame::FIELD_BUDGET,
    sentences::{Alm, GlonassAlmanac, GpsAlmanac, Gsv, Mla, Satellite, Txt},
};

/// Printed width of one GSV satellite block, including its leading comma.
const GSV_BLOCK_WIDTH: usize = ",xx,xx,xxx,xx".len();

/// Satellites per GSV sentence.
pub const GSV_CAPACITY: usize = {
    let fit = (FIELD_BUDGET - "x,x,xx".len()) / GSV_BLOCK_WIDTH;
    if fit < crate::sentences::GSV_SATELLITES {
        fit
    } else {
        crate::sentences::GSV_SATELLITES
    }
};

/// Escaped text characters per TXT sentence.
pub const TXT_CAPACITY: usize = FIELD_BUDGET - "xx,xx,xx,".len();

/// Almanac records per ALM or MLA sentence.
pub const ALMANAC_CAPACITY: usize = 1;

/// Highest part count of a GSV sequence; the count field is one digit.
pub const GSV_MAX_PARTS: usize = 9;

/// Highest part count of a TXT sequence.
pub const TXT_MAX_PARTS: usize = 99;

/// Most satellites an almanac sequence can carry.
pub const ALMANAC_MAX_SATELLITES: usize = 32;

/// Most satellites a joined GSV sequence can hold.
pub const GSV_MAX_SATELLITES: usize = GSV_CAPACITY * GSV_MAX_PARTS;

/// Longest text a joined TXT sequence can hold.
pub const TXT_MAX_LEN: usize = TXT_CAPACITY * TXT_MAX_PARTS;

/// Where a part sits in its sequence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequencePosition {
    pub total: u8,
    /// 1-based
    pub number: u8,
}

impl SequencePosition {
    pub fn is_first(&self) -> bool {
        self.number == 1
    }

    pub fn is_last(&self) -> bool {
        self.number == self.total
    }
}

/// Number of parts `count` elements take at `capacity` per part.
///
/// An empty payload still takes one part.
pub fn part_count(count: usize, capacity: usize) -> usize {
    count.div_ceil(capacity.max(1)).max(1)
}

/// Splits `items` into parts of at most `capacity` elements.
///
/// # Errors
///
/// [`EncodeError::InvalidParameter`] when `capacity` is zero or the payload
/// needs more than `max_parts` parts.
pub fn split<T>(
    items: &[T],
    capacity: usize,
    max_parts: usize,
) -> Result<Chunks<'_, T>, EncodeError> {
    if capacity == 0 {
        return Err(EncodeError::InvalidParameter("sequence capacity is zero"));
    }

    let total = part_count(items.len(), capacity);
    if total > max_parts || total > usize::from(u8::MAX) {
        return Err(EncodeError::InvalidParameter("payload needs too many sequence parts"));
    }

    Ok(Chunks {
        items,
        capacity,
        total: total as u8,
        number: 0,
    })
}

/// Iterator over the parts of a split element list.
#[derive(Debug, Clone)]
pub struct Chunks<'a, T> {
    items: &'a [T],
    capacity: usize,
    total: u8,
    number: u8,
}

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = (SequencePosition, &'a [T]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.number >= self.total {
            return None;
        }

        let at = self.items.len().min(self.capacity);
        let (chunk, rest) = self.items.split_at(at);
        self.items = rest;
        self.number += 1;

        Some((
            SequencePosition {
                total: self.total,
                number: self.number,
            },
            chunk,
        ))
    }
}

/// Longest prefix of `text` whose escaped form fits `capacity`.
fn text_chunk(text: &str, capacity: usize) -> (&str, &str) {
    let mut width = 0;
    for (index, c) in text.char_indices() {
        width += escaped_width(c);
        if width > capacity {
            return text.split_at(index);
        }
    }
    (text, "")
}

/// Splits ASCII text into parts whose escaped form fits `capacity` characters.
///
/// A `^HH` escape is never cut across two parts.
///
/// # Errors
///
/// [`EncodeError::InvalidParameter`] for non-ASCII text, a capacity that cannot
/// hold one escape, or more than `max_parts` parts.
pub fn split_text(
    text: &str,
    capacity: usize,
    max_parts: usize,
) -> Result<TextChunks<'_>, EncodeError> {
    if !text.is_ascii() {
        return Err(EncodeError::InvalidParameter("text is not ASCII"));
    }
    if capacity < 3 {
        return Err(EncodeError::InvalidParameter("text capacity cannot hold an escape"));
    }

    let mut total = 1;
    let (_, mut rest) = text_chunk(text, capacity);
    while !rest.is_empty() {
        total += 1;
        (_, rest) = text_chunk(rest, capacity);
    }
    if total > max_parts || total > usize::from(u8::MAX) {
        return Err(EncodeError::InvalidParameter("payload needs too many sequence parts"));
    }

    Ok(TextChunks {
        text,
        capacity,
        total: total as u8,
        number: 0,
    })
}

/// Iterator over the parts of split text.
#[derive(Debug, Clone)]
pub struct TextChunks<'a> {
    text: &'a str,
    capacity: usize,
    total: u8,
    number: u8,
}

impl<'a> Iterator for TextChunks<'a> {
    type Item = (SequencePosition, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.number >= self.total {
            return None;
        }

        let (chunk, rest) = text_chunk(self.text, self.capacity);
        self.text = rest;
        self.number += 1;

        Some((
            SequencePosition {
                total: self.total,
                number: self.number,
            },
            chunk,
        ))
    }
}

impl Gsv {
    /// Splits a satellite list into GSV records of up to four satellites.
    ///
    /// Every part reports the full list length as satellites in view.
    pub fn sequence(
        satellites: &[Satellite],
    ) -> Result<impl Iterator<Item = Gsv> + Clone + '_, EncodeError> {
        let chunks = split(satellites, GSV_CAPACITY, GSV_MAX_PARTS)?;
        let in_view = Dec(satellites.len() as u32);

        Ok(chunks.map(move |(position, chunk)| Gsv {
            total: position.total,
            number: position.number,
            in_view: Some(in_view),
            satellites: heapless::Vec::from_slice(chunk).unwrap_or_default(),
        }))
    }
}

impl Txt {
    /// Splits text into TXT records under one identifier.
    pub fn sequence(
        identifier: u8,
        text: &str,
    ) -> Result<impl Iterator<Item = Txt> + Clone + '_, EncodeError> {
        if identifier > 99 {
            return Err(EncodeError::InvalidParameter("text identifier above 99"));
        }
        let chunks = split_text(text, TXT_CAPACITY, TXT_MAX_PARTS)?;

        Ok(chunks.map(move |(position, chunk)| Txt {
            total: Dec(u32::from(position.total)),
            number: Dec(u32::from(position.number)),
            identifier: Dec(u32::from(identifier)),
            text: Text::try_from(chunk).unwrap_or_default(),
        }))
    }
}

impl Alm {
    /// One ALM record per satellite almanac.
    pub fn sequence(
        almanacs: &[GpsAlmanac],
    ) -> Result<impl Iterator<Item = Alm> + Clone + '_, EncodeError> {
        let chunks = split(almanacs, ALMANAC_CAPACITY, ALMANAC_MAX_SATELLITES)?;

        Ok(chunks.flat_map(|(position, chunk)| {
            chunk.iter().map(move |almanac| Alm {
                total: position.total,
                number: position.number,
                almanac: almanac.clone(),
            })
        }))
    }
}

impl Mla {
    /// One MLA record per satellite almanac.
    pub fn sequence(
        almanacs: &[GlonassAlmanac],
    ) -> Result<impl Iterator<Item = Mla> + Clone + '_, EncodeError> {
        let chunks = split(almanacs, ALMANAC_CAPACITY, ALMANAC_MAX_SATELLITES)?;

        Ok(chunks.flat_map(|(position, chunk)| {
            chunk.iter().map(move |almanac| Mla {
                total: position.total,
                number: position.number,
                almanac: almanac.clone(),
            })
        }))
    }
}

/// Errors reported while joining a sequence.
///
/// Any of them resets the joiner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// The part number is zero or above the total.
    #[error("part {number} of {total} is not a valid position")]
    InvalidPosition { total: u8, number: u8 },

    /// A part arrived out of order.
    #[error("expected part {expected}, got part {found}")]
    OutOfOrder { expected: u8, found: u8 },

    /// A part disagrees with the sequence about the part count.
    #[error("sequence of {expected} parts changed to {found}")]
    TotalChanged { expected: u8, found: u8 },

    /// The joined payload outgrew its buffer.
    #[error("joined payload exceeds its capacity")]
    Overflow,
}

/// A record that carries one part of a sequence.
pub trait SequencePart {
    /// The joined payload.
    type Payload: Default;

    fn position(&self) -> SequencePosition;

    /// Appends the elements of this part to `payload`.
    fn append_to(&self, payload: &mut Self::Payload) -> Result<(), SequenceError>;
}

impl SequencePart for Gsv {
    type Payload = heapless::Vec<Satellite, GSV_MAX_SATELLITES>;

    fn position(&self) -> SequencePosition {
        SequencePosition {
            total: self.total,
            number: self.number,
        }
    }

    fn append_to(&self, payload: &mut Self::Payload) -> Result<(), SequenceError> {
        payload
            .extend_from_slice(&self.satellites)
            .map_err(|_| SequenceError::Overflow)
    }
}

impl SequencePart for Txt {
    type Payload = heapless::String<TXT_MAX_LEN>;

    fn position(&self) -> SequencePosition {
        SequencePosition {
            total: u8::try_from(self.total.0).unwrap_or(u8::MAX),
            number: u8::try_from(self.number.0).unwrap_or(u8::MAX),
        }
    }

    fn append_to(&self, payload: &mut Self::Payload) -> Result<(), SequenceError> {
        payload
            .push_str(&self.text)
            .map_err(|_| SequenceError::Overflow)
    }
}

impl SequencePart for Alm {
    type Payload = heapless::Vec<GpsAlmanac, ALMANAC_MAX_SATELLITES>;

    fn position(&self) -> SequencePosition {
        SequencePosition {
            total: self.total,
            number: self.number,
        }
    }

    fn append_to(&self, payload: &mut Self::Payload) -> Result<(), SequenceError> {
        payload
            .push(self.almanac.clone())
            .map_err(|_| SequenceError::Overflow)
    }
}

impl SequencePart for Mla {
    type Payload = heapless::Vec<GlonassAlmanac, ALMANAC_MAX_SATELLITES>;

    fn position(&self) -> SequencePosition {
        SequencePosition {
            total: self.total,
            number: self.number,
        }
    }

    fn append_to(&self, payload: &mut Self::Payload) -> Result<(), SequenceError> {
        payload
            .push(self.almanac.clone())
            .map_err(|_| SequenceError::Overflow)
    }
}

/// Progress of a join.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinStatus<T> {
    Incomplete { received: u8, total: u8 },
    Complete(T),
}

/// Reassembles the parts of one sequence, in order.
///
/// A part numbered 1 always starts a new sequence, dropping whatever was
/// collected before. Gaps, reordering and a changed total are errors.
#[derive(Debug)]
pub struct SequenceJoiner<P: SequencePart> {
    payload: P::Payload,
    total: u8,
    received: u8,
}

impl<P: SequencePart> SequenceJoiner<P> {
    pub fn new() -> Self {
        SequenceJoiner {
            payload: P::Payload::default(),
            total: 0,
            received: 0,
        }
    }

    /// `true` when no sequence is in progress.
    pub fn is_idle(&self) -> bool {
        self.received == 0
    }

    /// Drops the sequence in progress.
    pub fn reset(&mut self) {
        self.payload = P::Payload::default();
        self.total = 0;
        self.received = 0;
    }

    /// Adds the next part.
    pub fn push(&mut self, part: &P) -> Result<JoinStatus<P::Payload>, SequenceError> {
        let SequencePosition { total, number } = part.position();

        if number == 0 || number > total {
            self.reset();
            return Err(SequenceError::InvalidPosition { total, number });
        }

        if number == 1 {
            self.reset();
            self.total = total;
        } else if number != self.received + 1 {
            let expected = self.received + 1;
            self.reset();
            return Err(SequenceError::OutOfOrder { expected, found: number });
        } else if total != self.total {
            let expected = self.total;
            self.reset();
            return Err(SequenceError::TotalChanged { expected, found: total });
        }

        if let Err(e) = part.append_to(&mut self.payload) {
            self.reset();
            return Err(e);
        }
        self.received = number;

        if number == total {
            let payload = core::mem::take(&mut self.payload);
            self.reset();
            Ok(JoinStatus::Complete(payload))
        } else {
            Ok(JoinStatus::Incomplete {
                received: number,
                total,
            })
        }
    }
}

impl<P: SequencePart> Default for SequenceJoiner<P> {
    fn default() -> Self {
        SequenceJoiner::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn satellites(n: u32) -> Vec<Satellite> {
        (1..=n)
            .map(|id| Satellite {
                id: Dec(id),
                elevation: Some(Dec(45)),
                azimuth: Some(Dec(id * 10)),
                snr: None,
            })
            .collect()
    }

    #[test]
    fn capacities_follow_the_field_budget() {
        assert_eq!(GSV_CAPACITY, 4);
        assert_eq!(TXT_CAPACITY, 61);
        assert_eq!(GSV_MAX_SATELLITES, 36);
    }

    #[test]
    fn part_counts() {
        assert_eq!(part_count(0, 4), 1);
        assert_eq!(part_count(4, 4), 1);
        assert_eq!(part_count(5, 4), 2);
        assert_eq!(part_count(12, 4), 3);
    }

    #[test]
    fn split_positions_are_consistent() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        let parts: Vec<_> = split(&items, 3, 9).unwrap().collect();
        assert_eq!(parts.len(), 3);
        for (index, (position, _)) in parts.iter().enumerate() {
            assert_eq!(position.total, 3);
            assert_eq!(usize::from(position.number), index + 1);
        }
        let joined: Vec<i32> = parts.iter().flat_map(|(_, chunk)| chunk.iter().copied()).collect();
        assert_eq!(joined, items);
    }

    #[test]
    fn empty_payload_is_one_part() {
        let parts: Vec<Gsv> = Gsv::sequence(&[]).unwrap().collect();
        assert_eq!(parts.len(), 1);
        assert_eq!((parts[0].total, parts[0].number), (1, 1));
        assert_eq!(parts[0].in_view, Some(Dec(0)));
        assert!(parts[0].satellites.is_empty());
    }

    #[test]
    fn too_many_parts_are_rejected() {
        assert!(Gsv::sequence(&satellites(36)).is_ok());
        assert!(matches!(
            Gsv::sequence(&satellites(37)),
            Err(EncodeError::InvalidParameter(_))
        ));
        assert!(matches!(split(&[1], 0, 9), Err(EncodeError::InvalidParameter(_))));
    }

    #[test]
    fn text_split_keeps_escapes_whole() {
        let mut text = String::new();
        text.push_str(&"A".repeat(60));
        text.push('*');
        text.push_str("BC");

        let parts: Vec<_> = split_text(&text, TXT_CAPACITY, TXT_MAX_PARTS).unwrap().collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].1.len(), 60);
        assert_eq!(parts[1].1, "*BC");
        assert_eq!(parts[1].0, SequencePosition { total: 2, number: 2 });
    }

    #[test]
    fn text_sequences() {
        let text = "X".repeat(130);
        let parts: Vec<Txt> = Txt::sequence(7, &text).unwrap().collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|txt| txt.identifier == Dec(7) && txt.total == Dec(3)));
        assert_eq!(parts[2].text.len(), 8);

        assert!(Txt::sequence(100, "A").is_err());
        assert!(Txt::sequence(1, "é").is_err());
        assert!(Txt::sequence(1, &"X".repeat(TXT_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn joining_reconstructs_satellites() {
        let all = satellites(10);
        let mut joiner = SequenceJoiner::<Gsv>::new();
        let mut joined = None;

        for part in Gsv::sequence(&all).unwrap() {
            match joiner.push(&part).unwrap() {
                JoinStatus::Complete(satellites) => joined = Some(satellites),
                JoinStatus::Incomplete { .. } => assert!(!joiner.is_idle()),
            }
        }

        assert_eq!(joined.unwrap().as_slice(), all.as_slice());
        assert!(joiner.is_idle());
    }

    #[test]
    fn gaps_and_changed_totals_reset_the_joiner() {
        let parts: Vec<Gsv> = Gsv::sequence(&satellites(12)).unwrap().collect();
        let mut joiner = SequenceJoiner::<Gsv>::new();

        joiner.push(&parts[0]).unwrap();
        assert_eq!(
            joiner.push(&parts[2]),
            Err(SequenceError::OutOfOrder { expected: 2, found: 3 })
        );
        assert!(joiner.is_idle());

        assert_eq!(
            joiner.push(&parts[1]),
            Err(SequenceError::OutOfOrder { expected: 1, found: 2 })
        );

        joiner.push(&parts[0]).unwrap();
        let mut changed = parts[1].clone();
        changed.total = 4;
        assert_eq!(
            joiner.push(&changed),
            Err(SequenceError::TotalChanged { expected: 3, found: 4 })
        );

        let mut bogus = parts[0].clone();
        bogus.number = 0;
        assert_eq!(
            joiner.push(&bogus),
            Err(SequenceError::InvalidPosition { total: 3, number: 0 })
        );
    }

    #[test]
    fn first_part_restarts() {
        let parts: Vec<Gsv> = Gsv::sequence(&satellites(8)).unwrap().collect();
        let mut joiner = SequenceJoiner::<Gsv>::new();

        joiner.push(&parts[0]).unwrap();
        joiner.push(&parts[0]).unwrap();
        let status = joiner.push(&parts[1]).unwrap();
        assert!(matches!(status, JoinStatus::Complete(satellites) if satellites.len() == 8));
    }

    #[test]
    fn joining_text_and_almanacs() {
        let text = "LONG MESSAGE ".repeat(8);
        let mut joiner = SequenceJoiner::<Txt>::new();
        let mut last = None;
        for part in Txt::sequence(1, &text).unwrap() {
            last = Some(joiner.push(&part).unwrap());
        }
        let expected = heapless::String::try_from(text.as_str()).unwrap();
        assert_eq!(last, Some(JoinStatus::Complete(expected)));

        let almanacs: Vec<GlonassAlmanac> = (1..=3)
            .map(|slot| GlonassAlmanac {
                slot: Dec(slot),
                ..Default::default()
            })
            .collect();
        let mut joiner = SequenceJoiner::<Mla>::new();
        let mut last = None;
        for part in Mla::sequence(&almanacs).unwrap() {
            last = Some(joiner.push(&part).unwrap());
        }
        assert!(matches!(
            last,
            Some(JoinStatus::Complete(joined)) if joined.as_slice() == almanacs.as_slice()
        ));

        let too_many = vec![GpsAlmanac::default(); 33];
        assert!(Alm::sequence(&too_many).is_err());
    }
}
