use nom::{Parser, error::ErrorKind};

use crate::{
    EncodeError, Error, IResult,
    frame::{FrameParserBuilder, LineEndingMode, MAX_SENTENCE_LEN, checksum, encode_frame},
};

const VTG: &str = "GPVTG,0.223,T,22.203,M,1.989,N,3.683,K,S";

fn body(i: &str) -> IResult<&str, &str> {
    Ok(("", i))
}

#[test]
fn test_encode_frame() {
    let mut out = [0u8; MAX_SENTENCE_LEN];
    let n = encode_frame(VTG, &mut out).unwrap();
    assert_eq!(
        &out[..n],
        b"$GPVTG,0.223,T,22.203,M,1.989,N,3.683,K,S*04\r\n"
    );
}

#[test]
fn test_encoded_frame_parses_back() {
    let mut out = [0u8; MAX_SENTENCE_LEN];
    let n = encode_frame(VTG, &mut out).unwrap();
    let frame = core::str::from_utf8(&out[..n]).unwrap();

    let mut parser = FrameParserBuilder::new().build(body);
    let (_, content) = parser.parse(frame).unwrap();
    assert_eq!(content.strip_suffix('*'), Some(VTG));
}

#[test]
fn test_buffer_too_small_writes_nothing() {
    let mut out = [0xEEu8; 16];
    let res = encode_frame(VTG, &mut out);
    assert_eq!(
        res,
        Err(EncodeError::BufferTooSmall {
            required: VTG.len() + 6,
            capacity: 16
        })
    );
    assert!(out.iter().all(|&b| b == 0xEE));
}

#[test]
fn test_protocol_cap_wins_over_capacity() {
    let content = "GPTXT,".repeat(13);
    let mut out = [0u8; 128];
    assert_eq!(
        encode_frame(&content, &mut out),
        Err(EncodeError::SentenceExceedsMaxSize)
    );

    let mut small = [0u8; 8];
    assert_eq!(
        encode_frame(&content, &mut small),
        Err(EncodeError::SentenceExceedsMaxSize)
    );
}

#[test]
fn test_longest_frame_fits_exactly() {
    let content = "A".repeat(MAX_SENTENCE_LEN - 6);
    let mut out = [0u8; MAX_SENTENCE_LEN];
    assert_eq!(encode_frame(&content, &mut out), Ok(MAX_SENTENCE_LEN));
}

#[test]
fn test_checksum_mismatch() {
    let mut parser = FrameParserBuilder::new().build(body);
    let res = parser.parse("$GPGGA,data*6B\r\n");
    assert_eq!(
        res,
        Err(nom::Err::Error(Error::ChecksumMismatch {
            expected: 0x6A,
            found: 0x6B
        }))
    );
}

#[test]
fn test_non_ascii_is_rejected() {
    let mut parser = FrameParserBuilder::new().build(body);
    let res = parser.parse("$GPGGA,dätä*6A\r\n");
    assert_eq!(res, Err(nom::Err::Error(Error::NonAscii)));
}

#[test]
fn test_overlong_frame_is_rejected() {
    let content = "A".repeat(MAX_SENTENCE_LEN - 5);
    let frame = format!("${content}*{:02X}\r\n", checksum(content.as_str()).1);
    assert_eq!(frame.len(), MAX_SENTENCE_LEN + 1);

    let res = FrameParserBuilder::new().build(body).parse(frame.as_str());
    assert!(matches!(
        res,
        Err(nom::Err::Error(Error::ParsingError(e))) if e.code == ErrorKind::TooLarge
    ));

    let stripped = frame.trim_end();
    let res = FrameParserBuilder::new()
        .line_ending_mode(LineEndingMode::Forbidden)
        .build(body)
        .parse(stripped);
    assert!(matches!(
        res,
        Err(nom::Err::Error(Error::ParsingError(e))) if e.code == ErrorKind::TooLarge
    ));
}

#[test]
fn test_frame_at_the_cap_is_accepted() {
    let content = "A".repeat(MAX_SENTENCE_LEN - 6);
    let frame = format!("${content}*{:02X}\r\n", checksum(content.as_str()).1);
    assert_eq!(frame.len(), MAX_SENTENCE_LEN);

    let res = FrameParserBuilder::new().build(body).parse(frame.as_str());
    assert!(res.is_ok());
}
