use crate::{
    Fields,
    codec::{Dec, Text},
};

/// TXT - Text transmission
///
/// ```text
///         1  2  3  4
///         |  |  |  |
///  $--TXT,xx,xx,xx,c--c*hh<CR><LF>
/// ```
///
/// Reserved characters in the text travel as `^HH` escapes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Fields)]
pub struct Txt {
    /// Total number of sentences in the sequence, 01 to 99
    pub total: Dec<2>,
    /// Number of this sentence
    pub number: Dec<2>,
    /// Text identifier, to tell concurrent messages apart
    pub identifier: Dec<2>,
    pub text: Text,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldParse, IResult, print::print_to_string};

    #[test]
    fn unescapes_text() {
        let result: IResult<_, _> = Txt::parse("01,01,02,ANTENNA OPEN^2A^5E*");
        let (rest, txt) = result.unwrap();
        assert_eq!(rest, "*");
        assert_eq!(txt.identifier, Dec(2));
        assert_eq!(txt.text.as_str(), "ANTENNA OPEN*^");
        assert_eq!(
            print_to_string(&txt, 3).unwrap().as_str(),
            "01,01,02,ANTENNA OPEN^2A^5E"
        );
    }

    #[test]
    fn raw_reserved_character_is_invalid() {
        let result: IResult<_, Txt> = Txt::parse("01,01,02,50~60*");
        assert!(result.is_err());
    }
}
