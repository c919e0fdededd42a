/// Declares a closed enumeration backed by fixed wire codes.
///
/// The generated type gets a static table in ordinal order, checked lookups by
/// code and by ordinal, `Display`, and field codecs that read and write the code.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $code:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[cfg_attr(feature = "serde", serde(rename = $code))]
                $variant,
            )*
        }

        impl $name {
            /// Every value in ordinal order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Number of values in the table.
            pub const COUNT: usize = Self::ALL.len();

            /// Returns the wire code.
            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)*
                }
            }

            /// Looks a value up by its wire code.
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Looks a value up by ordinal. Out-of-range ordinals yield `None`.
            pub fn from_ordinal(ordinal: usize) -> Option<Self> {
                Self::ALL.get(ordinal).copied()
            }

            pub const fn ordinal(self) -> usize {
                self as usize
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.code())
            }
        }

        impl<'a, E> $crate::FieldParse<&'a str, E> for $name
        where
            E: nom::error::ParseError<&'a str>,
        {
            fn parse(i: &'a str) -> $crate::IResult<&'a str, Self, E> {
                let (rest, token) = $crate::codec::field_token(i)?;
                match Self::from_code(token) {
                    Some(value) => Ok((rest, value)),
                    None => Err(nom::Err::Error($crate::Error::InvalidField(i))),
                }
            }
        }

        impl $crate::FieldPrint for $name {
            fn print(&self, w: &mut $crate::FieldWriter<'_>) -> Result<(), $crate::EncodeError> {
                w.push_str(self.code())
            }
        }
    };
}
