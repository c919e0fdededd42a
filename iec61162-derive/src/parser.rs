use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, Lifetime, Type};

/// How one field is read from the input.
#[derive(Clone)]
pub enum Parser {
    /// The field type's own codec.
    Type { ty: Box<Type> },
    /// An `Option<inner>` value followed by a fixed unit letter.
    Unit { inner: Box<Type>, unit: TokenStream },
}

impl Parser {
    /// Expands to a `nom` parser expression for the field, with `separator` in front
    /// of every field but the first.
    pub fn to_parser(
        &self,
        error_type: &Ident,
        lifetime: &Lifetime,
        separator: Option<&TokenStream>,
    ) -> TokenStream {
        let parser = match self {
            Self::Type { ty } => {
                quote! { <#ty as iec61162::FieldParse<&#lifetime str, #error_type>>::parse }
            }
            Self::Unit { inner, unit } => {
                quote! { iec61162::codec::unit::parse::<#inner, #error_type>(#unit) }
            }
        };

        match separator {
            Some(separator) => quote! { nom::sequence::preceded(#separator, #parser) },
            None => parser,
        }
    }

    /// Expands to the number of subfields the field occupies.
    pub fn subfields(&self, error_type: &Ident, lifetime: &Lifetime) -> TokenStream {
        match self {
            Self::Type { ty } => {
                quote! { <#ty as iec61162::FieldParse<&#lifetime str, #error_type>>::SUBFIELDS }
            }
            Self::Unit { inner, .. } => {
                quote! { (<#inner as iec61162::FieldParse<&#lifetime str, #error_type>>::SUBFIELDS + 1) }
            }
        }
    }

    /// Expands to a statement printing `value` into `writer`.
    pub fn to_printer(&self, value: &TokenStream, writer: &Ident) -> TokenStream {
        match self {
            Self::Type { .. } => {
                quote! { iec61162::FieldPrint::print(#value, #writer)?; }
            }
            Self::Unit { unit, .. } => {
                quote! { iec61162::codec::unit::print(#value, #unit, #writer)?; }
            }
        }
    }

    /// Expands to the printed subfield count of the field.
    pub fn print_subfields(&self) -> TokenStream {
        match self {
            Self::Type { ty } => quote! { <#ty as iec61162::FieldPrint>::SUBFIELDS },
            Self::Unit { inner, .. } => {
                quote! { (<#inner as iec61162::FieldPrint>::SUBFIELDS + 1) }
            }
        }
    }
}
