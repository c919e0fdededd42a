use std::fmt::Display;

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{
    Attribute, Error, Expr, Ident, Lit, Result, Token, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Paren,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetaAttributeType {
    Unit,
}

impl MetaAttributeType {
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "unit" => Some(Self::Unit),
            _ => None,
        }
    }
}

impl Display for MetaAttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Unit => "unit",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug)]
pub struct MetaAttribute {
    pub r#type: MetaAttributeType,
    arg: TokenStream,
    span: Span,
}

impl MetaAttribute {
    pub fn arg(&self) -> &TokenStream {
        &self.arg
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl Parse for MetaAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        let r#type = MetaAttributeType::from_ident(&ident)
            .ok_or_else(|| Error::new(ident.span(), "iec61162-derive: Unknown field attribute"))?;

        // read ('X') or = 'X'
        let arg = parse_argument::<Expr>(input)?;

        Ok(MetaAttribute {
            r#type,
            arg,
            span: ident.span(),
        })
    }
}

#[derive(Debug)]
pub struct List<T: Parse>(pub Vec<T>);

impl<T: Parse> Parse for List<T> {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(List(
            Punctuated::<T, Token![,]>::parse_terminated(input)?
                .into_iter()
                .collect(),
        ))
    }
}

fn parse_argument<P>(input: ParseStream) -> Result<TokenStream>
where
    P: Parse + ToTokens,
{
    if input.peek(Token![=]) {
        let _: Token![=] = input.parse()?;
        let value = Lit::parse(input)?;

        match value {
            Lit::Str(string) => {
                let parsed: P = string.parse()?;
                Ok(quote! { #parsed })
            }
            lit => Ok(quote! { #lit }),
        }
    } else if input.peek(Paren) {
        let content;
        parenthesized!(content in input);
        let parsed: P = content.parse()?;
        Ok(quote! { #parsed })
    } else {
        Err(Error::new(
            input.span(),
            "iec61162-derive: Expected '= <value>' or '(<value>)' for field attribute",
        ))
    }
}

fn field_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    Ok(attrs
        .iter()
        .filter(|attr| attr.path().is_ident("field"))
        .map(|attr| attr.parse_args::<List<MetaAttribute>>())
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flat_map(|list| list.0.into_iter())
        .collect())
}

pub fn reject_top_level_attributes(attrs: &[Attribute]) -> Result<()> {
    match field_attributes(attrs)?.first() {
        Some(meta_attr) => Err(Error::new(
            meta_attr.span(),
            format!(
                "iec61162-derive: Attribute `{}` is not allowed at the top level",
                meta_attr.r#type
            ),
        )),
        None => Ok(()),
    }
}

pub fn parse_field_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let mut attributes_set = std::collections::HashSet::new();

    field_attributes(attrs)?
        .into_iter()
        .map(|meta_attr| {
            if !attributes_set.insert(meta_attr.r#type.to_string()) {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "iec61162-derive: Duplicate field attribute `{}`",
                        meta_attr.r#type
                    ),
                ));
            }

            Ok(meta_attr)
        })
        .collect()
}
