use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{
    Error, Fields, GenericArgument, Index, PathArguments, Result, Type, TypePath, spanned::Spanned,
};

use crate::{
    meta::{self, MetaAttributeType},
    parser::Parser,
};

#[derive(Clone)]
pub struct FieldParser {
    pub variable_name: String,
    /// `name` or tuple index, as used after `self.`
    pub member: TokenStream,
    pub parser: Parser,
    /// Set for `Option` fields, which take a bit in the validity mask.
    pub optional: bool,
}

#[derive(Clone)]
pub struct StructParser {
    pub empty: bool,
    pub unnamed: bool,
    pub parsers: Vec<FieldParser>,
}

impl StructParser {
    pub fn from_fields(fields: &Fields) -> Result<Self> {
        let (empty, unnamed) = match fields {
            Fields::Named(_) => (false, false),
            Fields::Unnamed(_) => (false, true),
            Fields::Unit => (true, false),
        };

        let mut parsers = vec![];
        for (index, field) in fields.iter().enumerate() {
            let (variable_name, member) = match &field.ident {
                Some(ident) => (ident.to_string(), quote! { #ident }),
                None => {
                    let index = Index::from(index);
                    (format!("_nmea_unnamed_{}", index.index), quote! { #index })
                }
            };
            let attributes = meta::parse_field_level_attributes(&field.attrs)?;

            let mut parser = Parser::Type {
                ty: Box::new(field.ty.clone()),
            };
            for attribute in &attributes {
                match attribute.r#type {
                    MetaAttributeType::Unit => {
                        let inner = Self::get_innermost_type(&field.ty, "Option", "unit")?;
                        parser = Parser::Unit {
                            inner: Box::new(inner),
                            unit: attribute.arg().clone(),
                        };
                    }
                }
            }

            parsers.push(FieldParser {
                variable_name,
                member,
                parser,
                optional: Self::is_option(&field.ty),
            });
        }

        Ok(Self {
            empty,
            unnamed,
            parsers,
        })
    }

    fn is_option(ty: &Type) -> bool {
        matches!(
            ty,
            Type::Path(TypePath { path, .. })
                if path.segments.last().is_some_and(|segment| segment.ident == "Option")
        )
    }

    fn get_innermost_type(ty: &Type, expected: &str, attr: &str) -> Result<Type> {
        if let Type::Path(TypePath { path, .. }) = ty
            && let Some(segment) = path.segments.last()
            && segment.ident == expected
            && let PathArguments::AngleBracketed(ref args) = segment.arguments
            && let Some(GenericArgument::Type(inner)) = args.args.first()
        {
            return Ok(inner.clone());
        }

        Err(Error::new(
            ty.span(),
            format!(
                "iec61162-derive: Unexpected type `{}` for attribute `{attr}`. Expected `{expected}`.",
                ty.to_token_stream()
            ),
        ))
    }
}
