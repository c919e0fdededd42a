use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{Attribute, DataStruct, Error, Generics, Ident, Path, Result, parse_quote};

use crate::{
    config::Config,
    generate::{Generator, structs::parser::StructParser},
    meta,
};

pub mod parser;

/// Validity masks are `u32`.
const MAX_OPTIONAL_FIELDS: usize = 32;

pub struct Struct {
    pub name: Path,
    pub config: Config,
    pub generics: Generics,
    pub struct_parser: StructParser,
}

impl Struct {
    pub fn from_datastruct(
        name: &Ident,
        datastruct: &DataStruct,
        attributes: &[Attribute],
        generics: &Generics,
    ) -> Result<Self> {
        meta::reject_top_level_attributes(attributes)?;

        let struct_parser = StructParser::from_fields(&datastruct.fields)?;

        let optional = struct_parser.parsers.iter().filter(|p| p.optional).count();
        if optional > MAX_OPTIONAL_FIELDS {
            return Err(Error::new(
                name.span(),
                format!(
                    "iec61162-derive: {optional} optional fields do not fit a {MAX_OPTIONAL_FIELDS}-bit validity mask"
                ),
            ));
        }

        Ok(Self {
            name: parse_quote!(#name),
            config: Config::new(),
            generics: generics.clone(),
            struct_parser,
        })
    }
}

impl Generator for Struct {
    fn name(&self) -> &Path {
        &self.name
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn generics(&self) -> &Generics {
        &self.generics
    }

    fn generate_parse_body(&self) -> Result<TokenStream> {
        let name = &self.name;
        let input = &self.config.input_name;
        let error_type = &self.config.error_type;
        let lifetime = &self.config.lifetime;
        let separator = &self.config.separator;

        let (variable_name, parser): (Vec<_>, Vec<_>) = self
            .struct_parser
            .parsers
            .iter()
            .enumerate()
            .map(|(index, field_parser)| {
                let separator = (index > 0).then_some(separator);
                (
                    Ident::new(&field_parser.variable_name, Span::call_site()),
                    field_parser
                        .parser
                        .to_parser(error_type, lifetime, separator),
                )
            })
            .unzip();

        let struct_def = match (self.struct_parser.empty, self.struct_parser.unnamed) {
            (true, _) => quote! { #name },
            (_, true) => quote! { #name(#(#variable_name),*) },
            (_, false) => quote! { #name { #(#variable_name),* } },
        };

        Ok(quote! {
            use nom::Parser;
            #(let (#input, #variable_name) = #parser.parse(#input)?;)*
            Ok((#input, #struct_def))
        })
    }

    fn generate_parse_subfields(&self) -> TokenStream {
        let error_type = &self.config.error_type;
        let lifetime = &self.config.lifetime;
        let subfields = self
            .struct_parser
            .parsers
            .iter()
            .map(|field_parser| field_parser.parser.subfields(error_type, lifetime));

        quote! { 0 #(+ #subfields)* }
    }

    fn generate_print_body(&self) -> Result<TokenStream> {
        let writer = &self.config.writer_name;

        let printers = self
            .struct_parser
            .parsers
            .iter()
            .enumerate()
            .map(|(index, field_parser)| {
                let member = &field_parser.member;
                let print = field_parser
                    .parser
                    .to_printer(&quote! { &self.#member }, writer);
                if index > 0 {
                    quote! { #writer.separator()?; #print }
                } else {
                    print
                }
            });

        Ok(quote! {
            #(#printers)*
            Ok(())
        })
    }

    fn generate_print_subfields(&self) -> TokenStream {
        let subfields = self
            .struct_parser
            .parsers
            .iter()
            .map(|field_parser| field_parser.parser.print_subfields());

        quote! { 0 #(+ #subfields)* }
    }

    fn generate_valid_fields(&self) -> (TokenStream, TokenStream) {
        let (const_name, member): (Vec<_>, Vec<_>) = self
            .struct_parser
            .parsers
            .iter()
            .filter(|field_parser| field_parser.optional)
            .map(|field_parser| {
                let const_name = format_ident!(
                    "VALID_{}",
                    field_parser
                        .variable_name
                        .trim_start_matches('_')
                        .to_uppercase()
                );
                (const_name, &field_parser.member)
            })
            .unzip();
        let bit = (0..const_name.len() as u32).collect::<Vec<_>>();

        let consts = quote! {
            #(pub const #const_name: u32 = 1 << #bit;)*
        };
        let body = quote! {
            0u32 #(| if self.#member.is_some() { Self::#const_name } else { 0 })*
        };

        (consts, body)
    }
}
