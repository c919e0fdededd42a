use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, GenericParam, Generics, LifetimeParam, Path, Result, TypeParam,
    WhereClause, parse_quote,
};

use crate::{config::Config, generate::structs::Struct};

mod structs;

// Usage:
// #[derive(Fields)]
// pub struct Vtg {
//     #[field(unit = 'T')]
//     pub course_true: Option<f64>,
//     pub mode: ModeIndicator,
// }

trait Generator {
    fn name(&self) -> &Path;
    fn config(&self) -> &Config;
    fn generics(&self) -> &Generics;
    fn generate_parse_body(&self) -> Result<TokenStream>;
    fn generate_parse_subfields(&self) -> TokenStream;
    fn generate_print_body(&self) -> Result<TokenStream>;
    fn generate_print_subfields(&self) -> TokenStream;
    /// Returns the mask constants and the body of `valid_fields`.
    fn generate_valid_fields(&self) -> (TokenStream, TokenStream);

    fn generate_parse_impl(&self) -> Result<TokenStream> {
        let name = self.name();
        let input = &self.config().input_name;
        let error_type = &self.config().error_type;
        let nmea_lifetime = &self.config().lifetime;
        let body = self.generate_parse_body()?;
        let subfields = self.generate_parse_subfields();
        let generics = self.generics();
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let mut impl_generics: Generics = parse_quote!(#impl_generics);

        // Push the input lifetime to the generics
        impl_generics
            .params
            .push(GenericParam::Lifetime(LifetimeParam::new(
                nmea_lifetime.clone(),
            )));

        // Push the inner error type to the generics
        impl_generics
            .params
            .push(GenericParam::Type(TypeParam::from(error_type.clone())));

        // If there is no where clause, create a new one
        let mut impl_where: WhereClause = if where_clause.is_some() {
            parse_quote!(#where_clause)
        } else {
            parse_quote!(where)
        };

        // Make sure generic parameters implement FieldParse
        for param in generics.type_params() {
            let param = &param.ident;
            impl_where.predicates.push(
                parse_quote!(#param: iec61162::FieldParse<&#nmea_lifetime str, #error_type>),
            );
        }

        impl_where
            .predicates
            .push(parse_quote!(#error_type: nom::error::ParseError<&#nmea_lifetime str>));

        Ok(quote! {
            impl #impl_generics iec61162::FieldParse<&#nmea_lifetime str, #error_type> for #name #ty_generics #impl_where {
                const SUBFIELDS: usize = #subfields;

                fn parse(#input: &#nmea_lifetime str) -> iec61162::IResult<&#nmea_lifetime str, Self, #error_type> {
                    #body
                }
            }
        })
    }

    fn generate_print_impl(&self) -> Result<TokenStream> {
        let name = self.name();
        let writer = &self.config().writer_name;
        let body = self.generate_print_body()?;
        let subfields = self.generate_print_subfields();
        let generics = self.generics();
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let mut impl_where: WhereClause = if where_clause.is_some() {
            parse_quote!(#where_clause)
        } else {
            parse_quote!(where)
        };

        // Make sure generic parameters implement FieldPrint
        for param in generics.type_params() {
            let param = &param.ident;
            impl_where
                .predicates
                .push(parse_quote!(#param: iec61162::FieldPrint));
        }

        Ok(quote! {
            impl #impl_generics iec61162::FieldPrint for #name #ty_generics #impl_where {
                const SUBFIELDS: usize = #subfields;

                fn print(&self, #writer: &mut iec61162::FieldWriter<'_>) -> Result<(), iec61162::EncodeError> {
                    #body
                }
            }
        })
    }

    fn generate_valid_fields_impl(&self) -> TokenStream {
        let name = self.name();
        let (consts, body) = self.generate_valid_fields();
        let (impl_generics, ty_generics, where_clause) = self.generics().split_for_impl();

        quote! {
            impl #impl_generics #name #ty_generics #where_clause {
                #consts
            }

            impl #impl_generics iec61162::ValidFields for #name #ty_generics #where_clause {
                fn valid_fields(&self) -> u32 {
                    #body
                }
            }
        }
    }

    fn generate_impl(&self) -> Result<TokenStream> {
        let parse_impl = self.generate_parse_impl()?;
        let print_impl = self.generate_print_impl()?;
        let valid_fields_impl = self.generate_valid_fields_impl();

        Ok(quote! {
            #parse_impl
            #print_impl
            #valid_fields_impl
        })
    }
}

pub fn generate_fields_impl(input: &DeriveInput) -> Result<TokenStream> {
    let generator: Box<dyn Generator> = match &input.data {
        Data::Struct(datastruct) => {
            let name = &input.ident;
            let attributes = &input.attrs;
            let generics = &input.generics;

            Box::new(Struct::from_datastruct(
                name, datastruct, attributes, generics,
            )?)
        }
        Data::Enum(_) => {
            return Err(Error::new(
                input.ident.span(),
                "iec61162-derive: Enums not supported; use a closed code table instead",
            ));
        }
        Data::Union(_) => {
            return Err(Error::new(
                input.ident.span(),
                "iec61162-derive: Unions not supported",
            ));
        }
    };

    generator.generate_impl()
}
