use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, Lifetime};

/// Names shared by every generated impl.
#[derive(Clone)]
pub struct Config {
    pub input_name: Ident,
    pub writer_name: Ident,
    pub error_type: Ident,
    pub lifetime: Lifetime,
    pub separator: TokenStream,
}

impl Config {
    pub fn new() -> Self {
        Self {
            input_name: Ident::new("nmea_input", Span::call_site()),
            writer_name: Ident::new("nmea_writer", Span::call_site()),
            error_type: Ident::new("NmeaError", Span::call_site()),
            lifetime: Lifetime::new("'nmea", Span::call_site()),
            separator: quote! { nom::character::complete::char(',') },
        }
    }
}
