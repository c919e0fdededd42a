//! # A Rust procedural macro for IEC 61162-1 field layouts
//!
//! `iec61162-derive` derives the field codecs of a record from its declaration.
//! Each field is read and written with its own type's codec, in declaration order,
//! with `,` between fields.
//!
//! It is meant to work alongside [`iec61162`], which provides the field types and
//! the framing around them.
//!
//! [`iec61162`]: https://crates.io/crates/iec61162

use generate::generate_fields_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod config;
mod generate;
mod meta;
mod parser;

#[doc = include_str!("../README.md")]
#[proc_macro_derive(Fields, attributes(field))]
pub fn derive_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_fields_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
