use proc_macro2::TokenStream;
use proc_macro_error2::{abort, ResultExt};
use syn::parse2;

/// Host-boundary view of one invocation: the declaration tree the attribute
/// is attached to.
pub struct Ast {
    pub item: syn::Item,
}

/// Parse the raw token streams handed over by the compiler.
///
/// Malformed input here is a protocol violation (stray attribute arguments,
/// tokens that do not form an item) and is reported straight away; shape
/// validation proper happens in `analyze`.
pub fn parse(attr: TokenStream, item: TokenStream) -> Ast {
    if !attr.is_empty() {
        abort!(attr, "#[flag_names] takes no arguments");
    }

    let item: syn::Item =
        parse2(item).expect_or_abort("#[flag_names] must be attached to an item");

    Ast { item }
}
