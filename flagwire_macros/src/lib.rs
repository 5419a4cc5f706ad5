// Procedural macro backing flagwire's name-list serialization.
//
// The expansion runs as a small pipeline over the attached declaration:
// - `parse`: host boundary, token streams in, declaration tree out
// - `analyze`: shape validation and flag constant extraction
// - `lower`: the ordered name table and the aggregate marker
// - `codegen`: the serde impls emitted alongside the original item

use proc_macro::TokenStream;
use proc_macro_error2::proc_macro_error;
use quote::ToTokens;

mod analyze;
mod codegen;
mod diagnostics;
mod lower;
mod parse;

/// Attribute macro generating serde `Serialize`/`Deserialize` impls for a
/// bit-flag-set type, encoding values as ordered sequences of flag names.
///
/// Attach it to the inherent `impl` block that declares the flag constants.
/// A constant counts as a flag when its type annotation names the enclosing
/// type, or its initializer is a constructor call of the enclosing type.
/// A constant named `all` (any ASCII case) is treated as the aggregate of
/// every flag: a value equal to it serializes as that single name.
///
/// # Example
///
/// ```ignore
/// flagwire::flag_set! {
///     pub struct Permissions(u8);
/// }
///
/// #[flag_names]
/// impl Permissions {
///     pub const READ: Permissions = Permissions(1 << 0);
///     pub const WRITE: Permissions = Permissions(1 << 1);
///     pub const ALL: Permissions = Permissions(0b11);
/// }
/// ```
///
/// `Permissions::READ | Permissions::WRITE` then serializes as `["ALL"]`,
/// and `["READ"]` deserializes back to `Permissions::READ`.
#[proc_macro_attribute]
#[proc_macro_error]
pub fn flag_names(attr: TokenStream, item: TokenStream) -> TokenStream {
    let ast = parse::parse(attr.into(), item.into());
    // Re-emit the declaration untouched if validation aborts the expansion.
    proc_macro_error2::set_dummy(ast.item.to_token_stream());
    let model = match analyze::analyze(ast) {
        Ok(model) => model,
        Err(diagnostic) => diagnostic.abort(),
    };
    let ir = lower::lower(model);
    codegen::codegen(ir).into()
}
