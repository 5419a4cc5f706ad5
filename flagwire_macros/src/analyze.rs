//! Shape validation and flag constant extraction.

use syn::spanned::Spanned;
use syn::{Expr, Ident, ImplItem, Item, ItemImpl, Type};

use crate::diagnostics::Diagnostic;
use crate::parse::Ast;

/// Validated declaration: the original impl block, its self-type ident, and
/// the recognized flag constants in declaration order.
#[derive(Debug)]
pub struct Model {
    pub item: ItemImpl,
    pub ty_ident: Ident,
    pub flags: Vec<Ident>,
}

pub fn analyze(ast: Ast) -> Result<Model, Diagnostic> {
    let (item, ty_ident) = validate(ast.item)?;
    let flags = extract_flags(&item, &ty_ident);
    Ok(Model {
        item,
        ty_ident,
        flags,
    })
}

/// Shape check: synthesis only understands an inherent, non-generic `impl`
/// block of a plain named type. Anything else gets the one documented
/// diagnostic and no generated code.
fn validate(item: Item) -> Result<(ItemImpl, Ident), Diagnostic> {
    let span = item.span();
    let Item::Impl(imp) = item else {
        return Err(Diagnostic::bad_target(span));
    };

    if imp.trait_.is_some()
        || !imp.generics.params.is_empty()
        || imp.generics.where_clause.is_some()
    {
        return Err(Diagnostic::bad_target(imp.span()));
    }

    match bare_ident(&imp.self_ty) {
        Some(ident) => Ok((imp, ident)),
        None => Err(Diagnostic::bad_target(imp.self_ty.span())),
    }
}

/// Member scan: associated consts whose declared type, or whose initializer's
/// constructed type, names the enclosing type. Source order is preserved.
fn extract_flags(item: &ItemImpl, ty_ident: &Ident) -> Vec<Ident> {
    item.items
        .iter()
        .filter_map(|member| match member {
            ImplItem::Const(konst) => Some(konst),
            _ => None,
        })
        .filter(|konst| {
            annotation_matches(&konst.ty, ty_ident) || constructor_matches(&konst.expr, ty_ident)
        })
        .map(|konst| konst.ident.clone())
        .collect()
}

fn bare_ident(ty: &Type) -> Option<Ident> {
    match ty {
        Type::Path(path) if path.qself.is_none() => path.path.get_ident().cloned(),
        _ => None,
    }
}

/// Test (a): `const READ: Permissions = ...`. The match is textual; a `Self`
/// annotation does not count.
fn annotation_matches(ty: &Type, ty_ident: &Ident) -> bool {
    match ty {
        Type::Path(path) => path.qself.is_none() && path.path.is_ident(ty_ident),
        _ => false,
    }
}

/// Test (b): `... = Permissions(bits)`, a call whose callee is the bare type
/// name. Associated-path calls (`Permissions::from_bits(..)`), method-call
/// unions, and bit-or expressions stay unrecognized.
fn constructor_matches(expr: &Expr, ty_ident: &Ident) -> bool {
    let Expr::Call(call) = expr else {
        return false;
    };
    match call.func.as_ref() {
        Expr::Path(path) => path.qself.is_none() && path.path.is_ident(ty_ident),
        _ => false,
    }
}
