//! Mapping table construction.

use syn::Ident;

use crate::analyze::Model;

/// Spelling that marks the aggregate union-of-everything constant.
const AGGREGATE_NAME: &str = "all";

/// One row of the emitted name table.
#[derive(Clone, Debug)]
pub struct FlagEntry {
    pub name: String,
    pub ident: Ident,
}

/// Everything codegen needs: the original item, the ordered name table, and
/// the aggregate entry when one is declared.
pub struct Ir {
    pub item: syn::ItemImpl,
    pub ty_ident: Ident,
    pub entries: Vec<FlagEntry>,
    pub aggregate: Option<FlagEntry>,
}

/// Name-based heuristic for the aggregate constant, kept behind a single
/// predicate so an explicit marker could replace it. Case-insensitive so the
/// conventional `ALL` spelling is detected alongside `all`.
fn is_aggregate_name(name: &str) -> bool {
    name.eq_ignore_ascii_case(AGGREGATE_NAME)
}

pub fn lower(model: Model) -> Ir {
    let entries: Vec<FlagEntry> = model
        .flags
        .into_iter()
        .map(|ident| FlagEntry {
            name: ident.to_string(),
            ident,
        })
        .collect();

    let aggregate = entries
        .iter()
        .find(|entry| is_aggregate_name(&entry.name))
        .cloned();

    Ir {
        item: model.item,
        ty_ident: model.ty_ident,
        entries,
        aggregate,
    }
}
