//! Final phase – emit the name table and the serde impls.

use itertools::Itertools;
use proc_macro2::TokenStream;
use quote::quote;

use crate::lower::Ir;

pub fn codegen(ir: Ir) -> TokenStream {
    let item = &ir.item;
    let table = table_tokens(&ir);
    let deserialize = deserialize_tokens(&ir);
    let serialize = serialize_tokens(&ir);

    // The original declaration is re-emitted verbatim; the generated block is
    // purely additive.
    quote! {
        #item

        #table

        #deserialize

        #serialize
    }
}

/// The ordered name table, one row per recognized constant.
fn table_tokens(ir: &Ir) -> TokenStream {
    let ty = &ir.ty_ident;
    let names = ir.entries.iter().map(|entry| &entry.name);
    let idents = ir.entries.iter().map(|entry| &entry.ident);

    quote! {
        impl #ty {
            #[doc(hidden)]
            const FLAG_NAMES: &'static [(&'static str, #ty)] = &[
                #( (#names, #ty::#idents) ),*
            ];
        }
    }
}

/// The decode routine: read names until the sequence ends, union each known
/// flag into the accumulator, fail fast on the first unknown name.
fn deserialize_tokens(ir: &Ir) -> TokenStream {
    let ty = &ir.ty_ident;
    let expecting = format!("a sequence of `{}` flag names", ty);
    let expected = if ir.entries.is_empty() {
        format!("no flag names (`{}` declares none)", ty)
    } else {
        format!(
            "one of {}",
            ir.entries
                .iter()
                .map(|entry| format!("`{}`", entry.name))
                .join(", ")
        )
    };

    quote! {
        impl<'de> ::flagwire::serde::Deserialize<'de> for #ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::flagwire::serde::Deserializer<'de>,
            {
                struct NameSeqVisitor;

                impl<'de> ::flagwire::serde::de::Visitor<'de> for NameSeqVisitor {
                    type Value = #ty;

                    fn expecting(&self, formatter: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                        formatter.write_str(#expecting)
                    }

                    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                    where
                        A: ::flagwire::serde::de::SeqAccess<'de>,
                    {
                        let mut value = <#ty as ::flagwire::FlagSet>::empty();
                        let mut element = 0usize;
                        while let Some(name) = seq.next_element::<String>()? {
                            match #ty::FLAG_NAMES.iter().find(|(known, _)| *known == name) {
                                Some((_, flag)) => value = ::flagwire::FlagSet::union(value, *flag),
                                None => {
                                    let expected = format!("{} at sequence element {}", #expected, element);
                                    return Err(<A::Error as ::flagwire::serde::de::Error>::invalid_value(
                                        ::flagwire::serde::de::Unexpected::Str(&name),
                                        &expected.as_str(),
                                    ));
                                }
                            }
                            element += 1;
                        }
                        Ok(value)
                    }
                }

                deserializer.deserialize_seq(NameSeqVisitor)
            }
        }
    }
}

/// The encode routine. The body shape is picked here, at synthesis time: with
/// an aggregate constant declared, a value equal to it serializes as that
/// single name and the aggregate row is skipped otherwise; without one, the
/// table is walked as-is. Either way the output follows table order, not bit
/// order.
fn serialize_tokens(ir: &Ir) -> TokenStream {
    let ty = &ir.ty_ident;

    let collect_names = match &ir.aggregate {
        Some(aggregate) => {
            let name = &aggregate.name;
            let ident = &aggregate.ident;
            quote! {
                let names: Vec<&'static str> = if *self == #ty::#ident {
                    vec![#name]
                } else {
                    #ty::FLAG_NAMES
                        .iter()
                        .filter(|(known, flag)| {
                            *known != #name && ::flagwire::FlagSet::contains(*self, *flag)
                        })
                        .map(|(known, _)| *known)
                        .collect()
                };
            }
        }
        None => quote! {
            let names: Vec<&'static str> = #ty::FLAG_NAMES
                .iter()
                .filter(|(_, flag)| ::flagwire::FlagSet::contains(*self, *flag))
                .map(|(known, _)| *known)
                .collect();
        },
    };

    quote! {
        impl ::flagwire::serde::Serialize for #ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::flagwire::serde::Serializer,
            {
                use ::flagwire::serde::ser::SerializeSeq;

                #collect_names
                let mut seq = serializer.serialize_seq(Some(names.len()))?;
                for name in names {
                    seq.serialize_element(name)?;
                }
                seq.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;
    use crate::analyze::analyze;
    use crate::lower::lower;
    use crate::parse::Ast;

    fn expand(item: syn::Item) -> String {
        codegen(lower(analyze(Ast { item }).unwrap())).to_string()
    }

    #[test]
    fn emits_table_decode_and_encode() {
        let code = expand(parse_quote! {
            impl MyOptionSet {
                pub const OPTION_ONE: MyOptionSet = MyOptionSet(1 << 0);
                pub const OPTION_TWO: Self = MyOptionSet(1 << 1);
                pub const OPTION_THREE: MyOptionSet = MyOptionSet(1 << 2);
            }
        });

        // Original declaration survives untouched.
        assert!(code.contains("pub const OPTION_ONE : MyOptionSet = MyOptionSet (1 << 0)"));
        // Table rows in declaration order.
        assert!(code.contains(
            "(\"OPTION_ONE\" , MyOptionSet :: OPTION_ONE) , \
             (\"OPTION_TWO\" , MyOptionSet :: OPTION_TWO) , \
             (\"OPTION_THREE\" , MyOptionSet :: OPTION_THREE)"
        ));
        assert!(code.contains(":: flagwire :: serde :: Deserialize < 'de > for MyOptionSet"));
        assert!(code.contains(":: flagwire :: serde :: Serialize for MyOptionSet"));
        // No aggregate branch without an aggregate constant.
        assert!(!code.contains("if * self =="));
    }

    #[test]
    fn aggregate_mode_special_cases_the_full_value() {
        let code = expand(parse_quote! {
            impl Permissions {
                pub const READ: Permissions = Permissions(1 << 0);
                pub const WRITE: Permissions = Permissions(1 << 1);
                pub const ALL: Permissions = Permissions(0b11);
            }
        });

        assert!(code.contains("if * self == Permissions :: ALL"));
        assert!(code.contains("vec ! [\"ALL\"]"));
        // The aggregate stays in the decode table.
        assert!(code.contains("(\"ALL\" , Permissions :: ALL)"));
        // And is skipped when walking the table on the other branch.
        assert!(code.contains("* known != \"ALL\""));
    }

    #[test]
    fn empty_table_still_generates_both_routines() {
        let code = expand(parse_quote!(
            impl NoFlags {}
        ));

        assert!(code.contains("const FLAG_NAMES : & 'static [(& 'static str , NoFlags)] = & [] ;"));
        assert!(code.contains("Deserialize"));
        assert!(code.contains("Serialize"));
    }

    #[test]
    fn decode_error_names_the_known_flags() {
        let code = expand(parse_quote! {
            impl Styles {
                pub const BOLD: Styles = Styles(1);
            }
        });
        assert!(code.contains("\"one of `BOLD`\""));
        assert!(code.contains("at sequence element"));
    }
}
