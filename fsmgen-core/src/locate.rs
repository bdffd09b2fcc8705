//! Finding the annotated declaration in Rust source.

use syn::{Attribute, Expr, ExprLit, Item, Lit, Meta};

use crate::error::ParseError;

/// The declaration holding the diagram, as found in the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declaration {
    /// `::`-joined path of the inline modules around the declaration.
    /// Empty when the declaration sits at file level.
    pub namespace: String,
    /// Doc comment lines, in source order.
    pub doc_lines: Vec<String>,
}

/// Parses `source` and returns the first type-like item named `type_name`.
///
/// A missing declaration is not an error: the returned doc set is empty and
/// the resulting machine has no states.
pub fn locate(source: &str, type_name: &str) -> Result<Declaration, ParseError> {
    let file = syn::parse_file(source)?;

    let mut path = Vec::new();
    match find_in(&file.items, type_name, &mut path) {
        Some(doc_lines) => {
            tracing::debug!(
                type_name,
                namespace = %path.join("::"),
                lines = doc_lines.len(),
                "found annotated declaration"
            );
            Ok(Declaration {
                namespace: path.join("::"),
                doc_lines,
            })
        }
        None => {
            tracing::warn!(type_name, "declaration not found, generating an empty machine");
            Ok(Declaration::default())
        }
    }
}

fn find_in(items: &[Item], type_name: &str, path: &mut Vec<String>) -> Option<Vec<String>> {
    for item in items {
        let (ident, attrs) = match item {
            Item::Struct(item) => (&item.ident, &item.attrs),
            Item::Enum(item) => (&item.ident, &item.attrs),
            Item::Union(item) => (&item.ident, &item.attrs),
            Item::Type(item) => (&item.ident, &item.attrs),
            Item::Mod(module) => {
                let Some((_, content)) = &module.content else {
                    continue;
                };
                path.push(module.ident.to_string());
                if let Some(found) = find_in(content, type_name, path) {
                    return Some(found);
                }
                path.pop();
                continue;
            }
            _ => continue,
        };

        if ident == type_name {
            return Some(doc_lines(attrs));
        }
    }

    None
}

/// Collects the text of every `#[doc = "..."]` attribute, one entry per line.
pub fn doc_lines(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(text),
                    ..
                }) => Some(text.value()),
                _ => None,
            },
            _ => None,
        })
        .flat_map(|text| text.lines().map(str::to_string).collect::<Vec<_>>())
        .collect()
}
