//! Attribute macro generating state machines from diagrams in doc comments.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Error, Fields, ItemStruct, parse_macro_input};

use fsmgen_core::{InjectedFlags, ModelBuilder};

mod attrs;

/// Generates guarded transitions from the Mermaid diagram in the struct's doc
/// comment.
///
/// The struct must be a `&'static str` newtype deriving `Debug`, `Clone`,
/// `Copy`, `PartialEq` and `Eq`:
///
/// ```rust,ignore
/// /// still --> moving: Move
/// /// moving --> still: Stop
/// #[fsm_diagram]
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// pub struct State(pub &'static str);
/// ```
#[proc_macro_attribute]
pub fn fsm_diagram(args: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as ItemStruct);

    let args = match attrs::DiagramArgs::parse(args.into()) {
        Ok(args) => args,
        Err(e) => return e.write_errors().into(),
    };

    match expand(&args, &item) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(args: &attrs::DiagramArgs, item: &ItemStruct) -> syn::Result<proc_macro2::TokenStream> {
    let Fields::Unnamed(fields) = &item.fields else {
        return Err(Error::new_spanned(
            &item.ident,
            "expected a tuple struct wrapping `&'static str`",
        ));
    };
    if fields.unnamed.len() != 1 {
        return Err(Error::new_spanned(fields, "expected exactly one field"));
    }

    let parser = args.doc_type()?.line_parser();
    let lines = fsmgen_core::doc_lines(&item.attrs);

    let edges = fsmgen_core::extract_edges(&lines, parser.as_ref())
        .map_err(|e| Error::new_spanned(&item.ident, e))?;
    let model = ModelBuilder::new("", item.ident.to_string())
        .build(edges)
        .map_err(|e| Error::new_spanned(&item.ident, e))?
        .inject(InjectedFlags {
            module: None,
            gen_type: false,
            gen_dynamic: args.gen_dynamic,
        });
    let generated =
        fsmgen_core::render_tokens(&model).map_err(|e| Error::new_spanned(&item.ident, e))?;

    Ok(quote! {
        #item
        #generated
    })
}
