//! Attribute parsing for the diagram macro.

use darling::FromMeta;
use darling::ast::NestedMeta;
use fsmgen_core::DocType;
use proc_macro2::TokenStream;
use syn::LitStr;

/// Arguments for the `#[fsm_diagram]` attribute.
#[derive(Debug, Default, FromMeta)]
pub struct DiagramArgs {
    /// Diagram notation (default: "mermaid").
    #[darling(default)]
    pub doc_type: Option<LitStr>,

    /// Emit the event enum and runtime dispatch.
    #[darling(default)]
    pub gen_dynamic: bool,
}

impl DiagramArgs {
    pub fn parse(args: TokenStream) -> darling::Result<Self> {
        if args.is_empty() {
            return Ok(Self::default());
        }
        let items = NestedMeta::parse_meta_list(args)?;
        Self::from_list(&items)
    }

    pub fn doc_type(&self) -> syn::Result<DocType> {
        match &self.doc_type {
            Some(lit) => lit
                .value()
                .parse::<DocType>()
                .map_err(|e| syn::Error::new(lit.span(), e)),
            None => Ok(DocType::default()),
        }
    }
}
