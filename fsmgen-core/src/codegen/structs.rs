use proc_macro2::TokenStream;
use quote::quote;

use crate::ir::RenderIr;

pub fn render_state_struct(ir: &RenderIr) -> TokenStream {
    let type_ident = &ir.type_ident;

    quote! {
        /// A state of the machine, identified by its diagram label.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct #type_ident(pub &'static str);
    }
}

pub fn render_transition_struct(ir: &RenderIr) -> TokenStream {
    let type_ident = &ir.type_ident;
    let transition_ident = &ir.transition_ident;

    quote! {
        #[allow(dead_code)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        struct #transition_ident {
            name: &'static str,
            src: &'static [#type_ident],
            dst: #type_ident,
        }
    }
}
