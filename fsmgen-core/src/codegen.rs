//! Code generation for the state machine implementation.

mod enums;
mod impls;
mod structs;

use proc_macro2::TokenStream;
use quote::quote;

use crate::error::GenerateError;
use crate::ir::RenderIr;
use crate::model::Model;

/// Renders the model into Rust items.
pub fn render_tokens(model: &Model) -> Result<TokenStream, GenerateError> {
    let ir = RenderIr::try_from(model)?;
    Ok(generate(&ir))
}

/// Renders the model into a formatted Rust source file.
pub fn render(model: &Model) -> Result<String, GenerateError> {
    let tokens = render_tokens(model)?;
    let file: syn::File = syn::parse2(tokens).map_err(GenerateError::Format)?;

    let origin = if model.namespace.is_empty() {
        model.type_name.clone()
    } else {
        format!("{}::{}", model.namespace, model.type_name)
    };

    Ok(format!(
        "// Code generated by fsmgen from `{origin}`. DO NOT EDIT.\n\n{}",
        prettyplease::unparse(&file)
    ))
}

fn generate(ir: &RenderIr) -> TokenStream {
    let state_struct = if ir.gen_type {
        structs::render_state_struct(ir)
    } else {
        quote! {}
    };
    let transition_struct = structs::render_transition_struct(ir);
    let error_enum = enums::render_error_enum(ir);
    let state_consts = impls::render_state_consts(ir);
    let transitions = impls::render_transitions(ir);
    let lookups = impls::render_lookups(ir);
    let std_impls = if ir.gen_type {
        impls::render_std_impls(ir)
    } else {
        quote! {}
    };
    let dynamic = if ir.gen_dynamic {
        let event_enum = enums::render_event_enum(ir);
        let dispatch = impls::render_dispatch(ir);
        quote! {
            #event_enum
            #dispatch
        }
    } else {
        quote! {}
    };

    quote! {
        #state_struct
        #transition_struct
        #error_enum
        #state_consts
        #transitions
        #lookups
        #std_impls
        #dynamic
    }
}
