use proc_macro2::TokenStream;
use quote::quote;

use crate::ir::RenderIr;

/// State constants, the membership table and one descriptor per event.
pub fn render_state_consts(ir: &RenderIr) -> TokenStream {
    let type_ident = &ir.type_ident;
    let transition_ident = &ir.transition_ident;

    let state_consts = ir.states.iter().map(|state| {
        let const_name = &state.const_name;
        let value = &state.value;
        quote! {
            pub const #const_name: #type_ident = #type_ident(#value);
        }
    });
    let all: Vec<_> = ir.states.iter().map(|s| &s.const_name).collect();

    let event_consts = ir.events.iter().map(|event| {
        let const_name = &event.const_name;
        let name = &event.name;
        let src = &event.src;
        let dst = &event.dst;
        quote! {
            const #const_name: #transition_ident = #transition_ident {
                name: #name,
                src: &[#(#type_ident::#src),*],
                dst: #type_ident::#dst,
            };
        }
    });

    quote! {
        impl #type_ident {
            #(#state_consts)*

            /// Every state declared in the diagram.
            pub const ALL: &'static [#type_ident] = &[#(#type_ident::#all),*];

            #(#event_consts)*
        }
    }
}

/// One guarded transition and one eligibility predicate per event.
pub fn render_transitions(ir: &RenderIr) -> TokenStream {
    let type_ident = &ir.type_ident;
    let error_ident = &ir.error_ident;

    let methods = ir.events.iter().map(|event| {
        let const_name = &event.const_name;
        let fn_name = &event.fn_name;
        let can_fn_name = &event.can_fn_name;
        let name = event.name.value();

        let fire_doc = format!(
            " Fires `{name}`: returns the destination state when `{name}` is allowed from `self`."
        );
        let can_doc = format!(" Whether `{name}` can fire from `self`.");

        quote! {
            #[doc = #fire_doc]
            pub fn #fn_name(self) -> Result<#type_ident, #error_ident> {
                let Some(events) = self.possible_events() else {
                    return Err(#error_ident::UnknownState(self.0.to_owned()));
                };

                if events.contains(&&Self::#const_name) {
                    return Ok(Self::#const_name.dst);
                }

                Err(#error_ident::ProhibitedEvent {
                    state: self,
                    event: Self::#const_name.name,
                })
            }

            #[doc = #can_doc]
            pub fn #can_fn_name(self) -> bool {
                self.possible_events()
                    .is_some_and(|events| events.contains(&&Self::#const_name))
            }
        }
    });

    quote! {
        impl #type_ident {
            #(#methods)*
        }
    }
}

/// The state -> events index, parsing and the terminal check.
pub fn render_lookups(ir: &RenderIr) -> TokenStream {
    let type_ident = &ir.type_ident;
    let error_ident = &ir.error_ident;
    let transition_ident = &ir.transition_ident;

    let arms = ir.states.iter().map(|state| {
        let value = &state.value;
        let possible = &state.possible;
        quote! {
            #value => Some(&[#(&Self::#possible),*]),
        }
    });

    quote! {
        impl #type_ident {
            /// `None` when the state is not declared in the diagram.
            fn possible_events(self) -> Option<&'static [&'static #transition_ident]> {
                match self.0 {
                    #(#arms)*
                    _ => None,
                }
            }

            /// Returns the declared state matching `value`.
            pub fn parse(value: &str) -> Result<#type_ident, #error_ident> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|state| state.0 == value)
                    .ok_or_else(|| #error_ident::UnknownState(value.to_owned()))
            }

            /// True when no further transition can be made from this state.
            pub fn is_terminal(self) -> bool {
                self.possible_events().is_none_or(|events| events.is_empty())
            }
        }
    }
}

pub fn render_std_impls(ir: &RenderIr) -> TokenStream {
    let type_ident = &ir.type_ident;
    let error_ident = &ir.error_ident;

    quote! {
        impl ::core::fmt::Display for #type_ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.0)
            }
        }

        impl ::core::str::FromStr for #type_ident {
            type Err = #error_ident;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    }
}

/// Runtime dispatch over the event enum.
pub fn render_dispatch(ir: &RenderIr) -> TokenStream {
    let type_ident = &ir.type_ident;
    let error_ident = &ir.error_ident;
    let event_enum_ident = &ir.event_enum_ident;

    let variants: Vec<_> = ir.events.iter().map(|e| &e.variant).collect();
    let fn_names: Vec<_> = ir.events.iter().map(|e| &e.fn_name).collect();
    let can_fn_names: Vec<_> = ir.events.iter().map(|e| &e.can_fn_name).collect();

    quote! {
        impl #type_ident {
            pub fn fire(self, event: #event_enum_ident) -> Result<#type_ident, #error_ident> {
                match event {
                    #(#event_enum_ident::#variants => self.#fn_names(),)*
                }
            }

            pub fn can_fire(self, event: #event_enum_ident) -> bool {
                match event {
                    #(#event_enum_ident::#variants => self.#can_fn_names(),)*
                }
            }

            /// Events that can fire from this state.
            pub fn available_events(self) -> Vec<#event_enum_ident> {
                #event_enum_ident::ALL
                    .iter()
                    .copied()
                    .filter(|event| self.can_fire(*event))
                    .collect()
            }
        }
    }
}
