use proc_macro2::TokenStream;
use quote::quote;

use crate::ir::RenderIr;

pub fn render_error_enum(ir: &RenderIr) -> TokenStream {
    let type_ident = &ir.type_ident;
    let error_ident = &ir.error_ident;

    quote! {
        /// Why a transition or a parse was refused.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum #error_ident {
            /// The value is not a state of the diagram.
            UnknownState(String),
            /// The event cannot fire from `state`.
            ProhibitedEvent {
                state: #type_ident,
                event: &'static str,
            },
        }

        impl ::core::fmt::Display for #error_ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    Self::UnknownState(state) => write!(f, "unknown state: '{}'", state),
                    Self::ProhibitedEvent { state, event } => {
                        write!(f, "prohibited event '{}' in state '{}'", event, state.0)
                    }
                }
            }
        }

        impl ::std::error::Error for #error_ident {}
    }
}

pub fn render_event_enum(ir: &RenderIr) -> TokenStream {
    let event_enum_ident = &ir.event_enum_ident;
    let variants: Vec<_> = ir.events.iter().map(|e| &e.variant).collect();
    let names: Vec<_> = ir.events.iter().map(|e| &e.name).collect();

    quote! {
        /// Events of the machine, for dispatching by value.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum #event_enum_ident {
            #(#variants,)*
        }

        impl #event_enum_ident {
            pub const ALL: &'static [#event_enum_ident] = &[#(#event_enum_ident::#variants,)*];

            /// Name of the event as written in the diagram.
            pub fn name(self) -> &'static str {
                match self {
                    #(Self::#variants => #names,)*
                }
            }

            pub fn parse(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|event| event.name() == name)
            }
        }
    }
}
