use std::collections::HashSet;

use syn::{Ident, LitStr};

use crate::error::GenerateError;
use crate::helpers;
use crate::model::Model;

/// Rust-level view of a [`Model`].
/// Every name the templates need is resolved and checked here, so rendering
/// itself cannot fail.
pub struct RenderIr {
    pub type_ident: Ident,
    pub error_ident: Ident,
    pub transition_ident: Ident,
    pub event_enum_ident: Ident,

    pub gen_type: bool,
    pub gen_dynamic: bool,

    pub states: Vec<StateIr>,
    pub events: Vec<EventIr>,
}

pub struct StateIr {
    /// Associated constant on the state type.
    pub const_name: Ident,
    pub value: LitStr,
    /// Descriptor constants of the events leaving this state.
    pub possible: Vec<Ident>,
}

pub struct EventIr {
    /// Private descriptor constant.
    pub const_name: Ident,
    pub name: LitStr,
    pub fn_name: Ident,
    pub can_fn_name: Ident,
    pub variant: Ident,
    pub src: Vec<Ident>,
    pub dst: Ident,
}

/// Methods every generated state type carries.
const RESERVED_METHODS: &[&str] = &[
    "parse",
    "is_terminal",
    "possible_events",
    "fire",
    "can_fire",
    "available_events",
];

impl TryFrom<&Model> for RenderIr {
    type Error = GenerateError;

    fn try_from(model: &Model) -> Result<Self, Self::Error> {
        let type_ident = helpers::type_ident(&model.type_name)?;

        let mut consts = Unique::new(["ALL"]);
        let mut methods = Unique::new(RESERVED_METHODS.iter().copied());
        let mut variants = Unique::new([]);

        let state_const = |value: &str| -> Result<Ident, GenerateError> {
            let state = model.state(value).ok_or_else(|| GenerateError::InvalidIdentifier {
                name: value.to_string(),
            })?;
            helpers::const_ident(&state.identifier)
        };

        let mut events = Vec::with_capacity(model.events.len());
        for event in &model.events {
            let const_name = consts.insert(helpers::const_ident(&event.identifier)?)?;
            let fn_name = methods.insert(helpers::fn_ident(&event.value)?)?;
            let can_fn_name =
                methods.insert(helpers::fn_ident(&format!("can_{}", event.value))?)?;
            let variant = variants.insert(helpers::variant_ident(&event.value)?)?;

            events.push(EventIr {
                const_name,
                name: LitStr::new(&event.value, proc_macro2::Span::call_site()),
                fn_name,
                can_fn_name,
                variant,
                src: event
                    .src
                    .iter()
                    .map(|s| state_const(&s.value))
                    .collect::<Result<_, _>>()?,
                dst: state_const(&event.dst.value)?,
            });
        }

        let mut states = Vec::with_capacity(model.states.len());
        for state in &model.states {
            let const_name = consts.insert(helpers::const_ident(&state.identifier)?)?;
            let possible = model
                .events_from(&state.value)
                .map(|event| helpers::const_ident(&event.identifier))
                .collect::<Result<_, _>>()?;

            states.push(StateIr {
                const_name,
                value: LitStr::new(&state.value, proc_macro2::Span::call_site()),
                possible,
            });
        }

        Ok(Self {
            error_ident: helpers::error_ident(&type_ident),
            transition_ident: helpers::transition_ident(&type_ident),
            event_enum_ident: helpers::event_enum_ident(&type_ident),
            type_ident,
            gen_type: model.gen_type,
            gen_dynamic: model.gen_dynamic,
            states,
            events,
        })
    }
}

/// Tracks the names already handed out within one namespace.
struct Unique {
    seen: HashSet<String>,
}

impl Unique {
    fn new<'a>(reserved: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            seen: reserved.into_iter().map(str::to_string).collect(),
        }
    }

    fn insert(&mut self, ident: Ident) -> Result<Ident, GenerateError> {
        let name = ident.to_string();
        let bare = name.strip_prefix("r#").unwrap_or(&name).to_string();
        if !self.seen.insert(bare) {
            return Err(GenerateError::DuplicateIdentifier { name });
        }
        Ok(ident)
    }
}
