//! Canonical state machine model built from diagram edges.

use std::collections::BTreeMap;

use crate::error::ParseError;
use crate::helpers::{lower_first, title_case};
use crate::notation::Edge;

/// A node of the machine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    /// Display name, the title-cased value.
    pub identifier: String,
    /// Raw label as written in the diagram.
    pub value: String,
}

/// A guarded transition: every edge sharing a destination folds into one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// `moveEvent` style identifier.
    pub identifier: String,
    /// `Move` style display value.
    pub value: String,
    /// Source states in first-seen order, without duplicates.
    pub src: Vec<State>,
    pub dst: State,
}

impl Event {
    pub fn allows(&self, state: &str) -> bool {
        self.src.iter().any(|s| s.value == state)
    }
}

/// Immutable result of [`ModelBuilder::build`], consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub namespace: String,
    /// Name of the annotated declaration; generated items are named after it.
    pub type_name: String,
    pub states: Vec<State>,
    pub events: Vec<Event>,
    /// State value to indices into `events`, in event order.
    possible_events: BTreeMap<String, Vec<usize>>,
    pub gen_type: bool,
    pub gen_dynamic: bool,
}

impl Model {
    /// Looks a state up by raw value.
    pub fn state(&self, value: &str) -> Option<&State> {
        self.states.iter().find(|s| s.value == value)
    }

    /// Events that may fire from `state`. Empty for terminal and unknown states.
    pub fn events_from<'a>(&'a self, state: &str) -> impl Iterator<Item = &'a Event> + 'a {
        self.possible_events
            .get(state)
            .into_iter()
            .flatten()
            .map(|&index| &self.events[index])
    }

    /// True when no event leaves `state`.
    pub fn is_terminal(&self, state: &str) -> bool {
        self.possible_events
            .get(state)
            .is_none_or(|events| events.is_empty())
    }

    /// Applies external overrides on top of what the diagram produced.
    pub fn inject(mut self, flags: InjectedFlags) -> Self {
        if let Some(module) = flags.module.filter(|m| !m.is_empty()) {
            self.namespace = module;
        }
        self.gen_type = flags.gen_type;
        self.gen_dynamic = flags.gen_dynamic;
        self
    }
}

/// Overrides supplied by configuration rather than by the diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectedFlags {
    pub module: Option<String>,
    pub gen_type: bool,
    pub gen_dynamic: bool,
}

/// Folds diagram edges into a [`Model`].
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    namespace: String,
    type_name: String,
}

impl ModelBuilder {
    pub fn new(namespace: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            type_name: type_name.into(),
        }
    }

    /// Builds the canonical model.
    ///
    /// Edges are grouped by destination, so two labels pointing at the same
    /// state must agree on the event name.
    pub fn build(self, edges: impl IntoIterator<Item = Edge>) -> Result<Model, ParseError> {
        let edges: Vec<Edge> = edges.into_iter().collect();

        let mut states: BTreeMap<&str, State> = BTreeMap::new();
        for edge in &edges {
            for value in [&edge.src, &edge.dst] {
                states.entry(value).or_insert_with(|| State {
                    identifier: title_case(value),
                    value: value.clone(),
                });
            }
        }

        let mut events: BTreeMap<&str, Event> = BTreeMap::new();
        for edge in &edges {
            let value = match &edge.label {
                Some(label) => title_case(label),
                None => format!("To{}", title_case(&edge.dst)),
            };
            let identifier = format!("{}Event", lower_first(&value));

            let src = states[edge.src.as_str()].clone();
            match events.get_mut(edge.dst.as_str()) {
                Some(event) => {
                    if event.identifier != identifier {
                        return Err(ParseError::NamingCollision {
                            first: event.identifier.clone(),
                            second: identifier,
                        });
                    }
                    if event.value != value {
                        return Err(ParseError::NamingCollision {
                            first: event.value.clone(),
                            second: value,
                        });
                    }
                    if !event.src.contains(&src) {
                        event.src.push(src);
                    }
                }
                None => {
                    let dst = states[edge.dst.as_str()].clone();
                    events.insert(
                        &edge.dst,
                        Event {
                            identifier,
                            value,
                            src: vec![src],
                            dst,
                        },
                    );
                }
            }
        }

        let mut states: Vec<State> = states.into_values().collect();
        states.sort_by(|a, b| {
            a.identifier
                .cmp(&b.identifier)
                .then_with(|| a.value.cmp(&b.value))
        });

        let mut events: Vec<Event> = events.into_values().collect();
        events.sort_by(|a, b| {
            a.identifier
                .cmp(&b.identifier)
                .then_with(|| a.dst.value.cmp(&b.dst.value))
        });

        let possible_events = possible_events(&states, &events);

        tracing::debug!(
            states = states.len(),
            events = events.len(),
            "built state machine model"
        );

        Ok(Model {
            namespace: self.namespace,
            type_name: self.type_name,
            states,
            events,
            possible_events,
            gen_type: false,
            gen_dynamic: false,
        })
    }
}

fn possible_events(states: &[State], events: &[Event]) -> BTreeMap<String, Vec<usize>> {
    let mut possible: BTreeMap<String, Vec<usize>> = states
        .iter()
        .map(|s| (s.value.clone(), Vec::new()))
        .collect();

    for (index, event) in events.iter().enumerate() {
        for src in &event.src {
            if let Some(list) = possible.get_mut(&src.value) {
                list.push(index);
            }
        }
    }

    possible
}
