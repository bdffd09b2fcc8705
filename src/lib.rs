//! # fsmgen
//!
//! Generates guarded finite state machine transitions from a Mermaid style
//! diagram written in the doc comment of a Rust type.
//!
//! Every doc line is one edge, `source --> destination: Label`. Edges sharing
//! a destination become one event; an edge without a label gets an event named
//! `To<Destination>`.
//!
//! ## Attribute macro
//!
//! ```rust
//! use fsmgen::fsm_diagram;
//!
//! /// still --> moving: Move
//! /// moving --> moving: Move
//! /// moving --> still: Stop
//! /// moving --> crash
//! #[fsm_diagram]
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub struct State(pub &'static str);
//!
//! let state = State::STILL.r#move().unwrap();
//! assert_eq!(state, State::MOVING);
//! assert!(State::CRASH.is_terminal());
//! assert_eq!(
//!     State::CRASH.stop(),
//!     Err(StateError::ProhibitedEvent { state: State::CRASH, event: "Stop" })
//! );
//! ```
//!
//! ## Generating a file
//!
//! ```rust,no_run
//! use fsmgen::{Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig::new("State", "src/state.rs", "src/state_fsm.rs").gen_type(true);
//! Generator::new(config)?.run()?;
//! # Ok::<(), fsmgen::Error>(())
//! ```

pub use fsmgen_core::*;
pub use fsmgen_macros::fsm_diagram;
