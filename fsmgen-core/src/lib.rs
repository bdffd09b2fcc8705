//! Core pipeline for fsmgen.
//!
//! A diagram written in the doc comment of a type is decoded line by line
//! ([`notation`]), folded into a canonical [`Model`], and rendered into Rust
//! items implementing guarded transitions ([`codegen`]).

pub mod codegen;
pub mod config;
pub mod error;
pub mod generator;
mod helpers;
mod ir;
pub mod locate;
pub mod model;
pub mod notation;

pub use codegen::{render, render_tokens};
pub use config::GeneratorConfig;
pub use error::{Error, GenerateError, ParseError, Result};
pub use generator::Generator;
pub use locate::{Declaration, doc_lines, locate};
pub use model::{Event, InjectedFlags, Model, ModelBuilder, State};
pub use notation::{DocType, Edge, GraphvizParser, LineParser, MermaidParser, extract_edges};
