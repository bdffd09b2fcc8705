//! Error types for the generation pipeline.

use std::path::PathBuf;

/// Failures while reading the diagram: locating the declaration, decoding its
/// lines and folding them into a model.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A doc line does not follow the selected notation.
    #[error("invalid line: {line}")]
    InvalidLine { line: String },
    /// The requested notation kind is not registered.
    #[error("unknown doc type: {0}")]
    UnknownDocType(String),
    /// Two edges sharing a destination derive different event names.
    #[error("conflicting names: {first} and {second}")]
    NamingCollision { first: String, second: String },
    /// The source text is not valid Rust.
    #[error("source: {0}")]
    Source(#[from] syn::Error),
}

/// Failures while turning a model into Rust source.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A state or event name cannot be spelled as a Rust identifier.
    #[error("`{name}` cannot be used as a Rust identifier")]
    InvalidIdentifier { name: String },
    /// Two generated items would share the same Rust name.
    #[error("duplicate generated identifier `{name}`")]
    DuplicateIdentifier { name: String },
    /// The rendered tokens do not form a valid Rust file.
    #[error("formatting code: {0}")]
    Format(syn::Error),
}

/// Top-level error returned by [`crate::Generator`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("parsing: {0}")]
    Parse(#[from] ParseError),
    #[error("generating: {0}")]
    Generate(#[from] GenerateError),
    #[error("config: {0}")]
    Config(#[from] darling::Error),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
