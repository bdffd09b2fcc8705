//! Generator configuration.

use std::path::PathBuf;

use darling::FromMeta;

use crate::model::InjectedFlags;

/// Options for one generation run.
///
/// Besides the builder-style setters, the config can be read from an
/// attribute-like string, which is handy in build scripts:
///
/// ```rust
/// # use fsmgen_core::GeneratorConfig;
/// let config = GeneratorConfig::from_meta_str(
///     r#"fsmgen(type_name = "State", source = "src/state.rs", output = "src/state_fsm.rs", gen_type = true)"#,
/// )
/// .unwrap();
/// assert_eq!(config.doc_type, "mermaid");
/// ```
#[derive(Debug, Clone, FromMeta)]
pub struct GeneratorConfig {
    /// Type whose doc comment holds the diagram (required).
    pub type_name: String,

    /// Rust file containing the type (required).
    pub source: PathBuf,

    /// Where the generated code is written (required).
    pub output: PathBuf,

    /// Diagram notation (default: "mermaid").
    #[darling(default = "default_doc_type")]
    pub doc_type: String,

    /// Replaces the module name found in the source.
    #[darling(default)]
    pub module: Option<String>,

    /// Also emit the state newtype itself.
    #[darling(default)]
    pub gen_type: bool,

    /// Also emit an event enum with runtime dispatch.
    #[darling(default)]
    pub gen_dynamic: bool,
}

fn default_doc_type() -> String {
    "mermaid".to_string()
}

impl GeneratorConfig {
    pub fn new(
        type_name: impl Into<String>,
        source: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            source: source.into(),
            output: output.into(),
            doc_type: default_doc_type(),
            module: None,
            gen_type: false,
            gen_dynamic: false,
        }
    }

    /// Parses `name(key = value, ...)`.
    pub fn from_meta_str(s: &str) -> darling::Result<Self> {
        let meta: syn::Meta = syn::parse_str(s)?;
        Self::from_meta(&meta)
    }

    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = doc_type.into();
        self
    }

    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn gen_type(mut self, gen_type: bool) -> Self {
        self.gen_type = gen_type;
        self
    }

    pub fn gen_dynamic(mut self, gen_dynamic: bool) -> Self {
        self.gen_dynamic = gen_dynamic;
        self
    }

    pub fn flags(&self) -> InjectedFlags {
        InjectedFlags {
            module: self.module.clone(),
            gen_type: self.gen_type,
            gen_dynamic: self.gen_dynamic,
        }
    }
}
