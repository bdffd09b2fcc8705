//! End-to-end generation: source file in, generated file out.

use std::fs;
use std::path::Path;

use crate::codegen;
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::locate;
use crate::model::{Model, ModelBuilder};
use crate::notation::{self, DocType, LineParser};

/// Runs the pipeline described by a [`GeneratorConfig`].
pub struct Generator {
    config: GeneratorConfig,
    line_parser: Box<dyn LineParser>,
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Generator {
    /// Fails when the configured doc type is unknown.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let doc_type: DocType = config.doc_type.parse()?;
        Ok(Self {
            line_parser: doc_type.line_parser(),
            config,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds the model from source text, with the config flags applied.
    ///
    /// `file_stem` names the module when the declaration is not nested in an
    /// inline `mod`.
    pub fn model(&self, source: &str, file_stem: &str) -> Result<Model> {
        let declaration = locate::locate(source, &self.config.type_name)?;
        let edges = notation::extract_edges(&declaration.doc_lines, self.line_parser.as_ref())?;

        let namespace = if declaration.namespace.is_empty() {
            file_stem.to_string()
        } else {
            declaration.namespace
        };

        let model = ModelBuilder::new(namespace, self.config.type_name.clone()).build(edges)?;
        Ok(model.inject(self.config.flags()))
    }

    /// Generates the formatted Rust source for `source`.
    pub fn generate_source(&self, source: &str, file_stem: &str) -> Result<String> {
        let model = self.model(source, file_stem)?;
        Ok(codegen::render(&model)?)
    }

    /// Reads the configured source and writes the generated file.
    ///
    /// Nothing is written unless every stage succeeds.
    pub fn run(&self) -> Result<()> {
        let source_path = &self.config.source;
        let source = fs::read_to_string(source_path).map_err(|source| Error::Io {
            path: source_path.clone(),
            source,
        })?;

        let code = self.generate_source(&source, &file_stem(source_path))?;

        let output = &self.config.output;
        fs::write(output, code).map_err(|source| Error::Io {
            path: output.clone(),
            source,
        })?;

        tracing::info!(
            type_name = %self.config.type_name,
            output = %output.display(),
            "generated state machine"
        );
        Ok(())
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
