//! Error types for template instantiation

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for scaffolding operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Errors raised while copying a template or patching its package descriptor
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Template '{id}' not found in {root}. Available templates: {}", available.join(", "))]
    TemplateNotFound {
        id: String,
        root: PathBuf,
        available: Vec<String>,
    },

    #[error("Template has no package.json: {0}")]
    MissingDescriptor(PathBuf),

    #[error("Failed to parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// Attach the offending path to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
