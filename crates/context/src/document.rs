//! Document tagging — wrapping a file's contents in a uniquely-identified
//! start/end marker pair.
//!
//! The tag format is part of the external interface and must stay bit-exact:
//!
//! ```text
//! <document:{uuid} path="{path}" type="{kind}">
//! {raw file content}</document:{uuid}>
//! ```
//!
//! The closing tag immediately follows the file content — no newline is
//! injected unless the content itself ends in one — and a single newline
//! follows the closing tag.

use promptpack_core::error::ContextError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Classification of a context file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Operator-authored text prepended to every prompt
    CustomInstructions,
    /// Reference documents supplied as additional context
    CuratedDatasets,
    /// Caller-supplied classification
    #[serde(untagged)]
    Other(String),
}

impl DocumentKind {
    pub fn as_str(&self) -> &str {
        match self {
            DocumentKind::CustomInstructions => "custom_instructions",
            DocumentKind::CuratedDatasets => "curated_datasets",
            DocumentKind::Other(s) => s,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tagged context file.
///
/// Created per file at aggregation time; immutable afterwards. Retained as a
/// structured value so tests can inspect id/path/body instead of re-parsing
/// the rendered text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Fresh per tagging call; distinguishes two inclusions of the same file
    pub id: Uuid,

    /// The file the body was read from
    pub path: PathBuf,

    /// Classification tag
    pub kind: DocumentKind,

    /// Raw file contents
    pub body: String,
}

impl Document {
    /// Read `path` and wrap its contents as a tagged document.
    ///
    /// Fails with [`ContextError::FileAccess`] if the file cannot be read;
    /// the error is propagated, never swallowed.
    pub fn read(path: &Path, kind: DocumentKind) -> Result<Self, ContextError> {
        let body = std::fs::read_to_string(path).map_err(|source| ContextError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            id: Uuid::new_v4(),
            path: path.to_path_buf(),
            kind,
            body,
        })
    }

    /// Render the document in its wire format (see module docs).
    pub fn render(&self) -> String {
        format!(
            "<document:{id} path=\"{path}\" type=\"{kind}\">\n{body}</document:{id}>\n",
            id = self.id,
            path = self.path.display(),
            kind = self.kind,
            body = self.body,
        )
    }
}
