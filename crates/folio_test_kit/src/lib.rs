//! JSON document fixtures for folio test suites.
//!
//! A document case is a pair of files in a crate's `tests/fixtures`
//! directory: `<name>.json` holds the document as it arrives and
//! `<name>.expected.json` the document after processing.

use std::path::{Path, PathBuf};

use serde_json::Value;

/// Directory, relative to a crate's manifest, that holds document fixtures
pub const FIXTURE_DIR: &str = "tests/fixtures";

/// A document before and after processing.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentCase {
    pub input: Value,
    pub expected: Value,
}

impl DocumentCase {
    /// Loads `<name>.json` and `<name>.expected.json` from `dir`.
    pub async fn load(dir: impl AsRef<Path>, name: &str) -> Self {
        let dir = dir.as_ref();
        let input = document(dir.join(format!("{name}.json"))).await;
        let expected = document(dir.join(format!("{name}.expected.json"))).await;
        Self { input, expected }
    }
}

/// Reads and parses a single JSON document, panicking with the path on
/// failure.
pub async fn document(path: impl Into<PathBuf>) -> Value {
    let path = path.into();
    let content = tokio::fs::read_to_string(&path)
        .await
        .unwrap_or_else(|e| panic!("Failed to read document {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Invalid JSON in document {}: {e}", path.display()))
}

/// Loads a [`DocumentCase`] from the calling crate's `tests/fixtures`.
///
/// ```ignore
/// let case = document_case!("page").await;
/// ```
#[macro_export]
macro_rules! document_case {
    ($name:expr) => {
        $crate::DocumentCase::load(
            std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join($crate::FIXTURE_DIR),
            $name,
        )
    };
}
