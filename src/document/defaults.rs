//! Default store/index policy applied to string fields.
//!
//! The defaults can be read from JSON, with missing keys falling back to
//! `Store::No` and `Index::Analyzed`:
//!
//! ```
//! use quickdoc::document::defaults::DocumentDefaults;
//! use quickdoc::document::field::{Index, Store};
//!
//! let defaults = DocumentDefaults::from_json_str(r#"{"store": "yes"}"#).unwrap();
//! assert_eq!(defaults.store, Store::Yes);
//! assert_eq!(defaults.index, Index::Analyzed);
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::document::field::{Index, Store};
use crate::error::{QuickdocError, Result};

/// Store and index policy used when a string field does not override them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentDefaults {
    /// Default store policy.
    pub store: Store,

    /// Default index policy.
    pub index: Index,
}

impl DocumentDefaults {
    /// Create defaults with explicit policies.
    pub fn new(store: Store, index: Index) -> Self {
        DocumentDefaults { store, index }
    }

    /// Parse defaults from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| QuickdocError::config(format!("Invalid document defaults: {e}")))
    }

    /// Load defaults from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let defaults = Self::from_json_str(&content)?;
        debug!("Loaded document defaults from {}: {:?}", path.display(), defaults);
        Ok(defaults)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_default_policies() {
        let defaults = DocumentDefaults::default();
        assert_eq!(defaults.store, Store::No);
        assert_eq!(defaults.index, Index::Analyzed);
    }

    #[test]
    fn test_parse_full_and_empty_objects() {
        let defaults =
            DocumentDefaults::from_json_str(r#"{"store": "yes", "index": "not-analyzed"}"#)
                .unwrap();
        assert_eq!(defaults, DocumentDefaults::new(Store::Yes, Index::NotAnalyzed));

        let defaults = DocumentDefaults::from_json_str("{}").unwrap();
        assert_eq!(defaults, DocumentDefaults::default());
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        let err = DocumentDefaults::from_json_str(r#"{"index": "sometimes"}"#).unwrap_err();
        assert!(matches!(err, QuickdocError::Config(_)));

        let err = DocumentDefaults::from_json_str(r#"{"stored": "yes"}"#).unwrap_err();
        assert!(matches!(err, QuickdocError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"index": "analyzed-no-norms"}}"#).unwrap();

        let defaults = DocumentDefaults::load(file.path()).unwrap();
        assert_eq!(defaults.index, Index::AnalyzedNoNorms);
        assert_eq!(defaults.store, Store::No);
    }

    #[test]
    fn test_load_missing_file() {
        let err = DocumentDefaults::load("/nonexistent/quickdoc-defaults.json").unwrap_err();
        assert!(matches!(err, QuickdocError::Io(_)));
    }
}
