//! JSONL format document converter.
//!
//! Each non-empty line of the input must be a single JSON object:
//! ```jsonl
//! {"title": "Rust Programming", "author": {"name": "Jane", "email": null}, "tags": ["rust", "guide"]}
//! ```
//!
//! Nested objects descend into the key (`author.name`), arrays add one
//! field per element under the same name, scalars are indexed as their JSON
//! text and `null` becomes the scope's null placeholder.

use std::cell::RefCell;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::rc::Rc;

use log::debug;
use serde_json::Value;

use crate::document::converter::DocumentConverter;
use crate::document::defaults::DocumentDefaults;
use crate::document::document::Document;
use crate::error::{QuickdocError, Result};
use crate::scope::DocScope;

/// A document converter for JSONL format.
#[derive(Debug, Clone, Default)]
pub struct JsonlDocumentConverter {
    /// Policies applied to every flattened field.
    defaults: DocumentDefaults,
}

impl JsonlDocumentConverter {
    /// Create a converter using the system default policies.
    pub fn new() -> Self {
        JsonlDocumentConverter {
            defaults: DocumentDefaults::default(),
        }
    }

    /// Create a converter with explicit default policies.
    pub fn with_defaults(defaults: DocumentDefaults) -> Self {
        JsonlDocumentConverter { defaults }
    }

    /// The policies applied to flattened fields.
    pub fn defaults(&self) -> DocumentDefaults {
        self.defaults
    }

    /// Parse a single JSON object into a Document.
    pub fn parse_line(&self, line: &str) -> Result<Document> {
        let value: Value = serde_json::from_str(line)
            .map_err(|e| QuickdocError::parse(format!("Failed to parse JSON: {e}")))?;

        let Value::Object(map) = value else {
            return Err(QuickdocError::parse("expected a JSON object"));
        };

        let document = Rc::new(RefCell::new(Document::new()));
        {
            let root = DocScope::from_shared(Rc::clone(&document), self.defaults);
            for (key, val) in &map {
                add_value(&root, key, val)?;
            }
        }

        let document = Rc::try_unwrap(document)
            .map(RefCell::into_inner)
            .map_err(|_| QuickdocError::other("document is still referenced by a scope"))?;
        debug!("Converted JSON object into {} fields", document.len());
        Ok(document)
    }
}

fn add_value(scope: &DocScope, name: &str, value: &Value) -> Result<()> {
    match value {
        Value::Object(map) => {
            let child = scope.descend(name);
            for (key, val) in map {
                add_value(&child, key, val)?;
            }
        }
        Value::Array(items) => {
            for item in items {
                add_value(scope, name, item)?;
            }
        }
        Value::Null => {
            scope.text(name, None)?;
        }
        Value::String(text) => {
            scope.text(name, Some(text.as_str()))?;
        }
        Value::Bool(_) | Value::Number(_) => {
            scope.text(name, Some(value.to_string().as_str()))?;
        }
    }
    Ok(())
}

/// Iterator over JSONL documents.
#[derive(Debug)]
pub struct JsonlDocumentIterator {
    reader: BufReader<File>,
    converter: JsonlDocumentConverter,
    line_number: usize,
}

impl Iterator for JsonlDocumentIterator {
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        loop {
            line.clear();
            self.line_number += 1;
            match self.reader.read_line(&mut line) {
                Ok(0) => return None, // EOF
                Ok(_) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let line_number = self.line_number;
                    return Some(
                        self.converter
                            .parse_line(line)
                            .map_err(|e| e.at_line(line_number)),
                    );
                }
                Err(e) => return Some(Err(QuickdocError::from(e))),
            }
        }
    }
}

impl DocumentConverter for JsonlDocumentConverter {
    type Iter = JsonlDocumentIterator;

    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter> {
        let file = File::open(path.as_ref())?;
        debug!("Reading JSONL documents from {}", path.as_ref().display());

        Ok(JsonlDocumentIterator {
            reader: BufReader::new(file),
            converter: self.clone(),
            line_number: 0,
        })
    }
}
