//! Document converters for creating documents from files.
//!
//! A converter turns a file into an iterator of [`Document`]s. Nested input
//! structures are flattened into dotted field names through
//! [`DocScope`](crate::scope::DocScope).

use std::path::Path;

use crate::document::document::Document;
use crate::error::Result;

pub mod jsonl;

/// A trait for converting various file formats into Document iterators.
///
/// # Example
///
/// ```no_run
/// use quickdoc::document::converter::DocumentConverter;
/// use quickdoc::document::converter::jsonl::JsonlDocumentConverter;
///
/// let converter = JsonlDocumentConverter::new();
/// for doc in converter.convert("documents.jsonl").unwrap() {
///     let doc = doc.unwrap();
///     println!("Document: {:?}", doc);
/// }
/// ```
pub trait DocumentConverter {
    /// The iterator type that yields documents.
    type Iter: Iterator<Item = Result<Document>>;

    /// Convert a file into an iterator of Documents.
    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter>;
}
