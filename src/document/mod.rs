//! Document model.
//!
//! A [`Document`] is an append-only list of [`Field`]s. Each field carries
//! its own store, index and term vector policy; [`DocumentDefaults`] holds
//! the policy applied to string fields that do not choose one.
//!
//! # Examples
//!
//! ```
//! use quickdoc::document::{Document, Field, Index, Store};
//!
//! let mut doc = Document::new();
//! doc.add(Field::from_text("title", "Rust Programming Guide", Store::Yes, Index::Analyzed).unwrap());
//! doc.add(Field::from_bytes("cover", vec![0xff, 0xd8], Store::Yes).unwrap());
//!
//! assert_eq!(doc.len(), 2);
//! assert!(doc.has_field("title"));
//! ```

pub mod converter;
pub mod defaults;
#[allow(clippy::module_inception)]
pub mod document;
pub mod field;

// Re-export commonly used types
pub use defaults::DocumentDefaults;
pub use document::{Document, FieldContainer};
pub use field::{Field, FieldValue, Index, Store, TermVector};
