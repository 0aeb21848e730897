//! # quickdoc
//!
//! Path-scoped population of full-text search documents.
//!
//! ## Features
//!
//! - Dotted field-name prefixes for flattening nested records
//! - Default store/index policies inherited along a derivation chain
//! - Character stream, token stream, binary and string field sources
//! - Null placeholder for absent string values
//! - JSONL flattening converter and CLI

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod scope;

pub mod prelude {
    pub use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
    pub use crate::document::{
        Document, DocumentDefaults, Field, FieldContainer, FieldValue, Index, Store, TermVector,
    };
    pub use crate::error::{QuickdocError, Result};
    pub use crate::scope::{DocScope, FieldSource, NULL_PLACEHOLDER};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
