//! Fields and their storage/indexing policies.
//!
//! This module defines:
//! - [`Field`] - A named value together with its store/index/term vector policy
//! - [`FieldValue`] - The content of a field (text, character stream, token stream or bytes)
//! - [`Store`], [`Index`], [`TermVector`] - The policy enums
//!
//! Field constructors follow the classic Lucene contract: a character or
//! token stream is always indexed and tokenized but never stored, binary
//! content is stored but never indexed, and a string value takes explicit
//! store and index policies.
//!
//! # Examples
//!
//! ```
//! use quickdoc::document::field::{Field, Index, Store};
//!
//! let field = Field::from_text("title", "Rust Programming", Store::Yes, Index::Analyzed).unwrap();
//! assert_eq!(field.name(), "title");
//! assert_eq!(field.string_value(), Some("Rust Programming"));
//! assert!(field.is_stored());
//! assert!(field.is_tokenized());
//!
//! // A field that is neither indexed nor stored is rejected.
//! assert!(Field::from_text("title", "lost", Store::No, Index::No).is_err());
//! ```

use std::fmt;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenStream;
use crate::error::{QuickdocError, Result};

/// Whether a field's original value is retained for retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Store {
    /// Store the original value.
    Yes,
    /// Do not store the value.
    #[default]
    No,
}

impl Store {
    /// Whether this policy retains the value.
    pub fn is_stored(self) -> bool {
        matches!(self, Store::Yes)
    }
}

/// Whether and how a field's value is made searchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Index {
    /// Do not index the value.
    No,
    /// Run the value through the analyzer and index the resulting terms.
    #[default]
    Analyzed,
    /// Index the value as a single term without analysis.
    NotAnalyzed,
    /// Analyze and index, but do not store norms.
    AnalyzedNoNorms,
    /// Index as a single term and do not store norms.
    NotAnalyzedNoNorms,
}

impl Index {
    /// Whether the value is searchable at all.
    pub fn is_indexed(self) -> bool {
        !matches!(self, Index::No)
    }

    /// Whether the value goes through the analyzer.
    pub fn is_analyzed(self) -> bool {
        matches!(self, Index::Analyzed | Index::AnalyzedNoNorms)
    }

    /// Whether index-time boosts and length normalization are dropped.
    pub fn omits_norms(self) -> bool {
        matches!(self, Index::AnalyzedNoNorms | Index::NotAnalyzedNoNorms)
    }
}

/// Which per-field term statistics are retained for scoring or highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TermVector {
    /// Do not store term vectors.
    #[default]
    No,
    /// Store term frequencies.
    Yes,
    /// Store term frequencies and positions.
    WithPositions,
    /// Store term frequencies and character offsets.
    WithOffsets,
    /// Store term frequencies, positions and offsets.
    WithPositionsOffsets,
}

impl TermVector {
    /// Whether any term vector is stored.
    pub fn is_stored(self) -> bool {
        !matches!(self, TermVector::No)
    }

    /// Whether token positions are part of the term vector.
    pub fn with_positions(self) -> bool {
        matches!(self, TermVector::WithPositions | TermVector::WithPositionsOffsets)
    }

    /// Whether token offsets are part of the term vector.
    pub fn with_offsets(self) -> bool {
        matches!(self, TermVector::WithOffsets | TermVector::WithPositionsOffsets)
    }
}

/// The content of a field.
///
/// Stream variants are consumed once by whatever indexes the document.
pub enum FieldValue {
    /// String value
    Text(String),
    /// Character stream, read and analyzed at indexing time
    Reader(Box<dyn Read>),
    /// Pre-analyzed token stream
    Tokens(TokenStream),
    /// Binary data
    Binary(Vec<u8>),
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.debug_tuple("Text").field(text).finish(),
            FieldValue::Reader(_) => f.write_str("Reader(<stream>)"),
            FieldValue::Tokens(_) => f.write_str("Tokens(<stream>)"),
            FieldValue::Binary(data) => write!(f, "Binary({} bytes)", data.len()),
        }
    }
}

/// A named unit of content attached to a document.
#[derive(Debug)]
pub struct Field {
    name: String,
    value: FieldValue,
    store: Store,
    index: Index,
    term_vector: TermVector,
    boost: f32,
}

impl Field {
    /// Create a field from a character stream. The content is indexed and
    /// tokenized, but not stored.
    pub fn from_reader<S: Into<String>>(name: S, reader: Box<dyn Read>) -> Self {
        Self::from_reader_with_term_vector(name, reader, TermVector::No)
    }

    /// Create a field from a character stream, retaining term vectors.
    pub fn from_reader_with_term_vector<S: Into<String>>(
        name: S,
        reader: Box<dyn Read>,
        term_vector: TermVector,
    ) -> Self {
        Self::unchecked(
            name,
            FieldValue::Reader(reader),
            Store::No,
            Index::Analyzed,
            term_vector,
        )
    }

    /// Create a field from a pre-analyzed token stream. The tokens are
    /// indexed as given, and nothing is stored.
    pub fn from_tokens<S: Into<String>>(name: S, tokens: TokenStream) -> Self {
        Self::from_tokens_with_term_vector(name, tokens, TermVector::No)
    }

    /// Create a field from a pre-analyzed token stream, retaining term vectors.
    pub fn from_tokens_with_term_vector<S: Into<String>>(
        name: S,
        tokens: TokenStream,
        term_vector: TermVector,
    ) -> Self {
        Self::unchecked(
            name,
            FieldValue::Tokens(tokens),
            Store::No,
            Index::Analyzed,
            term_vector,
        )
    }

    /// Create a stored, unindexed binary field.
    ///
    /// Fails when `store` is [`Store::No`]: binary content is never
    /// indexed, so an unstored binary field would hold nothing.
    pub fn from_bytes<S: Into<String>>(name: S, value: Vec<u8>, store: Store) -> Result<Self> {
        if !store.is_stored() {
            return Err(QuickdocError::field("binary values can't be unstored"));
        }

        Ok(Self::unchecked(
            name,
            FieldValue::Binary(value),
            store,
            Index::No,
            TermVector::No,
        ))
    }

    /// Create a string field with explicit store and index policies.
    pub fn from_text<S: Into<String>, T: Into<String>>(
        name: S,
        value: T,
        store: Store,
        index: Index,
    ) -> Result<Self> {
        Self::from_text_with_term_vector(name, value, store, index, TermVector::No)
    }

    /// Create a string field with explicit store, index and term vector policies.
    pub fn from_text_with_term_vector<S: Into<String>, T: Into<String>>(
        name: S,
        value: T,
        store: Store,
        index: Index,
        term_vector: TermVector,
    ) -> Result<Self> {
        if !index.is_indexed() && !store.is_stored() {
            return Err(QuickdocError::field(
                "it doesn't make sense to have a field that is neither indexed nor stored",
            ));
        }
        if !index.is_indexed() && term_vector.is_stored() {
            return Err(QuickdocError::field(
                "cannot store term vector information for a field that is not indexed",
            ));
        }

        Ok(Self::unchecked(
            name,
            FieldValue::Text(value.into()),
            store,
            index,
            term_vector,
        ))
    }

    fn unchecked<S: Into<String>>(
        name: S,
        value: FieldValue,
        store: Store,
        index: Index,
        term_vector: TermVector,
    ) -> Self {
        Field {
            name: name.into(),
            value,
            store,
            index,
            term_vector,
            boost: 1.0,
        }
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the field value.
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Get the string value, if this is a string field.
    pub fn string_value(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get the binary value, if this is a binary field.
    pub fn binary_value(&self) -> Option<&[u8]> {
        match &self.value {
            FieldValue::Binary(data) => Some(data),
            _ => None,
        }
    }

    /// The store policy of this field.
    pub fn store(&self) -> Store {
        self.store
    }

    /// The index policy of this field.
    pub fn index(&self) -> Index {
        self.index
    }

    /// The term vector policy of this field.
    pub fn term_vector(&self) -> TermVector {
        self.term_vector
    }

    /// Whether the original value is retained.
    pub fn is_stored(&self) -> bool {
        self.store.is_stored()
    }

    /// Whether the value is searchable.
    pub fn is_indexed(&self) -> bool {
        self.index.is_indexed()
    }

    /// Whether the value is split into terms (streams always are).
    pub fn is_tokenized(&self) -> bool {
        match self.value {
            FieldValue::Reader(_) | FieldValue::Tokens(_) => true,
            FieldValue::Text(_) => self.index.is_analyzed(),
            FieldValue::Binary(_) => false,
        }
    }

    /// Whether this field holds binary content.
    pub fn is_binary(&self) -> bool {
        matches!(self.value, FieldValue::Binary(_))
    }

    /// Whether norms are omitted for this field.
    pub fn omits_norms(&self) -> bool {
        self.index.omits_norms()
    }

    /// The index-time boost of this field (default: 1.0).
    pub fn boost(&self) -> f32 {
        self.boost
    }

    /// Set the index-time boost of this field.
    pub fn set_boost(&mut self, boost: f32) -> &mut Self {
        self.boost = boost;
        self
    }

    /// Consume the field, returning its value.
    pub fn into_value(self) -> FieldValue {
        self.value
    }
}
