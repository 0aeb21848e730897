//! Path-scoped document population.
//!
//! A [`DocScope`] wraps a shared field container together with a dotted
//! path prefix and a default store/index policy. Every field added through
//! a scope is named `path.field`, so nested structures can be flattened
//! into a single document without spelling out the prefix at each call.
//!
//! Scopes are immutable. [`descend`](DocScope::descend),
//! [`with_default_store`](DocScope::with_default_store) and
//! [`with_default_index`](DocScope::with_default_index) return new scopes
//! which share the container with the scope they were derived from.
//!
//! # Examples
//!
//! ```
//! use quickdoc::document::{Document, Store};
//! use quickdoc::scope::DocScope;
//!
//! let root = DocScope::new(Document::new());
//! let address = root.descend("user").descend("address");
//! address.text("city", Some("Paris")).unwrap();
//! address.with_default_store(Store::Yes).text("zip", Some("75001")).unwrap();
//!
//! let doc = root.document();
//! let doc = doc.borrow();
//! assert_eq!(doc.get_values("user.address.city"), vec!["Paris"]);
//! assert!(doc.get("user.address.zip").unwrap().is_stored());
//! ```

use std::cell::{RefCell, RefMut};
use std::fmt;
use std::io::Read;
use std::rc::Rc;

use log::trace;

use crate::analysis::token::TokenStream;
use crate::document::defaults::DocumentDefaults;
use crate::document::document::{Document, FieldContainer};
use crate::document::field::{Field, Index, Store, TermVector};
use crate::error::Result;

/// Value indexed in place of an absent string.
pub const NULL_PLACEHOLDER: &str = "null";

/// The content handed to [`DocScope::add`], with the policy overrides each
/// kind of content accepts.
pub enum FieldSource {
    /// Character stream; indexed and tokenized, never stored.
    Reader {
        reader: Box<dyn Read>,
        term_vector: TermVector,
    },
    /// Pre-analyzed token stream; indexed as given, never stored.
    Tokens {
        tokens: TokenStream,
        term_vector: TermVector,
    },
    /// Raw bytes; stored, never indexed.
    Bytes { value: Vec<u8>, store: Store },
    /// String value. `None` policies fall back to the scope defaults and a
    /// `None` value becomes [`NULL_PLACEHOLDER`].
    Text {
        value: Option<String>,
        store: Option<Store>,
        index: Option<Index>,
    },
}

impl FieldSource {
    /// A character stream without term vectors.
    pub fn reader<R: Read + 'static>(reader: R) -> Self {
        FieldSource::Reader {
            reader: Box::new(reader),
            term_vector: TermVector::No,
        }
    }

    /// A token stream without term vectors.
    pub fn tokens(tokens: TokenStream) -> Self {
        FieldSource::Tokens {
            tokens,
            term_vector: TermVector::No,
        }
    }

    /// Raw bytes with the given store policy.
    pub fn bytes<B: Into<Vec<u8>>>(value: B, store: Store) -> Self {
        FieldSource::Bytes {
            value: value.into(),
            store,
        }
    }

    /// A string value using the scope defaults.
    pub fn text<S: Into<String>>(value: Option<S>) -> Self {
        FieldSource::Text {
            value: value.map(Into::into),
            store: None,
            index: None,
        }
    }
}

impl fmt::Debug for FieldSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSource::Reader { term_vector, .. } => f
                .debug_struct("Reader")
                .field("term_vector", term_vector)
                .finish_non_exhaustive(),
            FieldSource::Tokens { term_vector, .. } => f
                .debug_struct("Tokens")
                .field("term_vector", term_vector)
                .finish_non_exhaustive(),
            FieldSource::Bytes { value, store } => f
                .debug_struct("Bytes")
                .field("len", &value.len())
                .field("store", store)
                .finish(),
            FieldSource::Text {
                value,
                store,
                index,
            } => f
                .debug_struct("Text")
                .field("value", value)
                .field("store", store)
                .field("index", index)
                .finish(),
        }
    }
}

/// A path-prefixed, policy-carrying view over a shared field container.
///
/// The container is an `Rc<RefCell<C>>`, so scopes stay on the thread that
/// created them and every scope derived from one root writes into the same
/// container.
pub struct DocScope<C = Document> {
    container: Rc<RefCell<C>>,
    path: String,
    parent: Option<Rc<DocScope<C>>>,
    defaults: DocumentDefaults,
}

impl<C: FieldContainer> DocScope<C> {
    /// Create a root scope with the system defaults (`Store::No`,
    /// `Index::Analyzed`).
    pub fn new(container: C) -> Self {
        Self::from_shared(Rc::new(RefCell::new(container)), DocumentDefaults::default())
    }

    /// Create a root scope with explicit default policies.
    pub fn with_defaults(container: C, store: Store, index: Index) -> Self {
        Self::from_shared(
            Rc::new(RefCell::new(container)),
            DocumentDefaults::new(store, index),
        )
    }

    /// Create a root scope over a container the caller already shares.
    pub fn from_shared(container: Rc<RefCell<C>>, defaults: DocumentDefaults) -> Self {
        DocScope {
            container,
            path: String::new(),
            parent: None,
            defaults,
        }
    }

    fn derive(&self, path: String, defaults: DocumentDefaults) -> Self {
        DocScope {
            container: Rc::clone(&self.container),
            path,
            parent: Some(Rc::new(self.clone())),
            defaults,
        }
    }

    /// Return a scope one level deeper, with `segment` appended to the path.
    pub fn descend(&self, segment: &str) -> Self {
        let path = if self.path.is_empty() {
            segment.to_string()
        } else {
            format!("{}.{}", self.path, segment)
        };
        self.derive(path, self.defaults)
    }

    /// Return a scope with a different default store policy.
    pub fn with_default_store(&self, store: Store) -> Self {
        self.derive(
            self.path.clone(),
            DocumentDefaults {
                store,
                ..self.defaults
            },
        )
    }

    /// Return a scope with a different default index policy.
    pub fn with_default_index(&self, index: Index) -> Self {
        self.derive(
            self.path.clone(),
            DocumentDefaults {
                index,
                ..self.defaults
            },
        )
    }

    /// The scope this one was derived from, or `None` for a root.
    pub fn parent(&self) -> Option<&DocScope<C>> {
        self.parent.as_deref()
    }

    /// Whether this scope was created directly over a container.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// The dotted path prefix; empty for a root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The default policies of this scope.
    pub fn defaults(&self) -> DocumentDefaults {
        self.defaults
    }

    /// The default store policy of this scope.
    pub fn default_store(&self) -> Store {
        self.defaults.store
    }

    /// The default index policy of this scope.
    pub fn default_index(&self) -> Index {
        self.defaults.index
    }

    /// The full name a field called `name` gets in this scope.
    pub fn qualified_name(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.path, name)
        }
    }

    /// Build a field from `source`, append it to the shared container and
    /// return the appended field.
    ///
    /// The returned handle borrows the container. While it is alive, adding
    /// a field through this or any related scope fails with
    /// [`QuickdocError::Borrow`](crate::error::QuickdocError::Borrow) and leaves the container unchanged; borrowing
    /// [`document()`](DocScope::document) directly panics as any `RefCell`
    /// does.
    ///
    /// The handle also borrows `self`, so a scope derived in the same
    /// expression must be bound first when the handle is kept:
    ///
    /// ```
    /// use quickdoc::document::Document;
    /// use quickdoc::scope::DocScope;
    ///
    /// let root = DocScope::new(Document::new());
    /// let meta = root.descend("meta");
    /// let mut lang = meta.text("lang", Some("en")).unwrap();
    /// lang.set_boost(2.0);
    /// drop(lang);
    ///
    /// assert_eq!(root.document().borrow().get("meta.lang").unwrap().boost(), 2.0);
    /// ```
    pub fn add(&self, name: &str, source: FieldSource) -> Result<RefMut<'_, Field>> {
        let name = self.qualified_name(name);
        let field = match source {
            FieldSource::Reader {
                reader,
                term_vector,
            } => Field::from_reader_with_term_vector(name, reader, term_vector),
            FieldSource::Tokens {
                tokens,
                term_vector,
            } => Field::from_tokens_with_term_vector(name, tokens, term_vector),
            FieldSource::Bytes { value, store } => Field::from_bytes(name, value, store)?,
            FieldSource::Text {
                value,
                store,
                index,
            } => Field::from_text(
                name,
                value.unwrap_or_else(|| NULL_PLACEHOLDER.to_string()),
                store.unwrap_or(self.defaults.store),
                index.unwrap_or(self.defaults.index),
            )?,
        };

        trace!(
            "Adding field {} (store: {:?}, index: {:?})",
            field.name(),
            field.store(),
            field.index()
        );

        let container = self.container.try_borrow_mut()?;
        Ok(RefMut::map(container, |container| container.push_field(field)))
    }

    /// Add a field read from a character stream.
    pub fn reader<R: Read + 'static>(&self, name: &str, reader: R) -> Result<RefMut<'_, Field>> {
        self.add(name, FieldSource::reader(reader))
    }

    /// Add a field read from a character stream, retaining term vectors.
    pub fn reader_with_term_vector<R: Read + 'static>(
        &self,
        name: &str,
        reader: R,
        term_vector: TermVector,
    ) -> Result<RefMut<'_, Field>> {
        self.add(
            name,
            FieldSource::Reader {
                reader: Box::new(reader),
                term_vector,
            },
        )
    }

    /// Add a pre-analyzed field.
    pub fn tokens(&self, name: &str, tokens: TokenStream) -> Result<RefMut<'_, Field>> {
        self.add(name, FieldSource::tokens(tokens))
    }

    /// Add a pre-analyzed field, retaining term vectors.
    pub fn tokens_with_term_vector(
        &self,
        name: &str,
        tokens: TokenStream,
        term_vector: TermVector,
    ) -> Result<RefMut<'_, Field>> {
        self.add(
            name,
            FieldSource::Tokens {
                tokens,
                term_vector,
            },
        )
    }

    /// Add a binary field.
    pub fn bytes<B: Into<Vec<u8>>>(
        &self,
        name: &str,
        value: B,
        store: Store,
    ) -> Result<RefMut<'_, Field>> {
        self.add(name, FieldSource::bytes(value, store))
    }

    /// Add a string field with explicit policies.
    pub fn text_with(
        &self,
        name: &str,
        value: Option<&str>,
        store: Store,
        index: Index,
    ) -> Result<RefMut<'_, Field>> {
        self.add(
            name,
            FieldSource::Text {
                value: value.map(str::to_string),
                store: Some(store),
                index: Some(index),
            },
        )
    }

    /// Add a string field using this scope's default policies.
    pub fn text(&self, name: &str, value: Option<&str>) -> Result<RefMut<'_, Field>> {
        self.add(name, FieldSource::text(value))
    }

    /// The shared container (the same one for every related scope).
    pub fn document(&self) -> Rc<RefCell<C>> {
        Rc::clone(&self.container)
    }
}

impl<C> Clone for DocScope<C> {
    fn clone(&self) -> Self {
        DocScope {
            container: Rc::clone(&self.container),
            path: self.path.clone(),
            parent: self.parent.clone(),
            defaults: self.defaults,
        }
    }
}

impl<C> fmt::Debug for DocScope<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocScope")
            .field("path", &self.path)
            .field("defaults", &self.defaults)
            .field("parent", &self.parent.as_ref().map(|parent| parent.path.as_str()))
            .finish_non_exhaustive()
    }
}
