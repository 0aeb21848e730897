//! Document structure: an append-only collection of fields.

use crate::document::field::Field;

/// A document represents a single item to be indexed.
///
/// Fields are kept in insertion order and a name may occur more than once
/// (multi-valued fields). Fields are never removed or replaced.
#[derive(Debug, Default)]
pub struct Document {
    /// The fields of this document, in insertion order
    fields: Vec<Field>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Document { fields: Vec::new() }
    }

    /// Append a field to the document.
    pub fn add(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Get the first field with the given name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Get all fields with the given name, in insertion order.
    pub fn get_fields<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Field> + 'a {
        self.fields.iter().filter(move |field| field.name() == name)
    }

    /// Get the string values of all fields with the given name.
    pub fn get_values(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|field| field.name() == name)
            .filter_map(Field::string_value)
            .collect()
    }

    /// Check if the document has a field with the given name.
    pub fn has_field(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get the distinct field names, in order of first occurrence.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for field in &self.fields {
            if !names.contains(&field.name()) {
                names.push(field.name());
            }
        }
        names
    }

    /// Get all fields.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consume the document, returning its fields.
    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }
}

/// An appendable container of fields.
///
/// This is the only capability a [`DocScope`](crate::scope::DocScope)
/// needs from the document it populates.
pub trait FieldContainer {
    /// Append a field and return a mutable reference to it.
    fn push_field(&mut self, field: Field) -> &mut Field;
}

impl FieldContainer for Document {
    fn push_field(&mut self, field: Field) -> &mut Field {
        self.fields.push_field(field)
    }
}

impl FieldContainer for Vec<Field> {
    fn push_field(&mut self, field: Field) -> &mut Field {
        let slot = self.len();
        self.push(field);
        &mut self[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::field::{Index, Store};

    fn text(name: &str, value: &str) -> Field {
        Field::from_text(name, value, Store::Yes, Index::Analyzed).unwrap()
    }

    #[test]
    fn test_document_creation() {
        let mut doc = Document::new();
        doc.add(text("title", "Rust Programming"));
        doc.add(text("author", "Jane Doe"));

        assert_eq!(doc.len(), 2);
        assert!(!doc.is_empty());
        assert!(doc.has_field("title"));
        assert!(!doc.has_field("year"));
        assert_eq!(doc.get("author").and_then(Field::string_value), Some("Jane Doe"));
    }

    #[test]
    fn test_multi_valued_fields() {
        let mut doc = Document::new();
        doc.add(text("tag", "rust"));
        doc.add(text("title", "Guide"));
        doc.add(text("tag", "search"));

        assert_eq!(doc.get_values("tag"), vec!["rust", "search"]);
        assert_eq!(doc.get_fields("tag").count(), 2);
        assert_eq!(doc.field_names(), vec!["tag", "title"]);
        assert_eq!(doc.get("tag").and_then(Field::string_value), Some("rust"));
    }

    #[test]
    fn test_values_outlive_lookup_name() {
        let mut doc = Document::new();
        doc.add(text("user.tag", "rust"));

        let values = {
            let name = format!("{}.{}", "user", "tag");
            doc.get_values(&name)
        };
        assert_eq!(values, vec!["rust"]);
    }

    #[test]
    fn test_push_field_returns_appended_field() {
        let mut doc = Document::new();
        doc.push_field(text("title", "Guide")).set_boost(3.0);

        assert_eq!(doc.fields()[0].boost(), 3.0);

        let fields = doc.into_fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name(), "title");
    }

    #[test]
    fn test_vec_container() {
        let mut fields: Vec<Field> = Vec::new();
        fields.push_field(text("a", "1"));
        let second = fields.push_field(text("b", "2"));
        assert_eq!(second.name(), "b");
        assert_eq!(fields.len(), 2);
    }
}
