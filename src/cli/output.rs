//! Output formatting for CLI commands.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, QuickdocArgs};
use crate::document::document::Document;
use crate::document::field::{Field, FieldValue};
use crate::error::Result;

/// Result structure for the flatten command.
#[derive(Debug, Serialize, Deserialize)]
pub struct FlattenResult {
    pub input: String,
    pub documents_converted: usize,
    pub documents: Vec<FlattenedDocument>,
}

/// One converted document.
#[derive(Debug, Serialize, Deserialize)]
pub struct FlattenedDocument {
    pub fields: Vec<FieldSummary>,
}

/// Printable view of a single field.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FieldSummary {
    pub name: String,
    pub value: String,
    pub stored: bool,
    pub indexed: bool,
    pub tokenized: bool,
}

impl From<&Field> for FieldSummary {
    fn from(field: &Field) -> Self {
        let value = match field.value() {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Binary(data) => format!("<{} bytes>", data.len()),
            FieldValue::Reader(_) | FieldValue::Tokens(_) => "<stream>".to_string(),
        };

        FieldSummary {
            name: field.name().to_string(),
            value,
            stored: field.is_stored(),
            indexed: field.is_indexed(),
            tokenized: field.is_tokenized(),
        }
    }
}

impl From<&Document> for FlattenedDocument {
    fn from(document: &Document) -> Self {
        FlattenedDocument {
            fields: document.fields().iter().map(FieldSummary::from).collect(),
        }
    }
}

/// Output a flatten result in the requested format.
pub fn output_result(message: &str, result: &FlattenResult, args: &QuickdocArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("{message}");
                println!();
            }
            print!("{}", format_human(result));
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Render a flatten result as indented `name = value [flags]` lines.
pub fn format_human(result: &FlattenResult) -> String {
    let mut out = String::new();
    for (i, document) in result.documents.iter().enumerate() {
        let _ = writeln!(out, "Document {}:", i + 1);
        for field in &document.fields {
            let _ = writeln!(
                out,
                "  {} = {} [{}]",
                field.name,
                field.value,
                format_flags(field)
            );
        }
    }
    out
}

fn format_flags(field: &FieldSummary) -> String {
    let mut flags = Vec::new();
    if field.stored {
        flags.push("stored");
    }
    if field.indexed {
        flags.push("indexed");
    }
    if field.tokenized {
        flags.push("tokenized");
    }
    flags.join(", ")
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &QuickdocArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::field::{Index, Store};
    use crate::scope::DocScope;

    #[test]
    fn test_field_summary() {
        let root = DocScope::new(Document::new());
        root.descend("user").text("name", Some("Ada")).unwrap();
        root.bytes("blob", vec![0u8; 4], Store::Yes).unwrap();

        let doc = root.document();
        let summary = FlattenedDocument::from(&*doc.borrow());

        assert_eq!(
            summary.fields[0],
            FieldSummary {
                name: "user.name".to_string(),
                value: "Ada".to_string(),
                stored: false,
                indexed: true,
                tokenized: true,
            }
        );
        assert_eq!(summary.fields[1].value, "<4 bytes>");
        assert!(!summary.fields[1].indexed);
    }

    #[test]
    fn test_format_human() {
        let root = DocScope::with_defaults(Document::new(), Store::Yes, Index::NotAnalyzed);
        root.text("id", Some("a-1")).unwrap();

        let doc = root.document();
        let result = FlattenResult {
            input: "in.jsonl".to_string(),
            documents_converted: 1,
            documents: vec![FlattenedDocument::from(&*doc.borrow())],
        };

        assert_eq!(format_human(&result), "Document 1:\n  id = a-1 [stored, indexed]\n");
    }
}
