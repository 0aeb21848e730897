//! Command implementations for the quickdoc CLI.

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::converter::DocumentConverter;
use crate::document::converter::jsonl::JsonlDocumentConverter;
use crate::document::defaults::DocumentDefaults;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: QuickdocArgs) -> Result<()> {
    match &args.command {
        Command::Flatten(flatten_args) => flatten(flatten_args, &args),
    }
}

/// Resolve the default policies from the config file and flag overrides.
pub fn resolve_defaults(args: &FlattenArgs) -> Result<DocumentDefaults> {
    let mut defaults = match &args.config {
        Some(path) => DocumentDefaults::load(path)?,
        None => DocumentDefaults::default(),
    };

    if let Some(store) = args.store {
        defaults.store = store.into();
    }
    if let Some(index) = args.index {
        defaults.index = index.into();
    }

    Ok(defaults)
}

/// Convert a JSONL file into flattened documents.
pub fn flatten_file(args: &FlattenArgs) -> Result<FlattenResult> {
    let defaults = resolve_defaults(args)?;
    debug!("Using document defaults {:?}", defaults);

    let converter = JsonlDocumentConverter::with_defaults(defaults);
    let mut documents = Vec::new();
    for document in converter.convert(&args.input)? {
        if let Some(limit) = args.limit
            && documents.len() >= limit
        {
            break;
        }
        documents.push(FlattenedDocument::from(&document?));
    }

    Ok(FlattenResult {
        input: args.input.to_string_lossy().to_string(),
        documents_converted: documents.len(),
        documents,
    })
}

fn flatten(args: &FlattenArgs, cli_args: &QuickdocArgs) -> Result<()> {
    let result = flatten_file(args)?;
    info!(
        "Flattened {} documents from {}",
        result.documents_converted, result.input
    );

    output_result(
        &format!("Flattened {} documents", result.documents_converted),
        &result,
        cli_args,
    )
}
