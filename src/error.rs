//! Error types for the quickdoc library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`QuickdocError`] enum.
//!
//! # Examples
//!
//! ```
//! use quickdoc::error::{QuickdocError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(QuickdocError::field("binary values can't be unstored"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::cell::BorrowMutError;
use std::io;

use thiserror::Error;

/// The main error type for quickdoc operations.
#[derive(Error, Debug)]
pub enum QuickdocError {
    /// I/O errors (reading input files, config files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Field construction errors (invalid store/index/term vector combinations)
    #[error("Field error: {0}")]
    Field(String),

    /// Input parsing errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// The shared container is still borrowed (a returned field is alive)
    #[error("Container busy: {0}")]
    Borrow(#[from] BorrowMutError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with QuickdocError.
pub type Result<T> = std::result::Result<T, QuickdocError>;

impl QuickdocError {
    /// Create a new field error.
    pub fn field<S: Into<String>>(msg: S) -> Self {
        QuickdocError::Field(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        QuickdocError::Parse(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        QuickdocError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        QuickdocError::Other(msg.into())
    }

    /// Prefix the message with the input line the error was raised on.
    ///
    /// Message-carrying variants keep their kind; anything else becomes
    /// [`QuickdocError::Other`].
    pub fn at_line(self, line: usize) -> Self {
        match self {
            QuickdocError::Field(msg) => QuickdocError::Field(format!("line {line}: {msg}")),
            QuickdocError::Parse(msg) => QuickdocError::Parse(format!("line {line}: {msg}")),
            QuickdocError::Config(msg) => QuickdocError::Config(format!("line {line}: {msg}")),
            QuickdocError::Other(msg) => QuickdocError::Other(format!("line {line}: {msg}")),
            other => QuickdocError::Other(format!("line {line}: {other}")),
        }
    }
}
