//! Text analysis support for pre-tokenized fields.
//!
//! Fields built from a token stream skip analysis at indexing time. This
//! module holds the token types such fields carry and a couple of simple
//! tokenizers to produce them.

pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use tokenizer::*;
