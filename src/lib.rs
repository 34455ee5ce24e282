//! Token-stream rewriting of plain text.
//!
//! Text is split into word and number tokens, and inline directive markers
//! rewrite the token emitted just before them.
//!
//! # Example
//!
//! ```rust
//! use textmod::{rewrite, tokenize};
//!
//! let tokens = tokenize("It has 1E (hex) files.");
//! assert_eq!(tokens, ["It", "has", "1E", "(hex)", "files", "."]);
//!
//! let rewritten = rewrite(&tokens);
//! assert_eq!(rewritten.tokens, ["It", "has", "30", "files"]);
//! ```

mod app;
pub mod directive;
mod error;
pub mod files;
mod rewrite;
mod tokenizer;

pub use app::{RunConfig, rewrite_text, run};
pub use directive::{Directive, RuleContext, RuleOutcome};
pub use error::{Error, Result};
pub use rewrite::{OutputBuffer, RewriteStats, Rewritten, rewrite};
pub use tokenizer::{Tokenizer, is_word_char, tokenize};
