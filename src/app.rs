//! The batch pipeline: read, tokenize, rewrite, write.

use std::path::PathBuf;

use tracing::info;

use crate::error::Result;
use crate::files;
use crate::rewrite::{RewriteStats, rewrite};
use crate::tokenizer::tokenize;

/// Where one run reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Rewrite the text in `text` and return the output tokens.
pub fn rewrite_text(text: &str) -> Vec<String> {
    rewrite(&tokenize(text)).tokens
}

/// Run the whole pipeline for `config`.
///
/// The output file is only created once the input has been read, so a read
/// failure leaves it untouched.
pub fn run(config: &RunConfig) -> Result<RewriteStats> {
    let text = files::read_text(&config.input)?;
    info!(path = %config.input.display(), bytes = text.len(), "read input");

    let tokens = tokenize(&text);
    let rewritten = rewrite(&tokens);
    info!(
        tokens_read = rewritten.stats.tokens_read,
        tokens_written = rewritten.stats.tokens_written,
        directives_applied = rewritten.stats.directives_applied,
        directives_unchanged = rewritten.stats.directives_unchanged,
        "rewrote tokens"
    );

    files::write_file(&config.output, &rewritten.tokens)?;
    info!(path = %config.output.display(), "wrote output");
    Ok(rewritten.stats)
}
