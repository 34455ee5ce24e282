//! The rewrite engine.
//!
//! Walks the token sequence once, left to right. Plain tokens are appended to
//! an [`OutputBuffer`]; directive markers are handed to their rule instead,
//! which may replace the last token appended so far.

use tracing::{debug, trace};

use crate::directive::{self, RuleContext, RuleOutcome};

/// The tokens emitted so far during one rewrite run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputBuffer {
    tokens: Vec<String>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: String) {
        self.tokens.push(token);
    }

    /// Mutable access to the last token, the only slot rules may touch.
    pub fn tail_mut(&mut self) -> Option<&mut String> {
        self.tokens.last_mut()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

/// Counters describing one rewrite run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RewriteStats {
    pub tokens_read: usize,
    pub tokens_written: usize,
    /// Directives whose rule changed the output.
    pub directives_applied: usize,
    /// Directives consumed without changing anything.
    pub directives_unchanged: usize,
}

/// Result of a rewrite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub tokens: Vec<String>,
    pub stats: RewriteStats,
}

/// Rewrite `tokens`, applying every directive marker to the output so far.
///
/// Never fails: a directive whose lookback does not fit is simply consumed.
pub fn rewrite(tokens: &[String]) -> Rewritten {
    let mut output = OutputBuffer::new();
    let mut stats = RewriteStats {
        tokens_read: tokens.len(),
        ..RewriteStats::default()
    };

    for (index, token) in tokens.iter().enumerate() {
        let Some(directive) = directive::lookup(token) else {
            output.push(token.clone());
            continue;
        };
        let mut ctx = RuleContext::new(tokens, index, output.tail_mut());
        match directive.apply(&mut ctx) {
            RuleOutcome::Rewrote => {
                stats.directives_applied += 1;
                debug!(?directive, index, tail = ?output.as_slice().last(), "directive applied");
            }
            RuleOutcome::Unchanged => {
                stats.directives_unchanged += 1;
                trace!(?directive, index, "directive left output unchanged");
            }
        }
    }

    stats.tokens_written = output.len();
    Rewritten {
        tokens: output.into_tokens(),
        stats,
    }
}
