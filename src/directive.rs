//! Inline directives and the rules they apply to the output buffer.
//!
//! A directive is a literal marker token such as `(hex)`. It is never emitted
//! itself; instead its rule may rewrite the most recently emitted token.

use phf::{Map, phf_map};

/// The closed set of directive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `(hex)`: previous token from base 16 to base 10.
    HexToDecimal,
    /// `(bin)`
    BinaryToDecimal,
    /// `(up)`
    Uppercase,
    /// `(low)`
    Lowercase,
    /// `(cap)`
    Capitalize,
    /// `'`
    Quotation,
    /// `.` `,` `!` `?` `:` `;`
    Punctuation,
}

/// Marker literals and the directive each one triggers.
/// Keep parenthesised markers first, then single characters.
static MARKER_TO_DIRECTIVE: Map<&'static str, Directive> = phf_map! {
    "(hex)" => Directive::HexToDecimal,
    "(bin)" => Directive::BinaryToDecimal,
    "(up)" => Directive::Uppercase,
    "(low)" => Directive::Lowercase,
    "(cap)" => Directive::Capitalize,
    "'" => Directive::Quotation,
    "." => Directive::Punctuation,
    "," => Directive::Punctuation,
    "!" => Directive::Punctuation,
    "?" => Directive::Punctuation,
    ":" => Directive::Punctuation,
    ";" => Directive::Punctuation,
};

/// Look up the directive for a token, if it is a marker.
pub fn lookup(token: &str) -> Option<Directive> {
    MARKER_TO_DIRECTIVE.get(token).copied()
}

/// All marker literals, in no particular order.
pub fn markers() -> impl Iterator<Item = &'static str> {
    MARKER_TO_DIRECTIVE.keys().copied()
}

/// What a rule did to the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The output tail was replaced.
    Rewrote,
    /// Nothing changed.
    Unchanged,
}

/// The view of a run a rule is allowed to see.
///
/// Rules can read the input tokens that precede the directive and replace
/// the last output token. They cannot append or remove output.
pub struct RuleContext<'a> {
    tokens: &'a [String],
    index: usize,
    tail: Option<&'a mut String>,
}

impl<'a> RuleContext<'a> {
    pub fn new(tokens: &'a [String], index: usize, tail: Option<&'a mut String>) -> Self {
        Self {
            tokens,
            index,
            tail,
        }
    }

    /// The input token immediately before the directive.
    pub fn previous(&self) -> Option<&str> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(String::as_str)
    }

    /// Replace the last output token. Returns `false` when the output is empty.
    pub fn replace_tail(&mut self, replacement: String) -> bool {
        match self.tail.as_deref_mut() {
            Some(tail) => {
                *tail = replacement;
                true
            }
            None => false,
        }
    }
}

impl Directive {
    /// Apply this directive's rule.
    pub fn apply(self, ctx: &mut RuleContext<'_>) -> RuleOutcome {
        match self {
            Directive::HexToDecimal => hex_to_decimal(ctx),
            // Not implemented: these markers are consumed and leave the output alone.
            Directive::BinaryToDecimal
            | Directive::Uppercase
            | Directive::Lowercase
            | Directive::Capitalize
            | Directive::Quotation
            | Directive::Punctuation => RuleOutcome::Unchanged,
        }
    }
}

fn hex_to_decimal(ctx: &mut RuleContext<'_>) -> RuleOutcome {
    let Some(value) = ctx.previous().and_then(parse_hex) else {
        return RuleOutcome::Unchanged;
    };
    if ctx.replace_tail(value.to_string()) {
        RuleOutcome::Rewrote
    } else {
        RuleOutcome::Unchanged
    }
}

/// Parse `s` as a signed 64-bit base-16 integer.
///
/// Accepts an optional leading `+` or `-`. No `0x` prefix, no underscores.
pub fn parse_hex(s: &str) -> Option<i64> {
    i64::from_str_radix(s, 16).ok()
}
