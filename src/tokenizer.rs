//! Splits input text into word, number and marker tokens.

use itertools::Itertools;
use std::iter::Peekable;
use std::str::Chars;
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::directive;

/// Tokenize `text` into an ordered list of tokens.
///
/// A token is a maximal run of letters and numbers, or one of the directive
/// marker literals (see [`directive::markers`]). Every other character is a
/// separator and is dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::new(text).collect()
}

/// Iterator over the tokens of a string.
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
        }
    }

    /// Consume a marker literal starting at the current position, if any.
    fn take_marker(&mut self) -> Option<&'static str> {
        // No marker is a prefix of another, so the first match is the only one.
        let marker = directive::markers().find(|m| {
            let len = m.chars().count();
            self.chars.clone().take(len).eq(m.chars())
        })?;
        for _ in 0..marker.chars().count() {
            self.chars.next();
        }
        Some(marker)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let &ch = self.chars.peek()?;
            if is_word_char(ch) {
                return Some(self.chars.peeking_take_while(|&c| is_word_char(c)).collect());
            }
            if let Some(marker) = self.take_marker() {
                return Some(marker.to_string());
            }
            self.chars.next();
        }
    }
}

/// Letters and numbers by Unicode general category (`L*` and `N*`).
///
/// Combining marks are not letters, even where they are `Alphabetic`.
pub fn is_word_char(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}
