//! Tokenizer: an ordered keyword sequence with a read cursor.
//!
//! Handlers only observe a `Tokenizer`; they never move its cursor. The
//! cursor is advanced by whoever owns the sequence, between dispatches.

use tracing::trace;

use crate::error::{CmdError, CmdResult};
use crate::model::keyword::Keyword;

/// Ordered, finite sequence of keywords plus a read cursor.
///
/// When the sequence is non-empty the cursor always points at a valid token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenizer {
    keywords: Vec<Keyword>,
    cursor: usize,
}

impl Tokenizer {
    /// Create an empty sequence
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sequence from whole words, one keyword per word.
    pub fn from_words<'a, I>(words: I) -> CmdResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let keywords = words
            .into_iter()
            .map(str::parse::<Keyword>)
            .collect::<CmdResult<Vec<Keyword>>>()?;

        trace!(count = keywords.len(), "Tokenized input");

        Ok(Self::from(keywords))
    }

    /// Split `input` on whitespace and map each word to a keyword.
    pub fn parse(input: &str) -> CmdResult<Self> {
        Self::from_words(input.split_whitespace())
    }

    /// True iff a token exists beyond the cursor.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.cursor + 1 < self.keywords.len()
    }

    /// Token at the cursor.
    ///
    /// Fails with [`CmdError::OutOfRange`] on an empty sequence.
    pub fn current(&self) -> CmdResult<Keyword> {
        self.keywords
            .get(self.cursor)
            .copied()
            .ok_or_else(|| CmdError::out_of_range(self.cursor, self.keywords.len()))
    }

    /// Token after the cursor, if any.
    #[must_use]
    pub fn peek(&self) -> Option<Keyword> {
        if !self.has_more() {
            return None;
        }

        self.keywords.get(self.cursor + 1).copied()
    }

    /// True iff a next token exists and equals `keyword`. Never fails.
    #[must_use]
    pub fn peek_equals(&self, keyword: Keyword) -> bool {
        self.peek() == Some(keyword)
    }

    /// Move the cursor forward one token. Returns `false` at the last token.
    pub fn advance(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }

        self.cursor += 1;
        true
    }

    /// Rewind the cursor to the first token.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }
}

impl From<Vec<Keyword>> for Tokenizer {
    fn from(keywords: Vec<Keyword>) -> Self {
        Self {
            keywords,
            cursor: 0,
        }
    }
}

impl FromIterator<Keyword> for Tokenizer {
    fn from_iter<T: IntoIterator<Item = Keyword>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<Vec<Keyword>>())
    }
}
