//! Whitespace tokenization shared by the vocabulary builder and the
//! co-occurrence accumulator.
//!
//! Tokens are maximal runs of non-whitespace bytes, truncated to
//! [`MAX_TOKEN_LEN`] bytes; carriage returns are discarded; a newline with
//! no accumulated token bytes is surfaced as an explicit [`Token::LineBreak`]
//! so callers that track a per-line window (the accumulator) can reset it.
//! A newline that ends a word is surfaced as the word followed by a
//! separate `LineBreak` on the next call.

use std::collections::VecDeque;
use std::io::{self, Read};

/// Maximum stored length of a token; longer tokens are truncated but the
/// remainder of the source token is still consumed up to the next
/// delimiter.
pub const MAX_TOKEN_LEN: usize = 1000;

/// One tokenization event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A maximal run of non-whitespace bytes, truncated to `MAX_TOKEN_LEN`.
    Word(Vec<u8>),
    /// A newline was seen; signals the end of the current line.
    LineBreak,
}

/// Pulls [`Token`] events from a byte stream.
#[derive(Debug)]
pub struct Tokenizer<R> {
    bytes: io::Bytes<R>,
    pending: VecDeque<Token>,
}

impl<R: Read> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: reader.bytes(),
            pending: VecDeque::new(),
        }
    }

    /// Reads the next tokenization event, or `None` at EOF.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if a read fails.
    pub fn next_token(&mut self) -> io::Result<Option<Token>> {
        if let Some(token) = self.pending.pop_front() {
            return Ok(Some(token));
        }

        let mut word: Vec<u8> = Vec::new();

        loop {
            match self.next_byte()? {
                None => {
                    return Ok((!word.is_empty()).then_some(Token::Word(word)));
                }
                Some(b'\r') => {}
                Some(b' ' | b'\t') => {
                    if !word.is_empty() {
                        return Ok(Some(Token::Word(word)));
                    }
                }
                Some(b'\n') => {
                    if word.is_empty() {
                        return Ok(Some(Token::LineBreak));
                    }
                    self.pending.push_back(Token::LineBreak);
                    return Ok(Some(Token::Word(word)));
                }
                Some(b) => {
                    if word.len() < MAX_TOKEN_LEN {
                        word.push(b);
                    }
                }
            }
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        self.bytes.next().transpose()
    }
}
