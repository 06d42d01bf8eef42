//! Caller-side checks for user-supplied words.
//!
//! The engine accepts any string; these rules keep text boxes and URL
//! segments to something that reads as a word.

use crate::unicode::{is_combining_mark, is_letter};
use thiserror::Error;

/// Longest accepted input, in `char`s.
pub const MAX_INPUT_CHARS: usize = 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("word is empty")]
    Empty,
    #[error("word has {len} characters, at most {max} allowed")]
    TooLong { len: usize, max: usize },
    #[error("character {ch:?} at position {pos} is not allowed")]
    InvalidChar { ch: char, pos: usize },
}

/// Letters (`\p{L}`), marks (`\p{M}`), whitespace, hyphens and apostrophes only;
/// non-blank and at most [`MAX_INPUT_CHARS`] long.
pub fn validate_input(word: &str) -> Result<(), InputError> {
    if word.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let len = word.chars().count();
    if len > MAX_INPUT_CHARS {
        return Err(InputError::TooLong {
            len,
            max: MAX_INPUT_CHARS,
        });
    }

    match word.chars().enumerate().find(|&(_, c)| !is_allowed(c)) {
        Some((pos, ch)) => Err(InputError::InvalidChar { ch, pos }),
        None => Ok(()),
    }
}

#[inline(always)]
fn is_allowed(c: char) -> bool {
    is_letter(c) || c.is_whitespace() || c == '-' || c == '\'' || is_combining_mark(c)
}
