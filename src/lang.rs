pub mod data;

use crate::{spell::number_to_word, unicode::count_letters};
use thiserror::Error;

pub use data::{ENG, all_langs, from_code, get_lexicon, get_lexicon_by_code};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Resolve a browser-style locale tag (`de-AT`, `nl_BE`, `EN`) to a
    /// supported language by its primary subtag.
    pub fn from_locale(locale: &str) -> Option<Lang> {
        let primary = locale
            .split(['-', '_'])
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())?;
        from_code(primary)
    }

    #[inline]
    pub fn from_locale_or_default(locale: &str) -> Lang {
        Self::from_locale(locale).unwrap_or(DEFAULT_LANG)
    }
}

pub const DEFAULT_LANG: Lang = ENG;

/// Every lexicon must cover these keys; `21..=99` is composed.
pub const REQUIRED_NUMBER_KEYS: [usize; 29] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 30, 40, 50, 60, 70,
    80, 90, 100,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberWord {
    pub value: usize,
    pub word: &'static str,
}

/// How a tens word and a ones word combine for `21..=99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionRule {
    /// `twenty-one`
    Hyphenated,
    /// `twintigeen`
    Concatenated,
    /// `二十一`: digit word, ten word, ones word.
    Positional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCountMode {
    /// Only Latin, extended Latin, kana and CJK ideographs count.
    LatinFiltered,
    /// Every `char` counts; used where a letter is a character.
    RawCodepoints,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexiconError {
    #[error("lexicon `{code}` has no number word for {value}")]
    MissingNumberWord { code: &'static str, value: usize },

    #[error("lexicon `{code}`: magic word `{word}` has {counted} letters, table says {expected}")]
    MagicValueMismatch {
        code: &'static str,
        word: &'static str,
        expected: usize,
        counted: usize,
    },

    #[error("lexicon `{code}`: {value} spells `{spelled}`, not the magic word `{word}`")]
    NotFixedPoint {
        code: &'static str,
        word: &'static str,
        value: usize,
        spelled: String,
    },
}

/// Static per-language data driving number spelling and letter counting.
#[derive(Clone, Copy, Debug)]
pub struct Lexicon {
    pub code: &'static str,
    pub number_words: &'static [NumberWord],
    pub magic_word: &'static str,
    pub magic_value: usize,
    pub composition: CompositionRule,
    pub letter_count: LetterCountMode,
    pub examples: &'static [&'static str],
}

impl Lexicon {
    #[inline]
    pub fn number_word(&self, value: usize) -> Option<&'static str> {
        self.number_words
            .iter()
            .find(|m| m.value == value)
            .map(|m| m.word)
    }

    /// Like [`Lexicon::number_word`], but a miss is a table defect.
    #[inline]
    pub fn require(&self, value: usize) -> Result<&'static str, LexiconError> {
        self.number_word(value)
            .ok_or(LexiconError::MissingNumberWord {
                code: self.code,
                value,
            })
    }

    #[inline(always)]
    pub fn is_magic(&self, word: &str) -> bool {
        word == self.magic_word
    }

    #[inline(always)]
    pub fn examples(&self) -> &'static [&'static str] {
        self.examples
    }

    /// Check the table covers every required key and that the magic word is
    /// a genuine fixed point of count-then-spell.
    pub fn validate(&self) -> Result<(), LexiconError> {
        for value in REQUIRED_NUMBER_KEYS {
            self.require(value)?;
        }

        let counted = count_letters(self.magic_word, self);
        if counted != self.magic_value {
            return Err(LexiconError::MagicValueMismatch {
                code: self.code,
                word: self.magic_word,
                expected: self.magic_value,
                counted,
            });
        }

        let spelled = number_to_word(counted, self)?;
        if spelled != self.magic_word {
            return Err(LexiconError::NotFixedPoint {
                code: self.code,
                word: self.magic_word,
                value: counted,
                spelled: spelled.into_owned(),
            });
        }
        Ok(())
    }
}
