use crate::lang::{LetterCountMode, Lexicon};
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Does `c` count as a letter under [`LetterCountMode::LatinFiltered`]?
///
/// ASCII letters, Latin-1 Supplement and Latin Extended-A letters
/// (U+00C0..=U+017F), Hiragana and Katakana, CJK Extension A, CJK Unified
/// Ideographs and CJK Compatibility Ideographs. Everything else (spaces,
/// hyphens, apostrophes, digits, punctuation, combining marks) is dropped.
#[inline(always)]
pub const fn is_countable_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches!(c as u32,
        0x00C0..=0x017F | // Latin-1 letters + Latin Extended-A
        0x3040..=0x30FF | // Hiragana + Katakana
        0x3400..=0x4DBF | // CJK Extension A
        0x4E00..=0x9FFF | // CJK Unified Ideographs
        0xF900..=0xFAFF   // CJK Compatibility Ideographs
    )
}

/// Number of letters in `word` under the lexicon's counting rule.
///
/// `word` is expected to be trimmed and lowercased already. Never fails;
/// the empty string has zero letters.
#[inline]
pub fn count_letters(word: &str, lexicon: &Lexicon) -> usize {
    match lexicon.letter_count {
        LetterCountMode::RawCodepoints => word.chars().count(),
        LetterCountMode::LatinFiltered => {
            if word.is_ascii() {
                return word.bytes().filter(u8::is_ascii_alphabetic).count();
            }
            word.chars().filter(|&c| is_countable_letter(c)).count()
        }
    }
}

/// General_Category M (`Mn`, `Mc`, `Me`): accents, tone marks, vowel
/// signs, kana voicing marks.
#[inline]
pub fn is_combining_mark(c: char) -> bool {
    if c.is_ascii() {
        return false;
    }
    c.general_category_group() == GeneralCategoryGroup::Mark
}

/// General_Category L, which is narrower than `char::is_alphabetic`.
#[inline]
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    c.general_category_group() == GeneralCategoryGroup::Letter
}
