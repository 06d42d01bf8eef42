//! Spelling a letter count as a number word.
//!
//! Only `0..=100` has word forms. Anything larger falls back to its decimal
//! digits, which is not an error: the path simply carries a numeral.

use crate::lang::{CompositionRule, Lexicon, LexiconError};
use std::borrow::Cow;
use tracing::{debug, error};

/// Spell `n` in the lexicon's language.
///
/// Table words are borrowed; composed `21..=99` words and the digit
/// fallback allocate. A missing table entry is a malformed lexicon and is
/// reported as [`LexiconError::MissingNumberWord`].
pub fn number_to_word(n: usize, lexicon: &Lexicon) -> Result<Cow<'static, str>, LexiconError> {
    match n {
        0..=20 | 100 => lookup(lexicon, n).map(Cow::Borrowed),
        21..=99 => compose(n, lexicon).map(Cow::Owned),
        _ => {
            debug!(
                lang = lexicon.code,
                n, "no number word above 100, using digits"
            );
            Ok(Cow::Owned(n.to_string()))
        }
    }
}

fn compose(n: usize, lexicon: &Lexicon) -> Result<String, LexiconError> {
    let tens = n / 10 * 10;
    let ones = n % 10;

    if lexicon.composition == CompositionRule::Positional {
        let mut out = String::with_capacity(12);
        out.push_str(lookup(lexicon, tens / 10)?);
        out.push_str(lookup(lexicon, 10)?);
        if ones > 0 {
            out.push_str(lookup(lexicon, ones)?);
        }
        return Ok(out);
    }

    let tens_word = lookup(lexicon, tens)?;
    if ones == 0 {
        return Ok(tens_word.to_string());
    }
    let ones_word = lookup(lexicon, ones)?;
    let sep = match lexicon.composition {
        CompositionRule::Hyphenated => "-",
        _ => "",
    };

    let mut out = String::with_capacity(tens_word.len() + sep.len() + ones_word.len());
    out.push_str(tens_word);
    out.push_str(sep);
    out.push_str(ones_word);
    Ok(out)
}

#[inline]
fn lookup(lexicon: &Lexicon, value: usize) -> Result<&'static str, LexiconError> {
    lexicon.require(value).inspect_err(|e| {
        error!(lang = lexicon.code, value, "malformed lexicon: {e}");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{
        NumberWord,
        data::{DEU, ENG, JPN, NLD, ZHO},
        get_lexicon,
    };

    fn en(n: usize) -> String {
        number_to_word(n, get_lexicon(ENG)).unwrap().into_owned()
    }

    #[test]
    fn english_table_and_composition() {
        assert_eq!(en(0), "zero");
        assert_eq!(en(4), "four");
        assert_eq!(en(20), "twenty");
        assert_eq!(en(21), "twenty-one");
        assert_eq!(en(40), "forty");
        assert_eq!(en(99), "ninety-nine");
        assert_eq!(en(100), "hundred");
    }

    #[test]
    fn table_words_are_borrowed() {
        let w = number_to_word(7, get_lexicon(ENG)).unwrap();
        assert!(matches!(w, Cow::Borrowed("seven")));
        let w = number_to_word(30, get_lexicon(ENG)).unwrap();
        assert_eq!(w, "thirty");
    }

    #[test]
    fn dutch_concatenates() {
        let nl = get_lexicon(NLD);
        assert_eq!(number_to_word(21, nl).unwrap(), "twintigeen");
        assert_eq!(number_to_word(50, nl).unwrap(), "vijftig");
    }

    #[test]
    fn german_hyphenates() {
        let de = get_lexicon(DEU);
        assert_eq!(number_to_word(35, de).unwrap(), "dreißig-fünf");
        assert_eq!(number_to_word(12, de).unwrap(), "zwölf");
    }

    #[test]
    fn positional_numerals() {
        let ja = get_lexicon(JPN);
        assert_eq!(number_to_word(21, ja).unwrap(), "二十一");
        assert_eq!(number_to_word(30, ja).unwrap(), "三十");
        assert_eq!(number_to_word(99, ja).unwrap(), "九十九");
        assert_eq!(number_to_word(100, ja).unwrap(), "百");
        assert_eq!(number_to_word(100, get_lexicon(ZHO)).unwrap(), "一百");
    }

    #[test]
    fn positional_tens_match_table() {
        for lang in [JPN, ZHO] {
            let lex = get_lexicon(lang);
            for tens in (30..=90).step_by(10) {
                assert_eq!(
                    number_to_word(tens, lex).unwrap(),
                    lex.number_word(tens).unwrap()
                );
            }
        }
    }

    #[test]
    fn above_hundred_falls_back_to_digits() {
        assert_eq!(en(101), "101");
        assert_eq!(en(12345), "12345");
    }

    static NO_SEVEN: &[NumberWord] = &[
        NumberWord { value: 20, word: "twenty" },
        NumberWord { value: 70, word: "seventy" },
    ];

    #[test]
    fn missing_entry_fails_fast() {
        let broken = Lexicon {
            number_words: NO_SEVEN,
            ..*get_lexicon(ENG)
        };
        assert_eq!(
            number_to_word(7, &broken),
            Err(LexiconError::MissingNumberWord {
                code: "en",
                value: 7
            })
        );
        assert_eq!(number_to_word(70, &broken).unwrap(), "seventy");
        assert_eq!(
            number_to_word(77, &broken),
            Err(LexiconError::MissingNumberWord {
                code: "en",
                value: 7
            })
        );
        // digits never touch the table
        assert_eq!(number_to_word(700, &broken).unwrap(), "700");
    }
}
