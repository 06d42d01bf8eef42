use crate::{lang::Lexicon, stage::Stage};
use std::borrow::Cow;

/// Unicode lowercasing; magic words are stored lowercase.
pub struct LowerCase;

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Lexicon) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_uppercase());
        }
        text.chars().any(|c| c.to_lowercase().next() != Some(c))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _: &Lexicon) -> Cow<'a, str> {
        if text.is_ascii() {
            let mut owned = text.into_owned();
            owned.make_ascii_lowercase();
            return Cow::Owned(owned);
        }
        Cow::Owned(text.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{ENG, data::DEU, get_lexicon};

    #[test]
    fn ascii_fast_path() {
        let lex = get_lexicon(ENG);
        assert!(LowerCase.needs_apply("HeLLo", lex));
        let out = LowerCase.apply(Cow::Borrowed("HeLLo"), lex);
        assert_eq!(out, "hello");
    }

    #[test]
    fn already_lower_is_skipped() {
        let lex = get_lexicon(ENG);
        assert!(!LowerCase.needs_apply("hello world", lex));
        assert!(!LowerCase.needs_apply("zwölf", get_lexicon(DEU)));
    }

    #[test]
    fn unicode_uppercase() {
        let lex = get_lexicon(DEU);
        assert!(LowerCase.needs_apply("ZWÖLF", lex));
        assert_eq!(LowerCase.apply(Cow::Borrowed("ZWÖLF"), lex), "zwölf");
    }
}
