use crate::{lang::Lexicon, stage::Stage};
use std::{borrow::Cow, sync::LazyLock};

use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};

// ── ICU4X ──
static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizer::new_nfc);

/// Unicode Normalization Form C (Canonical Composition)
///
/// Under raw code-point counting a decomposed `が` would be two letters;
/// composing first keeps the count stable across input methods.
#[derive(Default, Clone, Copy)]
pub struct Nfc;

impl Stage for Nfc {
    fn name(&self) -> &'static str {
        "nfc"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Lexicon) -> bool {
        if text.is_ascii() {
            return false;
        }
        !ICU4X_NFC.is_normalized(text)
    }

    #[inline(always)]
    fn apply<'a>(&self, text: Cow<'a, str>, _: &Lexicon) -> Cow<'a, str> {
        Cow::Owned(ICU4X_NFC.normalize(text.as_ref()).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        lang::{data::JPN, get_lexicon},
        unicode::count_letters,
    };

    #[test]
    fn composes_kana_voicing_mark() {
        let lex = get_lexicon(JPN);
        // か + COMBINING KATAKANA-HIRAGANA VOICED SOUND MARK
        let decomposed = "\u{304B}\u{3099}";
        assert!(Nfc.needs_apply(decomposed, lex));
        let composed = Nfc.apply(Cow::Borrowed(decomposed), lex);
        assert_eq!(composed, "が");
        assert_eq!(count_letters(&composed, lex), 1);
    }

    #[test]
    fn composed_text_is_left_alone() {
        let lex = get_lexicon(JPN);
        assert!(!Nfc.needs_apply("がっこう", lex));
        assert!(!Nfc.needs_apply("plain ascii", lex));
    }
}
