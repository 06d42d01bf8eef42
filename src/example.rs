use crate::lang::Lexicon;
use rand::{Rng, seq::IndexedRandom};

/// Demonstration words for a language.
#[inline]
pub fn examples(lexicon: &Lexicon) -> &'static [&'static str] {
    lexicon.examples()
}

/// Uniformly random example word. The randomness is the caller's; the
/// engine has none of its own.
pub fn random_example<R: Rng + ?Sized>(lexicon: &Lexicon, rng: &mut R) -> Option<&'static str> {
    lexicon.examples().choose(rng).copied()
}
