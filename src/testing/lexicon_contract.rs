use crate::{
    context::DEFAULT_MAX_ITERATIONS,
    lang::{Lexicon, REQUIRED_NUMBER_KEYS},
    path::{Step, compute_path},
    spell::number_to_word,
    unicode::count_letters,
};

/// Assert that a lexicon satisfies **every universal contract** a language
/// table must meet before the engine can promise termination.
///
/// ### The contracts:
/// 1. `table_is_complete` → every required key has a word
/// 2. `magic_word_is_fixed_point` → spell(count(magic)) == magic
/// 3. `magic_path_is_trivial` → the magic word's path is `[magic]`
/// 4. `every_number_word_converges` → all of `0..=100` spelled out reach magic
/// 5. `examples_converge` → every demonstration word reaches magic
/// 6. `count_never_exceeds_chars` → the filter only removes
///
/// Failure of any contract means a broken table, never bad user input.
#[macro_export]
macro_rules! assert_lexicon_contract {
    ($lexicon:expr) => {
        $crate::testing::lexicon_contract::table_is_complete($lexicon);
        $crate::testing::lexicon_contract::magic_word_is_fixed_point($lexicon);
        $crate::testing::lexicon_contract::magic_path_is_trivial($lexicon);
        $crate::testing::lexicon_contract::every_number_word_converges($lexicon);
        $crate::testing::lexicon_contract::examples_converge($lexicon);
        $crate::testing::lexicon_contract::count_never_exceeds_chars($lexicon);
    };
}

pub fn table_is_complete(lexicon: &Lexicon) {
    for key in REQUIRED_NUMBER_KEYS {
        assert!(
            lexicon.number_word(key).is_some(),
            "lexicon `{}` has no word for {key}",
            lexicon.code
        );
    }
}

pub fn magic_word_is_fixed_point(lexicon: &Lexicon) {
    let counted = count_letters(lexicon.magic_word, lexicon);
    assert_eq!(
        counted, lexicon.magic_value,
        "lexicon `{}`: magic word letter count",
        lexicon.code
    );
    let spelled = number_to_word(counted, lexicon)
        .unwrap_or_else(|e| panic!("lexicon `{}`: {e}", lexicon.code));
    assert_eq!(
        spelled, lexicon.magic_word,
        "lexicon `{}`: magic word does not spell itself",
        lexicon.code
    );
}

pub fn magic_path_is_trivial(lexicon: &Lexicon) {
    let path = compute_path(lexicon.magic_word, lexicon, DEFAULT_MAX_ITERATIONS)
        .unwrap_or_else(|e| panic!("lexicon `{}`: {e}", lexicon.code));
    assert!(path.converged(), "lexicon `{}`", lexicon.code);
    assert_eq!(path.len(), 1, "lexicon `{}`: {path}", lexicon.code);
    assert_eq!(path.step_count(), 0);
}

pub fn every_number_word_converges(lexicon: &Lexicon) {
    for n in 0..=100 {
        let word = number_to_word(n, lexicon)
            .unwrap_or_else(|e| panic!("lexicon `{}`: {e}", lexicon.code));
        let path = compute_path(&word, lexicon, DEFAULT_MAX_ITERATIONS)
            .unwrap_or_else(|e| panic!("lexicon `{}`: {e}", lexicon.code));
        assert!(
            path.converged(),
            "lexicon `{}`: {n} ({word}) did not converge: {path}",
            lexicon.code
        );
        assert_eq!(
            path.elements().last(),
            Some(&Step::Word(lexicon.magic_word.into()))
        );
    }
}

pub fn examples_converge(lexicon: &Lexicon) {
    for &word in lexicon.examples() {
        let path = compute_path(word, lexicon, DEFAULT_MAX_ITERATIONS)
            .unwrap_or_else(|e| panic!("lexicon `{}`: {e}", lexicon.code));
        assert!(
            path.converged(),
            "lexicon `{}`: example {word} did not converge: {path}",
            lexicon.code
        );
    }
}

pub fn count_never_exceeds_chars(lexicon: &Lexicon) {
    let samples = ["", "co-op", "rock 'n' roll", "zwölf", "ねこ", "abc 123 !?", "数学"];
    for word in samples.iter().chain(lexicon.examples()) {
        assert!(count_letters(word, lexicon) <= word.chars().count());
    }
}
