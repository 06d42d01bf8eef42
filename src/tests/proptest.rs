mod prop_tests {
    use crate::{
        DEFAULT_MAX_ITERATIONS, DEU, ENG, JPN, NLD, ZHO, compute_path, count_letters,
        lang::get_lexicon, validate_input,
    };
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn english_words_reach_four(s in "[a-zA-Z]{1,100}") {
            let p = compute_path(&s, get_lexicon(ENG), DEFAULT_MAX_ITERATIONS).unwrap();
            prop_assert!(p.converged());
            prop_assert_eq!(p.last_word(), Some("four"));
        }

        #[test]
        fn dutch_words_reach_vier(s in "[a-zëïéèĳ]{1,100}") {
            let p = compute_path(&s, get_lexicon(NLD), DEFAULT_MAX_ITERATIONS).unwrap();
            prop_assert!(p.converged());
            prop_assert_eq!(p.last_word(), Some("vier"));
        }

        #[test]
        fn german_words_reach_vier(s in "[a-zäöüß]{1,100}") {
            let p = compute_path(&s, get_lexicon(DEU), DEFAULT_MAX_ITERATIONS).unwrap();
            prop_assert!(p.converged());
            prop_assert_eq!(p.last_word(), Some("vier"));
        }

        #[test]
        fn cjk_words_reach_one(s in "[\\p{Hiragana}\\p{Katakana}\\p{Han}]{1,100}") {
            for lex in [get_lexicon(JPN), get_lexicon(ZHO)] {
                let p = compute_path(&s, lex, DEFAULT_MAX_ITERATIONS).unwrap();
                prop_assert!(p.converged());
                prop_assert_eq!(p.last_word(), Some("一"));
            }
        }

        #[test]
        fn spaced_and_hyphenated_words_converge(s in "[a-z]{1,20}([ '-][a-z]{1,20}){0,3}") {
            prop_assume!(validate_input(&s).is_ok());
            let p = compute_path(&s, get_lexicon(ENG), DEFAULT_MAX_ITERATIONS).unwrap();
            prop_assert!(p.converged());
        }

        #[test]
        fn count_never_exceeds_chars(s in "\\PC{0,200}") {
            for lex in [get_lexicon(ENG), get_lexicon(DEU), get_lexicon(JPN)] {
                prop_assert!(count_letters(&s, lex) <= s.chars().count());
            }
        }

        #[test]
        fn path_is_deterministic(s in "\\PC{0,100}") {
            let a = compute_path(&s, get_lexicon(NLD), DEFAULT_MAX_ITERATIONS).unwrap();
            let b = compute_path(&s, get_lexicon(NLD), DEFAULT_MAX_ITERATIONS).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn path_alternates_words_and_counts(s in "[a-z]{0,60}") {
            let p = compute_path(&s, get_lexicon(ENG), DEFAULT_MAX_ITERATIONS).unwrap();
            for (i, step) in p.elements().iter().enumerate() {
                prop_assert_eq!(step.as_word().is_some(), i % 2 == 0);
            }
            prop_assert_eq!(p.len() % 2, 1);
        }
    }
}
