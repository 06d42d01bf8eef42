//! Count-and-spell iteration towards the magic word.
//!
//! A [`Path`] alternates words and letter counts:
//! `hello → 5 → five → 4 → four`. On convergence it ends with a single
//! magic word; the `four → 4 → four` self-loop is never appended, so the
//! magic word itself yields the one-element path `[four]`.

use crate::{
    engine::EngineError,
    lang::Lexicon,
    process::{normalize_input, normalize_input_composed},
    spell::number_to_word,
    unicode::count_letters,
};
use smallvec::SmallVec;
use std::{borrow::Cow, fmt};
use tracing::{trace, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<'a> {
    Word(Cow<'a, str>),
    Count(usize),
}

impl<'a> Step<'a> {
    #[inline]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Step::Word(w) => Some(w),
            Step::Count(_) => None,
        }
    }

    #[inline]
    pub fn as_count(&self) -> Option<usize> {
        match self {
            Step::Count(n) => Some(*n),
            Step::Word(_) => None,
        }
    }

    pub fn into_owned(self) -> Step<'static> {
        match self {
            Step::Word(w) => Step::Word(Cow::Owned(w.into_owned())),
            Step::Count(n) => Step::Count(n),
        }
    }
}

impl fmt::Display for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Word(w) => f.write_str(w),
            Step::Count(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The last element is the magic word.
    Converged,
    /// The iteration bound ran out first; there is no terminal marker.
    DidNotConverge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<'a> {
    steps: SmallVec<[Step<'a>; 16]>,
    outcome: Outcome,
}

impl<'a> Path<'a> {
    #[inline]
    pub fn elements(&self) -> &[Step<'a>] {
        &self.steps
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn converged(&self) -> bool {
        self.outcome == Outcome::Converged
    }

    /// Count-and-spell steps taken: `floor(len / 2)`.
    #[inline]
    pub fn step_count(&self) -> usize {
        self.steps.len() / 2
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.steps.iter().filter_map(Step::as_word)
    }

    pub fn counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.steps.iter().filter_map(Step::as_count)
    }

    pub fn last_word(&self) -> Option<&str> {
        self.steps.iter().rev().find_map(Step::as_word)
    }

    pub fn into_owned(self) -> Path<'static> {
        Path {
            steps: self.steps.into_iter().map(Step::into_owned).collect(),
            outcome: self.outcome,
        }
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for step in &self.steps {
            if !first {
                f.write_str(" → ")?;
            }
            first = false;
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// Walk `word` to the lexicon's magic word.
///
/// The word is trimmed and lowercased first; combining marks stay as
/// typed, so a decomposed letter counts as its base letter under
/// `LatinFiltered` and as every code point under `RawCodepoints`. Each iteration
/// records the current word and its letter count, then continues with the
/// count spelled out. Running out of `max_iterations` is not an error; the
/// returned path reports [`Outcome::DidNotConverge`].
///
/// Pure: no randomness, no I/O, no shared state.
pub fn compute_path<'a>(
    word: &'a str,
    lexicon: &Lexicon,
    max_iterations: usize,
) -> Result<Path<'a>, EngineError> {
    walk(word, normalize_input(word, lexicon), lexicon, max_iterations)
}

/// [`compute_path`] with NFC composition after trimming and lowercasing.
pub fn compute_composed_path<'a>(
    word: &'a str,
    lexicon: &Lexicon,
    max_iterations: usize,
) -> Result<Path<'a>, EngineError> {
    walk(word, normalize_input_composed(word, lexicon), lexicon, max_iterations)
}

fn walk<'a>(
    word: &str,
    mut current: Cow<'a, str>,
    lexicon: &Lexicon,
    max_iterations: usize,
) -> Result<Path<'a>, EngineError> {
    let mut steps = SmallVec::new();
    let mut iterations = 0;

    while !lexicon.is_magic(&current) && iterations < max_iterations {
        let count = count_letters(&current, lexicon);
        let next = number_to_word(count, lexicon)?;
        trace!(lang = lexicon.code, word = %current, count, next = %next, "step");
        steps.push(Step::Word(current));
        steps.push(Step::Count(count));
        current = next;
        iterations += 1;
    }

    let outcome = if lexicon.is_magic(&current) {
        steps.push(Step::Word(current));
        Outcome::Converged
    } else {
        let numeral = !current.is_empty() && current.bytes().all(|b| b.is_ascii_digit());
        warn!(
            lang = lexicon.code,
            input = word,
            max_iterations,
            pending = %current,
            numeral,
            "path did not reach the magic word"
        );
        Outcome::DidNotConverge
    };

    Ok(Path { steps, outcome })
}
