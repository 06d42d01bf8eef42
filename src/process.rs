//! Process abstraction
//! ChainedProcess is monomorphised – the compiler knows the concrete
//! type of every stage, so the input chain costs no vtable or heap.
use crate::{
    lang::Lexicon,
    stage::{Stage, lower_case::LowerCase, normalization::Nfc, trim::Trim},
};
use std::borrow::Cow;
use tracing::trace;

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>, lexicon: &Lexicon) -> Cow<'a, str>;
}

pub struct EmptyProcess;
impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, _: &Lexicon) -> Cow<'a, str> {
        text
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, lexicon: &Lexicon) -> Cow<'a, str> {
        let current: Cow<'_, str> = self.previous.process(text, lexicon);
        if !self.stage.needs_apply(&current, lexicon) {
            return current;
        }
        trace!(stage = self.stage.name(), "applying");
        self.stage.apply(current, lexicon)
    }
}

/// Trim, then lowercase. Combining marks are left as typed.
pub type InputProcess = ChainedProcess<LowerCase, ChainedProcess<Trim, EmptyProcess>>;

pub const INPUT_PROCESS: InputProcess = ChainedProcess {
    stage: LowerCase,
    previous: ChainedProcess {
        stage: Trim,
        previous: EmptyProcess,
    },
};

/// [`InputProcess`] followed by canonical composition.
pub type ComposedInputProcess = ChainedProcess<Nfc, InputProcess>;

pub const COMPOSED_INPUT_PROCESS: ComposedInputProcess = ChainedProcess {
    stage: Nfc,
    previous: INPUT_PROCESS,
};

/// Bring a raw word into the form the lexicon compares against.
/// Borrowed input that is already normalized comes back borrowed.
#[inline]
pub fn normalize_input<'a>(word: &'a str, lexicon: &Lexicon) -> Cow<'a, str> {
    INPUT_PROCESS.process(Cow::Borrowed(word), lexicon)
}

/// Like [`normalize_input`], then NFC, so `o` + U+0308 and `ö` become the
/// same word.
#[inline]
pub fn normalize_input_composed<'a>(word: &'a str, lexicon: &Lexicon) -> Cow<'a, str> {
    COMPOSED_INPUT_PROCESS.process(Cow::Borrowed(word), lexicon)
}
