// src/context.rs
// Everything one path computation needs: the language, its rules and the
// iteration bound. Tiny, Copy, and 'static apart from the bound.

use crate::lang::{DEFAULT_LANG, Lang, Lexicon, data::LANG_TABLE};

/// Iterations allowed before a path is declared non-convergent.
pub const DEFAULT_MAX_ITERATIONS: usize = 20;

/// Runtime context passed to every engine call.
///
/// Contains:
/// - `lang`: human identifier (for logging and routing)
/// - `lexicon`: the number words and counting rules actually used
/// - `max_iterations`: the count-and-spell bound
/// - `compose_input`: NFC-compose input before counting (off by default)
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub lang: Lang,
    pub lexicon: Lexicon,
    pub max_iterations: usize,
    pub compose_input: bool,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new(DEFAULT_LANG)
    }
}

impl Context {
    /// Create a context using the canonical static data for a language.
    #[inline(always)]
    pub fn new(lang: Lang) -> Self {
        let lexicon = LANG_TABLE
            .get(lang.code())
            .copied()
            .expect("language not present in LANG_TABLE – this is a bug");
        Self {
            lang,
            lexicon,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            compose_input: false,
        }
    }

    /// Create a context and allow the caller to mutate the lexicon before
    /// use. Nothing is validated here; `EngineBuilder::build` does that.
    #[inline(always)]
    pub fn with_modified(lang: Lang, f: impl FnOnce(&mut Lexicon)) -> Self {
        let mut ctx = Self::new(lang);
        f(&mut ctx.lexicon);
        ctx
    }

    #[inline(always)]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[inline(always)]
    pub fn with_compose_input(mut self, compose_input: bool) -> Self {
        self.compose_input = compose_input;
        self
    }
}
