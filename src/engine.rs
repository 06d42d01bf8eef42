use thiserror::Error;

use crate::{
    context::Context,
    example::random_example,
    lang::{Lang, Lexicon, LexiconError},
    path::{Path, compute_composed_path, compute_path},
    spell::number_to_word,
    unicode::count_letters,
    validate::{InputError, validate_input},
};
use rand::Rng;
use std::borrow::Cow;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
}

/// One language, one iteration bound, validated once.
///
/// ```
/// use fourfold::{Engine, NLD};
///
/// let engine = Engine::builder().lang(NLD).build()?;
/// let path = engine.path("kat")?;
/// assert_eq!(path.to_string(), "kat → 3 → drie → 4 → vier");
/// # Ok::<(), fourfold::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    ctx: Context,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Engine over the canonical table for `lang`.
    pub fn new(lang: Lang) -> Result<Self, EngineError> {
        Self::builder().lang(lang).build()
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    #[inline]
    pub fn lang(&self) -> Lang {
        self.ctx.lang
    }

    #[inline]
    pub fn lexicon(&self) -> &Lexicon {
        &self.ctx.lexicon
    }

    #[inline]
    pub fn count_letters(&self, word: &str) -> usize {
        count_letters(word, &self.ctx.lexicon)
    }

    #[inline]
    pub fn number_to_word(&self, n: usize) -> Result<Cow<'static, str>, EngineError> {
        Ok(number_to_word(n, &self.ctx.lexicon)?)
    }

    /// Path from `word` to the magic word. The word is not validated; see
    /// [`Engine::checked_path`] for user-supplied input.
    #[inline]
    pub fn path<'a>(&self, word: &'a str) -> Result<Path<'a>, EngineError> {
        if self.ctx.compose_input {
            compute_composed_path(word, &self.ctx.lexicon, self.ctx.max_iterations)
        } else {
            compute_path(word, &self.ctx.lexicon, self.ctx.max_iterations)
        }
    }

    /// Validate `word` as user input, then compute its path.
    pub fn checked_path<'a>(&self, word: &'a str) -> Result<Path<'a>, EngineError> {
        validate_input(word)?;
        self.path(word)
    }

    pub fn step_count(&self, word: &str) -> Result<usize, EngineError> {
        Ok(self.path(word)?.step_count())
    }

    /// Path for a random example word; `None` when the lexicon has no
    /// examples.
    pub fn random_path<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Option<Path<'static>>, EngineError> {
        let Some(word) = random_example(&self.ctx.lexicon, rng) else {
            return Ok(None);
        };
        debug!(lang = self.ctx.lang.code(), word, "picked example");
        self.path(word).map(Some)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EngineBuilder {
    ctx: Context,
}

impl EngineBuilder {
    /// Switch language. Resets any earlier `modify_lang`; the iteration
    /// bound and `compose_input` are kept.
    pub fn lang(mut self, lang: Lang) -> Self {
        self.ctx = Context::new(lang)
            .with_max_iterations(self.ctx.max_iterations)
            .with_compose_input(self.ctx.compose_input);
        self
    }

    /// NFC-compose input before counting. Off by default: composition turns
    /// `e` + marks into one precomposed letter, which changes counts.
    pub fn compose_input(mut self, compose: bool) -> Self {
        self.ctx.compose_input = compose;
        self
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.ctx.max_iterations = max_iterations;
        self
    }

    /// Override lexicon fields for the current language.
    pub fn modify_lang(mut self, f: impl FnOnce(&mut Lexicon)) -> Self {
        f(&mut self.ctx.lexicon);
        self
    }

    /// Validate the lexicon and freeze the configuration.
    pub fn build(self) -> Result<Engine, EngineError> {
        self.ctx.lexicon.validate()?;
        Ok(Engine { ctx: self.ctx })
    }
}
