//! Input normalization stages.
//!
//! A word arrives from a text box, a URL segment or an example list and has
//! to be comparable with the lexicon's magic word before counting starts.
//! Each stage is one small, zero-copy-when-unchanged transformation:
//!
//! * [`Trim`]: surrounding whitespace
//! * [`LowerCase`]: Unicode lowercase
//! * [`Nfc`]: canonical composition, opt-in through
//!   `EngineBuilder::compose_input`; off by default because it changes
//!   letter counts for decomposed input
//!
//! Stages are chained at compile time through [`crate::process`]; a stage
//! whose `needs_apply` says no is skipped without touching the text.
//! Stages cannot fail: any `&str` is a valid word.

pub mod lower_case;
pub mod normalization;
pub mod trim;

use crate::lang::Lexicon;
use std::borrow::Cow;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for tracing and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check.  Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str, lexicon: &Lexicon) -> bool;

    /// Allocation-aware transformation.  Must always be correct.
    fn apply<'a>(&self, text: Cow<'a, str>, lexicon: &Lexicon) -> Cow<'a, str>;
}
