use crate::{lang::Lexicon, stage::Stage};
use std::borrow::Cow;

pub struct Trim;

impl Stage for Trim {
    fn name(&self) -> &'static str {
        "trim"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Lexicon) -> bool {
        let bytes = text.as_bytes();
        // Fast ASCII path: check first/last byte
        if bytes.first().is_some_and(u8::is_ascii_whitespace)
            || bytes.last().is_some_and(u8::is_ascii_whitespace)
        {
            return true;
        }
        // Unicode fallback: ideographic space, NBSP, ...
        text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _: &Lexicon) -> Cow<'a, str> {
        let trimmed = text.trim();
        if trimmed.len() == text.len() {
            return text;
        }
        match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
            Cow::Owned(s) => Cow::Owned(s.trim().to_string()),
        }
    }
}
