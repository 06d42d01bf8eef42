//! `(language, word)` from URL paths and back.
//!
//! `/<word>` is the default language; `/<code>/<word>` selects another one.
//! Segments must already be percent-decoded; this module only splits and
//! validates them.

use crate::{
    lang::{DEFAULT_LANG, Lang, from_code},
    validate::{InputError, validate_input},
};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Longest accepted raw segment, in bytes.
pub const MAX_SEGMENT_BYTES: usize = 200;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("path has no word segment")]
    Empty,
    #[error("path segment is {0} bytes, at most {max} allowed", max = MAX_SEGMENT_BYTES)]
    SegmentTooLong(usize),
    #[error("invalid word in path: {0}")]
    InvalidWord(#[from] InputError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub lang: Lang,
    pub word: String,
}

impl Route {
    pub fn new(lang: Lang, word: impl Into<String>) -> Self {
        Self {
            lang,
            word: word.into(),
        }
    }

    /// Parse a root-deployed path.
    #[inline]
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        Self::parse_with_base(path, "")
    }

    /// Parse a path served under `base` (e.g. `/four`). The base is only
    /// stripped when the path actually starts with all of its segments.
    ///
    /// With two or more segments the first names the language; an unknown
    /// code falls back to [`DEFAULT_LANG`] and the second segment is still
    /// the word.
    pub fn parse_with_base(path: &str, base: &str) -> Result<Self, RouteError> {
        let mut parts: Vec<&str> = segments(path).collect();
        let base_parts: Vec<&str> = segments(base).collect();
        if !base_parts.is_empty() && parts.starts_with(&base_parts) {
            parts.drain(..base_parts.len());
        }

        if let Some(long) = parts.iter().find(|p| p.len() > MAX_SEGMENT_BYTES) {
            return Err(RouteError::SegmentTooLong(long.len()));
        }

        let (lang, word) = match parts.as_slice() {
            [] => return Err(RouteError::Empty),
            [word] => (DEFAULT_LANG, *word),
            [code, word, ..] => {
                let lang = from_code(code).unwrap_or_else(|| {
                    debug!(code, "unknown language in path, using default");
                    DEFAULT_LANG
                });
                (lang, *word)
            }
        };

        validate_input(word)?;
        Ok(Self::new(lang, word))
    }

    /// Legacy `?word=..&lang=..` query string, form-decoded
    /// (`%C3%A9` → `é`, `+` → space). An unknown `lang` keeps the default
    /// language; the first `word` wins.
    pub fn from_query(query: &str) -> Result<Self, RouteError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut word = None;
        let mut lang = DEFAULT_LANG;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "word" if word.is_none() => word = Some(value),
                "lang" => lang = from_code(&value).unwrap_or(lang),
                _ => {}
            }
        }

        let word = word.filter(|w| !w.is_empty()).ok_or(RouteError::Empty)?;
        if word.len() > MAX_SEGMENT_BYTES {
            return Err(RouteError::SegmentTooLong(word.len()));
        }
        validate_input(&word)?;
        Ok(Self::new(lang, word))
    }

    /// `/<word>` for the default language, `/<code>/<word>` otherwise.
    pub fn to_path(&self) -> String {
        if self.lang == DEFAULT_LANG {
            format!("/{}", self.word)
        } else {
            format!("/{}/{}", self.lang.code(), self.word)
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

#[inline]
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{
        ENG,
        data::{DEU, NLD},
    };

    #[test]
    fn bare_word_is_default_language() {
        assert_eq!(Route::parse("/hello").unwrap(), Route::new(ENG, "hello"));
        assert_eq!(Route::parse("hello/").unwrap(), Route::new(ENG, "hello"));
    }

    #[test]
    fn language_prefix() {
        assert_eq!(Route::parse("/nl/kat").unwrap(), Route::new(NLD, "kat"));
        assert_eq!(Route::parse("/DE/zwölf").unwrap(), Route::new(DEU, "zwölf"));
    }

    #[test]
    fn unknown_code_falls_back() {
        assert_eq!(Route::parse("/xx/chat").unwrap(), Route::new(ENG, "chat"));
    }

    #[test]
    fn base_path_is_stripped() {
        assert_eq!(
            Route::parse_with_base("/four/nl/kat", "/four").unwrap(),
            Route::new(NLD, "kat")
        );
        assert_eq!(
            Route::parse_with_base("/four/hello", "/four/").unwrap(),
            Route::new(ENG, "hello")
        );
        // not under the base: nothing stripped
        assert_eq!(
            Route::parse_with_base("/nl/kat", "/four").unwrap(),
            Route::new(NLD, "kat")
        );
    }

    #[test]
    fn rejects_empty_and_invalid() {
        assert_eq!(Route::parse("/"), Err(RouteError::Empty));
        assert_eq!(Route::parse_with_base("/four", "/four"), Err(RouteError::Empty));
        assert!(matches!(
            Route::parse("/h4x"),
            Err(RouteError::InvalidWord(InputError::InvalidChar { ch: '4', .. }))
        ));
        let long = format!("/{}", "a".repeat(MAX_SEGMENT_BYTES + 1));
        assert_eq!(
            Route::parse(&long),
            Err(RouteError::SegmentTooLong(MAX_SEGMENT_BYTES + 1))
        );
    }

    #[test]
    fn query_fallback() {
        assert_eq!(
            Route::from_query("?word=kat&lang=nl").unwrap(),
            Route::new(NLD, "kat")
        );
        assert_eq!(
            Route::from_query("lang=fr&word=chat").unwrap(),
            Route::new(ENG, "chat")
        );
        assert_eq!(Route::from_query("lang=nl"), Err(RouteError::Empty));
        assert_eq!(Route::from_query("word="), Err(RouteError::Empty));
    }

    #[test]
    fn query_values_are_form_decoded() {
        assert_eq!(
            Route::from_query("?word=caf%C3%A9").unwrap(),
            Route::new(ENG, "café")
        );
        assert_eq!(
            Route::from_query("?word=rock+n+roll").unwrap(),
            Route::new(ENG, "rock n roll")
        );
        assert_eq!(
            Route::from_query("?lang=de&word=zw%C3%B6lf").unwrap(),
            Route::new(DEU, "zwölf")
        );
        // an encoded `&` stays inside the value and is then rejected as a character
        assert!(matches!(
            Route::from_query("?word=a%26lang%3Dnl"),
            Err(RouteError::InvalidWord(InputError::InvalidChar { ch: '&', .. }))
        ));
    }

    #[test]
    fn builds_paths() {
        assert_eq!(Route::new(ENG, "hello").to_path(), "/hello");
        assert_eq!(Route::new(NLD, "kat").to_string(), "/nl/kat");
    }

    #[test]
    fn parse_inverts_to_path() {
        for route in [Route::new(ENG, "time"), Route::new(DEU, "vier")] {
            assert_eq!(Route::parse(&route.to_path()).unwrap(), route);
        }
    }
}
