//! Case-insensitive whole-word matching of literal terms.
//!
//! Terms come from the lookup tables and may contain regex metacharacters
//! (`"ghee (use sparingly)"`, `"stevia + cornstarch"`), so they are always
//! escaped before a pattern is built.

use log::trace;
use regex::{Captures, NoExpand, Regex};

use crate::TransformError;

/// A compiled matcher for one literal term
#[derive(Debug, Clone)]
pub struct TermMatcher {
    term: String,
    regex: Regex,
}

impl TermMatcher {
    /// Matcher that also accepts a naive plural (`s` or `es`) after the term.
    ///
    /// Used for health replacement rules, so `"sausages"` and `"bagels"` are
    /// caught by the `"sausage"` and `"bagel"` rules.
    pub fn plural(term: &str) -> Result<Self, TransformError> {
        Self::build(term, true)
    }

    /// Matcher for the exact term only, used by the palette passes.
    pub fn whole_word(term: &str) -> Result<Self, TransformError> {
        Self::build(term, false)
    }

    fn build(term: &str, allow_plural: bool) -> Result<Self, TransformError> {
        let normalized = term.trim().to_lowercase();
        let (first, last) = match (normalized.chars().next(), normalized.chars().last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(TransformError::InvalidTable(
                    "cannot match an empty term".to_string(),
                ))
            }
        };

        // `\b` only holds next to a word character, so a term that starts or
        // ends with punctuation gets no boundary assertion on that side.
        let mut pattern = String::from("(?i)");
        if is_word_char(first) {
            pattern.push_str(r"\b");
        }
        pattern.push_str(&regex::escape(&normalized));
        if is_word_char(last) {
            if allow_plural {
                pattern.push_str("(?:s|es)?");
            }
            pattern.push_str(r"\b");
        }

        trace!("Compiled pattern {} for term '{}'", pattern, term);

        Ok(Self {
            term: term.to_string(),
            regex: Regex::new(&pattern)?,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// All non-overlapping matches, left to right.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Replace every match with the value computed from the matched text.
    pub fn replace_all_with<F>(&self, text: &str, mut replacement: F) -> String
    where
        F: FnMut(&str) -> String,
    {
        self.regex
            .replace_all(text, |caps: &Captures<'_>| replacement(&caps[0]))
            .into_owned()
    }

    /// Replace only the first match with the value computed from the matched text.
    pub fn replace_first_with<F>(&self, text: &str, mut replacement: F) -> String
    where
        F: FnMut(&str) -> String,
    {
        self.regex
            .replace(text, |caps: &Captures<'_>| replacement(&caps[0]))
            .into_owned()
    }

    /// Replace only the first match with `replacement`, taken verbatim.
    pub fn replace_first_literal(&self, text: &str, replacement: &str) -> String {
        self.regex.replace(text, NoExpand(replacement)).into_owned()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
