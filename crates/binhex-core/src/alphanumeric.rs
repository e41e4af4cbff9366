//! Alphanumeric token extraction
//!
//! Scans each line for two runs of letters-then-digits and reports the second
//! one. The leading run is matched but not captured, the fillers between
//! runs are non-greedy.

use crate::errors::ConvertError;
use regex::Regex;

const ALPHANUMERIC_PATTERN: &str =
    r"(?i).*?(?:[a-z][a-z]*[0-9]+[a-z]*).*?((?:[a-z][a-z]*[0-9]+[a-z]*))";

pub struct AlphanumericExtractor {
    pattern: Regex,
}

impl AlphanumericExtractor {
    pub fn new() -> Result<Self, ConvertError> {
        Ok(Self {
            pattern: Regex::new(ALPHANUMERIC_PATTERN)?,
        })
    }

    pub fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(line)
            .and_then(|captures| captures.get(1))
            .map(|token| token.as_str())
    }

    /// Hands `(token)` to `on_match` for every line that has one and returns
    /// how many lines matched.
    pub fn extract_all<S, F>(&self, lines: &[S], mut on_match: F) -> usize
    where
        S: AsRef<str>,
        F: FnMut(&str),
    {
        let mut matched = 0;
        for line in lines {
            if let Some(token) = self.extract(line.as_ref()) {
                on_match(&format!("({})", token));
                matched += 1;
            }
        }
        matched
    }
}
