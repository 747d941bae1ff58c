//! Whole-token skill matching against the fixed catalog

use crate::error::{Result, ResumeInsightError};
use crate::processing::catalog::SKILL_CATALOG;
use regex::{Regex, RegexBuilder};

/// Matches catalog skills in raw text as whole tokens.
///
/// One case-insensitive pattern per catalog entry, compiled once at
/// construction. A match must not sit inside a larger alphanumeric token,
/// so "java" never fires inside "javascript" and the dot in "next.js"
/// stays literal.
pub struct SkillMatcher {
    catalog: &'static [&'static str],
    patterns: Vec<Regex>,
}

impl SkillMatcher {
    /// Create a matcher over the default skill catalog.
    pub fn new() -> Result<Self> {
        Self::with_catalog(SKILL_CATALOG)
    }

    /// Create a matcher over a specific catalog. Order is preserved in the
    /// matcher's output.
    pub fn with_catalog(catalog: &'static [&'static str]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(catalog.len());
        for token in catalog {
            patterns.push(token_pattern(token)?);
        }
        Ok(Self { catalog, patterns })
    }

    /// Find all catalog skills present in the text.
    ///
    /// Results follow catalog order, carry the catalog's canonical spelling,
    /// and contain each matched skill exactly once no matter how often or in
    /// which casing it appears in the text.
    pub fn find_skills(&self, text: &str) -> Vec<String> {
        self.catalog
            .iter()
            .zip(self.patterns.iter())
            .filter(|(_, pattern)| pattern.is_match(text))
            .map(|(token, _)| token.to_string())
            .collect()
    }

    pub fn catalog_size(&self) -> usize {
        self.catalog.len()
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new().expect("Failed to create default skill matcher")
    }
}

/// Build the whole-token pattern for one catalog entry.
///
/// `\b` is attached only where the token edge is a word character. A
/// trailing `\b` after "c++" would demand a following word character, so the
/// token could never match at the end of a phrase.
fn token_pattern(token: &str) -> Result<Regex> {
    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }

    let mut pattern = String::new();
    if token.starts_with(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(token));
    if token.ends_with(is_word_char) {
        pattern.push_str(r"\b");
    }

    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| {
            ResumeInsightError::Processing(format!("Failed to build pattern for '{}': {}", token, e))
        })
}
