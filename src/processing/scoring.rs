//! Score heuristics over raw text and matched skills

use crate::error::{Result, ResumeInsightError};
use crate::processing::catalog::{CONTACT_MARKERS, SECTION_HEADINGS};
use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Assumed ideal resume length in whitespace-delimited words.
const IDEAL_WORD_COUNT: f64 = 800.0;

/// Component values behind the two final scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub word_count: usize,
    pub length_score: u8,
    pub skills_score: u8,
    pub has_contact_info: bool,
    pub has_section_headings: bool,
    pub ats_compatibility: u8,
    pub overall_score: u8,
}

/// Computes the quality and ATS-compatibility scores.
///
/// All scanning patterns are compiled once at construction; scoring itself
/// is pure over the input text.
pub struct Scorer {
    contact_markers: AhoCorasick,
    phone_word: Regex,
    digit_run: Regex,
    section_heading: Regex,
}

impl Scorer {
    pub fn new() -> Result<Self> {
        let contact_markers = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(CONTACT_MARKERS)
            .map_err(|e| ResumeInsightError::Processing(format!("Failed to build contact scanner: {}", e)))?;

        let heading_alternation = SECTION_HEADINGS.join("|");
        Ok(Self {
            contact_markers,
            phone_word: compile(r"(?i)\bphone\b")?,
            digit_run: compile(r"\+?\d{7,}")?,
            section_heading: compile(&format!(r"(?i)\b(?:{})\b", heading_alternation))?,
        })
    }

    /// Score the text given how many catalog skills matched.
    pub fn score(&self, text: &str, matched_skills: usize, catalog_size: usize) -> ScoreBreakdown {
        let word_count = text.split_whitespace().count();
        let length_score = capped(word_count as f64 / IDEAL_WORD_COUNT * 100.0);
        let skills_score = if catalog_size == 0 {
            0
        } else {
            capped(matched_skills as f64 / catalog_size as f64 * 100.0)
        };
        let has_contact_info = self.has_contact_info(text);
        let has_section_headings = self.has_section_headings(text);

        let ats_compatibility = capped(
            f64::from(skills_score) * 0.6
                + if has_contact_info { 10.0 } else { 0.0 }
                + if has_section_headings { 10.0 } else { 0.0 }
                + f64::from(length_score) * 0.1,
        );
        let overall_score = capped(
            40.0 + matched_skills as f64 * 6.0
                + if has_section_headings { 5.0 } else { 0.0 }
                + if has_contact_info { 5.0 } else { 0.0 },
        );

        ScoreBreakdown {
            word_count,
            length_score,
            skills_score,
            has_contact_info,
            has_section_headings,
            ats_compatibility,
            overall_score,
        }
    }

    /// True when the text carries an email sign, a web or LinkedIn address,
    /// the word "phone", a "tel:" link, or a run of 7+ digits.
    pub fn has_contact_info(&self, text: &str) -> bool {
        self.contact_markers.is_match(text)
            || self.phone_word.is_match(text)
            || self.digit_run.is_match(text)
    }

    /// True when any recognized heading appears as a whole word.
    pub fn has_section_headings(&self, text: &str) -> bool {
        self.section_heading.is_match(text)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new().expect("Failed to create default scorer")
    }
}

/// Round half away from zero, then clamp to the 0-100 scale.
fn capped(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| ResumeInsightError::Processing(format!("Failed to compile '{}': {}", pattern, e)))
}
