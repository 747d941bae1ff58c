//! Line-oriented extraction of education and experience entries

use crate::error::{Result, ResumeInsightError};
use crate::processing::catalog::{DEGREE_KEYWORDS, ROLE_KEYWORDS};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Hard cap on reported experience entries, applied after collection.
pub const MAX_EXPERIENCE_ENTRIES: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// The full trimmed source line.
    pub degree: String,
    /// Always empty: separating institution from degree text is not attempted.
    pub institution: String,
    /// First 4-digit year found in the line, or empty.
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
}

/// Extracts education and experience entries from raw text, one line at a
/// time. All patterns are compiled once at construction.
pub struct EntryExtractor {
    year: Regex,
    year_range: Regex,
    role_keyword: Regex,
    title_company_sep: Regex,
}

impl EntryExtractor {
    pub fn new() -> Result<Self> {
        let role_alternation = ROLE_KEYWORDS.join("|");
        Ok(Self {
            year: compile(r"(19|20)\d{2}")?,
            // Greedy on purpose: the range may swallow unrelated years that
            // share a line, matching the reference heuristic.
            year_range: compile(r"(?i)(?:19|20)\d{2}.*(?:to|-).*(?:19|20)\d{2}")?,
            role_keyword: compile(&format!(r"(?i)\b(?:{})\b", role_alternation))?,
            title_company_sep: compile(r"(?i) at | @ ")?,
        })
    }

    /// Collect one entry per line containing a degree-indicator substring.
    ///
    /// Containment is checked on the lowercased line, so short indicators
    /// like "ms" also fire inside ordinary words. No deduplication, no cap.
    pub fn extract_education(&self, text: &str) -> Vec<EducationEntry> {
        let mut entries = Vec::new();
        for line in text.lines() {
            let trimmed = line.trim();
            let lowered = trimmed.to_lowercase();
            if DEGREE_KEYWORDS.iter().any(|keyword| lowered.contains(keyword)) {
                let year = self
                    .year
                    .find(trimmed)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                entries.push(EducationEntry {
                    degree: trimmed.to_string(),
                    institution: String::new(),
                    year,
                });
            }
        }
        entries
    }

    /// Collect experience entries in line order, capped at
    /// [`MAX_EXPERIENCE_ENTRIES`].
    ///
    /// A line qualifies when it carries a 1900–2099 year or a whole-word
    /// role keyword.
    pub fn extract_experience(&self, text: &str) -> Vec<ExperienceEntry> {
        let mut entries = Vec::new();
        for line in text.lines() {
            let trimmed = line.trim();
            let has_year = self.year.is_match(trimmed);
            if !has_year && !self.role_keyword.is_match(trimmed) {
                continue;
            }
            entries.push(self.split_entry(trimmed, has_year));
        }
        entries.truncate(MAX_EXPERIENCE_ENTRIES);
        entries
    }

    /// Derive title/company/duration for one qualifying line.
    ///
    /// Precedence: " at "/" @ " beats " - " beats the full-line fallback.
    /// Pieces after the first " at "/" @ " are rejoined with a literal
    /// " at " whatever the original separator was; the " - " split keeps
    /// its remainder intact.
    fn split_entry(&self, line: &str, has_year: bool) -> ExperienceEntry {
        if self.title_company_sep.is_match(line) {
            let parts: Vec<&str> = self.title_company_sep.split(line).collect();
            return ExperienceEntry {
                title: parts[0].trim().to_string(),
                company: parts[1..].join(" at ").trim().to_string(),
                duration: String::new(),
            };
        }

        if line.contains(" - ") {
            let mut parts = line.splitn(2, " - ");
            let title = parts.next().unwrap_or("").trim().to_string();
            let duration = parts.next().unwrap_or("").trim().to_string();
            return ExperienceEntry {
                title,
                company: String::new(),
                duration,
            };
        }

        let duration = if has_year {
            self.year_range
                .find(line)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        } else {
            String::new()
        };
        ExperienceEntry {
            title: line.to_string(),
            company: String::new(),
            duration,
        }
    }
}

impl Default for EntryExtractor {
    fn default() -> Self {
        Self::new().expect("Failed to create default entry extractor")
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| ResumeInsightError::Processing(format!("Failed to compile '{}': {}", pattern, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_line_with_year() {
        let extractor = EntryExtractor::new().unwrap();
        let entries = extractor.extract_education("Bachelor of Science, MIT, 2019");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "Bachelor of Science, MIT, 2019");
        assert_eq!(entries[0].year, "2019");
        assert_eq!(entries[0].institution, "");
    }

    #[test]
    fn test_education_line_without_year() {
        let extractor = EntryExtractor::new().unwrap();
        let entries = extractor.extract_education("MBA in progress");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].year, "");
    }

    #[test]
    fn test_education_substring_containment() {
        let extractor = EntryExtractor::new().unwrap();
        // "ms" is a substring indicator, so it fires inside ordinary words
        let entries = extractor.extract_education("shipped forms for client teams");
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_education_crlf_lines() {
        let extractor = EntryExtractor::new().unwrap();
        let entries = extractor.extract_education("Master of Arts, 2012\r\nPhD candidate, 2016\r\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].year, "2012");
        assert_eq!(entries[1].year, "2016");
    }

    #[test]
    fn test_education_first_year_wins() {
        let extractor = EntryExtractor::new().unwrap();
        let entries = extractor.extract_education("Bachelor 2014 to 2018");
        assert_eq!(entries[0].year, "2014");
    }

    #[test]
    fn test_experience_title_company_split() {
        let extractor = EntryExtractor::new().unwrap();
        let entries = extractor.extract_experience("Software Engineer at Acme Corp");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Software Engineer");
        assert_eq!(entries[0].company, "Acme Corp");
        assert_eq!(entries[0].duration, "");
    }

    #[test]
    fn test_experience_at_sign_split() {
        let extractor = EntryExtractor::new().unwrap();
        let entries = extractor.extract_experience("Designer @ Initech - 2019");

        // " @ " wins over " - "
        assert_eq!(entries[0].title, "Designer");
        assert_eq!(entries[0].company, "Initech - 2019");
        assert_eq!(entries[0].duration, "");
    }

    #[test]
    fn test_experience_multiple_separators_rejoined() {
        let extractor = EntryExtractor::new().unwrap();
        let entries = extractor.extract_experience("Lead at Acme at Night");

        assert_eq!(entries[0].title, "Lead");
        assert_eq!(entries[0].company, "Acme at Night");
    }

    #[test]
    fn test_experience_dash_split() {
        let extractor = EntryExtractor::new().unwrap();
        let entries = extractor.extract_experience("Software Engineer - 2018 to 2020");

        assert_eq!(entries[0].title, "Software Engineer");
        assert_eq!(entries[0].company, "");
        assert_eq!(entries[0].duration, "2018 to 2020");
    }

    #[test]
    fn test_experience_dash_split_rejoined() {
        let extractor = EntryExtractor::new().unwrap();
        let entries = extractor.extract_experience("Consultant - 2016 - 2018");

        assert_eq!(entries[0].title, "Consultant");
        assert_eq!(entries[0].duration, "2016 - 2018");
    }

    #[test]
    fn test_experience_fallback_duration_range() {
        let extractor = EntryExtractor::new().unwrap();
        let entries = extractor.extract_experience("Freelance developer 2018 to 2021");

        assert_eq!(entries[0].title, "Freelance developer 2018 to 2021");
        assert_eq!(entries[0].company, "");
        assert_eq!(entries[0].duration, "2018 to 2021");
    }

    #[test]
    fn test_experience_fallback_without_range() {
        let extractor = EntryExtractor::new().unwrap();
        let entries = extractor.extract_experience("Shipped the 2019 release");

        assert_eq!(entries[0].title, "Shipped the 2019 release");
        assert_eq!(entries[0].duration, "");
    }

    #[test]
    fn test_role_keyword_is_whole_word() {
        let extractor = EntryExtractor::new().unwrap();
        // "internship" must not fire the "intern" keyword
        assert!(extractor.extract_experience("Completed an internship program").is_empty());
        assert_eq!(extractor.extract_experience("Summer intern, marketing").len(), 1);
    }

    #[test]
    fn test_year_outside_range_does_not_qualify() {
        let extractor = EntryExtractor::new().unwrap();
        assert!(extractor.extract_experience("Shipped 1847 units").is_empty());
    }

    #[test]
    fn test_experience_cap() {
        let extractor = EntryExtractor::new().unwrap();
        let text = (0..12)
            .map(|i| format!("Software Engineer {}", 2005 + i))
            .collect::<Vec<_>>()
            .join("\n");
        let entries = extractor.extract_experience(&text);

        assert_eq!(entries.len(), MAX_EXPERIENCE_ENTRIES);
        assert_eq!(entries[0].title, "Software Engineer 2005");
        assert_eq!(entries[7].title, "Software Engineer 2012");
    }

    #[test]
    fn test_non_qualifying_lines_skipped() {
        let extractor = EntryExtractor::new().unwrap();
        assert!(extractor.extract_experience("Enjoys hiking and photography").is_empty());
    }
}
