//! Analysis engine combining skill matching, entry extraction, scoring, and feedback

use crate::error::Result;
use crate::processing::extractor::{EducationEntry, EntryExtractor, ExperienceEntry};
use crate::processing::feedback;
use crate::processing::scoring::{ScoreBreakdown, Scorer};
use crate::processing::skill_matcher::SkillMatcher;
use log::debug;
use serde::{Deserialize, Serialize};

/// Structured assessment of one document's extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall quality score, 0-100.
    pub score: u8,
    /// ATS-compatibility score, 0-100.
    pub ats_compatibility: u8,
    /// Matched catalog skills, catalog order, canonical spelling.
    pub skills: Vec<String>,
    /// At most 8 entries, source line order.
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Runs the analysis stages over raw text.
///
/// Holds only precompiled patterns, so one engine can be shared freely
/// across threads and reused for any number of analyses.
pub struct AnalysisEngine {
    skill_matcher: SkillMatcher,
    extractor: EntryExtractor,
    scorer: Scorer,
}

impl AnalysisEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            skill_matcher: SkillMatcher::new()?,
            extractor: EntryExtractor::new()?,
            scorer: Scorer::new()?,
        })
    }

    /// Analyze raw text into a fully populated result.
    ///
    /// Total over its input: every string, including the empty one, yields a
    /// valid result, and identical text always yields an identical result.
    /// Absence of skills or entries is expressed as empty lists, never as an
    /// error.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let skills = self.skill_matcher.find_skills(text);
        let education = self.extractor.extract_education(text);
        let experience = self.extractor.extract_experience(text);
        let scores = self.scorer.score(text, skills.len(), self.skill_matcher.catalog_size());
        debug!(
            "Analyzed {} words: {} skills, {} experience, {} education, score {}, ats {}",
            scores.word_count,
            skills.len(),
            experience.len(),
            education.len(),
            scores.overall_score,
            scores.ats_compatibility
        );
        let feedback = feedback::generate(&skills, &education, &scores);

        AnalysisResult {
            score: scores.overall_score,
            ats_compatibility: scores.ats_compatibility,
            skills,
            experience,
            education,
            recommendations: feedback.recommendations,
            strengths: feedback.strengths,
            improvements: feedback.improvements,
        }
    }

    /// Score components for the same text, for detailed reporting.
    pub fn score_breakdown(&self, text: &str) -> ScoreBreakdown {
        let matched = self.skill_matcher.find_skills(text).len();
        self.scorer.score(text, matched, self.skill_matcher.catalog_size())
    }

    pub fn catalog_size(&self) -> usize {
        self.skill_matcher.catalog_size()
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new().expect("Failed to create default analysis engine")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let engine = AnalysisEngine::new().unwrap();
        let text = "Jane Doe\nSoftware Engineer at Acme\nSkills: Python, React\nBachelor of Arts, 2015\njane@example.com";
        assert_eq!(engine.analyze(text), engine.analyze(text));
    }

    #[test]
    fn test_empty_input() {
        let engine = AnalysisEngine::new().unwrap();
        let result = engine.analyze("");

        assert!(result.skills.is_empty());
        assert!(result.education.is_empty());
        assert!(result.experience.is_empty());
        assert_eq!(result.score, 40);
        assert_eq!(result.ats_compatibility, 0);
        assert_eq!(result.recommendations.len(), 4);
    }

    #[test]
    fn test_boundedness() {
        let engine = AnalysisEngine::new().unwrap();
        let dense = vec!["python java react aws docker kubernetes sql git linux rust"; 200].join("\n");
        let texts = ["", "plain words only", dense.as_str()];
        for text in texts {
            let result = engine.analyze(text);
            assert!(result.score <= 100);
            assert!(result.ats_compatibility <= 100);
            assert!(result.experience.len() <= 8);
        }
    }

    #[test]
    fn test_stage_outputs_assemble() {
        let engine = AnalysisEngine::new().unwrap();
        let result = engine.analyze("Django and Flask developer since 2019");

        assert_eq!(result.skills, vec!["django", "flask"]);
        assert_eq!(result.experience.len(), 1);
        assert!(result.strengths.iter().any(|s| s.contains("django, flask")));
    }

    #[test]
    fn test_end_to_end_scenario() {
        let engine = AnalysisEngine::new().unwrap();

        // 350 words: heading, skills line, contact line, then filler chosen
        // to hit no catalog token
        let filler_sentence =
            "Worked with partner groups delivering stable tools for demanding seasonal clients.";
        let mut text = String::from("Experience\n");
        text.push_str("Python React AWS\n");
        text.push_str("Reach me via jane@example.com\n");
        for _ in 0..31 {
            text.push_str(filler_sentence);
            text.push('\n');
        }
        text.push_str("Regards");
        assert_eq!(text.split_whitespace().count(), 350);

        let result = engine.analyze(&text);

        assert_eq!(result.skills, vec!["python", "react", "aws"]);
        assert_eq!(result.score, 68);
        assert_eq!(result.ats_compatibility, 27);
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("skills and keywords")));
        assert!(!result
            .recommendations
            .iter()
            .any(|r| r.contains("contact information")));
        assert!(!result
            .recommendations
            .iter()
            .any(|r| r.contains("section headings")));
        assert!(!result
            .recommendations
            .iter()
            .any(|r| r.contains("measurable accomplishments")));
    }

    #[test]
    fn test_zero_findings_is_not_an_error() {
        let engine = AnalysisEngine::new().unwrap();
        let result = engine.analyze("lorem ipsum dolor sit amet");

        assert!(result.skills.is_empty());
        assert_eq!(result.score, 40);
        assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn test_breakdown_matches_result() {
        let engine = AnalysisEngine::new().unwrap();
        let text = "Skills: Python and SQL\ncall 5551234567";
        let result = engine.analyze(text);
        let breakdown = engine.score_breakdown(text);

        assert_eq!(result.score, breakdown.overall_score);
        assert_eq!(result.ats_compatibility, breakdown.ats_compatibility);
    }
}
