//! Narrative feedback derived from extraction and scoring results

use crate::processing::extractor::EducationEntry;
use crate::processing::scoring::ScoreBreakdown;
use serde::{Deserialize, Serialize};

/// Matched-skill count below which keyword coverage gets a recommendation.
const TARGET_SKILL_COUNT: usize = 5;
/// Matched-skill count below which keyword coverage is listed as an improvement.
const MIN_SKILL_COUNT: usize = 3;
/// Word count below which the content is considered too thin.
const MIN_WORD_COUNT: usize = 300;
/// How many matched skills the strengths summary lists.
const LISTED_SKILL_LIMIT: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Build the narrative feedback lists.
///
/// Every rule is evaluated on its own and appends one fixed template when
/// its condition holds; rule order fixes output order.
pub fn generate(skills: &[String], education: &[EducationEntry], scores: &ScoreBreakdown) -> Feedback {
    let mut recommendations = Vec::new();
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    if skills.len() < TARGET_SKILL_COUNT {
        recommendations.push(
            "Add more skills and keywords relevant to your target roles".to_string(),
        );
    }
    if !scores.has_contact_info {
        recommendations.push(
            "Include contact information such as an email address and phone number".to_string(),
        );
    }
    if !scores.has_section_headings {
        recommendations.push(
            "Organize content under standard section headings like Experience, Education, and Skills"
                .to_string(),
        );
    }
    if scores.word_count < MIN_WORD_COUNT {
        recommendations.push(
            "Expand your work history with measurable accomplishments".to_string(),
        );
    }

    if !skills.is_empty() {
        let listed: Vec<&str> = skills
            .iter()
            .take(LISTED_SKILL_LIMIT)
            .map(|s| s.as_str())
            .collect();
        strengths.push(format!(
            "{} recognized skills found: {}",
            skills.len(),
            listed.join(", ")
        ));
    }
    if !education.is_empty() {
        strengths.push("Education credentials are clearly listed".to_string());
    }

    if skills.len() < MIN_SKILL_COUNT {
        improvements.push("Add more role-specific keywords and technical skills".to_string());
    }
    if !scores.has_section_headings {
        improvements.push(
            "Add clear section headings so parsers can find each part of your background"
                .to_string(),
        );
    }

    Feedback {
        recommendations,
        strengths,
        improvements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(word_count: usize, contact: bool, sections: bool) -> ScoreBreakdown {
        ScoreBreakdown {
            word_count,
            length_score: 0,
            skills_score: 0,
            has_contact_info: contact,
            has_section_headings: sections,
            ats_compatibility: 0,
            overall_score: 40,
        }
    }

    fn entry(line: &str) -> EducationEntry {
        EducationEntry {
            degree: line.to_string(),
            institution: String::new(),
            year: String::new(),
        }
    }

    #[test]
    fn test_all_recommendations_fire_on_empty_results() {
        let feedback = generate(&[], &[], &breakdown(0, false, false));
        assert_eq!(feedback.recommendations.len(), 4);
        assert!(feedback.strengths.is_empty());
        assert_eq!(feedback.improvements.len(), 2);
    }

    #[test]
    fn test_no_recommendations_when_everything_present() {
        let skills: Vec<String> = ["python", "react", "aws", "docker", "sql"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let feedback = generate(&skills, &[], &breakdown(400, true, true));
        assert!(feedback.recommendations.is_empty());
        assert!(feedback.improvements.is_empty());
    }

    #[test]
    fn test_strengths_list_caps_at_six_skills() {
        let skills: Vec<String> = ["python", "react", "aws", "docker", "sql", "git", "linux"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let feedback = generate(&skills, &[], &breakdown(400, true, true));

        assert_eq!(feedback.strengths.len(), 1);
        assert!(feedback.strengths[0].starts_with("7 recognized skills"));
        assert!(feedback.strengths[0].contains("git"));
        assert!(!feedback.strengths[0].contains("linux"));
    }

    #[test]
    fn test_education_strength() {
        let feedback = generate(&[], &[entry("BSc 2019")], &breakdown(0, false, false));
        assert_eq!(feedback.strengths, vec!["Education credentials are clearly listed"]);
    }

    #[test]
    fn test_rule_order_is_stable() {
        let feedback = generate(&[], &[], &breakdown(0, false, false));
        assert!(feedback.recommendations[0].contains("skills and keywords"));
        assert!(feedback.recommendations[1].contains("contact information"));
        assert!(feedback.recommendations[2].contains("section headings"));
        assert!(feedback.recommendations[3].contains("measurable accomplishments"));
    }

    #[test]
    fn test_word_count_rule_boundary() {
        let feedback = generate(&[], &[], &breakdown(300, true, true));
        assert!(!feedback
            .recommendations
            .iter()
            .any(|r| r.contains("measurable accomplishments")));

        let feedback = generate(&[], &[], &breakdown(299, true, true));
        assert!(feedback
            .recommendations
            .iter()
            .any(|r| r.contains("measurable accomplishments")));
    }
}
