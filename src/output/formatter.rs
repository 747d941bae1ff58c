//! Output formatters for rendering analysis reports in multiple formats.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use crate::processing::extractor::{EducationEntry, ExperienceEntry};
use colored::{Color, Colorize};
use serde_json;
use std::path::Path;

/// Trait for rendering an assembled report into one output format.
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and rich presentation.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and shareable reports.
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates the different formatters.
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_presence(&self, present: bool) -> String {
        if present {
            self.colorize("detected", Color::Green)
        } else {
            self.colorize("not found", Color::Red)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        // Header
        output.push_str(&self.format_header("📊 RESUME ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            chrono::DateTime::<chrono::Utc>::from(report.metadata.generated_at)
                .format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        // Summary
        output.push_str(&self.format_header("Summary", 2));
        let score_badge = self.format_score_badge(report.analysis.score);
        output.push_str(&format!(
            "Overall Score: {}% {}\n",
            report.analysis.score, score_badge
        ));
        output.push_str(&format!(
            "ATS Compatibility: {}%\n",
            report.analysis.ats_compatibility
        ));
        output.push_str(&format!(
            "Verdict: {}\n",
            self.colorize(report.verdict(), Color::Cyan)
        ));

        // Score Breakdown (only in detailed mode)
        if self.detailed {
            output.push_str(&self.format_header("Score Breakdown", 3));
            output.push_str(&format!(
                "Word count: {} (length score: {}%)\n",
                report.breakdown.word_count, report.breakdown.length_score
            ));
            output.push_str(&format!(
                "Skill coverage: {}% ({} of {} catalog skills)\n",
                report.breakdown.skills_score,
                report.analysis.skills.len(),
                report.metadata.catalog_size
            ));
            output.push_str(&format!(
                "Contact info: {}\n",
                self.format_presence(report.breakdown.has_contact_info)
            ));
            output.push_str(&format!(
                "Section headings: {}\n",
                self.format_presence(report.breakdown.has_section_headings)
            ));
        }

        // Skills
        if !report.analysis.skills.is_empty() {
            output.push_str(&self.format_header(
                &format!("🛠 Skills Detected ({})", report.analysis.skills.len()),
                3,
            ));
            output.push_str(&format!("{}\n", report.analysis.skills.join(", ")));
        }

        // Experience
        if !report.analysis.experience.is_empty() {
            output.push_str(&self.format_header(
                &format!("💼 Experience ({})", report.analysis.experience.len()),
                3,
            ));
            for entry in &report.analysis.experience {
                output.push_str(&format!("  • {}\n", Self::format_experience_entry(entry)));
            }
        }

        // Education
        if !report.analysis.education.is_empty() {
            output.push_str(&self.format_header(
                &format!("🎓 Education ({})", report.analysis.education.len()),
                3,
            ));
            for entry in &report.analysis.education {
                output.push_str(&format!("  • {}\n", Self::format_education_entry(entry)));
            }
        }

        // Strengths
        if !report.analysis.strengths.is_empty() {
            output.push_str(&self.format_header("✅ Strengths", 3));
            for strength in &report.analysis.strengths {
                output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
            }
        }

        // Improvement Areas
        if !report.analysis.improvements.is_empty() {
            output.push_str(&self.format_header("🎯 Improvement Areas", 3));
            for area in &report.analysis.improvements {
                output.push_str(&format!("  • {}\n", self.colorize(area, Color::Yellow)));
            }
        }

        // Recommendations
        if !report.analysis.recommendations.is_empty() {
            output.push_str(&self.format_header("📋 Recommendations", 2));
            for (i, rec) in report.analysis.recommendations.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, rec));
            }
        }

        // Footer
        output.push_str(&format!(
            "\n{} Generated by Resume Insight v{} | Skill catalog: {} entries\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.analyzer_version,
            report.metadata.catalog_size
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl ConsoleFormatter {
    fn format_experience_entry(entry: &ExperienceEntry) -> String {
        let mut line = entry.title.clone();
        if !entry.company.is_empty() {
            line.push_str(" at ");
            line.push_str(&entry.company);
        }
        if !entry.duration.is_empty() {
            line.push_str(&format!(" ({})", entry.duration));
        }
        line
    }

    fn format_education_entry(entry: &EducationEntry) -> String {
        let mut line = entry.degree.clone();
        if !entry.institution.is_empty() {
            line.push_str(", ");
            line.push_str(&entry.institution);
        }
        if !entry.year.is_empty() {
            line.push_str(&format!(" ({})", entry.year));
        }
        line
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        // Title
        output.push_str("# 📊 Resume Analysis Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                chrono::DateTime::<chrono::Utc>::from(report.metadata.generated_at)
                    .format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Source:** `{}`\n\n",
                Path::new(&report.metadata.source_file)
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_else(|| report.metadata.source_file.clone())
            ));
        }

        // Summary
        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Overall Score:** {}% {}\n\n",
            report.analysis.score,
            Self::markdown_score_badge(report.analysis.score)
        ));
        output.push_str(&format!(
            "**ATS Compatibility:** {}%\n\n",
            report.analysis.ats_compatibility
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", report.verdict()));

        // Score Breakdown
        output.push_str("### Score Breakdown\n\n");
        output.push_str("| Component | Value |\n");
        output.push_str("|-----------|-------|\n");
        output.push_str(&format!("| Word count | {} |\n", report.breakdown.word_count));
        output.push_str(&format!(
            "| Length score | {}% |\n",
            report.breakdown.length_score
        ));
        output.push_str(&format!(
            "| Skill coverage | {}% |\n",
            report.breakdown.skills_score
        ));
        output.push_str(&format!(
            "| Contact info | {} |\n",
            if report.breakdown.has_contact_info { "yes" } else { "no" }
        ));
        output.push_str(&format!(
            "| Section headings | {} |\n",
            if report.breakdown.has_section_headings { "yes" } else { "no" }
        ));
        output.push_str(&format!(
            "| ATS compatibility | {}% |\n",
            report.breakdown.ats_compatibility
        ));
        output.push_str("\n");

        // Skills
        if !report.analysis.skills.is_empty() {
            output.push_str(&format!(
                "### 🛠 Skills Detected ({})\n\n",
                report.analysis.skills.len()
            ));
            for skill in &report.analysis.skills {
                output.push_str(&format!("- {}\n", skill));
            }
            output.push_str("\n");
        }

        // Experience
        if !report.analysis.experience.is_empty() {
            output.push_str("### 💼 Experience\n\n");
            for entry in &report.analysis.experience {
                output.push_str(&format!(
                    "- {}\n",
                    ConsoleFormatter::format_experience_entry(entry)
                ));
            }
            output.push_str("\n");
        }

        // Education
        if !report.analysis.education.is_empty() {
            output.push_str("### 🎓 Education\n\n");
            for entry in &report.analysis.education {
                output.push_str(&format!(
                    "- {}\n",
                    ConsoleFormatter::format_education_entry(entry)
                ));
            }
            output.push_str("\n");
        }

        // Strengths
        if !report.analysis.strengths.is_empty() {
            output.push_str("### ✅ Strengths\n\n");
            for strength in &report.analysis.strengths {
                output.push_str(&format!("- {}\n", strength));
            }
            output.push_str("\n");
        }

        // Improvement Areas
        if !report.analysis.improvements.is_empty() {
            output.push_str("### 🎯 Areas for Improvement\n\n");
            for area in &report.analysis.improvements {
                output.push_str(&format!("- {}\n", area));
            }
            output.push_str("\n");
        }

        // Recommendations
        if !report.analysis.recommendations.is_empty() {
            output.push_str("## 📋 Recommendations\n\n");
            for (i, rec) in report.analysis.recommendations.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, rec));
            }
            output.push_str("\n");
        }

        // Footer
        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by Resume Insight v{} | Skill catalog: {} entries*\n",
                report.metadata.analyzer_version, report.metadata.catalog_size
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl MarkdownFormatter {
    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            90..=100 => "🟢 Excellent",
            80..=89 => "🟡 Very Good",
            70..=79 => "🟠 Good",
            60..=69 => "🔴 Fair",
            50..=59 => "🔴 Below Average",
            _ => "🔴 Needs Work",
        }
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_analysis{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_analysis{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_analysis{}.md", base_name, timestamp_suffix),
    }
}
