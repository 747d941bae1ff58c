//! Report structure wrapping an analysis with run metadata

use crate::processing::analyzer::AnalysisResult;
use crate::processing::scoring::ScoreBreakdown;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// A complete analysis run: the engine's result, the score components
/// behind it, and metadata about the run itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis: AnalysisResult,
    pub breakdown: ScoreBreakdown,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: SystemTime,

    /// Version of the analyzer used
    pub analyzer_version: String,

    /// File the text was extracted from
    pub source_file: String,

    /// Total processing time
    pub processing_time_ms: u64,

    /// Size of the skill catalog the matcher ran with
    pub catalog_size: usize,
}

impl AnalysisReport {
    pub fn new(
        analysis: AnalysisResult,
        breakdown: ScoreBreakdown,
        source_file: String,
        processing_time_ms: u64,
        catalog_size: usize,
    ) -> Self {
        Self {
            analysis,
            breakdown,
            metadata: ReportMetadata {
                generated_at: SystemTime::now(),
                analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
                source_file,
                processing_time_ms,
                catalog_size,
            },
        }
    }

    /// One-line verdict for the overall score.
    pub fn verdict(&self) -> &'static str {
        match self.analysis.score {
            90..=100 => "Excellent - the resume is in strong shape",
            80..=89 => "Very good - minor polish could help",
            70..=79 => "Good - some targeted improvements recommended",
            60..=69 => "Fair - several improvements needed",
            50..=59 => "Below average - significant improvements required",
            _ => "Needs work - major revisions recommended",
        }
    }
}
