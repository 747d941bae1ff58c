//! Input manager routing files to the right text extractor

use crate::error::{Result, ResumeInsightError};
use crate::input::text_extractor::{
    FileType, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;

/// Turns a file path into raw document text.
///
/// Extraction is the fallible half of the pipeline: unsupported formats,
/// unreadable files, and files yielding no text are all reported here, never
/// by the analysis engine downstream.
pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    max_file_size: Option<u64>,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
            max_file_size: None,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Reject files larger than `bytes` before reading them.
    pub fn with_max_size(mut self, bytes: u64) -> Self {
        self.max_file_size = Some(bytes);
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                debug!("Using cached text for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeInsightError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        if let Some(limit) = self.max_file_size {
            let size = tokio::fs::metadata(path).await?.len();
            if size > limit {
                return Err(ResumeInsightError::InvalidInput(format!(
                    "File exceeds the {} byte limit: {} ({} bytes)",
                    limit,
                    path.display(),
                    size
                )));
            }
        }

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::PlainText => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Flattening markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(ResumeInsightError::UnsupportedFormat(format!(
                    "Unsupported file type: {}",
                    path.display()
                )));
            }
        };

        // A readable file that yields only whitespace (a scanned PDF, say) is
        // an extraction failure, not a zero-finding analysis input.
        if text.trim().is_empty() {
            return Err(ResumeInsightError::NoTextExtracted(
                path.display().to_string(),
            ));
        }

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
