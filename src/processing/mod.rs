//! Text analysis module

pub mod analyzer;
pub mod catalog;
pub mod extractor;
pub mod feedback;
pub mod scoring;
pub mod skill_matcher;
