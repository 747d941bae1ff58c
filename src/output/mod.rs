//! Output and report generation module

pub mod formatter;
pub mod report;
