// src/config.rs

/// Presentation switches shared by the one-shot and interactive modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Print the correspondence table after the one-shot report.
    pub table_after_report: bool,
    /// Print the correspondence table after the interactive full report.
    pub table_in_details: bool,
    /// One-shot mode prints JSON instead of the text report.
    pub json: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            table_after_report: true,
            table_in_details: false,
            json: false,
        }
    }
}
