use crate::application::read_models::FailingAssetsReport;
use crate::shared::Result;

/// ReportFormatter port for rendering the failing-assets report
///
/// Implementations exist for plain text, Markdown and JSON.
pub trait ReportFormatter {
    /// Renders the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &FailingAssetsReport) -> Result<String>;
}
