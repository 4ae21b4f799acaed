use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TextFormatter};
use crate::application::dto::ReportFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Selects the formatter adapter for a [`ReportFormat`]. Colour only
/// applies to the text formatter.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use failing_assets::application::dto::ReportFormat;
    /// use failing_assets::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(ReportFormat::Json, false);
    /// ```
    pub fn create(format: ReportFormat, colored: bool) -> Box<dyn ReportFormatter> {
        match format {
            ReportFormat::Text => Box::new(TextFormatter::new(colored)),
            ReportFormat::Markdown => Box::new(MarkdownFormatter::new()),
            ReportFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use failing_assets::application::dto::ReportFormat;
    /// use failing_assets::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(ReportFormat::Markdown);
    /// assert_eq!(message, "📝 Generating Markdown report...");
    /// ```
    pub fn progress_message(format: ReportFormat) -> &'static str {
        match format {
            ReportFormat::Text => "📝 Generating text report...",
            ReportFormat::Markdown => "📝 Generating Markdown report...",
            ReportFormat::Json => "📝 Generating JSON report...",
        }
    }
}
