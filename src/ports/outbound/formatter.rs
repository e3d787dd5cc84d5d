use crate::application::read_models::ReportReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering the release report
///
/// This port abstracts the formatting logic for the different report
/// formats (plain text, Markdown, JSON).
pub trait ReportFormatter {
    /// Formats the report read model
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &ReportReadModel) -> Result<String>;
}
