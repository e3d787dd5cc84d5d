/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod constraint_reader;
pub mod export_reader;
pub mod formatter;
pub mod mapping_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use constraint_reader::ConstraintReader;
pub use export_reader::ExportReader;
pub use formatter::ReportFormatter;
pub use mapping_reader::MappingReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
