/// Mock implementations for testing
mod mock_constraint_reader;
mod mock_export_reader;
mod mock_mapping_reader;
mod mock_progress_reporter;

pub use mock_constraint_reader::MockConstraintReader;
pub use mock_export_reader::MockExportReader;
pub use mock_mapping_reader::MockMappingReader;
pub use mock_progress_reporter::MockProgressReporter;
