/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod search_request;
mod search_response;

pub use output_format::OutputFormat;
pub use search_request::{ExportSource, SearchRequest};
pub use search_response::SearchResponse;
