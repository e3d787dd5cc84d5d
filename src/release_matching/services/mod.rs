mod aggregator;
mod constraint_parser;
mod mapping_parser;
mod matcher;
mod record_store;
mod version_filter;

pub use aggregator::{Aggregator, DEFAULT_CLOSEST_K};
pub use constraint_parser::{ConstraintParser, ParsedConstraint};
pub use mapping_parser::MappingParser;
pub use matcher::Matcher;
pub use record_store::RecordStore;
pub use version_filter::VersionFilter;
