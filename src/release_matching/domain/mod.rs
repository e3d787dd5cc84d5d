pub mod match_result;
pub mod operator_mapping;
pub mod product_group;
pub mod release_record;
pub mod version_constraint;

pub use match_result::{MatchResult, MatchStrategy};
pub use operator_mapping::{MappingTable, OperatorMapping};
pub use product_group::{ProductGroup, ReleaseReport, SearchSummary};
pub use release_record::ReleaseRecord;
pub use version_constraint::VersionConstraint;
