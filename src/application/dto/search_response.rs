use crate::release_matching::domain::{MatchResult, ReleaseReport, VersionConstraint};
use chrono::NaiveDate;
use std::path::PathBuf;

/// SearchResponse - everything the use case produced, ready to be turned
/// into a read model and formatted
#[derive(Debug, Clone)]
pub struct SearchResponse {
    /// Product groups and summary counts
    pub report: ReleaseReport,
    /// Per-operator match outcomes, in mapping-table order
    pub match_results: Vec<MatchResult>,
    /// Version constraint in effect; `None` when filtering was disabled
    pub constraint: Option<VersionConstraint>,
    /// Export file that was read
    pub export_path: PathBuf,
    /// Number of records in the export
    pub record_count: usize,
    /// Mapping lines skipped as malformed
    pub skipped_mapping_lines: usize,
    /// Reference date used for the upcoming filter
    pub query_date: NaiveDate,
    pub show_all: bool,
    pub closest_k: usize,
}
