//! Release report read model
//!
//! Dates are pre-rendered as `YYYY-MM-DD` strings so that every output
//! format shows them identically.

use serde::Serialize;

/// Main read model for a release report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportReadModel {
    pub metadata: ReportMetadataView,
    /// Product groups in mapping-table order
    pub groups: Vec<ProductGroupView>,
    /// One entry per mapping-table operator
    pub operators: Vec<OperatorMatchView>,
    pub summary: SummaryView,
}

impl ReportReadModel {
    /// Groups with at least one release to show
    pub fn groups_with_releases(&self) -> impl Iterator<Item = &ProductGroupView> {
        self.groups.iter().filter(|group| !group.releases.is_empty())
    }

    /// Groups with nothing to show
    pub fn groups_without_releases(&self) -> impl Iterator<Item = &ProductGroupView> {
        self.groups.iter().filter(|group| group.releases.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMetadataView {
    pub tool_name: String,
    pub tool_version: String,
    pub generated_at: String,
    pub query_date: String,
    pub export_source: String,
    pub record_count: usize,
    pub show_all: bool,
    pub closest_k: usize,
    /// False when version filtering was disabled
    pub version_filtering: bool,
    pub version_filters: Vec<VersionFilterView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionFilterView {
    pub abbreviation: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductGroupView {
    pub product_suite: String,
    pub operators: Vec<String>,
    pub has_future_releases: bool,
    /// Upcoming releases before truncation
    pub future_count: usize,
    pub releases: Vec<ReleaseView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseView {
    pub business_unit: String,
    pub release: Option<String>,
    pub ga_date: Option<String>,
    pub ga_name: Option<String>,
    pub maintainer: Option<String>,
    pub link: Option<String>,
    pub product_suite: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorMatchView {
    pub operator: String,
    pub product_suite: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_name: Option<String>,
    /// `release_name_match`, `product_suite_match` or `no_match`
    pub strategy: String,
    pub matched_records: usize,
    pub filtered_out: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub total_groups: usize,
    pub groups_with_future: usize,
    pub groups_without_future: usize,
    pub total_future_releases: usize,
    pub total_operators: usize,
    pub operators_with_future: usize,
    pub operators_without_future: usize,
    pub skipped_mapping_lines: usize,
}
