//! Builder for constructing ReportReadModel from a search response

use super::report_read_model::{
    OperatorMatchView, ProductGroupView, ReleaseView, ReportMetadataView, ReportReadModel,
    SummaryView, VersionFilterView,
};
use crate::application::dto::SearchResponse;
use crate::release_matching::domain::{MatchResult, ProductGroup, ReleaseRecord};

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Date layout used in every report format
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Builder for constructing ReportReadModel from domain objects
pub struct ReportReadModelBuilder;

impl ReportReadModelBuilder {
    /// Builds the read model
    ///
    /// # Arguments
    /// * `response` - Output of the search use case
    /// * `generated_at` - Timestamp printed in the report header
    pub fn build(response: &SearchResponse, generated_at: &str) -> ReportReadModel {
        ReportReadModel {
            metadata: Self::build_metadata(response, generated_at),
            groups: response
                .report
                .groups
                .iter()
                .map(Self::build_group)
                .collect(),
            operators: response
                .match_results
                .iter()
                .map(Self::build_operator)
                .collect(),
            summary: Self::build_summary(response),
        }
    }

    fn build_metadata(response: &SearchResponse, generated_at: &str) -> ReportMetadataView {
        let version_filters = response
            .constraint
            .iter()
            .flat_map(|constraint| constraint.iter())
            .map(|(abbreviation, version)| VersionFilterView {
                abbreviation: abbreviation.to_string(),
                version: version.to_string(),
            })
            .collect();

        ReportMetadataView {
            tool_name: TOOL_NAME.to_string(),
            tool_version: TOOL_VERSION.to_string(),
            generated_at: generated_at.to_string(),
            query_date: response.query_date.format(DATE_FORMAT).to_string(),
            export_source: response.export_path.display().to_string(),
            record_count: response.record_count,
            show_all: response.show_all,
            closest_k: response.closest_k,
            version_filtering: response.constraint.is_some(),
            version_filters,
        }
    }

    fn build_group(group: &ProductGroup) -> ProductGroupView {
        ProductGroupView {
            product_suite: group.product_suite().to_string(),
            operators: group.operators().to_vec(),
            has_future_releases: group.has_future_releases(),
            future_count: group.future_count(),
            releases: group.releases().iter().map(Self::build_release).collect(),
        }
    }

    fn build_release(record: &ReleaseRecord) -> ReleaseView {
        ReleaseView {
            business_unit: record.business_unit().to_string(),
            release: record.release_name().map(str::to_string),
            ga_date: record
                .ga_date()
                .map(|date| date.format(DATE_FORMAT).to_string()),
            ga_name: record.ga_name().map(str::to_string),
            maintainer: record.maintainer().map(str::to_string),
            link: record.link().map(str::to_string),
            product_suite: record.product_suite().to_string(),
        }
    }

    fn build_operator(result: &MatchResult) -> OperatorMatchView {
        let mapping = result.mapping();
        OperatorMatchView {
            operator: mapping.operator_name().to_string(),
            product_suite: mapping.product_suite().to_string(),
            release_name: mapping.release_name().map(str::to_string),
            strategy: result.strategy().to_string(),
            matched_records: result.records().len(),
            filtered_out: result.filtered_out(),
        }
    }

    fn build_summary(response: &SearchResponse) -> SummaryView {
        let summary = response.report.summary;
        SummaryView {
            total_groups: summary.total_groups,
            groups_with_future: summary.groups_with_future,
            groups_without_future: summary.groups_without_future,
            total_future_releases: summary.total_future_releases,
            total_operators: summary.total_operators,
            operators_with_future: summary.operators_with_future,
            operators_without_future: summary.operators_without_future,
            skipped_mapping_lines: response.skipped_mapping_lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::application::read_models::test_fixtures::sample_model;

    #[test]
    fn test_build_metadata() {
        let model = sample_model();
        let metadata = &model.metadata;

        assert_eq!(metadata.tool_name, "release-radar");
        assert_eq!(metadata.generated_at, "2026-10-15 09:30:00");
        assert_eq!(metadata.query_date, "2026-10-15");
        assert_eq!(metadata.export_source, "Product-Pages-Export.csv");
        assert!(metadata.version_filtering);
        assert_eq!(metadata.version_filters.len(), 1);
        assert_eq!(metadata.version_filters[0].abbreviation, "OCP");
        assert_eq!(metadata.version_filters[0].version, "4.20");
    }

    #[test]
    fn test_build_groups_in_mapping_order() {
        let model = sample_model();
        let suites: Vec<&str> = model
            .groups
            .iter()
            .map(|group| group.product_suite.as_str())
            .collect();
        assert_eq!(
            suites,
            vec!["Red Hat OpenShift Container Platform", "Red Hat Quay"]
        );

        let ocp = &model.groups[0];
        assert!(ocp.has_future_releases);
        assert_eq!(ocp.releases[0].ga_date.as_deref(), Some("2026-11-18"));
        assert_eq!(ocp.releases[0].maintainer, None);
        assert!(!model.groups[1].has_future_releases);
    }

    #[test]
    fn test_build_operators_and_summary() {
        let model = sample_model();

        assert_eq!(model.operators.len(), 2);
        assert_eq!(model.operators[0].strategy, "product_suite_match");
        assert_eq!(model.operators[1].strategy, "no_match");
        assert_eq!(model.summary.total_operators, 2);
        assert_eq!(model.summary.groups_with_future, 1);
        assert_eq!(model.summary.skipped_mapping_lines, 1);
    }
}
