//! Read models for the release report
//!
//! View-optimized, serializable structs that every formatter renders from.

mod report_read_model;
mod report_read_model_builder;

pub use report_read_model::{
    OperatorMatchView, ProductGroupView, ReleaseView, ReportMetadataView, ReportReadModel,
    SummaryView, VersionFilterView,
};
pub use report_read_model_builder::ReportReadModelBuilder;

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::{ReportReadModel, ReportReadModelBuilder};
    use crate::application::dto::SearchResponse;
    use crate::release_matching::domain::{
        MatchResult, MatchStrategy, OperatorMapping, ReleaseRecord, VersionConstraint,
    };
    use crate::release_matching::services::Aggregator;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    /// Two operators: one OCP match with an upcoming release, one Quay
    /// operator without any match.
    pub(crate) fn sample_model() -> ReportReadModel {
        let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let ocp_release = ReleaseRecord::new(
            "Red Hat OpenShift Container Platform".to_string(),
            Some("OpenShift Container Platform 4.20".to_string()),
            "Hybrid Platforms".to_string(),
        )
        .with_ga_date(NaiveDate::from_ymd_opt(2026, 11, 18))
        .with_ga_name(Some("OCP 4.20 GA".to_string()))
        .with_link(Some("https://example.com/ocp|4.20".to_string()));

        let match_results = vec![
            MatchResult::new(
                OperatorMapping::new(
                    "cluster-logging".to_string(),
                    "Red Hat OpenShift Container Platform".to_string(),
                    None,
                ),
                MatchStrategy::ProductSuite,
                vec![ocp_release],
                1,
            ),
            MatchResult::no_match(OperatorMapping::new(
                "quay-operator".to_string(),
                "Red Hat Quay".to_string(),
                Some("Quay 9.9".to_string()),
            )),
        ];
        let report = Aggregator::new(today).aggregate(&match_results);

        let response = SearchResponse {
            report,
            match_results,
            constraint: Some(VersionConstraint::new().with("OCP", "4.20")),
            export_path: PathBuf::from("Product-Pages-Export.csv"),
            record_count: 3,
            skipped_mapping_lines: 1,
            query_date: today,
            show_all: false,
            closest_k: 2,
        };

        ReportReadModelBuilder::build(&response, "2026-10-15 09:30:00")
    }
}
