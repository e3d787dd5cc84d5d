use super::version_filter::VersionFilter;
use crate::release_matching::domain::{
    MappingTable, MatchResult, MatchStrategy, OperatorMapping, ReleaseRecord,
};

/// Matcher - finds the release records belonging to each operator mapping
///
/// Lookup order per mapping:
/// 1. release name (when the mapping declares one); any hit ends the search
/// 2. product suite
///
/// Both comparisons are exact after trimming and ignoring case. Candidates
/// keep record-store order and are then passed through the version filter.
pub struct Matcher<'f> {
    filter: &'f VersionFilter,
}

impl<'f> Matcher<'f> {
    pub fn new(filter: &'f VersionFilter) -> Self {
        Self { filter }
    }

    /// Matches every mapping of the table, in table order.
    pub fn match_all(&self, table: &MappingTable, records: &[ReleaseRecord]) -> Vec<MatchResult> {
        table
            .entries()
            .iter()
            .map(|mapping| self.match_mapping(mapping, records))
            .collect()
    }

    pub fn match_mapping(&self, mapping: &OperatorMapping, records: &[ReleaseRecord]) -> MatchResult {
        let (strategy, candidates) = Self::find_candidates(mapping, records);
        if candidates.is_empty() {
            return MatchResult::no_match(mapping.clone());
        }

        let total = candidates.len();
        let kept: Vec<ReleaseRecord> = candidates
            .into_iter()
            .filter(|record| self.filter.matches(record))
            .cloned()
            .collect();
        let filtered_out = total - kept.len();

        MatchResult::new(mapping.clone(), strategy, kept, filtered_out)
    }

    fn find_candidates<'r>(
        mapping: &OperatorMapping,
        records: &'r [ReleaseRecord],
    ) -> (MatchStrategy, Vec<&'r ReleaseRecord>) {
        if let Some(release_name) = mapping.release_name() {
            let by_release: Vec<&ReleaseRecord> = records
                .iter()
                .filter(|record| {
                    record
                        .release_name()
                        .is_some_and(|name| same_text(name, release_name))
                })
                .collect();
            if !by_release.is_empty() {
                return (MatchStrategy::ReleaseName, by_release);
            }
        }

        let by_suite: Vec<&ReleaseRecord> = records
            .iter()
            .filter(|record| same_text(record.product_suite(), mapping.product_suite()))
            .collect();
        (MatchStrategy::ProductSuite, by_suite)
    }
}

/// Trimmed, case-insensitive equality
fn same_text(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release_matching::domain::VersionConstraint;
    use crate::release_matching::policies::ProductLexicon;
    use chrono::NaiveDate;

    fn record(product: &str, release: Option<&str>, ga: Option<(i32, u32, u32)>) -> ReleaseRecord {
        ReleaseRecord::new(
            product.to_string(),
            release.map(str::to_string),
            "BU".to_string(),
        )
        .with_ga_date(ga.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)))
    }

    fn mapping(operator: &str, product: &str, release: Option<&str>) -> OperatorMapping {
        OperatorMapping::new(
            operator.to_string(),
            product.to_string(),
            release.map(str::to_string),
        )
    }

    #[test]
    fn test_release_name_match_takes_priority() {
        let records = vec![
            record("Suite A", Some("Suite A 2.0"), Some((2027, 5, 1))),
            record("Suite A", Some("Suite A 1.0"), Some((2025, 5, 1))),
        ];
        let filter = VersionFilter::disabled();
        let result = Matcher::new(&filter)
            .match_mapping(&mapping("op1", "Suite A", Some("Suite A 2.0")), &records);

        assert_eq!(result.strategy(), MatchStrategy::ReleaseName);
        assert_eq!(result.records(), &records[..1]);
    }

    #[test]
    fn test_falls_back_to_product_suite() {
        let records = vec![
            record("Suite B", Some("Suite B 1.0"), None),
            record("Suite A", Some("Suite A 1.0"), None),
            record("Suite A", Some("Suite A 1.1"), None),
        ];
        let filter = VersionFilter::disabled();
        let result = Matcher::new(&filter)
            .match_mapping(&mapping("op1", "Suite A", Some("Suite A 9.9")), &records);

        assert_eq!(result.strategy(), MatchStrategy::ProductSuite);
        assert_eq!(result.records(), &records[1..]);
    }

    #[test]
    fn test_matching_is_trimmed_and_case_insensitive() {
        let records = vec![record("  suite a ", Some(" SUITE A 2.0 "), None)];
        let filter = VersionFilter::disabled();
        let matcher = Matcher::new(&filter);

        let by_release = matcher.match_mapping(&mapping("op1", "x", Some("suite a 2.0")), &records);
        assert_eq!(by_release.strategy(), MatchStrategy::ReleaseName);

        let by_suite = matcher.match_mapping(&mapping("op2", "SUITE A", None), &records);
        assert_eq!(by_suite.strategy(), MatchStrategy::ProductSuite);
    }

    #[test]
    fn test_suite_match_is_exact_not_substring() {
        let records = vec![record("Suite A Plus", None, None)];
        let filter = VersionFilter::disabled();
        let result = Matcher::new(&filter).match_mapping(&mapping("op1", "Suite A", None), &records);
        assert_eq!(result.strategy(), MatchStrategy::None);
    }

    #[test]
    fn test_unknown_suite_is_no_match() {
        let records = vec![record("Suite A", None, None)];
        let filter = VersionFilter::disabled();
        let result =
            Matcher::new(&filter).match_mapping(&mapping("op1", "Never Seen", None), &records);

        assert_eq!(result.strategy(), MatchStrategy::None);
        assert!(result.records().is_empty());
        assert_eq!(result.filtered_out(), 0);
    }

    #[test]
    fn test_version_filter_drops_candidates() {
        let suite = "Red Hat OpenShift Container Platform";
        let records = vec![
            record(suite, Some("OpenShift Container Platform 4.20"), None),
            record(suite, Some("OpenShift Container Platform 4.19"), None),
        ];
        let filter = VersionFilter::new(
            ProductLexicon::default(),
            Some(VersionConstraint::new().with("OCP", "4.20")),
        );
        let result = Matcher::new(&filter).match_mapping(&mapping("cluster-logging", suite, None), &records);

        assert_eq!(result.strategy(), MatchStrategy::ProductSuite);
        assert_eq!(result.records(), &records[..1]);
        assert_eq!(result.filtered_out(), 1);
    }

    #[test]
    fn test_filtering_every_candidate_demotes_to_no_match() {
        let suite = "Red Hat OpenShift Container Platform";
        let records = vec![record(suite, Some("OpenShift Container Platform 4.19"), None)];
        let filter = VersionFilter::new(
            ProductLexicon::default(),
            Some(VersionConstraint::new().with("OCP", "4.20")),
        );
        let result = Matcher::new(&filter).match_mapping(&mapping("op", suite, None), &records);

        assert_eq!(result.strategy(), MatchStrategy::None);
        assert_eq!(result.filtered_out(), 1);
    }

    #[test]
    fn test_release_name_hits_filtered_away_do_not_fall_back() {
        let suite = "Red Hat OpenShift Container Platform";
        let records = vec![
            record(suite, Some("OCP 4.19 EUS"), None),
            record(suite, Some("OpenShift Container Platform 4.20"), None),
        ];
        let filter = VersionFilter::new(
            ProductLexicon::default(),
            Some(VersionConstraint::new().with("OCP", "4.20")),
        );
        let result = Matcher::new(&filter)
            .match_mapping(&mapping("op", suite, Some("OCP 4.19 EUS")), &records);

        assert_eq!(result.strategy(), MatchStrategy::None);
    }

    #[test]
    fn test_match_all_preserves_table_order() {
        let records = vec![record("Suite A", None, None), record("Suite B", None, None)];
        let table: MappingTable = vec![
            mapping("op-b", "Suite B", None),
            mapping("op-x", "Suite X", None),
            mapping("op-a", "Suite A", None),
        ]
        .into_iter()
        .collect();
        let filter = VersionFilter::disabled();
        let results = Matcher::new(&filter).match_all(&table, &records);

        let summary: Vec<(&str, MatchStrategy)> = results
            .iter()
            .map(|r| (r.mapping().operator_name(), r.strategy()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("op-b", MatchStrategy::ProductSuite),
                ("op-x", MatchStrategy::None),
                ("op-a", MatchStrategy::ProductSuite),
            ]
        );
    }
}
