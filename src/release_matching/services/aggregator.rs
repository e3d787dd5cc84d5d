use crate::release_matching::domain::{
    MatchResult, ProductGroup, ReleaseRecord, ReleaseReport, SearchSummary,
};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Default number of upcoming releases reported per product group
pub const DEFAULT_CLOSEST_K: usize = 2;

/// Aggregator - groups match results by declared product suite
///
/// Groups appear in the order their suite is first declared in the mapping
/// table, and a group exists even when none of its operators matched. The
/// reference date is injected so that a run is reproducible.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    today: NaiveDate,
    show_all: bool,
    closest_k: usize,
}

impl Aggregator {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            show_all: false,
            closest_k: DEFAULT_CLOSEST_K,
        }
    }

    pub fn show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    pub fn closest_k(mut self, closest_k: usize) -> Self {
        self.closest_k = closest_k;
        self
    }

    pub fn aggregate(&self, results: &[MatchResult]) -> ReleaseReport {
        let groups: Vec<ProductGroup> = Self::group_by_suite(results)
            .into_iter()
            .map(|(suite, members)| self.build_group(suite, &members))
            .collect();
        let summary = SearchSummary::from_groups(&groups, results.len());

        ReleaseReport { groups, summary }
    }

    /// Buckets results by declared suite, keeping first-seen order.
    fn group_by_suite(results: &[MatchResult]) -> Vec<(&str, Vec<&MatchResult>)> {
        let mut buckets: Vec<(&str, Vec<&MatchResult>)> = Vec::new();
        for result in results {
            let suite = result.mapping().product_suite();
            match buckets.iter_mut().find(|(name, _)| *name == suite) {
                Some((_, members)) => members.push(result),
                None => buckets.push((suite, vec![result])),
            }
        }
        buckets
    }

    fn build_group(&self, suite: &str, members: &[&MatchResult]) -> ProductGroup {
        let operators: Vec<String> = members
            .iter()
            .map(|result| result.mapping().operator_name().to_string())
            .collect();

        let mut seen: HashSet<&ReleaseRecord> = HashSet::new();
        let matched: Vec<ReleaseRecord> = members
            .iter()
            .copied()
            .flat_map(MatchResult::records)
            .filter(|record| seen.insert(*record))
            .cloned()
            .collect();

        let mut upcoming: Vec<&ReleaseRecord> = matched
            .iter()
            .filter(|record| record.is_upcoming(self.today))
            .collect();
        upcoming.sort_by_key(|record| record.ga_date());
        let future_count = upcoming.len();

        let releases: Vec<ReleaseRecord> = if self.show_all {
            Self::dated_then_undated(&matched)
        } else {
            upcoming.into_iter().take(self.closest_k).cloned().collect()
        };

        ProductGroup::new(suite.to_string(), operators, matched, releases, future_count)
    }

    /// Dated records ascending, then undated ones in their original order.
    fn dated_then_undated(records: &[ReleaseRecord]) -> Vec<ReleaseRecord> {
        let (mut dated, undated): (Vec<&ReleaseRecord>, Vec<&ReleaseRecord>) = records
            .iter()
            .partition(|record| record.ga_date().is_some());
        dated.sort_by_key(|record| record.ga_date());
        dated.into_iter().chain(undated).cloned().collect()
    }
}
