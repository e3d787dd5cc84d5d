use super::release_record::ReleaseRecord;

/// ProductGroup - every operator declared against one product suite, with the
/// releases selected for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductGroup {
    product_suite: String,
    operators: Vec<String>,
    matched: Vec<ReleaseRecord>,
    releases: Vec<ReleaseRecord>,
    future_count: usize,
}

impl ProductGroup {
    pub fn new(
        product_suite: String,
        operators: Vec<String>,
        matched: Vec<ReleaseRecord>,
        releases: Vec<ReleaseRecord>,
        future_count: usize,
    ) -> Self {
        Self {
            product_suite,
            operators,
            matched,
            releases,
            future_count,
        }
    }

    pub fn product_suite(&self) -> &str {
        &self.product_suite
    }

    /// Operator names in mapping-table order.
    pub fn operators(&self) -> &[String] {
        &self.operators
    }

    /// Deduplicated records matched by any operator of the group, in store order.
    pub fn matched(&self) -> &[ReleaseRecord] {
        &self.matched
    }

    /// Records selected for the report: the closest upcoming releases, or
    /// every matched record in show-all mode.
    pub fn releases(&self) -> &[ReleaseRecord] {
        &self.releases
    }

    /// Upcoming releases before closest-K truncation.
    pub fn future_count(&self) -> usize {
        self.future_count
    }

    pub fn has_future_releases(&self) -> bool {
        self.future_count > 0
    }
}

/// Aggregator output: product groups in mapping order plus their summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseReport {
    pub groups: Vec<ProductGroup>,
    pub summary: SearchSummary,
}

/// Aggregate counts printed in the report summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub total_groups: usize,
    pub groups_with_future: usize,
    pub groups_without_future: usize,
    pub total_future_releases: usize,
    pub total_operators: usize,
    pub operators_with_future: usize,
    pub operators_without_future: usize,
}

impl SearchSummary {
    pub fn from_groups(groups: &[ProductGroup], total_operators: usize) -> Self {
        let mut summary = SearchSummary {
            total_groups: groups.len(),
            total_operators,
            ..Default::default()
        };

        for group in groups {
            if group.has_future_releases() {
                summary.groups_with_future += 1;
                summary.operators_with_future += group.operators().len();
            } else {
                summary.groups_without_future += 1;
                summary.operators_without_future += group.operators().len();
            }
            summary.total_future_releases += group.future_count();
        }

        summary
    }
}
