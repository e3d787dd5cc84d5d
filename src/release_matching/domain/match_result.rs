use super::operator_mapping::OperatorMapping;
use super::release_record::ReleaseRecord;
use std::fmt;

/// How the candidates of a [`MatchResult`] were found.
///
/// Release-name matches take precedence: when any exist, product-suite
/// candidates are never added for the same mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStrategy {
    /// Exact (case-insensitive, trimmed) match on the release label
    ReleaseName,
    /// Exact (case-insensitive, trimmed) match on the product suite
    ProductSuite,
    /// No candidate survived lookup and version filtering
    None,
}

impl MatchStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStrategy::ReleaseName => "release_name_match",
            MatchStrategy::ProductSuite => "product_suite_match",
            MatchStrategy::None => "no_match",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// MatchResult - the candidates found for one operator mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    mapping: OperatorMapping,
    strategy: MatchStrategy,
    records: Vec<ReleaseRecord>,
    filtered_out: usize,
}

impl MatchResult {
    /// Builds a result; an empty record list always yields [`MatchStrategy::None`].
    pub fn new(
        mapping: OperatorMapping,
        strategy: MatchStrategy,
        records: Vec<ReleaseRecord>,
        filtered_out: usize,
    ) -> Self {
        let strategy = if records.is_empty() {
            MatchStrategy::None
        } else {
            strategy
        };
        Self {
            mapping,
            strategy,
            records,
            filtered_out,
        }
    }

    pub fn no_match(mapping: OperatorMapping) -> Self {
        Self::new(mapping, MatchStrategy::None, Vec::new(), 0)
    }

    pub fn mapping(&self) -> &OperatorMapping {
        &self.mapping
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    pub fn records(&self) -> &[ReleaseRecord] {
        &self.records
    }

    /// Number of candidates dropped by the version filter.
    pub fn filtered_out(&self) -> usize {
        self.filtered_out
    }

    pub fn is_match(&self) -> bool {
        self.strategy != MatchStrategy::None
    }
}
