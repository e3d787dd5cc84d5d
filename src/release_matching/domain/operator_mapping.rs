use crate::shared::error::MappingFormatError;
use std::collections::HashSet;

/// OperatorMapping - associates one operator with the product it ships in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorMapping {
    operator_name: String,
    product_suite: String,
    release_name: Option<String>,
}

impl OperatorMapping {
    pub fn new(operator_name: String, product_suite: String, release_name: Option<String>) -> Self {
        Self {
            operator_name,
            product_suite,
            release_name: release_name.filter(|name| !name.trim().is_empty()),
        }
    }

    pub fn operator_name(&self) -> &str {
        &self.operator_name
    }

    pub fn product_suite(&self) -> &str {
        &self.product_suite
    }

    pub fn release_name(&self) -> Option<&str> {
        self.release_name.as_deref()
    }
}

/// MappingTable - the universe of operators analyzed in one run
///
/// Operator names are unique. Entries keep file order, which is also the
/// order product groups appear in the report.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: Vec<OperatorMapping>,
    names: HashSet<String>,
    skipped: Vec<MappingFormatError>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mapping unless an operator with the same name is already present.
    ///
    /// Returns `false` (and leaves the table unchanged) for a duplicate.
    pub fn insert(&mut self, mapping: OperatorMapping) -> bool {
        if !self.names.insert(mapping.operator_name.clone()) {
            return false;
        }
        self.entries.push(mapping);
        true
    }

    /// Records a line that was skipped while loading.
    pub fn record_skipped(&mut self, error: MappingFormatError) {
        self.skipped.push(error);
    }

    pub fn entries(&self) -> &[OperatorMapping] {
        &self.entries
    }

    pub fn skipped(&self) -> &[MappingFormatError] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<OperatorMapping> for MappingTable {
    fn from_iter<I: IntoIterator<Item = OperatorMapping>>(iter: I) -> Self {
        let mut table = MappingTable::new();
        for mapping in iter {
            table.insert(mapping);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_release_name_is_absent() {
        let mapping = OperatorMapping::new(
            "quay-operator".to_string(),
            "Red Hat Quay".to_string(),
            Some("  ".to_string()),
        );
        assert_eq!(mapping.release_name(), None);
    }

    #[test]
    fn test_insert_rejects_duplicate_operator() {
        let mut table = MappingTable::new();
        assert!(table.insert(OperatorMapping::new(
            "op1".to_string(),
            "Suite A".to_string(),
            None
        )));
        assert!(!table.insert(OperatorMapping::new(
            "op1".to_string(),
            "Suite B".to_string(),
            None
        )));

        assert_eq!(table.len(), 1);
        assert_eq!(table.entries()[0].product_suite(), "Suite A");
    }

    #[test]
    fn test_entries_preserve_insertion_order() {
        let table: MappingTable = ["b", "a", "c"]
            .into_iter()
            .map(|name| OperatorMapping::new(name.to_string(), "S".to_string(), None))
            .collect();

        let names: Vec<&str> = table.entries().iter().map(|m| m.operator_name()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert!(table.skipped().is_empty());
    }
}
