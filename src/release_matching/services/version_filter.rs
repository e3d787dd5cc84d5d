use crate::release_matching::domain::{ReleaseRecord, VersionConstraint};
use crate::release_matching::policies::ProductLexicon;

/// VersionFilter - keeps only records of the targeted version for recognized suites
///
/// A record is constrained when the lexicon recognizes its product suite and
/// the constraint names a version for that abbreviation. A constrained record
/// passes when the version occurs in its product/release text (case-insensitive
/// substring: `4.2` also matches `4.20`). Every other record passes.
#[derive(Debug, Clone)]
pub struct VersionFilter {
    lexicon: ProductLexicon,
    constraint: Option<VersionConstraint>,
}

impl VersionFilter {
    pub fn new(lexicon: ProductLexicon, constraint: Option<VersionConstraint>) -> Self {
        Self {
            lexicon,
            constraint,
        }
    }

    /// A filter that lets every record through.
    pub fn disabled() -> Self {
        Self::new(ProductLexicon::default(), None)
    }

    pub fn is_enabled(&self) -> bool {
        self.constraint.is_some()
    }

    pub fn constraint(&self) -> Option<&VersionConstraint> {
        self.constraint.as_ref()
    }

    pub fn matches(&self, record: &ReleaseRecord) -> bool {
        let Some(constraint) = &self.constraint else {
            return true;
        };
        let Some(version) = self
            .lexicon
            .recognize(record.product_suite())
            .and_then(|abbr| constraint.version_for(abbr))
        else {
            return true;
        };

        record
            .searchable_text()
            .to_lowercase()
            .contains(&version.to_lowercase())
    }

    /// Constraint abbreviations the lexicon has no entry for; these never
    /// constrain anything.
    pub fn unknown_abbreviations(&self) -> Vec<&str> {
        self.constraint
            .iter()
            .flat_map(|constraint| constraint.iter())
            .map(|(abbr, _)| abbr)
            .filter(|abbr| !self.lexicon.contains_abbreviation(abbr))
            .collect()
    }
}
