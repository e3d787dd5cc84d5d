/// VersionConstraint - target version per product abbreviation (e.g. `OCP` → `4.20`)
///
/// An absent constraint (`Option::None` at the call sites) disables filtering.
/// An empty constraint is a distinct state: filtering is on but constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionConstraint {
    entries: Vec<(String, String)>,
}

impl VersionConstraint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target version for an abbreviation. Abbreviations are
    /// case-insensitive; a repeated abbreviation replaces the earlier version
    /// but keeps its original position.
    pub fn set(&mut self, abbreviation: &str, version: &str) {
        let abbreviation = abbreviation.trim().to_uppercase();
        let version = version.trim().to_string();
        match self.entries.iter_mut().find(|(abbr, _)| *abbr == abbreviation) {
            Some(entry) => entry.1 = version,
            None => self.entries.push((abbreviation, version)),
        }
    }

    pub fn with(mut self, abbreviation: &str, version: &str) -> Self {
        self.set(abbreviation, version);
        self
    }

    pub fn version_for(&self, abbreviation: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(abbr, _)| abbr.eq_ignore_ascii_case(abbreviation))
            .map(|(_, version)| version.as_str())
    }

    /// (abbreviation, version) pairs in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(abbr, version)| (abbr.as_str(), version.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
