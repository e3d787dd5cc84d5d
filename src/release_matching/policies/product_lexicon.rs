/// Built-in abbreviations and the suite-name fragment each one stands for
const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    ("OCP", "OpenShift Container Platform"),
    ("ACM", "Advanced Cluster Management"),
    ("QUAY", "Quay"),
    ("ODF", "OpenShift Data Foundation"),
];

/// ProductLexicon policy for recognizing which abbreviation a product suite belongs to
///
/// Each entry pairs a short code (as written in the reference file) with a
/// fragment of the vendor's suite name. A suite is recognized when it contains
/// the fragment, ignoring case. When several fragments match, the longest one
/// wins, so entry order never matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLexicon {
    entries: Vec<(String, String)>,
}

impl ProductLexicon {
    /// Lexicon with no entries: nothing is ever recognized.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds or replaces the fragment for an abbreviation.
    pub fn insert(&mut self, abbreviation: &str, suite_fragment: &str) {
        let abbreviation = abbreviation.trim().to_uppercase();
        let suite_fragment = suite_fragment.trim().to_string();
        match self.entries.iter_mut().find(|(abbr, _)| *abbr == abbreviation) {
            Some(entry) => entry.1 = suite_fragment,
            None => self.entries.push((abbreviation, suite_fragment)),
        }
    }

    pub fn with_entry(mut self, abbreviation: &str, suite_fragment: &str) -> Self {
        self.insert(abbreviation, suite_fragment);
        self
    }

    /// Returns the abbreviation a product suite is known by, if any.
    pub fn recognize(&self, product_suite: &str) -> Option<&str> {
        let suite = product_suite.to_lowercase();
        self.entries
            .iter()
            .filter(|(_, fragment)| !fragment.is_empty() && suite.contains(&fragment.to_lowercase()))
            .max_by_key(|(_, fragment)| fragment.len())
            .map(|(abbr, _)| abbr.as_str())
    }

    pub fn contains_abbreviation(&self, abbreviation: &str) -> bool {
        self.entries
            .iter()
            .any(|(abbr, _)| abbr.eq_ignore_ascii_case(abbreviation))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ProductLexicon {
    fn default() -> Self {
        DEFAULT_ENTRIES
            .iter()
            .fold(Self::empty(), |lexicon, (abbr, fragment)| {
                lexicon.with_entry(abbr, fragment)
            })
    }
}
