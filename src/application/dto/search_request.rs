use crate::release_matching::policies::ProductLexicon;
use crate::release_matching::services::DEFAULT_CLOSEST_K;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Where the release export comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportSource {
    /// An explicit export file
    File(PathBuf),
    /// Auto-discover the export inside a directory
    Discover(PathBuf),
}

/// SearchRequest - request DTO for the release search use case
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Release export location
    pub export: ExportSource,
    /// Operator mapping table
    pub mapping_path: PathBuf,
    /// Reference (version constraint) file; `None` disables version filtering
    pub reference_path: Option<PathBuf>,
    /// Report every matched release instead of the closest upcoming ones
    pub show_all: bool,
    /// Number of upcoming releases kept per product
    pub closest_k: usize,
    /// Reference date for "upcoming"
    pub today: NaiveDate,
    /// Abbreviation lexicon used by the version filter
    pub lexicon: ProductLexicon,
}

impl SearchRequest {
    pub fn new(export: ExportSource, mapping_path: PathBuf, today: NaiveDate) -> Self {
        Self {
            export,
            mapping_path,
            reference_path: None,
            show_all: false,
            closest_k: DEFAULT_CLOSEST_K,
            today,
            lexicon: ProductLexicon::default(),
        }
    }

    pub fn with_reference(mut self, reference_path: Option<PathBuf>) -> Self {
        self.reference_path = reference_path;
        self
    }

    pub fn with_show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    pub fn with_closest_k(mut self, closest_k: usize) -> Self {
        self.closest_k = closest_k;
        self
    }

    pub fn with_lexicon(mut self, lexicon: ProductLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }
}
