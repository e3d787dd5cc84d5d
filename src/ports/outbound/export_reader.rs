use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ExportReader port for reading the vendor release-schedule export
///
/// Parsing and column normalization are not part of this port; it only
/// locates and reads the raw CSV text.
pub trait ExportReader {
    /// Finds the export to use inside a directory
    ///
    /// # Errors
    /// Returns a `DataSource` error when the directory holds no CSV file
    fn locate_export(&self, dir: &Path) -> Result<PathBuf>;

    /// Reads the export at `path`
    ///
    /// # Errors
    /// Returns a `DataSource` error if the file is missing or unreadable
    fn read_export(&self, path: &Path) -> Result<String>;
}
