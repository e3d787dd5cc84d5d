use crate::shared::Result;
use std::path::Path;

/// MappingReader port for reading the operator mapping table
pub trait MappingReader {
    /// Reads the raw mapping table
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be read
    fn read_mapping(&self, path: &Path) -> Result<String>;
}
