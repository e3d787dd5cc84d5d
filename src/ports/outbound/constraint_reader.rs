use crate::shared::Result;
use std::path::Path;

/// ConstraintReader port for reading target-version constraints
pub trait ConstraintReader {
    /// Reads the reference file
    ///
    /// # Returns
    /// `Ok(None)` when the file does not exist; a missing reference file
    /// means "no version filtering", not a failure
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read
    fn read_constraints(&self, path: &Path) -> Result<Option<String>>;
}
