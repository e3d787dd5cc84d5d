use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum input file size (64 MB)
///
/// Exports are a few thousand rows; anything larger is not a release export.
pub const MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "mapping table")
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than [`MAX_FILE_SIZE`]
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} metadata for {}: {}",
            file_description,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a whole text file after [`validate_regular_file`] passes.
///
/// A leading UTF-8 byte-order mark is stripped; spreadsheet exports often carry one
/// and it would otherwise corrupt the first header name.
pub fn read_text_file(path: &Path, file_description: &str) -> Result<String> {
    validate_regular_file(path, file_description)?;

    let content = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))?;

    Ok(match content.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("source.txt");
        fs::write(&file_path, "op\tSuite").unwrap();

        assert!(validate_regular_file(&file_path, "mapping table").is_ok());
    }

    #[test]
    fn test_validate_regular_file_nonexistent() {
        let path = PathBuf::from("/nonexistent/source.txt");
        let result = validate_regular_file(&path, "mapping table");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("mapping table"));
    }

    #[test]
    fn test_validate_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_regular_file(temp_dir.path(), "release export");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/export.csv");
        let result = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_read_text_file_strips_bom() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("export.csv");
        fs::write(&file_path, "\u{feff}Product,Release\n").unwrap();

        let content = read_text_file(&file_path, "release export").unwrap();
        assert_eq!(content, "Product,Release\n");
    }
}
