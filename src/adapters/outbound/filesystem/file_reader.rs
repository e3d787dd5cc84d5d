use crate::ports::outbound::{ConstraintReader, ExportReader, MappingReader};
use crate::shared::error::RadarError;
use crate::shared::security::read_text_file;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File name prefix of the release-schedule export
const EXPORT_PREFIX: &str = "Product-Pages-Export";

/// FileSystemReader adapter for reading input files from the file system
///
/// This adapter implements the ExportReader, MappingReader and ConstraintReader
/// ports. Every read goes through the shared security checks (no symlinks,
/// regular files only, bounded size).
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Lists the `.csv` files of a directory, sorted by file name.
    fn csv_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
        let mut files: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_csv_extension(path))
            .collect();
        files.sort();
        Ok(files)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn file_name_starts_with(path: &Path, prefix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(prefix))
}

impl ExportReader for FileSystemReader {
    fn locate_export(&self, dir: &Path) -> Result<PathBuf> {
        if !dir.is_dir() {
            return Err(RadarError::InvalidPath {
                path: dir.to_path_buf(),
                reason: "Search directory does not exist or is not a directory".to_string(),
            }
            .into());
        }

        let files = Self::csv_files(dir).map_err(|e| RadarError::DataSource {
            path: dir.to_path_buf(),
            details: format!("Failed to list directory: {}", e),
        })?;

        // Prefer a named export, then any CSV
        files
            .iter()
            .find(|path| file_name_starts_with(path, EXPORT_PREFIX))
            .or_else(|| files.first())
            .cloned()
            .ok_or_else(|| {
                RadarError::DataSource {
                    path: dir.to_path_buf(),
                    details: "No CSV file found in directory".to_string(),
                }
                .into()
            })
    }

    fn read_export(&self, path: &Path) -> Result<String> {
        read_text_file(path, "release export").map_err(|e| {
            RadarError::DataSource {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl MappingReader for FileSystemReader {
    fn read_mapping(&self, path: &Path) -> Result<String> {
        read_text_file(path, "mapping table").map_err(|e| {
            RadarError::FileRead {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl ConstraintReader for FileSystemReader {
    fn read_constraints(&self, path: &Path) -> Result<Option<String>> {
        // A missing reference file only disables filtering
        if fs::symlink_metadata(path).is_err() {
            return Ok(None);
        }

        read_text_file(path, "reference file")
            .map(Some)
            .map_err(|e| {
                RadarError::FileRead {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                }
                .into()
            })
    }
}
