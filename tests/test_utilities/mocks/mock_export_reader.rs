use std::path::{Path, PathBuf};
use release_radar::prelude::*;

/// Mock ExportReader serving a fixed CSV body
pub struct MockExportReader {
    pub content: String,
    pub discovered: Option<PathBuf>,
    pub should_fail: bool,
}

impl MockExportReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            discovered: Some(PathBuf::from("Product-Pages-Export.csv")),
            should_fail: false,
        }
    }

    /// Discovery finds nothing in the search directory
    pub fn without_export() -> Self {
        Self {
            content: String::new(),
            discovered: None,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }
}

impl ExportReader for MockExportReader {
    fn locate_export(&self, dir: &Path) -> Result<PathBuf> {
        self.discovered
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Mock: no CSV file found in {}", dir.display()))
    }

    fn read_export(&self, _path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock export read failure");
        }
        Ok(self.content.clone())
    }
}
