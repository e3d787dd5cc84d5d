use std::path::Path;
use release_radar::prelude::*;

/// Mock MappingReader for testing
pub struct MockMappingReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockMappingReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl MappingReader for MockMappingReader {
    fn read_mapping(&self, _path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock mapping read failure");
        }
        Ok(self.content.clone())
    }
}
