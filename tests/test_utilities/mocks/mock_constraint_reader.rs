use std::path::Path;
use release_radar::prelude::*;

/// Mock ConstraintReader; `None` content behaves like a missing file
pub struct MockConstraintReader {
    pub content: Option<String>,
}

impl MockConstraintReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
        }
    }

    pub fn missing() -> Self {
        Self { content: None }
    }
}

impl ConstraintReader for MockConstraintReader {
    fn read_constraints(&self, _path: &Path) -> Result<Option<String>> {
        Ok(self.content.clone())
    }
}
