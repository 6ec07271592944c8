use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;


/// The Part workbench catalogue, Portuguese.
pub const PART_PT: &str = include_str!("../fixtures/Part_pt-PT.ts");

pub const PART_DE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de">
<context>
    <name>CmdPartBox</name>
    <message>
        <source>Cube</source>
        <translation></translation>
    </message>
    <message>
        <source>Edge%1 of %2</source>
        <translation type="unfinished">Kante %1</translation>
    </message>
</context>
</TS>
"#;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with a translations/ directory
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join("translations"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with the given catalogues under translations/
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_catalogues(&[("Part_pt-PT.ts", PART_PT)])?;
    /// ```
    pub fn with_catalogues(files: &[(&str, &str)]) -> Result<Self> {
        let fixture = Self::new()?;
        for (name, content) in files {
            fixture.write_catalogue(name, content)?;
        }
        Ok(fixture)
    }

    pub fn write_catalogue(&self, name: &str, content: &str) -> Result<()> {
        let path = self.project_root.join("translations").join(name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write catalogue: {}", path.display()))
    }

    pub fn read_catalogue(&self, name: &str) -> Result<String> {
        let path = self.project_root.join("translations").join(name);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalogue: {}", path.display()))
    }

    /// Write a .tscatrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".tscatrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

/// Create a fixture with a clean-ish Portuguese and a broken German catalogue
pub fn fixture_part() -> Result<McpTestFixture> {
    McpTestFixture::with_catalogues(&[("Part_pt-PT.ts", PART_PT), ("Part_de.ts", PART_DE)])
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a scan result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    // Check for errors using is_error field
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    // Extract text from the content
    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
