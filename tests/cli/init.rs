use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["cataloguesRoot"], "./translations");
    assert_eq!(parsed["sourceLanguage"], "en");
    assert_eq!(parsed["includeUnfinished"], true);
    assert!(parsed["includes"].is_array());

    // 2-space indentation
    assert!(content.contains("\n  \"cataloguesRoot\""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .tscatrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".tscatrc.json").exists());
    let content = test.read_file(".tscatrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tscatrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .tscatrc.json already exists
    ");

    assert_eq!(test.read_file(".tscatrc.json")?, "{}");

    Ok(())
}
