use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.root().join(".tagdbrc.json").exists());

    let content = test.read_file(".tagdbrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["separator"], " ");
    assert_eq!(parsed["extensions"].as_array().map(Vec::len), Some(5));
    assert_eq!(parsed["settingTypes"][0]["tag"], "AIRSETTING");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".tagdbrc.json", "{}")?;
    let mut cmd = test.command();
    cmd.arg("init");

    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(test.read_file(".tagdbrc.json")?, "{}");

    Ok(())
}
