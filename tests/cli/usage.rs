use anyhow::Result;

use crate::{CliTest, run, stdout};

#[test]
fn test_no_command_prints_usage() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command())?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("messages"), "{}", out);
    assert!(out.contains("settings"), "{}", out);

    Ok(())
}

#[test]
fn test_too_few_arguments() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.args(["messages", "src"]);

    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("State Message Parser"));
    assert!(!test.exists("out/messages.xml"));

    Ok(())
}

#[test]
fn test_too_many_arguments() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.args(["settings", "src", "out", "extra"]);

    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Setting Description Parser"));
    assert!(!test.exists("out/airSettings.xml"));

    Ok(())
}

#[test]
fn test_help_exits_successfully() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.arg("--help");

    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
