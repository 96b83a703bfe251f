use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, run, stdout};

const SETTINGS_SOURCE: &str = r#"
/*AIRSETTING index="2" name="Pitch" min="-1.0" max="1.0" def="0.0"
 * multi
 * line
 */
const float PITCH = 0.0;

/*GROUNDSETTING index="0" name="Speed" min="0" max="10" def="4"
 * Top speed in m/s
 */
/*TODO not a setting
 */
"#;

#[test]
fn test_settings_split_into_files() -> Result<()> {
    let test = CliTest::with_file("src/settings.h", SETTINGS_SOURCE)?;

    let output = run(test.settings_command())?;

    assert_eq!(output.status.code(), Some(0));
    assert_snapshot!(stdout(&output), @r"
    ✓ Wrote 1 record to out/airSettings.xml
    ✓ Wrote 1 record to out/groundSettings.xml
    ");
    assert_eq!(
        test.read_file("out/airSettings.xml")?,
        "<settingList><setting index=\"2\" name=\"Pitch\" min=\"-1.0\" max=\"1.0\" def=\"0.0\"> multi line\n </setting></settingList>"
    );
    assert_eq!(
        test.read_file("out/groundSettings.xml")?,
        "<settingList><setting index=\"0\" name=\"Speed\" min=\"0\" max=\"10\" def=\"4\"> Top speed in m/s\n </setting></settingList>"
    );

    Ok(())
}

#[test]
fn test_open_ended_attributes() -> Result<()> {
    let test = CliTest::with_file(
        "src/extra.cpp",
        "/*AIRSETTING index=\"7\" name=\"Trim\" unit=\"deg\" def=\"1\" def=\"2\"*/",
    )?;

    let output = run(test.settings_command())?;

    assert_eq!(output.status.code(), Some(0));
    assert_snapshot!(
        test.read_file("out/airSettings.xml")?,
        @r#"<settingList><setting index="7" name="Trim" unit="deg" def="2" /></settingList>"#
    );
    assert_snapshot!(test.read_file("out/groundSettings.xml")?, @"<settingList />");

    Ok(())
}

#[test]
fn test_collision_aborts_all_outputs() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.h", "/*GROUNDSETTING index=\"0\" name=\"Speed\"\n * a\n */")?;
    test.write_file("src/b.h", "/*GROUNDSETTING index=\"1\" name=\"Speed\"\n * b\n */")?;
    test.write_file("src/c.h", "/*AIRSETTING index=\"0\" name=\"Roll\"\n * fine\n */")?;

    let output = run(test.settings_command())?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Name collision detected on \"Speed\""), "{}", out);
    assert!(out.contains("Used in a.h"), "{}", out);
    assert!(out.contains("Used in b.h"), "{}", out);
    assert!(!test.exists("out/airSettings.xml"));
    assert!(!test.exists("out/groundSettings.xml"));

    Ok(())
}

#[test]
fn test_configured_setting_types() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".tagdbrc.json",
        r#"{ "settingTypes": [{ "tag": "BOATSETTING", "file": "boat.xml" }] }"#,
    )?;
    test.write_file(
        "src/boat.ino",
        "/*BOATSETTING name=\"Rudder\"\n * rudder gain\n */\n/*AIRSETTING name=\"Pitch\"\n * skipped\n */",
    )?;

    let output = run(test.settings_command())?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("out/boat.xml")?,
        "<settingList><setting name=\"Rudder\"> rudder gain\n </setting></settingList>"
    );
    assert!(!test.exists("out/airSettings.xml"));

    Ok(())
}

#[test]
fn test_missing_destination_directory() -> Result<()> {
    let test = CliTest::with_file("src/s.h", SETTINGS_SOURCE)?;
    let mut cmd = test.command();
    cmd.args(["settings", "src", "missing"]);

    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(crate::stderr(&output).contains("Destination directory not found"));

    Ok(())
}

#[test]
fn test_crlf_line_endings() -> Result<()> {
    let test = CliTest::with_file("src/settings.h", &SETTINGS_SOURCE.replace('\n', "\r\n"))?;

    let output = run(test.settings_command())?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("out/airSettings.xml")?,
        "<settingList><setting index=\"2\" name=\"Pitch\" min=\"-1.0\" max=\"1.0\" def=\"0.0\"> multi line\n </setting></settingList>"
    );

    Ok(())
}
