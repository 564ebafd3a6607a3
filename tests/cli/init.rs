use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .glot-extract.json"));
    assert!(test.root().join(".glot-extract.json").exists());

    let content = test.read_file(".glot-extract.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["runtimeModule"], "@/utils/intl");
    assert_eq!(parsed["catalogIdentifier"], "i18nMessages");
    assert_eq!(parsed["targetScript"], "han");
    assert_eq!(parsed["ignoreTestFiles"], true);
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".glot-extract.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".glot-extract.json already exists"));
    assert_eq!(test.read_file(".glot-extract.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("src/app.tsx", "export const App = () => <div>测试</div>;")?;

    let output = test.extract_command().output()?;

    assert!(
        output.status.success(),
        "Extract should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("1 message in 1 file (1 unique key)"));

    Ok(())
}
