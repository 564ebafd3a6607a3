use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

const GREETING: &str = r#"
export function Greeting({ user, count }) {
    const title = `你好，${user.name}`;
    return (
        <div title="标题">
            共{count}条
            <p>{title}</p>
        </div>
    );
}
"#;

#[test]
fn test_text_report_lists_sites() -> Result<()> {
    let test = CliTest::with_file("src/greeting.tsx", GREETING)?;

    let output = test.extract_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(out.contains("warning: \"你好，{placeholder1}\"  extract"));
    assert!(out.contains("greeting.tsx:3:19"));
    assert!(out.contains("= note: template with placeholder1 = user.name"));
    assert!(out.contains("warning: \"标题\"  extract"));
    assert!(out.contains("warning: \"共\"  extract"));
    assert!(out.contains("warning: \"条\"  extract"));
    assert!(out.contains("4 messages in 1 file (4 unique keys)"));

    Ok(())
}

#[test]
fn test_json_report() -> Result<()> {
    let test = CliTest::with_file("src/greeting.tsx", GREETING)?;
    test.write_file("src/empty.tsx", "export const OK = 'OK';")?;

    let output = test.extract_command().args(["--format", "json"]).output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let report: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        report["messageKeys"],
        json!(["你好，{placeholder1}", "标题", "共", "条"])
    );
    assert_eq!(report["catalog"]["标题"], json!({ "id": "标题" }));
    assert_eq!(report["files"].as_array().map(Vec::len), Some(1));
    assert_eq!(report["files"][0]["sites"], json!(4));
    assert_eq!(report["parseErrors"], json!([]));

    Ok(())
}

#[test]
fn test_message_keys_keep_duplicates_across_files() -> Result<()> {
    let test = CliTest::with_file("src/a.tsx", r#"const a = "确认"; const b = "确认";"#)?;
    test.write_file("src/b.tsx", r#"const c = "确认";"#)?;

    let output = test.extract_command().args(["--format", "json"]).output()?;
    let report: Value = serde_json::from_str(&stdout(&output))?;

    assert_eq!(report["messageKeys"], json!(["确认", "确认"]));
    assert_eq!(report["files"][0]["messages"], json!(["确认"]));
    assert_eq!(report["files"][0]["sites"], json!(2));

    Ok(())
}

#[test]
fn test_check_fails_on_translatable_text() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", "export const A = <b>确认</b>;")?;

    let output = test.extract_command().arg("--check").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("1 message in 1 file (1 unique key)"));

    Ok(())
}

#[test]
fn test_check_passes_without_translatable_text() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"
const skipped = /* i18n-disable */ "确认";
export const A = <b>Submit</b>;
export type Label = "标签";
"#,
    )?;

    let output = test.extract_command().arg("--check").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "\u{2713} Checked 1 source file - no translatable text found\n"
    );

    Ok(())
}

#[test]
fn test_parse_error_fails_but_other_files_are_reported() -> Result<()> {
    let test = CliTest::with_file("src/broken.tsx", "const = ;")?;
    test.write_file("src/ok.tsx", r#"const a = "你好";"#)?;

    let output = test.extract_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("parse-error"));
    assert!(out.contains("broken.tsx"));
    assert!(out.contains("warning: \"你好\"  extract"));
    assert!(stderr(&output).contains("1 file(s) could not be parsed (use -v for details)"));

    Ok(())
}

#[test]
fn test_source_root_and_script_override() -> Result<()> {
    let test = CliTest::with_file(
        "web/src/app.tsx",
        r#"const a = "你好"; const b = "こんにちは";"#,
    )?;

    let output = test
        .extract_command()
        .args(["--source-root", "web", "--script", "kana", "--format", "json"])
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let report: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(report["messageKeys"], json!(["こんにちは"]));

    Ok(())
}

#[test]
fn test_config_file_is_applied() -> Result<()> {
    let test = CliTest::with_file(
        ".glot-extract.json",
        r#"{ "includes": ["src"], "ignoreTexts": ["确认"] }"#,
    )?;
    test.write_file("src/app.tsx", r#"const a = "确认"; const b = "取消";"#)?;
    test.write_file("scripts/tool.ts", r#"const c = "脚本";"#)?;

    let output = test.extract_command().args(["--format", "json"]).output()?;
    let report: Value = serde_json::from_str(&stdout(&output))?;

    assert_eq!(report["messageKeys"], json!(["取消"]));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".glot-extract.json", r#"{ "catalogIdentifier": "1abc" }"#)?;
    test.write_file("src/app.tsx", r#"const a = "确认";"#)?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Invalid config file"));

    Ok(())
}

#[test]
fn test_missing_source_root_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .extract_command()
        .args(["--source-root", "missing"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Source root is not a directory"));

    Ok(())
}
