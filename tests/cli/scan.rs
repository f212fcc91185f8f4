use anyhow::Result;
use serde_json::json;

use crate::{CliTest, run};

const TARGET: &str = "src/translations/translation.json";
const UNUSED: &str = "src/translations/unused.json";

#[test]
fn test_scan_writes_sorted_dictionaries() -> Result<()> {
    let test = CliTest::with_config(r#"{ "languages": ["fr", "en"], "contentLanguage": "en" }"#)?;
    test.write_file(
        "src/App.tsx",
        "<UFTT ttid=\"greet\">Hello\n   world</UFTT>\n<UFTTSpan>Cancel</UFTTSpan>\n",
    )?;

    let (code, stdout, _) = run(test.scan_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains(
        "Scanned 1 source files, added 2 entries, updated 0 contents, \
         skipped 0 contents, added 2 language entries"
    ));
    insta::assert_snapshot!(test.read_file(TARGET)?, @r#"
    {
      "Cancel": {
        "_": "Cancel",
        "en": "Cancel",
        "fr": ""
      },
      "greet": {
        "_": "Hello world",
        "en": "Hello world",
        "fr": ""
      }
    }
    "#);
    assert_eq!(test.read_file(UNUSED)?, "{}\n");

    Ok(())
}

#[test]
fn test_scan_twice_is_byte_identical() -> Result<()> {
    let test = CliTest::with_config(r#"{ "languages": ["de"] }"#)?;
    test.write_file("src/a.jsx", "<UFTT>One</UFTT><UFTTDiv ttid=\"two\">Two</UFTTDiv>")?;

    let (code, _, _) = run(test.scan_command())?;
    assert_eq!(code, 0);
    let first = (test.read_file(TARGET)?, test.read_file(UNUSED)?);

    let (code, stdout, _) = run(test.scan_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("added 0 entries, updated 0 contents, skipped 2 contents"));
    assert_eq!((test.read_file(TARGET)?, test.read_file(UNUSED)?), first);

    Ok(())
}

#[test]
fn test_scan_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_config("{}")?;
    test.write_file("src/a.tsx", "<UFTT>Hi</UFTT>")?;

    let (code, stdout, _) = run({
        let mut cmd = test.scan_command();
        cmd.arg("--dry-run");
        cmd
    })?;

    assert_eq!(code, 0);
    assert!(stdout.contains("added 1 entries"));
    assert!(stdout.contains("note: dry run"));
    assert!(!test.root().join(TARGET).exists());
    assert!(!test.root().join(UNUSED).exists());

    Ok(())
}

#[test]
fn test_scan_moves_and_revives_entries() -> Result<()> {
    let test = CliTest::with_config("{}")?;
    test.write_file("src/a.tsx", "<UFTT ttid=\"x\">Old</UFTT>")?;
    assert_eq!(run(test.scan_command())?.0, 0);

    // The marker disappears: the entry is swept into unused.
    test.write_file("src/a.tsx", "<UFTT>Other</UFTT>")?;
    let (code, stdout, _) = run(test.scan_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Moved 1 entries to unused"));
    assert_eq!(test.read_json(UNUSED)?, json!({ "x": { "_": "Old" } }));
    assert_eq!(test.read_json(TARGET)?, json!({ "Other": { "_": "Other" } }));

    // The marker comes back with new content: revived and updated.
    test.write_file("src/a.tsx", "<UFTT ttid=\"x\">New</UFTT>")?;
    let (code, stdout, _) = run(test.scan_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("updated 1 contents"));
    assert!(!stdout.contains("warning:"));
    assert_eq!(test.read_json(TARGET)?, json!({ "x": { "_": "New" } }));
    assert_eq!(test.read_json(UNUSED)?, json!({ "Other": { "_": "Other" } }));

    Ok(())
}

#[test]
fn test_scan_reports_conflicts_and_duplicates() -> Result<()> {
    let test = CliTest::with_config("{}")?;
    test.write_file(
        "src/a.tsx",
        "<UFTT ttid=\"x\">A</UFTT>\n<UFTT ttid=\"x\">B</UFTT>\n",
    )?;
    test.write_file(
        "src/b.tsx",
        "<UFTT ttid=\"save1\">Save</UFTT>\n<UFTT ttid=\"save2\">Save</UFTT>\n",
    )?;

    let (code, stdout, _) = run(test.scan_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains(
        r#"warning: adding entry for "x" with different content: original="A" new="B""#
    ));
    assert!(stdout.contains(r#"info: "save1", "save2" have the same content "Save""#));
    assert_eq!(test.read_json(TARGET)?["x"], json!({ "_": "B" }));

    Ok(())
}

#[test]
fn test_scan_with_config_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "project/custom.json",
        r#"{ "sourceFolders": ["app"], "targetFile": "t.json", "unusedFile": "u.json" }"#,
    )?;
    test.write_file("project/app/a.tsx", "<UFTT>Hi</UFTT>")?;

    let (code, _, _) = run({
        let mut cmd = test.scan_command();
        cmd.args(["--config", "project/custom.json"]);
        cmd
    })?;

    assert_eq!(code, 0);
    assert_eq!(test.read_json("project/t.json")?, json!({ "Hi": { "_": "Hi" } }));
    assert_eq!(test.read_json("project/u.json")?, json!({}));

    Ok(())
}

#[test]
fn test_scan_finds_config_in_parent() -> Result<()> {
    let test = CliTest::with_config("{}")?;
    test.write_file("src/components/a.tsx", "<UFTT>Hi</UFTT>")?;

    let (code, _, _) = run({
        let mut cmd = test.scan_command();
        cmd.current_dir(test.root().join("src/components"));
        cmd
    })?;

    assert_eq!(code, 0);
    assert_eq!(test.read_json(TARGET)?, json!({ "Hi": { "_": "Hi" } }));

    Ok(())
}

#[test]
fn test_scan_without_config_fails() -> Result<()> {
    let test = CliTest::new()?;

    let (code, _, stderr) = run(test.scan_command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Can not find ufttconfig.json"));
    assert!(stderr.contains("ttscan init"));

    Ok(())
}

#[test]
fn test_scan_with_empty_tags_writes_nothing() -> Result<()> {
    let test = CliTest::with_config(r#"{ "tags": [] }"#)?;
    test.write_file("src/a.tsx", "<UFTT>Hi</UFTT>")?;

    let (code, _, stderr) = run(test.scan_command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("tags"));
    assert!(!test.root().join(TARGET).exists());

    Ok(())
}

#[test]
fn test_scan_with_invalid_dictionary_writes_nothing() -> Result<()> {
    let test = CliTest::with_config("{}")?;
    test.write_file("src/a.tsx", "<UFTT>Hi</UFTT>")?;
    test.write_file(UNUSED, "[1, 2]")?;

    let (code, _, _) = run(test.scan_command())?;

    assert_eq!(code, 2);
    assert!(!test.root().join(TARGET).exists());
    assert_eq!(test.read_file(UNUSED)?, "[1, 2]");

    Ok(())
}
