use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Created"));
    assert!(test.root().join("ufttconfig.json").exists());

    let parsed: Value = serde_json::from_str(&test.read_file("ufttconfig.json")?)?;
    assert_eq!(parsed["sourceFolders"], serde_json::json!(["src"]));
    assert_eq!(
        parsed["tags"],
        serde_json::json!(["UFTT", "UFTTSpan", "UFTTDiv", "UFTTHtml"])
    );
    assert_eq!(parsed["cleanLanguages"], Value::Bool(false));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_config("{}")?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(code, 1);
    assert!(stdout.contains("ufttconfig.json already exists"));
    assert_eq!(test.read_file("ufttconfig.json")?, "{}");

    Ok(())
}
