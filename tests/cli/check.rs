use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, run};

const CLEAN_DE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de">
<context>
    <name>CmdPartBox</name>
    <message>
        <source>Cube</source>
        <translation>Würfel</translation>
    </message>
    <message>
        <source>&amp;Parametric %1</source>
        <translation>&amp;Parametrisch %1</translation>
    </message>
</context>
</TS>
"#;

const BROKEN_DE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
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
        <translation>Kante %1</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_check_reports_unfinished_entries() -> Result<()> {
    let test = CliTest::with_part_catalogue()?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: "Attacher::Any"  unfinished
      --> translations/Part_pt-PT.ts:6
       = comment: Attacher reference type
       = note: in pt-PT (no translation)

    warning: "Attacher::Edge"  unfinished
      --> translations/Part_pt-PT.ts:12
       = comment: Attacher reference type
       = note: in pt-PT ("Borda")

    ✘ 2 problems (0 errors, 2 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_check_clean_catalogue() -> Result<()> {
    let test = CliTest::with_file("translations/Part_de.ts", CLEAN_DE)?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "\u{2713} Checked 1 catalogue - no issues found\n");

    Ok(())
}

#[test]
fn test_check_errors_fail_the_run() -> Result<()> {
    let test = CliTest::with_file("translations/Part_de.ts", BROKEN_DE)?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"CmdPartBox::Cube\"  empty-translation"));
    assert!(stdout.contains("  --> translations/Part_de.ts:6"));
    assert!(stdout.contains("warning: \"CmdPartBox::Edge%1 of %2\"  place-marker"));
    assert!(stdout.contains("= note: missing %2"));
    assert!(stdout.contains("2 problems (1 error, 1 warning)"));

    Ok(())
}

#[test]
fn test_check_selected_rules_only() -> Result<()> {
    let test = CliTest::with_file("translations/Part_de.ts", BROKEN_DE)?;

    let (code, stdout, _) = run(test.check_command().arg("place-marker"))?;

    assert_eq!(code, 0);
    assert!(!stdout.contains("empty-translation"));
    assert!(stdout.contains("1 problems (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_check_reports_parse_errors() -> Result<()> {
    let test = CliTest::with_part_catalogue()?;
    test.write_file(
        "translations/Part_de.ts",
        "<TS version=\"2.1\" language=\"de\">\n<context>\n    <name>Cmd</name>\n",
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("--> translations/Part_de.ts"));
    // The readable catalogue is still checked.
    assert!(stdout.contains("\"Attacher::Edge\"  unfinished"));

    Ok(())
}

#[test]
fn test_check_ignored_contexts() -> Result<()> {
    let test = CliTest::with_part_catalogue()?;
    test.write_file(".tscatrc.json", r#"{ "ignoreContexts": ["Attacher"] }"#)?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "\u{2713} Checked 1 catalogue - no issues found\n");

    Ok(())
}

#[test]
fn test_check_missing_catalogues_root() -> Result<()> {
    let test = CliTest::new()?;

    let (code, _, stderr) = run(&mut test.check_command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Catalogues directory"));
    assert!(stderr.contains("cataloguesRoot"));

    Ok(())
}

#[test]
fn test_check_catalogues_root_override() -> Result<()> {
    let test = CliTest::with_file("i18n/Part_de.ts", CLEAN_DE)?;

    let (code, stdout, _) = run(test.check_command().args(["--catalogues-root", "i18n"]))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Checked 1 catalogue"));

    Ok(())
}
