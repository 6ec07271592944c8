use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, run};

const CATALOGUE: &str = "translations/Part_pt-PT.ts";

#[test]
fn test_translate_finished_entry() -> Result<()> {
    let test = CliTest::with_part_catalogue()?;

    assert_cmd_snapshot!(test.translate_command(CATALOGUE, "CmdPartBox", "Cube"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Cubo

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_translate_unescapes_entities() -> Result<()> {
    let test = CliTest::with_part_catalogue()?;

    let (code, stdout, _) =
        run(&mut test.translate_command(CATALOGUE, "CmdPartBox2", "Object's origin"))?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "Origem do objeto\n");

    let (_, stdout, _) =
        run(&mut test.translate_command(CATALOGUE, "PartGui::DlgFilletEdges", "&Parametric"))?;
    assert_eq!(stdout, "&Paramétrico\n");

    Ok(())
}

#[test]
fn test_translate_falls_back_to_source_text() -> Result<()> {
    let test = CliTest::with_part_catalogue()?;

    // Unknown key.
    let (code, stdout, _) = run(&mut test.translate_command(CATALOGUE, "CmdPartBox", "Cone"))?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "Cone\n");

    // Obsolete entry.
    let (_, stdout, _) = run(&mut test.translate_command(CATALOGUE, "CmdPartBox", "Box"))?;
    assert_eq!(stdout, "Box\n");

    // Unfinished but empty.
    let (_, stdout, _) = run(test
        .translate_command(CATALOGUE, "Attacher", "Any")
        .args(["--comment", "Attacher reference type"]))?;
    assert_eq!(stdout, "Any\n");

    Ok(())
}

#[test]
fn test_translate_unfinished_policy() -> Result<()> {
    let test = CliTest::with_part_catalogue()?;

    let (_, stdout, _) = run(test
        .translate_command(CATALOGUE, "Attacher", "Edge")
        .args(["--comment", "Attacher reference type"]))?;
    assert_eq!(stdout, "Borda\n");

    let (_, stdout, _) = run(test
        .translate_command(CATALOGUE, "Attacher", "Edge")
        .args(["--comment", "Attacher reference type", "--finished-only"]))?;
    assert_eq!(stdout, "Edge\n");

    test.write_file(".tscatrc.json", r#"{ "includeUnfinished": false }"#)?;
    let (_, stdout, _) = run(&mut test.translate_command(CATALOGUE, "Attacher", "Edge"))?;
    assert_eq!(stdout, "Edge\n");

    Ok(())
}

#[test]
fn test_translate_unreadable_catalogue() -> Result<()> {
    let test = CliTest::with_file("translations/Part_de.ts", "<TS language=\"de\"><context>")?;

    let (code, stdout, stderr) =
        run(&mut test.translate_command("translations/Part_de.ts", "CmdPartBox", "Cube"))?;

    assert_eq!(code, 1);
    assert_eq!(stdout, "Cube\n");
    assert!(stderr.starts_with("warning: translations/Part_de.ts: "));
    assert!(stderr.contains("(falling back to source text)"));

    Ok(())
}

#[test]
fn test_translate_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let (code, _, stderr) = run(&mut test.translate_command("nope.ts", "CmdPartBox", "Cube"))?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Failed to read catalogue: nope.ts"));

    Ok(())
}
