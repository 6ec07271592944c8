use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const CATALOGUE: &str = "translations/Part_de.ts";

const TWO_SPACE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de">
<context>
  <name>CmdPartBox</name>
  <message>
    <source>Cube</source>
    <translation>Würfel</translation>
  </message>
</context>
</TS>
"#;

const CANONICAL: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de">
<context>
    <name>CmdPartBox</name>
    <message>
        <source>Cube</source>
        <translation>Würfel</translation>
    </message>
</context>
</TS>
"#;

/// Messages whose locations span a `.ui` form and its `.cpp` file.
const MULTI_FILE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de">
<context>
    <name>PartGui::DlgExtrusion</name>
    <message>
        <location filename="../../DlgExtrusion.ui" line="+14"/>
        <source>Extrude</source>
        <translation>Extrudir</translation>
    </message>
    <message>
        <location line="+3"/>
        <location filename="../../DlgExtrusion.cpp" line="+198"/>
        <source>Select</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <location line="+10"/>
        <source>Along edge:</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Select a shape for extrusion, first.</source>
        <translation type="obsolete">Select a shape for extrusion, first.</translation>
    </message>
    <message>
        <location filename="../../DlgExtrusion.cpp" line="-26"/>
        <source>Selecting...</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <location line="+241"/>
        <source>The document &apos;%1&apos; doesn&apos;t exist.</source>
        <translation type="unfinished">O documento &apos;%1&apos; não existe.</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_fmt_dry_run_lists_files() -> Result<()> {
    let test = CliTest::with_file(CATALOGUE, TWO_SPACE)?;

    let (code, stdout, _) = run(test.command().arg("fmt"))?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        concat!(
            "Would reformat 1 file(s):\n",
            "  - translations/Part_de.ts\n",
            "Run with --apply to rewrite them.\n",
        )
    );
    assert_eq!(test.read_file(CATALOGUE)?, TWO_SPACE);

    Ok(())
}

#[test]
fn test_fmt_apply_rewrites_files() -> Result<()> {
    let test = CliTest::with_file(CATALOGUE, TWO_SPACE)?;

    let (code, stdout, _) = run(test.command().args(["fmt", "--apply"]))?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "Reformatted 1 file(s):\n  - translations/Part_de.ts\n");
    assert_eq!(test.read_file(CATALOGUE)?, CANONICAL);

    let (code, stdout, _) = run(test.command().arg("fmt"))?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "\u{2713} All catalogues are formatted\n");

    Ok(())
}

#[test]
fn test_fmt_keeps_multi_file_locations_byte_stable() -> Result<()> {
    let test = CliTest::with_file(CATALOGUE, MULTI_FILE)?;

    let (code, stdout, _) = run(test.command().args(["fmt", "--apply"]))?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "\u{2713} All catalogues are formatted\n");
    assert_eq!(test.read_file(CATALOGUE)?, MULTI_FILE);

    Ok(())
}
