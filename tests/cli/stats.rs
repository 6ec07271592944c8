use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_stats_table() -> Result<()> {
    let test = CliTest::with_part_catalogue()?;

    let (code, stdout, _) = run(test.command().arg("stats"))?;

    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Catalogue                   Locale  Messages  Finished  Unfinished  Obsolete   Done",
            "translations/Part_pt-PT.ts  pt-PT         12         9           2         1  81.8%",
        ]
    );

    Ok(())
}

#[test]
fn test_stats_reports_unreadable_files() -> Result<()> {
    let test = CliTest::with_part_catalogue()?;
    test.write_file("translations/Part_de.ts", "<TS><context><name>A</name>")?;

    let (code, stdout, _) = run(test.command().arg("stats"))?;

    assert_eq!(code, 1);
    assert!(stdout.contains("translations/Part_pt-PT.ts  pt-PT"));
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("--> translations/Part_de.ts"));

    Ok(())
}

#[test]
fn test_stats_no_catalogues() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("translations/README", "not a catalogue")?;

    let (code, stdout, _) = run(test.command().arg("stats"))?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "No catalogues found\n");

    Ok(())
}
