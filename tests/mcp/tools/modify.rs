use rmcp::handler::server::wrapper::Parameters;
use tscat::mcp::{
    TscatMcpServer,
    types::{ScanIssuesParams, SetTranslationParams},
};

use crate::{McpTestFixture, PART_DE, PART_PT, extract_tool_result_json};

/// An obsolete copy of a live message, plus a plural message.
const PART_ES: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="es">
<context>
    <name>CmdPartBox</name>
    <message>
        <source>Box</source>
        <translation type="obsolete">Caja</translation>
    </message>
    <message>
        <location filename="../../CommandParametric.cpp" line="+87"/>
        <source>Box</source>
        <translation type="unfinished"></translation>
    </message>
    <message numerus="yes">
        <location line="+12"/>
        <source>%n box(es)</source>
        <translation type="unfinished">
            <numerusform>%n caja</numerusform>
            <numerusform></numerusform>
        </translation>
    </message>
</context>
</TS>
"#;

fn set_params(
    fixture: &McpTestFixture,
    file_path: &str,
    source_text: &str,
    translation: &str,
) -> SetTranslationParams {
    SetTranslationParams {
        project_root_path: fixture.root(),
        file_path: file_path.to_string(),
        context: "CmdPartBox".to_string(),
        source_text: source_text.to_string(),
        comment: None,
        translation: translation.to_string(),
        finished: None,
    }
}

#[tokio::test]
async fn test_set_translation_updates_file() {
    let fixture = McpTestFixture::with_catalogues(&[("Part_pt-PT.ts", PART_PT)]).unwrap();
    let server = TscatMcpServer::new();

    let params = set_params(&fixture, "translations/Part_pt-PT.ts", "Cube", "Cubo sólido");
    let result = server.set_translation(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["previous"], "Cubo");
    assert_eq!(json_result["translation"], "Cubo sólido");
    assert_eq!(json_result["status"], "translated");

    let content = fixture.read_catalogue("Part_pt-PT.ts").unwrap();
    assert!(content.contains("        <translation>Cubo sólido</translation>\n"));
    // Untouched entries survive the rewrite.
    assert!(content.contains("<translation type=\"obsolete\">Caixa</translation>"));
    assert!(content.contains("<source>Object&apos;s origin</source>"));
}

#[tokio::test]
async fn test_set_translation_fixes_empty_entry() {
    let fixture = McpTestFixture::with_catalogues(&[("Part_de.ts", PART_DE)]).unwrap();
    let server = TscatMcpServer::new();

    let params = set_params(&fixture, "translations/Part_de.ts", "Cube", "Würfel");
    server.set_translation(Parameters(params)).await.unwrap();

    let result = server
        .scan_issues(Parameters(ScanIssuesParams {
            project_root_path: fixture.root(),
            rule: Some("empty-translation".to_string()),
            limit: None,
            offset: None,
        }))
        .await
        .unwrap();
    assert_eq!(extract_tool_result_json(&result)["totalCount"], 0);
}

#[tokio::test]
async fn test_set_translation_unfinished() {
    let fixture = McpTestFixture::with_catalogues(&[("Part_de.ts", PART_DE)]).unwrap();
    let server = TscatMcpServer::new();

    let mut params = set_params(&fixture, "translations/Part_de.ts", "Cube", "Würfel");
    params.finished = Some(false);
    let result = server.set_translation(Parameters(params)).await.unwrap();
    assert_eq!(extract_tool_result_json(&result)["status"], "unfinished");

    let content = fixture.read_catalogue("Part_de.ts").unwrap();
    assert!(content.contains("<translation type=\"unfinished\">Würfel</translation>"));
}

#[tokio::test]
async fn test_set_translation_unknown_message() {
    let fixture = McpTestFixture::with_catalogues(&[("Part_de.ts", PART_DE)]).unwrap();
    let server = TscatMcpServer::new();

    let params = set_params(&fixture, "translations/Part_de.ts", "Cone", "Kegel");
    let err = server.set_translation(Parameters(params)).await.unwrap_err();
    assert!(err.message.contains("No message \"CmdPartBox::Cone\""));

    // Nothing was written.
    assert_eq!(fixture.read_catalogue("Part_de.ts").unwrap(), PART_DE);
}

#[tokio::test]
async fn test_set_translation_missing_file() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TscatMcpServer::new();

    let params = set_params(&fixture, "translations/Part_ja.ts", "Cube", "立方体");
    let err = server.set_translation(Parameters(params)).await.unwrap_err();
    assert!(err.message.contains("Failed to read translations/Part_ja.ts"));
    assert!(!fixture.root_path().join("translations/Part_ja.ts").exists());
}

#[tokio::test]
async fn test_set_translation_edits_live_entry_over_obsolete_copy() {
    let fixture = McpTestFixture::with_catalogues(&[("Part_es.ts", PART_ES)]).unwrap();
    let server = TscatMcpServer::new();

    let params = set_params(&fixture, "translations/Part_es.ts", "Box", "Caja nueva");
    let result = server.set_translation(Parameters(params)).await.unwrap();
    assert_eq!(extract_tool_result_json(&result)["previous"], "");

    let content = fixture.read_catalogue("Part_es.ts").unwrap();
    assert!(content.contains("<translation type=\"obsolete\">Caja</translation>"));
    assert!(content.contains("        <translation>Caja nueva</translation>\n"));
}

#[tokio::test]
async fn test_set_translation_rejects_plural_message() {
    let fixture = McpTestFixture::with_catalogues(&[("Part_es.ts", PART_ES)]).unwrap();
    let server = TscatMcpServer::new();

    let params = set_params(&fixture, "translations/Part_es.ts", "%n box(es)", "%n cajas");
    let err = server.set_translation(Parameters(params)).await.unwrap_err();
    assert!(err.message.contains("\"CmdPartBox::%n box(es)\" is a plural message"));

    // Nothing was written.
    assert_eq!(fixture.read_catalogue("Part_es.ts").unwrap(), PART_ES);
}
