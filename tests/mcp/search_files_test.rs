//! `search_files` against the mock Graph API.

use super::harness::{McpTestHarness, TEST_TOKEN};

const ONE_FILE: &str = r#"{
    "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#Collection(driveItem)",
    "value": [
        {
            "id": "01BYE5RZ",
            "name": "resume.pdf",
            "webUrl": "https://contoso-my.sharepoint.com/personal/resume.pdf",
            "file": { "mimeType": "application/pdf" },
            "parentReference": { "driveId": "b!", "path": "/drive/root:/My Documents" }
        }
    ]
}"#;

#[tokio::test]
async fn test_scoped_search_request_and_records() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup(200, ONE_FILE).await?;

    let result = harness
        .call_tool(
            "search_files",
            serde_json::json!({ "file_name": "resume", "folder": "My Documents" }),
        )
        .await?;
    assert_eq!(
        result,
        serde_json::json!([{
            "name": "resume.pdf",
            "link": "https://contoso-my.sharepoint.com/personal/resume.pdf",
            "kind": "",
            "parentPath": "/drive/root:/My Documents"
        }])
    );

    let requests = harness.requests();
    assert_eq!(requests.len(), 1);
    assert!(
        requests[0]
            .path_and_query
            .starts_with("/v1.0/me/drive/root:/My%20Documents:/search(q='resume')?"),
        "unexpected path: {}",
        requests[0].path_and_query
    );
    assert!(requests[0]
        .path_and_query
        .ends_with("$select=id,name,webUrl,file,parentReference"));
    assert_eq!(
        requests[0].authorization.as_deref(),
        Some(format!("Bearer {TEST_TOKEN}").as_str())
    );
    assert_eq!(requests[0].accept.as_deref(), Some("application/json"));

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_unscoped_search_uses_root() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup(200, ONE_FILE).await?;

    harness
        .call_tool("search_files", serde_json::json!({ "file_name": "resume", "folder": "" }))
        .await?;
    let requests = harness.requests();
    assert!(requests[0]
        .path_and_query
        .starts_with("/v1.0/me/drive/root/search(q='resume')?$select=name,id,webUrl,file,parentReference"));

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_api_failure_becomes_error_text() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup(
        500,
        r#"{"error":{"code":"generalException","message":"API Error"}}"#,
    )
    .await?;

    let text = harness
        .call_tool_text("search_files", serde_json::json!({ "file_name": "resume" }))
        .await?;
    assert!(text.starts_with("Error searching files: API error: 500"));
    assert!(text.contains("API Error"));
    assert!(!text.contains("parentPath"));

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_invalid_body_becomes_processing_error() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup(200, "invalid json").await?;

    let text = harness
        .call_tool_text("search_files", serde_json::json!({ "file_name": "resume" }))
        .await?;
    assert!(text.starts_with("Error processing search results: "));

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_repeated_calls_are_byte_identical() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup(200, ONE_FILE).await?;
    let args = serde_json::json!({ "file_name": "resume", "folder": "Documents" });

    let first = harness.call_tool_text("search_files", args.clone()).await?;
    let second = harness.call_tool_text("search_files", args).await?;
    assert_eq!(first, second);
    assert_eq!(harness.requests().len(), 2);

    harness.teardown().await?;
    Ok(())
}
