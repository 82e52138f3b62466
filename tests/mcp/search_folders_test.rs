//! `search_folder_path` against the mock Graph API.

use super::harness::McpTestHarness;

#[tokio::test]
async fn test_folder_search_filters_and_projects() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup(
        200,
        r#"{ "value": [
            {
                "id": "01F",
                "name": "Taxes",
                "webUrl": "https://contoso-my.sharepoint.com/personal/Documents/Taxes",
                "folder": { "childCount": 5 },
                "parentReference": { "path": "/drive/root:/Documents" }
            },
            { "name": "Taxes 2019" }
        ] }"#,
    )
    .await?;

    let result = harness
        .call_tool("search_folder_path", serde_json::json!({ "folder_name": "Taxes" }))
        .await?;
    let folders = result.as_array().unwrap();
    assert_eq!(folders.len(), 2);
    assert_eq!(folders[0]["childCount"], 5);
    assert_eq!(folders[0]["parentPath"], "/drive/root:/Documents");
    assert_eq!(folders[1]["name"], "Taxes 2019");
    assert_eq!(folders[1]["childCount"], 0);
    assert_eq!(folders[1]["link"], "");

    let requests = harness.requests();
    let pq = &requests[0].path_and_query;
    assert!(pq.starts_with("/v1.0/me/drive/root/search(q='Taxes')?"), "{pq}");
    assert!(pq.contains("$filter=folder%20ne%20null"), "{pq}");
    assert!(pq.ends_with("$select=name,id,webUrl,folder,parentReference"), "{pq}");

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_folder_search_errors() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup(404, "").await?;
    let text = harness
        .call_tool_text("search_folder_path", serde_json::json!({ "folder_name": "Taxes" }))
        .await?;
    assert_eq!(text, "Error searching folders: API error: 404 - Not Found");
    harness.teardown().await?;

    let harness = McpTestHarness::setup(200, "invalid json").await?;
    let text = harness
        .call_tool_text("search_folder_path", serde_json::json!({ "folder_name": "Taxes" }))
        .await?;
    assert!(text.starts_with("Error processing folder search results: "));
    harness.teardown().await?;
    Ok(())
}
