//! Overlapping tool calls sharing one server and one Graph client.

use std::collections::HashSet;

use serde_json::json;

use super::harness::{McpTestHarness, TEST_TOKEN};

const ONE_FOLDER: &str = r#"{ "value": [
    {
        "name": "Tax Returns",
        "webUrl": "https://x/Tax%20Returns",
        "folder": { "childCount": 4 },
        "parentReference": { "path": "/drive/root:/Documents" }
    }
] }"#;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_simultaneous_calls_each_get_their_own_result() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup(200, ONE_FOLDER).await?;

    let terms: Vec<String> = (0..6).map(|i| format!("report{i}")).collect();
    let file_searches = terms
        .iter()
        .map(|term| harness.call_tool("search_files", json!({ "file_name": term })));
    let folder_search = harness.call_tool("search_folder_path", json!({ "folder_name": "Tax" }));
    let listing = harness.call_tool("list_folder_contents", json!({ "path": "Documents" }));

    let (files, folders, listed) = tokio::join!(
        futures::future::join_all(file_searches),
        folder_search,
        listing
    );

    for result in files {
        assert_eq!(
            result?,
            json!([{
                "name": "Tax Returns",
                "link": "https://x/Tax%20Returns",
                "kind": "",
                "parentPath": "/drive/root:/Documents"
            }])
        );
    }
    let folder_shape = json!([{
        "name": "Tax Returns",
        "link": "https://x/Tax%20Returns",
        "parentPath": "/drive/root:/Documents",
        "childCount": 4
    }]);
    assert_eq!(folders?, folder_shape);
    assert_eq!(listed?, folder_shape);

    let requests = harness.requests();
    assert_eq!(requests.len(), terms.len() + 2);
    assert!(requests
        .iter()
        .all(|r| r.authorization.as_deref() == Some(&*format!("Bearer {TEST_TOKEN}"))));

    let paths: HashSet<String> = requests.into_iter().map(|r| r.path_and_query).collect();
    for term in &terms {
        assert!(paths.contains(&format!(
            "/v1.0/me/drive/root/search(q='{term}')?$select=name,id,webUrl,file,parentReference"
        )));
    }
    assert!(paths
        .iter()
        .any(|p| p.starts_with("/v1.0/me/drive/root/search(q='Tax')?$filter=folder%20ne%20null")));
    assert!(paths
        .iter()
        .any(|p| p.starts_with("/v1.0/me/drive/root:/Documents:/children?")));

    harness.teardown().await?;
    Ok(())
}
