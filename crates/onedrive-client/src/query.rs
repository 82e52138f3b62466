//! Graph path construction for drive search and listing.
//!
//! Every builder returns a path-and-query relative to the configured base URL
//! (e.g. `https://graph.microsoft.com/v1.0`). Search terms are wrapped in the
//! single-quoted literal Graph's `search(q=...)` function expects and are
//! otherwise inserted verbatim; embedded quotes are not escaped, and a `#` in
//! the term starts the URL fragment, so everything after it never reaches
//! the remote API.

use url::form_urlencoded;

/// Root of the signed-in user's drive.
const DRIVE_ROOT: &str = "/me/drive/root";

const SCOPED_FILE_SELECT: &str = "id,name,webUrl,file,parentReference";
const ROOT_FILE_SELECT: &str = "name,id,webUrl,file,parentReference";
const FOLDER_SELECT: &str = "name,id,webUrl,folder,parentReference";
const FOLDER_FILTER: &str = "folder ne null";
const CHILDREN_SELECT: &str = "name,id,webUrl,file,folder,parentReference";

/// Criteria for the file and folder search tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub term: String,
    pub scope: Option<String>,
}

impl SearchCriteria {
    pub fn new(term: impl Into<String>, scope: Option<String>) -> Self {
        Self {
            term: term.into(),
            scope,
        }
    }

    /// Folder restricting the search, or `None` when absent or blank.
    pub fn scope(&self) -> Option<&str> {
        non_blank(self.scope.as_deref())
    }

    pub fn files_path(&self) -> String {
        build_search_files_query(&self.term, self.scope())
    }

    /// Folder search never restricts by scope.
    pub fn folders_path(&self) -> String {
        build_search_folders_query(&self.term)
    }
}

/// Criteria for the folder listing tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCriteria {
    pub path: Option<String>,
}

impl ListCriteria {
    pub fn new(path: Option<String>) -> Self {
        Self { path }
    }

    /// Folder to list, or `None` for the drive root.
    pub fn path(&self) -> Option<&str> {
        non_blank(self.path.as_deref())
    }

    pub fn children_path(&self) -> String {
        build_list_query(self.path())
    }
}

/// Build the file search path, scoped to `scope` when it is non-blank.
pub fn build_search_files_query(term: &str, scope: Option<&str>) -> String {
    let search = quoted(term);
    match non_blank(scope) {
        Some(scope) => format!(
            "{DRIVE_ROOT}:/{}:/search(q={search})?$select={SCOPED_FILE_SELECT}",
            encode_component(scope)
        ),
        None => format!("{DRIVE_ROOT}/search(q={search})?$select={ROOT_FILE_SELECT}"),
    }
}

/// Build the folder search path; results are filtered to folders server-side.
pub fn build_search_folders_query(term: &str) -> String {
    format!(
        "{DRIVE_ROOT}/search(q={})?$filter={FOLDER_FILTER}&$select={FOLDER_SELECT}",
        quoted(term)
    )
}

/// Build the children listing path for `path`, or for the drive root.
///
/// Segments are encoded one by one so `/` keeps separating folders.
pub fn build_list_query(path: Option<&str>) -> String {
    let encoded: Vec<String> = non_blank(path)
        .map(|p| {
            p.split('/')
                .filter(|segment| !segment.is_empty())
                .map(encode_component)
                .collect()
        })
        .unwrap_or_default();

    if encoded.is_empty() {
        format!("{DRIVE_ROOT}/children?$select={CHILDREN_SELECT}")
    } else {
        format!(
            "{DRIVE_ROOT}:/{}:/children?$select={CHILDREN_SELECT}",
            encoded.join("/")
        )
    }
}

/// UTF-8 percent-encoding of a single path component.
///
/// Reserved characters (including `/`) are escaped and spaces become `%20`;
/// form encoding emits `+` for spaces, which a URL path would read literally.
/// A literal `+` is already escaped to `%2B` at that point.
pub fn encode_component(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn quoted(term: &str) -> String {
    format!("'{term}'")
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
