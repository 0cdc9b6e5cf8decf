use serde::{Deserialize, Serialize};

/// A published page recorded against its source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMapping {
    /// Workspace-relative source path.
    pub file_path: String,
    /// Page path on the publishing service.
    pub telegraph_path: String,
    pub telegraph_url: String,
    /// RFC 3339 modification time of the source when it was last published.
    pub last_modified: String,
}
