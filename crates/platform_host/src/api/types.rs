//! JSON wire types exchanged with the desktop backend.
//!
//! Field names follow the backend's camelCase JSON.

use serde::{Deserialize, Serialize};

/// Node id whose children are the desktop icons.
pub const DESKTOP_NODE_ID: &str = "desktop";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Backend file-tree node kind.
pub enum FileNodeType {
    /// Folder containing other nodes.
    Directory,
    /// Text document.
    File,
    /// Link to an app (`app:<kind>`) or URL, carried in `content`.
    Shortcut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One backend file-tree node.
pub struct FileNode {
    /// Stable node id. Desktop icon ids are node ids.
    pub id: String,
    /// Parent node id, `None` at the root.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Display name.
    pub name: String,
    /// Node kind.
    #[serde(rename = "type")]
    pub node_type: FileNodeType,
    /// File text or shortcut target.
    #[serde(default)]
    pub content: Option<String>,
}

impl FileNode {
    /// Builds a node with no content.
    pub fn new(
        id: impl Into<String>,
        parent_id: Option<&str>,
        name: impl Into<String>,
        node_type: FileNodeType,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.map(str::to_string),
            name: name.into(),
            node_type,
            content: None,
        }
    }

    /// Returns the node with `content` set.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Boot-time system configuration.
pub struct BootConfig {
    /// Displayed OS version string.
    pub os_version: String,
    /// Theme token.
    pub theme: String,
    /// Backend-selected default wallpaper.
    pub wallpaper_url: String,
    /// Display name of the visitor.
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Terminal command outcome. Exactly one of `output`/`error` is normally set.
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,
    /// Command output on success.
    #[serde(default)]
    pub output: Option<String>,
    /// Error message on failure.
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Backend terminal working-directory state.
pub struct TerminalContext {
    /// Current directory node id.
    pub current_directory: String,
    /// Absolute display path.
    pub current_path: String,
    /// Last path segment.
    pub current_dir_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Terminal autocomplete candidates.
pub struct AutocompleteResponse {
    /// Candidate completions.
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One row of the process stream.
pub struct ProcessInfo {
    /// Process id as reported by the backend.
    pub pid: String,
    /// Process name.
    pub name: String,
    /// Resident memory in bytes.
    pub memory_bytes: u64,
    /// Status label.
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Body of `POST /compiler/execute`.
pub struct ExecutionRequest {
    /// Source snippet to run.
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Response of `POST /compiler/execute`.
pub struct ExecutionResult {
    /// Combined output or error text.
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /file-nodes`.
pub struct CreateNodeRequest {
    /// Parent directory id.
    pub parent_id: String,
    /// New node name.
    pub name: String,
    /// `DIRECTORY` or `FILE`.
    #[serde(rename = "type")]
    pub node_type: FileNodeType,
    /// Initial content; files are created empty, directories omit it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl CreateNodeRequest {
    /// Request for a new directory.
    pub fn directory(parent_id: &str, name: &str) -> Self {
        Self {
            parent_id: parent_id.to_string(),
            name: name.to_string(),
            node_type: FileNodeType::Directory,
            content: None,
        }
    }

    /// Request for a new, empty file.
    pub fn file(parent_id: &str, name: &str) -> Self {
        Self {
            parent_id: parent_id.to_string(),
            name: name.to_string(),
            node_type: FileNodeType::File,
            content: Some(String::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Body of `PUT /file-nodes/{id}/content`.
pub struct UpdateContentRequest {
    /// Replacement file text.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Body of `POST /terminal/exec`.
pub struct ExecuteCommandRequest {
    /// Raw command line.
    pub command: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Minesweeper game status.
pub enum MinesweeperStatus {
    /// Game in progress.
    Playing,
    /// A mine was revealed.
    Lost,
    /// Every safe cell is revealed.
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// One revealed minesweeper cell.
pub struct CellUpdate {
    /// Row index.
    #[serde(rename = "r")]
    pub row: u8,
    /// Column index.
    #[serde(rename = "c")]
    pub col: u8,
    /// Adjacent mine count `0..=8`, or `9` for a mine.
    #[serde(rename = "val")]
    pub value: u8,
}

impl CellUpdate {
    /// Cell value marking a mine.
    pub const MINE: u8 = 9;

    /// Returns `true` when the revealed cell is a mine.
    pub const fn is_mine(self) -> bool {
        self.value == Self::MINE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Minesweeper move response.
pub struct GameResponse {
    /// Game status after the move.
    pub status: MinesweeperStatus,
    /// Cells revealed by the move.
    #[serde(default)]
    pub updates: Vec<CellUpdate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /games/minesweeper/new`.
pub struct MinesweeperNewRequest {
    /// Client session id.
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /games/minesweeper/click`.
pub struct MinesweeperClickRequest {
    /// Client session id.
    pub session_id: String,
    /// Row index `0..=9`.
    pub row: u8,
    /// Column index `0..=9`.
    pub col: u8,
}
