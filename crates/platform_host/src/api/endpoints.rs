//! Backend endpoint table and API base configuration.

/// API base used when no build-time override is set.
pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Backend location configuration.
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    /// Creates a config for `base_url`, trimming trailing slashes. An empty base falls back to
    /// [`DEFAULT_API_BASE`].
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    /// Reads the `WEBOS_API_BASE` variable captured at compile time.
    pub fn from_build_env() -> Self {
        option_env!("WEBOS_API_BASE").map_or_else(Self::default, Self::new)
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute request URL for `endpoint`, with query values passed through `encode`.
    pub fn url_for(&self, endpoint: &Endpoint<'_>, encode: impl Fn(&str) -> String) -> String {
        format!("{}{}", self.base_url, endpoint.path(encode))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// HTTP verb used by an endpoint.
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Method token for request construction.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Backend operation addressed by method and path.
pub enum Endpoint<'a> {
    /// Boot configuration.
    BootConfig,
    /// Children of a directory node.
    ListNodes {
        /// Parent node id.
        parent_id: &'a str,
    },
    /// One node by id.
    Node {
        /// Node id.
        id: &'a str,
    },
    /// Create a directory or file.
    CreateNode,
    /// Replace file content.
    UpdateContent {
        /// Node id.
        id: &'a str,
    },
    /// Delete a node.
    DeleteNode {
        /// Node id.
        id: &'a str,
    },
    /// Run a terminal command.
    ExecuteCommand,
    /// Terminal working-directory state.
    TerminalContext,
    /// Terminal completion candidates.
    Autocomplete {
        /// Partial command line.
        input: &'a str,
    },
    /// Server-sent process list stream.
    Processes,
    /// Run a code snippet.
    ExecuteCode,
    /// Start a minesweeper game.
    MinesweeperNew,
    /// Reveal a minesweeper cell.
    MinesweeperClick,
}

impl Endpoint<'_> {
    /// Short operation label used in error messages.
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::BootConfig => "fetch boot config",
            Self::ListNodes { .. } => "fetch file nodes",
            Self::Node { .. } => "fetch file node",
            Self::CreateNode => "create file node",
            Self::UpdateContent { .. } => "update file content",
            Self::DeleteNode { .. } => "delete file node",
            Self::ExecuteCommand => "execute command",
            Self::TerminalContext => "fetch terminal context",
            Self::Autocomplete { .. } => "fetch autocomplete",
            Self::Processes => "subscribe processes",
            Self::ExecuteCode => "execute code",
            Self::MinesweeperNew => "start minesweeper game",
            Self::MinesweeperClick => "reveal minesweeper cell",
        }
    }

    /// HTTP method for the endpoint.
    pub const fn method(&self) -> HttpMethod {
        match self {
            Self::CreateNode
            | Self::ExecuteCommand
            | Self::ExecuteCode
            | Self::MinesweeperNew
            | Self::MinesweeperClick => HttpMethod::Post,
            Self::UpdateContent { .. } => HttpMethod::Put,
            Self::DeleteNode { .. } => HttpMethod::Delete,
            Self::BootConfig
            | Self::ListNodes { .. }
            | Self::Node { .. }
            | Self::TerminalContext
            | Self::Autocomplete { .. }
            | Self::Processes => HttpMethod::Get,
        }
    }

    /// Path relative to the API base, with path and query values passed through `encode`.
    pub fn path(&self, encode: impl Fn(&str) -> String) -> String {
        match self {
            Self::BootConfig => "/system/boot".to_string(),
            Self::ListNodes { parent_id } => format!("/file-nodes?parentId={}", encode(parent_id)),
            Self::Node { id } | Self::DeleteNode { id } => format!("/file-nodes/{}", encode(id)),
            Self::CreateNode => "/file-nodes".to_string(),
            Self::UpdateContent { id } => format!("/file-nodes/{}/content", encode(id)),
            Self::ExecuteCommand => "/terminal/exec".to_string(),
            Self::TerminalContext => "/terminal/context".to_string(),
            Self::Autocomplete { input } => {
                format!("/terminal/autocomplete?input={}", encode(input))
            }
            Self::Processes => "/processes".to_string(),
            Self::ExecuteCode => "/compiler/execute".to_string(),
            Self::MinesweeperNew => "/games/minesweeper/new".to_string(),
            Self::MinesweeperClick => "/games/minesweeper/click".to_string(),
        }
    }
}
