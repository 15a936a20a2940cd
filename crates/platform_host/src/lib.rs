//! Typed host-domain contracts and shared wire models used by the desktop runtime and browser
//! adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the key-value storage
//! contract behind persisted desktop state, the backend API contract with its JSON wire types, and
//! the session id helper, while concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod external_url;
pub mod host;
pub mod session;
pub mod storage;

pub use api::endpoints::{ApiConfig, Endpoint, HttpMethod, DEFAULT_API_BASE};
pub use api::service::{NoopWebOsApi, ProcessSubscription, WebOsApi, WebOsApiFuture};
pub use api::types::{
    AutocompleteResponse, BootConfig, CellUpdate, CommandResult, CreateNodeRequest,
    ExecuteCommandRequest, ExecutionRequest, ExecutionResult, FileNode, FileNodeType,
    GameResponse, MinesweeperClickRequest, MinesweeperNewRequest, MinesweeperStatus, ProcessInfo,
    TerminalContext, UpdateContentRequest, DESKTOP_NODE_ID,
};
pub use external_url::{
    is_external_url, ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService,
};
pub use host::HostServices;
pub use session::{load_or_create_session_id, MINESWEEPER_SESSION_KEY};
pub use storage::kv::{
    load_json_with, save_json_with, KeyValueStore, MemoryKeyValueStore, NoopKeyValueStore,
};
