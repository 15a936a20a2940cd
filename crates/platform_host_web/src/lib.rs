//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer: `localStorage` persistence, the
//! `fetch`/`EventSource` backend client, and external link opening. Transport glue lives in a
//! private `bridge` module with a non-wasm shim so the crate builds and tests natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod api_client;
mod bridge;
pub mod external_url;
pub mod storage;

pub use adapters::{build_host_services, build_host_services_with};
pub use api_client::{HttpWebOsApi, PROCESSES_EVENT};
pub use external_url::WebExternalUrlService;
pub use storage::local_kv::WebKeyValueStore;
