//! Browser transport interop for the backend client and link opening.
//!
//! Calls route to the `wasm32` implementation or to a non-wasm shim that reports the transport
//! as unavailable.

use platform_host::HttpMethod;
use serde::de::DeserializeOwned;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

/// Closes a host event source when called.
pub type CloseHandle = Box<dyn FnOnce()>;

/// Sends one request and decodes the JSON response body.
pub async fn fetch_json<T: DeserializeOwned>(
    method: HttpMethod,
    url: &str,
    body: Option<String>,
    operation: &str,
) -> Result<T, String> {
    imp::fetch_json(method, url, body, operation).await
}

/// Sends one request and ignores the response body.
pub async fn fetch_unit(method: HttpMethod, url: &str, operation: &str) -> Result<(), String> {
    imp::fetch_unit(method, url, operation).await
}

/// Opens an `EventSource` on `url` and forwards the data of every `event_name` event.
pub fn open_event_source(
    url: &str,
    event_name: &str,
    on_data: Box<dyn FnMut(String)>,
) -> Result<CloseHandle, String> {
    imp::open_event_source(url, event_name, on_data)
}

/// Opens `url` in a new browsing context.
pub fn open_external_url(url: &str) -> Result<(), String> {
    imp::open_external_url(url)
}

/// Percent-encodes a path segment or query value.
pub fn encode_component(value: &str) -> String {
    imp::encode_component(value)
}
