use super::*;

fn unsupported() -> String {
    "Browser network APIs are only available when compiled for wasm32".to_string()
}

pub async fn fetch_json<T: DeserializeOwned>(
    _method: HttpMethod,
    _url: &str,
    _body: Option<String>,
    operation: &str,
) -> Result<T, String> {
    Err(format!("{operation} failed: {}", unsupported()))
}

pub async fn fetch_unit(_method: HttpMethod, _url: &str, operation: &str) -> Result<(), String> {
    Err(format!("{operation} failed: {}", unsupported()))
}

pub fn open_event_source(
    _url: &str,
    _event_name: &str,
    _on_data: Box<dyn FnMut(String)>,
) -> Result<CloseHandle, String> {
    Err(unsupported())
}

pub fn open_external_url(_url: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn encode_component(value: &str) -> String {
    value.to_string()
}
