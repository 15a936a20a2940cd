use super::*;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::JsFuture;
use web_sys::{EventSource, MessageEvent, Request, RequestInit, Response};

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window unavailable".to_string())
}

async fn send(
    method: HttpMethod,
    url: &str,
    body: Option<String>,
    operation: &str,
) -> Result<Response, String> {
    let init = RequestInit::new();
    init.set_method(method.as_str());
    let has_body = body.is_some();
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(&body));
    }
    let request = Request::new_with_str_and_init(url, &init).map_err(js_error_to_string)?;
    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error_to_string)?;
    }

    let value = JsFuture::from(window()?.fetch_with_request(&request))
        .await
        .map_err(|err| format!("{operation} failed: {}", js_error_to_string(err)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| format!("{operation} failed: fetch returned a non-Response value"))?;
    if !response.ok() {
        return Err(format!("{operation} failed: HTTP {}", response.status()));
    }
    Ok(response)
}

pub async fn fetch_json<T: DeserializeOwned>(
    method: HttpMethod,
    url: &str,
    body: Option<String>,
    operation: &str,
) -> Result<T, String> {
    let response = send(method, url, body, operation).await?;
    let promise = response.json().map_err(js_error_to_string)?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|err| format!("{operation} failed: {}", js_error_to_string(err)))?;
    from_value(value).map_err(|e| format!("{operation} failed: {e}"))
}

pub async fn fetch_unit(method: HttpMethod, url: &str, operation: &str) -> Result<(), String> {
    send(method, url, None, operation).await.map(|_| ())
}

pub fn open_event_source(
    url: &str,
    event_name: &str,
    mut on_data: Box<dyn FnMut(String)>,
) -> Result<CloseHandle, String> {
    let source = EventSource::new(url).map_err(js_error_to_string)?;
    let callback = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
        if let Some(data) = event.data().as_string() {
            on_data(data);
        }
    });
    source
        .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
        .map_err(js_error_to_string)?;
    Ok(Box::new(move || {
        source.close();
        drop(callback);
    }))
}

pub fn open_external_url(url: &str) -> Result<(), String> {
    window()?
        .open_with_url_and_target(url, "_blank")
        .map(|_| ())
        .map_err(js_error_to_string)
}

pub fn encode_component(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}
