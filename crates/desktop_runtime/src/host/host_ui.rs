use leptos::{logging, spawn_local};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
use crate::model::FONT_SIZE_CSS_VAR;

use crate::{
    host::DesktopHostContext,
    model::{WindowRect, TASKBAR_HEIGHT_PX},
};

const FALLBACK_VIEWPORT_WIDTH: i32 = 1024;
const FALLBACK_VIEWPORT_HEIGHT: i32 = 768;

pub(super) fn open_external_url(host: DesktopHostContext, url: &str) {
    let url = url.to_string();
    spawn_local(async move {
        if let Err(err) = host.external_url_service().open_url(&url).await {
            logging::warn!("open external url failed for `{url}`: {err}");
        }
    });
}

pub(super) fn apply_font_size(px: u32) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        if let Err(err) = root
            .style()
            .set_property(FONT_SIZE_CSS_VAR, &format!("{px}px"))
        {
            logging::warn!("apply font size failed: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = px;
}

pub(super) fn desktop_viewport_rect() -> WindowRect {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT_WIDTH);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);

            return WindowRect {
                x: 0,
                y: 0,
                w: width,
                h: height,
            };
        }
    }

    WindowRect {
        x: 0,
        y: 0,
        w: FALLBACK_VIEWPORT_WIDTH,
        h: FALLBACK_VIEWPORT_HEIGHT,
    }
}

pub(super) fn icon_container_height() -> i32 {
    (desktop_viewport_rect().h - TASKBAR_HEIGHT_PX).max(0)
}
