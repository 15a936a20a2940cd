use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use platform_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="WebOS" />
        <Meta name="description" content="A desktop environment running in the browser." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host_services=build_host_services()>
            <DesktopShell />
        </DesktopProvider>
    }
}

/// Marks the document root with `data-device` so stylesheets can switch to the touch layout.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub(crate) fn tag_device_class() {
    let device = desktop_runtime::current_device_class();
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    if let Err(err) = root.set_attribute("data-device", device.as_str()) {
        logging::warn!("tag device class failed: {err:?}");
    }
}
