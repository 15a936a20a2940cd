mod web_app;

pub use web_app::{DesktopEntry, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    web_app::tag_device_class();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
