//! Desktop shell UI composition and interaction surfaces.

mod desktop_icons;
mod listeners;
mod start_menu;
mod taskbar;
mod window;

use leptos::*;
use platform_host::FileNodeType;

use self::{
    desktop_icons::DesktopIconLayer, listeners::GestureListeners, start_menu::StartMenu,
    taskbar::Taskbar, window::DesktopWindow,
};

use crate::{
    model::{PointerPosition, DEMO_MODE_NOTICE, FONT_SIZE_CSS_VAR},
    reducer::{parse_app_shortcut, DesktopAction},
    settings::resolve_wallpaper,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Full-screen desktop: wallpaper, icon grid, windows, start menu and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        runtime.dispatch_action(DesktopAction::ClearSelection);
        if state.with_untracked(|desktop| desktop.start_menu_open) {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let wallpaper = Signal::derive(move || {
        state.with(|desktop| {
            resolve_wallpaper(&desktop.settings, desktop.boot_config.as_ref()).to_string()
        })
    });
    let font_size = Signal::derive(move || state.with(|desktop| desktop.settings.font_size));

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            style=move || {
                format!(
                    "background-image:url('{}');background-size:cover;background-position:center;font-size:var({FONT_SIZE_CSS_VAR}, {}px);",
                    wallpaper.get(),
                    font_size.get()
                )
            }
        >
            <div class="desktop-tint" aria-hidden="true"></div>

            <Show
                when=move || state.with(|desktop| !desktop.loading)
                fallback=|| view! { <div class="desktop-loading">"Loading..."</div> }
            >
                <DesktopIconLayer />
            </Show>

            <Show
                when=move || state.with(|desktop| desktop.load_error.is_some())
                fallback=|| ()
            >
                <div class="desktop-notice" role="status">
                    {move || {
                        state
                            .with(|desktop| desktop.load_error.clone())
                            .unwrap_or_else(|| DEMO_MODE_NOTICE.to_string())
                    }}
                </div>
            </Show>

            <div class="desktop-window-layer">
                <For
                    each=move || state.with(|desktop| desktop.open_apps.clone())
                    key=|app| app.id.clone()
                    let:app
                >
                    <DesktopWindow app_id=app.id />
                </For>
            </div>

            <StartMenu />
            <Taskbar />
        </div>
    }
}

/// Display glyph for an app icon token.
fn app_glyph(icon: &str) -> &'static str {
    match icon {
        "terminal" => "\u{1F5A5}",
        "activity" => "\u{1F4CA}",
        "settings" => "\u{2699}",
        "folder" => "\u{1F4C1}",
        "globe" => "\u{1F310}",
        "file-text" => "\u{1F4DD}",
        "file-user" => "\u{1F4C4}",
        _ => "\u{25A1}",
    }
}

/// Display glyph for a desktop icon node.
fn node_glyph(node_type: FileNodeType, content: Option<&str>) -> &'static str {
    match node_type {
        FileNodeType::Directory => app_glyph("folder"),
        FileNodeType::File => app_glyph("file-text"),
        FileNodeType::Shortcut => match content.and_then(parse_app_shortcut) {
            Some(kind) => app_glyph(crate::apps::app_descriptor(kind).icon),
            None => "\u{1F517}",
        },
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Primary button for mice, primary contact for touch and pen.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}
