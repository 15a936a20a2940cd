use futures::{future::abortable, StreamExt};
use platform_host::ProcessInfo;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::*;
use crate::{
    apps::placeholder_summary,
    model::{AppKind, ResizeEdge, WindowGestureKind},
    settings::{MAX_FONT_SIZE, MIN_FONT_SIZE, PRESET_WALLPAPERS},
    window_manager::PressRegion,
};

#[cfg(target_arch = "wasm32")]
const CONTROL_SELECTOR: &str = "button, input, textarea, select";

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[cfg(target_arch = "wasm32")]
fn pressed_on_control(ev: &web_sys::PointerEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(CONTROL_SELECTOR).ok().flatten())
        .is_some()
}

#[cfg(not(target_arch = "wasm32"))]
fn pressed_on_control(_: &web_sys::PointerEvent) -> bool {
    false
}

fn resize_edge_class(edge: ResizeEdge) -> String {
    format!("edge-{}", edge.token())
}

/// Installs window-level listeners that feed a move or resize gesture until release.
fn track_window_gesture(
    runtime: DesktopRuntimeContext,
    listeners: StoredValue<Option<GestureListeners>>,
    kind: WindowGestureKind,
) {
    let update = move |pointer| match kind {
        WindowGestureKind::Move => DesktopAction::UpdateWindowMove { pointer },
        WindowGestureKind::Resize(_) => DesktopAction::UpdateWindowResize { pointer },
    };
    let end = move || match kind {
        WindowGestureKind::Move => DesktopAction::EndWindowMove,
        WindowGestureKind::Resize(_) => DesktopAction::EndWindowResize,
    };

    listeners.set_value(Some(GestureListeners::install(
        move |ev| runtime.dispatch_action(update(pointer_from_pointer_event(&ev))),
        move |_| {
            runtime.dispatch_action(end());
            listeners.set_value(None);
        },
        move |_| {
            runtime.dispatch_action(end());
            listeners.set_value(None);
        },
    )));
}

#[component]
pub(super) fn DesktopWindow(app_id: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let listeners = listeners::use_gesture_listener_slot();
    let app_id = store_value(app_id);

    let app = create_memo(move |_| {
        app_id.with_value(|id| state.with(|desktop| desktop.open_app(id).cloned()))
    });
    let window = create_memo(move |_| {
        app_id.with_value(|id| state.with(|desktop| desktop.window(id).copied()))
    });
    let focused = create_memo(move |_| {
        app_id.with_value(|id| state.with(|desktop| desktop.focused_app.as_deref() == Some(id)))
    });

    let focus = move |_: web_sys::PointerEvent| {
        if !focused.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusApp {
                app_id: app_id.get_value(),
            });
        }
    };

    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        if !PressRegion::classify(true, pressed_on_control(&ev)).allows_drag() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginWindowMove {
            app_id: app_id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
            bounds: runtime.host.get_value().desktop_viewport_rect(),
        });
        track_window_gesture(runtime, listeners, WindowGestureKind::Move);
    };

    let close = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::CloseApp {
            app_id: app_id.get_value(),
        });
    };

    let style = move || {
        window
            .get()
            .map(|win| {
                format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index
                )
            })
            .unwrap_or_default()
    };

    move || {
        let Some(open) = app.get() else {
            return ().into_view();
        };
        let file_content = open.file.as_ref().and_then(|file| file.content.clone());

        view! {
            <section
                class="desktop-window"
                class:focused=move || focused.get()
                style=style
                on:pointerdown=focus
                role="dialog"
                aria-label=open.name.clone()
            >
                <header class="titlebar" data-window-header="" on:pointerdown=begin_move>
                    <div class="titlebar-title">
                        <span class="titlebar-app-icon" aria-hidden="true">
                            {app_glyph(&open.icon)}
                        </span>
                        <span>{open.name.clone()}</span>
                    </div>
                    <div class="titlebar-controls">
                        <button
                            aria-label="Close window"
                            on:mousedown=move |ev| stop_mouse_event(&ev)
                            on:click=close
                        >
                            "\u{2715}"
                        </button>
                    </div>
                </header>
                <div class="window-body">
                    <WindowBody kind=open.kind file_content=file_content />
                </div>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| {
                        view! { <WindowResizeHandle app_id=app_id.get_value() edge=edge /> }
                    })
                    .collect_view()}
            </section>
        }
        .into_view()
    }
}

#[component]
fn WindowResizeHandle(app_id: String, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let listeners = listeners::use_gesture_listener_slot();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));
    let app_id = store_value(app_id);

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginWindowResize {
            app_id: app_id.get_value(),
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
        track_window_gesture(runtime, listeners, WindowGestureKind::Resize(edge));
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}

#[component]
fn WindowBody(kind: AppKind, file_content: Option<String>) -> impl IntoView {
    match kind {
        AppKind::Settings => view! { <SettingsPanel /> }.into_view(),
        AppKind::TaskManager => view! { <TaskManagerPanel /> }.into_view(),
        AppKind::Notepad => view! {
            <textarea class="notepad-text" readonly=true>
                {file_content.unwrap_or_default()}
            </textarea>
        }
        .into_view(),
        other => view! {
            <div class="window-placeholder">
                <p>{placeholder_summary(other)}</p>
            </div>
        }
        .into_view(),
    }
}

#[component]
fn SettingsPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let font_size = Signal::derive(move || state.with(|desktop| desktop.settings.font_size));
    let wallpaper =
        Signal::derive(move || state.with(|desktop| desktop.settings.wallpaper_url.clone()));

    let step_font = move |delta: i32| {
        let next = font_size.get_untracked() as i32 + delta;
        runtime.dispatch_action(DesktopAction::SetFontSize { size: f64::from(next) });
    };

    view! {
        <div class="settings-panel">
            <section>
                <h3>"Font size"</h3>
                <div class="settings-font-row">
                    <button
                        aria-label="Decrease font size"
                        disabled=move || font_size.get() <= MIN_FONT_SIZE
                        on:click=move |_| step_font(-2)
                    >
                        "A-"
                    </button>
                    <span class="settings-font-value">{move || format!("{}px", font_size.get())}</span>
                    <button
                        aria-label="Increase font size"
                        disabled=move || font_size.get() >= MAX_FONT_SIZE
                        on:click=move |_| step_font(2)
                    >
                        "A+"
                    </button>
                </div>
            </section>
            <section>
                <h3>"Wallpaper"</h3>
                <div class="settings-wallpapers">
                    {PRESET_WALLPAPERS
                        .into_iter()
                        .map(|url| {
                            view! {
                                <button
                                    class="settings-wallpaper"
                                    class:active=move || wallpaper.get() == url
                                    style=format!("background-image:url('{url}');")
                                    aria-label="Use wallpaper"
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::SetWallpaper {
                                            url: url.to_string(),
                                        })
                                    }
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <button class="settings-reset" on:click=move |_| runtime.dispatch_action(DesktopAction::ResetSettings)>
                "Reset to defaults"
            </button>
        </div>
    }
}

#[component]
fn TaskManagerPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let processes = create_rw_signal(Vec::<ProcessInfo>::new());
    let stream_error = create_rw_signal(None::<String>);

    match runtime.host.get_value().api().subscribe_processes() {
        Ok(mut subscription) => {
            let (task, handle) = abortable(async move {
                while let Some(rows) = subscription.next().await {
                    processes.set(rows);
                }
            });
            spawn_local(async move {
                let _ = task.await;
            });
            on_cleanup(move || handle.abort());
        }
        Err(err) => {
            logging::warn!("process stream unavailable: {err}");
            stream_error.set(Some(err));
        }
    }

    view! {
        <div class="task-manager">
            <h3>"Windows"</h3>
            <ul class="task-manager-windows">
                <For
                    each=move || state.with(|desktop| desktop.open_apps.clone())
                    key=|app| app.id.clone()
                    let:app
                >
                    <li>
                        <span>{app.name.clone()}</span>
                        <button on:click=move |_| {
                            runtime.dispatch_action(DesktopAction::CloseApp { app_id: app.id.clone() })
                        }>
                            "End task"
                        </button>
                    </li>
                </For>
            </ul>
            <h3>"Processes"</h3>
            {move || stream_error.get().map(|err| view! { <p class="task-manager-error">{err}</p> })}
            <table class="task-manager-processes">
                <thead>
                    <tr>
                        <th>"PID"</th>
                        <th>"Name"</th>
                        <th>"Memory"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || processes.get()
                        key=|process| process.pid.clone()
                        let:process
                    >
                        <tr>
                            <td>{process.pid}</td>
                            <td>{process.name}</td>
                            <td>{format_memory(process.memory_bytes)}</td>
                            <td>{process.status}</td>
                        </tr>
                    </For>
                </tbody>
            </table>
        </div>
    }
}

fn format_memory(bytes: u64) -> String {
    const MIB: f64 = 1024.0 * 1024.0;
    format!("{:.1} MB", bytes as f64 / MIB)
}
