use super::*;

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let dragged_slot = create_rw_signal(None::<usize>);

    let running = move || {
        state.with(|desktop| {
            desktop
                .open_apps
                .iter()
                .enumerate()
                .map(|(index, app)| (index, app.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Taskbar"
        >
            <button
                class="taskbar-start"
                class:active=move || state.with(|desktop| desktop.start_menu_open)
                aria-label="Start"
                aria-haspopup="menu"
                on:mousedown=move |ev| ev.stop_propagation()
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                }
            >
                "\u{229E}"
            </button>

            <div class="taskbar-apps" role="list">
                <For
                    each=running
                    key=|(index, app)| (*index, app.id.clone())
                    children=move |(index, app)| {
                        let app_id = app.id.clone();
                        let focused = {
                            let app_id = app_id.clone();
                            move || {
                                state.with(|desktop| {
                                    desktop.focused_app.as_deref() == Some(app_id.as_str())
                                })
                            }
                        };

                        view! {
                            <button
                                class="taskbar-app"
                                class:focused=focused
                                role="listitem"
                                draggable="true"
                                title=app.name.clone()
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    runtime.dispatch_action(DesktopAction::CloseStartMenu);
                                    runtime.dispatch_action(DesktopAction::FocusApp {
                                        app_id: app_id.clone(),
                                    });
                                }
                                on:dragstart=move |_| dragged_slot.set(Some(index))
                                on:dragover=move |ev: web_sys::DragEvent| ev.prevent_default()
                                on:drop=move |ev: web_sys::DragEvent| {
                                    ev.prevent_default();
                                    if let Some(from) = dragged_slot.get_untracked() {
                                        if from != index {
                                            runtime.dispatch_action(DesktopAction::ReorderApps {
                                                from,
                                                to: index,
                                            });
                                        }
                                    }
                                    dragged_slot.set(None);
                                }
                                on:dragend=move |_| dragged_slot.set(None)
                            >
                                <span class="taskbar-app-icon" aria-hidden="true">
                                    {app_glyph(&app.icon)}
                                </span>
                                <span class="taskbar-app-label">{app.name.clone()}</span>
                            </button>
                        }
                    }
                />
            </div>
        </footer>
    }
}
