use super::*;
use crate::{apps::start_menu_apps, model::AppKind, recent::filter_recent_apps};

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let query = create_rw_signal(String::new());

    let open_kind = move |kind: AppKind| {
        query.set(String::new());
        runtime.dispatch_action(DesktopAction::OpenApp { kind, file: None });
    };

    let search_results = move || {
        let needle = query.get();
        state.with(|desktop| {
            filter_recent_apps(&desktop.recent_apps, &needle)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show when=move || state.with(|desktop| desktop.start_menu_open) fallback=|| ()>
            <div
                id="desktop-launcher-menu"
                class="start-menu"
                role="menu"
                aria-label="Application launcher"
                on:mousedown=move |ev| ev.stop_propagation()
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        ev.stop_propagation();
                        runtime.dispatch_action(DesktopAction::CloseStartMenu);
                    }
                }
            >
                <div class="start-menu-user">
                    <span class="start-menu-avatar" aria-hidden="true">"\u{1F464}"</span>
                    <span>{move || state.with(|desktop| desktop.username().to_string())}</span>
                </div>

                <input
                    class="start-menu-search"
                    type="search"
                    placeholder="Search recent apps"
                    aria-label="Search recent apps"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />

                <Show when=move || !query.with(|q| q.trim().is_empty()) fallback=|| ()>
                    <div class="start-menu-results" role="group" aria-label="Recent apps">
                        <For
                            each=search_results
                            key=|app| app.id.clone()
                            let:app
                        >
                            {
                                let kind = AppKind::from_id(&app.id);
                                view! {
                                    <button
                                        role="menuitem"
                                        disabled=kind.is_none()
                                        on:click=move |_| {
                                            if let Some(kind) = kind {
                                                open_kind(kind);
                                            }
                                        }
                                    >
                                        <span class="taskbar-app-icon" aria-hidden="true">
                                            {app_glyph(&app.icon)}
                                        </span>
                                        <span>{app.name.clone()}</span>
                                    </button>
                                }
                            }
                        </For>
                    </div>
                </Show>

                <div class="start-menu-apps" role="group" aria-label="Applications">
                    {start_menu_apps()
                        .into_iter()
                        .map(|app| {
                            view! {
                                <button
                                    id=format!("desktop-launcher-item-{}", app.kind.id())
                                    role="menuitem"
                                    on:click=move |_| open_kind(app.kind)
                                >
                                    <span class="taskbar-app-icon" aria-hidden="true">
                                        {app_glyph(app.icon)}
                                    </span>
                                    <span>{app.name}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}
