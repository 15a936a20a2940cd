use super::*;
use crate::{
    geometry::{selection_rect, ICON_HEIGHT, ICON_WIDTH},
    gesture::PointerKind,
    model::IconPosition,
};

/// Pointer position relative to the icon container's top-left corner.
fn container_pointer(
    container: NodeRef<html::Div>,
    ev: &web_sys::PointerEvent,
) -> PointerPosition {
    let client = pointer_from_pointer_event(ev);
    match container.get_untracked() {
        Some(element) => {
            let rect = element.get_bounding_client_rect();
            PointerPosition::new(client.x - rect.left() as i32, client.y - rect.top() as i32)
        }
        None => client,
    }
}

#[component]
pub(super) fn DesktopIconLayer() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let interaction = runtime.interaction;
    let container = create_node_ref::<html::Div>();
    let listeners = listeners::use_gesture_listener_slot();

    let begin_gesture = move |ev: web_sys::PointerEvent, icon_id: Option<String>| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.stop_propagation();
        if icon_id.is_none() {
            ev.prevent_default();
        }

        runtime.dispatch_action(DesktopAction::IconPointerDown {
            icon_id,
            pointer: container_pointer(container, &ev),
            kind: PointerKind::from_dom(&ev.pointer_type()),
            toggle: ev.ctrl_key() || ev.meta_key(),
        });

        if !interaction.with_untracked(|ui| ui.icons.is_active()) {
            return;
        }
        listeners.set_value(Some(GestureListeners::install(
            move |ev| {
                runtime.dispatch_action(DesktopAction::IconPointerMove {
                    pointer: container_pointer(container, &ev),
                });
            },
            move |ev| {
                if interaction.with_untracked(|ui| ui.icons.is_background_press()) {
                    runtime.dispatch_action(DesktopAction::DesktopClick);
                } else {
                    runtime.dispatch_action(DesktopAction::IconPointerUp {
                        timestamp_ms: ev.time_stamp(),
                    });
                }
                listeners.set_value(None);
            },
            move |_| {
                runtime.dispatch_action(DesktopAction::CancelIconGesture);
                listeners.set_value(None);
            },
        )));
    };

    let marquee_style = move || {
        interaction.with(|ui| {
            ui.icons.selection_box().map(|selection| {
                let rect = selection_rect(&selection);
                format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;",
                    rect.left, rect.top, rect.width, rect.height
                )
            })
        })
    };

    view! {
        <div
            class="desktop-icons"
            node_ref=container
            on:pointerdown=move |ev| begin_gesture(ev, None)
        >
            <For
                each=move || state.with(|desktop| desktop.icons.clone())
                key=|node| node.id.clone()
                let:node
            >
                {
                    let icon_id = node.id.clone();
                    let position = {
                        let icon_id = icon_id.clone();
                        move || {
                            state.with(|desktop| {
                                desktop
                                    .icon_positions
                                    .get(&icon_id)
                                    .copied()
                                    .unwrap_or_default()
                            })
                        }
                    };
                    let selected = {
                        let icon_id = icon_id.clone();
                        move || state.with(|desktop| desktop.selection.contains(&icon_id))
                    };
                    let dragging = {
                        let icon_id = icon_id.clone();
                        move || interaction.with(|ui| ui.icons.is_dragging(&icon_id))
                    };
                    let press_id = icon_id.clone();
                    let activate_node = node.clone();
                    let glyph = node_glyph(node.node_type, node.content.as_deref());

                    view! {
                        <div
                            class="desktop-icon"
                            class:selected=selected
                            class:dragging=dragging
                            data-icon-id=icon_id
                            role="button"
                            tabindex="0"
                            aria-label=node.name.clone()
                            style=move || {
                                let IconPosition { x, y } = position();
                                format!(
                                    "left:{x}px;top:{y}px;width:{ICON_WIDTH}px;height:{ICON_HEIGHT}px;"
                                )
                            }
                            on:pointerdown=move |ev| begin_gesture(ev, Some(press_id.clone()))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    runtime.dispatch_action(DesktopAction::ActivateIcon {
                                        node: activate_node.clone(),
                                    });
                                }
                            }
                        >
                            <span class="desktop-icon-glyph" aria-hidden="true">{glyph}</span>
                            <span class="desktop-icon-label">{node.name.clone()}</span>
                        </div>
                    }
                }
            </For>

            {move || {
                marquee_style()
                    .map(|style| view! { <div class="selection-box" style=style></div> })
            }}
        </div>
    }
}
