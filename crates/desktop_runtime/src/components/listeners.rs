use leptos::{leptos_dom::helpers::WindowListenerHandle, *};

/// Window-level pointer listeners bound to one gesture. Dropping the guard detaches them.
pub(super) struct GestureListeners {
    handles: Vec<WindowListenerHandle>,
}

impl GestureListeners {
    /// Routes window `pointermove`, `pointerup` and `pointercancel` to the given handlers.
    pub(super) fn install(
        on_move: impl Fn(web_sys::PointerEvent) + 'static,
        on_up: impl Fn(web_sys::PointerEvent) + 'static,
        on_cancel: impl Fn(web_sys::PointerEvent) + 'static,
    ) -> Self {
        Self {
            handles: vec![
                window_event_listener(ev::pointermove, on_move),
                window_event_listener(ev::pointerup, on_up),
                window_event_listener(ev::pointercancel, on_cancel),
            ],
        }
    }
}

impl Drop for GestureListeners {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.remove();
        }
    }
}

/// Slot holding the listeners of the gesture currently owned by a component.
///
/// Cleared when the gesture ends and when the owning component unmounts.
pub(super) fn use_gesture_listener_slot() -> StoredValue<Option<GestureListeners>> {
    let slot = store_value(None::<GestureListeners>);
    on_cleanup(move || slot.set_value(None));
    slot
}
