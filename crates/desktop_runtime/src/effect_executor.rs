//! Drains reducer-emitted runtime effects through the host context.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Runs queued effects in emission order whenever the queue changes.
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        // take the batch first; effects that dispatch enqueue into a fresh queue
        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            host.run_runtime_effect(runtime, effect);
        }
    });
}
