//! Runtime-effect dispatch for the desktop host boundary.

use crate::{
    host::{host_ui, persistence_effects, DesktopHostContext},
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn run_runtime_effect(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    effect: RuntimeEffect,
) {
    match effect {
        RuntimeEffect::PersistSettings => persistence_effects::persist_settings(&host, runtime),
        RuntimeEffect::PersistIconPositions => {
            persistence_effects::persist_icon_positions(&host, runtime)
        }
        RuntimeEffect::OpenExternalUrl(url) => host_ui::open_external_url(host, &url),
        RuntimeEffect::ApplyFontSize(px) => host_ui::apply_font_size(px),
    }
}
