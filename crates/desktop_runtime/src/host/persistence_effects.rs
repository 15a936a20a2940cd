use leptos::{logging, SignalWithUntracked};

use crate::{
    host::DesktopHostContext, icon_layout::save_icon_positions,
    runtime_context::DesktopRuntimeContext, settings::save_settings,
};

pub(super) fn persist_settings(host: &DesktopHostContext, runtime: DesktopRuntimeContext) {
    let settings = runtime.state.with_untracked(|state| state.settings.clone());
    if let Err(err) = save_settings(host.kv().as_ref(), &settings) {
        logging::warn!("persist settings failed: {err}");
    }
}

pub(super) fn persist_icon_positions(host: &DesktopHostContext, runtime: DesktopRuntimeContext) {
    let positions = runtime
        .state
        .with_untracked(|state| state.icon_positions.clone());
    if let Err(err) = save_icon_positions(host.kv().as_ref(), &positions) {
        logging::warn!("persist icon positions failed: {err}");
    }
}
