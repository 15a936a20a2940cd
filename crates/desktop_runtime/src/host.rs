//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; effect execution, boot loading and viewport queries sit behind
//! this typed boundary so the injected [`HostServices`] bundle can be swapped for tests or
//! offline builds.

mod boot;
mod effects;
mod host_ui;
mod persistence_effects;

use std::rc::Rc;

use leptos::Callback;
use platform_host::{ExternalUrlService, HostServices, KeyValueStore, WebOsApi};

use crate::{
    model::WindowRect,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured key-value store.
    pub fn kv(&self) -> Rc<dyn KeyValueStore> {
        self.services.kv.clone()
    }

    /// Returns the configured backend client.
    pub fn api(&self) -> Rc<dyn WebOsApi> {
        self.services.api.clone()
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.services.external_urls.clone()
    }

    /// Hydrates settings and starts the desktop content load.
    ///
    /// Settings come from storage synchronously. Boot config and desktop icons are fetched
    /// together; if either request fails the reducer switches to demo content.
    pub fn install_boot(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), runtime, effect);
    }

    /// Handles requests to open a URL outside the desktop shell.
    pub fn open_external_url(&self, url: &str) {
        host_ui::open_external_url(self.clone(), url);
    }

    /// Returns the full browser viewport, taskbar strip included.
    pub fn desktop_viewport_rect(&self) -> WindowRect {
        host_ui::desktop_viewport_rect()
    }

    /// Height available to the icon grid.
    pub fn icon_container_height(&self) -> i32 {
        host_ui::icon_container_height()
    }
}

impl std::fmt::Debug for DesktopHostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopHostContext")
            .field("services", &self.services)
            .finish()
    }
}
