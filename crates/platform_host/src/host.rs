//! Host service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{
    ApiConfig, ExternalUrlService, KeyValueStore, MemoryKeyValueStore, NoopExternalUrlService,
    NoopWebOsApi, WebOsApi,
};

/// Runtime-selected host service bundle.
///
/// Environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the runtime decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Durable key-value store for icon positions, settings, and session ids.
    pub kv: Rc<dyn KeyValueStore>,
    /// Desktop backend client.
    pub api: Rc<dyn WebOsApi>,
    /// External URL opening service.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Backend location the client was built for.
    pub api_config: ApiConfig,
}

impl HostServices {
    /// Offline bundle: in-memory storage, failing backend (demo content), no-op links.
    pub fn offline() -> Self {
        Self {
            kv: Rc::new(MemoryKeyValueStore::default()),
            api: Rc::new(NoopWebOsApi),
            external_urls: Rc::new(NoopExternalUrlService),
            api_config: ApiConfig::default(),
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("api_config", &self.api_config)
            .finish_non_exhaustive()
    }
}
