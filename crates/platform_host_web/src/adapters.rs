use std::rc::Rc;

use platform_host::{ApiConfig, HostServices};

use crate::{HttpWebOsApi, WebExternalUrlService, WebKeyValueStore};

/// Builds the browser host bundle for the given backend location.
pub fn build_host_services_with(api_config: ApiConfig) -> HostServices {
    HostServices {
        kv: Rc::new(WebKeyValueStore),
        api: Rc::new(HttpWebOsApi::new(api_config.clone())),
        external_urls: Rc::new(WebExternalUrlService),
        api_config,
    }
}

/// Builds the browser host bundle using the compile-time `WEBOS_API_BASE` backend location.
pub fn build_host_services() -> HostServices {
    build_host_services_with(ApiConfig::from_build_env())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundle_carries_requested_api_base() {
        let services = build_host_services_with(ApiConfig::new("https://backend.test"));
        assert_eq!(services.api_config.base_url(), "https://backend.test");
    }
}
