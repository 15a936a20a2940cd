/// Viewports narrower than this with touch input get the mobile layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

impl DeviceClass {
    /// Value for the `data-device` attribute on the document root.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

pub fn classify_device(viewport_width: f64, has_touch: bool) -> DeviceClass {
    if viewport_width < MOBILE_BREAKPOINT_PX && has_touch {
        DeviceClass::Mobile
    } else {
        DeviceClass::Desktop
    }
}

/// Classifies the current browser window. Off wasm this is always [`DeviceClass::Desktop`].
pub fn current_device_class() -> DeviceClass {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(MOBILE_BREAKPOINT_PX);
            let has_touch = window.navigator().max_touch_points() > 0;
            return classify_device(width, has_touch);
        }
    }

    DeviceClass::Desktop
}
