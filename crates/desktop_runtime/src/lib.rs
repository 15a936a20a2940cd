pub mod apps;
pub mod components;
pub mod demo;
pub mod device;
mod effect_executor;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod icon_layout;
pub mod model;
pub mod recent;
pub mod reducer;
mod runtime_context;
pub mod settings;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use device::{classify_device, current_device_class, DeviceClass};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use settings::SettingsState;
