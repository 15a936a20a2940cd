//! User display settings: font size and wallpaper, persisted as one JSON object.

use platform_host::{save_json_with, BootConfig, KeyValueStore};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// Storage key for persisted settings.
pub const SETTINGS_KEY: &str = "webos-settings";
/// Base font size in pixels.
pub const DEFAULT_FONT_SIZE: u32 = 14;
/// Smallest selectable font size.
pub const MIN_FONT_SIZE: u32 = 12;
/// Largest selectable font size.
pub const MAX_FONT_SIZE: u32 = 24;
/// Wallpaper used when neither settings nor boot config provide one.
pub const DEFAULT_WALLPAPER: &str =
    "https://images.unsplash.com/photo-1579546929518-9e396f3cc809?w=1920&q=80";
/// Wallpapers offered by the settings app.
pub const PRESET_WALLPAPERS: [&str; 4] = [
    DEFAULT_WALLPAPER,
    "https://images.unsplash.com/photo-1557683316-973673baf926?w=1920&q=80",
    "https://images.unsplash.com/photo-1518837695005-2083093ee35b?w=1920&q=80",
    "https://images.unsplash.com/photo-1507400492013-162706c8c05e?w=1920&q=80",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsState {
    pub font_size: u32,
    pub wallpaper_url: String,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            wallpaper_url: DEFAULT_WALLPAPER.to_string(),
        }
    }
}

/// Even whole numbers from 12 through 24.
pub fn is_valid_font_size(value: f64) -> bool {
    value.fract() == 0.0
        && value >= f64::from(MIN_FONT_SIZE)
        && value <= f64::from(MAX_FONT_SIZE)
        && (value as u32) % 2 == 0
}

/// Accepts absolute `http`/`https` URLs that parse with a host.
pub fn is_valid_wallpaper_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| {
        matches!(parsed.scheme(), "http" | "https")
            && parsed.host_str().is_some_and(|host| !host.is_empty())
    })
}

/// Loads settings, substituting defaults field by field.
///
/// Missing storage, unreadable storage and unparseable JSON all yield [`SettingsState::default`].
pub fn load_settings<S: KeyValueStore + ?Sized>(store: &S) -> SettingsState {
    let Ok(Some(raw)) = store.get(SETTINGS_KEY) else {
        return SettingsState::default();
    };
    let Ok(Value::Object(object)) = serde_json::from_str::<Value>(&raw) else {
        return SettingsState::default();
    };

    let font_size = object
        .get("fontSize")
        .and_then(Value::as_f64)
        .filter(|size| is_valid_font_size(*size))
        .map(|size| size as u32)
        .unwrap_or(DEFAULT_FONT_SIZE);
    let wallpaper_url = object
        .get("wallpaperUrl")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_WALLPAPER.to_string());

    SettingsState {
        font_size,
        wallpaper_url,
    }
}

/// Writes `settings` under [`SETTINGS_KEY`].
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_settings<S: KeyValueStore + ?Sized>(
    store: &S,
    settings: &SettingsState,
) -> Result<(), String> {
    save_json_with(store, SETTINGS_KEY, settings)
}

/// Wallpaper to render: user setting, then boot config, then [`DEFAULT_WALLPAPER`].
pub fn resolve_wallpaper<'a>(
    settings: &'a SettingsState,
    boot_config: Option<&'a BootConfig>,
) -> &'a str {
    if !settings.wallpaper_url.is_empty() {
        return &settings.wallpaper_url;
    }
    boot_config
        .map(|config| config.wallpaper_url.as_str())
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_WALLPAPER)
}
