use std::collections::{BTreeMap, BTreeSet};

use platform_host::{BootConfig, FileNode};
use serde::{Deserialize, Serialize};

use crate::{gesture::IconGestureController, settings::SettingsState};

/// Height reserved for the taskbar at the bottom of the desktop.
pub const TASKBAR_HEIGHT_PX: i32 = 48;
/// z-index of the focused window.
pub const FOCUSED_Z_INDEX: u32 = 20;
/// z-index of every other window.
pub const UNFOCUSED_Z_INDEX: u32 = 10;
/// CSS custom property carrying the base font size on the document root.
pub const FONT_SIZE_CSS_VAR: &str = "--webos-font-size";
/// Inline notice shown when the backend cannot be reached.
pub const DEMO_MODE_NOTICE: &str = "Failed to connect to backend. Using demo mode.";

/// Top-left pixel offset of a desktop icon within the icon container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IconPosition {
    pub x: i32,
    pub y: i32,
}

impl IconPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Icon id to position map. Ordered so persisted JSON is stable.
pub type IconPositions = BTreeMap<String, IconPosition>;

/// Currently selected icon ids.
pub type SelectionSet = BTreeSet<String>;

/// Marquee corners in container-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionBox {
    pub start_x: i32,
    pub start_y: i32,
    pub current_x: i32,
    pub current_y: i32,
}

/// Normalized rectangle derived from a [`SelectionBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - origin`.
    pub fn delta_from(self, origin: Self) -> (i32, i32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

/// Window handle being dragged. Edges shift the opposite side's position for `n`/`w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Short direction token (`n`, `se`, ...).
    pub const fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    pub const fn moves_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub const fn moves_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub const fn moves_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub const fn moves_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }
}

/// Launchable application kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AppKind {
    Terminal,
    TaskManager,
    Settings,
    FileExplorer,
    Chrome,
    Notepad,
    CvViewer,
}

impl AppKind {
    pub const ALL: [Self; 7] = [
        Self::Terminal,
        Self::TaskManager,
        Self::Settings,
        Self::FileExplorer,
        Self::Chrome,
        Self::Notepad,
        Self::CvViewer,
    ];

    /// Stable id used by shortcuts (`app:<id>`) and single-instance app ids.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::TaskManager => "taskmanager",
            Self::Settings => "settings",
            Self::FileExplorer => "fileexplorer",
            Self::Chrome => "chrome",
            Self::Notepad => "notepad",
            Self::CvViewer => "cvviewer",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

/// A running application instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenApp {
    /// Instance id: the app id, or `notepad-<file id>` for file-bound notepads.
    pub id: String,
    pub kind: AppKind,
    pub name: String,
    pub icon: String,
    pub file: Option<FileNode>,
}

/// Per-instance window geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    pub rect: WindowRect,
    pub z_index: u32,
    pub min_width: i32,
    pub min_height: i32,
}

/// Recently launched app shown by the start menu search panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentApp {
    pub id: String,
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub loading: bool,
    /// Inline notice shown over the desktop, set when demo content replaced backend data.
    pub load_error: Option<String>,
    pub boot_config: Option<BootConfig>,
    pub icons: Vec<FileNode>,
    pub icon_positions: IconPositions,
    pub selection: SelectionSet,
    pub open_apps: Vec<OpenApp>,
    pub windows: BTreeMap<String, WindowState>,
    pub focused_app: Option<String>,
    pub start_menu_open: bool,
    pub settings: SettingsState,
    pub recent_apps: Vec<RecentApp>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            loading: true,
            load_error: None,
            boot_config: None,
            icons: Vec::new(),
            icon_positions: IconPositions::new(),
            selection: SelectionSet::new(),
            open_apps: Vec::new(),
            windows: BTreeMap::new(),
            focused_app: None,
            start_menu_open: false,
            settings: SettingsState::default(),
            recent_apps: Vec::new(),
        }
    }
}

impl DesktopState {
    pub fn is_app_open(&self, id: &str) -> bool {
        self.open_apps.iter().any(|app| app.id == id)
    }

    pub fn open_app(&self, id: &str) -> Option<&OpenApp> {
        self.open_apps.iter().find(|app| app.id == id)
    }

    pub fn window(&self, id: &str) -> Option<&WindowState> {
        self.windows.get(id)
    }

    /// Username from the boot config, `Visitor` before boot completes.
    pub fn username(&self) -> &str {
        self.boot_config
            .as_ref()
            .map(|config| config.username.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("Visitor")
    }
}

/// Transient pointer state. Never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    pub icons: IconGestureController,
    pub window: Option<ActiveWindowGesture>,
}

/// Window move or resize in progress, bound to an app instance id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveWindowGesture {
    pub app_id: String,
    pub kind: WindowGestureKind,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
    /// Desktop area the window is clamped into, captured when the gesture starts.
    pub bounds: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowGestureKind {
    Move,
    Resize(ResizeEdge),
}
