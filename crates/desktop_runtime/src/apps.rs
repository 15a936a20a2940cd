use crate::model::{AppKind, WindowRect};

/// Offset between successive notepad windows.
pub const NOTEPAD_CASCADE_PX: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub kind: AppKind,
    pub name: &'static str,
    /// Icon token rendered by the shell.
    pub icon: &'static str,
    pub default_width: i32,
    pub default_height: i32,
    pub spawn_x: i32,
    pub spawn_y: i32,
    pub show_in_start_menu: bool,
}

const APP_REGISTRY: [AppDescriptor; 7] = [
    AppDescriptor {
        kind: AppKind::Terminal,
        name: "Terminal",
        icon: "terminal",
        default_width: 700,
        default_height: 450,
        spawn_x: 100,
        spawn_y: 60,
        show_in_start_menu: true,
    },
    AppDescriptor {
        kind: AppKind::TaskManager,
        name: "Task Manager",
        icon: "activity",
        default_width: 600,
        default_height: 400,
        spawn_x: 50,
        spawn_y: 30,
        show_in_start_menu: true,
    },
    AppDescriptor {
        kind: AppKind::Settings,
        name: "Settings",
        icon: "settings",
        default_width: 500,
        default_height: 550,
        spawn_x: 150,
        spawn_y: 90,
        show_in_start_menu: true,
    },
    AppDescriptor {
        kind: AppKind::FileExplorer,
        name: "File Explorer",
        icon: "folder",
        default_width: 700,
        default_height: 500,
        spawn_x: 120,
        spawn_y: 50,
        show_in_start_menu: true,
    },
    AppDescriptor {
        kind: AppKind::Chrome,
        name: "Chrome",
        icon: "globe",
        default_width: 900,
        default_height: 600,
        spawn_x: 80,
        spawn_y: 40,
        show_in_start_menu: true,
    },
    AppDescriptor {
        kind: AppKind::Notepad,
        name: "Notepad",
        icon: "file-text",
        default_width: 600,
        default_height: 450,
        spawn_x: 140,
        spawn_y: 70,
        show_in_start_menu: false,
    },
    AppDescriptor {
        kind: AppKind::CvViewer,
        name: "CV Viewer",
        icon: "file-user",
        default_width: 650,
        default_height: 700,
        spawn_x: 100,
        spawn_y: 30,
        show_in_start_menu: false,
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn app_descriptor(kind: AppKind) -> &'static AppDescriptor {
    // registry order matches `AppKind::ALL`
    &APP_REGISTRY[AppKind::ALL
        .iter()
        .position(|candidate| *candidate == kind)
        .unwrap_or_default()]
}

pub fn start_menu_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|app| app.show_in_start_menu)
        .collect()
}

/// Initial rect for a new window. Notepads cascade by the number already open.
pub fn initial_window_rect(kind: AppKind, open_notepads: usize) -> WindowRect {
    let app = app_descriptor(kind);
    let cascade = if kind == AppKind::Notepad {
        open_notepads as i32 * NOTEPAD_CASCADE_PX
    } else {
        0
    };
    WindowRect {
        x: app.spawn_x + cascade,
        y: app.spawn_y + cascade,
        w: app.default_width,
        h: app.default_height,
    }
}

/// Placeholder body text for an app window.
pub fn placeholder_summary(kind: AppKind) -> &'static str {
    match kind {
        AppKind::Terminal => "Terminal is not available in this build.",
        AppKind::TaskManager => "Task Manager is not available in this build.",
        AppKind::Settings => "Settings is not available in this build.",
        AppKind::FileExplorer => "File Explorer is not available in this build.",
        AppKind::Chrome => "Browser is not available in this build.",
        AppKind::Notepad => "Notepad is not available in this build.",
        AppKind::CvViewer => "CV viewer is not available in this build.",
    }
}
