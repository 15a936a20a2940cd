//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use platform_host::{is_external_url, BootConfig, FileNode, FileNodeType};
use thiserror::Error;

use crate::{
    apps::{app_descriptor, initial_window_rect},
    demo::{demo_boot_config, demo_icons},
    gesture::{GestureOutcome, PointerKind},
    icon_layout::reconcile_icon_positions,
    model::{
        ActiveWindowGesture, AppKind, DesktopState, IconPositions, InteractionState, OpenApp,
        PointerPosition, RecentApp, ResizeEdge, WindowGestureKind, WindowRect, WindowState,
        DEMO_MODE_NOTICE,
    },
    recent::record_recent_app,
    settings::{is_valid_font_size, is_valid_wallpaper_url, SettingsState},
    window_manager::{
        apply_focus_tiers, focus_window, move_rect, resize_rect, MIN_WINDOW_HEIGHT,
        MIN_WINDOW_WIDTH,
    },
};

/// Shortcut content prefix naming an app kind (`app:terminal`).
pub const APP_SHORTCUT_PREFIX: &str = "app:";

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Desktop content is being (re)fetched.
    LoadDesktop,
    /// Backend returned the boot config and desktop icons.
    DesktopLoaded {
        boot_config: BootConfig,
        icons: Vec<FileNode>,
        /// Positions read from storage, reconciled against `icons`.
        stored_positions: IconPositions,
        container_height: i32,
    },
    /// Backend unreachable; demo content replaces it.
    DesktopLoadFailed {
        stored_positions: IconPositions,
        container_height: i32,
    },
    /// Open (or focus) an app, optionally bound to a file.
    OpenApp {
        kind: AppKind,
        file: Option<FileNode>,
    },
    /// Close an app instance.
    CloseApp { app_id: String },
    /// Raise an app instance to the focused tier.
    FocusApp { app_id: String },
    /// Move a taskbar entry from one slot to another.
    ReorderApps { from: usize, to: usize },
    /// Run a desktop icon's primary action.
    ActivateIcon { node: FileNode },
    ToggleStartMenu,
    CloseStartMenu,
    /// Click on the bare desktop: ends the pending background press, clears the selection and
    /// closes the start menu.
    DesktopClick,
    /// Pointer pressed in the icon layer. `icon_id` is `None` on the background.
    IconPointerDown {
        icon_id: Option<String>,
        pointer: PointerPosition,
        kind: PointerKind,
        /// Ctrl/Cmd held: toggle membership instead of replacing the selection.
        toggle: bool,
    },
    IconPointerMove { pointer: PointerPosition },
    IconPointerUp { timestamp_ms: f64 },
    /// Abort the icon gesture, restoring pre-gesture positions.
    CancelIconGesture,
    /// Abort any icon gesture and empty the selection.
    ClearSelection,
    BeginWindowMove {
        app_id: String,
        pointer: PointerPosition,
        /// Desktop area the window is clamped into.
        bounds: WindowRect,
    },
    UpdateWindowMove { pointer: PointerPosition },
    EndWindowMove,
    BeginWindowResize {
        app_id: String,
        edge: ResizeEdge,
        pointer: PointerPosition,
    },
    UpdateWindowResize { pointer: PointerPosition },
    EndWindowResize,
    /// Requested font size; refused unless valid.
    SetFontSize { size: f64 },
    /// Requested wallpaper URL; refused unless valid.
    SetWallpaper { url: String },
    ResetSettings,
    /// Replace settings with the persisted copy at boot.
    HydrateSettings { settings: SettingsState },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host layer to execute.
pub enum RuntimeEffect {
    /// Write the current settings to storage.
    PersistSettings,
    /// Write the current icon positions to storage.
    PersistIconPositions,
    /// Open a URL outside the desktop.
    OpenExternalUrl(String),
    /// Apply the base font size (px) to the document.
    ApplyFontSize(u32),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference missing app instances.
pub enum ReducerError {
    #[error("app instance `{0}` not found")]
    AppNotFound(String),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::AppNotFound`] when an action references an app instance that is not
/// open.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::LoadDesktop => {
            state.loading = true;
            state.load_error = None;
        }
        DesktopAction::DesktopLoaded {
            boot_config,
            icons,
            stored_positions,
            container_height,
        } => {
            apply_loaded_icons(state, icons, &stored_positions, container_height, &mut effects);
            state.boot_config = Some(boot_config);
            state.load_error = None;
        }
        DesktopAction::DesktopLoadFailed {
            stored_positions,
            container_height,
        } => {
            apply_loaded_icons(
                state,
                demo_icons(),
                &stored_positions,
                container_height,
                &mut effects,
            );
            state.boot_config = Some(demo_boot_config());
            state.load_error = Some(DEMO_MODE_NOTICE.to_string());
        }
        DesktopAction::OpenApp { kind, file } => open_app(state, kind, file),
        DesktopAction::CloseApp { app_id } => {
            let Some(index) = state.open_apps.iter().position(|app| app.id == app_id) else {
                return Err(ReducerError::AppNotFound(app_id));
            };
            state.open_apps.remove(index);
            state.windows.remove(&app_id);
            if interaction
                .window
                .as_ref()
                .is_some_and(|gesture| gesture.app_id == app_id)
            {
                interaction.window = None;
            }
            if state.focused_app.as_deref() == Some(app_id.as_str()) {
                state.focused_app = None;
            }
            apply_focus_tiers(state);
        }
        DesktopAction::FocusApp { app_id } => {
            if !focus_window(state, &app_id) {
                return Err(ReducerError::AppNotFound(app_id));
            }
        }
        DesktopAction::ReorderApps { from, to } => {
            let len = state.open_apps.len();
            if from >= len || to >= len {
                return Err(ReducerError::AppNotFound(format!("#{}", from.max(to))));
            }
            let app = state.open_apps.remove(from);
            state.open_apps.insert(to, app);
        }
        DesktopAction::ActivateIcon { node } => activate_icon(state, &node, &mut effects),
        DesktopAction::ToggleStartMenu => state.start_menu_open = !state.start_menu_open,
        DesktopAction::CloseStartMenu => state.start_menu_open = false,
        DesktopAction::DesktopClick => {
            interaction
                .icons
                .cancel(&mut state.icon_positions, &mut state.selection);
            state.selection.clear();
            state.start_menu_open = false;
        }
        DesktopAction::IconPointerDown {
            icon_id,
            pointer,
            kind,
            toggle,
        } => {
            state.start_menu_open = false;
            interaction.icons.press(
                icon_id.as_deref(),
                pointer,
                kind,
                toggle,
                &mut state.selection,
            );
        }
        DesktopAction::IconPointerMove { pointer } => {
            interaction
                .icons
                .pointer_move(pointer, &mut state.icon_positions, &mut state.selection);
        }
        DesktopAction::IconPointerUp { timestamp_ms } => {
            let outcome = interaction.icons.release(
                timestamp_ms,
                &mut state.icon_positions,
                &mut state.selection,
            );
            match outcome {
                GestureOutcome::None | GestureOutcome::BackgroundClick => {}
                GestureOutcome::PositionsChanged => effects.push(RuntimeEffect::PersistIconPositions),
                GestureOutcome::Activate(icon_id) => {
                    if let Some(node) = state.icons.iter().find(|node| node.id == icon_id).cloned() {
                        activate_icon(state, &node, &mut effects);
                    }
                }
            }
        }
        DesktopAction::CancelIconGesture => {
            interaction
                .icons
                .cancel(&mut state.icon_positions, &mut state.selection);
        }
        DesktopAction::ClearSelection => {
            interaction
                .icons
                .cancel(&mut state.icon_positions, &mut state.selection);
            state.selection.clear();
        }
        DesktopAction::BeginWindowMove {
            app_id,
            pointer,
            bounds,
        } => begin_window_gesture(
            state,
            interaction,
            app_id,
            WindowGestureKind::Move,
            pointer,
            bounds,
        )?,
        DesktopAction::UpdateWindowMove { pointer } => {
            update_window_gesture(state, interaction, pointer, false)
        }
        DesktopAction::BeginWindowResize {
            app_id,
            edge,
            pointer,
        } => begin_window_gesture(
            state,
            interaction,
            app_id,
            WindowGestureKind::Resize(edge),
            pointer,
            WindowRect::default(),
        )?,
        DesktopAction::UpdateWindowResize { pointer } => {
            update_window_gesture(state, interaction, pointer, true)
        }
        DesktopAction::EndWindowMove | DesktopAction::EndWindowResize => {
            interaction.window = None;
        }
        DesktopAction::SetFontSize { size } => {
            if is_valid_font_size(size) && state.settings.font_size != size as u32 {
                state.settings.font_size = size as u32;
                effects.push(RuntimeEffect::PersistSettings);
                effects.push(RuntimeEffect::ApplyFontSize(state.settings.font_size));
            }
        }
        DesktopAction::SetWallpaper { url } => {
            let url = url.trim();
            if is_valid_wallpaper_url(url) && state.settings.wallpaper_url != url {
                state.settings.wallpaper_url = url.to_string();
                effects.push(RuntimeEffect::PersistSettings);
            }
        }
        DesktopAction::ResetSettings => {
            state.settings = SettingsState::default();
            effects.push(RuntimeEffect::PersistSettings);
            effects.push(RuntimeEffect::ApplyFontSize(state.settings.font_size));
        }
        DesktopAction::HydrateSettings { settings } => {
            state.settings = settings;
            effects.push(RuntimeEffect::ApplyFontSize(state.settings.font_size));
        }
    }

    Ok(effects)
}

/// Parses shortcut content of the form `app:<kind>`.
pub fn parse_app_shortcut(content: &str) -> Option<AppKind> {
    content
        .strip_prefix(APP_SHORTCUT_PREFIX)
        .and_then(AppKind::from_id)
}

fn apply_loaded_icons(
    state: &mut DesktopState,
    icons: Vec<FileNode>,
    stored_positions: &IconPositions,
    container_height: i32,
    effects: &mut Vec<RuntimeEffect>,
) {
    let positions = reconcile_icon_positions(stored_positions, &icons, container_height);
    if &positions != stored_positions {
        effects.push(RuntimeEffect::PersistIconPositions);
    }
    state
        .selection
        .retain(|id| icons.iter().any(|node| &node.id == id));
    state.icons = icons;
    state.icon_positions = positions;
    state.loading = false;
}

fn open_app(state: &mut DesktopState, kind: AppKind, file: Option<FileNode>) {
    let descriptor = app_descriptor(kind);
    record_recent_app(
        &mut state.recent_apps,
        RecentApp {
            id: kind.id().to_string(),
            name: descriptor.name.to_string(),
            icon: descriptor.icon.to_string(),
        },
    );
    state.start_menu_open = false;

    let (instance_id, name, file) = match (kind, file) {
        (AppKind::Notepad, Some(file)) => (
            format!("{}-{}", kind.id(), file.id),
            format!("{} - {}", file.name, descriptor.name),
            Some(file),
        ),
        _ => (kind.id().to_string(), descriptor.name.to_string(), None),
    };

    if state.is_app_open(&instance_id) {
        focus_window(state, &instance_id);
        return;
    }

    let open_notepads = state
        .open_apps
        .iter()
        .filter(|app| app.kind == AppKind::Notepad)
        .count();
    state.windows.insert(
        instance_id.clone(),
        WindowState {
            rect: initial_window_rect(kind, open_notepads),
            z_index: 0,
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
        },
    );
    state.open_apps.push(OpenApp {
        id: instance_id.clone(),
        kind,
        name,
        icon: descriptor.icon.to_string(),
        file,
    });
    focus_window(state, &instance_id);
}

fn activate_icon(state: &mut DesktopState, node: &FileNode, effects: &mut Vec<RuntimeEffect>) {
    match node.node_type {
        FileNodeType::Shortcut => {
            let Some(content) = node.content.as_deref() else {
                return;
            };
            if is_external_url(content) {
                effects.push(RuntimeEffect::OpenExternalUrl(content.to_string()));
            } else if let Some(kind) = parse_app_shortcut(content) {
                open_app(state, kind, None);
            }
        }
        FileNodeType::Directory => open_app(state, AppKind::FileExplorer, None),
        FileNodeType::File => open_app(state, AppKind::Notepad, Some(node.clone())),
    }
}

fn begin_window_gesture(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    app_id: String,
    kind: WindowGestureKind,
    pointer: PointerPosition,
    bounds: WindowRect,
) -> Result<(), ReducerError> {
    let Some(window) = state.windows.get(&app_id) else {
        return Err(ReducerError::AppNotFound(app_id));
    };
    let rect_start = window.rect;
    focus_window(state, &app_id);
    interaction.window = Some(ActiveWindowGesture {
        app_id,
        kind,
        pointer_start: pointer,
        rect_start,
        bounds,
    });
    Ok(())
}

fn update_window_gesture(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    pointer: PointerPosition,
    resizing: bool,
) {
    let Some(gesture) = interaction.window.as_ref() else {
        return;
    };
    if matches!(gesture.kind, WindowGestureKind::Resize(_)) != resizing {
        return;
    }
    let Some(window) = state.windows.get_mut(&gesture.app_id) else {
        interaction.window = None;
        return;
    };

    let (dx, dy) = pointer.delta_from(gesture.pointer_start);
    window.rect = match gesture.kind {
        WindowGestureKind::Move => move_rect(gesture.rect_start, dx, dy, gesture.bounds),
        WindowGestureKind::Resize(edge) => resize_rect(
            gesture.rect_start,
            edge,
            dx,
            dy,
            window.min_width,
            window.min_height,
        ),
    };
}

#[cfg(test)]
mod tests {
    use platform_host::DESKTOP_NODE_ID;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{IconPosition, FOCUSED_Z_INDEX, UNFOCUSED_Z_INDEX};

    fn reduce(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, kind: AppKind) {
        reduce(
            state,
            interaction,
            DesktopAction::OpenApp { kind, file: None },
        );
    }

    fn text_file(id: &str, name: &str) -> FileNode {
        FileNode::new(id, Some(DESKTOP_NODE_ID), name, FileNodeType::File).with_content("hello")
    }

    fn shortcut(id: &str, target: &str) -> FileNode {
        FileNode::new(id, Some(DESKTOP_NODE_ID), id, FileNodeType::Shortcut).with_content(target)
    }

    #[test]
    fn opening_focuses_and_records_recent() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppKind::Terminal);
        open(&mut state, &mut interaction, AppKind::Settings);

        assert_eq!(state.focused_app.as_deref(), Some("settings"));
        assert_eq!(state.windows["settings"].z_index, FOCUSED_Z_INDEX);
        assert_eq!(state.windows["terminal"].z_index, UNFOCUSED_Z_INDEX);
        assert_eq!(
            state.windows["terminal"].rect,
            WindowRect {
                x: 100,
                y: 60,
                w: 700,
                h: 450
            }
        );
        let recent: Vec<&str> = state.recent_apps.iter().map(|app| app.id.as_str()).collect();
        assert_eq!(recent, vec!["settings", "terminal"]);
    }

    #[test]
    fn reopening_single_instance_app_only_focuses() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppKind::Chrome);
        open(&mut state, &mut interaction, AppKind::Terminal);
        open(&mut state, &mut interaction, AppKind::Chrome);

        assert_eq!(state.open_apps.len(), 2);
        assert_eq!(state.focused_app.as_deref(), Some("chrome"));
    }

    #[test]
    fn file_bound_notepads_are_separate_instances_that_cascade() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        for (id, name) in [("a", "a.txt"), ("b", "b.txt"), ("a", "a.txt")] {
            reduce(
                &mut state,
                &mut interaction,
                DesktopAction::OpenApp {
                    kind: AppKind::Notepad,
                    file: Some(text_file(id, name)),
                },
            );
        }

        let ids: Vec<&str> = state.open_apps.iter().map(|app| app.id.as_str()).collect();
        assert_eq!(ids, vec!["notepad-a", "notepad-b"]);
        assert_eq!(state.open_apps[1].name, "b.txt - Notepad");
        assert_eq!(state.focused_app.as_deref(), Some("notepad-a"));
        assert_eq!(state.windows["notepad-b"].rect.x, 170);
        assert_eq!(state.windows["notepad-b"].rect.y, 100);
    }

    #[test]
    fn closing_missing_app_is_an_error() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseApp {
                app_id: "terminal".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, ReducerError::AppNotFound("terminal".to_string()));
        assert_eq!(err.to_string(), "app instance `terminal` not found");
    }

    #[test]
    fn closing_focused_app_clears_focus() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppKind::Terminal);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseApp {
                app_id: "terminal".to_string(),
            },
        );

        assert!(state.open_apps.is_empty());
        assert!(state.windows.is_empty());
        assert_eq!(state.focused_app, None);
    }

    #[test]
    fn reorder_moves_taskbar_entry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        for kind in [AppKind::Terminal, AppKind::Chrome, AppKind::Settings] {
            open(&mut state, &mut interaction, kind);
        }

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ReorderApps { from: 2, to: 0 },
        );
        let ids: Vec<&str> = state.open_apps.iter().map(|app| app.id.as_str()).collect();
        assert_eq!(ids, vec!["settings", "terminal", "chrome"]);

        assert!(reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ReorderApps { from: 0, to: 3 },
        )
        .is_err());
    }

    #[test]
    fn icon_activation_routes_by_node_type() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateIcon {
                node: shortcut("github", "https://github.com"),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl("https://github.com".to_string())]
        );

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateIcon {
                node: shortcut("cv-pdf", "/cv.pdf"),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::OpenExternalUrl("/cv.pdf".to_string())]);

        for node in [
            shortcut("term", "app:terminal"),
            shortcut("bogus", "app:solitaire"),
            FileNode::new("projects", Some(DESKTOP_NODE_ID), "Projects", FileNodeType::Directory),
            text_file("about", "About Me.txt"),
        ] {
            reduce(&mut state, &mut interaction, DesktopAction::ActivateIcon { node });
        }

        let ids: Vec<&str> = state.open_apps.iter().map(|app| app.id.as_str()).collect();
        assert_eq!(ids, vec!["terminal", "fileexplorer", "notepad-about"]);
        assert_eq!(state.open_apps[2].file.as_ref().map(|f| f.id.as_str()), Some("about"));
    }

    #[test]
    fn failed_load_switches_to_demo_mode() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::DesktopLoadFailed {
                stored_positions: IconPositions::new(),
                container_height: 500,
            },
        );

        assert!(!state.loading);
        assert_eq!(state.load_error.as_deref(), Some(DEMO_MODE_NOTICE));
        assert_eq!(state.icons.len(), 9);
        assert_eq!(state.icon_positions.len(), 9);
        assert_eq!(state.username(), "Visitor");
        assert_eq!(effects, vec![RuntimeEffect::PersistIconPositions]);
    }

    #[test]
    fn loaded_icons_reuse_stored_positions_without_persisting() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let stored: IconPositions = [("about".to_string(), IconPosition::new(180, 90))].into();

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::DesktopLoaded {
                boot_config: demo_boot_config(),
                icons: vec![text_file("about", "About Me.txt")],
                stored_positions: stored.clone(),
                container_height: 600,
            },
        );

        assert_eq!(state.icon_positions, stored);
        assert!(effects.is_empty());
        assert_eq!(state.load_error, None);
    }

    #[test]
    fn icon_drag_persists_and_double_click_activates() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::DesktopLoaded {
                boot_config: demo_boot_config(),
                icons: vec![shortcut("term", "app:terminal"), text_file("about", "a.txt")],
                stored_positions: IconPositions::new(),
                container_height: 600,
            },
        );

        let press = |id: &str| DesktopAction::IconPointerDown {
            icon_id: Some(id.to_string()),
            pointer: PointerPosition::new(10, 10),
            kind: PointerKind::Mouse,
            toggle: false,
        };

        reduce(&mut state, &mut interaction, press("about"));
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::IconPointerMove {
                pointer: PointerPosition::new(200, 10),
            },
        );
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::IconPointerUp { timestamp_ms: 10.0 },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistIconPositions]);
        assert_eq!(state.icon_positions["about"], IconPosition::new(180, 90));

        reduce(&mut state, &mut interaction, press("term"));
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::IconPointerUp { timestamp_ms: 500.0 },
        );
        assert!(state.open_apps.is_empty());
        reduce(&mut state, &mut interaction, press("term"));
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::IconPointerUp { timestamp_ms: 700.0 },
        );
        assert!(state.is_app_open("terminal"));
    }

    #[test]
    fn window_move_is_clamped_and_resize_floors() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppKind::Settings);
        let bounds = WindowRect {
            x: 0,
            y: 0,
            w: 1200,
            h: 800,
        };

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginWindowMove {
                app_id: "settings".to_string(),
                pointer: PointerPosition::new(200, 100),
                bounds,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateWindowMove {
                pointer: PointerPosition::new(-400, 900),
            },
        );
        assert_eq!(
            state.windows["settings"].rect,
            WindowRect {
                x: 0,
                y: 202,
                w: 500,
                h: 550
            }
        );
        reduce(&mut state, &mut interaction, DesktopAction::EndWindowMove);
        assert_eq!(interaction.window, None);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginWindowResize {
                app_id: "settings".to_string(),
                edge: ResizeEdge::West,
                pointer: PointerPosition::new(0, 300),
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateWindowResize {
                pointer: PointerPosition::new(1000, 300),
            },
        );
        assert_eq!(
            state.windows["settings"].rect,
            WindowRect {
                x: 200,
                y: 202,
                w: 300,
                h: 550
            }
        );
    }

    #[test]
    fn window_gesture_on_missing_app_is_an_error() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        assert!(reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginWindowMove {
                app_id: "chrome".to_string(),
                pointer: PointerPosition::default(),
                bounds: WindowRect::default(),
            },
        )
        .is_err());
        assert_eq!(interaction.window, None);
    }

    #[test]
    fn invalid_settings_are_refused_silently() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        for action in [
            DesktopAction::SetFontSize { size: 13.0 },
            DesktopAction::SetFontSize { size: 30.0 },
            DesktopAction::SetWallpaper {
                url: "ftp://x.test/w.jpg".to_string(),
            },
        ] {
            assert!(reduce(&mut state, &mut interaction, action).is_empty());
        }
        assert_eq!(state.settings, SettingsState::default());

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetFontSize { size: 18.0 },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::PersistSettings, RuntimeEffect::ApplyFontSize(18)]
        );

        let effects = reduce(&mut state, &mut interaction, DesktopAction::ResetSettings);
        assert_eq!(state.settings, SettingsState::default());
        assert_eq!(
            effects,
            vec![RuntimeEffect::PersistSettings, RuntimeEffect::ApplyFontSize(14)]
        );
    }

    #[test]
    fn desktop_click_clears_selection_and_start_menu() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        state.selection.insert("about".to_string());
        reduce(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        assert!(state.start_menu_open);

        reduce(&mut state, &mut interaction, DesktopAction::DesktopClick);

        assert!(state.selection.is_empty());
        assert!(!state.start_menu_open);
    }

    #[test]
    fn desktop_click_ends_background_press() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        state.selection.insert("about".to_string());
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::IconPointerDown {
                icon_id: None,
                pointer: PointerPosition::new(400, 400),
                kind: PointerKind::Mouse,
                toggle: false,
            },
        );
        assert!(interaction.icons.is_background_press());

        reduce(&mut state, &mut interaction, DesktopAction::DesktopClick);

        assert!(!interaction.icons.is_active());
        assert!(state.selection.is_empty());
    }
}
