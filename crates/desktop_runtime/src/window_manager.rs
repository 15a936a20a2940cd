//! Window geometry and focus transitions used by the desktop reducer.

use crate::model::{
    DesktopState, ResizeEdge, WindowRect, FOCUSED_Z_INDEX, TASKBAR_HEIGHT_PX, UNFOCUSED_Z_INDEX,
};

/// Minimum managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 300;
/// Minimum managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 200;

/// Where inside a window a press landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressRegion {
    /// Title bar, outside any control.
    Header,
    /// A button, input or textarea anywhere in the window.
    Control,
    /// Window content.
    Body,
}

impl PressRegion {
    pub fn classify(in_header: bool, on_control: bool) -> Self {
        match (in_header, on_control) {
            (_, true) => Self::Control,
            (true, false) => Self::Header,
            (false, false) => Self::Body,
        }
    }

    /// Only bare header presses start a move.
    pub const fn allows_drag(self) -> bool {
        matches!(self, Self::Header)
    }
}

/// Keeps `rect` inside `bounds`, leaving the taskbar strip free.
///
/// When the window is larger than the bounds the top-left corner pins to the origin.
pub fn clamp_to_bounds(rect: WindowRect, bounds: WindowRect) -> WindowRect {
    let max_x = bounds.w - rect.w;
    let max_y = bounds.h - rect.h - TASKBAR_HEIGHT_PX;
    WindowRect {
        x: rect.x.min(max_x).max(0),
        y: rect.y.min(max_y).max(0),
        ..rect
    }
}

/// Window rect after dragging the header by `(dx, dy)` from `start`.
pub fn move_rect(start: WindowRect, dx: i32, dy: i32, bounds: WindowRect) -> WindowRect {
    clamp_to_bounds(start.offset(dx, dy), bounds)
}

/// Applies a resize drag of `(dx, dy)` on `edge`.
///
/// East and south edges grow from the fixed origin. West and north edges move the origin by at
/// most `start size - min size` so the opposite edge never moves.
pub fn resize_rect(
    start: WindowRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    min_width: i32,
    min_height: i32,
) -> WindowRect {
    let mut rect = start;
    if edge.moves_east() {
        rect.w = (start.w + dx).max(min_width);
    }
    if edge.moves_west() {
        let shift = dx.min(start.w - min_width);
        rect.x = start.x + shift;
        rect.w = start.w - shift;
    }
    if edge.moves_south() {
        rect.h = (start.h + dy).max(min_height);
    }
    if edge.moves_north() {
        let shift = dy.min(start.h - min_height);
        rect.y = start.y + shift;
        rect.h = start.h - shift;
    }
    rect
}

/// Gives the focused window the upper tier and every other window the lower one.
pub fn apply_focus_tiers(state: &mut DesktopState) {
    let focused = state.focused_app.clone();
    for (id, window) in state.windows.iter_mut() {
        window.z_index = if focused.as_deref() == Some(id.as_str()) {
            FOCUSED_Z_INDEX
        } else {
            UNFOCUSED_Z_INDEX
        };
    }
}

/// Focuses `app_id`. Returns `false` when no such window exists.
pub fn focus_window(state: &mut DesktopState, app_id: &str) -> bool {
    if !state.windows.contains_key(app_id) {
        return false;
    }
    state.focused_app = Some(app_id.to_string());
    apply_focus_tiers(state);
    true
}
