//! Pointer gesture state machine for the desktop icon layer.
//!
//! The controller owns only transient gesture data. Icon positions and the selection set live in
//! [`crate::model::DesktopState`] and are passed in by the reducer on every step.

use std::collections::BTreeSet;

use crate::{
    geometry::{
        find_nearest_empty_cell, is_icon_in_selection, selection_rect, snap_to_grid,
        DRAG_THRESHOLD_PX, GRID_SIZE, MARQUEE_DEADZONE_PX,
    },
    model::{IconPositions, PointerPosition, SelectionBox, SelectionSet},
};

/// Two mouse releases on the same icon within this window activate it.
pub const DOUBLE_CLICK_MS: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Maps a DOM `pointerType` string. Unknown types behave like a mouse.
    pub fn from_dom(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" => Self::Touch,
            "pen" => Self::Pen,
            _ => Self::Mouse,
        }
    }

    /// Touch and pen activate on a single tap; mice need a double click.
    pub const fn activates_on_tap(self) -> bool {
        matches!(self, Self::Touch | Self::Pen)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Pointer is down on an icon but has not crossed the drag threshold.
    Pressed {
        icon_id: String,
        origin: PointerPosition,
        kind: PointerKind,
    },
    /// Icons in `group` follow the pointer from their `starts`.
    Dragging {
        origin: PointerPosition,
        group: Vec<String>,
        starts: IconPositions,
    },
    /// Rubber-band selection from a background press.
    Marquee {
        origin: PointerPosition,
        current: PointerPosition,
        engaged: bool,
        selection_before: SelectionSet,
    },
}

/// What a release means for the rest of the desktop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Nothing beyond the local state change.
    None,
    /// Run the icon's primary action.
    Activate(String),
    /// A drag finished and positions changed.
    PositionsChanged,
    /// Press and release on the background without a marquee.
    BackgroundClick,
}

#[derive(Debug, Clone, PartialEq)]
struct LastClick {
    icon_id: String,
    at_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconGestureController {
    state: GestureState,
    last_click: Option<LastClick>,
}

impl IconGestureController {
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, GestureState::Idle)
    }

    /// Returns `true` while `icon_id` is part of an in-flight drag.
    pub fn is_dragging(&self, icon_id: &str) -> bool {
        match &self.state {
            GestureState::Dragging { group, .. } => group.iter().any(|id| id == icon_id),
            _ => false,
        }
    }

    /// Returns `true` while a background press has not yet engaged the marquee.
    pub fn is_background_press(&self) -> bool {
        matches!(self.state, GestureState::Marquee { engaged: false, .. })
    }

    /// Marquee to render, once it has passed the deadzone.
    pub fn selection_box(&self) -> Option<SelectionBox> {
        match &self.state {
            GestureState::Marquee {
                origin,
                current,
                engaged: true,
                ..
            } => Some(SelectionBox {
                start_x: origin.x,
                start_y: origin.y,
                current_x: current.x,
                current_y: current.y,
            }),
            _ => None,
        }
    }

    /// Starts a gesture. `icon_id` is `None` for presses on the empty background.
    ///
    /// A plain press on an unselected icon replaces the selection; `toggle` flips membership, and a
    /// toggle that deselects the icon ends the gesture immediately.
    /// Presses while another gesture is in flight are ignored.
    pub fn press(
        &mut self,
        icon_id: Option<&str>,
        pointer: PointerPosition,
        kind: PointerKind,
        toggle: bool,
        selection: &mut SelectionSet,
    ) {
        if self.is_active() {
            return;
        }

        let Some(icon_id) = icon_id else {
            self.state = GestureState::Marquee {
                origin: pointer,
                current: pointer,
                engaged: false,
                selection_before: selection.clone(),
            };
            return;
        };

        if toggle && selection.remove(icon_id) {
            // a deselected icon neither drags nor activates
            self.last_click = None;
            return;
        }
        if toggle {
            selection.insert(icon_id.to_string());
        } else if !selection.contains(icon_id) {
            selection.clear();
            selection.insert(icon_id.to_string());
        }

        self.state = GestureState::Pressed {
            icon_id: icon_id.to_string(),
            origin: pointer,
            kind,
        };
    }

    /// Advances the active gesture to `pointer`.
    pub fn pointer_move(
        &mut self,
        pointer: PointerPosition,
        positions: &mut IconPositions,
        selection: &mut SelectionSet,
    ) {
        match &mut self.state {
            GestureState::Idle => {}
            GestureState::Pressed {
                icon_id, origin, ..
            } => {
                let (dx, dy) = pointer.delta_from(*origin);
                if dx.abs() <= DRAG_THRESHOLD_PX && dy.abs() <= DRAG_THRESHOLD_PX {
                    return;
                }
                let group = drag_group(icon_id, selection);
                let starts = group
                    .iter()
                    .filter_map(|id| positions.get(id).map(|pos| (id.clone(), *pos)))
                    .collect();
                let origin = *origin;
                self.state = GestureState::Dragging {
                    origin,
                    group,
                    starts,
                };
                self.pointer_move(pointer, positions, selection);
            }
            GestureState::Dragging { origin, starts, .. } => {
                let (dx, dy) = pointer.delta_from(*origin);
                let (dx, dy) = (snap_to_grid(dx, GRID_SIZE), snap_to_grid(dy, GRID_SIZE));
                for (id, start) in starts.iter() {
                    positions.insert(id.clone(), start.offset(dx, dy));
                }
            }
            GestureState::Marquee {
                origin,
                current,
                engaged,
                ..
            } => {
                *current = pointer;
                let (dx, dy) = pointer.delta_from(*origin);
                if !*engaged && (dx.abs() > MARQUEE_DEADZONE_PX || dy.abs() > MARQUEE_DEADZONE_PX)
                {
                    *engaged = true;
                }
                if *engaged {
                    let rect = selection_rect(&SelectionBox {
                        start_x: origin.x,
                        start_y: origin.y,
                        current_x: current.x,
                        current_y: current.y,
                    });
                    *selection = positions
                        .iter()
                        .filter(|(_, pos)| is_icon_in_selection(**pos, rect))
                        .map(|(id, _)| id.clone())
                        .collect();
                }
            }
        }
    }

    /// Ends the active gesture. `now_ms` is the release timestamp used for double clicks.
    pub fn release(
        &mut self,
        now_ms: f64,
        positions: &mut IconPositions,
        selection: &mut SelectionSet,
    ) -> GestureOutcome {
        match std::mem::take(&mut self.state) {
            GestureState::Idle => GestureOutcome::None,
            GestureState::Pressed { icon_id, kind, .. } => self.register_click(icon_id, kind, now_ms),
            GestureState::Dragging { group, .. } => {
                resolve_drop(&group, positions);
                self.last_click = None;
                GestureOutcome::PositionsChanged
            }
            GestureState::Marquee { engaged: true, .. } => GestureOutcome::None,
            GestureState::Marquee { engaged: false, .. } => {
                selection.clear();
                self.last_click = None;
                GestureOutcome::BackgroundClick
            }
        }
    }

    /// Aborts the active gesture, restoring pre-gesture positions and marquee selection.
    pub fn cancel(&mut self, positions: &mut IconPositions, selection: &mut SelectionSet) {
        self.last_click = None;
        match std::mem::take(&mut self.state) {
            GestureState::Dragging { starts, .. } => positions.extend(starts),
            GestureState::Marquee {
                selection_before, ..
            } => *selection = selection_before,
            GestureState::Idle | GestureState::Pressed { .. } => {}
        }
    }

    fn register_click(&mut self, icon_id: String, kind: PointerKind, now_ms: f64) -> GestureOutcome {
        if kind.activates_on_tap() {
            self.last_click = None;
            return GestureOutcome::Activate(icon_id);
        }

        let is_double = self.last_click.as_ref().is_some_and(|last| {
            last.icon_id == icon_id && now_ms - last.at_ms <= DOUBLE_CLICK_MS && now_ms >= last.at_ms
        });
        if is_double {
            self.last_click = None;
            GestureOutcome::Activate(icon_id)
        } else {
            self.last_click = Some(LastClick {
                icon_id,
                at_ms: now_ms,
            });
            GestureOutcome::None
        }
    }
}

fn drag_group(icon_id: &str, selection: &SelectionSet) -> Vec<String> {
    if selection.len() > 1 && selection.contains(icon_id) {
        selection.iter().cloned().collect()
    } else {
        vec![icon_id.to_string()]
    }
}

/// Places each dragged icon on the nearest free cell. Icons resolved earlier in `group` occupy
/// their cell for the ones after them.
fn resolve_drop(group: &[String], positions: &mut IconPositions) {
    let mut pending: BTreeSet<String> = group.iter().cloned().collect();
    for id in group {
        let Some(dropped) = positions.get(id).copied() else {
            pending.remove(id);
            continue;
        };
        let target = find_nearest_empty_cell(dropped.x, dropped.y, &pending, positions);
        positions.insert(id.clone(), target);
        pending.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::IconPosition;

    fn positions(entries: &[(&str, i32, i32)]) -> IconPositions {
        entries
            .iter()
            .map(|(id, x, y)| (id.to_string(), IconPosition::new(*x, *y)))
            .collect()
    }

    fn selected(ids: &[&str]) -> SelectionSet {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn at(x: i32, y: i32) -> PointerPosition {
        PointerPosition::new(x, y)
    }

    #[test]
    fn plain_press_replaces_unselected_and_keeps_selected() {
        let mut controller = IconGestureController::default();
        let mut selection = selected(&["a", "b"]);

        controller.press(Some("c"), at(0, 0), PointerKind::Mouse, false, &mut selection);
        assert_eq!(selection, selected(&["c"]));
        controller.cancel(&mut IconPositions::new(), &mut selection);

        let mut selection = selected(&["a", "b"]);
        controller.press(Some("a"), at(0, 0), PointerKind::Mouse, false, &mut selection);
        assert_eq!(selection, selected(&["a", "b"]));
    }

    #[test]
    fn modifier_press_toggles_membership() {
        let mut controller = IconGestureController::default();
        let mut selection = selected(&["a"]);
        let mut layout = positions(&[("a", 0, 0), ("b", 90, 0)]);

        controller.press(Some("b"), at(0, 0), PointerKind::Mouse, true, &mut selection);
        controller.release(0.0, &mut layout, &mut selection);
        assert_eq!(selection, selected(&["a", "b"]));

        controller.press(Some("a"), at(0, 0), PointerKind::Mouse, true, &mut selection);
        controller.release(1_000.0, &mut layout, &mut selection);
        assert_eq!(selection, selected(&["b"]));
    }

    #[test]
    fn toggled_off_icon_does_not_drag() {
        let mut controller = IconGestureController::default();
        let mut selection = selected(&["a", "b"]);
        let mut layout = positions(&[("a", 0, 0), ("b", 90, 0)]);

        controller.press(Some("a"), at(10, 10), PointerKind::Mouse, true, &mut selection);
        assert_eq!(selection, selected(&["b"]));
        assert!(!controller.is_active());

        controller.pointer_move(at(200, 200), &mut layout, &mut selection);
        let outcome = controller.release(0.0, &mut layout, &mut selection);

        assert_eq!(outcome, GestureOutcome::None);
        assert_eq!(layout, positions(&[("a", 0, 0), ("b", 90, 0)]));
    }

    #[test]
    fn movement_within_threshold_is_not_a_drag() {
        let mut controller = IconGestureController::default();
        let mut layout = positions(&[("a", 0, 0)]);
        let mut selection = SelectionSet::new();

        controller.press(Some("a"), at(10, 10), PointerKind::Mouse, false, &mut selection);
        controller.pointer_move(at(15, 5), &mut layout, &mut selection);
        assert!(matches!(controller.state(), GestureState::Pressed { .. }));

        controller.pointer_move(at(16, 10), &mut layout, &mut selection);
        assert!(controller.is_dragging("a"));
    }

    #[test]
    fn dragged_icon_snaps_and_collides_onto_free_ring_cell() {
        let mut controller = IconGestureController::default();
        let mut layout = positions(&[("a", 0, 0), ("b", 90, 90)]);
        let mut selection = SelectionSet::new();

        controller.press(Some("a"), at(10, 10), PointerKind::Mouse, false, &mut selection);
        controller.pointer_move(at(105, 105), &mut layout, &mut selection);
        assert_eq!(layout["a"], IconPosition::new(90, 90));

        let outcome = controller.release(0.0, &mut layout, &mut selection);

        assert_eq!(outcome, GestureOutcome::PositionsChanged);
        assert_ne!(layout["a"], IconPosition::new(90, 90));
        // ring 1 starts at the top-left neighbour, which "a" vacated
        assert_eq!(layout["a"], IconPosition::new(0, 0));
        assert_eq!(layout["b"], IconPosition::new(90, 90));
        assert!(!controller.is_active());
    }

    #[test]
    fn uncontested_drop_keeps_snapped_cell() {
        let mut controller = IconGestureController::default();
        let mut layout = positions(&[("a", 0, 0)]);
        let mut selection = SelectionSet::new();

        controller.press(Some("a"), at(0, 0), PointerKind::Mouse, false, &mut selection);
        controller.pointer_move(at(130, 40), &mut layout, &mut selection);
        controller.release(0.0, &mut layout, &mut selection);

        assert_eq!(layout["a"], IconPosition::new(90, 0));
    }

    #[test]
    fn multi_drag_moves_selection_together() {
        let mut controller = IconGestureController::default();
        let mut layout = positions(&[("a", 0, 0), ("b", 90, 0), ("c", 0, 270)]);
        let mut selection = selected(&["a", "b"]);

        controller.press(Some("a"), at(20, 20), PointerKind::Mouse, false, &mut selection);
        controller.pointer_move(at(20, 200), &mut layout, &mut selection);

        assert_eq!(layout["a"], IconPosition::new(0, 180));
        assert_eq!(layout["b"], IconPosition::new(90, 180));
        assert_eq!(layout["c"], IconPosition::new(0, 270));
    }

    #[test]
    fn unselected_icon_drags_alone() {
        let mut controller = IconGestureController::default();
        let mut layout = positions(&[("a", 0, 0), ("b", 90, 0), ("c", 180, 0)]);
        let mut selection = selected(&["a", "b"]);

        controller.press(Some("c"), at(190, 10), PointerKind::Mouse, false, &mut selection);
        controller.pointer_move(at(190, 100), &mut layout, &mut selection);
        controller.release(0.0, &mut layout, &mut selection);

        assert_eq!(selection, selected(&["c"]));
        assert_eq!(
            layout,
            positions(&[("a", 0, 0), ("b", 90, 0), ("c", 180, 90)])
        );
    }

    #[test]
    fn group_members_do_not_share_a_resolved_cell() {
        let mut controller = IconGestureController::default();
        let mut layout = positions(&[
            ("a", 90, 0),
            ("b", 0, 0),
            ("c", 0, 180),
            ("d", 0, 90),
            ("e", 0, 270),
            ("f", 90, 90),
        ]);
        let mut selection = selected(&["a", "b"]);

        controller.press(Some("a"), at(100, 10), PointerKind::Mouse, false, &mut selection);
        controller.pointer_move(at(100, 190), &mut layout, &mut selection);
        controller.release(0.0, &mut layout, &mut selection);

        assert_eq!(layout["a"], IconPosition::new(90, 180));
        assert_eq!(layout["b"], IconPosition::new(90, 270));
    }

    #[test]
    fn cancel_restores_pre_drag_positions() {
        let mut controller = IconGestureController::default();
        let original = positions(&[("a", 0, 0), ("b", 90, 0)]);
        let mut layout = original.clone();
        let mut selection = selected(&["a", "b"]);

        controller.press(Some("b"), at(95, 5), PointerKind::Mouse, false, &mut selection);
        controller.pointer_move(at(400, 300), &mut layout, &mut selection);
        assert_ne!(layout, original);

        controller.cancel(&mut layout, &mut selection);
        assert_eq!(layout, original);
        assert!(!controller.is_active());
    }

    #[test]
    fn marquee_replaces_selection_with_overlapping_icons() {
        let mut controller = IconGestureController::default();
        let mut layout = positions(&[("a", 0, 0), ("b", 90, 0), ("c", 0, 180)]);
        let mut selection = selected(&["c"]);

        controller.press(None, at(170, 5), PointerKind::Mouse, false, &mut selection);
        controller.pointer_move(at(172, 7), &mut layout, &mut selection);
        assert_eq!(controller.selection_box(), None);
        assert_eq!(selection, selected(&["c"]));

        controller.pointer_move(at(60, 60), &mut layout, &mut selection);
        assert_eq!(selection, selected(&["a", "b"]));
        assert_eq!(
            controller.selection_box(),
            Some(SelectionBox {
                start_x: 170,
                start_y: 5,
                current_x: 60,
                current_y: 60
            })
        );

        controller.pointer_move(at(100, 60), &mut layout, &mut selection);
        assert_eq!(selection, selected(&["b"]));

        let outcome = controller.release(0.0, &mut layout, &mut selection);
        assert_eq!(outcome, GestureOutcome::None);
        assert_eq!(selection, selected(&["b"]));
    }

    #[test]
    fn cancelled_marquee_restores_selection() {
        let mut controller = IconGestureController::default();
        let mut layout = positions(&[("a", 0, 0)]);
        let mut selection = selected(&["x"]);

        controller.press(None, at(300, 300), PointerKind::Mouse, false, &mut selection);
        controller.pointer_move(at(10, 10), &mut layout, &mut selection);
        assert_eq!(selection, selected(&["a"]));

        controller.cancel(&mut layout, &mut selection);
        assert_eq!(selection, selected(&["x"]));
    }

    #[test]
    fn background_click_clears_selection() {
        let mut controller = IconGestureController::default();
        let mut layout = positions(&[("a", 0, 0)]);
        let mut selection = selected(&["a"]);

        controller.press(None, at(500, 500), PointerKind::Mouse, false, &mut selection);
        controller.pointer_move(at(503, 502), &mut layout, &mut selection);
        let outcome = controller.release(0.0, &mut layout, &mut selection);

        assert_eq!(outcome, GestureOutcome::BackgroundClick);
        assert!(selection.is_empty());
    }

    #[test]
    fn background_press_is_reported_until_marquee_engages() {
        let mut controller = IconGestureController::default();
        let mut layout = positions(&[("a", 0, 0)]);
        let mut selection = SelectionSet::new();

        controller.press(None, at(500, 500), PointerKind::Mouse, false, &mut selection);
        assert!(controller.is_background_press());
        controller.pointer_move(at(520, 520), &mut layout, &mut selection);
        assert!(!controller.is_background_press());
    }

    #[test]
    fn mouse_activates_on_double_click_only() {
        let mut controller = IconGestureController::default();
        let mut layout = positions(&[("a", 0, 0), ("b", 90, 0)]);
        let mut selection = SelectionSet::new();
        let mut click = |controller: &mut IconGestureController, id: &str, at_ms: f64| {
            controller.press(Some(id), at(5, 5), PointerKind::Mouse, false, &mut selection);
            controller.release(at_ms, &mut layout, &mut selection)
        };

        assert_eq!(click(&mut controller, "a", 1_000.0), GestureOutcome::None);
        assert_eq!(
            click(&mut controller, "a", 1_300.0),
            GestureOutcome::Activate("a".to_string())
        );
        assert_eq!(click(&mut controller, "a", 1_400.0), GestureOutcome::None);
        assert_eq!(click(&mut controller, "a", 2_000.0), GestureOutcome::None);
        assert_eq!(click(&mut controller, "b", 2_100.0), GestureOutcome::None);
    }

    #[test]
    fn touch_activates_on_single_tap() {
        let mut controller = IconGestureController::default();
        let mut layout = positions(&[("a", 0, 0)]);
        let mut selection = SelectionSet::new();

        controller.press(Some("a"), at(5, 5), PointerKind::Touch, false, &mut selection);
        assert_eq!(
            controller.release(0.0, &mut layout, &mut selection),
            GestureOutcome::Activate("a".to_string())
        );
        assert_eq!(selection, selected(&["a"]));
    }

    #[test]
    fn drag_does_not_activate() {
        let mut controller = IconGestureController::default();
        let mut layout = positions(&[("a", 0, 0)]);
        let mut selection = SelectionSet::new();

        controller.press(Some("a"), at(5, 5), PointerKind::Touch, false, &mut selection);
        controller.pointer_move(at(50, 5), &mut layout, &mut selection);
        assert_eq!(
            controller.release(0.0, &mut layout, &mut selection),
            GestureOutcome::PositionsChanged
        );
    }

    #[test]
    fn pointer_kind_from_dom_strings() {
        assert_eq!(PointerKind::from_dom("touch"), PointerKind::Touch);
        assert_eq!(PointerKind::from_dom("pen"), PointerKind::Pen);
        assert_eq!(PointerKind::from_dom("mouse"), PointerKind::Mouse);
        assert_eq!(PointerKind::from_dom(""), PointerKind::Mouse);
    }
}
