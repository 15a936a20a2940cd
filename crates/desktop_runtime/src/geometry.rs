//! Grid and rectangle math for the desktop icon layer.
//!
//! Everything here is pure and total: degenerate inputs resolve to a safe value instead of an
//! error.

use std::collections::{BTreeSet, HashSet};

use crate::model::{IconPosition, IconPositions, SelectionBox, SelectionRect};

/// Icon grid pitch in pixels.
pub const GRID_SIZE: i32 = 90;
/// Space reserved below the last icon row when computing rows per column.
pub const LAYOUT_MARGIN: i32 = 16;
/// Icon hit-box width used for marquee overlap.
pub const ICON_WIDTH: i32 = 80;
/// Icon hit-box height used for marquee overlap.
pub const ICON_HEIGHT: i32 = 80;
/// Movement (either axis) a press must exceed before it becomes a drag.
pub const DRAG_THRESHOLD_PX: i32 = 5;
/// Movement (either axis) a background press must exceed before the marquee engages.
pub const MARQUEE_DEADZONE_PX: i32 = 5;
/// Outermost ring examined by [`find_nearest_empty_cell`].
pub const MAX_SEARCH_RING: i32 = 19;

/// Rounds `value` to the nearest multiple of `grid_size`, halves rounding up.
///
/// A non-positive `grid_size` leaves `value` unchanged. Results that would leave the `i32` range
/// saturate to the outermost in-range multiple.
pub fn snap_to_grid(value: i32, grid_size: i32) -> i32 {
    if grid_size <= 0 {
        return value;
    }
    let doubled_grid = 2 * i64::from(grid_size);
    let cells = (2 * i64::from(value) + i64::from(grid_size)).div_euclid(doubled_grid);
    let snapped = cells * i64::from(grid_size);
    i32::try_from(snapped).unwrap_or(if snapped > 0 {
        i32::MAX / grid_size * grid_size
    } else {
        i32::MIN / grid_size * grid_size
    })
}

/// Column-major default slot for the `index`-th icon.
///
/// Rows per column are derived from the container height and never drop below one, so a
/// collapsed container lays icons out in a single row.
pub fn default_position(index: usize, container_height: i32, grid_size: i32) -> IconPosition {
    let grid_size = grid_size.max(1);
    let rows_per_column = (container_height - LAYOUT_MARGIN)
        .div_euclid(grid_size)
        .max(1) as usize;
    let col = (index / rows_per_column) as i32;
    let row = (index % rows_per_column) as i32;
    IconPosition::new(col * grid_size, row * grid_size)
}

/// Normalizes a marquee drawn in any direction.
pub fn selection_rect(selection: &SelectionBox) -> SelectionRect {
    SelectionRect {
        left: selection.start_x.min(selection.current_x),
        top: selection.start_y.min(selection.current_y),
        width: (selection.current_x - selection.start_x).abs(),
        height: (selection.current_y - selection.start_y).abs(),
    }
}

/// Returns `true` when the icon footprint at `icon` overlaps `rect` at all.
pub fn is_icon_in_selection(icon: IconPosition, rect: SelectionRect) -> bool {
    icon.x < rect.left + rect.width
        && icon.x + ICON_WIDTH > rect.left
        && icon.y < rect.top + rect.height
        && icon.y + ICON_HEIGHT > rect.top
}

/// Finds the free grid cell closest to the target, scanning rings of growing radius.
///
/// Cells held by ids in `exclude_ids` count as free. Ring cells are visited column by column
/// (x outer, y inner) and cells with a negative coordinate are skipped. When no free cell exists
/// within [`MAX_SEARCH_RING`] rings the target itself is returned, even though it is occupied.
pub fn find_nearest_empty_cell(
    target_x: i32,
    target_y: i32,
    exclude_ids: &BTreeSet<String>,
    all_positions: &IconPositions,
) -> IconPosition {
    let occupied: HashSet<IconPosition> = all_positions
        .iter()
        .filter(|(id, _)| !exclude_ids.contains(*id))
        .map(|(_, position)| *position)
        .collect();

    let target = IconPosition::new(target_x, target_y);
    if !occupied.contains(&target) {
        return target;
    }

    for radius in 1..=MAX_SEARCH_RING {
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                if dx.abs() != radius && dy.abs() != radius {
                    continue;
                }
                let candidate = target.offset(dx * GRID_SIZE, dy * GRID_SIZE);
                if candidate.x < 0 || candidate.y < 0 {
                    continue;
                }
                if !occupied.contains(&candidate) {
                    return candidate;
                }
            }
        }
    }

    target
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn positions(entries: &[(&str, i32, i32)]) -> IconPositions {
        entries
            .iter()
            .map(|(id, x, y)| (id.to_string(), IconPosition::new(*x, *y)))
            .collect()
    }

    fn ids(entries: &[&str]) -> BTreeSet<String> {
        entries.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn snap_rounds_to_nearest_cell_with_halves_up() {
        assert_eq!(snap_to_grid(44, 90), 0);
        assert_eq!(snap_to_grid(45, 90), 90);
        assert_eq!(snap_to_grid(95, 90), 90);
        assert_eq!(snap_to_grid(136, 90), 180);
        assert_eq!(snap_to_grid(-45, 90), 0);
        assert_eq!(snap_to_grid(-46, 90), -90);
        assert_eq!(snap_to_grid(37, 0), 37);
    }

    #[test]
    fn snap_saturates_at_the_i32_edges() {
        assert_eq!(snap_to_grid(i32::MAX, 1000), 2_147_483_000);
        assert_eq!(snap_to_grid(i32::MIN, 1000), -2_147_483_000);
        assert_eq!(snap_to_grid(i32::MAX, 90), 2_147_483_610);
    }

    #[test]
    fn default_layout_fills_columns_first() {
        // (400 - 16) / 90 = 4 rows per column
        assert_eq!(default_position(0, 400, 90), IconPosition::new(0, 0));
        assert_eq!(default_position(3, 400, 90), IconPosition::new(0, 270));
        assert_eq!(default_position(4, 400, 90), IconPosition::new(90, 0));
        assert_eq!(default_position(9, 400, 90), IconPosition::new(180, 90));
    }

    #[test]
    fn degenerate_container_keeps_one_row() {
        assert_eq!(default_position(2, 0, 90), IconPosition::new(180, 0));
        assert_eq!(default_position(2, -500, 90), IconPosition::new(180, 0));
    }

    #[test]
    fn selection_rect_handles_every_drag_direction() {
        let up_left = SelectionBox {
            start_x: 200,
            start_y: 150,
            current_x: 50,
            current_y: 20,
        };
        assert_eq!(
            selection_rect(&up_left),
            SelectionRect {
                left: 50,
                top: 20,
                width: 150,
                height: 130
            }
        );
    }

    #[test]
    fn selection_overlap_is_not_containment() {
        let rect = SelectionRect {
            left: 70,
            top: 70,
            width: 20,
            height: 20,
        };
        assert!(is_icon_in_selection(IconPosition::new(0, 0), rect));
        assert!(!is_icon_in_selection(
            IconPosition::new(90, 0),
            SelectionRect { top: 91, ..rect }
        ));
        assert!(!is_icon_in_selection(
            IconPosition::new(0, 100),
            SelectionRect { left: 91, ..rect }
        ));
        assert!(!is_icon_in_selection(IconPosition::new(180, 180), rect));
    }

    #[test]
    fn free_target_is_returned_as_is() {
        let all = positions(&[("a", 0, 0)]);
        assert_eq!(
            find_nearest_empty_cell(90, 90, &ids(&[]), &all),
            IconPosition::new(90, 90)
        );
    }

    #[test]
    fn excluded_ids_do_not_occupy_cells() {
        let all = positions(&[("a", 90, 90)]);
        assert_eq!(
            find_nearest_empty_cell(90, 90, &ids(&["a"]), &all),
            IconPosition::new(90, 90)
        );
    }

    #[test]
    fn occupied_target_moves_to_first_ring_cell() {
        let all = positions(&[("b", 90, 90), ("c", 0, 0)]);
        // ring 1 scan starts at (0,0) which is taken, then (0,90)
        assert_eq!(
            find_nearest_empty_cell(90, 90, &ids(&[]), &all),
            IconPosition::new(0, 90)
        );
    }

    #[test]
    fn ring_search_skips_negative_cells() {
        let all = positions(&[("a", 0, 0)]);
        assert_eq!(
            find_nearest_empty_cell(0, 0, &ids(&[]), &all),
            IconPosition::new(0, 90)
        );
    }

    #[test]
    fn exhausted_rings_fall_back_to_target() {
        let mut all = IconPositions::new();
        for col in 0..=MAX_SEARCH_RING {
            for row in 0..=MAX_SEARCH_RING {
                all.insert(
                    format!("{col}-{row}"),
                    IconPosition::new(col * GRID_SIZE, row * GRID_SIZE),
                );
            }
        }
        assert_eq!(
            find_nearest_empty_cell(0, 0, &ids(&[]), &all),
            IconPosition::new(0, 0)
        );
    }

    proptest! {
        #[test]
        fn snap_is_idempotent(value in any::<i32>(), grid in 1i32..500) {
            let once = snap_to_grid(value, grid);
            prop_assert_eq!(snap_to_grid(once, grid), once);
            prop_assert_eq!(once % grid, 0);
        }

        #[test]
        fn selection_rect_is_normalized(
            start_x in -5_000i32..5_000,
            start_y in -5_000i32..5_000,
            current_x in -5_000i32..5_000,
            current_y in -5_000i32..5_000,
        ) {
            let rect = selection_rect(&SelectionBox { start_x, start_y, current_x, current_y });
            prop_assert!(rect.width >= 0 && rect.height >= 0);
            prop_assert!(rect.left <= start_x && rect.left <= current_x);
            prop_assert!(rect.top <= start_y && rect.top <= current_y);
            prop_assert_eq!(rect.left + rect.width, start_x.max(current_x));
        }

        #[test]
        fn nearest_cell_is_free_unless_search_exhausted(
            cells in proptest::collection::vec((0i32..6, 0i32..6), 0..30),
            target in (0i32..6, 0i32..6),
            excluded in proptest::collection::vec(0usize..30, 0..5),
        ) {
            let all: IconPositions = cells
                .iter()
                .enumerate()
                .map(|(idx, (col, row))| {
                    (format!("icon-{idx}"), IconPosition::new(col * GRID_SIZE, row * GRID_SIZE))
                })
                .collect();
            let exclude: BTreeSet<String> =
                excluded.iter().map(|idx| format!("icon-{idx}")).collect();
            let occupied: HashSet<IconPosition> = all
                .iter()
                .filter(|(id, _)| !exclude.contains(*id))
                .map(|(_, pos)| *pos)
                .collect();

            let target = IconPosition::new(target.0 * GRID_SIZE, target.1 * GRID_SIZE);
            let found = find_nearest_empty_cell(target.x, target.y, &exclude, &all);

            // at most 30 occupied cells, so ring search always finds room
            prop_assert!(!occupied.contains(&found));
            prop_assert!(found.x >= 0 && found.y >= 0);
            if !occupied.contains(&target) {
                prop_assert_eq!(found, target);
            }
        }
    }
}
