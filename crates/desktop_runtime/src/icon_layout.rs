//! Persisted desktop icon positions.

use platform_host::{load_json_with, save_json_with, FileNode, KeyValueStore};

use crate::{
    geometry::{default_position, GRID_SIZE},
    model::IconPositions,
};

/// Storage key for the icon position map.
pub const ICON_POSITIONS_KEY: &str = "webos-icon-positions";

/// Loads the stored position map. Absent, unreadable or corrupt data yields an empty map.
pub fn load_icon_positions<S: KeyValueStore + ?Sized>(store: &S) -> IconPositions {
    load_json_with::<S, IconPositions>(store, ICON_POSITIONS_KEY)
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Writes the position map under [`ICON_POSITIONS_KEY`].
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_icon_positions<S: KeyValueStore + ?Sized>(
    store: &S,
    positions: &IconPositions,
) -> Result<(), String> {
    save_json_with(store, ICON_POSITIONS_KEY, positions)
}

/// Merges stored positions with the current icon set.
///
/// Icons keep their stored position when one exists and otherwise get the column-major default
/// for their index in `nodes`. Stored ids with no matching node are dropped.
pub fn reconcile_icon_positions(
    stored: &IconPositions,
    nodes: &[FileNode],
    container_height: i32,
) -> IconPositions {
    let mut merged = IconPositions::new();
    for (index, node) in nodes.iter().enumerate() {
        merged.entry(node.id.clone()).or_insert_with(|| {
            stored
                .get(&node.id)
                .copied()
                .unwrap_or_else(|| default_position(index, container_height, GRID_SIZE))
        });
    }
    merged
}

#[cfg(test)]
mod tests {
    use platform_host::{FileNodeType, MemoryKeyValueStore, NoopKeyValueStore, DESKTOP_NODE_ID};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::model::IconPosition;

    fn node(id: &str) -> FileNode {
        FileNode::new(id, Some(DESKTOP_NODE_ID), id, FileNodeType::File)
    }

    fn stored(entries: &[(&str, i32, i32)]) -> IconPositions {
        entries
            .iter()
            .map(|(id, x, y)| (id.to_string(), IconPosition::new(*x, *y)))
            .collect()
    }

    #[test]
    fn load_defaults_to_empty_map() {
        assert!(load_icon_positions(&NoopKeyValueStore).is_empty());
        let corrupt = MemoryKeyValueStore::with_entry(ICON_POSITIONS_KEY, "{\"a\":{\"x\":");
        assert!(load_icon_positions(&corrupt).is_empty());
    }

    #[test]
    fn saved_map_is_the_wire_shape() {
        let store = MemoryKeyValueStore::default();
        let positions = stored(&[("about", 90, 180)]);
        save_icon_positions(&store, &positions).expect("save");
        assert_eq!(
            store.get(ICON_POSITIONS_KEY).expect("get").as_deref(),
            Some(r#"{"about":{"x":90,"y":180}}"#)
        );
        assert_eq!(load_icon_positions(&store), positions);
    }

    #[test]
    fn reconcile_keeps_stored_fills_missing_and_drops_stale() {
        let previous = stored(&[("a", 270, 90), ("gone", 0, 0)]);
        let nodes = [node("a"), node("b"), node("c")];

        let merged = reconcile_icon_positions(&previous, &nodes, 400);

        assert_eq!(
            merged,
            stored(&[("a", 270, 90), ("b", 0, 90), ("c", 0, 180)])
        );
    }

    #[test]
    fn duplicate_node_ids_keep_first_slot() {
        let nodes = [node("a"), node("a")];
        assert_eq!(
            reconcile_icon_positions(&IconPositions::new(), &nodes, 400),
            stored(&[("a", 0, 0)])
        );
    }

    proptest! {
        #[test]
        fn reconcile_is_order_independent_for_keys_and_stored_positions(
            ids in proptest::collection::btree_set("[a-f]{1,3}", 1..12),
            stored_mask in proptest::collection::vec(any::<bool>(), 12),
            seed in any::<u64>(),
        ) {
            let ids: Vec<String> = ids.into_iter().collect();
            let previous: IconPositions = ids
                .iter()
                .zip(&stored_mask)
                .enumerate()
                .filter(|(_, (_, keep))| **keep)
                .map(|(idx, (id, _))| (id.clone(), IconPosition::new(idx as i32 * 90, 450)))
                .chain(std::iter::once(("stale".to_string(), IconPosition::new(0, 0))))
                .collect();

            let forward: Vec<FileNode> = ids.iter().map(|id| node(id)).collect();
            let mut shuffled = forward.clone();
            let len = shuffled.len();
            shuffled.rotate_left((seed as usize) % len);
            shuffled.reverse();

            let a = reconcile_icon_positions(&previous, &forward, 500);
            let b = reconcile_icon_positions(&previous, &shuffled, 500);

            prop_assert_eq!(a.keys().collect::<Vec<_>>(), b.keys().collect::<Vec<_>>());
            prop_assert!(!a.contains_key("stale"));
            for (id, position) in &previous {
                if let Some(merged) = a.get(id) {
                    prop_assert_eq!(merged, position);
                    prop_assert_eq!(b.get(id), Some(position));
                }
            }
        }
    }
}
