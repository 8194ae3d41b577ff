//! Tests for batch ordering policies and batch removal.

use std::sync::Arc;

use parking_lot::Mutex;
use thicket::{Coordinate, HierarchicalIndexTree, ItemRef, SelectionFlags, SortPolicy};

/// Builds a forest with the given number of leaves per group.
fn forest(shape: &[usize]) -> HierarchicalIndexTree {
    let mut tree = HierarchicalIndexTree::new();
    for (row, &leaves) in shape.iter().enumerate() {
        for col in 0..leaves {
            tree.insert(
                Coordinate::group(row as i32),
                format!("G{row}"),
                format!("L{row}.{col}"),
                false,
            );
        }
    }
    tree
}

fn coords(pairs: &[(i32, i32)]) -> Vec<Coordinate> {
    pairs.iter().copied().map(Coordinate::from).collect()
}

#[test]
fn test_parent_first_scenario() {
    let tree = forest(&[2, 1]);
    assert_eq!(
        tree.sort_coordinates(SortPolicy::ParentFirst, &coords(&[(0, -1), (0, 1), (1, 0)])),
        coords(&[(0, 0), (0, 1), (1, 0)])
    );
}

#[test]
fn test_policies_on_selection_driven_request() {
    let mut tree = forest(&[3, 2]);
    tree.select(ItemRef::Group(1), SelectionFlags::SELECT);
    tree.select(ItemRef::leaf(0, 2), SelectionFlags::SELECT);

    // What a view would hand over: the group marker plus individual leaves.
    let request = coords(&[(1, -1), (0, 2), (1, 0)]);

    assert_eq!(
        tree.sort_coordinates(SortPolicy::Ascending, &request),
        coords(&[(0, 2), (1, -1), (1, 0)])
    );
    assert_eq!(
        tree.sort_coordinates(SortPolicy::Descending, &request),
        coords(&[(1, 0), (1, -1), (0, 2)])
    );
    assert_eq!(
        tree.sort_coordinates(SortPolicy::ParentFirst, &request),
        coords(&[(1, 0), (1, 1), (0, 2)])
    );
    assert_eq!(
        tree.sort_coordinates(SortPolicy::ChildFirst, &request),
        coords(&[(0, 2), (1, 0)])
    );
}

#[test]
fn test_descending_order_keeps_pending_coordinates_valid() {
    let tree = forest(&[3, 3]);
    let request = coords(&[(0, 0), (1, 2), (0, 2), (1, 0)]);
    let ordered = tree.sort_coordinates(SortPolicy::Descending, &request);

    // Removing in this order never shifts a coordinate still to be removed.
    let mut tree = tree;
    for coord in ordered {
        assert!(tree.is_valid(coord), "{coord} went stale");
        tree.remove(coord);
    }
    assert_eq!(tree.all_coordinates(), coords(&[(0, 0), (1, 0)]));
    assert_eq!(tree.leaf(Coordinate::new(0, 0)).unwrap().label(), "L0.1");
    assert_eq!(tree.leaf(Coordinate::new(1, 0)).unwrap().label(), "L1.1");
}

#[test]
fn test_remove_many_ignores_stale_coordinates() {
    let mut tree = forest(&[2, 1]);
    let removed = tree.remove_many(&coords(&[(5, -1), (0, 9), (1, 0), (-1, 0)]));
    assert_eq!(removed, 1);
    assert_eq!(tree.group_count(), 1);
    assert_eq!(tree.leaf_count(0), 2);
}

#[test]
fn test_remove_many_of_selection() {
    let mut tree = forest(&[2, 3, 1]);
    tree.select(ItemRef::Group(1), SelectionFlags::SELECT);
    tree.select(ItemRef::leaf(0, 0), SelectionFlags::SELECT);

    let selection_events = Arc::new(Mutex::new(0));
    let events_clone = selection_events.clone();
    tree.signals()
        .selection_changed
        .connect(move |_| *events_clone.lock() += 1);

    let request = tree.selected_coordinates();
    assert_eq!(tree.remove_many(&request), 4);

    assert!(tree.selected_coordinates().is_empty());
    assert_eq!(tree.group_count(), 2);
    assert_eq!(tree.group(0).unwrap().label(), "G0");
    assert_eq!(tree.group(1).unwrap().label(), "G2");
    assert_eq!(tree.leaf(Coordinate::new(0, 0)).unwrap().label(), "L0.1");
    assert!(*selection_events.lock() > 0);
}

#[test]
fn test_remove_many_emits_shape_signals() {
    let mut tree = forest(&[2, 1]);
    let removed_groups = Arc::new(Mutex::new(Vec::new()));
    let removed_leaves = Arc::new(Mutex::new(Vec::new()));
    let groups_clone = removed_groups.clone();
    let leaves_clone = removed_leaves.clone();
    tree.signals()
        .group_removed
        .connect(move |row| groups_clone.lock().push(*row));
    tree.signals()
        .leaf_removed
        .connect(move |coord| leaves_clone.lock().push(*coord));

    tree.remove_many(&coords(&[(0, -1), (1, 0)]));

    // (1,0) first, then (0,1) and (0,0); only the last leaf of group 0 takes the group.
    assert_eq!(*removed_groups.lock(), vec![1, 0]);
    assert_eq!(*removed_leaves.lock(), vec![Coordinate::new(0, 1)]);
    assert!(tree.is_empty());
}
