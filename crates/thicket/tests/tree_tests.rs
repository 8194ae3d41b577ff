//! Tests for check and selection consistency across the two levels.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thicket::{
    CheckState, Coordinate, HierarchicalIndexTree, ItemRef, SelectionFlags, SelectionMode,
    TreeConfig,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds a forest from per-group leaf check flags.
fn forest(groups: &[&[bool]]) -> HierarchicalIndexTree {
    let mut tree = HierarchicalIndexTree::new();
    for (row, flags) in groups.iter().enumerate() {
        for (col, &checked) in flags.iter().enumerate() {
            let coord = tree.insert(
                Coordinate::group(row as i32),
                format!("G{row}"),
                format!("L{row}.{col}"),
                false,
            );
            tree.set_checked(coord, checked);
        }
    }
    tree
}

/// Checks every cross-level invariant the tree promises after a public call.
fn assert_consistent(tree: &HierarchicalIndexTree) {
    for (row, group) in tree.groups().iter().enumerate() {
        assert!(group.leaf_count() > 0, "group {row} is empty\n{}", tree.dump());

        let flags = group.leaves().iter().map(|leaf| leaf.is_checked());
        assert_eq!(group.check_state(), CheckState::from_flags(flags));

        let all_selected = group.leaves().iter().all(|leaf| leaf.is_selected());
        assert_eq!(
            group.is_selected(),
            all_selected,
            "group {row} selection drifted\n{}",
            tree.dump()
        );
    }
    if let Some(current) = tree.current() {
        assert!(tree.is_valid(current), "dangling current {current}");
    }
}

#[test]
fn test_insert_into_empty_forest() {
    init_tracing();
    let mut tree = HierarchicalIndexTree::new();
    tree.insert(Coordinate::new(-1, -1), "G1", "L1", true);

    assert_eq!(tree.group_count(), 1);
    assert_eq!(tree.group(0).unwrap().label(), "G1");
    let leaf = tree.leaf(Coordinate::new(0, 0)).unwrap();
    assert_eq!(leaf.label(), "L1");
    assert_eq!(leaf.check_state(), CheckState::Checked);
    assert!(leaf.is_selected());
    assert_eq!(tree.all_coordinates(), vec![Coordinate::new(0, 0)]);
    assert_consistent(&tree);
}

#[test]
fn test_checking_last_leaf_checks_group() {
    let mut tree = forest(&[&[true, false]]);
    tree.set_checked(Coordinate::new(0, 1), true);

    assert_eq!(tree.check_state(ItemRef::leaf(0, 0)), Some(CheckState::Checked));
    assert_eq!(tree.check_state(ItemRef::leaf(0, 1)), Some(CheckState::Checked));
    assert_eq!(tree.check_state(ItemRef::Group(0)), Some(CheckState::Checked));
}

#[test]
fn test_mixed_leaves_make_group_partial() {
    let mut tree = forest(&[&[true, true, false]]);
    tree.set_checked(Coordinate::new(0, 0), false);
    assert_eq!(
        tree.check_state(ItemRef::Group(0)),
        Some(CheckState::PartiallyChecked)
    );
}

#[test]
fn test_group_check_state_never_drifts() {
    let mut tree = forest(&[&[true, false, true], &[false], &[true, true]]);
    let steps = [
        (0, 1, true),
        (0, 0, false),
        (1, 0, true),
        (2, 1, false),
        (0, 2, false),
        (0, 1, false),
        (2, 0, false),
    ];
    for (row, col, checked) in steps {
        tree.set_checked(Coordinate::new(row, col), checked);
        assert_consistent(&tree);
    }
    assert_eq!(tree.check_state(ItemRef::Group(0)), Some(CheckState::Unchecked));
    assert_eq!(tree.check_state(ItemRef::Group(1)), Some(CheckState::Checked));
    assert_eq!(tree.check_state(ItemRef::Group(2)), Some(CheckState::Unchecked));
}

#[test]
fn test_selecting_group_selects_leaves_and_back() {
    let mut tree = forest(&[&[true, true, true], &[true, true]]);

    tree.select(ItemRef::Group(0), SelectionFlags::SELECT);
    assert_eq!(tree.coordinates_under(ItemRef::Group(0)), tree.selected_coordinates());

    tree.select(ItemRef::leaf(1, 0), SelectionFlags::SELECT);
    assert!(!tree.is_selected(ItemRef::Group(1)));
    tree.select(ItemRef::leaf(1, 1), SelectionFlags::SELECT);
    assert!(tree.is_selected(ItemRef::Group(1)));
    assert_consistent(&tree);
}

#[test]
fn test_marquee_selection_across_groups() {
    let mut tree = forest(&[&[true, true], &[true], &[true, true, true]]);

    // One request per leaf, as a rubber-band sweep would issue them.
    for coord in [(0, 1), (1, 0), (2, 0), (2, 1), (2, 2), (0, 0)] {
        tree.select(ItemRef::Leaf(coord.into()), SelectionFlags::SELECT);
    }
    assert!((0..3).all(|row| tree.is_selected(ItemRef::Group(row))));
    assert_eq!(tree.selected_coordinates(), tree.all_coordinates());
    assert_consistent(&tree);
}

#[test]
fn test_on_selection_changed_is_idempotent() {
    let mut tree = forest(&[&[true, true], &[true]]);
    tree.select(ItemRef::Group(0), SelectionFlags::SELECT);
    tree.select(ItemRef::leaf(1, 0), SelectionFlags::SELECT);

    tree.on_selection_changed();
    let once = tree.selected_coordinates();
    tree.on_selection_changed();
    assert_eq!(tree.selected_coordinates(), once);
}

#[test]
fn test_remove_sole_and_non_sole_leaves() {
    let mut tree = forest(&[&[true, false, true], &[true]]);

    tree.remove(Coordinate::new(1, 0));
    assert_eq!(tree.group_count(), 1);

    tree.remove(Coordinate::new(0, 0));
    assert_eq!(tree.group_count(), 1);
    assert_eq!(tree.leaf_count(0), 2);
    assert_eq!(tree.leaf(Coordinate::new(0, 0)).unwrap().label(), "L0.1");
    assert_eq!(tree.leaf(Coordinate::new(0, 1)).unwrap().label(), "L0.2");
    assert_consistent(&tree);
}

#[test]
fn test_is_valid_for_every_shape() {
    let shapes: [&[&[bool]]; 3] = [
        &[],
        &[&[true]],
        &[&[true, true, true], &[false], &[true, false]],
    ];
    for shape in shapes {
        let tree = forest(shape);
        let groups = tree.group_count() as i32;
        for row in -2..groups + 2 {
            for col in -3..5 {
                let expected = row >= 0
                    && row < groups
                    && col >= 0
                    && (col as usize) < tree.leaf_count(row);
                assert_eq!(tree.is_valid(Coordinate::new(row, col)), expected, "({row}, {col})");
            }
        }
    }
}

#[test]
fn test_scripted_mutations_stay_consistent() {
    init_tracing();
    let mut tree = HierarchicalIndexTree::with_config(TreeConfig {
        selection_mode: SelectionMode::MultiSelection,
        ..Default::default()
    });

    let mut rng = StdRng::seed_from_u64(0x2545_f491);

    for step in 0..400 {
        let row = rng.gen_range(0..=tree.group_count() as i32);
        let col = rng.gen_range(-1..3);
        let coord = Coordinate::new(row, col);
        match rng.gen_range(0..8) {
            0 | 1 => {
                let select = rng.gen_bool(1.0 / 3.0);
                tree.insert(coord, format!("g{step}"), format!("l{step}"), select);
            }
            2 => tree.remove(coord),
            3 => tree.set_checked(coord, rng.gen_bool(0.5)),
            4 => tree.toggle_check(ItemRef::Group(row)),
            5 => tree.select(ItemRef::Leaf(coord), SelectionFlags::TOGGLE),
            6 => tree.select(ItemRef::Group(row), SelectionFlags::TOGGLE),
            _ => {
                tree.remove_many(&[Coordinate::group(row), coord]);
            }
        }
        assert_consistent(&tree);
    }
}

#[test]
fn test_signals_report_post_cascade_state() {
    let mut tree = forest(&[&[true, true]]);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    tree.signals().check_state_changed.connect(move |(item, state)| {
        seen_clone.lock().push((*item, *state));
    });

    tree.on_item_clicked(ItemRef::Group(0), CheckState::Unchecked);
    assert_eq!(
        *seen.lock(),
        vec![
            (ItemRef::leaf(0, 0), CheckState::Unchecked),
            (ItemRef::leaf(0, 1), CheckState::Unchecked),
            (ItemRef::Group(0), CheckState::Unchecked),
        ]
    );
}

#[test]
fn test_blocked_signals_stay_silent() {
    let mut tree = forest(&[&[true]]);
    let count = Arc::new(Mutex::new(0));
    let count_clone = count.clone();
    tree.signals().leaf_inserted.connect(move |_| *count_clone.lock() += 1);

    tree.signals().set_blocked(true);
    tree.insert(Coordinate::group(0), "", "quiet", false);
    tree.signals().set_blocked(false);
    tree.insert(Coordinate::group(0), "", "loud", false);

    assert_eq!(*count.lock(), 1);
}

#[test]
fn test_config_file_drives_tree() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thicket.toml");
    std::fs::write(
        &path,
        "selection_mode = \"single\"\nexpand_new_groups = false\ngroup_icon = \"folder\"\n",
    )
    .unwrap();

    let mut tree = HierarchicalIndexTree::with_config(TreeConfig::load_toml(&path).unwrap());
    tree.insert(Coordinate::INVALID, "g", "a", false);
    tree.insert(Coordinate::group(0), "", "b", false);

    assert_eq!(tree.group(0).unwrap().icon(), Some("folder"));
    assert!(!tree.is_expanded(0));

    tree.select(ItemRef::leaf(0, 0), SelectionFlags::SELECT);
    tree.select(ItemRef::leaf(0, 1), SelectionFlags::SELECT);
    assert_eq!(tree.selected_coordinates(), vec![Coordinate::new(0, 1)]);
}
