//! The two-level hierarchical index tree.
//!
//! [`HierarchicalIndexTree`] stores an ordered forest of groups, each owning an
//! ordered, non-empty run of leaves, addressed by positional
//! [`Coordinate`]s. It keeps check state and selection consistent across the
//! two levels:
//!
//! - A group's tri-state is derived from its leaves on every read.
//! - Checking a group cascades down to every leaf; checking a leaf re-derives
//!   its group.
//! - Selecting a group selects all its leaves, and a group whose leaves are
//!   all selected becomes selected itself (see the `selection` module).
//!
//! Every operation is total. Out-of-range coordinates make mutators no-ops and
//! queries return empty results; nothing panics or returns an error.

use thicket_core::logging::targets;

use super::check::CheckState;
use super::coordinate::{Coordinate, ItemRef};
use super::node::{Group, Leaf};
use super::signals::TreeSignals;
use crate::config::TreeConfig;

/// Builds a coordinate from in-range storage positions.
#[inline]
pub(crate) fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row as i32, col as i32)
}

/// A two-level forest of groups and leaves with cascading check and
/// selection state.
///
/// # Example
///
/// ```
/// use thicket::{CheckState, Coordinate, HierarchicalIndexTree, ItemRef};
///
/// let mut tree = HierarchicalIndexTree::new();
///
/// // An out-of-range row appends a new group with one leaf.
/// tree.insert(Coordinate::INVALID, "site_a", "scan_01", true);
/// // A valid row appends a leaf to that group.
/// tree.insert(Coordinate::new(0, -1), "", "scan_02", false);
///
/// tree.set_checked(Coordinate::new(0, 1), false);
/// assert_eq!(
///     tree.check_state(ItemRef::Group(0)),
///     Some(CheckState::PartiallyChecked)
/// );
/// assert_eq!(tree.checked_coordinates(), vec![Coordinate::new(0, 0)]);
/// ```
#[derive(Debug, Default)]
pub struct HierarchicalIndexTree {
    pub(super) groups: Vec<Group>,
    pub(super) current: Option<Coordinate>,
    pub(super) config: TreeConfig,
    pub(super) signals: TreeSignals,
}

impl HierarchicalIndexTree {
    /// Creates an empty tree with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tree with the given configuration.
    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Change notifications for this tree.
    pub fn signals(&self) -> &TreeSignals {
        &self.signals
    }

    // =========================================================================
    // Addressing
    // =========================================================================

    /// Storage index of the group at `row`, if in range.
    pub(super) fn group_index(&self, row: i32) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        (row < self.groups.len()).then_some(row)
    }

    /// Storage indices of the leaf at `coord`, if it addresses one.
    pub(super) fn locate(&self, coord: Coordinate) -> Option<(usize, usize)> {
        let row = self.group_index(coord.row)?;
        let col = usize::try_from(coord.col).ok()?;
        (col < self.groups[row].leaves.len()).then_some((row, col))
    }

    /// Returns `true` iff `coord` addresses an existing leaf.
    ///
    /// Whole-group markers (`col == -1`) are never valid.
    pub fn is_valid(&self, coord: Coordinate) -> bool {
        self.locate(coord).is_some()
    }

    // =========================================================================
    // Shape queries
    // =========================================================================

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of leaves in the group at `row`, or 0 if out of range.
    pub fn leaf_count(&self, row: i32) -> usize {
        self.group(row).map_or(0, Group::leaf_count)
    }

    /// Returns `true` if the forest has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All groups in forest order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// The group at `row`, if in range.
    pub fn group(&self, row: i32) -> Option<&Group> {
        self.group_index(row).map(|row| &self.groups[row])
    }

    /// The leaf at `coord`, if valid.
    pub fn leaf(&self, coord: Coordinate) -> Option<&Leaf> {
        self.locate(coord).map(|(row, col)| &self.groups[row].leaves[col])
    }

    // =========================================================================
    // Coordinate queries
    // =========================================================================

    /// Every leaf coordinate, row-major.
    pub fn all_coordinates(&self) -> Vec<Coordinate> {
        self.leaf_coordinates(|_| true)
    }

    /// Coordinates of every checked leaf, row-major.
    pub fn checked_coordinates(&self) -> Vec<Coordinate> {
        self.leaf_coordinates(|leaf| leaf.checked)
    }

    /// Coordinates of every selected leaf, row-major.
    ///
    /// Groups are never reported; a selected group shows up as its leaves.
    pub fn selected_coordinates(&self) -> Vec<Coordinate> {
        self.leaf_coordinates(|leaf| leaf.selected)
    }

    /// The slots a click on `item` acts upon.
    ///
    /// A group yields the coordinates of all its leaves; a leaf yields its
    /// own coordinate. Out-of-range items yield nothing.
    pub fn coordinates_under(&self, item: ItemRef) -> Vec<Coordinate> {
        match item {
            ItemRef::Group(row) => match self.group_index(row) {
                Some(row) => (0..self.groups[row].leaves.len())
                    .map(|col| at(row, col))
                    .collect(),
                None => Vec::new(),
            },
            ItemRef::Leaf(coord) if self.is_valid(coord) => vec![coord],
            ItemRef::Leaf(_) => Vec::new(),
        }
    }

    fn leaf_coordinates<F>(&self, mut keep: F) -> Vec<Coordinate>
    where
        F: FnMut(&Leaf) -> bool,
    {
        self.groups
            .iter()
            .enumerate()
            .flat_map(|(row, group)| {
                group
                    .leaves
                    .iter()
                    .enumerate()
                    .map(move |(col, leaf)| (at(row, col), leaf))
            })
            .filter_map(|(coord, leaf)| keep(leaf).then_some(coord))
            .collect()
    }

    // =========================================================================
    // Insertion and removal
    // =========================================================================

    /// Inserts a new, checked leaf.
    ///
    /// If `coord.row` is out of range a new group labelled `group_label` is
    /// appended holding just the new leaf. Otherwise the leaf joins the group
    /// at `coord.row`: at the front when `coord.col` addresses an existing
    /// leaf, at the back otherwise. `group_label` is unused in that case.
    ///
    /// With `select` the new leaf becomes the current item and the only
    /// selection. Returns the new leaf's coordinate.
    pub fn insert(
        &mut self,
        coord: Coordinate,
        group_label: impl Into<String>,
        leaf_label: impl Into<String>,
        select: bool,
    ) -> Coordinate {
        let leaf = Leaf::new(leaf_label, self.config.leaf_icon.clone());

        let inserted = match self.group_index(coord.row) {
            None => {
                let mut group = Group::new(group_label, self.config.group_icon.clone(), leaf);
                group.expanded = self.config.expand_new_groups;
                self.groups.push(group);

                let row = self.groups.len() - 1;
                tracing::debug!(target: targets::TREE, row, "appended group");
                self.signals.group_inserted.emit(row);
                at(row, 0)
            }
            Some(row) => {
                let before = self.groups[row].check_state();
                let group = &mut self.groups[row];
                let front = usize::try_from(coord.col).is_ok_and(|col| col < group.leaves.len());
                let col = if front {
                    group.leaves.insert(0, leaf);
                    0
                } else {
                    group.leaves.push(leaf);
                    group.leaves.len() - 1
                };
                if self.config.expand_new_groups {
                    group.expanded = true;
                }
                // The group no longer has every leaf selected.
                group.selected = false;

                if front {
                    if let Some(current) = self.current.as_mut().filter(|c| c.row == coord.row) {
                        current.col += 1;
                    }
                }

                tracing::debug!(target: targets::TREE, row, col, front, "inserted leaf");
                self.emit_group_state_if_changed(row, before);
                at(row, col)
            }
        };

        self.signals.leaf_inserted.emit(inserted);
        if select {
            self.set_current(inserted);
        }
        inserted
    }

    /// Removes the leaf at `coord`.
    ///
    /// Removing the last leaf of a group removes the group too. Later
    /// coordinates in the affected sequence shift down by one. No-op if
    /// `coord` is not valid.
    pub fn remove(&mut self, coord: Coordinate) {
        let Some((row, col)) = self.locate(coord) else {
            tracing::trace!(target: targets::TREE, %coord, "ignoring removal of out-of-range coordinate");
            return;
        };

        let group_removed = self.groups[row].leaves.len() == 1;
        let was_selected = if group_removed {
            let group = self.groups.remove(row);
            tracing::debug!(target: targets::TREE, row, "removed group with its last leaf");
            self.signals.group_removed.emit(row);
            group.leaves[0].selected
        } else {
            let before = self.groups[row].check_state();
            let leaf = self.groups[row].leaves.remove(col);
            tracing::debug!(target: targets::TREE, row, col, "removed leaf");
            self.signals.leaf_removed.emit(coord);
            self.emit_group_state_if_changed(row, before);
            leaf.selected
        };

        self.shift_current_after_removal(row, col, group_removed);

        // Dropping the only unselected sibling can leave a fully selected group.
        let propagated = self.propagate_selection();
        if was_selected || propagated {
            self.emit_selection();
        }
    }

    /// Removes every leaf named by `coords`, returning how many were removed.
    ///
    /// Whole-group markers `(row, -1)` remove every leaf of that group. The
    /// request is resolved with [`SortPolicy::ParentFirst`](super::SortPolicy)
    /// and executed in descending order so earlier removals never shift the
    /// coordinates still pending.
    #[tracing::instrument(skip_all, target = "thicket::tree", level = "debug", fields(requested = coords.len()))]
    pub fn remove_many(&mut self, coords: &[Coordinate]) -> usize {
        let resolved = self.sort_coordinates(super::SortPolicy::ParentFirst, coords);
        let mut ordered = self.sort_coordinates(super::SortPolicy::Descending, &resolved);
        ordered.dedup();

        let mut removed = 0;
        for coord in ordered {
            if self.is_valid(coord) {
                self.remove(coord);
                removed += 1;
            }
        }
        tracing::debug!(target: targets::TREE, removed, "batch removal finished");
        removed
    }

    /// Removes every group.
    pub fn clear(&mut self) {
        let had_selection = self.groups.iter().any(|g| g.leaves.iter().any(|l| l.selected));
        self.groups.clear();
        tracing::debug!(target: targets::TREE, "cleared forest");
        self.signals.reset.emit(());

        if had_selection {
            self.emit_selection();
        }
        self.update_current(None);
    }

    fn shift_current_after_removal(&mut self, row: usize, col: usize, group_removed: bool) {
        use std::cmp::Ordering;

        let Some(current) = self.current else {
            return;
        };
        let (cur_row, cur_col) = (current.row as usize, current.col as usize);

        let shifted = if group_removed {
            match cur_row.cmp(&row) {
                Ordering::Less => Some(current),
                Ordering::Equal => None,
                Ordering::Greater => Some(Coordinate::new(current.row - 1, current.col)),
            }
        } else if cur_row != row {
            Some(current)
        } else {
            match cur_col.cmp(&col) {
                Ordering::Less => Some(current),
                Ordering::Equal => None,
                Ordering::Greater => Some(Coordinate::new(current.row, current.col - 1)),
            }
        };

        match shifted {
            // Same leaf, new position.
            Some(coord) => self.current = Some(coord),
            None => self.update_current(None),
        }
    }

    // =========================================================================
    // Labels, icons and expansion
    // =========================================================================

    /// Renames the group at `row`. No-op if out of range.
    pub fn set_group_label(&mut self, row: i32, label: impl Into<String>) {
        match self.group_index(row) {
            Some(row) => self.groups[row].label = label.into(),
            None => tracing::trace!(target: targets::TREE, row, "ignoring label of out-of-range group"),
        }
    }

    /// Renames the leaf at `coord`. No-op if invalid.
    pub fn set_leaf_label(&mut self, coord: Coordinate, label: impl Into<String>) {
        match self.locate(coord) {
            Some((row, col)) => self.groups[row].leaves[col].label = label.into(),
            None => tracing::trace!(target: targets::TREE, %coord, "ignoring label of out-of-range leaf"),
        }
    }

    /// Sets the icon key attached to groups created from now on.
    pub fn set_group_icon(&mut self, icon: Option<String>) {
        self.config.group_icon = icon;
    }

    /// Sets the icon key attached to leaves created from now on.
    pub fn set_leaf_icon(&mut self, icon: Option<String>) {
        self.config.leaf_icon = icon;
    }

    /// Expands or collapses the group at `row`. No-op if out of range.
    pub fn set_expanded(&mut self, row: i32, expanded: bool) {
        if let Some(row) = self.group_index(row) {
            self.groups[row].expanded = expanded;
        }
    }

    /// Whether the group at `row` is expanded; `false` if out of range.
    pub fn is_expanded(&self, row: i32) -> bool {
        self.group(row).is_some_and(Group::is_expanded)
    }

    // =========================================================================
    // Check state
    // =========================================================================

    /// The displayed check state of `item`, or `None` if out of range.
    ///
    /// Leaves report `Checked` or `Unchecked`; groups report the tri-state
    /// derived from their leaves.
    pub fn check_state(&self, item: ItemRef) -> Option<CheckState> {
        match item {
            ItemRef::Group(row) => self.group(row).map(Group::check_state),
            ItemRef::Leaf(coord) => self.leaf(coord).map(Leaf::check_state),
        }
    }

    /// Sets the check flag of the leaf at `coord` and re-derives its group,
    /// exactly as a user click on that leaf would. No-op if invalid.
    pub fn set_checked(&mut self, coord: Coordinate, checked: bool) {
        if !self.is_valid(coord) {
            tracing::trace!(target: targets::CHECK, %coord, "ignoring check of out-of-range leaf");
            return;
        }
        self.on_item_clicked(ItemRef::Leaf(coord), CheckState::from_flag(checked));
    }

    /// Checks or unchecks every leaf of the group at `row`.
    pub fn set_group_checked(&mut self, row: i32, checked: bool) {
        self.on_item_clicked(ItemRef::Group(row), CheckState::from_flag(checked));
    }

    /// Flips `item`'s check box the way a user click does.
    ///
    /// A partially checked group becomes checked.
    pub fn toggle_check(&mut self, item: ItemRef) {
        if let Some(state) = self.check_state(item) {
            self.on_item_clicked(item, state.toggle());
        }
    }

    /// Propagates a check-box change on `item`, whose box now shows `state`.
    ///
    /// - Group: every leaf adopts the group's new flag (downward cascade). A
    ///   `PartiallyChecked` state carries no flag, so nothing cascades.
    /// - Leaf: the leaf takes the flag and its group is re-derived from all
    ///   siblings (upward, single level). `PartiallyChecked` is ignored
    ///   since leaves are binary.
    pub fn on_item_clicked(&mut self, item: ItemRef, state: CheckState) {
        let Some(checked) = state.as_flag() else {
            tracing::trace!(target: targets::CHECK, ?item, "partial state carries no flag, nothing to propagate");
            return;
        };

        match item {
            ItemRef::Group(row) => {
                let Some(row) = self.group_index(row) else {
                    tracing::trace!(target: targets::CHECK, row, "ignoring click on out-of-range group");
                    return;
                };
                let before = self.groups[row].check_state();

                let mut changed = Vec::new();
                for (col, leaf) in self.groups[row].leaves.iter_mut().enumerate() {
                    if leaf.checked != checked {
                        leaf.checked = checked;
                        changed.push(col);
                    }
                }
                tracing::debug!(target: targets::CHECK, row, checked, cascaded = changed.len(), "group check cascaded to leaves");

                for col in changed {
                    self.signals
                        .check_state_changed
                        .emit((ItemRef::Leaf(at(row, col)), state));
                }
                self.emit_group_state_if_changed(row, before);
            }
            ItemRef::Leaf(coord) => {
                let Some((row, col)) = self.locate(coord) else {
                    tracing::trace!(target: targets::CHECK, %coord, "ignoring click on out-of-range leaf");
                    return;
                };
                let before = self.groups[row].check_state();

                let leaf = &mut self.groups[row].leaves[col];
                if leaf.checked != checked {
                    leaf.checked = checked;
                    tracing::debug!(target: targets::CHECK, %coord, checked, "leaf check changed");
                    self.signals.check_state_changed.emit((item, state));
                }
                self.emit_group_state_if_changed(row, before);
            }
        }
    }

    /// Emits `check_state_changed` for a group whose derived state moved.
    fn emit_group_state_if_changed(&self, row: usize, before: CheckState) {
        let after = self.groups[row].check_state();
        if after != before {
            tracing::trace!(target: targets::CHECK, row, ?before, ?after, "group state re-derived");
            self.signals
                .check_state_changed
                .emit((ItemRef::Group(row as i32), after));
        }
    }
}
