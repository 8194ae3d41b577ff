//! Selection state for the hierarchical index tree.
//!
//! Selection lives on both levels: each leaf and each group carries its own
//! flag. Two cascades keep them correlated and are re-applied after every
//! change until nothing moves:
//!
//! - A selected group selects all of its leaves (downward).
//! - A group whose leaves are all selected becomes selected (upward,
//!   all-or-nothing).
//!
//! Explicitly deselecting a leaf also deselects its group, and deselecting a
//! group deselects its leaves, so that neither cascade immediately undoes the
//! request.
//!
//! # Example
//!
//! ```
//! use thicket::{Coordinate, HierarchicalIndexTree, ItemRef, SelectionFlags};
//!
//! let mut tree = HierarchicalIndexTree::new();
//! tree.insert(Coordinate::INVALID, "site", "scan_01", false);
//! tree.insert(Coordinate::group(0), "", "scan_02", false);
//!
//! tree.select(ItemRef::Group(0), SelectionFlags::SELECT);
//! assert_eq!(tree.selected_coordinates().len(), 2);
//!
//! tree.select(ItemRef::leaf(0, 1), SelectionFlags::DESELECT);
//! assert!(!tree.is_selected(ItemRef::Group(0)));
//! ```

use serde::{Deserialize, Serialize};
use thicket_core::logging::targets;

use super::coordinate::{Coordinate, ItemRef};
use super::tree::HierarchicalIndexTree;

/// Selection behavior mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SelectionMode {
    /// No items can be selected.
    #[serde(rename = "none")]
    NoSelection,
    /// Selecting an item replaces the previous selection.
    #[serde(rename = "single")]
    SingleSelection,
    /// Selecting an item adds to the selection.
    #[serde(rename = "multi")]
    MultiSelection,
    /// Like multi selection; the caller decides when to clear (default).
    #[default]
    #[serde(rename = "extended")]
    ExtendedSelection,
}

/// Flags controlling a [`HierarchicalIndexTree::select`] request.
///
/// These flags can be combined to perform compound selection operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionFlags {
    /// Clear existing selection before applying the operation.
    pub clear: bool,
    /// Select the item.
    pub select: bool,
    /// Deselect the item.
    pub deselect: bool,
    /// Toggle the item's selection.
    pub toggle: bool,
    /// Make the item current (leaves only).
    pub current: bool,
}

impl SelectionFlags {
    /// No operation.
    pub const NONE: Self = Self::empty();

    /// Clear existing selection.
    pub const CLEAR: Self = Self {
        clear: true,
        ..Self::empty()
    };

    /// Select the item.
    pub const SELECT: Self = Self {
        select: true,
        ..Self::empty()
    };

    /// Deselect the item.
    pub const DESELECT: Self = Self {
        deselect: true,
        ..Self::empty()
    };

    /// Toggle selection of the item.
    pub const TOGGLE: Self = Self {
        toggle: true,
        ..Self::empty()
    };

    /// Clear existing selection and select the item.
    pub const CLEAR_AND_SELECT: Self = Self {
        clear: true,
        select: true,
        ..Self::empty()
    };

    /// Set as current item.
    pub const CURRENT: Self = Self {
        current: true,
        ..Self::empty()
    };

    /// Select and set as current.
    pub const SELECT_CURRENT: Self = Self {
        select: true,
        current: true,
        ..Self::empty()
    };

    /// Clear, select, and set as current.
    pub const CLEAR_SELECT_CURRENT: Self = Self {
        clear: true,
        select: true,
        current: true,
        ..Self::empty()
    };

    const fn empty() -> Self {
        Self {
            clear: false,
            select: false,
            deselect: false,
            toggle: false,
            current: false,
        }
    }

    /// Returns these flags with clear set.
    pub fn with_clear(mut self) -> Self {
        self.clear = true;
        self
    }

    /// Returns these flags with select set.
    pub fn with_select(mut self) -> Self {
        self.select = true;
        self
    }

    /// Returns these flags with current set.
    pub fn with_current(mut self) -> Self {
        self.current = true;
        self
    }
}

impl HierarchicalIndexTree {
    /// The current leaf, if any.
    pub fn current(&self) -> Option<Coordinate> {
        self.current
    }

    /// Whether `item` is selected; `false` if out of range.
    pub fn is_selected(&self, item: ItemRef) -> bool {
        match item {
            ItemRef::Group(row) => self.group(row).is_some_and(|g| g.selected),
            ItemRef::Leaf(coord) => self.leaf(coord).is_some_and(|l| l.selected),
        }
    }

    /// Applies a selection request to `item`, then propagates.
    ///
    /// The configured [`SelectionMode`] governs how the request combines with
    /// the existing selection: `NoSelection` only honors `current`, and
    /// `SingleSelection` clears before selecting. No-op if `item` is out of
    /// range.
    pub fn select(&mut self, item: ItemRef, flags: SelectionFlags) {
        let in_range = match item {
            ItemRef::Group(row) => self.group_index(row).is_some(),
            ItemRef::Leaf(coord) => self.is_valid(coord),
        };
        if !in_range {
            tracing::trace!(target: targets::SELECTION, ?item, "ignoring selection of out-of-range item");
            return;
        }

        if flags.current {
            if let ItemRef::Leaf(coord) = item {
                self.update_current(Some(coord));
            }
        }

        let mode = self.config.selection_mode;
        if mode == SelectionMode::NoSelection {
            return;
        }

        let before = self.selected_coordinates();
        let clear = flags.clear
            || (mode == SelectionMode::SingleSelection && (flags.select || flags.toggle));
        let target = if flags.select {
            Some(true)
        } else if flags.deselect {
            Some(false)
        } else if flags.toggle {
            Some(!self.is_selected(item))
        } else {
            None
        };

        if clear {
            self.clear_flags();
        }
        if let Some(selected) = target {
            self.set_item_selected(item, selected);
        }
        tracing::debug!(target: targets::SELECTION, ?item, ?flags, "selection request applied");

        self.propagate_selection();
        if self.selected_coordinates() != before {
            self.emit_selection();
        }
    }

    /// Makes `coord` the current leaf and the only selection.
    pub fn set_current(&mut self, coord: Coordinate) {
        self.select(ItemRef::Leaf(coord), SelectionFlags::CLEAR_SELECT_CURRENT);
    }

    /// Deselects everything.
    pub fn clear_selection(&mut self) {
        let had_selection = !self.selected_coordinates().is_empty();
        self.clear_flags();
        if had_selection {
            self.emit_selection();
        }
    }

    /// Re-applies the selection cascades after the selection set changed.
    ///
    /// Idempotent: a second call with no intervening mutation changes
    /// nothing. Emits `selection_changed` if selected leaves were added.
    pub fn on_selection_changed(&mut self) {
        let before = self.selected_coordinates();
        self.propagate_selection();
        if self.selected_coordinates() != before {
            self.emit_selection();
        }
    }

    /// Runs both cascades until a full pass changes nothing.
    ///
    /// Returns `true` if any flag changed.
    #[tracing::instrument(skip_all, target = "thicket::selection", level = "trace")]
    pub(super) fn propagate_selection(&mut self) -> bool {
        let mut changed_any = false;
        loop {
            let mut changed = false;
            for group in &mut self.groups {
                if group.selected {
                    for leaf in group.leaves.iter_mut().filter(|leaf| !leaf.selected) {
                        leaf.selected = true;
                        changed = true;
                    }
                } else if group.all_leaves_selected() {
                    group.selected = true;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
            changed_any = true;
        }
        changed_any
    }

    /// Sets one item's flag, keeping the group/leaf pair from fighting the
    /// cascades on deselection.
    fn set_item_selected(&mut self, item: ItemRef, selected: bool) {
        match item {
            ItemRef::Group(row) => {
                let Some(row) = self.group_index(row) else {
                    return;
                };
                let group = &mut self.groups[row];
                group.selected = selected;
                if !selected {
                    group.leaves.iter_mut().for_each(|leaf| leaf.selected = false);
                }
            }
            ItemRef::Leaf(coord) => {
                let Some((row, col)) = self.locate(coord) else {
                    return;
                };
                let group = &mut self.groups[row];
                group.leaves[col].selected = selected;
                if !selected {
                    group.selected = false;
                }
            }
        }
    }

    fn clear_flags(&mut self) {
        for group in &mut self.groups {
            group.selected = false;
            group.leaves.iter_mut().for_each(|leaf| leaf.selected = false);
        }
    }

    pub(super) fn emit_selection(&self) {
        let selected = self.selected_coordinates();
        tracing::trace!(target: targets::SELECTION, count = selected.len(), "selection changed");
        self.signals.selection_changed.emit(selected);
    }

    pub(super) fn update_current(&mut self, current: Option<Coordinate>) {
        if self.current != current {
            let old = std::mem::replace(&mut self.current, current);
            tracing::trace!(target: targets::SELECTION, ?old, new = ?current, "current changed");
            self.signals.current_changed.emit((current, old));
        }
    }
}
