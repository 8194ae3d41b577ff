//! Change notifications emitted by the tree.

use thicket_core::Signal;

use super::check::CheckState;
use super::coordinate::{Coordinate, ItemRef};

/// Signals emitted by a [`HierarchicalIndexTree`](super::HierarchicalIndexTree).
///
/// All signals fire synchronously after the tree has reached a consistent
/// state, so slots observe post-cascade values. Coordinates carried by a
/// signal are valid only at the moment of emission.
#[derive(Debug, Default)]
pub struct TreeSignals {
    // -------------------------------------------------------------------------
    // Shape signals
    // -------------------------------------------------------------------------
    /// Emitted after a new group was appended. Args: group row.
    pub group_inserted: Signal<usize>,

    /// Emitted after a leaf was inserted, including the first leaf of a new
    /// group. Args: the leaf's coordinate.
    pub leaf_inserted: Signal<Coordinate>,

    /// Emitted after a group was removed together with its last leaf.
    /// Args: the row it occupied.
    pub group_removed: Signal<usize>,

    /// Emitted after a leaf was removed from a group that survives.
    /// Args: the coordinate it occupied.
    pub leaf_removed: Signal<Coordinate>,

    /// Emitted after the whole forest was cleared.
    pub reset: Signal<()>,

    // -------------------------------------------------------------------------
    // State signals
    // -------------------------------------------------------------------------
    /// Emitted when a node's displayed check state changes.
    /// Args: (node, new state)
    pub check_state_changed: Signal<(ItemRef, CheckState)>,

    /// Emitted when the set of selected leaves changes.
    /// Args: every selected leaf coordinate, row-major.
    pub selection_changed: Signal<Vec<Coordinate>>,

    /// Emitted when the current leaf changes.
    /// Args: (new, old)
    pub current_changed: Signal<(Option<Coordinate>, Option<Coordinate>)>,
}

impl TreeSignals {
    /// Creates a signal bundle with no connections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks or unblocks every signal in the bundle.
    pub fn set_blocked(&self, blocked: bool) {
        self.group_inserted.set_blocked(blocked);
        self.leaf_inserted.set_blocked(blocked);
        self.group_removed.set_blocked(blocked);
        self.leaf_removed.set_blocked(blocked);
        self.reset.set_blocked(blocked);
        self.check_state_changed.set_blocked(blocked);
        self.selection_changed.set_blocked(blocked);
        self.current_changed.set_blocked(blocked);
    }
}
