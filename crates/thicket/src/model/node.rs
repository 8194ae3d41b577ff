//! Group and leaf nodes.
//!
//! Nodes are owned by the [`HierarchicalIndexTree`](super::HierarchicalIndexTree)
//! and handed out as shared references for inspection. All mutation goes
//! through the tree so that check and selection cascades always run.

use super::check::CheckState;

/// A second-level node: the only kind carrying its own check flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub(crate) label: String,
    pub(crate) icon: Option<String>,
    pub(crate) checked: bool,
    pub(crate) selected: bool,
}

impl Leaf {
    /// New leaves start checked and unselected.
    pub(crate) fn new(label: impl Into<String>, icon: Option<String>) -> Self {
        Self {
            label: label.into(),
            icon,
            checked: true,
            selected: false,
        }
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Opaque icon key supplied at insertion time.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Whether the leaf's check flag is set.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// The leaf's check flag as a [`CheckState`].
    pub fn check_state(&self) -> CheckState {
        CheckState::from_flag(self.checked)
    }

    /// Whether the leaf is selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// A top-level node owning an ordered, non-empty sequence of leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub(crate) label: String,
    pub(crate) icon: Option<String>,
    pub(crate) selected: bool,
    pub(crate) expanded: bool,
    pub(crate) leaves: Vec<Leaf>,
}

impl Group {
    pub(crate) fn new(label: impl Into<String>, icon: Option<String>, first: Leaf) -> Self {
        Self {
            label: label.into(),
            icon,
            selected: false,
            expanded: false,
            leaves: vec![first],
        }
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Opaque icon key supplied at creation time.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Whether the group itself is selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the group is shown expanded.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// The group's leaves in order.
    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// The leaf at `col`, if in range.
    pub fn leaf(&self, col: usize) -> Option<&Leaf> {
        self.leaves.get(col)
    }

    /// Tri-state derived from the leaves' check flags; never stored.
    pub fn check_state(&self) -> CheckState {
        CheckState::from_flags(self.leaves.iter().map(|leaf| leaf.checked))
    }

    /// Whether every leaf is selected.
    pub(crate) fn all_leaves_selected(&self) -> bool {
        self.leaves.iter().all(|leaf| leaf.selected)
    }
}
