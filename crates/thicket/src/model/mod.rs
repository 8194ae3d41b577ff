//! The two-level item index.
//!
//! This module provides a forest of groups, each owning an ordered run of
//! checkable leaves, addressed by positional coordinates. It is the data side
//! of a grouped check-list view: a view renders it, forwards clicks and
//! selection requests, and reads back the coordinates the user picked.
//!
//! # Core Types
//!
//! - `Coordinate`: `(row, col)` position of a leaf, or `(row, -1)` for a whole group
//! - `ItemRef`: Either a group or a leaf, as the target of a click or selection
//! - `CheckState`: Binary for leaves, tri-state (derived) for groups
//! - `HierarchicalIndexTree`: The forest and all its operations
//! - `TreeSignals`: Change notifications
//!
//! # Cascades
//!
//! ```text
//!             check (down)            select (down)
//!   Group ───────────────────> Leaf ───────────────────> Leaf
//!     ^                         │
//!     └─────────────────────────┘
//!       re-derive check (up), all-selected => group selected (up)
//! ```
//!
//! # Example
//!
//! ```
//! use thicket::{Coordinate, HierarchicalIndexTree};
//!
//! let mut tree = HierarchicalIndexTree::new();
//! tree.insert(Coordinate::INVALID, "site_a", "scan_01", false);
//! tree.insert(Coordinate::group(0), "", "scan_02", false);
//! tree.insert(Coordinate::INVALID, "site_b", "scan_03", false);
//!
//! tree.signals().check_state_changed.connect(|(item, state)| {
//!     println!("{item:?} is now {state:?}");
//! });
//!
//! tree.set_group_checked(0, false);
//! assert_eq!(tree.checked_coordinates(), vec![Coordinate::new(1, 0)]);
//!
//! // Drop site_a and scan_03 in one batch.
//! let removed = tree.remove_many(&[Coordinate::group(0), Coordinate::new(1, 0)]);
//! assert_eq!(removed, 3);
//! assert!(tree.is_empty());
//! ```

mod check;
mod coordinate;
mod node;
mod selection;
mod signals;
mod sort;
mod tree;

pub use check::CheckState;
pub use coordinate::{Coordinate, ItemRef};
pub use node::{Group, Leaf};
pub use selection::{SelectionFlags, SelectionMode};
pub use signals::TreeSignals;
pub use sort::SortPolicy;
pub use tree::HierarchicalIndexTree;
