//! Thicket - a two-level checkable item index.
//!
//! Thicket keeps an ordered forest of groups, each holding an ordered run of
//! checkable leaves, and keeps check and selection state consistent between
//! the two levels. It is the data half of a grouped check-list view (sites
//! and their scans, folders and their files): the view forwards clicks and
//! selection requests, and asks back which leaves are checked or selected.
//!
//! - [`HierarchicalIndexTree`]: The forest and its operations
//! - [`SortPolicy`]: Orders a mixed list of group markers and leaves for a batch
//! - [`TreeConfig`]: Selection mode, expansion and icon defaults, loadable from TOML/JSON
//! - [`ForestDump`]: Text rendering for logs and tests
//!
//! # Example
//!
//! ```
//! use thicket::{CheckState, Coordinate, HierarchicalIndexTree, ItemRef};
//!
//! let mut tree = HierarchicalIndexTree::new();
//! tree.insert(Coordinate::INVALID, "G1", "L1", true);
//! tree.insert(Coordinate::group(0), "", "L2", false);
//!
//! // Unchecking one leaf leaves the group partially checked.
//! tree.on_item_clicked(ItemRef::leaf(0, 1), CheckState::Unchecked);
//! assert_eq!(
//!     tree.check_state(ItemRef::Group(0)),
//!     Some(CheckState::PartiallyChecked)
//! );
//!
//! println!("{}", tree.dump());
//! ```
//!
//! # Logging
//!
//! All operations log through `tracing` under the `thicket::*` targets (see
//! [`thicket_core::logging::targets`]). No subscriber is installed by the
//! library.

pub mod config;
pub mod debug;
pub mod error;
pub mod model;

pub use config::TreeConfig;
pub use debug::ForestDump;
pub use error::{Error, Result};
pub use model::{
    CheckState, Coordinate, Group, HierarchicalIndexTree, ItemRef, Leaf, SelectionFlags,
    SelectionMode, SortPolicy, TreeSignals,
};
pub use thicket_core::{ConnectionGuard, ConnectionId, Signal, TreeFormatOptions, TreeStyle};
