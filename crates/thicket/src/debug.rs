//! Debug rendering of a forest.
//!
//! [`ForestDump`] renders a tree as indented text, which is handy in logs
//! and test failure messages:
//!
//! ```text
//! Forest (2 groups, 3 leaves):
//!   [-] site_a
//!   ├── [x] scan_01 *
//!   └── [ ] scan_02
//!   [x] site_b
//!   └── [x] scan_03
//! ```
//!
//! `[x]`, `[-]` and `[ ]` show the check state; `*` marks selected nodes.

use std::fmt;

use thicket_core::TreeFormatOptions;

use crate::model::{CheckState, Coordinate, HierarchicalIndexTree};

/// Display adapter rendering a [`HierarchicalIndexTree`] as text.
#[derive(Debug, Clone)]
pub struct ForestDump<'a> {
    tree: &'a HierarchicalIndexTree,
    options: TreeFormatOptions,
}

impl<'a> ForestDump<'a> {
    /// Creates a dump of `tree` with default options.
    pub fn new(tree: &'a HierarchicalIndexTree) -> Self {
        Self::with_options(tree, TreeFormatOptions::default())
    }

    /// Creates a dump of `tree` with custom options.
    pub fn with_options(tree: &'a HierarchicalIndexTree, options: TreeFormatOptions) -> Self {
        Self { tree, options }
    }

    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        coord: Coordinate,
        state: CheckState,
        label: &str,
        selected: bool,
    ) -> fmt::Result {
        if self.options.show_coordinates {
            write!(f, "{coord} ")?;
        }
        if self.options.show_check_state {
            let mark = match state {
                CheckState::Checked => "[x]",
                CheckState::PartiallyChecked => "[-]",
                CheckState::Unchecked => "[ ]",
            };
            write!(f, "{mark} ")?;
        }
        f.write_str(label)?;
        if self.options.show_selection && selected {
            f.write_str(" *")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ForestDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = self.tree.groups();
        let leaf_count: usize = groups.iter().map(|g| g.leaf_count()).sum();
        writeln!(f, "Forest ({} groups, {} leaves):", groups.len(), leaf_count)?;

        let indent = " ".repeat(self.options.indent_size);
        if groups.is_empty() {
            return writeln!(f, "{indent}(empty)");
        }

        let (branch, last) = self.options.style.connectors();
        for (row, group) in groups.iter().enumerate() {
            let row = row as i32;
            f.write_str(&indent)?;
            self.write_node(
                f,
                Coordinate::group(row),
                group.check_state(),
                group.label(),
                group.is_selected(),
            )?;

            let count = group.leaf_count();
            for (col, leaf) in group.leaves().iter().enumerate() {
                let connector = if col + 1 == count { last } else { branch };
                write!(f, "{indent}{connector} ")?;
                self.write_node(
                    f,
                    Coordinate::new(row, col as i32),
                    leaf.check_state(),
                    leaf.label(),
                    leaf.is_selected(),
                )?;
            }
        }
        Ok(())
    }
}

impl HierarchicalIndexTree {
    /// Renders the forest with default [`TreeFormatOptions`].
    pub fn dump(&self) -> ForestDump<'_> {
        ForestDump::new(self)
    }

    /// Renders the forest with custom options.
    pub fn dump_with(&self, options: TreeFormatOptions) -> ForestDump<'_> {
        ForestDump::with_options(self, options)
    }
}
