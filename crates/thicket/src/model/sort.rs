//! Ordering policies for batch operations.
//!
//! A batch request (delete, export, ...) driven by a multi-selection is a
//! list of coordinates that may mix whole-group markers `(row, -1)` with
//! individually named leaves. [`SortPolicy`] resolves such a list into the
//! order the batch should visit it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thicket_core::logging::targets;

use super::coordinate::Coordinate;
use super::tree::{HierarchicalIndexTree, at};

/// How [`HierarchicalIndexTree::sort_coordinates`] orders a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPolicy {
    /// Lexicographic by `(row, col)`, row first.
    Ascending,
    /// Reverse lexicographic by `(row, col)`.
    Descending,
    /// Whole-group markers expand to every leaf of the group; leaves whose
    /// group is also marked are dropped. Input order is kept.
    ParentFirst,
    /// Whole-group markers are dropped; leaves pass through in input order.
    ChildFirst,
}

impl HierarchicalIndexTree {
    /// Orders `coords` according to `policy`.
    ///
    /// Only [`SortPolicy::ParentFirst`] consults the forest: a marker for an
    /// out-of-range group expands to nothing. Nothing is deduplicated, so a
    /// group marked twice expands twice and a repeated leaf stays repeated.
    ///
    /// # Example
    ///
    /// ```
    /// use thicket::{Coordinate, HierarchicalIndexTree, SortPolicy};
    ///
    /// let mut tree = HierarchicalIndexTree::new();
    /// tree.insert(Coordinate::INVALID, "g0", "a", false);
    /// tree.insert(Coordinate::group(0), "", "b", false);
    /// tree.insert(Coordinate::INVALID, "g1", "c", false);
    ///
    /// let request = [Coordinate::group(0), Coordinate::new(0, 1), Coordinate::new(1, 0)];
    /// assert_eq!(
    ///     tree.sort_coordinates(SortPolicy::ParentFirst, &request),
    ///     vec![Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(1, 0)]
    /// );
    /// ```
    pub fn sort_coordinates(&self, policy: SortPolicy, coords: &[Coordinate]) -> Vec<Coordinate> {
        match policy {
            SortPolicy::Ascending => {
                let mut sorted = coords.to_vec();
                sorted.sort();
                sorted
            }
            SortPolicy::Descending => {
                let mut sorted = coords.to_vec();
                sorted.sort_by(|a, b| b.cmp(a));
                sorted
            }
            SortPolicy::ParentFirst => self.expand_group_markers(coords),
            SortPolicy::ChildFirst => coords
                .iter()
                .copied()
                .filter(|coord| !coord.is_group_marker())
                .collect(),
        }
    }

    fn expand_group_markers(&self, coords: &[Coordinate]) -> Vec<Coordinate> {
        let marked: HashSet<i32> = coords
            .iter()
            .filter(|coord| coord.is_group_marker())
            .map(|coord| coord.row)
            .collect();
        let mut resolved = Vec::with_capacity(coords.len());

        for &coord in coords {
            if !coord.is_group_marker() {
                if !marked.contains(&coord.row) {
                    resolved.push(coord);
                }
                continue;
            }
            match self.group_index(coord.row) {
                Some(row) => {
                    resolved.extend((0..self.groups[row].leaves.len()).map(|col| at(row, col)));
                }
                None => {
                    tracing::trace!(target: targets::TREE, %coord, "skipping marker for out-of-range group");
                }
            }
        }
        resolved
    }
}
