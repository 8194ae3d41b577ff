//! Positional addressing for groups and leaves.
//!
//! A [`Coordinate`] locates a leaf by the position of its group in the forest
//! (`row`) and its position inside that group (`col`). A `col` of
//! [`Coordinate::GROUP_COL`] stands for the group as a whole; such markers are
//! only meaningful to [`SortPolicy`](super::SortPolicy) routing and are never
//! valid leaf addresses.
//!
//! # Coordinate Validity
//!
//! Coordinates are positions, not identities. Any insertion or removal that
//! changes a sequence's length shifts the coordinates of later items in that
//! sequence, so coordinates should be re-derived after every mutation rather
//! than stored.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(row, col)` position in a two-level forest.
///
/// Ordering is lexicographic with `row` as the primary key, which is the
/// order [`SortPolicy::Ascending`](super::SortPolicy::Ascending) produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Position of the group in the forest.
    pub row: i32,
    /// Position of the leaf in its group, or [`Coordinate::GROUP_COL`].
    pub col: i32,
}

impl Coordinate {
    /// Column value denoting "the group itself".
    pub const GROUP_COL: i32 = -1;

    /// A coordinate that is out of range for every forest.
    ///
    /// Passing this to [`insert`](super::HierarchicalIndexTree::insert)
    /// appends a new group.
    pub const INVALID: Self = Self { row: -1, col: -1 };

    /// Creates a coordinate from a row and column.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Creates a whole-group marker `(row, -1)`.
    #[inline]
    pub const fn group(row: i32) -> Self {
        Self {
            row,
            col: Self::GROUP_COL,
        }
    }

    /// Returns `true` if this coordinate marks a whole group.
    #[inline]
    pub const fn is_group_marker(&self) -> bool {
        self.col == Self::GROUP_COL
    }

    /// Returns the whole-group marker for this coordinate's row.
    #[inline]
    pub const fn to_group(self) -> Self {
        Self::group(self.row)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A reference to a node, tagged with its kind.
///
/// Operations that behave differently for groups and leaves
/// ([`on_item_clicked`](super::HierarchicalIndexTree::on_item_clicked),
/// [`coordinates_under`](super::HierarchicalIndexTree::coordinates_under),
/// [`select`](super::HierarchicalIndexTree::select)) take an `ItemRef` so the
/// branch is decided by the caller's tag rather than by inspecting the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemRef {
    /// The group at the given row.
    Group(i32),
    /// The leaf at the given coordinate.
    Leaf(Coordinate),
}

impl ItemRef {
    /// Creates a leaf reference.
    #[inline]
    pub const fn leaf(row: i32, col: i32) -> Self {
        ItemRef::Leaf(Coordinate::new(row, col))
    }

    /// Returns the row of the group this item is, or belongs to.
    #[inline]
    pub const fn row(&self) -> i32 {
        match self {
            ItemRef::Group(row) => *row,
            ItemRef::Leaf(coord) => coord.row,
        }
    }

    /// Returns the coordinate of this item; groups map to `(row, -1)`.
    #[inline]
    pub const fn coordinate(&self) -> Coordinate {
        match self {
            ItemRef::Group(row) => Coordinate::group(*row),
            ItemRef::Leaf(coord) => *coord,
        }
    }

    /// Returns `true` if this refers to a group.
    #[inline]
    pub const fn is_group(&self) -> bool {
        matches!(self, ItemRef::Group(_))
    }
}

impl From<Coordinate> for ItemRef {
    /// Whole-group markers become [`ItemRef::Group`], everything else a leaf.
    fn from(coord: Coordinate) -> Self {
        if coord.is_group_marker() {
            ItemRef::Group(coord.row)
        } else {
            ItemRef::Leaf(coord)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_row_major() {
        let mut coords = vec![
            Coordinate::new(1, 0),
            Coordinate::new(0, 2),
            Coordinate::group(1),
            Coordinate::new(0, 0),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 2),
                Coordinate::group(1),
                Coordinate::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_group_marker() {
        let marker = Coordinate::group(3);
        assert!(marker.is_group_marker());
        assert_eq!(Coordinate::new(3, 5).to_group(), marker);
        assert!(!Coordinate::new(3, 0).is_group_marker());
    }

    #[test]
    fn test_item_ref_from_coordinate() {
        assert_eq!(ItemRef::from(Coordinate::group(2)), ItemRef::Group(2));
        assert_eq!(ItemRef::from(Coordinate::new(2, 1)), ItemRef::leaf(2, 1));
        assert_eq!(ItemRef::Group(4).coordinate(), Coordinate::new(4, -1));
        assert_eq!(ItemRef::leaf(4, 1).row(), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(0, -1).to_string(), "(0, -1)");
    }
}
