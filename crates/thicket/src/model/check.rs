//! Tri-state check values.

use serde::{Deserialize, Serialize};

/// Check state of a tree node.
///
/// Leaves only ever hold `Checked` or `Unchecked`. A group's state is derived
/// from its leaves and is `PartiallyChecked` when they disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckState {
    /// Item is unchecked.
    #[default]
    Unchecked,
    /// Some, but not all, leaves of a group are checked.
    PartiallyChecked,
    /// Item is checked.
    Checked,
}

impl CheckState {
    /// Returns `true` if the item is checked (fully or partially).
    pub fn is_checked(&self) -> bool {
        !matches!(self, CheckState::Unchecked)
    }

    /// Returns `true` if the item is fully checked.
    pub fn is_fully_checked(&self) -> bool {
        matches!(self, CheckState::Checked)
    }

    /// The state a user click moves to.
    ///
    /// `Checked` becomes `Unchecked`; anything else becomes `Checked`.
    pub fn toggle(&self) -> CheckState {
        match self {
            CheckState::Checked => CheckState::Unchecked,
            CheckState::Unchecked | CheckState::PartiallyChecked => CheckState::Checked,
        }
    }

    /// Maps a binary flag to `Checked` / `Unchecked`.
    pub fn from_flag(checked: bool) -> CheckState {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }

    /// Binary flag for this state, or `None` for `PartiallyChecked`.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            CheckState::Checked => Some(true),
            CheckState::Unchecked => Some(false),
            CheckState::PartiallyChecked => None,
        }
    }

    /// Derives a group state from its leaves' flags.
    ///
    /// All checked gives `Checked`, all unchecked gives `Unchecked`, a mix
    /// gives `PartiallyChecked`. An empty sequence is `Unchecked`.
    pub fn from_flags<I>(flags: I) -> CheckState
    where
        I: IntoIterator<Item = bool>,
    {
        let (mut any_checked, mut any_unchecked) = (false, false);
        for flag in flags {
            if flag {
                any_checked = true;
            } else {
                any_unchecked = true;
            }
            if any_checked && any_unchecked {
                return CheckState::PartiallyChecked;
            }
        }
        CheckState::from_flag(any_checked)
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        CheckState::from_flag(checked)
    }
}
