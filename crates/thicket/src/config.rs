//! Tree configuration.
//!
//! [`TreeConfig`] collects the presentation-independent knobs of a
//! [`HierarchicalIndexTree`](crate::HierarchicalIndexTree). It can be built in
//! code or loaded from TOML or JSON:
//!
//! ```toml
//! selection_mode = "extended"
//! expand_new_groups = true
//! group_icon = "folder"
//! leaf_icon = "cloud"
//! ```
//!
//! Missing keys take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thicket_core::logging::targets;

use crate::error::{Error, Result};
use crate::model::SelectionMode;

/// Configuration for a [`HierarchicalIndexTree`](crate::HierarchicalIndexTree).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// How selection requests combine with the existing selection.
    pub selection_mode: SelectionMode,
    /// Mark a group expanded whenever a leaf is inserted into it.
    pub expand_new_groups: bool,
    /// Opaque icon key attached to newly created groups.
    pub group_icon: Option<String>,
    /// Opaque icon key attached to newly created leaves.
    pub leaf_icon: Option<String>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::ExtendedSelection,
            expand_new_groups: true,
            group_icon: None,
            leaf_icon: None,
        }
    }
}

impl TreeConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Serializes this configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads a configuration from a TOML file.
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded TOML config");
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = serde_json::from_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded JSON config");
        Ok(config)
    }

    /// Writes this configuration to a TOML file.
    pub fn save_toml(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        fs::write(path, text).map_err(|e| Error::io(path, e))?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "saved TOML config");
        Ok(())
    }
}
