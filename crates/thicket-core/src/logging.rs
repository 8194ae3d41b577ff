//! Logging and debugging facilities for Thicket.
//!
//! Thicket uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("thicket=debug")
//!         .init();
//! }
//! ```
//!
//! The [`targets`] constants can be used in filter directives to narrow
//! output to one subsystem, e.g. `thicket::selection=trace`.

/// Target names for log filtering.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "thicket_core::signal";
    /// Forest shape changes (insert, remove, clear).
    pub const TREE: &str = "thicket::tree";
    /// Check-state propagation.
    pub const CHECK: &str = "thicket::check";
    /// Selection propagation and current-item tracking.
    pub const SELECTION: &str = "thicket::selection";
    /// Configuration loading.
    pub const CONFIG: &str = "thicket::config";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact single-line representation.
    Compact,
}

impl TreeStyle {
    /// Connector strings for this style: `(branch, last branch)`.
    pub fn connectors(self) -> (&'static str, &'static str) {
        match self {
            TreeStyle::Ascii => ("+--", "`--"),
            TreeStyle::Unicode => ("\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("-", "-"),
        }
    }
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to prefix each node with its coordinate.
    pub show_coordinates: bool,
    /// Whether to mark check state (`[x]`, `[-]`, `[ ]`).
    pub show_check_state: bool,
    /// Whether to mark selected nodes with `*`.
    pub show_selection: bool,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_coordinates: false,
            show_check_state: true,
            show_selection: true,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_coordinates: true,
            ..Default::default()
        }
    }

    /// Create options for minimal output: labels only.
    pub fn minimal() -> Self {
        Self {
            show_coordinates: false,
            show_check_state: false,
            show_selection: false,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_unicode() {
        assert_eq!(TreeStyle::default(), TreeStyle::Unicode);
        assert_eq!(TreeStyle::Ascii.connectors(), ("+--", "`--"));
    }

    #[test]
    fn test_option_presets() {
        assert!(TreeFormatOptions::detailed().show_coordinates);
        let minimal = TreeFormatOptions::minimal();
        assert!(!minimal.show_check_state);
        assert!(!minimal.show_selection);
    }
}
