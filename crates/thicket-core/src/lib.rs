//! Core plumbing for Thicket.
//!
//! This crate provides the pieces shared by Thicket's model layer:
//!
//! - **Signal/Slot System**: Type-safe change notification ([`Signal`])
//! - **Logging**: `tracing` targets and debug-dump formatting options
//!
//! # Signal/Slot Example
//!
//! ```
//! use thicket_core::Signal;
//!
//! // Create a signal that notifies when a row is inserted
//! let row_inserted = Signal::<usize>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = row_inserted.connect(|row| {
//!     println!("Row inserted at: {}", row);
//! });
//!
//! // Emit the signal
//! row_inserted.emit(0);
//!
//! // Disconnect when done
//! row_inserted.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::{TreeFormatOptions, TreeStyle};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
