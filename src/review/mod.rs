// SPDX-License-Identifier: MPL-2.0
//! Card review state management.
//!
//! This module owns every piece of review state that is independent of the
//! rendering layer:
//!
//! - [`session`] - Full quiz session (position, reveal, right/wrong tallies)
//! - [`gesture`] - Horizontal swipe classification and drag tracking
//! - [`flips`] - Per-card reveal flags for the plain carousel
//!
//! The UI layer drives these types through discrete messages and renders
//! from their read-only accessors; no review logic lives in the views.

pub mod flips;
pub mod gesture;
pub mod session;

// Re-export commonly used types for convenience
pub use flips::CardFlips;
pub use gesture::{SwipeDirection, SwipeTracker, DEFAULT_SWIPE_THRESHOLD};
pub use session::{ReviewSession, Snapshot};
