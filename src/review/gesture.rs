// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture classification and drag tracking.
//!
//! Classification is a pure function of the two gesture endpoints so it can
//! be tested without a rendering surface. Only the net horizontal
//! displacement matters; intermediate points, velocity, and momentum are
//! deliberately ignored.

use iced::Point;

/// Net horizontal displacement (in logical pixels) required before a drag
/// counts as a swipe rather than a tap.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Direction of a classified swipe judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Card judged wrong.
    Left,
    /// Card judged right.
    Right,
}

/// Classifies a horizontal drag by its endpoints.
///
/// Returns `None` when the displacement stays within `(-threshold,
/// threshold)`; such a drag is treated as a tap and ignored by the swipe
/// policy.
pub fn classify(start_x: f32, end_x: f32, threshold: f32) -> Option<SwipeDirection> {
    let delta = end_x - start_x;
    if delta <= -threshold {
        Some(SwipeDirection::Left)
    } else if delta >= threshold {
        Some(SwipeDirection::Right)
    } else {
        None
    }
}

/// Tracks one press-drag-release interaction on the quiz card surface.
///
/// The view reports cursor movement and press/release edges; the tracker
/// remembers where the press happened and hands the endpoints to
/// [`classify`] on release.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    /// Last cursor position reported over the surface.
    cursor: Option<Point>,
    /// Position where the active press started, if any.
    start: Option<Point>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records cursor movement over the gesture surface.
    pub fn cursor_moved(&mut self, position: Point) {
        self.cursor = Some(position);
    }

    /// Starts a gesture at the last known cursor position.
    pub fn pressed(&mut self) {
        self.start = self.cursor;
    }

    /// Whether a press is currently being tracked.
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Ends the gesture and classifies it.
    ///
    /// Returns `None` for taps, for releases without a matching press, and
    /// when no cursor position was ever reported.
    pub fn released(&mut self, threshold: f32) -> Option<SwipeDirection> {
        let start = self.start.take()?;
        let end = self.cursor?;
        classify(start.x, end.x, threshold)
    }

    /// Abandons the current gesture without classifying it.
    pub fn cancel(&mut self) {
        self.start = None;
    }
}
