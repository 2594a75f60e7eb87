//! Normalized input event types shared by all backends.

use super::key::Key;

/// A normalized input event.
///
/// Created by a backend event pump in response to exactly one OS
/// notification, queued in the [`EventQueue`](super::queue::EventQueue),
/// and copied out to the application when it drains the queue.
///
/// `ScrollWheel` and `MouseDelta` are the two high-frequency kinds; the
/// queue may widen the most recently queued event of the same kind in
/// place instead of appending (see the queue's coalescing rules).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A key or mouse button was pressed.
    KeyDown(Key),
    /// A key or mouse button was released.
    KeyUp(Key),
    /// A mouse button was double-clicked.
    DoubleClick(Key),
    /// A character was produced by the active keyboard layout.
    CharTyped(char),
    /// Absolute pointer position, in window coordinates.
    MouseMove { x: i32, y: i32 },
    /// Relative pointer motion, scaled by device resolution so it is
    /// approximately normalized across mice.
    MouseDelta { dx: f32, dy: f32 },
    /// Scroll wheel turn, in clicks. Positive is away from the user.
    ScrollWheel { delta: f32 },
    /// Tablet pen sample, in window coordinates.
    Tablet {
        x: i32,
        y: i32,
        /// Pen pressure in `[0, 1]`.
        pressure: f32,
        /// Pen tip touching the surface.
        tip: bool,
        /// Lower barrel button held.
        lower: bool,
        /// Upper barrel button held.
        upper: bool,
    },
}
