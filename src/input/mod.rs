//! Normalized input: key identifiers, event types, and the bounded queue.
//!
//! Backends translate native OS notifications into [`Event`]s (via the
//! key maps in [`crate::keymap`]) and append them to an [`EventQueue`];
//! the application drains the queue once per poll.

pub mod events;
pub mod key;
pub mod queue;

pub use events::Event;
pub use key::Key;
pub use queue::{EventQueue, QUEUE_CAPACITY};
