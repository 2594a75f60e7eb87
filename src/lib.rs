//! Cross-platform single-window framebuffer shim.
//!
//! Gives an application one window, one presentable pixel buffer, one
//! looping audio stream position, and one normalized input stream,
//! hiding the platform backend behind [`backend::PlatformBackend`]. The
//! platform-independent core every backend shares:
//!
//! - [`input`]: the bounded event queue with focus gating and
//!   scroll/delta coalescing;
//! - [`keymap`]: total native-code -> [`input::Key`] tables per backend;
//! - [`present`]: letterbox scaling and the window/bitmap coordinate
//!   mappings.

pub mod app;
pub mod backend;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod keymap;
pub mod present;
pub mod sound;

pub use app::{App, AppState};
pub use config::Config;
pub use error::Error;
