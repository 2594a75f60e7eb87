//! Native key-code normalization tables, one per backend.
//!
//! Each backend owns exactly one total mapping from its native key
//! identifier space onto [`crate::input::Key`]; anything unmapped yields
//! `Key::Invalid`, never an error. The tables are plain data shared by
//! the backend event pumps so the normalization logic exists once.

pub mod cocoa;
pub mod win32;
pub mod x11;
