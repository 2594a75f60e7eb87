//! Presentation: letterbox geometry and coordinate conversion.

pub mod transform;

pub use transform::{Interpolation, Letterbox, bitmap_to_window, ndc_rect, window_to_bitmap};
