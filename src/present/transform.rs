//! Letterbox scaling math and the window/bitmap coordinate mappings.
//!
//! The presented bitmap is scaled to fit the window while preserving its
//! aspect ratio, centered, with border bars on the axis with slack. All
//! three operations here (present rectangle, window->bitmap and
//! bitmap->window point mapping) derive from the same scale and offsets,
//! so the two point mappings are exact inverses of the presentation
//! transform modulo integer truncation.

use serde::{Deserialize, Serialize};

/// How the bitmap is stretched into the letterbox rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// Nearest-neighbour at an integer scale factor, never below 1:1.
    /// A window smaller than the bitmap crops rather than shrinks.
    #[default]
    None,
    /// Bilinear filtering at a real-valued scale factor.
    Linear,
}

/// The letterbox rectangle for one (bitmap, window) pairing, in window
/// pixels. Recomputed from current geometry on every call; no state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    /// Scale factor applied to the bitmap. Integer-valued in
    /// [`Interpolation::None`] mode.
    pub scale: f32,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Letterbox {
    /// Computes the drawn rectangle for a `bitmap_w`x`bitmap_h` bitmap
    /// presented into a `window_w`x`window_h` window.
    ///
    /// Callers must reject zero-size bitmaps before computing the
    /// transform; [`ndc_rect`] and the point mappings do that guard
    /// themselves.
    pub fn compute(
        bitmap_w: i32,
        bitmap_h: i32,
        window_w: i32,
        window_h: i32,
        mode: Interpolation,
    ) -> Letterbox {
        match mode {
            Interpolation::Linear => {
                let hscale = window_w as f32 / bitmap_w as f32;
                let vscale = window_h as f32 / bitmap_h as f32;
                let scale = hscale.min(vscale);

                let hborder = (window_w as f32 - scale * bitmap_w as f32) / 2.0;
                let vborder = (window_h as f32 - scale * bitmap_h as f32) / 2.0;
                Letterbox {
                    scale,
                    x1: hborder,
                    y1: vborder,
                    x2: hborder + scale * bitmap_w as f32,
                    y2: vborder + scale * bitmap_h as f32,
                }
            }
            Interpolation::None => {
                let hscale = window_w / bitmap_w;
                let vscale = window_h / bitmap_h;
                let scale = hscale.min(vscale).max(1);

                let hborder = (window_w - scale * bitmap_w) / 2;
                let vborder = (window_h - scale * bitmap_h) / 2;
                Letterbox {
                    scale: scale as f32,
                    x1: hborder as f32,
                    y1: vborder as f32,
                    x2: (hborder + scale * bitmap_w) as f32,
                    y2: (vborder + scale * bitmap_h) as f32,
                }
            }
        }
    }
}

fn degenerate(bitmap_w: i32, bitmap_h: i32, window_w: i32, window_h: i32) -> bool {
    bitmap_w <= 0 || bitmap_h <= 0 || window_w <= 0 || window_h <= 0
}

/// The letterbox rectangle in normalized device coordinates,
/// `[x1, y1, x2, y2]` in `[-1, 1]` on both axes with Y up, for the GPU
/// quad. Degenerate geometry yields the full viewport.
pub fn ndc_rect(
    bitmap_w: i32,
    bitmap_h: i32,
    window_w: i32,
    window_h: i32,
    mode: Interpolation,
) -> [f32; 4] {
    if degenerate(bitmap_w, bitmap_h, window_w, window_h) {
        return [-1.0, -1.0, 1.0, 1.0];
    }
    let rect = Letterbox::compute(bitmap_w, bitmap_h, window_w, window_h, mode);
    // Window pixels are Y-down; flip so the result is Y-up.
    [
        (rect.x1 / window_w as f32) * 2.0 - 1.0,
        1.0 - (rect.y2 / window_h as f32) * 2.0,
        (rect.x2 / window_w as f32) * 2.0 - 1.0,
        1.0 - (rect.y1 / window_h as f32) * 2.0,
    ]
}

/// Converts a point in window coordinates to the coordinate system of
/// the presented bitmap. Degenerate geometry yields `(0, 0)`.
pub fn window_to_bitmap(
    bitmap_w: i32,
    bitmap_h: i32,
    window_w: i32,
    window_h: i32,
    mode: Interpolation,
    x: i32,
    y: i32,
) -> (i32, i32) {
    if degenerate(bitmap_w, bitmap_h, window_w, window_h) {
        return (0, 0);
    }
    match mode {
        Interpolation::Linear => {
            let hscale = window_w as f32 / bitmap_w as f32;
            let vscale = window_h as f32 / bitmap_h as f32;
            let scale = hscale.min(vscale);
            if scale <= 0.0 {
                return (0, 0);
            }
            let hborder = (window_w as f32 - scale * bitmap_w as f32) / 2.0;
            let vborder = (window_h as f32 - scale * bitmap_h as f32) / 2.0;
            (
                ((x - hborder as i32) as f32 / scale) as i32,
                ((y - vborder as i32) as f32 / scale) as i32,
            )
        }
        Interpolation::None => {
            let scale = (window_w / bitmap_w).min(window_h / bitmap_h).max(1);
            let hborder = (window_w - scale * bitmap_w) / 2;
            let vborder = (window_h - scale * bitmap_h) / 2;
            ((x - hborder) / scale, (y - vborder) / scale)
        }
    }
}

/// Converts a point in bitmap coordinates to window coordinates; the
/// inverse of [`window_to_bitmap`]. Degenerate geometry yields `(0, 0)`.
pub fn bitmap_to_window(
    bitmap_w: i32,
    bitmap_h: i32,
    window_w: i32,
    window_h: i32,
    mode: Interpolation,
    x: i32,
    y: i32,
) -> (i32, i32) {
    if degenerate(bitmap_w, bitmap_h, window_w, window_h) {
        return (0, 0);
    }
    match mode {
        Interpolation::Linear => {
            let hscale = window_w as f32 / bitmap_w as f32;
            let vscale = window_h as f32 / bitmap_h as f32;
            let scale = hscale.min(vscale);
            if scale <= 0.0 {
                return (0, 0);
            }
            let hborder = (window_w as f32 - scale * bitmap_w as f32) / 2.0;
            let vborder = (window_h as f32 - scale * bitmap_h as f32) / 2.0;
            (
                (x as f32 * scale) as i32 + hborder as i32,
                (y as f32 * scale) as i32 + vborder as i32,
            )
        }
        Interpolation::None => {
            let scale = (window_w / bitmap_w).min(window_h / bitmap_h).max(1);
            let hborder = (window_w - scale * bitmap_w) / 2;
            let vborder = (window_h - scale * bitmap_h) / 2;
            (x * scale + hborder, y * scale + vborder)
        }
    }
}
