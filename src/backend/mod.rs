//! Platform backends.
//!
//! One interface, one implementation per OS. A backend owns the native
//! window and translates native notifications into normalized events
//! through the shared key maps and [`EventQueue`]; everything the
//! application sees goes through [`PlatformBackend`], so the input and
//! coordinate core stays identical across platforms. Only the headless
//! backend ships here; OS backends are window-system choreography behind
//! the same trait.

pub mod headless;

use crate::display::Display;
use crate::error::Error;
use crate::input::EventQueue;
use crate::present::Interpolation;

/// Whether the window covers a whole display or is a regular window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenMode {
    #[default]
    Window,
    Fullscreen,
}

/// Outcome of one pump pass over the native event queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpStatus {
    /// Keep running.
    Continue,
    /// The user asked to close the window.
    ExitRequested,
}

/// The contract every platform backend implements.
///
/// All methods run on the application's main thread; `pump` drains the
/// native event queue fully and must happen before the application
/// drains the [`EventQueue`].
pub trait PlatformBackend {
    fn set_title(&mut self, title: &str);

    /// Client-area size in pixels. In fullscreen mode this is the
    /// display resolution.
    fn window_size(&self) -> (i32, i32);
    fn set_window_size(&mut self, width: i32, height: i32);

    fn window_pos(&self) -> (i32, i32);
    fn set_window_pos(&mut self, x: i32, y: i32);

    fn screenmode(&self) -> ScreenMode;
    fn set_screenmode(&mut self, mode: ScreenMode);

    /// Pointer position in window coordinates.
    fn pointer_pos(&self) -> (i32, i32);
    fn set_pointer_pos(&mut self, x: i32, y: i32);

    /// Attached displays, at most [`MAX_DISPLAYS`](crate::display::MAX_DISPLAYS).
    fn displays(&self) -> &[Display];

    /// Translates pending native notifications into normalized events.
    fn pump(&mut self, queue: &mut EventQueue) -> Result<PumpStatus, Error>;

    /// Draws `pixels` (row-major, `width * height`) into the letterbox
    /// rectangle `rect` (normalized device coordinates, Y up).
    fn present(
        &mut self,
        pixels: &[u32],
        width: i32,
        height: i32,
        rect: [f32; 4],
        mode: Interpolation,
    ) -> Result<(), Error>;
}

/// Capability object for the GPU entry points the presentation path
/// needs. Resolved once at startup by the backend (dynamic symbol
/// binding on the OS backends) and injected into the present call.
pub trait GraphicsApi {
    /// Texture-maps `pixels` onto a quad covering `rect` in normalized
    /// device coordinates, filtered per `mode`.
    fn draw_quad(
        &mut self,
        pixels: &[u32],
        width: i32,
        height: i32,
        rect: [f32; 4],
        mode: Interpolation,
    ) -> Result<(), Error>;
}
