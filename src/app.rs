//! Application facade tying the backend, queue and transform together.

use log::warn;

use crate::backend::{PlatformBackend, PumpStatus, ScreenMode};
use crate::display::Display;
use crate::error::Error;
use crate::input::{Event, EventQueue};
use crate::present::{self, Interpolation, ndc_rect};
use crate::sound::RingBuffer;

/// Run state reported by [`App::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    /// The user asked to close the window. The application may honor it
    /// or call [`App::cancel_exit`].
    ExitRequested,
}

/// One window, one bitmap surface, one input stream.
///
/// Owns the backend and the event queue and runs the poll cycle: pump
/// the backend, let the application drain [`App::input`], then
/// [`App::present`] the next frame. Everything is main-thread and
/// synchronous except the sound ring position.
pub struct App<B: PlatformBackend> {
    backend: B,
    queue: EventQueue,
    interpolation: Interpolation,
    exit_requested: bool,
    sound: Option<RingBuffer>,
}

impl<B: PlatformBackend> App<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            queue: EventQueue::new(),
            interpolation: Interpolation::default(),
            exit_requested: false,
            sound: None,
        }
    }

    /// Pumps the backend once and reports the run state. Call once per
    /// frame, before draining input.
    pub fn poll(&mut self) -> Result<AppState, Error> {
        if self.backend.pump(&mut self.queue)? == PumpStatus::ExitRequested {
            self.exit_requested = true;
        }
        Ok(self.state())
    }

    pub fn state(&self) -> AppState {
        if self.exit_requested {
            AppState::ExitRequested
        } else {
            AppState::Normal
        }
    }

    /// Withdraws a pending exit request, e.g. after an "unsaved
    /// changes" prompt.
    pub fn cancel_exit(&mut self) {
        self.exit_requested = false;
    }

    /// Drains all queued input events, in arrival order. Once per poll.
    pub fn input(&mut self) -> Vec<Event> {
        self.queue.drain()
    }

    /// Total input events dropped to queue overflow since start.
    pub fn input_overflow_count(&self) -> u64 {
        self.queue.overflow_count()
    }

    /// Presents `pixels` (row-major `width * height`) letterboxed into
    /// the window under the current interpolation mode. A zero-size
    /// bitmap is skipped with a warning rather than treated as fatal.
    pub fn present(&mut self, pixels: &[u32], width: i32, height: i32) -> Result<(), Error> {
        if width <= 0 || height <= 0 {
            warn!("skipping present of zero-size bitmap ({width}x{height})");
            return Ok(());
        }
        let (window_w, window_h) = self.backend.window_size();
        let rect = ndc_rect(width, height, window_w, window_h, self.interpolation);
        self.backend
            .present(pixels, width, height, rect, self.interpolation)
    }

    pub fn set_interpolation(&mut self, mode: Interpolation) {
        self.interpolation = mode;
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Maps a point in window coordinates into the coordinate system of
    /// a `width`x`height` bitmap presented under the current mode.
    pub fn window_to_bitmap(&self, width: i32, height: i32, x: i32, y: i32) -> (i32, i32) {
        let (window_w, window_h) = self.backend.window_size();
        present::window_to_bitmap(width, height, window_w, window_h, self.interpolation, x, y)
    }

    /// Inverse of [`App::window_to_bitmap`].
    pub fn bitmap_to_window(&self, width: i32, height: i32, x: i32, y: i32) -> (i32, i32) {
        let (window_w, window_h) = self.backend.window_size();
        present::bitmap_to_window(width, height, window_w, window_h, self.interpolation, x, y)
    }

    pub fn set_title(&mut self, title: &str) {
        self.backend.set_title(title);
    }

    pub fn window_size(&self) -> (i32, i32) {
        self.backend.window_size()
    }

    pub fn set_window_size(&mut self, width: i32, height: i32) {
        self.backend.set_window_size(width, height);
    }

    pub fn window_pos(&self) -> (i32, i32) {
        self.backend.window_pos()
    }

    pub fn set_window_pos(&mut self, x: i32, y: i32) {
        self.backend.set_window_pos(x, y);
    }

    pub fn screenmode(&self) -> ScreenMode {
        self.backend.screenmode()
    }

    pub fn set_screenmode(&mut self, mode: ScreenMode) {
        self.backend.set_screenmode(mode);
    }

    pub fn pointer_pos(&self) -> (i32, i32) {
        self.backend.pointer_pos()
    }

    pub fn set_pointer_pos(&mut self, x: i32, y: i32) {
        self.backend.set_pointer_pos(x, y);
    }

    pub fn displays(&self) -> &[Display] {
        self.backend.displays()
    }

    /// Opens the looping sound stream position tracker with a ring of
    /// `sample_pairs` stereo frames. Replaces any previous stream.
    pub fn open_sound(&mut self, sample_pairs: u64) -> &RingBuffer {
        self.sound.insert(RingBuffer::new(sample_pairs))
    }

    /// The sound stream position tracker, if one is open.
    pub fn sound(&self) -> Option<&RingBuffer> {
        self.sound.as_ref()
    }

    /// Sets playback volume on the open stream; no-op without one.
    pub fn set_sound_volume(&self, volume: f32) {
        if let Some(sound) = &self.sound {
            sound.set_volume(volume);
        }
    }

    /// Direct backend access, for backend-specific calls.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::headless::{HeadlessBackend, Notification};
    use crate::input::Key;

    fn scripted_app(notifications: &[Notification]) -> App<HeadlessBackend> {
        let mut backend = HeadlessBackend::new(320, 200);
        backend.script(notifications.iter().copied());
        App::new(backend)
    }

    #[test]
    fn poll_then_input_round_trip() {
        let mut app = scripted_app(&[
            Notification::FocusGained,
            Notification::KeyDown { vk: 0x41, extended: false },
            Notification::Wheel { delta: 1.0 },
            Notification::Wheel { delta: 2.0 },
        ]);
        assert_eq!(app.poll().unwrap(), AppState::Normal);
        assert_eq!(
            app.input(),
            vec![
                Event::KeyDown(Key::A),
                Event::ScrollWheel { delta: 3.0 },
            ]
        );
        assert!(app.input().is_empty());
    }

    #[test]
    fn exit_can_be_cancelled() {
        let mut app = scripted_app(&[Notification::CloseRequested]);
        assert_eq!(app.poll().unwrap(), AppState::ExitRequested);
        app.cancel_exit();
        assert_eq!(app.state(), AppState::Normal);
    }

    #[test]
    fn present_computes_the_letterbox_rect() {
        let mut app = App::new(HeadlessBackend::new(320, 200));
        app.set_interpolation(Interpolation::Linear);
        let pixels = vec![0u32; 320 * 200];
        app.present(&pixels, 320, 200).unwrap();
        // Exact aspect match: the quad fills the window.
        assert_eq!(
            app.backend_mut().last_rect(),
            Some([-1.0, -1.0, 1.0, 1.0])
        );
    }

    #[test]
    fn zero_size_bitmap_is_skipped_not_fatal() {
        let mut app = App::new(HeadlessBackend::new(320, 200));
        app.present(&[], 0, 0).unwrap();
        assert_eq!(app.backend_mut().present_count(), 0);
    }

    #[test]
    fn coordinate_mappings_use_live_geometry() {
        let mut app = App::new(HeadlessBackend::new(1000, 800));
        app.set_interpolation(Interpolation::None);
        // pixel_scale 3, borders 20/100.
        assert_eq!(app.bitmap_to_window(320, 200, 0, 0), (20, 100));
        assert_eq!(app.window_to_bitmap(320, 200, 20, 100), (0, 0));
    }

    #[test]
    fn sound_tracker_is_optional() {
        let mut app = App::new(HeadlessBackend::new(320, 200));
        assert!(app.sound().is_none());
        app.open_sound(4096);
        app.set_sound_volume(0.5);
        assert_eq!(app.sound().unwrap().volume_step(), 128);
    }
}
