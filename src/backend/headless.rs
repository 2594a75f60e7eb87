//! Headless backend: no OS window, no GPU, full event semantics.
//!
//! Serves two purposes: a null platform for machines without a window
//! system (batch runs, CI), and a scriptable harness for exercising the
//! normalization core end to end. Notifications are queued with
//! [`HeadlessBackend::notify`] in the shape the Win32-style pump sees
//! them and are translated through the shared key map on `pump`.

use std::collections::VecDeque;

use log::debug;

use crate::display::{Display, DisplayList};
use crate::error::Error;
use crate::input::{Event, EventQueue};
use crate::keymap::win32::{self, Side};
use crate::present::Interpolation;

use super::{GraphicsApi, PlatformBackend, PumpStatus, ScreenMode};

/// A raw notification, as the native layer would deliver it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification {
    FocusGained,
    FocusLost,
    CloseRequested,
    Resized { width: i32, height: i32 },
    KeyDown { vk: u8, extended: bool },
    KeyUp { vk: u8, extended: bool },
    Char { ch: char },
    DoubleClick { vk: u8 },
    MouseMove { x: i32, y: i32 },
    MouseDelta { dx: f32, dy: f32 },
    Wheel { delta: f32 },
    Tablet {
        x: i32,
        y: i32,
        pressure: f32,
        tip: bool,
        lower: bool,
        upper: bool,
    },
}

/// Backend with window-geometry bookkeeping but no window.
pub struct HeadlessBackend {
    title: String,
    width: i32,
    height: i32,
    windowed_size: (i32, i32),
    x: i32,
    y: i32,
    screenmode: ScreenMode,
    pointer: (i32, i32),
    displays: DisplayList,
    feed: VecDeque<Notification>,
    graphics: Option<Box<dyn GraphicsApi>>,
    last_rect: Option<[f32; 4]>,
    present_count: u64,
}

/// Resolution reported for the synthetic display.
const DISPLAY_SIZE: (i32, i32) = (1920, 1080);

impl HeadlessBackend {
    pub fn new(width: i32, height: i32) -> Self {
        let mut displays = DisplayList::new();
        displays.push(Display {
            id: "headless-0".into(),
            x: 0,
            y: 0,
            width: DISPLAY_SIZE.0,
            height: DISPLAY_SIZE.1,
        });
        Self {
            title: String::new(),
            width,
            height,
            windowed_size: (width, height),
            x: 0,
            y: 0,
            screenmode: ScreenMode::Window,
            pointer: (0, 0),
            displays,
            feed: VecDeque::new(),
            graphics: None,
            last_rect: None,
            present_count: 0,
        }
    }

    /// Installs a graphics device for the present path. Without one,
    /// presents are recorded but draw nothing.
    pub fn with_graphics(mut self, graphics: Box<dyn GraphicsApi>) -> Self {
        self.graphics = Some(graphics);
        self
    }

    /// Queues a notification for the next pump.
    pub fn notify(&mut self, notification: Notification) {
        self.feed.push_back(notification);
    }

    /// Queues a batch of notifications in order.
    pub fn script<I: IntoIterator<Item = Notification>>(&mut self, notifications: I) {
        self.feed.extend(notifications);
    }

    /// Letterbox rectangle of the most recent present, if any.
    pub fn last_rect(&self) -> Option<[f32; 4]> {
        self.last_rect
    }

    /// Number of successful presents.
    pub fn present_count(&self) -> u64 {
        self.present_count
    }

    fn key_event(queue: &mut EventQueue, vk: u8, extended: bool, up: bool) {
        let make = |key| if up { Event::KeyUp(key) } else { Event::KeyDown(key) };
        // Generic modifiers deliver both the generic and the sided key,
        // generic first, so callers can bind either.
        if let Some((generic, sided)) = win32::expand_modifier(vk, Side::from_extended(extended)) {
            queue.append(make(generic));
            queue.append(make(sided));
        } else {
            queue.append(make(win32::vk_to_key(vk)));
        }
    }
}

impl PlatformBackend for HeadlessBackend {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    fn window_size(&self) -> (i32, i32) {
        match self.screenmode {
            ScreenMode::Window => (self.width, self.height),
            ScreenMode::Fullscreen => DISPLAY_SIZE,
        }
    }

    fn set_window_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.windowed_size = (width, height);
    }

    fn window_pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn set_window_pos(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    fn screenmode(&self) -> ScreenMode {
        self.screenmode
    }

    fn set_screenmode(&mut self, mode: ScreenMode) {
        if self.screenmode == mode {
            return;
        }
        self.screenmode = mode;
        match mode {
            ScreenMode::Fullscreen => {}
            ScreenMode::Window => {
                (self.width, self.height) = self.windowed_size;
            }
        }
    }

    fn pointer_pos(&self) -> (i32, i32) {
        self.pointer
    }

    fn set_pointer_pos(&mut self, x: i32, y: i32) {
        self.pointer = (x, y);
    }

    fn displays(&self) -> &[Display] {
        self.displays.as_slice()
    }

    fn pump(&mut self, queue: &mut EventQueue) -> Result<PumpStatus, Error> {
        let mut status = PumpStatus::Continue;
        while let Some(notification) = self.feed.pop_front() {
            match notification {
                Notification::FocusGained => queue.set_focus(true),
                Notification::FocusLost => queue.set_focus(false),
                Notification::CloseRequested => status = PumpStatus::ExitRequested,
                Notification::Resized { width, height } => {
                    debug!("window resized to {width}x{height}");
                    self.width = width;
                    self.height = height;
                    self.windowed_size = (width, height);
                }
                Notification::KeyDown { vk, extended } => {
                    Self::key_event(queue, vk, extended, false);
                }
                Notification::KeyUp { vk, extended } => {
                    Self::key_event(queue, vk, extended, true);
                }
                Notification::Char { ch } => queue.append(Event::CharTyped(ch)),
                Notification::DoubleClick { vk } => {
                    queue.append(Event::DoubleClick(win32::vk_to_key(vk)));
                }
                Notification::MouseMove { x, y } => {
                    self.pointer = (x, y);
                    queue.append(Event::MouseMove { x, y });
                }
                Notification::MouseDelta { dx, dy } => {
                    queue.append(Event::MouseDelta { dx, dy });
                }
                Notification::Wheel { delta } => {
                    queue.append(Event::ScrollWheel { delta });
                }
                Notification::Tablet {
                    x,
                    y,
                    pressure,
                    tip,
                    lower,
                    upper,
                } => {
                    queue.append(Event::Tablet {
                        x,
                        y,
                        pressure,
                        tip,
                        lower,
                        upper,
                    });
                }
            }
        }
        Ok(status)
    }

    fn present(
        &mut self,
        pixels: &[u32],
        width: i32,
        height: i32,
        rect: [f32; 4],
        mode: Interpolation,
    ) -> Result<(), Error> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::BitmapSizeMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        if let Some(graphics) = self.graphics.as_mut() {
            graphics.draw_quad(pixels, width, height, rect, mode)?;
        }
        self.last_rect = Some(rect);
        self.present_count += 1;
        Ok(())
    }
}
