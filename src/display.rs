//! Display descriptors and the bounded display list.

use log::warn;

/// One attached display, in virtual-desktop coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    /// Backend-specific identifier (device name, output name, ...).
    pub id: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Maximum number of displays tracked.
pub const MAX_DISPLAYS: usize = 16;

/// Fixed-capacity display list with the same drop-new overflow policy
/// as the input queue: enumerating beyond the cap keeps the displays
/// found first.
#[derive(Debug, Default)]
pub struct DisplayList {
    displays: Vec<Display>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a display; ignored (with a warning) once the list is full.
    pub fn push(&mut self, display: Display) {
        if self.displays.len() < MAX_DISPLAYS {
            self.displays.push(display);
        } else {
            warn!(
                "display list full ({MAX_DISPLAYS} entries), ignoring display {}",
                display.id
            );
        }
    }

    pub fn clear(&mut self) {
        self.displays.clear();
    }

    pub fn as_slice(&self) -> &[Display] {
        &self.displays
    }

    pub fn len(&self) -> usize {
        self.displays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(n: usize) -> Display {
        Display {
            id: format!("display-{n}"),
            x: 0,
            y: 0,
            width: 1920,
            height: 1080,
        }
    }

    #[test]
    fn list_keeps_the_first_sixteen() {
        let mut list = DisplayList::new();
        for n in 0..20 {
            list.push(display(n));
        }
        assert_eq!(list.len(), MAX_DISPLAYS);
        assert_eq!(list.as_slice()[0].id, "display-0");
        assert_eq!(list.as_slice()[MAX_DISPLAYS - 1].id, "display-15");
    }
}
