//! Bounded, ordered queue of normalized input events.

use log::warn;

use super::events::Event;

/// Maximum number of events held between two drains.
pub const QUEUE_CAPACITY: usize = 1024;

/// Bounded FIFO of [`Event`]s with focus gating and tail coalescing.
///
/// Exactly one writer (the backend event pump) and one reader (the
/// application poll) touch the queue, both on the main thread, strictly
/// alternating. No locking.
///
/// # Focus gating
///
/// While the window lacks input focus, `append` is a no-op for every
/// event kind, including `MouseDelta`. Relative motion is conceptually
/// focus-independent, but it is gated like everything else: one rule,
/// applied uniformly. This is a deliberate, tested decision.
///
/// # Coalescing
///
/// A new `ScrollWheel` or `MouseDelta` accumulates into the most recently
/// queued event when and only when that event is of the same kind:
/// wheel deltas add, mouse deltas add componentwise. No other kind ever
/// coalesces, and nothing coalesces across an intervening event of a
/// different kind.
///
/// # Overflow
///
/// When full, new appends are silently dropped in favor of older events
/// (drop-new backpressure). Drops are counted in `overflow_count` and the
/// first drop of each cycle is logged at warn.
#[derive(Debug)]
pub struct EventQueue {
    events: Vec<Event>,
    has_focus: bool,
    overflow: u64,
    warned_this_cycle: bool,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    /// Creates an empty queue. The window is assumed unfocused until the
    /// backend reports otherwise.
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(QUEUE_CAPACITY),
            has_focus: false,
            overflow: 0,
            warned_this_cycle: false,
        }
    }

    /// Updates the focus gate. Called by the backend on focus change.
    pub fn set_focus(&mut self, has_focus: bool) {
        self.has_focus = has_focus;
    }

    /// True if events are currently being accepted.
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Appends an event, applying focus gating, coalescing and the
    /// drop-new overflow policy.
    pub fn append(&mut self, event: Event) {
        if !self.has_focus {
            return;
        }

        // Coalescing widens the tail in place, so it applies even when
        // the queue is full.
        match (self.events.last_mut(), &event) {
            (Some(Event::ScrollWheel { delta: tail }), Event::ScrollWheel { delta }) => {
                *tail += delta;
                return;
            }
            (
                Some(Event::MouseDelta { dx: tx, dy: ty }),
                Event::MouseDelta { dx, dy },
            ) => {
                *tx += dx;
                *ty += dy;
                return;
            }
            _ => {}
        }

        if self.events.len() < QUEUE_CAPACITY {
            self.events.push(event);
        } else {
            self.overflow += 1;
            if !self.warned_this_cycle {
                warn!("input queue full ({QUEUE_CAPACITY} events), dropping new events");
                self.warned_this_cycle = true;
            }
        }
    }

    /// Returns all queued events in arrival order and resets the queue.
    pub fn drain(&mut self) -> Vec<Event> {
        self.warned_this_cycle = false;
        std::mem::take(&mut self.events)
    }

    /// Number of events currently queued.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if no events are queued.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total number of events dropped to overflow since creation.
    pub fn overflow_count(&self) -> u64 {
        self.overflow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    fn focused_queue() -> EventQueue {
        let mut queue = EventQueue::new();
        queue.set_focus(true);
        queue
    }

    #[test]
    fn events_drain_in_arrival_order() {
        let mut queue = focused_queue();
        queue.append(Event::KeyDown(Key::A));
        queue.append(Event::CharTyped('a'));
        queue.append(Event::KeyUp(Key::A));

        let drained = queue.drain();
        assert_eq!(
            drained,
            vec![
                Event::KeyDown(Key::A),
                Event::CharTyped('a'),
                Event::KeyUp(Key::A),
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn unfocused_queue_drops_everything_including_mouse_delta() {
        let mut queue = EventQueue::new();
        queue.append(Event::KeyDown(Key::A));
        queue.append(Event::MouseDelta { dx: 1.0, dy: 1.0 });
        assert!(queue.is_empty());

        queue.set_focus(true);
        queue.append(Event::MouseDelta { dx: 1.0, dy: 1.0 });
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn scroll_wheel_coalesces_into_tail() {
        let mut queue = focused_queue();
        queue.append(Event::ScrollWheel { delta: 1.0 });
        queue.append(Event::ScrollWheel { delta: 2.0 });

        assert_eq!(queue.drain(), vec![Event::ScrollWheel { delta: 3.0 }]);
    }

    #[test]
    fn mouse_delta_coalesces_componentwise() {
        let mut queue = focused_queue();
        queue.append(Event::MouseDelta { dx: 1.0, dy: -2.0 });
        queue.append(Event::MouseDelta { dx: 0.5, dy: 0.5 });

        assert_eq!(
            queue.drain(),
            vec![Event::MouseDelta { dx: 1.5, dy: -1.5 }]
        );
    }

    #[test]
    fn intervening_event_breaks_coalescing() {
        let mut queue = focused_queue();
        queue.append(Event::MouseDelta { dx: 1.0, dy: 1.0 });
        queue.append(Event::KeyDown(Key::A));
        queue.append(Event::MouseDelta { dx: 2.0, dy: 2.0 });

        assert_eq!(queue.len(), 3);
        assert_eq!(
            queue.drain(),
            vec![
                Event::MouseDelta { dx: 1.0, dy: 1.0 },
                Event::KeyDown(Key::A),
                Event::MouseDelta { dx: 2.0, dy: 2.0 },
            ]
        );
    }

    #[test]
    fn repeated_key_down_never_coalesces() {
        let mut queue = focused_queue();
        queue.append(Event::KeyDown(Key::A));
        queue.append(Event::KeyDown(Key::A));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn overflow_drops_new_events_and_counts_them() {
        let mut queue = focused_queue();
        for i in 0..(QUEUE_CAPACITY + 1) {
            queue.append(Event::MouseMove {
                x: i as i32,
                y: 0,
            });
        }

        assert_eq!(queue.overflow_count(), 1);
        let drained = queue.drain();
        assert_eq!(drained.len(), QUEUE_CAPACITY);
        // Oldest events survive; the overflowing event was the one dropped.
        assert_eq!(drained[0], Event::MouseMove { x: 0, y: 0 });
        assert_eq!(
            drained[QUEUE_CAPACITY - 1],
            Event::MouseMove {
                x: QUEUE_CAPACITY as i32 - 1,
                y: 0
            }
        );
    }

    #[test]
    fn wheel_still_coalesces_into_tail_when_full() {
        let mut queue = focused_queue();
        for _ in 0..(QUEUE_CAPACITY - 1) {
            queue.append(Event::KeyDown(Key::A));
        }
        queue.append(Event::ScrollWheel { delta: 1.0 });
        queue.append(Event::ScrollWheel { delta: 2.0 });

        assert_eq!(queue.len(), QUEUE_CAPACITY);
        assert_eq!(queue.overflow_count(), 0);
        assert_eq!(
            queue.drain().last(),
            Some(&Event::ScrollWheel { delta: 3.0 })
        );
    }

    #[test]
    fn drain_resets_for_the_next_cycle() {
        let mut queue = focused_queue();
        queue.append(Event::KeyDown(Key::A));
        queue.drain();

        queue.append(Event::KeyDown(Key::B));
        assert_eq!(queue.drain(), vec![Event::KeyDown(Key::B)]);
    }
}
