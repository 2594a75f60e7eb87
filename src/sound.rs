//! Looping audio stream position bookkeeping.
//!
//! No mixing or sample generation happens here: the OS audio thread owns
//! the device and asks this type where it is in the ring, which is the
//! only state in the crate that crosses a thread boundary. Positions are
//! measured in sample pairs (stereo frames).

use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};

/// Number of steps in the fixed-point volume scale.
pub const VOLUME_STEPS: u16 = 256;

/// Position and volume state for the looping sound buffer.
#[derive(Debug)]
pub struct RingBuffer {
    /// Ring length, in sample pairs.
    sample_pairs: u64,
    /// Total sample pairs handed to the device since start. Wraps over
    /// the ring length when converted to a ring offset.
    play_cursor: AtomicU64,
    /// Volume as a 0-255 fixed-point step; samples are scaled by
    /// `step / 256`.
    volume_step: AtomicU8,
}

impl RingBuffer {
    /// Creates position state for a ring of `sample_pairs` stereo frames
    /// at full volume.
    pub fn new(sample_pairs: u64) -> Self {
        Self {
            sample_pairs,
            play_cursor: AtomicU64::new(0),
            volume_step: AtomicU8::new(u8::MAX),
        }
    }

    /// Ring length in sample pairs.
    pub fn sample_pairs(&self) -> u64 {
        self.sample_pairs
    }

    /// Advances the playback position by `frames` sample pairs. Called
    /// by the audio thread after each device write.
    pub fn advance(&self, frames: u64) {
        self.play_cursor.fetch_add(frames, Ordering::Relaxed);
    }

    /// Current offset into the ring, in sample pairs.
    pub fn position(&self) -> u64 {
        if self.sample_pairs == 0 {
            return 0;
        }
        self.play_cursor.load(Ordering::Relaxed) % self.sample_pairs
    }

    /// Total sample pairs played since start, without wrapping.
    pub fn frames_played(&self) -> u64 {
        self.play_cursor.load(Ordering::Relaxed)
    }

    /// Sets the playback volume; `volume` is clamped to `[0, 1]` and
    /// quantized to the fixed-point step the mixer applies.
    pub fn set_volume(&self, volume: f32) {
        let step = (volume.clamp(0.0, 1.0) * VOLUME_STEPS as f32) as u16;
        self.volume_step
            .store(step.min(u8::MAX as u16) as u8, Ordering::Relaxed);
    }

    /// Current volume step, 0-255.
    pub fn volume_step(&self) -> u8 {
        self.volume_step.load(Ordering::Relaxed)
    }

    /// Current volume as a float in `[0, 1]`.
    pub fn volume(&self) -> f32 {
        self.volume_step() as f32 / u8::MAX as f32
    }
}
