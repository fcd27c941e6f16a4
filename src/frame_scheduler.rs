//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific
//! timers. The caller renders into the scheduler's buffer through a
//! closure; the scheduler presents the frame exactly once and reports when
//! the next frame is due. The caller is responsible for sleeping between
//! frames.

use embassy_time::{Duration, Instant};

use crate::StripDriver;
use crate::color::Rgb;

/// Default target frame rate for status animations (30 FPS).
pub const DEFAULT_FPS: u32 = 30;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// Owns the shared pixel buffer and the output driver; animators and
/// charge displays write into the buffer inside the render closure, and
/// the frame is presented once per tick.
pub struct FrameScheduler<D: StripDriver, const MAX_LEDS: usize> {
    output: D,
    frame_buffer: [Rgb; MAX_LEDS],
    next_frame: Instant,
    frame_duration: Duration,
}

impl<D: StripDriver, const MAX_LEDS: usize> FrameScheduler<D, MAX_LEDS> {
    /// Create a new frame scheduler with the default frame duration.
    pub fn new(driver: D) -> Self {
        Self::with_frame_duration(driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with a custom frame duration.
    pub fn with_frame_duration(driver: D, frame_duration: Duration) -> Self {
        Self {
            output: driver,
            frame_buffer: [Rgb::default(); MAX_LEDS],
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// Applies drift correction when the caller has stalled, hands the
    /// buffer to `render`, presents it, and returns the next deadline.
    /// The caller should wait until `next_deadline` before ticking again.
    pub fn tick(&mut self, now: Instant, render: impl FnOnce(&mut [Rgb])) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now.
        // This prevents catch-up bursts after long stalls.
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        render(&mut self.frame_buffer);
        self.output.write(&self.frame_buffer);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the current frame contents.
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer
    }
}
