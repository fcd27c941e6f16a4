//! Knight-rider scan pattern
//!
//! A single bright pixel bounces between the ends of the segment while the
//! whole segment fades toward black each frame, leaving a decaying comet
//! trail. The pixel's hue oscillates between two bounds in lock-step with
//! the bounce.

use super::{Direction, Pattern};
use crate::color::{Hsv, Rgb};
use crate::segment::Segment;

/// Hue oscillation bounds (0-255 color wheel).
const HUE_LOW: u8 = 125;
const HUE_HIGH: u8 = 255;
const HUE_START: u8 = 130;
const HUE_STEP: i8 = 5;

/// Per-frame fade factor for the comet trail (255 = no fade).
const TRAIL_FADE: u8 = 250;

#[derive(Debug, Clone)]
pub struct KnightRiderPattern {
    position: i32,
    step: i32,
    hue: u8,
    hue_step: i8,
}

impl KnightRiderPattern {
    pub const fn new() -> Self {
        Self {
            position: 0,
            step: 1,
            hue: HUE_START,
            hue_step: HUE_STEP,
        }
    }
}

impl Default for KnightRiderPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for KnightRiderPattern {
    fn reset(&mut self, segment: &Segment, leds: &mut [Rgb]) {
        *self = Self::new();
        segment.clear(leds);
    }

    #[allow(clippy::cast_possible_wrap)]
    fn render(
        &mut self,
        segment: &Segment,
        _color: Rgb,
        _direction: Direction,
        leds: &mut [Rgb],
    ) {
        let len = segment.len() as i32;

        if let Ok(px) = usize::try_from(self.position) {
            segment.set_px_hsv(
                leds,
                px,
                Hsv {
                    hue: self.hue,
                    sat: 255,
                    val: 255,
                },
            );
        }
        segment.fade(leds, TRAIL_FADE);

        self.hue = self.hue.wrapping_add_signed(self.hue_step);
        if self.hue == HUE_LOW || self.hue == HUE_HIGH {
            self.hue_step = -self.hue_step;
        }

        self.position += self.step;
        if self.position == len || self.position < 0 {
            // Invert and nudge two steps inward so the scan does not stall
            // for a frame at the boundary
            self.step = -self.step;
            self.position += self.step * 2;
        }
    }
}
