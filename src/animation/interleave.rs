//! Interleave pattern
//!
//! Two staggered dot streams cross through each other: one sweeps forward
//! from before the start, one sweeps backward from beyond the end. The
//! backward stream renders in the channel-complement of the configured
//! color so the two streams stay visually distinct.

use super::{Direction, Pattern};
use crate::color::{AMBIENT, Rgb, complement};
use crate::segment::Segment;

use super::chase::DOT_COUNT;

const DOT_SPACING: i32 = 3;
const RESTART_OFFSET: i32 = 3;

#[derive(Debug, Clone)]
pub struct InterleavePattern {
    forward: [i32; DOT_COUNT],
    backward: [i32; DOT_COUNT],
}

impl InterleavePattern {
    pub const fn new() -> Self {
        Self {
            forward: [0; DOT_COUNT],
            backward: [0; DOT_COUNT],
        }
    }
}

impl Default for InterleavePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for InterleavePattern {
    #[allow(clippy::cast_possible_wrap)]
    fn reset(&mut self, segment: &Segment, _leds: &mut [Rgb]) {
        let len = segment.len() as i32;
        for i in 0..DOT_COUNT {
            let stagger = (i as i32) * DOT_SPACING;
            self.forward[i] = -stagger;
            self.backward[i] = len + stagger;
        }
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn render(
        &mut self,
        segment: &Segment,
        color: Rgb,
        _direction: Direction,
        leds: &mut [Rgb],
    ) {
        let len = segment.len() as i32;
        let contrast = complement(color);

        // Faint baseline under both streams
        for i in 0..segment.len() {
            segment.set_px(leds, i, AMBIENT);
        }

        for i in 0..DOT_COUNT {
            if self.forward[i] >= 0 && self.forward[i] < len {
                segment.set_px(leds, self.forward[i] as usize, color);
            }
            if self.backward[i] >= 0 && self.backward[i] < len {
                segment.set_px(leds, self.backward[i] as usize, contrast);
            }

            self.forward[i] += 1;
            self.backward[i] -= 1;

            // Restart just past the opposite boundary
            if self.forward[i] >= len - 1 {
                self.forward[i] = -RESTART_OFFSET;
            }
            if self.backward[i] < 0 {
                self.backward[i] = len + RESTART_OFFSET;
            }
        }
    }
}
