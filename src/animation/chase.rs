//! Multi-dot chase pattern
//!
//! A fixed set of dots sweeps the segment in the configured direction.
//! Dots start pre-staggered at negative offsets so they enter the visible
//! range at regular intervals, and each dot leaves a faint trail behind it
//! instead of switching fully off.

use super::{Direction, Pattern};
use crate::color::{AMBIENT, Rgb};
use crate::segment::Segment;

/// Number of concurrently tracked dots.
pub(crate) const DOT_COUNT: usize = 10;

/// Logical-pixel gap between consecutive dots at start.
const DOT_SPACING: i32 = 3;

/// Position a dot restarts from after sweeping past the end.
const RESTART_OFFSET: i32 = -3;

#[derive(Debug, Clone)]
pub struct ChasePattern {
    /// Dot positions in sweep coordinates. Negative means not yet entered,
    /// `>= length` means due for wraparound.
    dots: [i32; DOT_COUNT],
}

impl ChasePattern {
    pub const fn new() -> Self {
        Self {
            dots: [0; DOT_COUNT],
        }
    }

    fn set_sweep_px(segment: &Segment, leds: &mut [Rgb], px: i32, color: Rgb) {
        if let Ok(px) = usize::try_from(px) {
            segment.set_px(leds, px, color);
        }
    }
}

impl Default for ChasePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for ChasePattern {
    fn reset(&mut self, _segment: &Segment, _leds: &mut [Rgb]) {
        for (i, dot) in self.dots.iter_mut().enumerate() {
            #[allow(clippy::cast_possible_wrap)]
            {
                *dot = -(i as i32) * DOT_SPACING;
            }
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    fn render(
        &mut self,
        segment: &Segment,
        color: Rgb,
        direction: Direction,
        leds: &mut [Rgb],
    ) {
        let len = segment.len() as i32;

        for dot in &mut self.dots {
            // Dim the trailing pixel left behind on the previous frame
            if *dot > 0 {
                let trail = match direction {
                    Direction::Forward => *dot - 1,
                    Direction::Reverse => len - *dot,
                };
                Self::set_sweep_px(segment, leds, trail, AMBIENT);
            }

            // Past the end, restart before the beginning
            if *dot >= len {
                *dot = RESTART_OFFSET;
            }

            // Paint the dot once it has entered the visible range
            if *dot >= 0 {
                let px = match direction {
                    Direction::Forward => *dot,
                    Direction::Reverse => len - 1 - *dot,
                };
                Self::set_sweep_px(segment, leds, px, color);
            }

            *dot += 1;
        }
    }
}
