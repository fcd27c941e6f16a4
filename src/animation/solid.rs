//! Solid color fill pattern
//!
//! Writes the configured color to every logical pixel, every frame.
//! Idempotent; carries no progress state.

use super::{Direction, Pattern};
use crate::color::Rgb;
use crate::segment::Segment;

#[derive(Debug, Clone, Copy, Default)]
pub struct SolidPattern;

impl Pattern for SolidPattern {
    fn render(
        &mut self,
        segment: &Segment,
        color: Rgb,
        _direction: Direction,
        leds: &mut [Rgb],
    ) {
        for i in 0..segment.len() {
            segment.set_px(leds, i, color);
        }
    }
}
