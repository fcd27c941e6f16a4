//! Logical-to-physical pixel addressing for a shared LED buffer.
//!
//! A [`Segment`] names a run of logical pixels inside a caller-owned buffer
//! and translates logical writes into physical slot writes. The buffer is
//! never stored; every operation takes it as an argument, so several
//! segments with disjoint slot sets can share one strip.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, Hsv, Rgb, hsv2rgb, scale_rgb};

/// Errors reported by segment construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentError {
    /// Mapped addressing was declared with a length the index map does not
    /// have.
    MapLengthMismatch { expected: usize, actual: usize },
}

/// How logical indices resolve to physical buffer slots.
#[derive(Debug, Clone, Copy)]
pub enum Addressing<'a> {
    /// Logical index `i` lives at slot `start + i`.
    Contiguous { start: usize },
    /// Logical index `i` lives at slot `map[i]`.
    Mapped { map: &'a [usize] },
}

/// Hands out segment ids for diagnostics/correlation.
///
/// Ids never affect addressing. The owning application holds one allocator
/// instead of the ids coming from process-global state.
#[derive(Debug, Default)]
pub struct SegmentIdAllocator {
    next: u16,
}

impl SegmentIdAllocator {
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Allocate the next id.
    pub const fn allocate(&mut self) -> u16 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// A contiguous-or-mapped, optionally reversed run of logical pixels.
#[derive(Debug, Clone)]
pub struct Segment<'a> {
    id: u16,
    length: usize,
    reversed: bool,
    addressing: Addressing<'a>,
}

impl<'a> Segment<'a> {
    /// Create a segment over `length` slots starting at `start`.
    pub const fn contiguous(id: u16, start: usize, length: usize, reversed: bool) -> Self {
        Self {
            id,
            length,
            reversed,
            addressing: Addressing::Contiguous { start },
        }
    }

    /// Create a segment whose logical indices resolve through `map`.
    ///
    /// The map is supplied by the caller and must stay immutable for the
    /// segment's lifetime. Fails when the map does not have exactly
    /// `length` entries.
    pub const fn mapped(id: u16, map: &'a [usize], length: usize) -> Result<Self, SegmentError> {
        if map.len() != length {
            return Err(SegmentError::MapLengthMismatch {
                expected: length,
                actual: map.len(),
            });
        }
        Ok(Self {
            id,
            length,
            reversed: false,
            addressing: Addressing::Mapped { map },
        })
    }

    /// Segment id, for external diagnostics only.
    pub const fn id(&self) -> u16 {
        self.id
    }

    /// Number of logical pixels in the segment.
    pub const fn len(&self) -> usize {
        self.length
    }

    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub const fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Toggle direction reversal. Takes effect on subsequent writes only.
    pub const fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    /// Resolve a logical index to a physical slot.
    ///
    /// Returns `None` for indices outside `0..length`.
    fn resolve(&self, index: usize) -> Option<usize> {
        if index >= self.length {
            return None;
        }
        let index = if self.reversed {
            self.length - 1 - index
        } else {
            index
        };
        match self.addressing {
            Addressing::Contiguous { start } => Some(start + index),
            Addressing::Mapped { map } => map.get(index).copied(),
        }
    }

    /// Write a color to a logical pixel.
    ///
    /// Out-of-range indices (logical or resolved physical) are rejected as
    /// no-ops; neighboring buffer memory is never touched.
    pub fn set_px(&self, leds: &mut [Rgb], index: usize, color: Rgb) {
        let Some(slot) = self.resolve(index) else {
            #[cfg(feature = "esp32-log")]
            println!(
                "segment {}: rejected write to logical px {} (len {})",
                self.id, index, self.length
            );
            return;
        };
        if let Some(led) = leds.get_mut(slot) {
            *led = color;
        }
    }

    /// Write an HSV color to a logical pixel.
    ///
    /// Converted through the same rainbow-style mapping as every other HSV
    /// path in the crate, so hue-based and RGB-based writes match visually.
    pub fn set_px_hsv(&self, leds: &mut [Rgb], index: usize, color: Hsv) {
        self.set_px(leds, index, hsv2rgb(color));
    }

    /// Switch every logical pixel off, each exactly once.
    pub fn clear(&self, leds: &mut [Rgb]) {
        for i in 0..self.length {
            self.set_px(leds, i, BLACK);
        }
    }

    /// Scale every physical slot the segment owns toward black.
    ///
    /// `scale` is an 8-bit factor (255 = no change). Iterates physical
    /// slots directly, per the active addressing mode.
    pub fn fade(&self, leds: &mut [Rgb], scale: u8) {
        match self.addressing {
            Addressing::Contiguous { start } => {
                let end = start.saturating_add(self.length).min(leds.len());
                for led in leds.get_mut(start..end).unwrap_or(&mut []) {
                    *led = scale_rgb(*led, scale);
                }
            }
            Addressing::Mapped { map } => {
                for &slot in map {
                    if let Some(led) = leds.get_mut(slot) {
                        *led = scale_rgb(*led, scale);
                    }
                }
            }
        }
    }
}
