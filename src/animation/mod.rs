//! Animation patterns with compile-time known variants
//!
//! All patterns are stored in an enum to avoid heap allocations.
//! Each pattern implements the [`Pattern`] trait and carries only its own
//! progress state.

mod chase;
mod interleave;
mod knight_rider;
mod solid;

pub use chase::ChasePattern;
pub use interleave::InterleavePattern;
pub use knight_rider::KnightRiderPattern;
pub use solid::SolidPattern;

use crate::color::Rgb;
use crate::segment::Segment;

const ANIMATION_NAME_SOLID: &str = "solid";
const ANIMATION_NAME_CHASE: &str = "chase";
const ANIMATION_NAME_HEARTBEAT: &str = "heartbeat";
const ANIMATION_NAME_KNIGHT_RIDER: &str = "knight_rider";
const ANIMATION_NAME_INTERLEAVE: &str = "interleave";

const ANIMATION_ID_SOLID: u8 = 0;
const ANIMATION_ID_CHASE: u8 = 1;
const ANIMATION_ID_HEARTBEAT: u8 = 2;
const ANIMATION_ID_KNIGHT_RIDER: u8 = 3;
const ANIMATION_ID_INTERLEAVE: u8 = 4;

/// Sweep direction for directional patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

pub trait Pattern {
    /// Reinitialize progress state to its canonical starting values.
    ///
    /// Patterns that need a blank canvas may also write to the segment.
    fn reset(&mut self, _segment: &Segment, _leds: &mut [Rgb]) {}

    /// Render a single frame and advance progress state for the next call.
    fn render(
        &mut self,
        segment: &Segment,
        color: Rgb,
        direction: Direction,
        leds: &mut [Rgb],
    );
}

/// Known animation kinds that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationType {
    Solid = ANIMATION_ID_SOLID,
    Chase = ANIMATION_ID_CHASE,
    /// Reserved variant, currently renders nothing.
    Heartbeat = ANIMATION_ID_HEARTBEAT,
    KnightRider = ANIMATION_ID_KNIGHT_RIDER,
    Interleave = ANIMATION_ID_INTERLEAVE,
}

/// Pattern slot - enum containing all possible patterns
#[derive(Debug, Clone)]
pub enum PatternSlot {
    /// Whole segment in a single color
    Solid(SolidPattern),
    /// Evenly spaced dots sweeping the segment
    Chase(ChasePattern),
    /// Recognized placeholder, no rendering
    Heartbeat,
    /// Bouncing scan pixel with a fading comet trail
    KnightRider(KnightRiderPattern),
    /// Two contrasting dot streams crossing through each other
    Interleave(InterleavePattern),
}

impl Default for PatternSlot {
    fn default() -> Self {
        Self::Solid(SolidPattern)
    }
}

impl AnimationType {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_SOLID => Self::Solid,
            ANIMATION_ID_CHASE => Self::Chase,
            ANIMATION_ID_HEARTBEAT => Self::Heartbeat,
            ANIMATION_ID_KNIGHT_RIDER => Self::KnightRider,
            ANIMATION_ID_INTERLEAVE => Self::Interleave,
            _ => return None,
        })
    }

    pub fn to_slot(self) -> PatternSlot {
        match self {
            Self::Solid => PatternSlot::Solid(SolidPattern),
            Self::Chase => PatternSlot::Chase(ChasePattern::new()),
            Self::Heartbeat => PatternSlot::Heartbeat,
            Self::KnightRider => PatternSlot::KnightRider(KnightRiderPattern::new()),
            Self::Interleave => PatternSlot::Interleave(InterleavePattern::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => ANIMATION_NAME_SOLID,
            Self::Chase => ANIMATION_NAME_CHASE,
            Self::Heartbeat => ANIMATION_NAME_HEARTBEAT,
            Self::KnightRider => ANIMATION_NAME_KNIGHT_RIDER,
            Self::Interleave => ANIMATION_NAME_INTERLEAVE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_SOLID => Some(Self::Solid),
            ANIMATION_NAME_CHASE => Some(Self::Chase),
            ANIMATION_NAME_HEARTBEAT => Some(Self::Heartbeat),
            ANIMATION_NAME_KNIGHT_RIDER => Some(Self::KnightRider),
            ANIMATION_NAME_INTERLEAVE => Some(Self::Interleave),
            _ => None,
        }
    }
}

impl PatternSlot {
    /// Reinitialize the pattern's progress state
    pub fn reset(&mut self, segment: &Segment, leds: &mut [Rgb]) {
        match self {
            Self::Solid(pattern) => Pattern::reset(pattern, segment, leds),
            Self::Chase(pattern) => Pattern::reset(pattern, segment, leds),
            Self::Heartbeat => {}
            Self::KnightRider(pattern) => Pattern::reset(pattern, segment, leds),
            Self::Interleave(pattern) => Pattern::reset(pattern, segment, leds),
        }
    }

    /// Render the current pattern
    pub fn render(
        &mut self,
        segment: &Segment,
        color: Rgb,
        direction: Direction,
        leds: &mut [Rgb],
    ) {
        match self {
            Self::Solid(pattern) => pattern.render(segment, color, direction, leds),
            Self::Chase(pattern) => pattern.render(segment, color, direction, leds),
            Self::Heartbeat => {}
            Self::KnightRider(pattern) => pattern.render(segment, color, direction, leds),
            Self::Interleave(pattern) => pattern.render(segment, color, direction, leds),
        }
    }

    /// Get the animation type for external observation
    pub fn animation_type(&self) -> AnimationType {
        match self {
            Self::Solid(_) => AnimationType::Solid,
            Self::Chase(_) => AnimationType::Chase,
            Self::Heartbeat => AnimationType::Heartbeat,
            Self::KnightRider(_) => AnimationType::KnightRider,
            Self::Interleave(_) => AnimationType::Interleave,
        }
    }
}
