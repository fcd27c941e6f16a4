//! Frame-advance state machine driving one segment's animation.
//!
//! The animator is pull-model: the caller decides cadence and invokes
//! [`Animator::tick`] once per frame; there is no internal timer. State is
//! {Stopped, Active} with `start()`/`stop()` as the only transitions.

use crate::animation::{AnimationType, Direction, PatternSlot};
use crate::color::{BLACK, Hsv, Rgb, hsv2rgb};
use crate::segment::Segment;

pub struct Animator<'a> {
    segment: Segment<'a>,
    animation: AnimationType,
    direction: Direction,
    color: Rgb,
    pattern: PatternSlot,
    new_animation: bool,
    active: bool,
}

impl<'a> Animator<'a> {
    /// Create a stopped animator over `segment`, configured as solid black.
    pub fn new(segment: Segment<'a>) -> Self {
        Self {
            segment,
            animation: AnimationType::Solid,
            direction: Direction::Forward,
            color: BLACK,
            pattern: PatternSlot::default(),
            new_animation: true,
            active: false,
        }
    }

    /// Configure the pending animation parameters.
    ///
    /// If any of color, type or direction differs from the current
    /// configuration the next tick reinitializes progress state; an
    /// identical reconfiguration leaves in-flight progress untouched.
    pub fn set_animation_rgb(
        &mut self,
        color: Rgb,
        animation: AnimationType,
        direction: Direction,
    ) {
        if color != self.color || animation != self.animation || direction != self.direction {
            self.new_animation = true;
        }
        if animation != self.animation {
            self.pattern = animation.to_slot();
        }
        self.color = color;
        self.animation = animation;
        self.direction = direction;
    }

    /// Configure with an HSV color, converted to RGB once at set-time.
    pub fn set_animation_hsv(
        &mut self,
        color: Hsv,
        animation: AnimationType,
        direction: Direction,
    ) {
        self.set_animation_rgb(hsv2rgb(color), animation, direction);
    }

    /// Start ticking. An explicit (re)start always reinitializes progress,
    /// even when the parameters are unchanged.
    pub fn start(&mut self) {
        self.active = true;
        self.new_animation = true;
    }

    /// Stop ticking. The last rendered frame stays in the buffer.
    pub fn stop(&mut self) {
        self.active = false;
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub const fn animation_type(&self) -> AnimationType {
        self.animation
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub const fn segment(&self) -> &Segment<'a> {
        &self.segment
    }

    pub const fn segment_mut(&mut self) -> &mut Segment<'a> {
        &mut self.segment
    }

    /// Compute and write the next frame through the segment.
    ///
    /// Ticking a stopped animator is a caller error: debug builds assert,
    /// release builds return without touching the buffer.
    pub fn tick(&mut self, leds: &mut [Rgb]) {
        debug_assert!(self.active, "tick on a stopped animator");
        if !self.active {
            return;
        }

        if self.new_animation {
            self.pattern.reset(&self.segment, leds);
            self.new_animation = false;
        }

        self.pattern
            .render(&self.segment, self.color, self.direction, leds);
    }
}
