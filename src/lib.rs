#![no_std]

pub mod animation;
pub mod animator;
pub mod charge;
pub mod color;
pub mod command;
pub mod frame_scheduler;
pub mod math8;
pub mod segment;

pub use animation::{AnimationType, Direction, Pattern, PatternSlot};
pub use animator::Animator;
pub use charge::{ChargeDisplay, DisplayStyle};
pub use color::{Hsv, Rgb};
pub use command::{Command, CommandQueue, CommandSender, QueueFullError};
pub use frame_scheduler::FrameScheduler;
pub use segment::{Addressing, Segment, SegmentError, SegmentIdAllocator};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms. The
/// library only ever mutates the caller-supplied pixel buffer; presenting
/// a frame through this trait is an explicit, separate step.
pub trait StripDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
