//! Queued control plane.
//!
//! Lets another context (an ISR, a second task) post control changes
//! without touching the render path directly. Commands are queued through
//! a fixed-size `heapless::Deque` behind a critical section and drained by
//! the owner of the animator and charge display.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::animation::{AnimationType, Direction};
use crate::animator::Animator;
use crate::charge::{ChargeDisplay, DisplayStyle};
use crate::color::Rgb;

/// A control change for the animator or the charge display.
#[derive(Debug, Clone, Copy)]
pub enum Command {
    SetAnimation {
        color: Rgb,
        animation: AnimationType,
        direction: Direction,
    },
    Start,
    Stop,
    SetCharge(f32),
    SetVoltage {
        millivolts: i32,
        min: i32,
        max: i32,
    },
    SetStyle(DisplayStyle),
}

/// Error returned when posting to a full queue.
#[derive(Debug, Clone, Copy)]
pub struct QueueFullError(pub Command);

/// Bounded, critical-section-safe command queue.
pub struct CommandQueue<const N: usize> {
    inner: Mutex<RefCell<Deque<Command, N>>>,
}

impl<const N: usize> CommandQueue<N> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a producer handle. Multiple senders can coexist.
    pub const fn sender(&self) -> CommandSender<'_, N> {
        CommandSender { queue: self }
    }

    /// Post a command, failing when the queue is full.
    pub fn try_send(&self, command: Command) -> Result<(), QueueFullError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(QueueFullError)
        })
    }

    /// Take the oldest pending command, if any.
    pub fn try_receive(&self) -> Option<Command> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const N: usize> Default for CommandQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight producer handle for a [`CommandQueue`].
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const N: usize> {
    queue: &'a CommandQueue<N>,
}

impl<const N: usize> CommandSender<'_, N> {
    pub fn try_send(&self, command: Command) -> Result<(), QueueFullError> {
        self.queue.try_send(command)
    }
}

/// Route one drained command to its consumer.
pub fn apply(
    command: Command,
    animator: &mut Animator,
    display: &mut ChargeDisplay,
    leds: &mut [Rgb],
) {
    match command {
        Command::SetAnimation {
            color,
            animation,
            direction,
        } => animator.set_animation_rgb(color, animation, direction),
        Command::Start => animator.start(),
        Command::Stop => animator.stop(),
        Command::SetCharge(fraction) => display.set_charge(leds, fraction),
        Command::SetVoltage {
            millivolts,
            min,
            max,
        } => display.set_voltage(leds, millivolts, min, max),
        Command::SetStyle(style) => display.set_style(leds, style),
    }
}
