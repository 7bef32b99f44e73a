use crate::drivers::Led;
use crate::os::Interval;
use embedded_hal::digital::v2::{OutputPin, ToggleableOutputPin};

/// Blinks a status LED to show the main loop is alive.
pub struct Heartbeat<L> {
    led: Led<L>,
    gate: Interval,
}

impl<L, E> Heartbeat<L>
where
    L: OutputPin<Error = E> + ToggleableOutputPin<Error = E>,
{
    pub fn new(led: Led<L>, period_ms: u32) -> Self {
        Self {
            led,
            gate: Interval::new(period_ms),
        }
    }

    /// Toggle the LED if a full period has passed. Returns whether it toggled.
    pub fn update(&mut self, now: u32) -> Result<bool, E> {
        if !self.gate.ready(now) {
            return Ok(false);
        }
        self.led.toggle()?;
        Ok(true)
    }
}
