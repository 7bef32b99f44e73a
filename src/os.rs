//! System time tracking for the cooperative main loop

/// Millisecond tick counter advanced once per loop iteration.
///
/// The counter wraps on overflow. Compare timestamps with
/// [`Millis::elapsed`] or `wrapping_sub`, never with `<` on raw values.
#[derive(Debug, Default)]
pub struct Millis {
    tick_count: u32,
}

impl Millis {
    /// Create a clock starting at zero
    pub const fn new() -> Self {
        Self { tick_count: 0 }
    }

    /// Increment system tick counter
    #[inline]
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Step the counter back by one tick
    #[inline]
    pub fn dec(&mut self) {
        self.tick_count = self.tick_count.wrapping_sub(1);
    }

    /// Get current system tick count
    #[inline]
    pub fn now(&self) -> u32 {
        self.tick_count
    }

    #[inline]
    pub fn reset(&mut self) {
        self.tick_count = 0;
    }

    #[inline]
    pub fn set(&mut self, value: u32) {
        self.tick_count = value;
    }

    /// Ticks since `since`, correct across wraparound
    #[inline]
    pub fn elapsed(&self, since: u32) -> u32 {
        self.tick_count.wrapping_sub(since)
    }
}

/// Fires at most once per `period` ticks.
///
/// The first mark is tick 0, so a fresh gate opens once the clock reaches
/// `period`.
#[derive(Clone, Copy, Debug)]
pub struct Interval {
    period: u32,
    last: u32,
}

impl Interval {
    pub const fn new(period: u32) -> Self {
        Self { period, last: 0 }
    }

    /// Returns true and re-arms when a full period has passed since the last firing.
    #[inline]
    pub fn ready(&mut self, now: u32) -> bool {
        if now.wrapping_sub(self.last) < self.period {
            return false;
        }
        self.last = now;
        true
    }
}
