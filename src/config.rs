//! Configuration constants for the counter firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Length of one control loop iteration in milliseconds
pub const TICK_MS: u16 = 1;

/// Button settle window after a reported edge, in milliseconds
pub const BUTTON_DEBOUNCE_MS: u32 = 10;

/// Heartbeat LED toggle period in milliseconds
pub const HEARTBEAT_PERIOD_MS: u32 = 500;

/// Counter step interval in milliseconds
pub const COUNT_INTERVAL_MS: u32 = 100;

/// Number of multiplexed display digits
pub const DISPLAY_DIGITS: usize = 4;

/// Largest value the display can show
pub const MAX_COUNT: u16 = 9999;

/// Electrical sense of a signal line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    /// A high pin level means asserted.
    ActiveHigh,
    /// A low pin level means asserted.
    ActiveLow,
}

impl Polarity {
    /// Whether a raw pin level reads as asserted.
    #[inline]
    pub fn is_asserted(self, pin_high: bool) -> bool {
        match self {
            Polarity::ActiveHigh => pin_high,
            Polarity::ActiveLow => !pin_high,
        }
    }
}

/// Buttons pull the line to ground when pushed.
pub const BUTTON_POLARITY: Polarity = Polarity::ActiveLow;

/// Digit-select transistors conduct on a low level (common anode).
pub const DIGIT_SELECT_POLARITY: Polarity = Polarity::ActiveLow;

/// Segment cathodes light on a low level (common anode).
pub const SEGMENT_POLARITY: Polarity = Polarity::ActiveLow;

/// Periods used by the rate-gated parts of the control loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub debounce_ms: u32,
    pub heartbeat_ms: u32,
    pub count_interval_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            debounce_ms: BUTTON_DEBOUNCE_MS,
            heartbeat_ms: HEARTBEAT_PERIOD_MS,
            count_interval_ms: COUNT_INTERVAL_MS,
        }
    }
}
