//! ATmega128 peripheral access used by the counter board

pub mod gpio;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use gpio::board;
pub use gpio::{Input, Output, Pin, Port, SegmentBus};
pub use timer::Delay;
pub use uart::Uart;
