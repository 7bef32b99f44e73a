pub mod button;
pub mod fnd;
pub mod led;
pub mod serial_console;

pub use button::{ButtonAction, ButtonLevel, DebouncedButton};
pub use fnd::{Display, NumberSink, SegmentPort};
pub use led::Led;
pub use serial_console::SerialConsole;
