use avr_device::atmega128a::{PORTA, PORTB, PORTC, PORTD, PORTE, PORTF};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{
    InputPin, OutputPin, StatefulOutputPin, ToggleableOutputPin,
};

use crate::drivers::SegmentPort;

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

/// One 8-bit GPIO port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
    F,
}

// Expands to a match over every port, binding the DDR/PORT/PIN registers.
macro_rules! with_port {
    ($port:expr, |$ddr:ident, $out:ident, $pin:ident| $body:expr) => {
        match $port {
            Port::A => unsafe {
                let p = &*PORTA::ptr();
                let ($ddr, $out, $pin) = (&p.ddra, &p.porta, &p.pina);
                $body
            },
            Port::B => unsafe {
                let p = &*PORTB::ptr();
                let ($ddr, $out, $pin) = (&p.ddrb, &p.portb, &p.pinb);
                $body
            },
            Port::C => unsafe {
                let p = &*PORTC::ptr();
                let ($ddr, $out, $pin) = (&p.ddrc, &p.portc, &p.pinc);
                $body
            },
            Port::D => unsafe {
                let p = &*PORTD::ptr();
                let ($ddr, $out, $pin) = (&p.ddrd, &p.portd, &p.pind);
                $body
            },
            Port::E => unsafe {
                let p = &*PORTE::ptr();
                let ($ddr, $out, $pin) = (&p.ddre, &p.porte, &p.pine);
                $body
            },
            Port::F => unsafe {
                let p = &*PORTF::ptr();
                let ($ddr, $out, $pin) = (&p.ddrf, &p.portf, &p.pinf);
                $body
            },
        }
    };
}

impl Port {
    /// Make the pins in `mask` outputs.
    pub fn configure_output(self, mask: u8) {
        with_port!(self, |ddr, _out, _pin| {
            ddr.modify(|r, w| w.bits(r.bits() | mask))
        })
    }

    /// Make the pins in `mask` inputs with the internal pull-up enabled.
    pub fn configure_pull_up_input(self, mask: u8) {
        with_port!(self, |ddr, out, _pin| {
            ddr.modify(|r, w| w.bits(r.bits() & !mask));
            out.modify(|r, w| w.bits(r.bits() | mask));
        })
    }

    /// Write the whole output register.
    #[inline]
    pub fn write(self, value: u8) {
        with_port!(self, |_ddr, out, _pin| out.write(|w| w.bits(value)))
    }

    /// Instantaneous level of every pin.
    #[inline]
    pub fn read(self) -> u8 {
        with_port!(self, |_ddr, _out, pin| pin.read().bits())
    }

    #[inline]
    fn output_latch(self) -> u8 {
        with_port!(self, |_ddr, out, _pin| out.read().bits())
    }

    #[inline]
    fn modify_output(self, f: impl FnOnce(u8) -> u8) {
        with_port!(self, |_ddr, out, _pin| out.modify(|r, w| w.bits(f(r.bits()))))
    }

    /// Line `index` (0..=7) of this port.
    pub fn pin(self, index: u8) -> Pin<Input> {
        debug_assert!(index < 8, "port pin index out of range");
        Pin {
            port: self,
            index,
            _mode: PhantomData,
        }
    }
}

/// A single port line, identified at runtime so pins of one kind share a type.
#[derive(Debug)]
pub struct Pin<MODE> {
    port: Port,
    index: u8,
    _mode: PhantomData<MODE>,
}

impl<MODE: PinMode> Pin<MODE> {
    #[inline]
    fn mask(&self) -> u8 {
        1 << self.index
    }

    pub fn into_output(self) -> Pin<Output> {
        self.port.configure_output(self.mask());
        Pin {
            port: self.port,
            index: self.index,
            _mode: PhantomData,
        }
    }

    pub fn into_pull_up_input(self) -> Pin<Input> {
        self.port.configure_pull_up_input(self.mask());
        Pin {
            port: self.port,
            index: self.index,
            _mode: PhantomData,
        }
    }
}

impl OutputPin for Pin<Output> {
    type Error = Infallible;

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        let mask = self.mask();
        self.port.modify_output(|bits| bits | mask);
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        let mask = self.mask();
        self.port.modify_output(|bits| bits & !mask);
        Ok(())
    }
}

impl StatefulOutputPin for Pin<Output> {
    fn is_set_high(&self) -> Result<bool, Infallible> {
        Ok(self.port.output_latch() & self.mask() != 0)
    }

    fn is_set_low(&self) -> Result<bool, Infallible> {
        Ok(self.port.output_latch() & self.mask() == 0)
    }
}

impl ToggleableOutputPin for Pin<Output> {
    type Error = Infallible;

    #[inline]
    fn toggle(&mut self) -> Result<(), Infallible> {
        let mask = self.mask();
        self.port.modify_output(|bits| bits ^ mask);
        Ok(())
    }
}

impl InputPin for Pin<Input> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(self.port.read() & self.mask() != 0)
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(self.port.read() & self.mask() == 0)
    }
}

/// A whole port driven as the 8 segment lines of the display.
pub struct SegmentBus {
    port: Port,
}

impl SegmentBus {
    pub fn new(port: Port) -> Self {
        port.configure_output(0xFF);
        Self { port }
    }
}

impl SegmentPort for SegmentBus {
    type Error = Infallible;

    #[inline]
    fn write(&mut self, pattern: u8) -> Result<(), Infallible> {
        self.port.write(pattern);
        Ok(())
    }
}

// Counter board pin definitions
pub mod board {
    use super::*;

    // Status LEDs (PORTA)
    pub fn power_led() -> Pin<Output> {
        Port::A.pin(0).into_output()
    }
    pub fn up_led() -> Pin<Output> {
        Port::A.pin(1).into_output()
    }
    pub fn down_led() -> Pin<Output> {
        Port::A.pin(2).into_output()
    }

    // Digit selects PA4..PA7, ones digit first
    pub fn digit_selects() -> [Pin<Output>; 4] {
        [4, 5, 6, 7].map(|index| Port::A.pin(index).into_output())
    }

    // Segment lines (PORTC)
    pub fn segments() -> SegmentBus {
        SegmentBus::new(Port::C)
    }

    // Buttons (PORTB), active low with internal pull-ups
    pub fn btn_up() -> Pin<Input> {
        Port::B.pin(0).into_pull_up_input()
    }
    pub fn btn_clear() -> Pin<Input> {
        Port::B.pin(1).into_pull_up_input()
    }
    pub fn btn_stop() -> Pin<Input> {
        Port::B.pin(2).into_pull_up_input()
    }
    pub fn btn_down() -> Pin<Input> {
        Port::B.pin(3).into_pull_up_input()
    }
}
