//! Host-side pin doubles shared by the unit tests.
//!
//! The `embedded-hal-mock` pins cover strict read/set expectations but have no
//! toggle support, so LEDs and free-running scenarios use these fakes instead.
//! Every fake is a cheap handle over shared state: keep a clone to inspect
//! what the code under test did.

use crate::config::Polarity;
use crate::drivers::SegmentPort;
use core::convert::Infallible;
use embedded_hal::digital::v2::{InputPin, OutputPin, StatefulOutputPin, ToggleableOutputPin};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

#[derive(Clone, Default)]
pub struct FakeOutput {
    high: Rc<Cell<bool>>,
    toggles: Rc<Cell<u32>>,
}

impl FakeOutput {
    pub fn is_set(&self) -> bool {
        self.high.get()
    }

    pub fn toggles(&self) -> u32 {
        self.toggles.get()
    }
}

impl OutputPin for FakeOutput {
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.high.set(true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high.set(false);
        Ok(())
    }
}

impl StatefulOutputPin for FakeOutput {
    fn is_set_high(&self) -> Result<bool, Infallible> {
        Ok(self.high.get())
    }

    fn is_set_low(&self) -> Result<bool, Infallible> {
        Ok(!self.high.get())
    }
}

impl ToggleableOutputPin for FakeOutput {
    type Error = Infallible;

    fn toggle(&mut self) -> Result<(), Infallible> {
        self.high.set(!self.high.get());
        self.toggles.set(self.toggles.get() + 1);
        Ok(())
    }
}

/// A pushbutton wired with the given polarity, released at creation.
#[derive(Clone)]
pub struct FakeButton {
    high: Rc<Cell<bool>>,
    polarity: Polarity,
}

impl FakeButton {
    pub fn new(polarity: Polarity) -> Self {
        let button = Self {
            high: Rc::new(Cell::new(false)),
            polarity,
        };
        button.release();
        button
    }

    pub fn press(&self) {
        self.high.set(self.polarity == Polarity::ActiveHigh);
    }

    pub fn release(&self) {
        self.high.set(self.polarity == Polarity::ActiveLow);
    }
}

impl InputPin for FakeButton {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(self.high.get())
    }

    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(!self.high.get())
    }
}

#[derive(Clone, Default)]
pub struct FakeSegments {
    writes: Rc<RefCell<Vec<u8>>>,
}

impl FakeSegments {
    pub fn writes(&self) -> Vec<u8> {
        self.writes.borrow().clone()
    }
}

impl SegmentPort for FakeSegments {
    type Error = Infallible;

    fn write(&mut self, pattern: u8) -> Result<(), Infallible> {
        self.writes.borrow_mut().push(pattern);
        Ok(())
    }
}

/// Collects everything written through `ufmt`.
#[derive(Clone, Default)]
pub struct FakeConsole {
    text: Rc<RefCell<String>>,
}

impl FakeConsole {
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl ufmt::uWrite for FakeConsole {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.text.borrow_mut().push_str(s);
        Ok(())
    }
}
