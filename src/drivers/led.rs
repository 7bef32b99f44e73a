use embedded_hal::digital::v2::{OutputPin, ToggleableOutputPin};

/// A status LED lit by driving its pin high.
pub struct Led<P> {
    pin: P,
}

impl<P, E> Led<P>
where
    P: OutputPin<Error = E> + ToggleableOutputPin<Error = E>,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn off(&mut self) -> Result<(), E> {
        self.pin.set_low()
    }

    pub fn toggle(&mut self) -> Result<(), E> {
        self.pin.toggle()
    }
}
