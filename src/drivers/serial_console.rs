use embedded_hal::serial::Write;

/// Text output over a serial transmitter, blocking per byte.
pub struct SerialConsole<TX> {
    tx: TX,
}

impl<TX: Write<u8>> SerialConsole<TX> {
    pub fn new(tx: TX) -> Self {
        Self { tx }
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<(), TX::Error> {
        nb::block!(self.tx.write(byte))
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), TX::Error> {
        for byte in s.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }
}

impl<TX: Write<u8>> ufmt::uWrite for SerialConsole<TX> {
    type Error = TX::Error;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        SerialConsole::write_str(self, s)
    }
}
