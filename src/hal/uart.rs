use avr_device::atmega128a::USART0;
use core::convert::Infallible;

use crate::config::{CPU_FREQ_HZ, UART_BAUD};

// UCSR0A / UCSR0B / UCSR0C bits
const TXC: u8 = 1 << 6;
const UDRE: u8 = 1 << 5;
const TXEN: u8 = 1 << 3;
const UCSZ_8BIT: u8 = 0b11 << 1;

const UBRR: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;

/// USART0 transmitter in polled 8N1 mode. No interrupts are used and the
/// receiver stays off.
pub struct Uart {
    usart: USART0,
    // TXC only sets after a frame completes, so flush must not wait on it
    // before the first write.
    sending: bool,
}

impl Uart {
    pub fn new(usart: USART0) -> Self {
        usart.ubrr0h.write(|w| unsafe { w.bits((UBRR >> 8) as u8) });
        usart.ubrr0l.write(|w| unsafe { w.bits(UBRR as u8) });
        usart.ucsr0c.write(|w| unsafe { w.bits(UCSZ_8BIT) });
        usart.ucsr0b.write(|w| unsafe { w.bits(TXEN) });
        Self {
            usart,
            sending: false,
        }
    }

    #[inline]
    fn status(&self) -> u8 {
        self.usart.ucsr0a.read().bits()
    }
}

impl embedded_hal::serial::Write<u8> for Uart {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        if self.status() & UDRE == 0 {
            return Err(nb::Error::WouldBlock);
        }
        // Clear TXC (write one) so flush can wait for this byte.
        self.usart
            .ucsr0a
            .modify(|r, w| unsafe { w.bits(r.bits() | TXC) });
        self.usart.udr0.write(|w| unsafe { w.bits(byte) });
        self.sending = true;
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Infallible> {
        if !self.sending {
            return Ok(());
        }
        if self.status() & (UDRE | TXC) != (UDRE | TXC) {
            return Err(nb::Error::WouldBlock);
        }
        self.sending = false;
        Ok(())
    }
}
