use avr_device::atmega128a::TC0;
use embedded_hal::blocking::delay::DelayMs;

use crate::config::CPU_FREQ_HZ;

// TCCR0 CS02:0, clk/64
const PRESCALER_DIV64: u8 = 0b100;
const PRESCALER_MASK: u8 = 0x07;

// Timer0 counts per millisecond at /64 (16MHz/64 = 250kHz)
const TICKS_PER_MS: u8 = (CPU_FREQ_HZ / 64 / 1000) as u8;

/// Busy-wait millisecond delay on Timer0.
pub struct Delay {
    timer: TC0,
}

impl Delay {
    pub fn new(timer: TC0) -> Self {
        // Normal mode, stopped
        timer.tccr0.write(|w| unsafe { w.bits(0) });
        timer.tcnt0.write(|w| unsafe { w.bits(0) });
        Self { timer }
    }

    fn start(&mut self) {
        self.timer.tccr0.modify(|r, w| unsafe {
            w.bits((r.bits() & !PRESCALER_MASK) | PRESCALER_DIV64)
        });
    }

    fn stop(&mut self) {
        self.timer
            .tccr0
            .modify(|r, w| unsafe { w.bits(r.bits() & !PRESCALER_MASK) });
    }

    pub fn delay_ms(&mut self, ms: u16) {
        self.timer.tcnt0.write(|w| unsafe { w.bits(0) });
        self.start();

        for _ in 0..ms {
            while self.timer.tcnt0.read().bits() < TICKS_PER_MS {}
            self.timer.tcnt0.write(|w| unsafe { w.bits(0) });
        }

        self.stop();
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        Delay::delay_ms(self, ms)
    }
}
