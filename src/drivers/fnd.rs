//! Multiplexed 4-digit 7-segment display (FND)
//!
//! Only one digit is lit at a time. Each [`Display::refresh`] call blanks all
//! digits, writes the segments for the next position and selects it, so the
//! caller must refresh at 400 Hz or more for a steady readout.

use crate::config::{Polarity, DISPLAY_DIGITS};
use crate::count::Count;
use embedded_hal::digital::v2::OutputPin;

// Segment bit pattern: DP,G,F,E,D,C,B,A (0 = lit, common anode)
const SEGMENT_FONT: [u8; 10] = [
    0xC0, // 0
    0xF9, // 1
    0xA4, // 2
    0xB0, // 3
    0x99, // 4
    0x92, // 5
    0x82, // 6
    0xF8, // 7
    0x80, // 8
    0x90, // 9
];

/// Active-low segment pattern for a decimal digit.
pub fn glyph(digit: u8) -> Option<u8> {
    SEGMENT_FONT.get(digit as usize).copied()
}

/// An 8-bit output port driving the segment lines in one write.
pub trait SegmentPort {
    type Error;

    fn write(&mut self, pattern: u8) -> Result<(), Self::Error>;
}

/// Receiver of the number the counter wants shown.
pub trait NumberSink {
    fn set_number(&mut self, number: Count);
}

/// Time-multiplexed display driver.
///
/// `D` is a digit-select line, index 0 being the ones digit.
pub struct Display<D, S> {
    digits: [D; DISPLAY_DIGITS],
    segments: S,
    select_polarity: Polarity,
    segment_polarity: Polarity,
    position: u8,
    number: Count,
}

impl<D, S, E> Display<D, S>
where
    D: OutputPin<Error = E>,
    S: SegmentPort<Error = E>,
{
    pub fn new(
        digits: [D; DISPLAY_DIGITS],
        segments: S,
        select_polarity: Polarity,
        segment_polarity: Polarity,
    ) -> Self {
        Self {
            digits,
            segments,
            select_polarity,
            segment_polarity,
            position: 0,
            number: Count::ZERO,
        }
    }

    /// Drive the next digit position. Call continuously from the main loop.
    pub fn refresh(&mut self) -> Result<(), E> {
        self.blank()?;

        let position = self.position;
        self.show_digit(self.number.digit(position))?;
        self.select(position)?;

        self.position = (position + 1) % DISPLAY_DIGITS as u8;
        Ok(())
    }

    /// Turn every digit off.
    pub fn blank(&mut self) -> Result<(), E> {
        let polarity = self.select_polarity;
        for digit in self.digits.iter_mut() {
            deactivate(digit, polarity)?;
        }
        Ok(())
    }

    fn show_digit(&mut self, digit: u8) -> Result<(), E> {
        // Out-of-range digits leave the segment port untouched.
        let Some(pattern) = glyph(digit) else {
            return Ok(());
        };
        let pattern = match self.segment_polarity {
            Polarity::ActiveLow => pattern,
            Polarity::ActiveHigh => !pattern,
        };
        self.segments.write(pattern)
    }

    fn select(&mut self, position: u8) -> Result<(), E> {
        let polarity = self.select_polarity;
        match self.digits.get_mut(position as usize) {
            Some(digit) => activate(digit, polarity),
            None => Ok(()),
        }
    }

    pub fn number(&self) -> Count {
        self.number
    }

    /// Position the next [`refresh`](Self::refresh) will light.
    pub fn position(&self) -> u8 {
        self.position
    }
}

impl<D, S> NumberSink for Display<D, S> {
    fn set_number(&mut self, number: Count) {
        self.number = number;
    }
}

fn activate<D: OutputPin>(pin: &mut D, polarity: Polarity) -> Result<(), D::Error> {
    match polarity {
        Polarity::ActiveHigh => pin.set_high(),
        Polarity::ActiveLow => pin.set_low(),
    }
}

fn deactivate<D: OutputPin>(pin: &mut D, polarity: Polarity) -> Result<(), D::Error> {
    match polarity {
        Polarity::ActiveHigh => pin.set_low(),
        Polarity::ActiveLow => pin.set_high(),
    }
}
