//! Up/down/clear counter firmware for the ATmega128
//!
//! A single cooperative loop polls four pushbuttons, runs the counter state
//! machine and multiplexes a 4-digit 7-segment display. The core is generic
//! over `embedded-hal` pins; [`hal`] binds it to the ATmega128 ports.
#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod config;
pub mod count;
pub mod drivers;
pub mod logger;
pub mod os;

#[cfg(target_arch = "avr")]
pub mod hal;

#[cfg(test)]
mod testing;

pub use application::Application;
pub use count::Count;
