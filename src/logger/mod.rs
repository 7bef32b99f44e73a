//! Timestamped line logger
//!
//! Lines look like `[1234] INF counter: Stopped -> CountingUp` and end in
//! CRLF. Write errors are dropped, the control loop never waits on a failed
//! console.

use ufmt::{uDisplay, uWrite, uwrite};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    /// Default ceiling: `Debug` when built with the `debug` feature.
    pub const fn default_max() -> Self {
        if cfg!(feature = "debug") {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }

    fn tag(self) -> &'static str {
        match self {
            LogLevel::Error => "ERR",
            LogLevel::Warn => "WRN",
            LogLevel::Info => "INF",
            LogLevel::Debug => "DBG",
        }
    }
}

pub struct Logger<W> {
    out: W,
    max_level: LogLevel,
}

impl<W: uWrite> Logger<W> {
    pub fn new(out: W, max_level: LogLevel) -> Self {
        Self { out, max_level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.max_level
    }

    pub fn set_max_level(&mut self, level: LogLevel) {
        self.max_level = level;
    }

    pub fn log<M>(&mut self, level: LogLevel, timestamp: u32, target: &str, message: &M)
    where
        M: uDisplay + ?Sized,
    {
        if !self.enabled(level) {
            return;
        }
        uwrite!(
            self.out,
            "[{}] {} {}: {}\r\n",
            timestamp,
            level.tag(),
            target,
            message
        )
        .ok();
    }

    pub fn error<M: uDisplay + ?Sized>(&mut self, timestamp: u32, target: &str, message: &M) {
        self.log(LogLevel::Error, timestamp, target, message)
    }

    pub fn warn<M: uDisplay + ?Sized>(&mut self, timestamp: u32, target: &str, message: &M) {
        self.log(LogLevel::Warn, timestamp, target, message)
    }

    pub fn info<M: uDisplay + ?Sized>(&mut self, timestamp: u32, target: &str, message: &M) {
        self.log(LogLevel::Info, timestamp, target, message)
    }

    pub fn debug<M: uDisplay + ?Sized>(&mut self, timestamp: u32, target: &str, message: &M) {
        self.log(LogLevel::Debug, timestamp, target, message)
    }

    pub fn release(self) -> W {
        self.out
    }
}
