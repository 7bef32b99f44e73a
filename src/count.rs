//! Four-digit decimal counter value

use crate::config::MAX_COUNT;

/// A value in `0..=9999`.
///
/// Every constructor and arithmetic step keeps the value in range, so the
/// display never has to clamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Count(u16);

impl Count {
    pub const ZERO: Count = Count(0);
    pub const MAX: Count = Count(MAX_COUNT);

    /// Returns `None` for values above 9999.
    pub const fn new(value: u16) -> Option<Self> {
        if value > MAX_COUNT {
            None
        } else {
            Some(Count(value))
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Next value, 9999 rolls over to 0.
    pub const fn increment(self) -> Self {
        if self.0 >= MAX_COUNT {
            Count(0)
        } else {
            Count(self.0 + 1)
        }
    }

    /// Previous value, 0 rolls under to 9999.
    pub const fn decrement(self) -> Self {
        if self.0 == 0 {
            Count(MAX_COUNT)
        } else {
            Count(self.0 - 1)
        }
    }

    /// Decimal digit at `position` (0 = ones, 3 = thousands).
    pub const fn digit(self, position: u8) -> u8 {
        let divisor = match position {
            0 => 1,
            1 => 10,
            2 => 100,
            3 => 1000,
            _ => return 0,
        };
        ((self.0 / divisor) % 10) as u8
    }
}

impl From<Count> for u16 {
    fn from(count: Count) -> u16 {
        count.0
    }
}

impl ufmt::uDisplay for Count {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        ufmt::uDisplay::fmt(&self.0, f)
    }
}
