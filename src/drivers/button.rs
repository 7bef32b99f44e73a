use crate::config::Polarity;
use embedded_hal::digital::v2::InputPin;

/// Debounced level of a pushbutton.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonLevel {
    Released,
    Pushed,
}

/// Edge reported by [`DebouncedButton::read`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Pressed,
    Released,
    NoChange,
}

impl ButtonAction {
    #[inline]
    pub fn is_pressed(self) -> bool {
        self == ButtonAction::Pressed
    }
}

/// Edge detector for one mechanical pushbutton.
///
/// After an edge is reported the pin is not sampled again until the settle
/// window has elapsed, so contact bounce is swallowed without blocking the
/// caller.
pub struct DebouncedButton<P> {
    pin: P,
    polarity: Polarity,
    level: ButtonLevel,
    settle_ms: u32,
    last_edge: Option<u32>,
}

impl<P: InputPin> DebouncedButton<P> {
    pub fn new(pin: P, polarity: Polarity, settle_ms: u32) -> Self {
        Self {
            pin,
            polarity,
            level: ButtonLevel::Released,
            settle_ms,
            last_edge: None,
        }
    }

    /// Sample the button at tick `now` and report at most one edge.
    pub fn read(&mut self, now: u32) -> Result<ButtonAction, P::Error> {
        if let Some(edge) = self.last_edge {
            if now.wrapping_sub(edge) < self.settle_ms {
                return Ok(ButtonAction::NoChange);
            }
            self.last_edge = None;
        }

        let pushed = self.polarity.is_asserted(self.pin.is_high()?);
        let action = match (self.level, pushed) {
            (ButtonLevel::Released, true) => {
                self.level = ButtonLevel::Pushed;
                ButtonAction::Pressed
            }
            (ButtonLevel::Pushed, false) => {
                self.level = ButtonLevel::Released;
                ButtonAction::Released
            }
            _ => return Ok(ButtonAction::NoChange),
        };

        self.last_edge = Some(now);
        Ok(action)
    }

    /// Last reported level
    pub fn level(&self) -> ButtonLevel {
        self.level
    }

    pub fn is_pushed(&self) -> bool {
        self.level == ButtonLevel::Pushed
    }
}
