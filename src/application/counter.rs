//! Up/down/clear counter state machine

use crate::count::Count;
use crate::drivers::{DebouncedButton, Led, NumberSink};
use crate::os::Interval;
use embedded_hal::digital::v2::{InputPin, OutputPin, ToggleableOutputPin};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CounterState {
    Stopped,
    CountingUp,
    CountingDown,
    Clearing,
}

impl CounterState {
    pub fn name(self) -> &'static str {
        match self {
            CounterState::Stopped => "Stopped",
            CounterState::CountingUp => "CountingUp",
            CounterState::CountingDown => "CountingDown",
            CounterState::Clearing => "Clearing",
        }
    }
}

/// A state change taken by [`Counter::execute`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: CounterState,
    pub to: CounterState,
}

impl ufmt::uDisplay for Transition {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        f.write_str(self.from.name())?;
        f.write_str(" -> ")?;
        f.write_str(self.to.name())
    }
}

/// The four control buttons.
pub struct CounterButtons<B> {
    pub up: DebouncedButton<B>,
    pub down: DebouncedButton<B>,
    pub stop: DebouncedButton<B>,
    pub clear: DebouncedButton<B>,
}

/// Direction indicator LEDs.
pub struct CounterLeds<L> {
    pub up: Led<L>,
    pub down: Led<L>,
}

pub struct Counter<B, L> {
    state: CounterState,
    count: Count,
    buttons: CounterButtons<B>,
    leds: CounterLeds<L>,
    up_gate: Interval,
    down_gate: Interval,
}

impl<B, L, E> Counter<B, L>
where
    B: InputPin<Error = E>,
    L: OutputPin<Error = E> + ToggleableOutputPin<Error = E>,
{
    pub fn new(buttons: CounterButtons<B>, leds: CounterLeds<L>, interval_ms: u32) -> Self {
        Self {
            state: CounterState::Stopped,
            count: Count::ZERO,
            buttons,
            leds,
            up_gate: Interval::new(interval_ms),
            down_gate: Interval::new(interval_ms),
        }
    }

    /// Run one evaluation of the state machine at tick `now`.
    ///
    /// Buttons are sampled lazily in priority order: once a press decides the
    /// next state, the remaining buttons are left for the next evaluation.
    pub fn execute<N: NumberSink>(
        &mut self,
        now: u32,
        display: &mut N,
    ) -> Result<Option<Transition>, E> {
        let next = match self.state {
            CounterState::Stopped => {
                if self.buttons.up.read(now)?.is_pressed() {
                    CounterState::CountingUp
                } else if self.buttons.down.read(now)?.is_pressed() {
                    CounterState::CountingDown
                } else if self.buttons.clear.read(now)?.is_pressed() {
                    CounterState::Clearing
                } else {
                    CounterState::Stopped
                }
            }
            CounterState::CountingUp => {
                self.run_up(now, display)?;
                if self.buttons.stop.read(now)?.is_pressed() {
                    CounterState::Stopped
                } else if self.buttons.down.read(now)?.is_pressed() {
                    CounterState::CountingDown
                } else {
                    CounterState::CountingUp
                }
            }
            CounterState::CountingDown => {
                self.run_down(now, display)?;
                if self.buttons.stop.read(now)?.is_pressed() {
                    CounterState::Stopped
                } else if self.buttons.up.read(now)?.is_pressed() {
                    CounterState::CountingUp
                } else {
                    CounterState::CountingDown
                }
            }
            CounterState::Clearing => {
                self.clear(display);
                CounterState::Stopped
            }
        };

        if next == self.state {
            return Ok(None);
        }
        let transition = Transition {
            from: self.state,
            to: next,
        };
        self.state = next;
        Ok(Some(transition))
    }

    fn run_up<N: NumberSink>(&mut self, now: u32, display: &mut N) -> Result<(), E> {
        if !self.up_gate.ready(now) {
            return Ok(());
        }
        self.count = self.count.increment();
        display.set_number(self.count);

        self.leds.down.off()?;
        self.leds.up.toggle()
    }

    fn run_down<N: NumberSink>(&mut self, now: u32, display: &mut N) -> Result<(), E> {
        if !self.down_gate.ready(now) {
            return Ok(());
        }
        self.count = self.count.decrement();
        display.set_number(self.count);

        self.leds.down.toggle()?;
        self.leds.up.off()
    }

    fn clear<N: NumberSink>(&mut self, display: &mut N) {
        self.count = Count::ZERO;
        display.set_number(self.count);
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn count(&self) -> Count {
        self.count
    }
}
