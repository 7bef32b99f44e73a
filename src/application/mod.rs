//! Application layer: the cooperative control loop
//!
//! One [`Application::step`] is one loop iteration: heartbeat, one counter
//! evaluation, then the service tick (clock + display refresh) and a 1 ms
//! pause. Everything the loop touches is owned here and handed to the
//! components by reference, nothing lives in globals.

pub mod counter;
pub mod heartbeat;

pub use counter::{Counter, CounterButtons, CounterLeds, CounterState, Transition};
pub use heartbeat::Heartbeat;

use crate::config::TICK_MS;
use crate::count::Count;
use crate::drivers::{Display, SegmentPort};
use crate::logger::Logger;
use crate::os::Millis;
use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin, ToggleableOutputPin};
use ufmt::uWrite;

/// Main application state and logic
pub struct Application<B, L, D, S, W> {
    clock: Millis,
    heartbeat: Heartbeat<L>,
    counter: Counter<B, L>,
    display: Display<D, S>,
    log: Logger<W>,
}

impl<B, L, D, S, W, E> Application<B, L, D, S, W>
where
    B: InputPin<Error = E>,
    L: OutputPin<Error = E> + ToggleableOutputPin<Error = E>,
    D: OutputPin<Error = E>,
    S: SegmentPort<Error = E>,
    W: uWrite,
{
    pub fn new(
        heartbeat: Heartbeat<L>,
        counter: Counter<B, L>,
        display: Display<D, S>,
        log: Logger<W>,
    ) -> Self {
        Self {
            clock: Millis::new(),
            heartbeat,
            counter,
            display,
            log,
        }
    }

    /// Announce startup and light the first digit.
    pub fn start(&mut self) -> Result<(), E> {
        let now = self.clock.now();
        self.log.info(now, "app", "up/down counter ready");
        self.display.refresh()
    }

    /// Run one iteration of the control loop.
    pub fn step<T: DelayMs<u16>>(&mut self, delay: &mut T) -> Result<(), E> {
        let now = self.clock.now();

        if self.heartbeat.update(now)? {
            self.log.debug(now, "heartbeat", "toggle");
        }

        if let Some(transition) = self.counter.execute(now, &mut self.display)? {
            self.log.info(now, "counter", &transition);
        }

        self.service_tick()?;
        delay.delay_ms(TICK_MS);
        Ok(())
    }

    /// Loop forever. Only returns if a pin operation fails.
    pub fn run<T: DelayMs<u16>>(&mut self, delay: &mut T) -> Result<Infallible, E> {
        loop {
            self.step(delay)?;
        }
    }

    /// Advance the clock and drive the next display digit.
    fn service_tick(&mut self) -> Result<(), E> {
        self.clock.tick();
        self.display.refresh()
    }

    pub fn now(&self) -> u32 {
        self.clock.now()
    }

    pub fn state(&self) -> CounterState {
        self.counter.state()
    }

    pub fn count(&self) -> Count {
        self.counter.count()
    }

    pub fn display(&self) -> &Display<D, S> {
        &self.display
    }

    pub fn clock_mut(&mut self) -> &mut Millis {
        &mut self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Polarity, Timing};
    use crate::drivers::{DebouncedButton, Led};
    use crate::drivers::fnd::glyph;
    use crate::logger::LogLevel;
    use crate::testing::{FakeButton, FakeConsole, FakeOutput, FakeSegments};
    use embedded_hal_mock::delay::MockNoop;

    type TestApp = Application<FakeButton, FakeOutput, FakeOutput, FakeSegments, FakeConsole>;

    struct Board {
        up: FakeButton,
        down: FakeButton,
        stop: FakeButton,
        clear: FakeButton,
        power_led: FakeOutput,
        digits: [FakeOutput; 4],
        segments: FakeSegments,
        console: FakeConsole,
    }

    impl Board {
        fn new() -> Self {
            let button = || FakeButton::new(Polarity::ActiveLow);
            Self {
                up: button(),
                down: button(),
                stop: button(),
                clear: button(),
                power_led: FakeOutput::default(),
                digits: Default::default(),
                segments: FakeSegments::default(),
                console: FakeConsole::default(),
            }
        }

        fn build(&self) -> TestApp {
            let timing = Timing::default();
            let debounced = |pin: &FakeButton| {
                DebouncedButton::new(pin.clone(), Polarity::ActiveLow, timing.debounce_ms)
            };
            let counter = Counter::new(
                CounterButtons {
                    up: debounced(&self.up),
                    down: debounced(&self.down),
                    stop: debounced(&self.stop),
                    clear: debounced(&self.clear),
                },
                CounterLeds {
                    up: Led::new(FakeOutput::default()),
                    down: Led::new(FakeOutput::default()),
                },
                timing.count_interval_ms,
            );
            let display = Display::new(
                self.digits.clone(),
                self.segments.clone(),
                Polarity::ActiveLow,
                Polarity::ActiveLow,
            );
            Application::new(
                Heartbeat::new(Led::new(self.power_led.clone()), timing.heartbeat_ms),
                counter,
                display,
                Logger::new(self.console.clone(), LogLevel::Info),
            )
        }
    }

    fn run_for(app: &mut TestApp, iterations: u32) {
        let mut delay = MockNoop::new();
        for _ in 0..iterations {
            app.step(&mut delay).unwrap();
        }
    }

    /// Digits the display would show, thousands first.
    fn readout(app: &TestApp) -> [u8; 4] {
        let number = app.display().number();
        [number.digit(3), number.digit(2), number.digit(1), number.digit(0)]
    }

    #[test]
    fn each_step_advances_the_clock_by_one() {
        let board = Board::new();
        let mut app = board.build();
        run_for(&mut app, 250);
        assert_eq!(app.now(), 250);
    }

    #[test]
    fn heartbeat_blinks_at_half_second() {
        let board = Board::new();
        let mut app = board.build();
        run_for(&mut app, 501);
        assert_eq!(board.power_led.toggles(), 1);
        run_for(&mut app, 500);
        assert_eq!(board.power_led.toggles(), 2);
    }

    #[test]
    fn up_then_down_scenario() {
        let board = Board::new();
        let mut app = board.build();
        app.start().unwrap();

        board.up.press();
        run_for(&mut app, 1);
        board.up.release();
        assert_eq!(app.state(), CounterState::CountingUp);

        run_for(&mut app, 100);
        assert_eq!(app.count().get(), 1);
        assert_eq!(readout(&app), [0, 0, 0, 1]);

        board.down.press();
        run_for(&mut app, 1);
        board.down.release();
        assert_eq!(app.state(), CounterState::CountingDown);

        run_for(&mut app, 100);
        assert_eq!(app.count().get(), 0);

        assert_eq!(
            board.console.text(),
            "[0] INF app: up/down counter ready\r\n\
             [0] INF counter: Stopped -> CountingUp\r\n\
             [101] INF counter: CountingUp -> CountingDown\r\n"
        );
    }

    #[test]
    fn wraps_from_9999_while_counting_up() {
        let board = Board::new();
        let mut app = board.build();

        board.down.press();
        run_for(&mut app, 1);
        board.down.release();
        run_for(&mut app, 100);
        assert_eq!(app.count(), Count::MAX);

        board.up.press();
        run_for(&mut app, 1);
        board.up.release();
        run_for(&mut app, 100);
        assert_eq!(app.count(), Count::ZERO);
        assert_eq!(readout(&app), [0, 0, 0, 0]);
    }

    #[test]
    fn clear_returns_to_stopped() {
        let board = Board::new();
        let mut app = board.build();

        board.up.press();
        run_for(&mut app, 1);
        board.up.release();
        run_for(&mut app, 350);
        assert_eq!(app.count().get(), 3);

        board.stop.press();
        run_for(&mut app, 1);
        board.stop.release();
        assert_eq!(app.state(), CounterState::Stopped);

        board.clear.press();
        run_for(&mut app, 1);
        assert_eq!(app.state(), CounterState::Clearing);
        run_for(&mut app, 1);
        board.clear.release();
        assert_eq!(app.state(), CounterState::Stopped);
        assert_eq!(app.count(), Count::ZERO);
    }

    #[test]
    fn display_shows_one_digit_per_tick() {
        let board = Board::new();
        let mut app = board.build();

        board.up.press();
        run_for(&mut app, 1);
        board.up.release();
        run_for(&mut app, 100);
        assert_eq!(app.count().get(), 1);

        // next refresh is at position 1 (tens): zero, then the ones digit
        let before = board.segments.writes().len();
        run_for(&mut app, 4);
        let writes = board.segments.writes();
        assert_eq!(
            &writes[before..],
            [glyph(0), glyph(0), glyph(0), glyph(1)].map(Option::unwrap)
        );
        let lit: Vec<bool> = board.digits.iter().map(|d| !d.is_set()).collect();
        assert_eq!(lit, [true, false, false, false]);
    }

    #[test]
    fn loop_keeps_running_while_a_press_settles() {
        let board = Board::new();
        let mut app = board.build();

        board.up.press();
        run_for(&mut app, 1);
        assert_eq!(app.state(), CounterState::CountingUp);

        // stop takes the first bounce; up chatter stays inside its settle window
        for step in 2..=11u32 {
            if step % 2 == 0 {
                board.up.release();
                board.stop.press();
            } else {
                board.up.press();
                board.stop.release();
            }
            run_for(&mut app, 1);
            assert_eq!(app.now(), step);
            assert_eq!(app.display().position(), (step % 4) as u8);
        }
        assert_eq!(app.state(), CounterState::Stopped);
    }

    #[test]
    fn survives_clock_wraparound() {
        let board = Board::new();
        let mut app = board.build();
        app.clock_mut().set(u32::MAX - 20);

        board.up.press();
        run_for(&mut app, 1);
        board.up.release();
        run_for(&mut app, 200);
        assert!(app.now() < 200);
        assert_eq!(app.count().get(), 2);
    }
}
