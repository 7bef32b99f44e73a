#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use avr_device::atmega128a::Peripherals;
    use updown_counter::application::{
        Application, Counter, CounterButtons, CounterLeds, Heartbeat,
    };
    use updown_counter::config::{
        Timing, BUTTON_POLARITY, DIGIT_SELECT_POLARITY, SEGMENT_POLARITY,
    };
    use updown_counter::drivers::{DebouncedButton, Display, Led, SerialConsole};
    use updown_counter::hal::{board, Delay, Uart};
    use updown_counter::logger::{LogLevel, Logger};

    #[avr_device::entry]
    fn main() -> ! {
        let dp = Peripherals::take().unwrap();
        let timing = Timing::default();

        let console = SerialConsole::new(Uart::new(dp.USART0));
        let mut delay = Delay::new(dp.TC0);

        let button = |pin| DebouncedButton::new(pin, BUTTON_POLARITY, timing.debounce_ms);
        let counter = Counter::new(
            CounterButtons {
                up: button(board::btn_up()),
                down: button(board::btn_down()),
                stop: button(board::btn_stop()),
                clear: button(board::btn_clear()),
            },
            CounterLeds {
                up: Led::new(board::up_led()),
                down: Led::new(board::down_led()),
            },
            timing.count_interval_ms,
        );
        let display = Display::new(
            board::digit_selects(),
            board::segments(),
            DIGIT_SELECT_POLARITY,
            SEGMENT_POLARITY,
        );
        let heartbeat = Heartbeat::new(Led::new(board::power_led()), timing.heartbeat_ms);

        let mut app = Application::new(
            heartbeat,
            counter,
            display,
            Logger::new(console, LogLevel::default_max()),
        );

        // Board pins never fail.
        let started = app.start().and_then(|()| app.run(&mut delay));
        match started {
            Ok(never) => match never {},
            Err(never) => match never {},
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
