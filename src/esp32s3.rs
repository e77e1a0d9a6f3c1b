//! Board support for the ESP32-S3 handheld.
//!
//! | Line | GPIO | Peripheral |
//! |------|------|------------|
//! | Key Z | 13 | input |
//! | Key C | 38 | input |
//! | Key D | 12 | input |
//! | Key E | 14 | input |
//! | Key F (select) | 11 | input |
//! | Stick X | 4 | ADC1 |
//! | Stick Y | 5 | ADC1 |
//! | Motor | 20 | LEDC, 10-bit |
//!
//! Key lines live behind a critical-section mutex so the
//! [`key_watch_task`] can sample them while the [`GamePad`](crate::GamePad)
//! owns the board.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::{
    Mutex,
    raw::CriticalSectionRawMutex,
};
use embassy_time::{
    Duration,
    Timer,
};
use embedded_hal::{
    digital::PinState,
    pwm::SetDutyCycle,
};
use esp_hal::{
    Blocking,
    analog::adc::{
        Adc,
        AdcConfig,
        AdcPin,
        Attenuation,
    },
    assign_resources,
    clock::CpuClock,
    gpio::{
        DriveMode,
        Flex,
        InputConfig,
    },
    ledc::{
        LSGlobalClkSource,
        Ledc,
        LowSpeed,
        channel::{
            self,
            ChannelIFace as _,
        },
        timer::{
            self,
            TimerIFace as _,
        },
    },
    peripherals::{
        ADC1,
        GPIO4,
        GPIO5,
    },
    time::Rate,
};

use crate::{
    Board,
    Button,
    ButtonEvent,
    ButtonTracker,
    EventBus,
    Handler,
    MOTOR_PIN,
    Pin,
    Pull,
    mk_static,
};

/// Handlers the board's event bus can hold.
pub const MAX_HANDLERS: usize = 16;

/// Key sampling period; doubles as the debounce window.
const POLL_MS: u64 = 20;

pub type KeyLines = Mutex<CriticalSectionRawMutex, RefCell<[Flex<'static>; 5]>>;
pub type BoardBus = EventBus<CriticalSectionRawMutex, MAX_HANDLERS>;

/// Key events for the board, fed by [`key_watch_task`].
pub static EVENTS: BoardBus = EventBus::new();

// ── Pin / peripheral assignments ────────────────────────────────────────────

assign_resources! {
    pub Resources<'d> {
        keys: KeyResources<'d> {
            z: GPIO13,
            c: GPIO38,
            d: GPIO12,
            e: GPIO14,
            f: GPIO11,
        },
        stick: StickResources<'d> {
            x: GPIO4,
            y: GPIO5,
            adc: ADC1,
        },
        vibra: VibrationResources<'d> {
            motor: GPIO20,
            ledc: LEDC,
        },
    }
}

// ── Board initialisation ────────────────────────────────────────────────────

/// CPU clock the handheld runs at.
///
/// The firmware only samples five keys, two ADC channels and drives one PWM
/// output, so the slowest PLL setting is plenty and keeps the battery
/// draw down.
pub const HANDHELD_CPU_CLOCK: CpuClock = CpuClock::_80MHz;

/// Bring up esp-hal at [`HANDHELD_CPU_CLOCK`] and return the peripherals.
///
/// Call this once at the top of `main`, take what the firmware needs with
/// [`split_resources!`], then turn the [`Resources`] into an [`EspBoard`].
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    init_with_clock(HANDHELD_CPU_CLOCK)
}

/// [`init`] for firmware that does heavier work next to the pad.
#[must_use]
pub fn init_with_clock(cpu_clock: CpuClock) -> esp_hal::peripherals::Peripherals {
    esp_hal::init(esp_hal::Config::default().with_cpu_clock(cpu_clock))
}

impl From<Resources<'static>> for EspBoard {
    fn from(res: Resources<'static>) -> Self {
        Self::new(res)
    }
}

// ── Board ───────────────────────────────────────────────────────────────────

/// The handheld's key, stick and motor peripherals.
pub struct EspBoard {
    keys: &'static KeyLines,
    adc: Adc<'static, ADC1<'static>, Blocking>,
    x: AdcPin<GPIO4<'static>, ADC1<'static>>,
    y: AdcPin<GPIO5<'static>, ADC1<'static>>,
    motor: channel::Channel<'static, LowSpeed>,
    events: &'static BoardBus,
}

impl EspBoard {
    /// Bring up the board. Call once; the key lines and motor timer are
    /// placed in statics.
    pub fn new(res: Resources<'static>) -> Self {
        let keys = mk_static!(KeyLines, Mutex::new(RefCell::new(key_lines(res.keys))));

        let mut adc_config = AdcConfig::new();
        let x = adc_config.enable_pin(res.stick.x, Attenuation::_11dB);
        let y = adc_config.enable_pin(res.stick.y, Attenuation::_11dB);
        let adc = Adc::new(res.stick.adc, adc_config);

        Self {
            keys,
            adc,
            x,
            y,
            motor: motor_channel(res.vibra),
            events: &EVENTS,
        }
    }

    /// Key lines, for [`key_watch_task`].
    pub const fn keys(&self) -> &'static KeyLines {
        self.keys
    }

    pub const fn events(&self) -> &'static BoardBus {
        self.events
    }
}

fn key_lines(res: KeyResources<'static>) -> [Flex<'static>; 5] {
    // Same order as `Button::ALL`.
    let mut lines = [
        Flex::new(res.z),
        Flex::new(res.c),
        Flex::new(res.d),
        Flex::new(res.e),
        Flex::new(res.f),
    ];
    for line in &mut lines {
        line.set_input_enable(true);
    }
    lines
}

fn motor_channel(res: VibrationResources<'static>) -> channel::Channel<'static, LowSpeed> {
    let mut ledc = Ledc::new(res.ledc);
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    let motor_timer = mk_static!(
        timer::Timer<'static, LowSpeed>,
        ledc.timer::<LowSpeed>(timer::Number::Timer0)
    );
    // 10-bit duty matches the driver's 0..=1020 range.
    motor_timer
        .configure(timer::config::Config {
            duty: timer::config::Duty::Duty10Bit,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_khz(20),
        })
        .unwrap();
    let motor_timer: &'static timer::Timer<'static, LowSpeed> = motor_timer;

    let mut motor = ledc.channel(channel::Number::Channel0, res.motor);
    motor
        .configure(channel::config::Config {
            timer: motor_timer,
            duty_pct: 0,
            drive_mode: DriveMode::PushPull,
        })
        .unwrap();
    motor
}

impl Board for EspBoard {
    fn set_pull(&mut self, pin: Pin, pull: Pull) {
        let Some(button) = Button::from_pin(pin) else {
            warn!("no pull control on {:?}", pin);
            return;
        };
        let pull = match pull {
            Pull::None => esp_hal::gpio::Pull::None,
            Pull::Up => esp_hal::gpio::Pull::Up,
            Pull::Down => esp_hal::gpio::Pull::Down,
        };
        self.keys.lock(|lines| {
            lines.borrow_mut()[button.index()]
                .apply_input_config(&InputConfig::default().with_pull(pull));
        });
    }

    fn read_digital(&mut self, pin: Pin) -> PinState {
        let Some(button) = Button::from_pin(pin) else {
            warn!("{:?} is not a digital input", pin);
            return PinState::High;
        };
        let low = self.keys.lock(|lines| lines.borrow()[button.index()].is_low());
        PinState::from(!low)
    }

    fn read_analog(&mut self, pin: Pin) -> u16 {
        let sample = match pin {
            Pin::P1 => nb::block!(self.adc.read_oneshot(&mut self.x)),
            Pin::P2 => nb::block!(self.adc.read_oneshot(&mut self.y)),
            _ => {
                warn!("{:?} is not an analog input", pin);
                return 0;
            }
        };
        // ADC1 is 12-bit; the driver works on 10.
        sample.map_or_else(
            |()| {
                error!("ADC read failed on {:?}", pin);
                0
            },
            |raw| raw >> 2,
        )
    }

    fn write_analog(&mut self, pin: Pin, duty: u16) {
        if pin != MOTOR_PIN {
            warn!("{:?} has no PWM output", pin);
            return;
        }
        let duty = duty.min(self.motor.max_duty_cycle());
        if self.motor.set_duty_cycle(duty).is_err() {
            error!("motor rejected duty {}", duty);
        }
    }

    fn register_handler(&mut self, button: Button, event: ButtonEvent, handler: Handler) {
        match self.events.subscribe(button, event, handler) {
            Ok(sub) => debug!(
                "handler for {:?} {:?} in slot {}",
                sub.button(),
                sub.event(),
                sub.slot()
            ),
            Err(err) => error!("handler for {:?} {:?} dropped: {:?}", button, event, err),
        }
    }
}

// ── Tasks ───────────────────────────────────────────────────────────────────

/// Sample the keys and post their transitions to `events`.
#[embassy_executor::task]
pub async fn key_watch_task(keys: &'static KeyLines, events: &'static BoardBus) {
    info!("key watcher started");
    let mut tracker = ButtonTracker::new();

    loop {
        for button in Button::ALL {
            let pressed = keys.lock(|lines| lines.borrow()[button.index()].is_low());
            tracker.feed(events, button, pressed);
        }
        Timer::after(Duration::from_millis(POLL_MS)).await;
    }
}

/// Run registered key handlers as events arrive.
#[embassy_executor::task]
pub async fn event_dispatch_task(events: &'static BoardBus) {
    events.run().await
}
