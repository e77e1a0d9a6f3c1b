//! Steps the motor through each intensity, then pins it with an override.

#![no_std]
#![no_main]

use defmt::info;
use embassy_time::{
    Duration,
    Timer,
};
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
#[allow(clippy::wildcard_imports)]
use gamerpad::*;

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

const LEVELS: [Intensity; 5] = [
    Intensity::Stop,
    Intensity::Weak,
    Intensity::Medium,
    Intensity::Strong,
    Intensity::Full,
];

#[esp_rtos::main]
async fn main(_spawner: embassy_executor::Spawner) -> ! {
    let peripherals = gamerpad::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let mut pad = GamePad::new(EspBoard::from(resources));

    info!("Vibration demo: stepping intensities");
    for level in LEVELS {
        info!("{} -> duty {}", level, pad.duty_for(level));
        pad.drive(level);
        Timer::after(Duration::from_millis(600)).await;
    }

    // From here on every level runs at the override speed, even Stop.
    pad.set_override_speed(60);
    info!("Override 60 -> duty {}", pad.duty_for(Intensity::Stop));
    loop {
        pad.drive(Intensity::Stop);
        Timer::after(Duration::from_millis(800)).await;
        pad.switch_motor(Vibrator::On);
        Timer::after(Duration::from_millis(800)).await;
    }
}
