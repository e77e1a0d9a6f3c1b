//! Prints the stick position in both analog and switch form.

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

#[esp_rtos::main]
async fn main(_spawner: embassy_executor::Spawner) -> ! {
    let peripherals = gamerpad::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let mut pad = GamePad::new(EspBoard::from(resources));

    loop {
        let x = pad.read_x(AxisMode::Analog);
        let y = pad.read_y(AxisMode::Analog);
        let sx = pad.read_x(AxisMode::Switch);
        let sy = pad.read_y(AxisMode::Switch);
        info!("x={} y={} switch=({}, {})", x.code(), y.code(), sx, sy);
        Timer::after(Duration::from_millis(200)).await;
    }
}
