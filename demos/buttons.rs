//! Logs key transitions and polls the select key via defmt.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
#[allow(clippy::wildcard_imports)]
use gamerpad::*;

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

fn on_z_pressed() {
    info!("Z pressed");
}

fn on_z_released() {
    info!("Z released");
}

fn on_c_clicked() {
    info!("C clicked");
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = gamerpad::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let mut pad = GamePad::new(EspBoard::new(resources));
    spawner.must_spawn(key_watch_task(pad.board().keys(), pad.board().events()));
    spawner.must_spawn(event_dispatch_task(pad.board().events()));

    pad.on_event(Button::Z, ButtonEvent::Pressed, on_z_pressed);
    pad.on_event(Button::Z, ButtonEvent::Released, on_z_released);
    pad.on_event(Button::C, ButtonEvent::Clicked, on_c_clicked);

    info!("Press any key");
    loop {
        let held = pad.pressed_buttons();
        if held[Button::F.index()] {
            info!("Select held");
        }
        embassy_time::Timer::after(embassy_time::Duration::from_millis(250)).await;
    }
}
