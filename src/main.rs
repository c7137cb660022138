//! Joystick Marker Firmware for Raspberry Pi Pico (RP2040)
//!
//! Moves a square across the SSD1306 OLED with the analog joystick and drives
//! the blue/red LEDs with joystick deflection.
//!
//! # Architecture
//!
//! - Main task (thread mode): render loop, one frame every 50 ms (sample,
//!   draw, flush, LEDs)
//! - Button task (interrupt executor on `SWI_IRQ_1`): woken by falling-edge
//!   GPIO interrupts, updates mode flags
//!
//! The button executor runs at interrupt priority, so a press is handled and
//! timestamped even while the render loop is inside the blocking I2C flush.
//! The tasks share nothing but [`SharedMode`]; the button task writes it, the
//! render loop reads it.
//!
//! # Button Controls
//!
//! - **Joystick button**: Toggle green LED, cycle border style (Simple/Double)
//! - **A**: Enable/disable the joystick-driven blue/red LEDs

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (not testable on host)
mod board;
mod joystick;
mod tasks;

use defmt::{error, info, trace};
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_time::Timer;
use joystick_pico::config::LOOP_PERIOD_MS;
use joystick_pico::control::RenderLoop;
use joystick_pico::error::InitError;
use joystick_pico::leds::IntensityLeds;
use joystick_pico::state::SharedMode;
use {defmt_rtt as _, panic_probe as _};

use crate::board::{Board, init_board};
use crate::tasks::button_task;

/// Mode flags: written by the button task, read by the render loop.
static MODE: SharedMode = SharedMode::new();

/// Executor for button handling; preempts the thread-mode render loop.
static BUTTON_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    unsafe { BUTTON_EXECUTOR.on_interrupt() }
}

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"joystick-pico"),
    embassy_rp::binary_info::rp_program_description!(c"Joystick marker on SSD1306 with PWM LEDs"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Log the failed startup step and halt. panic-probe reports the panic to
/// the debug probe, so `probe-rs run` exits with an error.
fn abort_startup(err: InitError) -> ! {
    error!("Failed to initialize components: {}", err.message());
    defmt::panic!("startup aborted");
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Joystick firmware starting...");

    let p = embassy_rp::init(Default::default());

    let Board {
        mut display,
        mut joystick,
        joystick_button,
        button_a,
        blue,
        red,
        green,
    } = init_board(p).unwrap_or_else(|e| abort_startup(e));

    // Any NVIC priority preempts thread mode
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let button_spawner = BUTTON_EXECUTOR.start(interrupt::SWI_IRQ_1);
    button_spawner
        .spawn(button_task(joystick_button, button_a, green, &MODE))
        .unwrap_or_else(|_| abort_startup(InitError::TaskSpawn));
    info!("Button task spawned");

    let mut render_loop = RenderLoop::new(IntensityLeds::new(blue, red));

    info!("Main loop starting");

    loop {
        let cycle = render_loop.cycle(&mut display, &mut joystick, &MODE).await;

        trace!(
            "adc=({}, {}) pos=({}, {}) blue={} red={}",
            cycle.sample.x,
            cycle.sample.y,
            cycle.position.x,
            cycle.position.y,
            cycle.intensity.blue,
            cycle.intensity.red
        );

        // Avoid display flicker
        Timer::after_millis(LOOP_PERIOD_MS).await;
    }
}
