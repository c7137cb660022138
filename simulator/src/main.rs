//! Joystick Marker Simulator for Desktop.
//!
//! Runs the firmware's render loop and button handling against an
//! embedded-graphics-simulator window.
//!
//! # Controls
//!
//! - **Mouse**: Joystick position
//! - **J**: Joystick button (green LED, border style)
//! - **A**: Button A (enable/disable blue/red LEDs)
//! - **B**: Unwired line, always ignored

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod hardware;
mod surface;
mod timing;

use std::thread;
use std::time::Instant;

use embassy_futures::block_on;
use embedded_graphics_simulator::SimulatorEvent;
use embedded_graphics_simulator::sdl2::Keycode;
use joystick_pico::config::{BUTTON_A_GPIO, JOYSTICK_BUTTON_GPIO};
use joystick_pico::control::RenderLoop;
use joystick_pico::display::Surface;
use joystick_pico::leds::IntensityLeds;
use joystick_pico::mapping::LedIntensity;
use joystick_pico::render::clear_frame;
use joystick_pico::state::{ButtonAction, ButtonHandler, ButtonSource, SharedMode};

use crate::hardware::{MouseJoystick, SimPwm, percent};
use crate::surface::SimSurface;
use crate::timing::FRAME_TIME;

/// GPIO line of button B, present on the board but not wired to a handler.
const BUTTON_B_GPIO: u8 = 6;

fn main() {
    let mut surface = SimSurface::new("Joystick Marker Sim");

    // Blank frame before the loop, like the firmware's display bring-up
    clear_frame(&mut surface).ok();
    surface.flush().ok();

    let mode = SharedMode::new();
    let mut handler = ButtonHandler::new();
    let mut joystick = MouseJoystick::new();
    let mut green = SimPwm::new();
    let mut render_loop = RenderLoop::new(IntensityLeds::new(SimPwm::new(), SimPwm::new()));

    let boot = Instant::now();
    let mut last_leds = (LedIntensity::OFF, 0u16);

    println!("Main loop starting");

    loop {
        // Handle events
        for ev in surface.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::MouseMove { point } => joystick.track(point),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    let gpio = match keycode {
                        Keycode::J => JOYSTICK_BUTTON_GPIO,
                        Keycode::A => BUTTON_A_GPIO,
                        Keycode::B => BUTTON_B_GPIO,
                        _ => continue,
                    };
                    let source = ButtonSource::from_gpio(gpio);
                    let now_us = boot.elapsed().as_micros() as u64;
                    if let Some(action) = handler.handle(source, now_us, &mode, &mut green) {
                        log_action(action);
                    }
                }
                _ => {}
            }
        }

        let cycle = block_on(render_loop.cycle(&mut surface, &mut joystick, &mode));

        let leds = (cycle.intensity, green.duty());
        if leds != last_leds {
            println!(
                "LEDs: blue {}% red {}% green {}%",
                percent(cycle.intensity.blue),
                percent(cycle.intensity.red),
                percent(green.duty())
            );
            last_leds = leds;
        }

        thread::sleep(FRAME_TIME);
    }
}

/// Same diagnostic lines the firmware prints over RTT.
fn log_action(action: ButtonAction) {
    println!("{} pressed", action.source().label());

    match action {
        ButtonAction::GreenLedToggled {
            green_led_on,
            border_style,
        } => {
            println!("Green LED: {}", if green_led_on { "ON" } else { "OFF" });
            println!("Border style: {}", border_style.label());
        }
        ButtonAction::PwmLedsToggled { enabled } => {
            println!("PWM LEDs: {}", if enabled { "enabled" } else { "disabled" });
        }
    }
}
