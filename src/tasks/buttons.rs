//! Button edge task.
//!
//! Both buttons are armed for falling edges (press-to-ground with pull-ups).
//! The GPIO bank interrupt wakes this task on the interrupt executor, which
//! preempts the render loop, so the edge is timestamped within microseconds
//! and passed to the shared [`ButtonHandler`]. One handler, and therefore one
//! debounce clock, serves both buttons.

use defmt::{debug, info};
use embassy_futures::select::{Either, select};
use embassy_rp::gpio::Input;
use embassy_rp::pwm::PwmOutput;
use embassy_time::Instant;
use joystick_pico::state::{ButtonAction, ButtonHandler, ButtonSource, SharedMode};

/// Button task - owns both button inputs and the green LED channel.
#[embassy_executor::task]
pub async fn button_task(
    mut joystick_button: Input<'static>,
    mut button_a: Input<'static>,
    mut green: PwmOutput<'static>,
    mode: &'static SharedMode,
) {
    info!("Button task started");

    let mut handler = ButtonHandler::new();

    loop {
        let source = match select(joystick_button.wait_for_falling_edge(), button_a.wait_for_falling_edge()).await {
            Either::First(()) => ButtonSource::JoystickButton,
            Either::Second(()) => ButtonSource::ButtonA,
        };
        let now_us = Instant::now().as_micros();

        match handler.handle(source, now_us, mode, &mut green) {
            Some(action) => log_action(action),
            None => debug!("{} ignored (debounce)", source.label()),
        }
    }
}

/// Diagnostic lines for an accepted press.
fn log_action(action: ButtonAction) {
    info!("{} pressed", action.source().label());

    match action {
        ButtonAction::GreenLedToggled {
            green_led_on,
            border_style,
        } => {
            info!("Green LED: {}", if green_led_on { "ON" } else { "OFF" });
            info!("Border style: {}", border_style.label());
        }
        ButtonAction::PwmLedsToggled { enabled } => {
            info!("PWM LEDs: {}", if enabled { "enabled" } else { "disabled" });
        }
    }
}
