//! Button event handling.
//!
//! Falling edges from the joystick button and button A arrive here. Each
//! event passes the shared [`DebounceGate`] first; accepted events then
//! mutate [`SharedMode`] and report what changed so the caller can log it.

use embedded_hal::pwm::SetDutyCycle;

use super::{BorderStyle, DebounceGate, SharedMode};
use crate::config::{BUTTON_A_GPIO, JOYSTICK_BUTTON_GPIO};
use crate::leds::set_green_led;

/// Origin of a falling-edge event.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSource {
    /// Push switch under the joystick.
    JoystickButton,
    /// Button A.
    ButtonA,
    /// Any other line. Always ignored.
    Unknown,
}

impl ButtonSource {
    /// Map a raw GPIO line number to its button.
    pub const fn from_gpio(gpio: u8) -> Self {
        match gpio {
            JOYSTICK_BUTTON_GPIO => Self::JoystickButton,
            BUTTON_A_GPIO => Self::ButtonA,
            _ => Self::Unknown,
        }
    }

    /// Get display label for the source.
    pub const fn label(self) -> &'static str {
        match self {
            Self::JoystickButton => "Joystick button",
            Self::ButtonA => "Button A",
            Self::Unknown => "Unknown",
        }
    }
}

/// Effect of an accepted button event.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonAction {
    /// Joystick button: green LED flipped and border style advanced.
    GreenLedToggled {
        green_led_on: bool,
        border_style: BorderStyle,
    },
    /// Button A: PWM LEDs enabled or disabled.
    PwmLedsToggled { enabled: bool },
}

impl ButtonAction {
    /// Button that produced this action.
    pub const fn source(&self) -> ButtonSource {
        match self {
            Self::GreenLedToggled { .. } => ButtonSource::JoystickButton,
            Self::PwmLedsToggled { .. } => ButtonSource::ButtonA,
        }
    }
}

/// Debounced dispatcher for both buttons.
///
/// Runs in the edge-event context and only performs flag stores and a single
/// PWM register write, so it completes in microseconds.
pub struct ButtonHandler {
    gate: DebounceGate,
}

impl ButtonHandler {
    pub const fn new() -> Self { Self::with_gate(DebounceGate::new()) }

    pub const fn with_gate(gate: DebounceGate) -> Self { Self { gate } }

    /// Handle one falling edge at `now_us` (microseconds since boot).
    ///
    /// Returns `None` when the event is ignored: unknown sources never reach
    /// the gate, and known sources inside the debounce window are dropped
    /// without touching any state.
    pub fn handle<G: SetDutyCycle>(
        &mut self,
        source: ButtonSource,
        now_us: u64,
        mode: &SharedMode,
        green: &mut G,
    ) -> Option<ButtonAction> {
        if source == ButtonSource::Unknown || !self.gate.try_accept(now_us) {
            return None;
        }

        match source {
            ButtonSource::JoystickButton => {
                let green_led_on = mode.toggle_green_led();
                set_green_led(green, green_led_on);
                let border_style = mode.advance_border_style();
                Some(ButtonAction::GreenLedToggled {
                    green_led_on,
                    border_style,
                })
            }
            ButtonSource::ButtonA => Some(ButtonAction::PwmLedsToggled {
                enabled: mode.toggle_pwm_leds(),
            }),
            ButtonSource::Unknown => None,
        }
    }

    /// The gate shared by all sources.
    pub const fn gate(&self) -> &DebounceGate { &self.gate }
}

impl Default for ButtonHandler {
    fn default() -> Self { Self::new() }
}
