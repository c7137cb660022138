//! Stand-ins for the board's joystick and PWM channels.

use std::convert::Infallible;

use embedded_graphics::prelude::Point;
use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use joystick_pico::config::{ADC_MAX, MARKER_X_RANGE, MARKER_Y_RANGE, PWM_WRAP};
use joystick_pico::control::JoystickAxes;
use joystick_pico::mapping::AnalogSample;

// =============================================================================
// Joystick
// =============================================================================

/// Joystick driven by the mouse pointer.
///
/// The pointer position is converted back into raw ADC readings, so the
/// marker follows the pointer through the same mapping the firmware uses.
pub struct MouseJoystick {
    sample: AnalogSample,
}

impl MouseJoystick {
    pub fn new() -> Self {
        Self {
            sample: AnalogSample::CENTER,
        }
    }

    /// Update from a pointer position in panel pixels.
    pub fn track(
        &mut self,
        point: Point,
    ) {
        // Horizontal position is driven by the Y axis, vertical by X
        self.sample = AnalogSample::new(to_raw(point.y, MARKER_Y_RANGE), to_raw(point.x, MARKER_X_RANGE));
    }
}

/// Pixel coordinate -> raw ADC reading, clamped to the ADC range.
fn to_raw(
    coord: i32,
    range: u32,
) -> u16 {
    let coord = coord.clamp(0, range as i32) as u32;
    (coord * u32::from(ADC_MAX) / range) as u16
}

impl JoystickAxes for MouseJoystick {
    async fn read_axes(&mut self) -> AnalogSample { self.sample }
}

// =============================================================================
// PWM
// =============================================================================

/// PWM channel that just remembers its duty level.
pub struct SimPwm {
    duty: u16,
}

impl SimPwm {
    pub fn new() -> Self { Self { duty: 0 } }

    pub fn duty(&self) -> u16 { self.duty }
}

impl ErrorType for SimPwm {
    type Error = Infallible;
}

impl SetDutyCycle for SimPwm {
    fn max_duty_cycle(&self) -> u16 { PWM_WRAP }

    fn set_duty_cycle(
        &mut self,
        duty: u16,
    ) -> Result<(), Self::Error> {
        self.duty = duty.min(PWM_WRAP);
        Ok(())
    }
}

/// Duty level as a percentage of full scale.
pub fn percent(duty: u16) -> u32 { u32::from(duty) * 100 / u32::from(PWM_WRAP) }
