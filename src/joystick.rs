//! Two-axis analog joystick on ADC0/ADC1.

use defmt::warn;
use embassy_rp::adc::{Adc, Async, Channel};
use joystick_pico::control::JoystickAxes;
use joystick_pico::mapping::AnalogSample;

/// Joystick read through the async ADC driver.
pub struct AdcJoystick {
    adc: Adc<'static, Async>,
    x: Channel<'static>,
    y: Channel<'static>,
    last: AnalogSample,
}

impl AdcJoystick {
    pub fn new(
        adc: Adc<'static, Async>,
        x: Channel<'static>,
        y: Channel<'static>,
    ) -> Self {
        Self {
            adc,
            x,
            y,
            last: AnalogSample::CENTER,
        }
    }
}

impl JoystickAxes for AdcJoystick {
    async fn read_axes(&mut self) -> AnalogSample {
        let x = match self.adc.read(&mut self.x).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Joystick X read failed: {}", e);
                self.last.x
            }
        };
        let y = match self.adc.read(&mut self.y).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Joystick Y read failed: {}", e);
                self.last.y
            }
        };

        self.last = AnalogSample::new(x, y);
        self.last
    }
}
