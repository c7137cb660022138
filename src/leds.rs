//! PWM LED outputs.
//!
//! Blue and red are analog-intensity LEDs driven every loop iteration; green
//! is switched fully on or off by the joystick button.

use embedded_hal::pwm::SetDutyCycle;

use crate::config::PWM_WRAP;
use crate::mapping::LedIntensity;

/// Write a duty level, saturating at the channel maximum.
///
/// A level above the wrap value keeps the output high for the whole period
/// on the PWM counter, so saturating reproduces that instead of letting the
/// driver reject the write. Write errors are ignored.
pub fn apply_level<C: SetDutyCycle>(
    channel: &mut C,
    level: u16,
) {
    let duty = level.min(channel.max_duty_cycle());
    let _ = channel.set_duty_cycle(duty);
}

/// Switch the green LED fully on (`PWM_WRAP`) or off.
pub fn set_green_led<C: SetDutyCycle>(
    channel: &mut C,
    on: bool,
) {
    apply_level(channel, if on { PWM_WRAP } else { 0 });
}

/// The blue/red pair that follows joystick deflection.
pub struct IntensityLeds<B, R> {
    blue: B,
    red: R,
    current: LedIntensity,
}

impl<B, R> IntensityLeds<B, R>
where
    B: SetDutyCycle,
    R: SetDutyCycle,
{
    /// Take ownership of both channels and switch them off.
    pub fn new(
        blue: B,
        red: R,
    ) -> Self {
        let mut leds = Self {
            blue,
            red,
            current: LedIntensity::OFF,
        };
        leds.apply(LedIntensity::OFF);
        leds
    }

    /// Drive both channels.
    pub fn apply(
        &mut self,
        intensity: LedIntensity,
    ) {
        apply_level(&mut self.blue, intensity.blue);
        apply_level(&mut self.red, intensity.red);
        self.current = intensity;
    }

    /// Last levels requested (before saturation).
    pub const fn current(&self) -> LedIntensity { self.current }

    /// Give back the channels.
    pub fn release(self) -> (B, R) { (self.blue, self.red) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakePwm;

    #[test]
    fn test_apply_level_in_range() {
        let mut pwm = FakePwm::new(PWM_WRAP);
        apply_level(&mut pwm, 1234);
        assert_eq!(pwm.duty(), 1234);
    }

    #[test]
    fn test_apply_level_saturates() {
        let mut pwm = FakePwm::new(PWM_WRAP);
        apply_level(&mut pwm, 4096);
        assert_eq!(pwm.duty(), PWM_WRAP);
        assert_eq!(pwm.rejected(), 0);
    }

    #[test]
    fn test_green_full_scale_and_off() {
        let mut pwm = FakePwm::new(PWM_WRAP);
        set_green_led(&mut pwm, true);
        assert_eq!(pwm.duty(), 4095);
        set_green_led(&mut pwm, false);
        assert_eq!(pwm.duty(), 0);
    }

    #[test]
    fn test_new_switches_off() {
        let mut blue = FakePwm::new(PWM_WRAP);
        let mut red = FakePwm::new(PWM_WRAP);
        blue.set_duty_cycle(100).ok();
        red.set_duty_cycle(200).ok();

        let leds = IntensityLeds::new(blue, red);
        assert_eq!(leds.current(), LedIntensity::OFF);

        let (blue, red) = leds.release();
        assert_eq!(blue.duty(), 0);
        assert_eq!(red.duty(), 0);
    }

    #[test]
    fn test_apply_drives_each_channel() {
        let mut leds = IntensityLeds::new(FakePwm::new(PWM_WRAP), FakePwm::new(PWM_WRAP));
        leds.apply(LedIntensity { blue: 4096, red: 10 });
        assert_eq!(leds.current(), LedIntensity { blue: 4096, red: 10 });

        let (blue, red) = leds.release();
        assert_eq!(blue.duty(), PWM_WRAP);
        assert_eq!(red.duty(), 10);
    }
}
