//! Joystick reading to LED intensity mapping.
//!
//! Brightness grows with deflection from the resting center in either
//! direction: blue follows the X axis, red follows the Y axis.

use super::AnalogSample;
use crate::config::ADC_CENTER;

/// Duty levels for the two analog LEDs.
///
/// Levels are not clamped to the PWM wrap value: full deflection towards
/// zero produces 4096, one above the wrap.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct LedIntensity {
    pub blue: u16,
    pub red: u16,
}

impl LedIntensity {
    /// Both LEDs dark.
    pub const OFF: Self = Self { blue: 0, red: 0 };
}

/// Compute LED duty levels for a sample.
///
/// Returns [`LedIntensity::OFF`] whenever the PWM LEDs are disabled.
pub const fn map_to_intensity(
    enabled: bool,
    sample: AnalogSample,
) -> LedIntensity {
    if !enabled {
        return LedIntensity::OFF;
    }

    let sample = sample.clamped();
    LedIntensity {
        blue: deflection_level(sample.x),
        red: deflection_level(sample.y),
    }
}

/// `|raw - center| * 2`
#[inline]
const fn deflection_level(raw: u16) -> u16 { raw.abs_diff(ADC_CENTER) * 2 }
