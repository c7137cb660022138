//! Joystick reading to display coordinate mapping.
//!
//! The joystick is mounted rotated relative to the panel, so the display's
//! horizontal position follows the joystick's Y channel and the vertical
//! position follows its X channel.

use embedded_graphics::prelude::Point;

use crate::config::{ADC_CENTER, ADC_MAX, MARKER_X_RANGE, MARKER_Y_RANGE};

/// One pair of raw 12-bit readings, X from ADC0 and Y from ADC1.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct AnalogSample {
    pub x: u16,
    pub y: u16,
}

impl AnalogSample {
    /// Reading of a joystick at rest.
    pub const CENTER: Self = Self::new(ADC_CENTER, ADC_CENTER);

    pub const fn new(
        x: u16,
        y: u16,
    ) -> Self {
        Self { x, y }
    }

    /// Both readings limited to the ADC's 12-bit range.
    #[inline]
    pub const fn clamped(self) -> Self {
        Self {
            x: if self.x > ADC_MAX { ADC_MAX } else { self.x },
            y: if self.y > ADC_MAX { ADC_MAX } else { self.y },
        }
    }
}

/// Top-left corner of the marker in pixel space.
///
/// `x` stays within `0..=MARKER_X_RANGE` and `y` within `0..=MARKER_Y_RANGE`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DisplayPosition {
    pub x: u8,
    pub y: u8,
}

impl DisplayPosition {
    #[inline]
    pub const fn as_point(self) -> Point { Point::new(self.x as i32, self.y as i32) }
}

/// Rescale a joystick sample onto the marker's drawable range.
///
/// Uses floor division, so the full-scale reading 4095 lands exactly on the
/// range limit and nothing beyond it is reachable.
pub const fn map_to_display(sample: AnalogSample) -> DisplayPosition {
    let sample = sample.clamped();
    DisplayPosition {
        x: (sample.y as u32 * MARKER_X_RANGE / ADC_MAX as u32) as u8,
        y: (sample.x as u32 * MARKER_Y_RANGE / ADC_MAX as u32) as u8,
    }
}
