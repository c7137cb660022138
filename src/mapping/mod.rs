//! Pure conversions from raw joystick readings to outputs.
//!
//! - `coordinates`: ADC pair -> marker position on the display
//! - `intensity`: ADC pair -> blue/red PWM duty levels

mod coordinates;
mod intensity;

pub use coordinates::{AnalogSample, DisplayPosition, map_to_display};
pub use intensity::{LedIntensity, map_to_intensity};
