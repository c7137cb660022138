//! Application configuration.
//!
//! - `layout`: Display surface, marker and border geometry
//! - `hardware`: ADC/PWM ranges, bus settings, timing and button lines

pub mod hardware;
pub mod layout;

// Re-export at config level for convenience
pub use hardware::{
    ADC_CENTER,
    ADC_MAX,
    BUTTON_A_GPIO,
    DEBOUNCE_WINDOW_US,
    DISPLAY_I2C_ADDRESS,
    I2C_FREQUENCY_HZ,
    JOYSTICK_BUTTON_GPIO,
    LOOP_PERIOD_MS,
    PWM_WRAP,
};
pub use layout::{
    BORDER_HEIGHT,
    BORDER_WIDTH,
    MARKER_SIZE,
    MARKER_X_RANGE,
    MARKER_Y_RANGE,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
